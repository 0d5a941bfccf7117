use crate::api::PLAYLIST;
use crate::components::{Icon, IconKind};
use dioxus::prelude::*;

mod controls;
mod debug_panel;

pub use controls::PlaybackController;
use controls::{use_playback_controller, NextButton, PlayPauseButton};
use debug_panel::{EventLogPanel, ProbePanel, StatePanel};

/// Compact player: artist/title, next and play/pause. Expands on hover.
#[component]
pub fn Player() -> Element {
    let controller = use_playback_controller(false);
    use_context_provider(|| controller.clone());
    let mut expanded = use_signal(|| false);

    let index = controller.state.read().current_index;
    let track = controller.track(index);
    let src = controller.track_url(&track);

    let on_ended = {
        let controller = controller.clone();
        move |_| {
            controller.next();
        }
    };

    rsx! {
        div {
            class: if expanded() { "player expanded" } else { "player" },
            onmouseenter: move |_| expanded.set(true),
            onmouseleave: move |_| expanded.set(false),
            div { class: "song-info",
                Icon { kind: IconKind::Music, class: "icon-sm song-icon".to_string() }
                p { class: "song-artist", "{track.artist}" }
                p { class: "song-title", "{track.title}" }
            }
            div { class: "controls",
                NextButton {}
                PlayPauseButton {}
                audio {
                    id: "{controller.audio_id}",
                    src: "{src}",
                    preload: "metadata",
                    onended: on_ended,
                }
            }
        }
    }
}

/// Instrumented player: the compact controls plus event log, fetch probe and
/// technical state dump.
#[component]
pub fn DebugPlayer() -> Element {
    let controller = use_playback_controller(true);
    use_context_provider(|| controller.clone());

    let index = controller.state.read().current_index;
    let track = controller.track(index);
    let src = controller.track_url(&track);
    let position = index + 1;
    let total = PLAYLIST.len();

    let on_ended = {
        let controller = controller.clone();
        move |_| {
            controller.next();
        }
    };

    rsx! {
        div { class: "player debug expanded",
            div { class: "song-info",
                Icon { kind: IconKind::Music, class: "icon-sm song-icon".to_string() }
                p { class: "song-artist", "{track.artist}" }
                p { class: "song-title", "{track.title}" }
                p { class: "song-index", "Track {position} / {total}" }
            }
            div { class: "controls",
                NextButton {}
                PlayPauseButton {}
                audio {
                    id: "{controller.audio_id}",
                    src: "{src}",
                    preload: "metadata",
                    onended: on_ended,
                }
            }
            div { class: "debug-tools",
                ProbePanel {}
                StatePanel {}
            }
            EventLogPanel {}
        }
    }
}
