use std::cell::RefCell;
use std::rc::Rc;

use crate::api::*;
use crate::components::audio_manager::{
    find_media_element, media_element_id, request_pause, request_play, EventLog, ListenerSet,
    LogEntry, LogLevel, MediaElement, PlaybackState, RebindReport, SignalHandler, ToggleIntent,
    TrackChange,
};
use crate::components::{Icon, IconKind};
use crate::config::PlayerConfig;
use crate::diagnostics::report_absorbed;
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::prelude::*;

/// Per-instance playback handle shared with the control buttons via context.
#[derive(Clone)]
pub struct PlaybackController {
    pub state: Signal<PlaybackState>,
    pub audio_id: String,
    public_base: String,
    /// Present only on the instrumented player.
    pub log: Option<Signal<EventLog>>,
    listeners: Option<Rc<RefCell<ListenerSet<MediaElement>>>>,
}

impl PlaybackController {
    pub fn element(&self) -> Option<MediaElement> {
        find_media_element(&self.audio_id)
    }

    pub fn track(&self, index: usize) -> Track {
        PLAYLIST[index % PLAYLIST.len()].clone()
    }

    pub fn current_track(&self) -> Track {
        self.track(self.state.peek().current_index)
    }

    pub fn track_url(&self, track: &Track) -> String {
        track.url(&self.public_base)
    }

    pub fn current_url(&self) -> String {
        self.track_url(&self.current_track())
    }

    fn note(&self, level: LogLevel, message: &str) {
        if let Some(mut log) = self.log {
            log.write().push(LogEntry::now(level, message));
        }
    }

    /// Play/pause. A missing element leaves everything untouched.
    pub fn toggle(&self) {
        let mut state = self.state;
        let audio = self.element();
        let Some(intent) = state.write().begin_toggle(audio.is_some()) else {
            self.note(LogLevel::Warn, "toggle ignored: media element not mounted");
            return;
        };
        let Some(audio) = audio else {
            return;
        };

        match intent {
            ToggleIntent::Stop => {
                request_pause(&audio);
                self.note(LogLevel::Info, "pause() requested");
            }
            ToggleIntent::Start => {
                self.note(LogLevel::Info, "play() requested");
                let log = self.log;
                spawn(async move {
                    let outcome = request_play(&audio).await;
                    state.write().finish_play(&outcome);
                    match outcome {
                        Ok(()) => {
                            if let Some(mut log) = log {
                                log.write().info("play() resolved");
                            }
                        }
                        Err(err) => {
                            tracing::warn!("Browser blocked playback: {err}");
                            if let Some(mut log) = log {
                                log.write().warn(format!("play() rejected: {err}"));
                            }
                        }
                    }
                });
            }
        }
    }

    /// Advance to the next track without starting playback.
    pub fn next(&self) -> TrackChange {
        let mut state = self.state;
        let change = state.write().advance();
        tracing::debug!(
            from = change.from,
            to = change.to,
            resume = change.resume,
            "next track"
        );
        change
    }

    /// Attach a fresh listener set for the current source, removing the old one.
    fn rebind_listeners(&self) {
        let (Some(listeners), Some(mut log)) = (self.listeners.clone(), self.log) else {
            return;
        };
        let Some(audio) = self.element() else {
            log.write().warn(LISTENERS_UNMOUNTED);
            return;
        };

        let runtime = Runtime::current();
        let handler: SignalHandler = Rc::new(move |signal, detail| {
            let _guard = RuntimeGuard::new(runtime.clone());
            let mut log = log;
            log.write()
                .push(LogEntry::now(signal.level(), signal.message(&detail)));
        });

        let report = listeners.borrow_mut().rebind(audio, handler);
        let url = self.current_url();
        let mut log = log.write();
        for line in rebind_messages(report, &url) {
            log.info(line);
        }
    }

    /// Reaction to an index change: re-instrument, log, and resume if playback
    /// was running when the change happened.
    fn on_track_changed(&self, from: usize, to: usize) {
        self.rebind_listeners();
        if let Some(mut log) = self.log {
            let old = self.track_url(&self.track(from));
            let new = self.track_url(&self.track(to));
            log.write().info(track_change_message(from, to, &old, &new));
        }

        let mut state = self.state;
        if !state.write().take_resume() {
            return;
        }
        let Some(audio) = self.element() else {
            return;
        };
        spawn(async move {
            if let Err(err) = request_play(&audio).await {
                report_absorbed("resume after track change", &err.to_string());
            }
        });
    }
}

const LISTENERS_UNMOUNTED: &str = "media element not mounted; listeners not attached";

/// Log lines for one rebind: the removal of the old set, if there was one,
/// then the attachment of the new one.
fn rebind_messages(report: RebindReport, url: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(2);
    if report.removed > 0 {
        lines.push(format!("removed {} media listeners", report.removed));
    }
    lines.push(format!(
        "attached {} media listeners for {url}",
        report.attached
    ));
    lines
}

fn track_change_message(from: usize, to: usize, old_url: &str, new_url: &str) -> String {
    format!("track index {from} -> {to}: {old_url} -> {new_url}")
}

/// Create the playback controller for one player instance and wire the
/// track-change reaction. `instrumented` adds the event log and listener set.
pub(super) fn use_playback_controller(instrumented: bool) -> PlaybackController {
    let config = use_context::<PlayerConfig>();
    let state = use_signal(|| PlaybackState::new(PLAYLIST.len()));
    let audio_id = use_hook(|| media_element_id(&uuid::Uuid::new_v4()));
    let log_capacity = config.log_capacity;
    let log = use_hook(move || {
        instrumented.then(|| Signal::new(EventLog::with_capacity(log_capacity)))
    });
    let listeners = use_hook(move || {
        instrumented.then(|| Rc::new(RefCell::new(ListenerSet::<MediaElement>::new())))
    });

    let controller = PlaybackController {
        state,
        audio_id,
        public_base: config.public_base.clone(),
        log,
        listeners: listeners.clone(),
    };

    let current_index = use_memo(move || state.read().current_index);
    let mut last_index = use_signal(|| None::<usize>);
    {
        let controller = controller.clone();
        use_effect(move || {
            let index = current_index();
            let previous = *last_index.peek();
            if previous == Some(index) {
                return;
            }
            last_index.set(Some(index));
            match previous {
                Some(from) => controller.on_track_changed(from, index),
                None => controller.rebind_listeners(),
            }
        });
    }

    use_drop(move || {
        if let Some(listeners) = &listeners {
            listeners.borrow_mut().detach_all();
        }
    });

    controller
}

/// Play/pause button - reads the controller from context
#[component]
pub(super) fn PlayPauseButton() -> Element {
    let controller = use_context::<PlaybackController>();
    let playing = controller.state.read().is_playing;

    rsx! {
        button {
            r#type: "button",
            class: "btn-control",
            title: if playing { "Pause" } else { "Play" },
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                controller.toggle();
            },
            if playing {
                Icon { kind: IconKind::Pause, class: "icon".to_string() }
            } else {
                Icon { kind: IconKind::Play, class: "icon".to_string() }
            }
        }
    }
}

/// Next button - advances circularly, never starts playback by itself
#[component]
pub(super) fn NextButton() -> Element {
    let controller = use_context::<PlaybackController>();

    rsx! {
        button {
            r#type: "button",
            class: "btn-control",
            title: "Next track",
            onclick: move |evt: MouseEvent| {
                evt.stop_propagation();
                controller.next();
            },
            Icon { kind: IconKind::Next, class: "icon".to_string() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::core::VirtualDom;

    thread_local! {
        static MOUNTED: RefCell<Option<PlaybackController>> = const { RefCell::new(None) };
    }

    #[component]
    fn Harness(instrumented: bool) -> Element {
        use_context_provider(PlayerConfig::default);
        rsx! { Capture { instrumented } }
    }

    #[component]
    fn Capture(instrumented: bool) -> Element {
        let controller = use_playback_controller(instrumented);
        MOUNTED.with(|slot| *slot.borrow_mut() = Some(controller));
        rsx! {}
    }

    fn mount(instrumented: bool) -> (VirtualDom, PlaybackController) {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { instrumented });
        dom.rebuild_in_place();
        let controller = MOUNTED
            .with(|slot| slot.borrow_mut().take())
            .expect("controller was created during the first render");
        (dom, controller)
    }

    fn messages(controller: &PlaybackController) -> Vec<String> {
        controller
            .log
            .map(|log| log.peek().entries().map(|e| e.message.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn first_bind_reports_only_the_attachment() {
        let report = RebindReport {
            removed: 0,
            attached: 12,
        };
        assert_eq!(
            rebind_messages(report, "/music/a.mp3"),
            vec!["attached 12 media listeners for /music/a.mp3".to_string()]
        );
    }

    #[test]
    fn rebind_reports_removal_before_attachment() {
        let report = RebindReport {
            removed: 12,
            attached: 12,
        };
        assert_eq!(
            rebind_messages(report, "/music/b.mp3"),
            vec![
                "removed 12 media listeners".to_string(),
                "attached 12 media listeners for /music/b.mp3".to_string(),
            ]
        );
    }

    #[test]
    fn track_change_line_names_both_sources() {
        let from = PLAYLIST[2].url("/");
        let to = PLAYLIST[0].url("/");
        assert_eq!(
            track_change_message(2, 0, &from, &to),
            "track index 2 -> 0: /music/Junior%20H%20-%20SE%20AMERITA.mp3 -> \
             /music/Junior%20H%20-%20LA%20CHERRY.mp3"
        );
    }

    #[test]
    fn minimal_player_has_no_log_or_listener_set() {
        let (dom, controller) = mount(false);
        assert!(controller.log.is_none());
        assert!(controller.listeners.is_none());

        dom.in_runtime(|| controller.on_track_changed(0, 1));
        assert!(messages(&controller).is_empty());
    }

    #[test]
    fn instrumented_player_owns_log_and_listener_set() {
        let (dom, controller) = mount(true);
        assert!(controller.listeners.is_some());
        let capacity = dom.in_runtime(|| controller.log.map(|log| log.peek().capacity()));
        assert_eq!(capacity, Some(PlayerConfig::default().log_capacity));
    }

    #[test]
    fn track_change_logs_old_and_new_source() {
        let (dom, controller) = mount(true);

        let logged = dom.in_runtime(|| {
            let change = controller.next();
            assert_eq!((change.from, change.to), (0, 1));
            controller.on_track_changed(change.from, change.to);
            messages(&controller)
        });

        assert_eq!(
            logged.into_iter().take(2).collect::<Vec<_>>(),
            vec![
                "track index 0 -> 1: /music/Junior%20H%20-%20LA%20CHERRY.mp3 -> \
                 /music/Junior%20H%20-%20ROCKSTAR.mp3"
                    .to_string(),
                LISTENERS_UNMOUNTED.to_string(),
            ]
        );
        assert_eq!(dom.in_runtime(|| controller.state.peek().current_index), 1);
    }
}
