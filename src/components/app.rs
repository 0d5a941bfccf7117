use crate::components::{view_label, AppView};
use crate::config::PlayerConfig;
use dioxus::prelude::*;

/// Layout shared by both routes: a small switcher above the player.
#[component]
pub fn AppShell() -> Element {
    let config = use_context_provider(PlayerConfig::resolve);

    use_hook(move || {
        tracing::info!(
            public_base = %config.public_base,
            log_capacity = config.log_capacity,
            "miniplayer ready"
        );
    });

    let links = [AppView::PlayerView {}, AppView::DebugPlayerView {}]
        .map(|view| (view_label(&view), view));

    rsx! {
        div { class: "app-shell",
            nav { class: "view-switcher",
                for (label, view) in links {
                    Link {
                        key: "{label}",
                        to: view,
                        class: "view-link",
                        active_class: "active",
                        "{label}"
                    }
                }
            }
            main { class: "app-main", Outlet::<AppView> {} }
        }
    }
}
