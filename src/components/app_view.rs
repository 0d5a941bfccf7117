//! Routes of the player shell.

use dioxus::prelude::*;

use crate::components::{AppShell, DebugPlayer, Player};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum AppView {
    #[layout(AppShell)]
        #[route("/")]
        PlayerView {},
        #[route("/debug")]
        DebugPlayerView {},
}

pub fn view_label(view: &AppView) -> &'static str {
    match view {
        AppView::PlayerView {} => "Player",
        AppView::DebugPlayerView {} => "Debug",
    }
}

#[component]
fn PlayerView() -> Element {
    rsx! {
        Player {}
    }
}

#[component]
fn DebugPlayerView() -> Element {
    rsx! {
        DebugPlayer {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_map_to_paths() {
        assert_eq!(AppView::PlayerView {}.to_string(), "/");
        assert_eq!(AppView::DebugPlayerView {}.to_string(), "/debug");
        assert_eq!(
            "/debug".parse::<AppView>().ok(),
            Some(AppView::DebugPlayerView {})
        );
    }

    #[test]
    fn labels_are_short() {
        assert_eq!(view_label(&AppView::PlayerView {}), "Player");
        assert_eq!(view_label(&AppView::DebugPlayerView {}), "Debug");
    }
}
