use crate::api::*;
use crate::components::audio_manager::{inspect, LogEntry, LogLevel};
use crate::components::{Icon, IconKind};
use dioxus::prelude::*;

use super::PlaybackController;

#[derive(Clone, PartialEq)]
enum ProbeStatus {
    Idle,
    Pending(String),
    Done(ProbeResult),
}

/// Fetch test - one no-cache GET of the current track, last result wins
#[component]
pub(super) fn ProbePanel() -> Element {
    let controller = use_context::<PlaybackController>();
    let mut status = use_signal(|| ProbeStatus::Idle);

    let on_probe = {
        let controller = controller.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            let url = controller.current_url();
            let log = controller.log;
            if let Some(mut log) = log {
                log.write().info(format!("fetch test started: {url}"));
            }
            status.set(ProbeStatus::Pending(url.clone()));
            spawn(async move {
                let result = probe_url(&url).await;
                if let Some(mut log) = log {
                    let level = if result.ok {
                        LogLevel::Info
                    } else {
                        LogLevel::Error
                    };
                    log.write().push(LogEntry::now(level, result.summary()));
                }
                status.set(ProbeStatus::Done(result));
            });
        }
    };

    let (line, line_class) = match status() {
        ProbeStatus::Idle => ("No fetch test run yet".to_string(), "probe-line"),
        ProbeStatus::Pending(url) => (format!("Fetching {url}..."), "probe-line pending"),
        ProbeStatus::Done(result) => (
            result.summary(),
            if result.ok {
                "probe-line ok"
            } else {
                "probe-line failed"
            },
        ),
    };

    rsx! {
        div { class: "debug-tool",
            button {
                r#type: "button",
                class: "btn-debug",
                onclick: on_probe,
                Icon { kind: IconKind::Activity, class: "icon-sm".to_string() }
                "Fetch test"
            }
            p { class: "{line_class}", "{line}" }
        }
    }
}

/// Technical state dump - synchronous read of the media element
#[component]
pub(super) fn StatePanel() -> Element {
    let controller = use_context::<PlaybackController>();
    let mut snapshot = use_signal(|| None::<TechnicalState>);

    let on_dump = {
        let controller = controller.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            let state = inspect(controller.element().as_ref());
            if let Some(mut log) = controller.log {
                log.write().info(format!(
                    "state dump: attached={} readyState={} paused={}",
                    state.attached,
                    state
                        .ready_state
                        .map(|r| r.to_string())
                        .unwrap_or_else(|| "n/a".to_string()),
                    state
                        .paused
                        .map(|p| p.to_string())
                        .unwrap_or_else(|| "n/a".to_string()),
                ));
            }
            snapshot.set(Some(state));
        }
    };

    let dump = snapshot().map(|state| state.to_pretty_json());

    rsx! {
        div { class: "debug-tool",
            button {
                r#type: "button",
                class: "btn-debug",
                onclick: on_dump,
                Icon { kind: IconKind::Info, class: "icon-sm".to_string() }
                "Technical state"
            }
            if let Some(json) = dump {
                pre { class: "state-dump", "{json}" }
            }
        }
    }
}

/// Scrollable event log, newest first
#[component]
pub(super) fn EventLogPanel() -> Element {
    let controller = use_context::<PlaybackController>();
    let Some(log) = controller.log else {
        return rsx! {};
    };
    let (rows, capacity, is_empty) = {
        let log = log.read();
        let rows: Vec<(u64, &'static str, String, String)> = log
            .entries()
            .map(|entry| {
                (
                    entry.seq,
                    entry.level.css_class(),
                    entry.timestamp.clone(),
                    entry.message.clone(),
                )
            })
            .collect();
        (rows, log.capacity(), log.is_empty())
    };
    let count = rows.len();

    rsx! {
        div { class: "event-log",
            div { class: "event-log-header", "Media events ({count}/{capacity})" }
            if is_empty {
                p { class: "event-log-empty", "No events yet" }
            }
            ul {
                for (seq, level_class, timestamp, message) in rows {
                    li { key: "{seq}", class: level_class,
                        span { class: "log-time", "{timestamp}" }
                        span { class: "log-message", "{message}" }
                    }
                }
            }
        }
    }
}
