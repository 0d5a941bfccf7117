//! Developer-facing diagnostic channel. On the web build `tracing` output is
//! routed to the browser console by the Dioxus logger.

use crate::components::audio_manager::{LogEntry, LogLevel};

#[inline]
pub fn mirror(entry: &LogEntry) {
    match entry.level {
        LogLevel::Info => {
            tracing::info!(target: "miniplayer::media", "[{}] {}", entry.timestamp, entry.message)
        }
        LogLevel::Warn => {
            tracing::warn!(target: "miniplayer::media", "[{}] {}", entry.timestamp, entry.message)
        }
        LogLevel::Error => {
            tracing::error!(target: "miniplayer::media", "[{}] {}", entry.timestamp, entry.message)
        }
    }
}

/// Report a failure that is handled locally and never reaches the UI.
#[inline]
pub fn report_absorbed(scope: &str, details: &str) {
    if details.trim().is_empty() {
        tracing::debug!(target: "miniplayer::media", "{scope}");
    } else {
        tracing::debug!(target: "miniplayer::media", "{scope} | {details}");
    }
}
