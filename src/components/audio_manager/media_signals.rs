// Static table of the media lifecycle signals the debug player instruments.
use crate::api::models::format_duration;

use super::LogLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaSignal {
    Play,
    Pause,
    Playing,
    CanPlay,
    CanPlayThrough,
    LoadedData,
    LoadedMetadata,
    Ended,
    Error,
    Stalled,
    Waiting,
    Abort,
}

/// Every instrumented signal, in attach order. Detaching walks the same table.
pub const MEDIA_SIGNALS: [MediaSignal; 12] = [
    MediaSignal::Play,
    MediaSignal::Pause,
    MediaSignal::Playing,
    MediaSignal::CanPlay,
    MediaSignal::CanPlayThrough,
    MediaSignal::LoadedData,
    MediaSignal::LoadedMetadata,
    MediaSignal::Ended,
    MediaSignal::Error,
    MediaSignal::Stalled,
    MediaSignal::Waiting,
    MediaSignal::Abort,
];

/// `MediaError` fields, when the element carries one.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaErrorInfo {
    pub code: u16,
    pub message: String,
}

/// Element properties read at the moment a signal fires.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalDetail {
    pub duration: f64,
    pub error: Option<MediaErrorInfo>,
}

impl Default for SignalDetail {
    fn default() -> Self {
        Self {
            duration: f64::NAN,
            error: None,
        }
    }
}

impl MediaSignal {
    /// DOM event name.
    pub fn event_name(self) -> &'static str {
        match self {
            MediaSignal::Play => "play",
            MediaSignal::Pause => "pause",
            MediaSignal::Playing => "playing",
            MediaSignal::CanPlay => "canplay",
            MediaSignal::CanPlayThrough => "canplaythrough",
            MediaSignal::LoadedData => "loadeddata",
            MediaSignal::LoadedMetadata => "loadedmetadata",
            MediaSignal::Ended => "ended",
            MediaSignal::Error => "error",
            MediaSignal::Stalled => "stalled",
            MediaSignal::Waiting => "waiting",
            MediaSignal::Abort => "abort",
        }
    }

    pub fn level(self) -> LogLevel {
        match self {
            MediaSignal::Error => LogLevel::Error,
            MediaSignal::Stalled | MediaSignal::Waiting | MediaSignal::Abort => LogLevel::Warn,
            _ => LogLevel::Info,
        }
    }

    /// Human-readable log line for one occurrence of this signal.
    pub fn message(self, detail: &SignalDetail) -> String {
        match self {
            MediaSignal::Play => "play: playback requested".to_string(),
            MediaSignal::Pause => "pause: playback paused".to_string(),
            MediaSignal::Playing => "playing: playback is progressing".to_string(),
            MediaSignal::CanPlay => "canplay: enough data to begin playback".to_string(),
            MediaSignal::CanPlayThrough => {
                "canplaythrough: can play to the end without buffering".to_string()
            }
            MediaSignal::LoadedData => "loadeddata: first frame loaded".to_string(),
            MediaSignal::LoadedMetadata => {
                if detail.duration.is_finite() {
                    format!(
                        "loadedmetadata: duration {} ({:.2}s)",
                        format_duration(detail.duration),
                        detail.duration
                    )
                } else {
                    format!("loadedmetadata: duration {}", detail.duration)
                }
            }
            MediaSignal::Ended => "ended: track finished".to_string(),
            MediaSignal::Error => match &detail.error {
                Some(err) => format!(
                    "error: code {} ({}) {}",
                    err.code,
                    media_error_label(err.code),
                    if err.message.trim().is_empty() {
                        "(no message)"
                    } else {
                        err.message.as_str()
                    }
                ),
                None => "error: fired with no error object on the element".to_string(),
            },
            MediaSignal::Stalled => "stalled: media data is not arriving".to_string(),
            MediaSignal::Waiting => "waiting: playback halted waiting for data".to_string(),
            MediaSignal::Abort => "abort: resource loading aborted".to_string(),
        }
    }
}

fn media_error_label(code: u16) -> &'static str {
    match code {
        1 => "MEDIA_ERR_ABORTED",
        2 => "MEDIA_ERR_NETWORK",
        3 => "MEDIA_ERR_DECODE",
        4 => "MEDIA_ERR_SRC_NOT_SUPPORTED",
        _ => "UNKNOWN",
    }
}
