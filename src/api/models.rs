use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::utils::join_public_path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Path relative to the public assets root, e.g. `music/song.mp3`.
    pub source: String,
    pub artist: String,
    pub title: String,
}

impl Track {
    pub fn new(source: &str, artist: &str, title: &str) -> Self {
        Self {
            source: source.trim_start_matches('/').to_string(),
            artist: artist.to_string(),
            title: title.to_string(),
        }
    }

    /// Browser-addressable URL of this track under `public_base`.
    pub fn url(&self, public_base: &str) -> String {
        join_public_path(public_base, &self.source)
    }
}

/// The fixed playlist both player variants cycle through.
pub static PLAYLIST: Lazy<Vec<Track>> = Lazy::new(|| {
    vec![
        Track::new("music/Junior H - LA CHERRY.mp3", "Junior H", "LA CHERRY"),
        Track::new("music/Junior H - ROCKSTAR.mp3", "Junior H", "ROCKSTAR"),
        Track::new("music/Junior H - SE AMERITA.mp3", "Junior H", "SE AMERITA"),
    ]
});

/// Outcome of the last reachability probe against a track URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProbeResult {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeResult {
    /// A response arrived; `ok` follows the HTTP status class.
    pub fn from_response(status: u16, url: String) -> Self {
        Self {
            ok: (200..300).contains(&status),
            status: Some(status),
            url: Some(url),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            status: None,
            url: None,
            error: Some(error.into()),
        }
    }

    pub fn summary(&self) -> String {
        match (&self.status, &self.error) {
            (Some(status), _) => format!(
                "Fetch {} (HTTP {status}) {}",
                if self.ok { "ok" } else { "failed" },
                self.url.as_deref().unwrap_or_default()
            ),
            (None, Some(error)) => format!("Fetch failed: {error}"),
            (None, None) => "Fetch failed".to_string(),
        }
    }
}

/// Snapshot of the media element's technical properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TechnicalState {
    pub attached: bool,
    pub ready_state: Option<u16>,
    pub paused: Option<bool>,
    pub src: Option<String>,
    /// `None` while the element still reports NaN.
    pub duration: Option<f64>,
}

impl TechnicalState {
    /// Record returned when there is no element to read from.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "null".to_string())
    }
}

pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "--:--".to_string();
    }
    let total = seconds.floor() as u64;
    let mins = total / 60;
    let secs = total % 60;
    format!("{}:{:02}", mins, secs)
}
