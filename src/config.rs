use serde::{Deserialize, Serialize};

use crate::utils::normalize_base_path;

#[cfg(target_arch = "wasm32")]
use web_sys::window;

/// Compile-time fallback for the public base path.
const BUILD_BASE_PATH: Option<&str> = option_env!("MINIPLAYER_BASE_PATH");

/// Newest-first entries kept by the debug player's event log.
pub const DEFAULT_LOG_CAPACITY: usize = 50;

/// Player settings shared with every player instance through context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Prefix for every track source, always ending with `/`.
    pub public_base: String,
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

fn default_log_capacity() -> usize {
    DEFAULT_LOG_CAPACITY
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            public_base: "/".to_string(),
            log_capacity: default_log_capacity(),
        }
    }
}

impl PlayerConfig {
    /// Resolve the configuration for the running page.
    pub fn resolve() -> Self {
        Self {
            public_base: resolve_public_base(document_base_href(), BUILD_BASE_PATH),
            ..Self::default()
        }
    }
}

/// Pick the public base path: the document's `<base href>` first, then the
/// build-time value, then `/`.
pub fn resolve_public_base(document_base: Option<String>, build_base: Option<&str>) -> String {
    document_base
        .filter(|value| !value.trim().is_empty())
        .or_else(|| {
            build_base
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string)
        })
        .map(normalize_base_path)
        .unwrap_or_else(|| "/".to_string())
}

#[cfg(target_arch = "wasm32")]
fn document_base_href() -> Option<String> {
    let document = window()?.document()?;
    let base = document.query_selector("base").ok()??;
    base.get_attribute("href")
}

#[cfg(not(target_arch = "wasm32"))]
fn document_base_href() -> Option<String> {
    None
}
