/// Native adapters - an in-memory browser host for non-WASM builds and tests.

pub mod console_logger;
pub mod memory_browser;
pub mod memory_prefs;
pub mod memory_styles;
pub mod recording_listener;
pub mod spawner;

pub use console_logger::ConsoleLogger;
pub use memory_browser::{ActionCall, MemoryBrowser};
pub use memory_prefs::MemoryPrefs;
pub use memory_styles::{MemoryStyleStore, StoredStyle};
pub use recording_listener::RecordingListener;

use crate::domain::messaging::patterns::wildcard_as_regexp;
use regex::Regex;

/// Whole-string glob match, the way the host applies URL patterns.
pub(crate) fn url_matches(pattern: &str, url: &str) -> bool {
    wildcard_as_regexp(pattern, "")
        .and_then(|rx| Regex::new(&format!("^(?:{})$", rx.as_str())))
        .is_ok_and(|rx| rx.is_match(url))
}
