use crate::domain::messaging::error::MessagingError;
use crate::domain::messaging::types::TabId;
use serde::Serialize;
use std::collections::BTreeMap;

pub const ICON_SIZES: [u32; 4] = [16, 32, 19, 38];

/// Toolbar icon paths keyed by pixel size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct IconSet(BTreeMap<u32, String>);

impl IconSet {
    /// 16/32 for current Chromium, 19/38 for forks still on the older size.
    pub fn with_suffix(suffix: &str) -> Self {
        Self(
            ICON_SIZES
                .iter()
                .map(|size| (*size, format!("images/icon/{size}{suffix}.png")))
                .collect(),
        )
    }

    pub fn path(&self, size: u32) -> Option<&str> {
        self.0.get(&size).map(String::as_str)
    }

    pub fn paths(&self) -> impl Iterator<Item = (&u32, &String)> {
        self.0.iter()
    }
}

/// Port for the toolbar button (`chrome.browserAction`).
///
/// Calls are issued in order and are not awaited; an `Err` means the host
/// rejected the call outright.
pub trait ActionPort {
    fn set_icon(&self, tab_id: TabId, icons: &IconSet) -> Result<(), MessagingError>;

    fn set_badge_background_color(&self, color: &str) -> Result<(), MessagingError>;

    fn set_badge_text(&self, tab_id: TabId, text: &str) -> Result<(), MessagingError>;
}
