pub mod broadcast;
pub mod config;
pub mod error;
pub mod icon;
pub mod navigation;
pub mod patterns;
pub mod prefs;
pub mod types;

pub use broadcast::{notify_all_tabs, prepare_notification, refresh_all_tabs};
pub use config::{BrowserFamily, ExtensionUrls, HostConfig};
pub use error::MessagingError;
pub use icon::{compute_badge, spawn_update_icon, update_icon, Badge, BadgeVariant};
pub use navigation::{
    activate_tab, get_active_tab, get_active_tab_real_url, get_tab_real_url, normalize_url,
    open_url, OpenUrlOptions,
};
pub use patterns::{string_as_regexp, wildcard_as_regexp};
pub use types::{
    Affects, ChangeNotification, CreateProperties, Message, ReplaceAllMessage, StyleFilter,
    StyleSummary, Tab, TabId, TabQuery, TabStatus, WindowId, NEW_TAB_URL,
};
