// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

pub use domain::messaging::{
    activate_tab, get_active_tab, get_active_tab_real_url, get_tab_real_url, notify_all_tabs,
    open_url, refresh_all_tabs, string_as_regexp, update_icon, wildcard_as_regexp,
    ChangeNotification, MessagingError, OpenUrlOptions, StyleSummary, Tab,
};
pub use platform::{Platform, PlatformBuilder};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
