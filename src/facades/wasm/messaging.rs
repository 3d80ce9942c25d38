use crate::adapters::wasm::browser_platform;
use crate::adapters::wasm::converters::{from_js, to_js};
use crate::domain::messaging::{
    self, patterns, ChangeNotification, OpenUrlOptions, StyleSummary, Tab,
};
use crate::platform::Platform;
use once_cell::unsync::OnceCell;
use serde::Deserialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

thread_local! {
    static PLATFORM: OnceCell<Platform> = const { OnceCell::new() };
}

fn platform() -> Result<Platform, JsValue> {
    PLATFORM.with(|cell| {
        cell.get_or_try_init(browser_platform)
            .cloned()
            .map_err(JsValue::from)
    })
}

#[wasm_bindgen(js_name = notifyAllTabs)]
pub fn notify_all_tabs(request: JsValue) -> Result<(), JsValue> {
    let platform = platform()?;
    let request: ChangeNotification = from_js(request)?;
    messaging::notify_all_tabs(&platform, &request);
    Ok(())
}

#[wasm_bindgen(js_name = refreshAllTabs)]
pub async fn refresh_all_tabs() -> Result<(), JsValue> {
    let platform = platform()?;
    messaging::refresh_all_tabs(&platform).await;
    Ok(())
}

#[wasm_bindgen(js_name = updateIcon)]
pub async fn update_icon(tab: JsValue, styles: JsValue) -> Result<(), JsValue> {
    let platform = platform()?;
    let tab: Tab = from_js(tab)?;
    let styles = if styles.is_undefined() || styles.is_null() {
        None
    } else {
        Some(StyleSummary::new(from_js::<Value>(styles)?))
    };
    messaging::update_icon(&platform, &tab, styles).await;
    Ok(())
}

#[wasm_bindgen(js_name = getActiveTab)]
pub async fn get_active_tab() -> Result<JsValue, JsValue> {
    let platform = platform()?;
    match messaging::get_active_tab(&platform).await {
        Some(tab) => Ok(to_js(&tab)?),
        None => Ok(JsValue::UNDEFINED),
    }
}

#[wasm_bindgen(js_name = getActiveTabRealURL)]
pub async fn get_active_tab_real_url() -> Result<String, JsValue> {
    let platform = platform()?;
    Ok(messaging::get_active_tab_real_url(&platform).await)
}

#[wasm_bindgen(js_name = getTabRealURL)]
pub async fn get_tab_real_url(tab: JsValue) -> Result<String, JsValue> {
    let platform = platform()?;
    let tab: Tab = from_js(tab)?;
    Ok(messaging::get_tab_real_url(&platform, &tab).await)
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OpenUrlRequest {
    url: String,
    #[serde(default = "default_current_window")]
    current_window: bool,
}

fn default_current_window() -> bool {
    true
}

#[wasm_bindgen(js_name = openURL)]
pub async fn open_url(request: JsValue) -> Result<(), JsValue> {
    let platform = platform()?;
    let request: OpenUrlRequest = from_js(request)?;
    let mut options = OpenUrlOptions::new(request.url);
    if !request.current_window {
        options = options.in_any_window();
    }
    messaging::open_url(&platform, options).await;
    Ok(())
}

#[wasm_bindgen(js_name = activateTab)]
pub async fn activate_tab(tab: JsValue) -> Result<(), JsValue> {
    let platform = platform()?;
    let tab: Tab = from_js(tab)?;
    messaging::activate_tab(&platform, &tab).await;
    Ok(())
}

/// Escaped sources are only valid for a JS `RegExp` without the `u` flag.
fn js_flags(flags: &str) -> String {
    flags.chars().filter(|flag| *flag != 'u').collect()
}

#[wasm_bindgen(js_name = stringAsRegExp)]
pub fn string_as_regexp(s: &str, flags: Option<String>) -> Result<js_sys::RegExp, JsValue> {
    let flags = flags.unwrap_or_default();
    let rx = patterns::string_as_regexp(s, &flags).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(js_sys::RegExp::new(rx.as_str(), &js_flags(&flags)))
}

#[wasm_bindgen(js_name = wildcardAsRegExp)]
pub fn wildcard_as_regexp(s: &str, flags: Option<String>) -> Result<js_sys::RegExp, JsValue> {
    let flags = flags.unwrap_or_default();
    let rx =
        patterns::wildcard_as_regexp(s, &flags).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(js_sys::RegExp::new(rx.as_str(), &js_flags(&flags)))
}

/// Browser page where extension keyboard shortcuts are configured.
#[wasm_bindgen(js_name = configureCommandsUrl)]
pub fn configure_commands_url() -> Result<String, JsValue> {
    Ok(platform()?.config().urls.configure_commands.clone())
}

#[wasm_bindgen(js_name = isSupportedUrl)]
pub fn is_supported_url(url: &str) -> Result<bool, JsValue> {
    Ok(platform()?.config().is_supported_url(url))
}
