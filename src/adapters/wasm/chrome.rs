use super::converters::{from_js, to_js};
use crate::domain::messaging::error::MessagingError;
use crate::domain::messaging::types::{
    CreateProperties, Message, Tab, TabId, TabQuery, WindowId,
};
use crate::ports::{ActionPort, IconSet, RuntimePort, TabsPort, WindowsPort};
use async_trait::async_trait;
use js_sys::{Function, Object, Promise, Reflect};
use serde::Serialize;
use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{WorkerGlobalScope, Window};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = query)]
    fn tabs_query(query: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = get)]
    fn tabs_get(tab_id: f64) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = update)]
    fn tabs_update(tab_id: f64, properties: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = update)]
    fn tabs_update_active(properties: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = create)]
    fn tabs_create(properties: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "tabs"], js_name = sendMessage)]
    fn tabs_send_message(tab_id: f64, message: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "windows"], js_name = update)]
    fn windows_update(window_id: f64, info: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "webNavigation"], js_name = getFrame)]
    fn web_navigation_get_frame(details: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(js_namespace = ["chrome", "runtime"], js_name = getURL)]
    fn runtime_get_url(path: &str) -> String;

    #[wasm_bindgen(catch, js_namespace = ["chrome", "runtime"], js_name = sendMessage)]
    fn runtime_send_message(message: &JsValue) -> Result<JsValue, JsValue>;
}

/// Settles a fire-and-forget host call. A rejected promise here is the
/// promise form of `runtime.lastError` and is only logged.
fn settle_quietly(result: JsValue, what: &'static str) {
    if let Ok(promise) = result.dyn_into::<Promise>() {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                let error = MessagingError::from(e);
                crate::adapters::logger().log(&format!("{what}: {error}"));
            }
        });
    }
}

async fn resolve(promise: Result<Promise, JsValue>) -> Result<JsValue, MessagingError> {
    Ok(JsFuture::from(promise?).await?)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IconDetails<'a> {
    tab_id: TabId,
    path: &'a IconSet,
}

/// Toolbar button namespace: `action` on Manifest V3, `browserAction` before.
const ACTION_NAMESPACES: [&str; 2] = ["action", "browserAction"];

fn action_namespace(chrome: &JsValue) -> Option<Object> {
    ACTION_NAMESPACES.into_iter().find_map(|name| {
        Reflect::get(chrome, &JsValue::from_str(name))
            .ok()?
            .dyn_into::<Object>()
            .ok()
    })
}

/// `chrome.*` host, promise flavour of the extension API.
#[derive(Debug, Clone)]
pub struct ChromeHost {
    action: Option<Object>,
}

impl Default for ChromeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromeHost {
    pub fn new() -> Self {
        let action = Reflect::get(&js_sys::global(), &JsValue::from_str("chrome"))
            .ok()
            .and_then(|chrome| action_namespace(&chrome));
        Self { action }
    }

    fn call_action(&self, method: &str, details: &JsValue) -> Result<JsValue, MessagingError> {
        let namespace = self
            .action
            .as_ref()
            .ok_or_else(|| MessagingError::host_error("No toolbar action API"))?;
        let function = Reflect::get(namespace, &JsValue::from_str(method))?
            .dyn_into::<Function>()
            .map_err(|_| MessagingError::host_error(format!("action.{method} is not a function")))?;
        Ok(function.call1(namespace, details)?)
    }
}

#[async_trait(?Send)]
impl TabsPort for ChromeHost {
    async fn query(&self, query: &TabQuery) -> Result<Vec<Tab>, MessagingError> {
        let tabs = resolve(tabs_query(&to_js(query)?)).await?;
        from_js(tabs)
    }

    async fn get(&self, tab_id: TabId) -> Result<Tab, MessagingError> {
        let tab = resolve(tabs_get(tab_id as f64))
            .await
            .map_err(|_| MessagingError::TabNotFound(tab_id))?;
        from_js(tab)
    }

    async fn activate(&self, tab_id: TabId) -> Result<(), MessagingError> {
        resolve(tabs_update(tab_id as f64, &to_js(&json!({"active": true}))?)).await?;
        Ok(())
    }

    async fn navigate_active(&self, url: &str) -> Result<(), MessagingError> {
        resolve(tabs_update_active(&to_js(&json!({"url": url}))?)).await?;
        Ok(())
    }

    async fn create(&self, properties: &CreateProperties) -> Result<Tab, MessagingError> {
        let tab = resolve(tabs_create(&to_js(properties)?)).await?;
        from_js(tab)
    }

    async fn top_frame_url(&self, tab_id: TabId) -> Option<String> {
        let details = to_js(&json!({"tabId": tab_id, "frameId": 0, "processId": -1})).ok()?;
        let frame = resolve(web_navigation_get_frame(&details)).await.ok()?;
        if frame.is_null() || frame.is_undefined() {
            return None;
        }
        Reflect::get(&frame, &JsValue::from_str("url"))
            .ok()?
            .as_string()
            .filter(|url| !url.is_empty())
    }

    fn send_message(&self, tab_id: TabId, message: &Message) -> Result<(), MessagingError> {
        let result = tabs_send_message(tab_id as f64, &to_js(message)?)?;
        settle_quietly(result, "tabs.sendMessage");
        Ok(())
    }
}

#[async_trait(?Send)]
impl WindowsPort for ChromeHost {
    async fn focus(&self, window_id: WindowId) -> Result<(), MessagingError> {
        resolve(windows_update(window_id as f64, &to_js(&json!({"focused": true}))?)).await?;
        Ok(())
    }
}

impl RuntimePort for ChromeHost {
    fn get_url(&self, path: &str) -> String {
        runtime_get_url(path)
    }

    fn id(&self) -> String {
        Reflect::get(&js_sys::global(), &JsValue::from_str("chrome"))
            .and_then(|chrome| Reflect::get(&chrome, &JsValue::from_str("runtime")))
            .and_then(|runtime| Reflect::get(&runtime, &JsValue::from_str("id")))
            .ok()
            .and_then(|id| id.as_string())
            .unwrap_or_default()
    }

    fn user_agent(&self) -> String {
        let global = js_sys::global();
        let user_agent = if let Ok(window) = global.clone().dyn_into::<Window>() {
            window.navigator().user_agent()
        } else if let Ok(worker) = global.dyn_into::<WorkerGlobalScope>() {
            worker.navigator().user_agent()
        } else {
            return String::new();
        };
        user_agent.unwrap_or_default()
    }

    fn send_message(&self, message: &Message) -> Result<(), MessagingError> {
        let result = runtime_send_message(&to_js(message)?)?;
        settle_quietly(result, "runtime.sendMessage");
        Ok(())
    }
}

impl ActionPort for ChromeHost {
    fn set_icon(&self, tab_id: TabId, icons: &IconSet) -> Result<(), MessagingError> {
        let details = to_js(&IconDetails {
            tab_id,
            path: icons,
        })?;
        settle_quietly(self.call_action("setIcon", &details)?, "action.setIcon");
        Ok(())
    }

    fn set_badge_background_color(&self, color: &str) -> Result<(), MessagingError> {
        let details = to_js(&json!({ "color": color }))?;
        settle_quietly(
            self.call_action("setBadgeBackgroundColor", &details)?,
            "action.setBadgeBackgroundColor",
        );
        Ok(())
    }

    fn set_badge_text(&self, tab_id: TabId, text: &str) -> Result<(), MessagingError> {
        let details = to_js(&json!({ "text": text, "tabId": tab_id }))?;
        settle_quietly(self.call_action("setBadgeText", &details)?, "action.setBadgeText");
        Ok(())
    }
}
