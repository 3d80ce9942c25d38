use super::converters::{from_js, to_js};
use crate::domain::messaging::error::MessagingError;
use crate::domain::messaging::types::{Message, StyleFilter, StyleSummary};
use crate::ports::{ListenerKind, LocalDeliveryPort, PrefsPort, StyleStorePort};
use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_name = getStyles)]
    fn get_styles(options: &JsValue, callback: &Function) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_name = getStyleWithNoCode)]
    fn get_style_with_no_code(style: &JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = prefs, js_name = get)]
    fn prefs_get(key: &str) -> Result<JsValue, JsValue>;
}

fn global_property(name: &str) -> Option<JsValue> {
    Reflect::get(&js_sys::global(), &JsValue::from_str(name))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
}

/// `getStyles` of the background page, callback or promise flavour.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageStyleStore;

impl PageStyleStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl StyleStorePort for PageStyleStore {
    fn style_with_no_code(&self, style: &Value) -> Value {
        to_js(style)
            .and_then(|js| Ok(get_style_with_no_code(&js)?))
            .and_then(from_js)
            .unwrap_or_else(|e| {
                crate::adapters::logger().warn(&format!("getStyleWithNoCode failed: {e}"));
                style.clone()
            })
    }

    async fn get_styles(&self, filter: &StyleFilter) -> Result<StyleSummary, MessagingError> {
        let options = to_js(filter)?;
        let mut call_error = None;
        let promise = Promise::new(&mut |resolve, _reject| match get_styles(&options, &resolve) {
            Ok(returned) => {
                // resolving with the returned promise adopts its outcome
                if returned.is_instance_of::<Promise>() {
                    let _ = resolve.call1(&JsValue::NULL, &returned);
                }
            }
            Err(e) => call_error = Some(e),
        });
        if let Some(e) = call_error {
            return Err(MessagingError::style_lookup_failed(
                MessagingError::from(e).to_string(),
            ));
        }

        let styles = JsFuture::from(promise)
            .await
            .map_err(|e| MessagingError::style_lookup_failed(MessagingError::from(e).to_string()))?;
        Ok(StyleSummary::new(from_js(styles)?))
    }
}

/// The page-global `prefs` object.
#[derive(Debug, Clone, Copy, Default)]
pub struct PagePrefs;

impl PagePrefs {
    pub fn new() -> Self {
        Self
    }
}

impl PrefsPort for PagePrefs {
    fn get(&self, key: &str) -> Option<Value> {
        let value = prefs_get(key).ok()?;
        if value.is_undefined() {
            return None;
        }
        from_js(value).ok()
    }
}

/// The message listener of the calling context, looked up once.
pub struct PageListener {
    kind: ListenerKind,
    handler: Function,
}

impl PageListener {
    /// Page contexts expose `applyOnMessage`, the background page
    /// `onBackgroundMessage`; other contexts have no local listener.
    pub fn detect() -> Option<Self> {
        let candidates = [
            ("applyOnMessage", ListenerKind::Page),
            ("onBackgroundMessage", ListenerKind::Background),
        ];
        candidates.into_iter().find_map(|(name, kind)| {
            let handler = global_property(name)?.dyn_into::<Function>().ok()?;
            Some(Self { kind, handler })
        })
    }
}

impl LocalDeliveryPort for PageListener {
    fn kind(&self) -> ListenerKind {
        self.kind
    }

    fn page_url(&self) -> Option<String> {
        let location = global_property("location")?;
        Reflect::get(&location, &JsValue::from_str("href"))
            .ok()?
            .as_string()
    }

    fn deliver(&self, message: &Message) {
        let result = to_js(message).and_then(|js| {
            self.handler.call1(&JsValue::NULL, &js)?;
            Ok(())
        });
        if let Err(e) = result {
            crate::adapters::logger().warn(&format!("Local delivery failed: {e}"));
        }
    }
}
