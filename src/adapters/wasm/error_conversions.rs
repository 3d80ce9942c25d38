use crate::domain::messaging::error::MessagingError;
use wasm_bindgen::JsValue;

/// Conversion from JsValue to MessagingError for WASM infrastructure
impl From<JsValue> for MessagingError {
    fn from(err: JsValue) -> Self {
        let message = err
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&err, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| "Unknown JavaScript error".to_string());
        MessagingError::host_error(message)
    }
}

/// Conversion from MessagingError to JsValue for WASM boundary
impl From<MessagingError> for JsValue {
    fn from(error: MessagingError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
