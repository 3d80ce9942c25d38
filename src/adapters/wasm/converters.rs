use crate::domain::messaging::error::MessagingError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::JsValue;

/// Plain JS objects rather than `Map`s, as the extension APIs expect.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, MessagingError> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| MessagingError::serialization_error(e.to_string()))
}

pub fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T, MessagingError> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| MessagingError::serialization_error(e.to_string()))
}
