use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum MessagingError {
    HostError(String),
    TabNotFound(i64),
    StyleLookupFailed(String),
    SerializationError(String),
    MissingPort(&'static str),
}

impl fmt::Display for MessagingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessagingError::HostError(msg) => write!(f, "Host API error: {msg}"),
            MessagingError::TabNotFound(id) => write!(f, "Tab {id} not found"),
            MessagingError::StyleLookupFailed(msg) => write!(f, "Style lookup failed: {msg}"),
            MessagingError::SerializationError(msg) => write!(f, "Serialization Error: {msg}"),
            MessagingError::MissingPort(name) => write!(f, "Platform is missing the {name} port"),
        }
    }
}

impl std::error::Error for MessagingError {}

impl MessagingError {
    pub fn host_error(message: impl Into<String>) -> Self {
        MessagingError::HostError(message.into())
    }

    pub fn style_lookup_failed(message: impl Into<String>) -> Self {
        MessagingError::StyleLookupFailed(message.into())
    }

    pub fn serialization_error(message: impl Into<String>) -> Self {
        MessagingError::SerializationError(message.into())
    }
}

impl From<serde_json::Error> for MessagingError {
    fn from(err: serde_json::Error) -> Self {
        MessagingError::serialization_error(err.to_string())
    }
}
