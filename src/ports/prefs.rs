use serde_json::Value;

/// Read-only view of the shared preference store.
pub trait PrefsPort {
    fn get(&self, key: &str) -> Option<Value>;
}
