use super::types::is_truthy;
use crate::ports::PrefsPort;
use serde_json::Value;

pub const DISABLE_ALL: &str = "disableAll";
pub const SHOW_BADGE: &str = "show-badge";
pub const BADGE_DISABLED: &str = "badgeDisabled";
pub const BADGE_NORMAL: &str = "badgeNormal";

pub const DEFAULT_BADGE_DISABLED: &str = "#8B0000";
pub const DEFAULT_BADGE_NORMAL: &str = "#006666";

/// Default for keys this crate reads, used when the store has no value.
pub fn default_value(key: &str) -> Option<Value> {
    match key {
        DISABLE_ALL => Some(Value::Bool(false)),
        SHOW_BADGE => Some(Value::Bool(true)),
        BADGE_DISABLED => Some(Value::from(DEFAULT_BADGE_DISABLED)),
        BADGE_NORMAL => Some(Value::from(DEFAULT_BADGE_NORMAL)),
        _ => None,
    }
}

fn lookup(prefs: &dyn PrefsPort, key: &str) -> Option<Value> {
    prefs
        .get(key)
        .filter(|v| !v.is_null())
        .or_else(|| default_value(key))
}

pub fn flag(prefs: &dyn PrefsPort, key: &str) -> bool {
    lookup(prefs, key).as_ref().is_some_and(is_truthy)
}

pub fn string(prefs: &dyn PrefsPort, key: &str) -> String {
    match lookup(prefs, key) {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::native::MemoryPrefs;
    use serde_json::json;

    #[test]
    fn test_defaults_apply_when_unset() {
        let prefs = MemoryPrefs::new();
        assert!(!flag(&prefs, DISABLE_ALL));
        assert!(flag(&prefs, SHOW_BADGE));
        assert_eq!(string(&prefs, BADGE_NORMAL), DEFAULT_BADGE_NORMAL);
        assert_eq!(string(&prefs, BADGE_DISABLED), DEFAULT_BADGE_DISABLED);
    }

    #[test]
    fn test_stored_values_win() {
        let prefs = MemoryPrefs::new();
        prefs.set(SHOW_BADGE, json!(false));
        prefs.set(BADGE_NORMAL, json!("#123456"));
        assert!(!flag(&prefs, SHOW_BADGE));
        assert_eq!(string(&prefs, BADGE_NORMAL), "#123456");
    }

    #[test]
    fn test_unknown_key_is_falsy() {
        let prefs = MemoryPrefs::new();
        assert!(!flag(&prefs, "no-such-pref"));
        assert_eq!(string(&prefs, "no-such-pref"), "");
    }
}
