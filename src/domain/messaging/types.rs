use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// URL reported by the host for a new-tab page, whatever it is actually showing.
pub const NEW_TAB_URL: &str = "chrome://newtab/";

pub type TabId = i64;
pub type WindowId = i64;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabStatus {
    Loading,
    Complete,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Host tab handle. Never cached: every operation queries tabs afresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tab {
    pub id: TabId,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub window_id: WindowId,
    #[serde(default)]
    pub status: TabStatus,
    #[serde(default)]
    pub active: bool,
}

impl Tab {
    pub fn is_new_tab_page(&self) -> bool {
        self.url == NEW_TAB_URL
    }

    /// Host-internal pseudo tabs (devtools, prerender) carry negative ids.
    pub fn is_pseudo_tab(&self) -> bool {
        self.id < 0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_window: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl TabQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn active_in_current_window() -> Self {
        Self {
            url: None,
            current_window: Some(true),
            active: Some(true),
        }
    }

    pub fn by_url(url: impl Into<String>, current_window: bool) -> Self {
        Self {
            url: Some(url.into()),
            current_window: Some(current_window),
            active: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProperties {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opener_tab_id: Option<TabId>,
}

/// Which UI surfaces have to react to a change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Affects {
    pub all: bool,
    pub editor: bool,
    pub manager: bool,
    pub icon: bool,
    pub popup: bool,
}

/// A style change as described by the caller. Fields this crate does not
/// interpret are kept in `extra` and forwarded untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeNotification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affects: Option<Affects>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_is_updated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefs: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChangeNotification {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: Some(method.into()),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: Value) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_affects(mut self, affects: Affects) -> Self {
        self.affects = Some(affects);
        self
    }

    pub fn with_code_updated(mut self, code_is_updated: bool) -> Self {
        self.code_is_updated = Some(code_is_updated);
        self
    }

    pub fn with_prefs(mut self, prefs: Value) -> Self {
        self.prefs = Some(prefs);
        self
    }

    pub fn affects_all(&self) -> bool {
        self.affects.as_ref().map_or(true, |a| a.all)
    }

    /// Only the extension's own pages (editor, manager) care.
    pub fn affects_own_origin(&self) -> bool {
        !self.affects_all()
            && self
                .affects
                .as_ref()
                .is_some_and(|a| a.editor || a.manager)
    }

    pub fn affects_tabs(&self) -> bool {
        self.affects_all() || self.affects_own_origin()
    }

    pub fn affects_icon(&self) -> bool {
        self.affects_all() || self.affects.as_ref().is_some_and(|a| a.icon)
    }

    pub fn affects_popup(&self) -> bool {
        self.affects_all() || self.affects.as_ref().is_some_and(|a| a.popup)
    }

    pub fn has_prefs(&self) -> bool {
        self.prefs.as_ref().is_some_and(is_truthy)
    }

    /// Background page and popups listen on the runtime channel.
    pub fn notifies_background(&self) -> bool {
        self.affects_popup() || self.has_prefs() || self.affects_own_origin()
    }

    /// Receivers only need style metadata when the code did not change.
    pub fn needs_code_stripped(&self) -> bool {
        self.code_is_updated == Some(false) && self.style.is_some()
    }
}

/// Styles applicable to a URL, either a plain list or a map keyed by
/// numeric style id that may also carry a `disableAll` flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleSummary(Value);

impl Default for StyleSummary {
    fn default() -> Self {
        Self(Value::Object(Map::new()))
    }
}

impl From<Value> for StyleSummary {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl StyleSummary {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Number of styles. Keyed summaries only count numeric keys so that
    /// flags sharing the map are ignored.
    pub fn count(&self) -> usize {
        match &self.0 {
            Value::Array(styles) => styles.len(),
            Value::Object(map) => map.keys().filter(|key| is_numeric_id(key)).count(),
            _ => 0,
        }
    }

    pub fn disable_all(&self) -> Option<bool> {
        match &self.0 {
            Value::Object(map) => map.get("disableAll").map(is_truthy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleFilter {
    pub match_url: String,
    pub enabled: bool,
    pub as_hash: bool,
}

impl StyleFilter {
    /// Enabled styles for `url`, keyed by id.
    pub fn enabled_for(url: impl Into<String>) -> Self {
        Self {
            match_url: url.into(),
            enabled: true,
            as_hash: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplaceAllMessage {
    pub method: String,
    pub styles: StyleSummary,
}

impl ReplaceAllMessage {
    pub const METHOD: &'static str = "styleReplaceAll";

    pub fn new(styles: StyleSummary) -> Self {
        Self {
            method: Self::METHOD.to_string(),
            styles,
        }
    }
}

/// Payload handed to the host transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    ReplaceAll(ReplaceAllMessage),
    Change(ChangeNotification),
}

impl Message {
    pub fn method(&self) -> Option<&str> {
        match self {
            Message::ReplaceAll(msg) => Some(&msg.method),
            Message::Change(change) => change.method.as_deref(),
        }
    }
}

fn is_numeric_id(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
