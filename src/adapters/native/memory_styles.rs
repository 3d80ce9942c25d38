use super::url_matches;
use crate::domain::messaging::error::MessagingError;
use crate::domain::messaging::types::{StyleFilter, StyleSummary};
use crate::ports::StyleStorePort;
use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::cell::{Cell, RefCell};

const CODE_FIELDS: [&str; 2] = ["code", "sections"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoredStyle {
    pub id: u64,
    pub name: String,
    pub enabled: bool,
    /// Glob patterns of the pages the style applies to.
    #[serde(rename = "urls")]
    pub url_patterns: Vec<String>,
    pub code: String,
}

impl StoredStyle {
    pub fn new(id: u64, name: &str, url_pattern: &str, code: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            enabled: true,
            url_patterns: vec![url_pattern.to_string()],
            code: code.to_string(),
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    fn applies_to(&self, url: &str) -> bool {
        self.url_patterns
            .iter()
            .any(|pattern| url_matches(pattern, url))
    }
}

/// Style store backed by a list, matching URLs with glob patterns.
#[derive(Debug, Default)]
pub struct MemoryStyleStore {
    styles: RefCell<Vec<StoredStyle>>,
    disable_all: Cell<Option<bool>>,
    unavailable: Cell<bool>,
    lookups: RefCell<Vec<StyleFilter>>,
}

impl MemoryStyleStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, style: StoredStyle) {
        self.styles.borrow_mut().push(style);
    }

    /// Adds a `disableAll` flag to keyed summaries.
    pub fn set_disable_all(&self, disable_all: Option<bool>) {
        self.disable_all.set(disable_all);
    }

    /// Makes every lookup fail, as when the background page is gone.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    pub fn lookups(&self) -> Vec<StyleFilter> {
        self.lookups.borrow().clone()
    }
}

#[async_trait(?Send)]
impl StyleStorePort for MemoryStyleStore {
    fn style_with_no_code(&self, style: &Value) -> Value {
        let mut stripped = style.clone();
        if let Value::Object(map) = &mut stripped {
            for field in CODE_FIELDS {
                map.remove(field);
            }
        }
        stripped
    }

    async fn get_styles(&self, filter: &StyleFilter) -> Result<StyleSummary, MessagingError> {
        self.lookups.borrow_mut().push(filter.clone());
        if self.unavailable.get() {
            return Err(MessagingError::style_lookup_failed(
                "style storage is not available",
            ));
        }

        let styles = self.styles.borrow();
        let matching = styles
            .iter()
            .filter(|style| !filter.enabled || style.enabled)
            .filter(|style| style.applies_to(&filter.match_url));

        if !filter.as_hash {
            let list = matching
                .map(serde_json::to_value)
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(StyleSummary::new(Value::Array(list)));
        }

        let mut hash = Map::new();
        for style in matching {
            hash.insert(style.id.to_string(), serde_json::to_value(style)?);
        }
        if let Some(disable_all) = self.disable_all.get() {
            hash.insert("disableAll".to_string(), json!(disable_all));
        }
        Ok(StyleSummary::new(Value::Object(hash)))
    }
}
