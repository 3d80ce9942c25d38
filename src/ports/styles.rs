use crate::domain::messaging::error::MessagingError;
use crate::domain::messaging::types::{StyleFilter, StyleSummary};
use async_trait::async_trait;
use serde_json::Value;

/// Port for the style storage collaborator owned by the background page.
#[async_trait(?Send)]
pub trait StyleStorePort {
    /// Copy of `style` without its source code, metadata only.
    fn style_with_no_code(&self, style: &Value) -> Value;

    async fn get_styles(&self, filter: &StyleFilter) -> Result<StyleSummary, MessagingError>;

    /// Lookup that never fails: an error reads as "no styles".
    async fn get_styles_safe(&self, filter: &StyleFilter) -> StyleSummary {
        self.get_styles(filter).await.unwrap_or_default()
    }
}
