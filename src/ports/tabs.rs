use crate::domain::messaging::error::MessagingError;
use crate::domain::messaging::types::{CreateProperties, Message, Tab, TabId, TabQuery};
use async_trait::async_trait;

/// Port for the host's tab registry (`chrome.tabs` plus `webNavigation.getFrame`).
#[async_trait(?Send)]
pub trait TabsPort {
    async fn query(&self, query: &TabQuery) -> Result<Vec<Tab>, MessagingError>;

    async fn get(&self, tab_id: TabId) -> Result<Tab, MessagingError>;

    /// Make `tab_id` the active tab of its window.
    async fn activate(&self, tab_id: TabId) -> Result<(), MessagingError>;

    /// Navigate the active tab of the current window to `url`.
    async fn navigate_active(&self, url: &str) -> Result<(), MessagingError>;

    async fn create(&self, properties: &CreateProperties) -> Result<Tab, MessagingError>;

    /// URL of the top-level frame, `None` when the frame is unknown.
    async fn top_frame_url(&self, tab_id: TabId) -> Option<String>;

    /// Fire-and-forget delivery to the content scripts of `tab_id`.
    fn send_message(&self, tab_id: TabId, message: &Message) -> Result<(), MessagingError>;
}
