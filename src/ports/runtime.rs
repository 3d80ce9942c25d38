use crate::domain::messaging::error::MessagingError;
use crate::domain::messaging::types::Message;

/// Port for `chrome.runtime`: extension identity and the extension-wide channel.
pub trait RuntimePort {
    /// Absolute URL of an extension resource; `""` yields the origin with a trailing slash.
    fn get_url(&self, path: &str) -> String;

    fn id(&self) -> String;

    fn user_agent(&self) -> String;

    /// Fire-and-forget delivery to the background page and open popups.
    fn send_message(&self, message: &Message) -> Result<(), MessagingError>;
}
