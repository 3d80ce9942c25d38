use crate::domain::messaging::types::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerKind {
    /// Listener of an extension page or content script.
    Page,
    /// Listener of the background page.
    Background,
}

/// In-context delivery for the listener living in the calling context.
/// The host never loops a message back to its sender.
pub trait LocalDeliveryPort {
    fn kind(&self) -> ListenerKind;

    /// URL of the page hosting the listener, if it is a page.
    fn page_url(&self) -> Option<String>;

    fn deliver(&self, message: &Message);
}
