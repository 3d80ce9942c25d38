use crate::domain::messaging::types::Message;
use crate::ports::{ListenerKind, LocalDeliveryPort};
use std::cell::RefCell;

/// Listener that keeps every message delivered in-context.
#[derive(Debug)]
pub struct RecordingListener {
    kind: ListenerKind,
    page_url: Option<String>,
    messages: RefCell<Vec<Message>>,
}

impl RecordingListener {
    pub fn page(url: impl Into<String>) -> Self {
        Self {
            kind: ListenerKind::Page,
            page_url: Some(url.into()),
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn background() -> Self {
        Self {
            kind: ListenerKind::Background,
            page_url: None,
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn messages(&self) -> Vec<Message> {
        self.messages.borrow().clone()
    }
}

impl LocalDeliveryPort for RecordingListener {
    fn kind(&self) -> ListenerKind {
        self.kind
    }

    fn page_url(&self) -> Option<String> {
        self.page_url.clone()
    }

    fn deliver(&self, message: &Message) {
        self.messages.borrow_mut().push(message.clone());
    }
}
