use super::url_matches;
use crate::domain::messaging::error::MessagingError;
use crate::domain::messaging::types::{
    CreateProperties, Message, Tab, TabId, TabQuery, TabStatus, WindowId,
};
use crate::ports::{ActionPort, IconSet, RuntimePort, TabsPort, WindowsPort};
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;

const DEFAULT_EXTENSION_ID: &str = "memoryextensionid";
const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionCall {
    SetIcon { tab_id: TabId, icons: IconSet },
    SetBadgeBackgroundColor { color: String },
    SetBadgeText { tab_id: TabId, text: String },
}

#[derive(Debug)]
struct BrowserState {
    tabs: Vec<Tab>,
    focused_window: WindowId,
    next_tab_id: TabId,
    frame_urls: HashMap<TabId, String>,
    tab_messages: Vec<(TabId, Message)>,
    runtime_messages: Vec<Message>,
    action_calls: Vec<ActionCall>,
    created_tabs: Vec<CreateProperties>,
    window_focus_calls: Vec<WindowId>,
    reject_action_calls: bool,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            tabs: Vec::new(),
            focused_window: 1,
            next_tab_id: 1,
            frame_urls: HashMap::new(),
            tab_messages: Vec::new(),
            runtime_messages: Vec::new(),
            action_calls: Vec::new(),
            created_tabs: Vec::new(),
            window_focus_calls: Vec::new(),
            reject_action_calls: false,
        }
    }
}

/// Single-process stand-in for the browser: tabs, windows, the runtime
/// channel and the toolbar button. Every outgoing call is recorded.
#[derive(Debug)]
pub struct MemoryBrowser {
    extension_id: String,
    user_agent: String,
    state: RefCell<BrowserState>,
}

impl Default for MemoryBrowser {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBrowser {
    pub fn new() -> Self {
        Self {
            extension_id: DEFAULT_EXTENSION_ID.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            state: RefCell::new(BrowserState::default()),
        }
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Opens a loaded tab in `window_id`.
    pub fn open_tab(&self, url: &str, window_id: WindowId) -> Tab {
        let mut state = self.state.borrow_mut();
        let tab = Tab {
            id: state.next_tab_id,
            url: url.to_string(),
            window_id,
            status: TabStatus::Complete,
            active: false,
        };
        state.next_tab_id += 1;
        state.tabs.push(tab.clone());
        tab
    }

    /// Inserts a tab as-is, negative ids and loading tabs included.
    pub fn insert_tab(&self, tab: Tab) {
        let mut state = self.state.borrow_mut();
        state.next_tab_id = state.next_tab_id.max(tab.id + 1);
        state.tabs.push(tab);
    }

    pub fn close_tab(&self, tab_id: TabId) {
        self.state.borrow_mut().tabs.retain(|tab| tab.id != tab_id);
    }

    /// Makes `tab_id` active in its window and focuses that window.
    pub fn set_active(&self, tab_id: TabId) {
        let mut state = self.state.borrow_mut();
        if let Some(window_id) = activate_in_window(&mut state.tabs, tab_id) {
            state.focused_window = window_id;
        }
    }

    pub fn set_frame_url(&self, tab_id: TabId, url: &str) {
        self.state
            .borrow_mut()
            .frame_urls
            .insert(tab_id, url.to_string());
    }

    pub fn reject_action_calls(&self, reject: bool) {
        self.state.borrow_mut().reject_action_calls = reject;
    }

    pub fn focused_window(&self) -> WindowId {
        self.state.borrow().focused_window
    }

    pub fn tab(&self, tab_id: TabId) -> Option<Tab> {
        self.state
            .borrow()
            .tabs
            .iter()
            .find(|tab| tab.id == tab_id)
            .cloned()
    }

    pub fn tabs(&self) -> Vec<Tab> {
        self.state.borrow().tabs.clone()
    }

    pub fn tab_messages(&self) -> Vec<(TabId, Message)> {
        self.state.borrow().tab_messages.clone()
    }

    pub fn runtime_messages(&self) -> Vec<Message> {
        self.state.borrow().runtime_messages.clone()
    }

    pub fn action_calls(&self) -> Vec<ActionCall> {
        self.state.borrow().action_calls.clone()
    }

    pub fn created_tabs(&self) -> Vec<CreateProperties> {
        self.state.borrow().created_tabs.clone()
    }

    pub fn window_focus_calls(&self) -> Vec<WindowId> {
        self.state.borrow().window_focus_calls.clone()
    }

    fn record_action(&self, call: ActionCall) -> Result<(), MessagingError> {
        let mut state = self.state.borrow_mut();
        if state.reject_action_calls {
            return Err(MessagingError::host_error("browserAction is unavailable"));
        }
        state.action_calls.push(call);
        Ok(())
    }
}

fn activate_in_window(tabs: &mut [Tab], tab_id: TabId) -> Option<WindowId> {
    let window_id = tabs.iter().find(|tab| tab.id == tab_id)?.window_id;
    for tab in tabs.iter_mut().filter(|tab| tab.window_id == window_id) {
        tab.active = tab.id == tab_id;
    }
    Some(window_id)
}

fn without_fragment(url: &str) -> &str {
    url.find('#').map_or(url, |idx| &url[..idx])
}

#[async_trait(?Send)]
impl TabsPort for MemoryBrowser {
    async fn query(&self, query: &TabQuery) -> Result<Vec<Tab>, MessagingError> {
        let state = self.state.borrow();
        let tabs = state
            .tabs
            .iter()
            .filter(|tab| {
                query
                    .url
                    .as_deref()
                    .map_or(true, |pattern| url_matches(pattern, without_fragment(&tab.url)))
            })
            .filter(|tab| {
                query.current_window != Some(true) || tab.window_id == state.focused_window
            })
            .filter(|tab| query.active.map_or(true, |active| tab.active == active))
            .cloned()
            .collect();
        Ok(tabs)
    }

    async fn get(&self, tab_id: TabId) -> Result<Tab, MessagingError> {
        self.tab(tab_id).ok_or(MessagingError::TabNotFound(tab_id))
    }

    async fn activate(&self, tab_id: TabId) -> Result<(), MessagingError> {
        let mut state = self.state.borrow_mut();
        activate_in_window(&mut state.tabs, tab_id)
            .map(|_| ())
            .ok_or(MessagingError::TabNotFound(tab_id))
    }

    async fn navigate_active(&self, url: &str) -> Result<(), MessagingError> {
        let mut state = self.state.borrow_mut();
        let focused = state.focused_window;
        let tab = state
            .tabs
            .iter_mut()
            .find(|tab| tab.active && tab.window_id == focused)
            .ok_or_else(|| MessagingError::host_error("No active tab in the current window"))?;
        tab.url = url.to_string();
        tab.status = TabStatus::Loading;
        Ok(())
    }

    async fn create(&self, properties: &CreateProperties) -> Result<Tab, MessagingError> {
        let mut state = self.state.borrow_mut();
        let tab = Tab {
            id: state.next_tab_id,
            url: properties.url.clone(),
            window_id: state.focused_window,
            status: TabStatus::Loading,
            active: false,
        };
        state.next_tab_id += 1;
        state.tabs.push(tab.clone());
        activate_in_window(&mut state.tabs, tab.id);
        state.created_tabs.push(properties.clone());
        Ok(Tab { active: true, ..tab })
    }

    async fn top_frame_url(&self, tab_id: TabId) -> Option<String> {
        self.state.borrow().frame_urls.get(&tab_id).cloned()
    }

    fn send_message(&self, tab_id: TabId, message: &Message) -> Result<(), MessagingError> {
        let mut state = self.state.borrow_mut();
        if !state.tabs.iter().any(|tab| tab.id == tab_id) {
            return Err(MessagingError::TabNotFound(tab_id));
        }
        state.tab_messages.push((tab_id, message.clone()));
        Ok(())
    }
}

#[async_trait(?Send)]
impl WindowsPort for MemoryBrowser {
    async fn focus(&self, window_id: WindowId) -> Result<(), MessagingError> {
        let mut state = self.state.borrow_mut();
        state.window_focus_calls.push(window_id);
        state.focused_window = window_id;
        Ok(())
    }
}

impl RuntimePort for MemoryBrowser {
    fn get_url(&self, path: &str) -> String {
        format!("chrome-extension://{}/{}", self.extension_id, path)
    }

    fn id(&self) -> String {
        self.extension_id.clone()
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }

    fn send_message(&self, message: &Message) -> Result<(), MessagingError> {
        self.state
            .borrow_mut()
            .runtime_messages
            .push(message.clone());
        Ok(())
    }
}

impl ActionPort for MemoryBrowser {
    fn set_icon(&self, tab_id: TabId, icons: &IconSet) -> Result<(), MessagingError> {
        self.record_action(ActionCall::SetIcon {
            tab_id,
            icons: icons.clone(),
        })
    }

    fn set_badge_background_color(&self, color: &str) -> Result<(), MessagingError> {
        self.record_action(ActionCall::SetBadgeBackgroundColor {
            color: color.to_string(),
        })
    }

    fn set_badge_text(&self, tab_id: TabId, text: &str) -> Result<(), MessagingError> {
        self.record_action(ActionCall::SetBadgeText {
            tab_id,
            text: text.to_string(),
        })
    }
}
