use crate::ports::RuntimePort;
use regex::Regex;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserFamily {
    Chrome,
    Firefox,
    Opera,
}

impl BrowserFamily {
    pub fn from_user_agent(user_agent: &str) -> Self {
        if user_agent.contains("Firefox") {
            BrowserFamily::Firefox
        } else if user_agent.contains("OPR") {
            BrowserFamily::Opera
        } else {
            BrowserFamily::Chrome
        }
    }

    /// Firefox rejects `openerTabId` on `tabs.create`.
    pub fn supports_opener_tab(&self) -> bool {
        !matches!(self, BrowserFamily::Firefox)
    }
}

#[derive(Debug, Clone)]
pub struct ExtensionUrls {
    pub own_origin: String,
    pub options_ui: HashSet<String>,
    pub configure_commands: String,
}

impl ExtensionUrls {
    pub fn new(runtime: &dyn RuntimePort, browser: BrowserFamily) -> Self {
        let options_ui = HashSet::from([
            runtime.get_url("options/index.html"),
            format!("chrome://extensions/?options={}", runtime.id()),
        ]);
        let configure_commands = match browser {
            BrowserFamily::Opera => "opera://settings/configureCommands",
            _ => "chrome://extensions/configureCommands",
        };
        Self {
            own_origin: runtime.get_url(""),
            options_ui,
            configure_commands: configure_commands.to_string(),
        }
    }

    pub fn is_options_ui(&self, url: &str) -> bool {
        self.options_ui.contains(url)
    }

    /// Host query pattern matching every page of the extension.
    pub fn own_origin_pattern(&self) -> String {
        format!("{}*", self.own_origin)
    }
}

/// Facts about the running host, resolved once per platform.
#[derive(Debug, Clone)]
pub struct HostConfig {
    pub browser: BrowserFamily,
    pub urls: ExtensionUrls,
    supported_urls: Option<Regex>,
}

impl HostConfig {
    pub fn from_runtime(runtime: &dyn RuntimePort) -> Self {
        let browser = BrowserFamily::from_user_agent(&runtime.user_agent());
        let urls = ExtensionUrls::new(runtime, browser);
        Self::new(browser, urls)
    }

    pub fn new(browser: BrowserFamily, urls: ExtensionUrls) -> Self {
        let pattern = format!(
            "^(file|https?|ftps?):|^{}",
            regex::escape(&urls.own_origin)
        );
        let supported_urls = Regex::new(&pattern).ok();
        Self {
            browser,
            urls,
            supported_urls,
        }
    }

    /// Whether styles can be applied to pages at `url` at all.
    pub fn is_supported_url(&self, url: &str) -> bool {
        self.supported_urls
            .as_ref()
            .is_some_and(|rx| rx.is_match(url))
    }
}
