use super::types::{CreateProperties, Tab, TabQuery};
use crate::platform::Platform;

const BRANDED_SCHEMES: [&str; 2] = ["opera", "vivaldi"];

pub async fn get_active_tab(platform: &Platform) -> Option<Tab> {
    match platform
        .tabs()
        .query(&TabQuery::active_in_current_window())
        .await
    {
        Ok(tabs) => tabs.into_iter().next(),
        Err(e) => {
            platform
                .logger()
                .warn(&format!("Active tab lookup failed: {e}"));
            None
        }
    }
}

/// URL actually shown in `tab`; the new-tab page needs its top frame asked.
pub async fn get_tab_real_url(platform: &Platform, tab: &Tab) -> String {
    if !tab.is_new_tab_page() {
        return tab.url.clone();
    }
    platform
        .tabs()
        .top_frame_url(tab.id)
        .await
        .unwrap_or_default()
}

pub async fn get_active_tab_real_url(platform: &Platform) -> String {
    match get_active_tab(platform).await {
        Some(tab) => get_tab_real_url(platform, &tab).await,
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenUrlOptions {
    pub url: String,
    pub current_window: bool,
}

impl OpenUrlOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            current_window: true,
        }
    }

    pub fn in_any_window(mut self) -> Self {
        self.current_window = false;
        self
    }
}

/// Absolute URL for `url`: bare paths resolve against the extension, and
/// branded Chromium schemes are mapped back to `chrome`, which forks accept
/// in tab queries.
pub fn normalize_url(platform: &Platform, url: &str) -> String {
    let absolute = if url.contains("://") {
        url.to_string()
    } else {
        platform.runtime().get_url(url)
    };
    rewrite_branded_scheme(absolute)
}

fn rewrite_branded_scheme(url: String) -> String {
    for scheme in BRANDED_SCHEMES {
        if let Some(rest) = url.strip_prefix(scheme) {
            return format!("chrome{rest}");
        }
    }
    url
}

fn without_fragment(url: &str) -> &str {
    url.find('#').map_or(url, |idx| &url[..idx])
}

/// Focus the tab already showing `options.url`, otherwise reuse a focused
/// new-tab page, otherwise open a new tab next to the active one.
pub async fn open_url(platform: &Platform, options: OpenUrlOptions) {
    let url = normalize_url(platform, &options.url);
    let logger = platform.logger();

    // the host cannot match fragments, so compare full URLs here
    let query = TabQuery::by_url(without_fragment(&url), options.current_window);
    let candidates = platform.tabs().query(&query).await.unwrap_or_else(|e| {
        logger.warn(&format!("Tab query for {url} failed: {e}"));
        Vec::new()
    });

    if let Some(tab) = candidates.iter().find(|tab| tab.url == url) {
        activate_tab(platform, tab).await;
        return;
    }

    match get_active_tab(platform).await {
        Some(active) if active.is_new_tab_page() => {
            if let Err(e) = platform.tabs().navigate_active(&url).await {
                logger.warn(&format!("Failed to navigate new-tab page to {url}: {e}"));
            }
        }
        active => {
            let opener_tab_id = active
                .filter(|_| platform.config().browser.supports_opener_tab())
                .map(|tab| tab.id);
            let properties = CreateProperties { url, opener_tab_id };
            if let Err(e) = platform.tabs().create(&properties).await {
                logger.warn(&format!("Failed to open {}: {e}", properties.url));
            }
        }
    }
}

/// Activate `tab` and focus its window; both calls run concurrently.
pub async fn activate_tab(platform: &Platform, tab: &Tab) {
    let (activated, focused) = futures::join!(
        platform.tabs().activate(tab.id),
        platform.windows().focus(tab.window_id)
    );

    if let Err(e) = activated {
        platform
            .logger()
            .warn(&format!("Failed to activate tab {}: {e}", tab.id));
    }
    if let Err(e) = focused {
        platform
            .logger()
            .warn(&format!("Failed to focus window {}: {e}", tab.window_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_branded_scheme() {
        assert_eq!(
            rewrite_branded_scheme("opera://settings/configureCommands".to_string()),
            "chrome://settings/configureCommands"
        );
        assert_eq!(
            rewrite_branded_scheme("vivaldi://extensions/".to_string()),
            "chrome://extensions/"
        );
        assert_eq!(
            rewrite_branded_scheme("https://opera.com/".to_string()),
            "https://opera.com/"
        );
    }

    #[test]
    fn test_without_fragment() {
        assert_eq!(without_fragment("https://a.com/x#y#z"), "https://a.com/x");
        assert_eq!(without_fragment("https://a.com/x"), "https://a.com/x");
    }

    #[test]
    fn test_open_url_options_default_to_current_window() {
        let options = OpenUrlOptions::new("manage.html");
        assert!(options.current_window);
        assert!(!options.in_any_window().current_window);
    }
}
