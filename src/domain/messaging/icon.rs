use super::navigation::get_tab_real_url;
use super::prefs::{self, BADGE_DISABLED, BADGE_NORMAL, DISABLE_ALL, SHOW_BADGE};
use super::types::{StyleFilter, StyleSummary, Tab, TabId, TabStatus};
use crate::platform::Platform;
use crate::ports::{IconSet, PrefsPort};
use futures::FutureExt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    Normal,
    NoStyles,
    Disabled,
}

impl BadgeVariant {
    pub fn icon_suffix(&self) -> &'static str {
        match self {
            BadgeVariant::Normal => "",
            BadgeVariant::NoStyles => "w",
            BadgeVariant::Disabled => "x",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub variant: BadgeVariant,
    pub color: String,
    pub text: String,
}

impl Badge {
    pub fn icons(&self) -> IconSet {
        IconSet::with_suffix(self.variant.icon_suffix())
    }
}

/// Badge appearance for a tab with `styles` applied.
///
/// A `disableAll` flag inside the summary wins over the global preference.
pub fn compute_badge(styles: &StyleSummary, prefs: &dyn PrefsPort) -> Badge {
    let count = styles.count();
    let disable_all = styles
        .disable_all()
        .unwrap_or_else(|| prefs::flag(prefs, DISABLE_ALL));

    let variant = if disable_all {
        BadgeVariant::Disabled
    } else if count == 0 {
        BadgeVariant::NoStyles
    } else {
        BadgeVariant::Normal
    };
    let color = prefs::string(prefs, if disable_all { BADGE_DISABLED } else { BADGE_NORMAL });
    let text = if prefs::flag(prefs, SHOW_BADGE) && count > 0 {
        count.to_string()
    } else {
        String::new()
    };

    Badge {
        variant,
        color,
        text,
    }
}

/// Recompute and paint the toolbar icon of `tab`.
///
/// `styles` skips the style lookup when the caller already has the summary.
pub async fn update_icon(platform: &Platform, tab: &Tab, styles: Option<StyleSummary>) {
    // the new-tab page reports an unstable URL until it has loaded
    if tab.is_pseudo_tab() || (tab.is_new_tab_page() && tab.status != TabStatus::Complete) {
        return;
    }

    let styles = match styles {
        Some(styles) => {
            // the tab may not exist yet, e.g. omnibox prerendering
            if let Err(e) = platform.tabs().get(tab.id).await {
                platform
                    .logger()
                    .warn(&format!("Skipping icon update for tab {}: {e}", tab.id));
                return;
            }
            styles
        }
        None => {
            let url = if tab.is_new_tab_page() {
                get_tab_real_url(platform, tab).await
            } else {
                tab.url.clone()
            };
            platform
                .styles()
                .get_styles_safe(&StyleFilter::enabled_for(url))
                .await
        }
    };

    let badge = compute_badge(&styles, platform.prefs());
    paint_badge(platform, tab.id, &badge);
}

/// Detached [`update_icon`], for fan-out loops that must not wait.
pub fn spawn_update_icon(platform: &Platform, tab: Tab, styles: Option<StyleSummary>) {
    let task_platform = platform.clone();
    platform.spawn(
        async move {
            update_icon(&task_platform, &tab, styles).await;
        }
        .boxed_local(),
    );
}

fn paint_badge(platform: &Platform, tab_id: TabId, badge: &Badge) {
    let action = platform.action();
    let logger = platform.logger();

    if let Err(e) = action.set_icon(tab_id, &badge.icons()) {
        logger.warn(&format!("Failed to set icon for tab {tab_id}: {e}"));
    }
    // Vivaldi only shows the colour when the text is set after it
    if let Err(e) = action.set_badge_background_color(&badge.color) {
        logger.warn(&format!("Failed to set badge color: {e}"));
    }
    if let Err(e) = action.set_badge_text(tab_id, &badge.text) {
        logger.warn(&format!("Failed to set badge text for tab {tab_id}: {e}"));
    }
}
