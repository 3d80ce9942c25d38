use super::icon::spawn_update_icon;
use super::types::{
    ChangeNotification, Message, ReplaceAllMessage, StyleFilter, Tab, TabQuery,
};
use crate::platform::Platform;
use crate::ports::ListenerKind;
use futures::channel::oneshot;
use futures::FutureExt;

const REFRESH_TIMER: &str = "refreshAllTabs";

/// Copy of `request` ready for forwarding: the style loses its code when
/// receivers only need metadata.
pub fn prepare_notification(platform: &Platform, request: &ChangeNotification) -> ChangeNotification {
    let mut forwarded = request.clone();
    if request.needs_code_stripped() {
        forwarded.style = request
            .style
            .as_ref()
            .map(|style| platform.styles().style_with_no_code(style));
    }
    forwarded
}

/// Fan a style change out to tabs, toolbar icons, the local listener and
/// the background page. Returns immediately; per-tab work runs detached
/// and failures are only logged.
pub fn notify_all_tabs(platform: &Platform, request: &ChangeNotification) {
    let request = prepare_notification(platform, request);
    let message = Message::Change(request.clone());
    let notifies_background = request.notifies_background();

    if request.affects_tabs() || request.affects_icon() {
        let task_platform = platform.clone();
        let task_message = message.clone();
        platform.spawn(
            async move {
                notify_tabs(&task_platform, &request, &task_message).await;
            }
            .boxed_local(),
        );
    }

    // the host never delivers a message back to the context that sent it
    if let Some(local) = platform.local_delivery() {
        local.deliver(&message);
    }

    if notifies_background {
        if let Err(e) = platform.runtime().send_message(&message) {
            platform
                .logger()
                .warn(&format!("Runtime broadcast failed: {e}"));
        }
    }
}

async fn notify_tabs(platform: &Platform, request: &ChangeNotification, message: &Message) {
    let urls = &platform.config().urls;
    let query = if request.affects_own_origin() {
        TabQuery {
            url: Some(urls.own_origin_pattern()),
            ..TabQuery::default()
        }
    } else {
        TabQuery::all()
    };

    let tabs = match platform.tabs().query(&query).await {
        Ok(tabs) => tabs,
        Err(e) => {
            platform
                .logger()
                .warn(&format!("Tab enumeration failed: {e}"));
            return;
        }
    };

    let affects_tabs = request.affects_tabs();
    let affects_icon = request.affects_icon();
    let mut sent = 0usize;

    for tab in tabs {
        if affects_tabs || urls.is_options_ui(&tab.url) {
            // the tab may have closed since it was enumerated
            match platform.tabs().send_message(tab.id, message) {
                Ok(()) => sent += 1,
                Err(e) => platform
                    .logger()
                    .warn(&format!("Message to tab {} failed: {e}", tab.id)),
            }
        }
        if affects_icon {
            spawn_update_icon(platform, tab, None);
        }
    }

    platform.logger().log(&format!(
        "Notified {sent} tabs of {}",
        message.method().unwrap_or("style change")
    ));
}

/// Push a full `styleReplaceAll` to every open tab and refresh its icon.
///
/// Completes once the last enumerated tab has had its styles fetched and its
/// message and icon update issued. Other tabs may still be in flight. A tab
/// whose style lookup fails is left untouched.
pub async fn refresh_all_tabs(platform: &Platform) {
    let logger = platform.logger();
    logger.time(REFRESH_TIMER);
    refresh_tabs(platform).await;
    logger.time_end(REFRESH_TIMER);
}

async fn refresh_tabs(platform: &Platform) {
    let tabs = match platform.tabs().query(&TabQuery::all()).await {
        Ok(tabs) => tabs,
        Err(e) => {
            platform
                .logger()
                .warn(&format!("Tab enumeration failed: {e}"));
            return;
        }
    };
    if tabs.is_empty() {
        return;
    }

    let (done_tx, done_rx) = oneshot::channel::<()>();
    let mut done_tx = Some(done_tx);
    let last = tabs.len() - 1;

    for (index, tab) in tabs.into_iter().enumerate() {
        let signal = if index == last { done_tx.take() } else { None };
        let task_platform = platform.clone();
        platform.spawn(
            async move {
                refresh_tab(&task_platform, tab).await;
                if let Some(signal) = signal {
                    let _ = signal.send(());
                }
            }
            .boxed_local(),
        );
    }

    // a dropped sender means the spawner discarded the task
    let _ = done_rx.await;
}

async fn refresh_tab(platform: &Platform, tab: Tab) {
    let styles = match platform
        .styles()
        .get_styles(&StyleFilter::enabled_for(tab.url.clone()))
        .await
    {
        Ok(styles) => styles,
        Err(e) => {
            // an empty replace-all would unload every style in the tab
            platform
                .logger()
                .warn(&format!("Skipping refresh of tab {}: {e}", tab.id));
            return;
        }
    };

    let message = Message::ReplaceAll(ReplaceAllMessage::new(styles.clone()));
    match platform.local_delivery() {
        Some(local)
            if local.kind() == ListenerKind::Page
                && local.page_url().as_deref() == Some(tab.url.as_str()) =>
        {
            local.deliver(&message);
        }
        _ => {
            if let Err(e) = platform.tabs().send_message(tab.id, &message) {
                platform
                    .logger()
                    .warn(&format!("Message to tab {} failed: {e}", tab.id));
            }
        }
    }

    spawn_update_icon(platform, tab, Some(styles));
}
