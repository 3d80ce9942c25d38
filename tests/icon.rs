
use serde_json::json;
use stylesync::adapters::native::{ActionCall, StoredStyle};
use stylesync::domain::messaging::prefs::{BADGE_DISABLED, DISABLE_ALL, SHOW_BADGE};
use stylesync::domain::messaging::{update_icon, StyleSummary, TabStatus, NEW_TAB_URL};
use stylesync::ports::IconSet;
use stylesync::Tab;
use test_utils::Harness;

fn new_tab_page(harness: &Harness, status: TabStatus) -> Tab {
    let tab = Tab {
        id: 40,
        url: NEW_TAB_URL.to_string(),
        window_id: 1,
        status,
        active: true,
    };
    harness.browser.insert_tab(tab.clone());
    tab
}

#[test]
fn test_paints_icon_color_then_text() {
    let mut harness = Harness::new();
    harness
        .styles
        .add(StoredStyle::new(1, "dark", "https://example.com/*", "body{}"));
    let tab = harness.browser.open_tab("https://example.com/", 1);

    let platform = harness.platform.clone();
    harness.run(update_icon(&platform, &tab, None));

    assert_eq!(
        harness.browser.action_calls(),
        vec![
            ActionCall::SetIcon {
                tab_id: tab.id,
                icons: IconSet::with_suffix(""),
            },
            ActionCall::SetBadgeBackgroundColor {
                color: "#006666".to_string(),
            },
            ActionCall::SetBadgeText {
                tab_id: tab.id,
                text: "1".to_string(),
            },
        ]
    );
}

#[test]
fn test_tab_without_styles_gets_hollow_icon() {
    let mut harness = Harness::new();
    let tab = harness.browser.open_tab("https://example.com/", 1);

    let platform = harness.platform.clone();
    harness.run(update_icon(&platform, &tab, None));

    let calls = harness.browser.action_calls();
    assert_eq!(
        calls[0],
        ActionCall::SetIcon {
            tab_id: tab.id,
            icons: IconSet::with_suffix("w"),
        }
    );
    assert_eq!(
        calls[2],
        ActionCall::SetBadgeText {
            tab_id: tab.id,
            text: String::new(),
        }
    );
}

#[test]
fn test_disabled_everywhere_uses_disabled_look() {
    let mut harness = Harness::new();
    harness.prefs.set(DISABLE_ALL, json!(true));
    harness.prefs.set(BADGE_DISABLED, json!("#333333"));
    let tab = harness.browser.open_tab("https://example.com/", 1);

    let platform = harness.platform.clone();
    harness.run(update_icon(
        &platform,
        &tab,
        Some(StyleSummary::new(json!({"1": {}, "2": {}, "3": {}}))),
    ));

    assert_eq!(
        harness.browser.action_calls(),
        vec![
            ActionCall::SetIcon {
                tab_id: tab.id,
                icons: IconSet::with_suffix("x"),
            },
            ActionCall::SetBadgeBackgroundColor {
                color: "#333333".to_string(),
            },
            ActionCall::SetBadgeText {
                tab_id: tab.id,
                text: "3".to_string(),
            },
        ]
    );
}

#[test]
fn test_hidden_badge_keeps_icon() {
    let mut harness = Harness::new();
    harness.prefs.set(SHOW_BADGE, json!(false));
    let tab = harness.browser.open_tab("https://example.com/", 1);

    let platform = harness.platform.clone();
    harness.run(update_icon(
        &platform,
        &tab,
        Some(StyleSummary::new(json!({"1": {}, "2": {}}))),
    ));

    let calls = harness.browser.action_calls();
    assert_eq!(
        calls[0],
        ActionCall::SetIcon {
            tab_id: tab.id,
            icons: IconSet::with_suffix(""),
        }
    );
    assert_eq!(
        calls[2],
        ActionCall::SetBadgeText {
            tab_id: tab.id,
            text: String::new(),
        }
    );
}

#[test]
fn test_loading_new_tab_page_is_skipped() {
    let mut harness = Harness::new();
    let tab = new_tab_page(&harness, TabStatus::Loading);

    let platform = harness.platform.clone();
    harness.run(update_icon(&platform, &tab, None));

    assert!(harness.browser.action_calls().is_empty());
    assert!(harness.styles.lookups().is_empty());
}

#[test]
fn test_loaded_new_tab_page_uses_frame_url() {
    let mut harness = Harness::new();
    harness
        .styles
        .add(StoredStyle::new(1, "speed dial", "https://start.example/*", "body{}"));
    let tab = new_tab_page(&harness, TabStatus::Complete);
    harness
        .browser
        .set_frame_url(tab.id, "https://start.example/dial");

    let platform = harness.platform.clone();
    harness.run(update_icon(&platform, &tab, None));

    let lookups = harness.styles.lookups();
    assert_eq!(lookups.len(), 1);
    assert_eq!(lookups[0].match_url, "https://start.example/dial");
    assert!(lookups[0].enabled);
    assert!(lookups[0].as_hash);
    assert!(harness.browser.action_calls().contains(&ActionCall::SetBadgeText {
        tab_id: tab.id,
        text: "1".to_string(),
    }));
}

#[test]
fn test_pseudo_tab_is_skipped() {
    let mut harness = Harness::new();
    let tab = Tab {
        id: -1,
        url: "https://example.com/".to_string(),
        window_id: 1,
        status: TabStatus::Complete,
        active: false,
    };

    let platform = harness.platform.clone();
    harness.run(update_icon(&platform, &tab, None));

    assert!(harness.browser.action_calls().is_empty());
    assert!(harness.styles.lookups().is_empty());
}

#[test]
fn test_precomputed_styles_skip_lookup() {
    let mut harness = Harness::new();
    let tab = harness.browser.open_tab("https://example.com/", 1);

    let platform = harness.platform.clone();
    harness.run(update_icon(
        &platform,
        &tab,
        Some(StyleSummary::new(json!({"5": {}}))),
    ));

    assert!(harness.styles.lookups().is_empty());
    assert_eq!(harness.browser.action_calls().len(), 3);
}

#[test]
fn test_precomputed_styles_for_missing_tab() {
    let mut harness = Harness::new();
    let tab = harness.browser.open_tab("https://example.com/", 1);
    harness.browser.close_tab(tab.id);

    let platform = harness.platform.clone();
    harness.run(update_icon(
        &platform,
        &tab,
        Some(StyleSummary::new(json!({"5": {}}))),
    ));

    assert!(harness.browser.action_calls().is_empty());
}

#[test]
fn test_failed_lookup_paints_empty_badge() {
    let mut harness = Harness::new();
    harness.styles.set_unavailable(true);
    let tab = harness.browser.open_tab("https://example.com/", 1);

    let platform = harness.platform.clone();
    harness.run(update_icon(&platform, &tab, None));

    let calls = harness.browser.action_calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(
        calls[0],
        ActionCall::SetIcon {
            tab_id: tab.id,
            icons: IconSet::with_suffix("w"),
        }
    );
}

#[test]
fn test_rejected_action_calls_are_tolerated() {
    let mut harness = Harness::new();
    harness.browser.reject_action_calls(true);
    let tab = harness.browser.open_tab("https://example.com/", 1);

    let platform = harness.platform.clone();
    harness.run(update_icon(&platform, &tab, None));

    assert!(harness.browser.action_calls().is_empty());
    assert_eq!(harness.styles.lookups().len(), 1);
}

#[test]
fn test_summary_flag_from_store() {
    let mut harness = Harness::new();
    harness.styles.set_disable_all(Some(true));
    harness
        .styles
        .add(StoredStyle::new(1, "dark", "https://example.com/*", "body{}"));
    let tab = harness.browser.open_tab("https://example.com/", 1);

    let platform = harness.platform.clone();
    harness.run(update_icon(&platform, &tab, None));

    assert_eq!(
        harness.browser.action_calls()[0],
        ActionCall::SetIcon {
            tab_id: tab.id,
            icons: IconSet::with_suffix("x"),
        }
    );
}
