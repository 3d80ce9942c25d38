
use stylesync::adapters::native::MemoryBrowser;
use stylesync::domain::messaging::{
    activate_tab, get_active_tab, get_active_tab_real_url, get_tab_real_url, open_url,
    OpenUrlOptions, TabStatus, NEW_TAB_URL,
};
use stylesync::Tab;
use test_utils::Harness;

const FIREFOX_UA: &str = "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

fn open_new_tab_page(harness: &Harness, window_id: i64) -> Tab {
    let tab = harness.browser.open_tab(NEW_TAB_URL, window_id);
    harness.browser.set_active(tab.id);
    tab
}

#[test]
fn test_active_tab_of_focused_window() {
    let mut harness = Harness::new();
    let first = harness.browser.open_tab("https://a.com/", 1);
    let second = harness.browser.open_tab("https://b.com/", 2);
    harness.browser.set_active(first.id);
    harness.browser.set_active(second.id);

    let platform = harness.platform.clone();
    let active = harness.run(get_active_tab(&platform));
    assert_eq!(active.map(|tab| tab.id), Some(second.id));
}

#[test]
fn test_no_active_tab() {
    let mut harness = Harness::new();
    harness.browser.open_tab("https://a.com/", 1);

    let platform = harness.platform.clone();
    assert_eq!(harness.run(get_active_tab(&platform)), None);
    assert_eq!(harness.run(get_active_tab_real_url(&platform)), "");
}

#[test]
fn test_real_url_of_regular_tab() {
    let mut harness = Harness::new();
    let tab = harness.browser.open_tab("https://a.com/page", 1);
    harness.browser.set_frame_url(tab.id, "https://elsewhere.com/");

    let platform = harness.platform.clone();
    assert_eq!(
        harness.run(get_tab_real_url(&platform, &tab)),
        "https://a.com/page"
    );
}

#[test]
fn test_real_url_of_new_tab_page() {
    let mut harness = Harness::new();
    let tab = open_new_tab_page(&harness, 1);
    harness.browser.set_frame_url(tab.id, "https://dial.example/");

    let platform = harness.platform.clone();
    assert_eq!(
        harness.run(get_tab_real_url(&platform, &tab)),
        "https://dial.example/"
    );
    assert_eq!(
        harness.run(get_active_tab_real_url(&platform)),
        "https://dial.example/"
    );
}

#[test]
fn test_real_url_without_frame_info() {
    let mut harness = Harness::new();
    let tab = open_new_tab_page(&harness, 1);

    let platform = harness.platform.clone();
    assert_eq!(harness.run(get_tab_real_url(&platform, &tab)), "");
}

#[test]
fn test_open_focuses_existing_tab() {
    let mut harness = Harness::new();
    let current = harness.browser.open_tab("https://a.com/", 1);
    let target = harness.browser.open_tab("https://b.com/", 1);
    harness.browser.set_active(current.id);

    let platform = harness.platform.clone();
    harness.run(open_url(&platform, OpenUrlOptions::new("https://b.com/")));

    assert!(harness.browser.tab(target.id).unwrap().active);
    assert!(!harness.browser.tab(current.id).unwrap().active);
    assert_eq!(harness.browser.window_focus_calls(), vec![1]);
    assert!(harness.browser.created_tabs().is_empty());
}

#[test]
fn test_open_searches_other_windows_on_request() {
    let mut harness = Harness::new();
    let current = harness.browser.open_tab("https://a.com/", 1);
    let target = harness.browser.open_tab("https://b.com/", 2);
    harness.browser.set_active(current.id);

    let platform = harness.platform.clone();
    harness.run(open_url(
        &platform,
        OpenUrlOptions::new("https://b.com/").in_any_window(),
    ));

    assert!(harness.browser.tab(target.id).unwrap().active);
    assert_eq!(harness.browser.focused_window(), 2);
    assert!(harness.browser.created_tabs().is_empty());
}

#[test]
fn test_open_ignores_other_windows_by_default() {
    let mut harness = Harness::new();
    let current = harness.browser.open_tab("https://a.com/", 1);
    harness.browser.open_tab("https://b.com/", 2);
    harness.browser.set_active(current.id);

    let platform = harness.platform.clone();
    harness.run(open_url(&platform, OpenUrlOptions::new("https://b.com/")));

    let created = harness.browser.created_tabs();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].url, "https://b.com/");
    assert_eq!(harness.browser.focused_window(), 1);
}

#[test]
fn test_open_matches_fragment_exactly() {
    let mut harness = Harness::new();
    let current = harness.browser.open_tab("https://a.com/", 1);
    let target = harness.browser.open_tab("https://b.com/doc#intro", 1);
    harness.browser.set_active(current.id);

    let platform = harness.platform.clone();
    harness.run(open_url(
        &platform,
        OpenUrlOptions::new("https://b.com/doc#intro"),
    ));
    assert!(harness.browser.tab(target.id).unwrap().active);
    assert!(harness.browser.created_tabs().is_empty());

    harness.run(open_url(
        &platform,
        OpenUrlOptions::new("https://b.com/doc#usage"),
    ));
    let created = harness.browser.created_tabs();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].url, "https://b.com/doc#usage");
}

#[test]
fn test_open_resolves_extension_paths() {
    let mut harness = Harness::new();
    let current = harness.browser.open_tab("https://a.com/", 1);
    harness.browser.set_active(current.id);

    let platform = harness.platform.clone();
    harness.run(open_url(&platform, OpenUrlOptions::new("manage.html")));

    let created = harness.browser.created_tabs();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].url, harness.own_url("manage.html"));
}

#[test]
fn test_open_reuses_new_tab_page() {
    let mut harness = Harness::new();
    let blank = open_new_tab_page(&harness, 1);

    let platform = harness.platform.clone();
    harness.run(open_url(&platform, OpenUrlOptions::new("https://b.com/")));

    let tab = harness.browser.tab(blank.id).unwrap();
    assert_eq!(tab.url, "https://b.com/");
    assert_eq!(tab.status, TabStatus::Loading);
    assert!(harness.browser.created_tabs().is_empty());
}

#[test]
fn test_open_sets_opener_on_chrome() {
    let mut harness = Harness::new();
    let current = harness.browser.open_tab("https://a.com/", 1);
    harness.browser.set_active(current.id);

    let platform = harness.platform.clone();
    harness.run(open_url(&platform, OpenUrlOptions::new("https://b.com/")));

    assert_eq!(
        harness.browser.created_tabs()[0].opener_tab_id,
        Some(current.id)
    );
}

#[test]
fn test_open_omits_opener_on_firefox() {
    let mut harness = Harness::with_browser(MemoryBrowser::new().with_user_agent(FIREFOX_UA));
    let current = harness.browser.open_tab("https://a.com/", 1);
    harness.browser.set_active(current.id);

    let platform = harness.platform.clone();
    harness.run(open_url(&platform, OpenUrlOptions::new("https://b.com/")));

    let created = harness.browser.created_tabs();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].opener_tab_id, None);
}

#[test]
fn test_open_without_active_tab_creates_plain_tab() {
    let mut harness = Harness::new();

    let platform = harness.platform.clone();
    harness.run(open_url(&platform, OpenUrlOptions::new("https://b.com/")));

    let created = harness.browser.created_tabs();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].opener_tab_id, None);
}

#[test]
fn test_open_rewrites_branded_scheme() {
    let mut harness = Harness::new();
    let current = harness.browser.open_tab("https://a.com/", 1);
    harness.browser.set_active(current.id);

    let platform = harness.platform.clone();
    harness.run(open_url(
        &platform,
        OpenUrlOptions::new("opera://settings/configureCommands"),
    ));

    assert_eq!(
        harness.browser.created_tabs()[0].url,
        "chrome://settings/configureCommands"
    );
}

#[test]
fn test_activate_tab_focuses_its_window() {
    let mut harness = Harness::new();
    let tab = harness.browser.open_tab("https://a.com/", 3);

    let platform = harness.platform.clone();
    harness.run(activate_tab(&platform, &tab));

    assert!(harness.browser.tab(tab.id).unwrap().active);
    assert_eq!(harness.browser.window_focus_calls(), vec![3]);
    assert_eq!(harness.browser.focused_window(), 3);
}
