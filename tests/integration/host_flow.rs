// tests/integration/host_flow.rs
use post_stats::{
    domain::config::{Location, SettingKey, SettingValue},
    infra::{AdminPage, CollectingNotices, JsonFileSettingsStore, MemorySettingsStore},
    ports::request::RequestFlags,
    usecase::{LoadConfiguration, RenderPostStats, SaveSettings, SettingsSubmission},
};

use crate::common::{Workspace, paragraph_of};

fn form(location: &str) -> SettingsSubmission {
    SettingsSubmission::new()
        .with("location", location)
        .with("headline", "About this post")
        .with("showWordCount", "1")
        .with("showCharCount", "1")
        .with("showReadTime", "1")
}

#[test]
fn saved_settings_drive_rendering() {
    let ws = Workspace::new();
    let store = JsonFileSettingsStore::new(ws.settings_path());
    let notices = CollectingNotices::new();

    let report = SaveSettings::new(&store, &notices).submit(&form("end")).expect("save");
    assert!(report.is_clean());

    let post = paragraph_of(450);
    let out = RenderPostStats::new(&store).filter_content(&RequestFlags::SINGLE_POST, &post);
    assert!(out.starts_with(&post));
    assert!(out.contains("<h3>About this post</h3>"));
    assert!(out.contains("This post has 450 words."));
    assert!(out.contains("This post will take about 2 minute to read."));
}

#[test]
fn rejected_location_survives_reload_and_shows_on_admin_page() {
    let ws = Workspace::new();
    let store = JsonFileSettingsStore::new(ws.settings_path());
    let notices = CollectingNotices::new();
    SaveSettings::new(&store, &notices).submit(&form("end")).expect("first save");

    let report = SaveSettings::new(&store, &notices).submit(&form("2")).expect("second save");
    assert_eq!(report.notices.len(), 1);

    let reloaded = LoadConfiguration::new(&JsonFileSettingsStore::new(ws.settings_path())).run().expect("load");
    assert_eq!(reloaded.location, Location::End);

    let page = AdminPage::default().render(&reloaded, &notices.drain());
    assert!(page.contains("Display location must be either beginning or end."));
    assert!(page.contains("<option value=\"end\" selected=\"selected\">"));
    assert!(notices.is_empty());
}

#[test]
fn corrupt_settings_file_renders_with_defaults() {
    let ws = Workspace::new();
    ws.write_file("post_stats.json", "{ broken");
    let store = JsonFileSettingsStore::new(ws.settings_path());

    let out = RenderPostStats::new(&store).filter_content(&RequestFlags::SINGLE_POST, "<p>one two three</p>");
    assert_eq!(
        out,
        "<h3>Post Statistics</h3><p>This post has 3 words.<br>This post has 13 characters.<br>\
         This post will take about 1 minute to read.<br></p><p>one two three</p>"
    );
}

#[test]
fn in_memory_host_stores_only_submitted_fields() {
    let store = MemorySettingsStore::new();
    let notices = CollectingNotices::new();
    let submission = SettingsSubmission::new().with("location", "begin").with("showCharCount", "1");
    SaveSettings::new(&store, &notices).submit(&submission).expect("save");

    let stored = store.snapshot();
    assert_eq!(stored.len(), 4);
    assert_eq!(stored.get(&SettingKey::Headline), None);
    assert_eq!(stored.get(&SettingKey::ShowWordCount), Some(&SettingValue::Flag(false)));
    assert_eq!(stored.get(&SettingKey::ShowCharCount), Some(&SettingValue::Flag(true)));

    let out = RenderPostStats::new(&store).filter_content(&RequestFlags::SINGLE_POST, "<p>café naïve</p>");
    assert_eq!(out, "<h3>Post Statistics</h3><p>This post has 12 characters.<br></p><p>café naïve</p>");
}
