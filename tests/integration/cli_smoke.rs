// tests/integration/cli_smoke.rs
use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::Workspace;

fn post_stats(ws: &Workspace) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_post_stats"));
    cmd.env_remove("POST_STATS_SETTINGS").env_remove("RUST_LOG").arg("--settings").arg(ws.settings_path());
    cmd
}

#[test]
fn shows_help() {
    Command::new(env!("CARGO_BIN_EXE_post_stats"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("post_stats"));
}

#[test]
fn renders_file_with_default_settings() {
    let ws = Workspace::new();
    let post = ws.write_file("post.html", "<p>one two three</p>");
    post_stats(&ws)
        .arg("render")
        .arg(&post)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<h3>Post Statistics</h3>"))
        .stdout(predicate::str::contains("This post has 13 characters."))
        .stdout(predicate::str::ends_with("<p>one two three</p>"));
}

#[test]
fn stats_json_from_stdin() {
    let ws = Workspace::new();
    post_stats(&ws)
        .args(["stats", "--format", "json"])
        .write_stdin("<p>one two three</p>")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"wordCount\": 3"))
        .stdout(predicate::str::contains("\"characterCount\": 13"))
        .stdout(predicate::str::contains("\"readMinutes\": 1"));
}

#[test]
fn save_then_render_at_end() {
    let ws = Workspace::new();
    post_stats(&ws)
        .args(["settings", "save", "--location", "end", "--headline", "Stats", "--read-time"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"location\": \"end\""));

    post_stats(&ws)
        .arg("render")
        .write_stdin("body")
        .assert()
        .success()
        .stdout("body<h3>Stats</h3><p>This post will take about 1 minute to read.<br></p>");
}

#[test]
fn invalid_location_is_reported_not_fatal() {
    let ws = Workspace::new();
    post_stats(&ws)
        .args(["settings", "save", "--location", "2", "--word-count"])
        .assert()
        .success()
        .stderr(predicate::str::contains("error: Display location must be either beginning or end."))
        .stdout(predicate::str::contains("\"location\": \"begin\""));
}

#[test]
fn all_stats_off_leaves_content_alone() {
    let ws = Workspace::new();
    post_stats(&ws).args(["settings", "save", "--location", "begin"]).assert().success();
    post_stats(&ws).arg("render").write_stdin("<p>untouched</p>").assert().success().stdout("<p>untouched</p>");
}

#[test]
fn settings_form_prints_html() {
    let ws = Workspace::new();
    post_stats(&ws)
        .args(["settings", "form"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<h1>Word Count Settings</h1>"))
        .stdout(predicate::str::contains("name=\"showReadTime\""));
}
