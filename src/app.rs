// src/app.rs
use std::{
    fs::File,
    io::{self, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use post_stats_domain::analysis::measure;
use post_stats_infra::{AdminPage, CollectingNotices, JsonFileSettingsStore, persistence::FileReader};
use post_stats_ports::request::RequestFlags;
use post_stats_usecase::{LoadConfiguration, RenderPostStats, SaveSettings, SettingsSubmission};

use crate::{
    args::{Args, Command, RenderArgs, SaveArgs, SettingsCommand, StatsArgs},
    presentation,
};

pub fn run(args: &Args) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    run_with(args, &mut stdin.lock(), &mut stdout.lock(), &mut stderr.lock())
}

/// Runs `args` against explicit streams.
pub fn run_with(args: &Args, input: &mut dyn Read, out: &mut dyn Write, err: &mut dyn Write) -> Result<()> {
    let store = JsonFileSettingsStore::new(&args.settings);
    log::debug!("using settings store {}", store.path().display());

    match &args.command {
        Command::Render(render) => run_render(&store, render, input, out),
        Command::Stats(stats) => run_stats(stats, input, out),
        Command::Settings { action } => run_settings(&store, action, out, err),
    }
}

fn run_render(store: &JsonFileSettingsStore, args: &RenderArgs, input: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    let content = read_content(args.file.as_deref(), input)?;
    let ctx = RequestFlags { main_query: !args.secondary_query, single: !args.archive };
    let rendered = RenderPostStats::new(store).filter_content(&ctx, &content);
    out.write_all(rendered.as_bytes()).context("failed to write rendered content")?;
    Ok(())
}

fn run_stats(args: &StatsArgs, input: &mut dyn Read, out: &mut dyn Write) -> Result<()> {
    let content = read_content(args.file.as_deref(), input)?;
    presentation::print_stats(out, &measure(&content), args.format).context("failed to emit statistics")
}

fn run_settings(
    store: &JsonFileSettingsStore,
    action: &SettingsCommand,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    match action {
        SettingsCommand::Show => {
            let config = LoadConfiguration::new(store).run().context("failed to load settings")?;
            presentation::print_configuration(out, &config).context("failed to emit settings")
        }
        SettingsCommand::Save(save) => {
            let notices = CollectingNotices::new();
            let report = SaveSettings::new(store, &notices)
                .submit(&submission_from(save))
                .context("failed to save settings")?;
            presentation::print_notices(err, &notices.drain()).context("failed to emit notices")?;
            presentation::print_configuration(out, &report.configuration).context("failed to emit settings")
        }
        SettingsCommand::Form { action } => {
            let config = LoadConfiguration::new(store).run().context("failed to load settings")?;
            let html = AdminPage::new(action.as_str()).render(&config, &[]);
            out.write_all(html.as_bytes()).context("failed to write settings form")?;
            Ok(())
        }
    }
}

/// A CLI save is a full form post: flags left off are unchecked boxes.
fn submission_from(args: &SaveArgs) -> SettingsSubmission {
    let mut submission = SettingsSubmission::new();
    if let Some(location) = &args.location {
        submission.insert("location", location.as_str());
    }
    if let Some(headline) = &args.headline {
        submission.insert("headline", headline.as_str());
    }
    for (name, checked) in [
        ("showWordCount", args.word_count),
        ("showCharCount", args.char_count),
        ("showReadTime", args.read_time),
    ] {
        if checked {
            submission.insert(name, "1");
        }
    }
    submission
}

fn read_content(file: Option<&Path>, input: &mut dyn Read) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
            FileReader::read_lossy(file).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => FileReader::read_lossy(input).context("failed to read content from stdin"),
    }
}
