// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "post_stats",
    version = crate::VERSION,
    about = "Word count, character count and read time blocks for blog posts"
)]
pub struct Args {
    /// Settings file used as the settings store
    #[arg(long, global = true, env = "POST_STATS_SETTINGS", default_value = "post_stats.json")]
    pub settings: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the content filter over a post and print the result
    Render(RenderArgs),
    /// Print the statistics of a post
    Stats(StatsArgs),
    /// Inspect or change the stored settings
    Settings {
        #[command(subcommand)]
        action: SettingsCommand,
    },
}

#[derive(ClapArgs, Debug)]
pub struct RenderArgs {
    /// Post content file; stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Treat the page as an archive/listing rather than a single post
    #[arg(long)]
    pub archive: bool,

    /// Treat the content as coming from a secondary query (widget, related posts)
    #[arg(long)]
    pub secondary_query: bool,
}

#[derive(ClapArgs, Debug)]
pub struct StatsArgs {
    /// Post content file; stdin when omitted or `-`
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the effective settings as JSON
    Show,
    /// Submit the settings form; unchecked boxes are omitted flags
    Save(SaveArgs),
    /// Print the settings page HTML
    Form {
        /// URL the form posts to
        #[arg(long, default_value = "options.php")]
        action: String,
    },
}

#[derive(ClapArgs, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct SaveArgs {
    /// Display location: `begin` or `end`
    #[arg(long)]
    pub location: Option<String>,

    /// Headline text
    #[arg(long)]
    pub headline: Option<String>,

    /// Show the word count line
    #[arg(long)]
    pub word_count: bool,

    /// Show the character count line
    #[arg(long)]
    pub char_count: bool,

    /// Show the read time line
    #[arg(long)]
    pub read_time: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parses_save_form() {
        let args = Args::try_parse_from([
            "post_stats",
            "--settings",
            "s.json",
            "settings",
            "save",
            "--location",
            "end",
            "--word-count",
        ])
        .expect("valid args");
        assert_eq!(args.settings, PathBuf::from("s.json"));
        let Command::Settings { action: SettingsCommand::Save(save) } = args.command else {
            panic!("expected settings save");
        };
        assert_eq!(save.location.as_deref(), Some("end"));
        assert!(save.word_count);
        assert!(!save.read_time);
    }

    #[test]
    fn render_defaults_to_single_main_query() {
        let args = Args::try_parse_from(["post_stats", "-v", "render", "post.html"]).expect("valid args");
        assert_eq!(args.verbose, 1);
        let Command::Render(render) = args.command else {
            panic!("expected render");
        };
        assert!(!render.archive && !render.secondary_query);
        assert_eq!(render.file, Some(PathBuf::from("post.html")));
    }
}
