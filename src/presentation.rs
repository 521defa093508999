// src/presentation.rs
use std::io::{self, Write};

use post_stats_domain::{config::Configuration, model::ContentStats, model::Notice};

use crate::args::OutputFormat;

pub fn print_stats(out: &mut dyn Write, stats: &ContentStats, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Json => print_json(out, stats),
        OutputFormat::Table => print_table(out, stats),
    }
}

fn print_table(out: &mut dyn Write, stats: &ContentStats) -> io::Result<()> {
    writeln!(out, "    WORDS      CHARACTERS     MINUTES")?;
    writeln!(out, "-------------------------------------")?;
    writeln!(out, "{:>9}{:>16}{:>12}", stats.word_count, stats.character_count, stats.read_minutes)
}

fn print_json(out: &mut dyn Write, stats: &ContentStats) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, stats)?;
    writeln!(out)
}

pub fn print_configuration(out: &mut dyn Write, config: &Configuration) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, config)?;
    writeln!(out)
}

pub fn print_notices(err: &mut dyn Write, notices: &[Notice]) -> io::Result<()> {
    for notice in notices {
        writeln!(err, "error: {}", notice.message)?;
    }
    Ok(())
}
