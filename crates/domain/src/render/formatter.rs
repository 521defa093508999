use std::fmt::Write;

use super::escape::escape_html;
use crate::{config::Configuration, model::ContentStats, value_objects::ReadMinutes};

/// Builds the statistics block for `stats`.
///
/// Lines always come in the order words, characters, read time; disabled
/// lines are skipped. Returns `None` when nothing is enabled.
pub fn format_fragment(stats: &ContentStats, config: &Configuration) -> Option<String> {
    if !config.any_stat_enabled() {
        return None;
    }

    let mut html = String::with_capacity(160);
    let _ = write!(html, "<h3>{}</h3><p>", escape_html(config.headline.as_str()));

    if config.show_word_count {
        let _ = write!(html, "This post has {} words.<br>", stats.word_count);
    }
    if config.show_char_count {
        let _ = write!(html, "This post has {} characters.<br>", stats.character_count);
    }
    if config.show_read_time {
        html.push_str(&read_time_line(stats.read_minutes));
    }

    html.push_str("</p>");
    Some(html)
}

/// Read-time sentence. The unit stays the literal `minute` for every value.
pub fn read_time_line(minutes: ReadMinutes) -> String {
    if minutes.value() < 2 {
        return "This post will take about 1 minute to read.<br>".to_string();
    }
    format!("This post will take about {minutes} minute to read.<br>")
}
