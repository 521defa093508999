use super::markup::strip_tags;
use crate::{
    config::Configuration,
    model::ContentStats,
    value_objects::{CharCount, ReadMinutes, WordCount},
};

/// Reading speed used for the read-time estimate.
pub const WORDS_PER_MINUTE: usize = 225;

/// Number of whitespace-delimited tokens in `text`.
pub fn count_words(text: &str) -> WordCount {
    WordCount::new(text.split_whitespace().count())
}

/// Length of `text` in UTF-8 bytes.
pub fn count_chars(text: &str) -> CharCount {
    CharCount::new(text.len())
}

/// Measures every statistic of `content` after stripping its markup.
pub fn measure(content: &str) -> ContentStats {
    let text = strip_tags(content);
    let words = count_words(&text);
    ContentStats::new(words, count_chars(&text), ReadMinutes::from_words(words, WORDS_PER_MINUTE))
}

/// Like [`measure`], but skips the passes `config` does not display.
///
/// Skipped counts stay zero. Returns `None` without touching `content` when
/// no statistic is enabled.
pub fn measure_for(content: &str, config: &Configuration) -> Option<ContentStats> {
    if !config.any_stat_enabled() {
        return None;
    }
    let text = strip_tags(content);
    let words = if config.needs_word_count() { count_words(&text) } else { WordCount::zero() };
    let chars = if config.show_char_count { count_chars(&text) } else { CharCount::zero() };
    Some(ContentStats::new(words, chars, ReadMinutes::from_words(words, WORDS_PER_MINUTE)))
}
