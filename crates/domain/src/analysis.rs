//! Measuring post content.
//!
//! - [`markup`]: tag stripping and host-style text sanitizing
//! - [`calculator`]: word, character and read-time computation

pub mod calculator;
pub mod markup;

pub use calculator::{WORDS_PER_MINUTE, count_chars, count_words, measure, measure_for};
pub use markup::{sanitize_text_field, strip_tags};
