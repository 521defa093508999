use serde::{Deserialize, Serialize};

use crate::value_objects::{CharCount, ReadMinutes, WordCount};

/// Statistics derived from one piece of post content.
///
/// Built per render and discarded afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStats {
    pub word_count: WordCount,
    pub character_count: CharCount,
    pub read_minutes: ReadMinutes,
}

impl ContentStats {
    pub const fn new(word_count: WordCount, character_count: CharCount, read_minutes: ReadMinutes) -> Self {
        Self { word_count, character_count, read_minutes }
    }
}
