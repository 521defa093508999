// crates/ports/src/request.rs
use serde::{Deserialize, Serialize};

/// What the host knows about the page being rendered.
pub trait RenderContext {
    /// The content belongs to the page's primary query, not a widget or secondary loop.
    fn is_main_query(&self) -> bool;
    /// The page displays exactly one post.
    fn is_single(&self) -> bool;
}

/// Plain request classification for hosts that compute the flags up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestFlags {
    pub main_query: bool,
    pub single: bool,
}

impl RequestFlags {
    /// A single post rendered by the main query.
    pub const SINGLE_POST: Self = Self { main_query: true, single: true };
}

impl Default for RequestFlags {
    fn default() -> Self {
        Self::SINGLE_POST
    }
}

impl RenderContext for RequestFlags {
    fn is_main_query(&self) -> bool {
        self.main_query
    }

    fn is_single(&self) -> bool {
        self.single
    }
}
