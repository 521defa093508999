//! Turning statistics into markup.

pub mod escape;
pub mod formatter;

pub use escape::escape_html;
pub use formatter::{format_fragment, read_time_line};
