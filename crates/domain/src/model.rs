pub mod content_stats;
pub mod notice;

pub use content_stats::ContentStats;
pub use notice::Notice;
