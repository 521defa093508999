// crates/ports/src/notices.rs
use post_stats_domain::model::Notice;

/// Port the host uses to surface notices on the next admin page view.
pub trait NoticeSink: Send + Sync {
    fn add(&self, notice: Notice);
}
