use std::sync::{Mutex, PoisonError};

use post_stats_domain::model::Notice;
use post_stats_ports::notices::NoticeSink;

/// Queues notices until the next admin page render picks them up.
#[derive(Debug, Default)]
pub struct CollectingNotices {
    queue: Mutex<Vec<Notice>>,
}

impl CollectingNotices {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns every queued notice, oldest first.
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.queue.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn is_empty(&self) -> bool {
        self.queue.lock().unwrap_or_else(PoisonError::into_inner).is_empty()
    }
}

impl NoticeSink for CollectingNotices {
    fn add(&self, notice: Notice) {
        log::debug!("queued notice {}", notice.code);
        self.queue.lock().unwrap_or_else(PoisonError::into_inner).push(notice);
    }
}
