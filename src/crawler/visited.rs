use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

/// URLs already claimed in one crawl run
///
/// Shared by every concurrent branch of the run. Entries are fragment-free
/// absolute URLs and are only ever inserted. The lock is never held across an
/// `.await`.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: Mutex<HashSet<String>>,
}

impl VisitedSet {
    /// Creates an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `url` has been claimed
    pub fn contains(&self, url: &str) -> bool {
        self.urls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(url)
    }

    /// Claims `url` for fetching
    ///
    /// Returns false if another branch claimed it first. The check and the
    /// insert happen under one lock, so two siblings that discover the same
    /// link can never both fetch it.
    pub fn claim(&self, url: &str) -> bool {
        self.urls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.to_string())
    }

    /// Number of claimed URLs
    pub fn len(&self) -> usize {
        self.urls.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns true if nothing has been claimed
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
