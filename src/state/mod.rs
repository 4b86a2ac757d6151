//! State module for tracking crawl progress
//!
//! `PageState` follows a single URL through a crawl run, from the moment it is
//! offered to the crawler until it is skipped or yields a result.

mod page_state;

// Re-export main types
pub use page_state::{PageState, SkipReason};
