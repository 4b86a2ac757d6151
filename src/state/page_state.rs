/// Page state definitions for tracking a URL through one crawl run
///
/// This module defines the lifecycle a URL goes through from the moment it is
/// offered to the crawler until it is either skipped or produces a result.
use std::fmt;

/// Why a URL was skipped without producing a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// The URL is more hops away from the seed than the crawl allows
    DepthExceeded,

    /// The URL was already claimed earlier in this run
    AlreadyVisited,

    /// The URL belongs to a different origin than the seed
    CrossOrigin,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::DepthExceeded => "depth exceeded",
            Self::AlreadyVisited => "already visited",
            Self::CrossOrigin => "cross origin",
        };
        write!(f, "{}", reason)
    }
}

/// Represents the current state of a URL in a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageState {
    // ===== Active States =====
    /// URL has been offered but not yet checked
    Unvisited,

    /// URL has been claimed in the visited set
    Visited,

    /// Page is currently being fetched
    Fetching,

    /// Page body has arrived
    Fetched,

    /// Page content is being extracted
    Extracting,

    // ===== Terminal States =====
    /// URL was skipped silently
    Skipped(SkipReason),

    /// Page could not be fetched
    FetchFailed,

    /// Page was fetched but its content could not be extracted
    ExtractFailed,

    /// Page content was extracted
    Extracted,
}

impl PageState {
    /// Returns true if this is a terminal state (no further processing needed)
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Skipped(_) | Self::FetchFailed | Self::ExtractFailed | Self::Extracted
        )
    }

    /// Returns true if moving from `self` to `next` follows the page lifecycle
    pub fn can_transition_to(&self, next: PageState) -> bool {
        use PageState::*;

        matches!(
            (self, next),
            (Unvisited, Skipped(_))
                | (Unvisited, Visited)
                | (Visited, Fetching)
                | (Fetching, FetchFailed)
                | (Fetching, Fetched)
                | (Fetched, Extracting)
                | (Extracting, ExtractFailed)
                | (Extracting, Extracted)
        )
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unvisited => write!(f, "unvisited"),
            Self::Visited => write!(f, "visited"),
            Self::Fetching => write!(f, "fetching"),
            Self::Fetched => write!(f, "fetched"),
            Self::Extracting => write!(f, "extracting"),
            Self::Skipped(reason) => write!(f, "skipped ({})", reason),
            Self::FetchFailed => write!(f, "fetch failed"),
            Self::ExtractFailed => write!(f, "extract failed"),
            Self::Extracted => write!(f, "extracted"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(PageState::Skipped(SkipReason::CrossOrigin).is_terminal());
        assert!(PageState::FetchFailed.is_terminal());
        assert!(PageState::ExtractFailed.is_terminal());
        assert!(PageState::Extracted.is_terminal());

        assert!(!PageState::Unvisited.is_terminal());
        assert!(!PageState::Visited.is_terminal());
        assert!(!PageState::Fetching.is_terminal());
        assert!(!PageState::Fetched.is_terminal());
        assert!(!PageState::Extracting.is_terminal());
    }

    #[test]
    fn test_happy_path_transitions() {
        let path = [
            PageState::Unvisited,
            PageState::Visited,
            PageState::Fetching,
            PageState::Fetched,
            PageState::Extracting,
            PageState::Extracted,
        ];
        for pair in path.windows(2) {
            assert!(pair[0].can_transition_to(pair[1]), "{} -> {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_invalid_transitions() {
        assert!(!PageState::Unvisited.can_transition_to(PageState::Fetching));
        assert!(!PageState::FetchFailed.can_transition_to(PageState::Extracting));
        assert!(!PageState::Visited.can_transition_to(PageState::Skipped(
            SkipReason::AlreadyVisited
        )));
        assert!(!PageState::Extracted.can_transition_to(PageState::Unvisited));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            PageState::Skipped(SkipReason::DepthExceeded).to_string(),
            "skipped (depth exceeded)"
        );
        assert_eq!(PageState::FetchFailed.to_string(), "fetch failed");
    }
}
