//! Content region selection
//!
//! Documentation generators wrap the article body in different structures.
//! The region is found by trying a fixed list of selectors in priority order and
//! keeping the first one that matches; when none does, the whole `<body>` is
//! used instead.

use crate::ExtractError;
use scraper::{ElementRef, Html, Selector};

/// One entry of the content region priority table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentTier {
    /// Short name used in logs
    pub name: &'static str,

    /// CSS selector locating the region
    pub selector: &'static str,
}

/// Content region selectors, highest priority first
pub const CONTENT_TIERS: &[ContentTier] = &[
    ContentTier {
        name: "landmark-main",
        selector: r#"main div[role="main"] article"#,
    },
    ContentTier {
        name: "generator-root",
        selector: "div[data-rnwi-root] article",
    },
    ContentTier {
        name: "article",
        selector: "article",
    },
];

/// The part of a document text is extracted from
#[derive(Debug, Clone, Copy)]
pub enum ContentRegion<'a> {
    /// A region matched by one of the `CONTENT_TIERS`
    Tier {
        tier: &'static ContentTier,
        element: ElementRef<'a>,
    },

    /// No tier matched; the document body is used
    Body(ElementRef<'a>),
}

impl<'a> ContentRegion<'a> {
    /// The element the region is rooted at
    pub fn element(&self) -> ElementRef<'a> {
        match self {
            Self::Tier { element, .. } => *element,
            Self::Body(element) => *element,
        }
    }

    /// Returns true if no tier matched and the body is used
    pub fn is_body_fallback(&self) -> bool {
        matches!(self, Self::Body(_))
    }
}

/// Compiles a CSS selector, reporting failures as `ExtractError::Selector`
pub(crate) fn compile(selector: &str) -> Result<Selector, ExtractError> {
    Selector::parse(selector).map_err(|e| ExtractError::Selector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// Returns the first element matched by `tier`, if any
pub fn match_tier<'a>(
    document: &'a Html,
    tier: &ContentTier,
) -> Result<Option<ElementRef<'a>>, ExtractError> {
    let selector = compile(tier.selector)?;
    Ok(document.select(&selector).next())
}

/// Locates the content region of a document
///
/// Returns `None` only for documents without a `<body>` (framesets).
pub fn locate_region(document: &Html) -> Result<Option<ContentRegion<'_>>, ExtractError> {
    for tier in CONTENT_TIERS {
        if let Some(element) = match_tier(document, tier)? {
            return Ok(Some(ContentRegion::Tier { tier, element }));
        }
    }

    let body = compile("body")?;
    Ok(document.select(&body).next().map(ContentRegion::Body))
}
