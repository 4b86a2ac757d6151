//! Boilerplate detection inside a content region
//!
//! These functions only find the elements to leave out; text collection skips
//! them. Nothing is removed from the parsed document.

use crate::extract::region::compile;
use crate::extract::text::collect_text;
use crate::ExtractError;
use scraper::ElementRef;

/// Selectors stripped from a matched content region
const REGION_BOILERPLATE: &[&str] = &[
    // Right sidebar / table of contents
    r#"nav[aria-label="On this page"]"#,
    r#"nav[aria-labelledby*="table-of-contents"]"#,
    // Previous / next links
    r#"nav[aria-label*="pagination"]"#,
    ".gitbook-pagination",
    "footer",
    // Deep-link anchors inside headings
    r##"h1 a[href^="#"]"##,
    r##"h2 a[href^="#"]"##,
    r##"h3 a[href^="#"]"##,
    r##"h4 a[href^="#"]"##,
    r##"h5 a[href^="#"]"##,
    r##"h6 a[href^="#"]"##,
    ".header-anchor",
];

/// "Edit this page" links; their enclosing block is stripped with them
const EDIT_LINK: &str = r#"a[href*="edit/master"]"#;

/// Text identifying the trailing "last updated" block
const LAST_UPDATED_MARKER: &str = "Last updated";

/// Page chrome stripped when falling back to the whole body
const BODY_CHROME: &[&str] = &[
    "header",
    "footer",
    "nav",
    "aside",
    "form",
    r#"[role="navigation"]"#,
    r#"[role="banner"]"#,
    r#"[role="contentinfo"]"#,
    ".sidebar",
    "#sidebar",
];

/// Finds the boilerplate elements inside a matched content region
pub fn region_boilerplate<'a>(region: ElementRef<'a>) -> Result<Vec<ElementRef<'a>>, ExtractError> {
    let mut stripped = select_all(region, REGION_BOILERPLATE)?;

    let edit_link = compile(EDIT_LINK)?;
    stripped.extend(
        region
            .select(&edit_link)
            .map(|link| enclosing_block(link, region)),
    );

    if let Some(marker) = last_updated_block(region)? {
        stripped.push(marker);
    }

    Ok(stripped)
}

/// Finds the page chrome inside the document body
pub fn body_chrome<'a>(body: ElementRef<'a>) -> Result<Vec<ElementRef<'a>>, ExtractError> {
    select_all(body, BODY_CHROME)
}

fn select_all<'a>(root: ElementRef<'a>, selectors: &[&str]) -> Result<Vec<ElementRef<'a>>, ExtractError> {
    let mut matched = Vec::new();
    for css in selectors {
        let selector = compile(css)?;
        matched.extend(root.select(&selector));
    }
    Ok(matched)
}

/// Nearest `div` or `p` around `link` inside `region`, or the link itself
fn enclosing_block<'a>(link: ElementRef<'a>, region: ElementRef<'a>) -> ElementRef<'a> {
    link.ancestors()
        .take_while(|node| node.id() != region.id())
        .filter_map(ElementRef::wrap)
        .find(|element| matches!(element.value().name(), "div" | "p"))
        .unwrap_or(link)
}

/// Last `div` in document order whose visible text mentions the marker
fn last_updated_block<'a>(region: ElementRef<'a>) -> Result<Option<ElementRef<'a>>, ExtractError> {
    let div = compile("div")?;
    Ok(region
        .select(&div)
        .filter(|element| collect_text(*element, &[]).contains(LAST_UPDATED_MARKER))
        .last())
}
