use scraper::ElementRef;
use std::collections::HashSet;

/// Concatenates the text nodes under `root`
///
/// Text inside any element of `stripped`, or inside a `script` or `style`
/// element, is left out. The document itself is not modified.
pub fn collect_text(root: ElementRef<'_>, stripped: &[ElementRef<'_>]) -> String {
    let stripped: HashSet<_> = stripped.iter().map(|element| element.id()).collect();

    root.descendants()
        .filter_map(|node| node.value().as_text().map(|text| (node, text)))
        .filter(|(node, _)| {
            !node.ancestors().any(|ancestor| {
                stripped.contains(&ancestor.id())
                    || ancestor
                        .value()
                        .as_element()
                        .is_some_and(|element| matches!(element.name(), "script" | "style"))
            })
        })
        .map(|(_, text)| &**text)
        .collect()
}

/// Collapses every run of whitespace into a single space and trims the ends
///
/// # Examples
///
/// ```
/// use sumi_gleaner::extract::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Getting\n\n  started\t"), "Getting started");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
