use crate::UrlError;
use url::Url;

/// Removes the fragment (`#...`) from a URL
///
/// Two URLs that differ only by fragment address the same document, so every
/// URL is stripped before it is compared or recorded as visited.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_gleaner::url::strip_fragment;
///
/// let url = Url::parse("https://docs.example.com/guide#install").unwrap();
/// assert_eq!(strip_fragment(url).as_str(), "https://docs.example.com/guide");
/// ```
pub fn strip_fragment(mut url: Url) -> Url {
    url.set_fragment(None);
    url
}

/// Resolves an `href` found on `page_url` into an absolute, fragment-free URL
///
/// Relative references (`guide`, `../api`, `/docs`, `?page=2`) resolve against
/// the page the link was found on.
///
/// # Returns
///
/// * `Ok(Url)` - The absolute URL with its fragment removed
/// * `Err(UrlError::Parse)` - The href cannot be resolved
pub fn resolve_href(href: &str, page_url: &Url) -> Result<Url, UrlError> {
    page_url
        .join(href)
        .map(strip_fragment)
        .map_err(|e| UrlError::Parse(format!("{}: {}", href, e)))
}
