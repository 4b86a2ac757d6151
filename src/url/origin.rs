use url::Url;

/// Returns the serialized origin (scheme, host and port) of a URL
///
/// URLs without a tuple origin (`mailto:`, `data:`, ...) serialize to `"null"`.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sumi_gleaner::url::origin_of;
///
/// let url = Url::parse("https://docs.example.com:8443/guide").unwrap();
/// assert_eq!(origin_of(&url), "https://docs.example.com:8443");
/// ```
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

/// Returns true if `url` belongs to the origin serialized as `origin`
pub fn is_same_origin(url: &Url, origin: &str) -> bool {
    origin_of(url) == origin
}
