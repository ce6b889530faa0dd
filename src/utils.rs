//! URL redaction helpers.

/// Removes the query component from a URL for logging.
///
/// Everything from and including the first `?` is dropped; scheme, host, and
/// path pass through unchanged. Query strings routinely carry identifiers and
/// keys that do not belong in logs, and stripping them also keeps log
/// cardinality bounded.
///
/// No URL parsing is performed, so malformed URLs are handled the same way:
/// the input is returned as-is when it has no `?`.
///
/// # Arguments
///
/// * `url` - The URL as requested, possibly including a query string
///
/// # Returns
///
/// The URL with the query component removed.
pub fn strip_query(url: &str) -> String {
    match url.find('?') {
        Some(index) => url[..index].to_string(),
        None => url.to_string(),
    }
}
