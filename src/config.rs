//! Client configuration.
//!
//! This module defines the struct used to build the underlying HTTP client.

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used to construct a
/// [`FetchClient`](crate::FetchClient). It can be built programmatically and
/// has sensible defaults for every field.
///
/// # Examples
///
/// ```
/// use status_fetch::FetchConfig;
///
/// let config = FetchConfig {
///     timeout_seconds: 5,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        FetchConfig {
            timeout_seconds: 10,
            user_agent: format!("status_fetch/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
