//! The fetch client.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::ClientBuilder;

use crate::body::{Body, BodyKind};
use crate::config::FetchConfig;
use crate::error::{FetchError, HttpStatusError};
use crate::logging::{FetchLogger, LogEvent, WarnLogger};
use crate::utils::strip_query;

/// HTTP fetch helper.
///
/// Wraps a `reqwest::Client` and a [`FetchLogger`]. Each [`fetch`](Self::fetch)
/// call is an independent network round trip; the client holds no per-call
/// state, so it can be shared and called concurrently without coordination.
pub struct FetchClient {
    client: reqwest::Client,
    logger: Arc<dyn FetchLogger>,
}

impl FetchClient {
    /// Creates a client from configuration, with the default `log`-facade logger.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Transport` if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self::with_logger(client, Arc::new(WarnLogger)))
    }

    /// Creates a client from explicitly injected collaborators.
    ///
    /// Tests use this to substitute a capturing logger; applications can use
    /// it to reuse an existing `reqwest::Client`.
    pub fn with_logger(client: reqwest::Client, logger: Arc<dyn FetchLogger>) -> Self {
        FetchClient { client, logger }
    }

    /// Fetches a URL and parses the response body by content type.
    ///
    /// On a non-2xx status the body is read as text, one warning [`LogEvent`]
    /// is emitted with the query string stripped from the logged URL, and the
    /// call returns a classified [`HttpStatusError`]. Transport failures (DNS,
    /// connect, timeout, body read) propagate unchanged and are not logged.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL to request. No validation is performed here;
    ///   malformed URLs surface as transport errors.
    ///
    /// # Errors
    ///
    /// * `FetchError::Transport` - the request never produced a usable response
    /// * `FetchError::Status` - the response status was outside 200-299
    /// * `FetchError::Parse` - a JSON-typed body failed to parse
    pub async fn fetch(&self, url: &str) -> Result<Body, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        debug!("GET {} -> {}", strip_query(url), status.as_u16());

        if !status.is_success() {
            let message = response.text().await?;
            let error = HttpStatusError::new(status.as_u16(), message);
            let event = LogEvent::fetch_error(error.status_code, strip_query(url));
            self.logger.warn(&event);
            return Err(FetchError::Status(error));
        }

        let kind = BodyKind::from_headers(response.headers());
        let text = response.text().await?;
        kind.parse(text)
    }
}
