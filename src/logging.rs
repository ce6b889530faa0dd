//! Structured warning events for failed fetches.
//!
//! The logger is an injected collaborator rather than a global import so tests
//! (and embedding applications) can substitute their own sink. The default
//! implementation serializes the event to JSON and emits it through the `log`
//! facade at warn severity.

use log::warn;
use serde::Serialize;

/// Event name attached to every fetch-failure warning.
pub const FETCH_ERROR_EVENT: &str = "N_FETCH_ERROR";

/// The structured warning record emitted once per failed fetch.
///
/// `input` is the requested URL with its query string removed; it never
/// contains query parameters regardless of what was requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEvent {
    /// Event name (always [`FETCH_ERROR_EVENT`]).
    pub event: &'static str,
    /// HTTP status code of the failed response.
    pub status_code: u16,
    /// Requested URL with the query string stripped.
    pub input: String,
}

impl LogEvent {
    /// Builds the warning event for a failed fetch.
    pub fn fetch_error(status_code: u16, input: String) -> Self {
        LogEvent {
            event: FETCH_ERROR_EVENT,
            status_code,
            input,
        }
    }
}

/// Sink for fetch-failure warnings.
///
/// Implementations must be thread-safe: concurrent fetches may warn in
/// parallel.
pub trait FetchLogger: Send + Sync {
    /// Records one warning event. Called exactly once per failed fetch.
    fn warn(&self, event: &LogEvent);
}

/// Default logger backed by the `log` facade.
///
/// Serializes the event to a JSON object so downstream log collectors can
/// parse the fields back out.
#[derive(Debug, Default)]
pub struct WarnLogger;

impl FetchLogger for WarnLogger {
    fn warn(&self, event: &LogEvent) {
        let json = serde_json::to_string(event).unwrap_or_else(|_| "{}".to_string());
        warn!("{json}");
    }
}
