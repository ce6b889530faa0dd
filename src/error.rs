//! Error type definitions.
//!
//! Fetch failures fall into three categories: transport failures (the request
//! never produced an HTTP response), status failures (a response arrived with
//! a non-2xx status), and parse failures (a 2xx response declared JSON but the
//! body would not parse). Only status failures are classified and logged by
//! this crate; the other two propagate unchanged.

use thiserror::Error;

use crate::status::reason_name;

/// A non-success HTTP response, classified by status code.
///
/// `name` is the PascalCase reason-phrase identifier for the status
/// (e.g. 500 -> `InternalServerError`), `message` is the raw response body
/// text. Created only on non-2xx responses and returned to the caller after
/// being logged exactly once.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{name}: {message}")]
pub struct HttpStatusError {
    /// The numeric HTTP status code of the response.
    pub status_code: u16,
    /// Reason-phrase identifier for the status code (`"HttpError"` if unmapped).
    pub name: &'static str,
    /// The raw response body text.
    pub message: String,
}

impl HttpStatusError {
    /// Classifies a status code and body into an `HttpStatusError`.
    pub fn new(status_code: u16, message: String) -> Self {
        HttpStatusError {
            status_code,
            name: reason_name(status_code),
            message,
        }
    }
}

/// Error types for fetch operations.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Underlying network failure (DNS, connect, timeout, body read).
    ///
    /// Propagated unchanged from the transport; not classified or logged here.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response received but the status indicates failure.
    #[error(transparent)]
    Status(#[from] HttpStatusError),

    /// Response body declared a JSON content type but failed to parse.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Returns the classified status error, if this is a status failure.
    pub fn status_error(&self) -> Option<&HttpStatusError> {
        match self {
            FetchError::Status(error) => Some(error),
            _ => None,
        }
    }
}
