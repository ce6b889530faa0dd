//! Response body parsing.
//!
//! A successful response resolves to either structured JSON or raw text,
//! selected by the response's declared content type. The dispatch lives here
//! so further body kinds (e.g. binary) can be added without touching callers.

use reqwest::header::{HeaderMap, CONTENT_TYPE};

use crate::error::FetchError;

/// A parsed response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// Body parsed as JSON (content type `application/json` or any `+json` type).
    Json(serde_json::Value),
    /// Body returned as raw text (any other content type, or none declared).
    Text(String),
}

impl Body {
    /// Returns the JSON value, if this body was parsed as JSON.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Body::Json(value) => Some(value),
            Body::Text(_) => None,
        }
    }

    /// Returns the raw text, if this body was resolved as text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Json(_) => None,
            Body::Text(text) => Some(text),
        }
    }
}

/// How a response body should be parsed, derived from its content type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BodyKind {
    Json,
    Text,
}

impl BodyKind {
    /// Selects a parse strategy from the response headers.
    ///
    /// A missing or unreadable `Content-Type` header selects text.
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map_or(BodyKind::Text, BodyKind::from_content_type)
    }

    /// Selects a parse strategy from a `Content-Type` header value.
    ///
    /// JSON is selected for the `application/json` media type and for any
    /// `+json` structured-syntax suffix (e.g. `application/hal+json`).
    /// Parameters such as `charset` are ignored.
    pub(crate) fn from_content_type(content_type: &str) -> Self {
        let media_type = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        if media_type == "application/json" || media_type.ends_with("+json") {
            BodyKind::Json
        } else {
            BodyKind::Text
        }
    }

    /// Parses the raw body text according to this strategy.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Parse` if the body declared JSON but does not parse.
    pub(crate) fn parse(self, text: String) -> Result<Body, FetchError> {
        match self {
            BodyKind::Json => Ok(Body::Json(serde_json::from_str(&text)?)),
            BodyKind::Text => Ok(Body::Text(text)),
        }
    }
}
