//! status_fetch library: a single-purpose HTTP fetch helper.
//!
//! This library performs a GET request against a URL, parses the response body
//! according to its declared content type (JSON or text), and returns the parsed
//! payload. Non-success HTTP statuses surface as a typed [`FetchError`] carrying
//! the status code and body, and emit exactly one structured warning event with
//! the query string stripped from the logged URL.
//!
//! # Example
//!
//! ```no_run
//! use status_fetch::{Body, FetchClient, FetchConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FetchClient::new(&FetchConfig::default())?;
//!
//! match client.fetch("https://www.example.com/status-json").await? {
//!     Body::Json(value) => println!("got JSON: {value}"),
//!     Body::Text(text) => println!("got text: {text}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.
//!
//! Process-wide logger installation (e.g. `env_logger`) is the caller's concern;
//! the default logger only emits through the `log` facade.

#![warn(missing_docs)]

mod body;
mod client;
mod config;
mod error;
mod logging;
mod status;
mod utils;

// Re-export public API
pub use body::Body;
pub use client::FetchClient;
pub use config::FetchConfig;
pub use error::{FetchError, HttpStatusError};
pub use logging::{FetchLogger, LogEvent, WarnLogger, FETCH_ERROR_EVENT};
pub use status::reason_name;
pub use utils::strip_query;
