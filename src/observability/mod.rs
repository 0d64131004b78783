//! Observability for rollcall
//!
//! Structured logging through `tracing`. Every event is one line; in the
//! default `json` format each line is a standalone JSON object, so request
//! logs can be shipped without a parser.
//!
//! # Usage
//!
//! ```ignore
//! use rollcall::observability::{init_logging, LoggingConfig};
//!
//! init_logging(&LoggingConfig::default())?;
//! tracing::info!(table = "CSE101", "lookup id");
//! ```

mod logger;

pub use logger::{init_logging, LogFormat, LoggingConfig, LoggingError};
