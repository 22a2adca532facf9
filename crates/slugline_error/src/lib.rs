//! Error types for the Slugline library.
//!
//! This crate provides the foundation error types used throughout the Slugline workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Classification answers that break the request contract are not errors.
//! They are reported as rejections by the validator and retried by the caller.
//!
//! # Examples
//!
//! ```
//! use slugline_error::{ConfigError, SluglineResult};
//!
//! fn load() -> SluglineResult<String> {
//!     Err(ConfigError::new("header_prefixes must not be empty"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod classification;
mod classifier;
mod config;
mod error;
mod json;

pub use classification::{ClassificationError, ClassificationErrorKind};
pub use classifier::ClassifierError;
pub use config::ConfigError;
pub use error::{SluglineError, SluglineErrorKind, SluglineResult};
pub use json::JsonError;
