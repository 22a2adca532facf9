//! Slugline - screenplay structure from PDF text lines
//!
//! Slugline rebuilds the structure of a screenplay from the flat, ordered
//! text lines a PDF extractor produces. It finds scenes, strips page
//! furniture, extracts candidate elements (names, props, parentheticals),
//! tags every line with a role, and asks an external classifier (typically
//! a language model) to categorize the elements of each scene.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use slugline::{LineCorpus, ScriptPipeline, SluglineConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     slugline::init_tracing()?;
//!     let config = SluglineConfig::load()?;
//!     let corpus = LineCorpus::from_texts(["INT. KITCHEN - DAY", "JOHN", "Hello there."]);
//!
//!     let pipeline = ScriptPipeline::new(&config, MyClassifier::default());
//!     let report = pipeline.run(&corpus).await?;
//!     println!("{}", report.to_json()?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `slugline_error` - Error types
//! - `slugline_core` - Lines, scenes, elements, roles and the registry
//! - `slugline_interface` - ElementClassifier trait and request types
//! - `slugline_parse` - Segmentation, sanitization, extraction, roles, dialogue
//! - `slugline_classify` - Request building, validation and the retry loop
//!
//! This crate (`slugline`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod pipeline;

pub use config::SluglineConfig;
pub use pipeline::{ScriptPipeline, ScriptReport};

pub use slugline_classify::*;
pub use slugline_core::*;
pub use slugline_error::*;
pub use slugline_interface::*;
pub use slugline_parse::*;
