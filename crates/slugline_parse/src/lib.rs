//! Screenplay structure reconstruction.
//!
//! Turns a flat [`LineCorpus`](slugline_core::LineCorpus) into scenes whose
//! lines carry semantic roles, and fills the master element
//! [`Registry`](slugline_core::Registry) along the way.
//!
//! # Passes
//!
//! 1. [`Segmenter`] splits the corpus at scene headings
//! 2. [`Sanitizer`] drops footers, page numbers and other noise
//! 3. [`ElementExtractor`] captures capitalized runs and parentheticals
//! 4. [`RoleClassifier`] assigns a [`LineRole`](slugline_core::LineRole) to every line
//! 5. [`DialogueAssociator`] refines cast cues and marks dialogue, once
//!    element categories are known
//!
//! Passes 1-4 run in one ordered sweep through [`ScriptParser`].
//!
//! # Example
//!
//! ```
//! use slugline_core::{LineCorpus, Registry};
//! use slugline_parse::{ParserConfig, ScriptParser};
//!
//! let corpus = LineCorpus::from_texts([
//!     "INT. KITCHEN - DAY",
//!     "JOHN",
//!     "Hello there.",
//!     "EXT. PARK - DAY",
//!     "Birds chirp.",
//! ]);
//!
//! let parser = ScriptParser::new(&ParserConfig::default());
//! let mut registry = Registry::new();
//! let outcome = parser.parse(&corpus, &mut registry);
//!
//! assert_eq!(outcome.scenes.len(), 2);
//! assert_eq!(outcome.scenes[0].elements[0].text, "JOHN");
//! assert!(outcome.scenes[1].elements.is_empty());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dialogue;
mod extraction;
mod parser;
mod patterns;
mod roles;
mod sanitizer;
mod segmenter;

pub use config::{ParserConfig, default_footer_phrases, default_header_prefixes};
pub use dialogue::{DialogueAssociator, DialogueRun};
pub use extraction::{ElementExtractor, ExtractionReport};
pub use parser::{ParseOutcome, ScriptParser};
pub use patterns::{has_balanced_parens, has_voice_over_marker};
pub use roles::RoleClassifier;
pub use sanitizer::{FooterMatcher, RemovalReason, SanitizeReport, Sanitizer};
pub use segmenter::Segmenter;
