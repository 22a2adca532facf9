//! Core data types for the Slugline screenplay parser.
//!
//! This crate provides the data model shared by every pass: the line corpus
//! produced by PDF extraction, scenes and their annotated lines, scene-scoped
//! elements, and the document-wide master element registry.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod corpus;
mod element;
mod ids;
mod line;
mod registry;
mod role;
mod scene;
mod telemetry;

pub use category::Category;
pub use corpus::{Line, LineCorpus, SourceLine, SourceLineBuilder};
pub use element::{Appearance, DialogueSet, Element, LineRef, MasterElement, MatchType};
pub use ids::{ElementId, MasterElementId, SceneId};
pub use line::{MultilineMark, SceneLine};
pub use registry::{Registry, RegistrySnapshot, UNCLASSIFIED_KEY, normalize_element_text};
pub use role::LineRole;
pub use scene::{Scene, SceneMeta};
pub use telemetry::init_tracing;
