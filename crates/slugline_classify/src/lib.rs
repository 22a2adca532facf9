//! Element classification for parsed screenplays.
//!
//! For each scene, in order:
//!
//! 1. [`RequestBuilder`] resolves parenthesized elements structurally and
//!    builds a [`ResponseSchema`] naming every element still lacking a category
//! 2. [`ClassificationLoop`] sends the request to an
//!    [`ElementClassifier`](slugline_interface::ElementClassifier) and
//!    re-issues it until the [`ResponseValidator`] accepts the answer
//! 3. [`ScriptClassifier`] writes the categories back to the scene and the
//!    registry, then runs cast refinement and dialogue detection
//!
//! Scenes with nothing to classify are skipped without a round-trip.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod answer;
mod builder;
mod config;
mod driver;
mod extraction;
mod prompt;
mod retry;
mod schema;
mod validator;

pub use answer::ClassifiedAnswer;
pub use builder::{RequestBuilder, SceneRequest};
pub use config::{BackfillPolicy, ClassifyConfig};
pub use driver::{ClassificationSummary, SceneClassification, ScriptClassifier};
pub use extraction::{extract_json, parse_answer};
pub use prompt::PromptBuilder;
pub use retry::{AttemptOutcome, ClassificationLoop};
pub use schema::{CATEGORY_FIELD, META_FIELD, ResponseSchema, SchemaNode};
pub use validator::{RejectReason, ResponseValidator, Validation};
