//! Trait definitions for the external classification collaborator.
//!
//! The parser never decides element categories itself. It builds a
//! [`ClassificationRequest`] naming the elements of one scene, hands it to an
//! [`ElementClassifier`], and validates whatever comes back.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod request;
mod traits;

pub use request::{
    ClassificationPrompt, ClassificationPromptBuilder, ClassificationRequest,
    ClassificationRequestBuilder,
};
pub use traits::ElementClassifier;
