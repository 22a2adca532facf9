//! Trait definitions for element classifiers.

use crate::ClassificationRequest;
use async_trait::async_trait;
use slugline_error::SluglineResult;

/// Narrow seam to the external classifier (typically a language model).
///
/// Implementations answer with raw text that should contain one JSON object
/// shaped like the request schema. The answer is validated by the caller and
/// the request re-issued on a contract violation, so implementations need not
/// check the shape themselves.
#[async_trait]
pub trait ElementClassifier: Send + Sync {
    /// Produce an answer for one classification attempt.
    ///
    /// # Errors
    ///
    /// Returns an error only when no answer could be obtained at all
    /// (transport failure, quota, timeout).
    async fn classify(&self, request: &ClassificationRequest) -> SluglineResult<String>;

    /// Classifier name used in logs and errors.
    fn name(&self) -> &str;
}
