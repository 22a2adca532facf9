//! The request, validate and retry state machine.

use crate::{ClassifiedAnswer, RejectReason, ResponseValidator, SceneRequest, Validation, parse_answer};
use slugline_error::{ClassificationError, ClassificationErrorKind, SluglineResult};
use slugline_interface::ElementClassifier;
use tracing::{info, instrument, warn};

/// Result of one round-trip to the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// The answer conforms and was read
    Accepted(ClassifiedAnswer),
    /// The answer breaks the contract; ask again
    Retry(RejectReason),
}

/// Drives one scene's classification until an answer is accepted.
///
/// Attempts run sequentially. Without a ceiling the loop only ends on an
/// accepted answer or a classifier error.
pub struct ClassificationLoop<'a, C: ElementClassifier + ?Sized> {
    classifier: &'a C,
    max_attempts: Option<u32>,
}

impl<'a, C: ElementClassifier + ?Sized> ClassificationLoop<'a, C> {
    /// Create a loop over a classifier with an optional attempt ceiling.
    pub fn new(classifier: &'a C, max_attempts: Option<u32>) -> Self {
        Self {
            classifier,
            max_attempts,
        }
    }

    /// Make one attempt.
    ///
    /// # Errors
    ///
    /// Returns the classifier's error if it produced no answer.
    pub async fn attempt(&self, request: &SceneRequest, attempt: u32) -> SluglineResult<AttemptOutcome> {
        let answer = self.classifier.classify(&request.attempt(attempt)).await?;

        let value = match parse_answer(&answer) {
            Ok(value) => value,
            Err(reason) => return Ok(AttemptOutcome::Retry(reason)),
        };

        match ResponseValidator::validate(request.schema().root(), &value) {
            Validation::Accepted => Ok(AttemptOutcome::Accepted(ClassifiedAnswer::from_validated(
                request.schema(),
                &value,
            )?)),
            Validation::Rejected(reason) => Ok(AttemptOutcome::Retry(reason)),
        }
    }

    /// Attempt until accepted. Returns the answer and the attempts used.
    ///
    /// # Errors
    ///
    /// Returns the classifier's error if it produced no answer, or
    /// [`ClassificationErrorKind::AttemptsExhausted`] when the ceiling is hit.
    #[instrument(
        skip_all,
        fields(
            scene_index = request.scene_index(),
            classifier = self.classifier.name(),
            elements = request.schema().element_names().len()
        )
    )]
    pub async fn run(&self, request: &SceneRequest) -> SluglineResult<(ClassifiedAnswer, u32)> {
        let mut attempt = 1u32;
        loop {
            match self.attempt(request, attempt).await? {
                AttemptOutcome::Accepted(answer) => {
                    info!(attempt, "Classification accepted");
                    return Ok((answer, attempt));
                }
                AttemptOutcome::Retry(reason) => {
                    warn!(attempt, %reason, "Classification rejected, retrying");
                    if self.max_attempts.is_some_and(|max| attempt >= max) {
                        return Err(ClassificationError::new(
                            ClassificationErrorKind::AttemptsExhausted {
                                scene_index: *request.scene_index(),
                                attempts: attempt,
                            },
                        )
                        .into());
                    }
                    attempt += 1;
                }
            }
        }
    }
}
