//! Errors raised by an external element classifier.

/// The external classifier failed to produce an answer at all.
///
/// This covers transport failures (timeouts, refused connections, quota errors).
/// A classifier that answers with the wrong shape does not produce this error;
/// that answer is rejected by the validator and the request is re-issued.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Classifier Error [{}]: {} at line {} in {}", classifier, message, line, file)]
pub struct ClassifierError {
    /// Name of the classifier that failed
    pub classifier: String,
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ClassifierError {
    /// Create a new ClassifierError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use slugline_error::ClassifierError;
    ///
    /// let err = ClassifierError::new("mock", "connection refused");
    /// assert_eq!(err.classifier, "mock");
    /// ```
    #[track_caller]
    pub fn new(classifier: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            classifier: classifier.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
