//! Classification loop error types.

/// Specific error conditions for the classification loop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ClassificationErrorKind {
    /// The configured attempt ceiling was reached without a valid answer
    #[display(
        "Scene {} was rejected on all {} classification attempts",
        scene_index,
        attempts
    )]
    AttemptsExhausted {
        /// Index of the scene being classified
        scene_index: usize,
        /// Number of attempts made
        attempts: u32,
    },
    /// A request referenced a scene that is not part of the script
    #[display("Unknown scene: {}", _0)]
    UnknownScene(String),
    /// An accepted answer could not be converted into categories
    #[display("Malformed answer: {}", _0)]
    MalformedAnswer(String),
}

/// Error type for classification operations.
///
/// # Examples
///
/// ```
/// use slugline_error::{ClassificationError, ClassificationErrorKind};
///
/// let err = ClassificationError::new(ClassificationErrorKind::AttemptsExhausted {
///     scene_index: 3,
///     attempts: 5,
/// });
/// assert!(format!("{}", err).contains("5 classification attempts"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Classification Error: {} at line {} in {}", kind, line, file)]
pub struct ClassificationError {
    /// The specific error condition
    pub kind: ClassificationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ClassificationError {
    /// Create a new ClassificationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ClassificationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
