//! Top-level error wrapper types.

use crate::{ClassificationError, ClassifierError, ConfigError, JsonError};

/// Union of every error family in the workspace.
///
/// # Examples
///
/// ```
/// use slugline_error::{JsonError, SluglineError};
///
/// let err: SluglineError = JsonError::new("unexpected end of input").into();
/// assert!(format!("{}", err).contains("JSON Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SluglineErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON extraction or parse error
    #[from(JsonError)]
    Json(JsonError),
    /// External classifier failed to answer
    #[from(ClassifierError)]
    Classifier(ClassifierError),
    /// Classification loop error
    #[from(ClassificationError)]
    Classification(ClassificationError),
}

/// Slugline error with kind discrimination.
///
/// # Examples
///
/// ```
/// use slugline_error::{ConfigError, SluglineErrorKind, SluglineResult};
///
/// fn might_fail() -> SluglineResult<()> {
///     Err(ConfigError::new("bad prefix"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), SluglineErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Slugline Error: {}", _0)]
pub struct SluglineError(Box<SluglineErrorKind>);

impl SluglineError {
    /// Create a new error from a kind.
    pub fn new(kind: SluglineErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SluglineErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to SluglineErrorKind
impl<T> From<T> for SluglineError
where
    T: Into<SluglineErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Slugline operations.
pub type SluglineResult<T> = std::result::Result<T, SluglineError>;
