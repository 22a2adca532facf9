//! Classification loop configuration.

use serde::{Deserialize, Serialize};
use slugline_error::ConfigError;

/// How an accepted category reaches other scenes' copies of an element.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BackfillPolicy {
    /// Only the master element and the classified scene's copies are updated.
    /// Later scenes ask again, and the latest answer wins on the master.
    #[default]
    Lazy,
    /// Every scene's copies are updated at once, and later scenes no longer
    /// ask about texts that already carry a category.
    Eager,
}

/// Configuration for [`ScriptClassifier`](crate::ScriptClassifier).
///
/// ```toml
/// [classify]
/// max_attempts = 5
/// backfill = "eager"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct ClassifyConfig {
    /// Attempt ceiling per scene; unbounded when absent
    max_attempts: Option<u32>,
    /// Category back-fill policy
    backfill: BackfillPolicy,
}

impl ClassifyConfig {
    /// Set an attempt ceiling per scene.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Set the back-fill policy.
    pub fn with_backfill(mut self, backfill: BackfillPolicy) -> Self {
        self.backfill = backfill;
        self
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_attempts` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == Some(0) {
            return Err(ConfigError::new("max_attempts must be at least 1"));
        }
        Ok(())
    }
}
