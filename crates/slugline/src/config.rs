//! Layered configuration loading.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from slugline.toml)
//! - User config (~/.config/slugline/slugline.toml)
//! - Project config (./slugline.toml)

use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use slugline_classify::ClassifyConfig;
use slugline_error::{ConfigError, SluglineError, SluglineResult};
use slugline_parse::ParserConfig;
use tracing::{debug, instrument};

/// Complete configuration for a [`ScriptPipeline`](crate::ScriptPipeline).
///
/// # Example
///
/// ```toml
/// [parser]
/// continuation_marker = "\\"
///
/// [classify]
/// backfill = "eager"
/// max_attempts = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SluglineConfig {
    /// Segmentation and sanitization settings
    pub parser: ParserConfig,
    /// Classification loop settings
    pub classify: ClassifyConfig,
}

impl SluglineConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> SluglineResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                SluglineError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SluglineError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and skipped when absent.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use slugline::SluglineConfig;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = SluglineConfig::load()?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument]
    pub fn load() -> SluglineResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../slugline.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/slugline/slugline.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("slugline").required(false));

        let config: Self = builder
            .build()
            .map_err(|e| {
                SluglineError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SluglineError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }

    /// Check both sections.
    ///
    /// # Errors
    ///
    /// Returns the first section's configuration error.
    pub fn validate(&self) -> SluglineResult<()> {
        self.parser.validate()?;
        self.classify.validate()?;
        Ok(())
    }
}
