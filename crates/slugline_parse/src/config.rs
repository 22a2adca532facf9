//! Parser configuration.

use serde::{Deserialize, Serialize};
use slugline_error::ConfigError;

const HEADER_STEMS: &[&str] = &[
    "INT./EXT", "EXT./INT", "INT/EXT", "EXT/INT", "I/E", "E/I", "INT", "EXT", "INTERIOR",
    "EXTERIOR", "INSIDE", "OUTSIDE",
];

const HEADER_SUFFIXES: &[&str] = &["", ".", "-", ":", " -", " :", ". -"];

const FOOTER_PHRASES: &[&str] = &[
    "THE END",
    "AS BROADCAST",
    "FINAL DRAFT",
    "SHOOTING SCRIPT",
    "REVISED FINAL",
    "DRAFT COMPLETE",
    "END OF SCRIPT",
    "SCRIPT CONCLUDED",
    "COMPLETED DRAFT",
    "FINAL VERSION",
    "END OF DOCUMENT",
    "SCRIPT END",
    "FINAL EDIT",
    "LAST DRAFT",
    "END OF FILE",
    "CONCLUSION",
    "NARRATIVE CONCLUSION",
    "STORY END",
    "FINALE",
    "CLOSING REMARKS",
    "FINAL REMARKS",
    "END OF STORY",
    "SCRIPT COMPLETION",
];

/// Scene heading prefixes: every interior/exterior stem with its punctuation variants.
///
/// # Examples
///
/// ```
/// use slugline_parse::default_header_prefixes;
///
/// let prefixes = default_header_prefixes();
/// assert!(prefixes.iter().any(|p| p == "INT."));
/// assert!(prefixes.iter().any(|p| p == "EXT./INT:"));
/// assert!(prefixes.iter().any(|p| p == "OUTSIDE -"));
/// ```
pub fn default_header_prefixes() -> Vec<String> {
    let mut prefixes = Vec::new();
    for stem in HEADER_STEMS {
        for suffix in HEADER_SUFFIXES {
            let prefix = format!("{}{}", stem, suffix);
            if !prefixes.contains(&prefix) {
                prefixes.push(prefix);
            }
        }
    }
    prefixes
}

/// The closed set of script footer phrases.
pub fn default_footer_phrases() -> Vec<String> {
    FOOTER_PHRASES.iter().map(|p| p.to_string()).collect()
}

fn default_continuation_marker() -> String {
    "\\".to_string()
}

/// Configuration for segmentation and sanitization.
///
/// Missing fields take their defaults, so a TOML file may override only
/// the lists it cares about.
///
/// ```toml
/// [parser]
/// footer_phrases = ["THE END", "PRODUCTION DRAFT"]
/// continuation_marker = "\\"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct ParserConfig {
    /// Case-sensitive prefixes that open a scene
    header_prefixes: Vec<String>,
    /// Footer phrases removed case-insensitively, with punctuation variants
    footer_phrases: Vec<String>,
    /// Marker wrapping stray continuation lines on both ends
    continuation_marker: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            header_prefixes: default_header_prefixes(),
            footer_phrases: default_footer_phrases(),
            continuation_marker: default_continuation_marker(),
        }
    }
}

impl ParserConfig {
    /// Replace the heading prefixes.
    pub fn with_header_prefixes(mut self, prefixes: Vec<String>) -> Self {
        self.header_prefixes = prefixes;
        self
    }

    /// Replace the footer phrases.
    pub fn with_footer_phrases(mut self, phrases: Vec<String>) -> Self {
        self.footer_phrases = phrases;
        self
    }

    /// Replace the continuation marker.
    pub fn with_continuation_marker(mut self, marker: impl Into<String>) -> Self {
        self.continuation_marker = marker.into();
        self
    }

    /// Check the configuration can drive a parse.
    ///
    /// # Errors
    ///
    /// Returns an error if no heading prefix is configured, a prefix or footer
    /// phrase is blank, or the continuation marker is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.header_prefixes.is_empty() {
            return Err(ConfigError::new("header_prefixes must not be empty"));
        }
        if self.header_prefixes.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::new("header_prefixes must not contain blank entries"));
        }
        if self.footer_phrases.iter().any(|p| p.trim().is_empty()) {
            return Err(ConfigError::new("footer_phrases must not contain blank entries"));
        }
        if self.continuation_marker.is_empty() {
            return Err(ConfigError::new("continuation_marker must not be empty"));
        }
        Ok(())
    }
}
