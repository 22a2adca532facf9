//! Scene sanitization: drop noise lines recovered from page furniture.

use crate::{ParserConfig, patterns};
use serde::{Deserialize, Serialize};
use slugline_core::Scene;
use tracing::{debug, instrument};

/// Why a line was dropped, in the order the predicates are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Blank or whitespace-only
    Blank,
    /// Contains a known footer phrase
    Footer,
    /// Contains `CONTINUED`
    Continued,
    /// A bare page number such as `12.`
    PageNumber,
    /// Starts and ends with the continuation marker
    Wrapped,
}

/// Per-scene counts of removed lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeReport {
    /// Scene index the report belongs to
    pub scene_index: usize,
    /// Blank lines removed
    pub blank: usize,
    /// Footer lines removed
    pub footer: usize,
    /// `CONTINUED` lines removed
    pub continued: usize,
    /// Page numbers removed
    pub page_number: usize,
    /// Marker-wrapped lines removed
    pub wrapped: usize,
}

impl SanitizeReport {
    fn count(&mut self, reason: RemovalReason) {
        match reason {
            RemovalReason::Blank => self.blank += 1,
            RemovalReason::Footer => self.footer += 1,
            RemovalReason::Continued => self.continued += 1,
            RemovalReason::PageNumber => self.page_number += 1,
            RemovalReason::Wrapped => self.wrapped += 1,
        }
    }

    /// Total lines removed.
    pub fn total(&self) -> usize {
        self.blank + self.footer + self.continued + self.page_number + self.wrapped
    }
}

/// Case-insensitive footer matcher over every punctuation variant of each phrase.
///
/// # Examples
///
/// ```
/// use slugline_parse::FooterMatcher;
///
/// let matcher = FooterMatcher::new(["THE END"]);
/// assert!(matcher.matches("the end"));
/// assert!(matcher.matches("THE_END/"));
/// assert!(matcher.matches("<<THE END"));
/// assert!(!matcher.matches("The door swings open."));
/// ```
#[derive(Debug, Clone)]
pub struct FooterMatcher {
    variants: Vec<String>,
}

impl FooterMatcher {
    /// Build a matcher from footer phrases.
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut variants = Vec::new();
        for phrase in phrases {
            let phrase = phrase.as_ref().trim().to_uppercase();
            if phrase.is_empty() {
                continue;
            }
            for variant in Self::variants_of(&phrase) {
                if !variants.contains(&variant) {
                    variants.push(variant);
                }
            }
        }
        Self { variants }
    }

    fn variants_of(phrase: &str) -> Vec<String> {
        let snake = phrase.replace(' ', "_");
        vec![
            phrase.to_string(),
            format!("{}/", phrase),
            format!("/{}", phrase),
            format!("\"{}\"", phrase),
            format!("({})", phrase),
            format!("{} -", phrase),
            format!("- {}", phrase),
            format!("{}:", phrase),
            format!("{};", phrase),
            snake.clone(),
            format!("{}...", phrase),
            format!("{}/", snake),
            format!("/{}", snake),
            format!("\u{201c}{}\u{201d}", phrase),
            format!("{}>>", phrase),
            format!("<<{}", phrase),
            format!("{}->", phrase),
            format!("->{}", phrase),
        ]
    }

    /// Whether the line contains any footer variant.
    pub fn matches(&self, text: &str) -> bool {
        let upper = text.to_uppercase();
        self.variants.iter().any(|v| upper.contains(v.as_str()))
    }
}

/// Drops noise lines from a scene.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    footers: FooterMatcher,
    continuation_marker: String,
}

impl Sanitizer {
    /// Create a sanitizer from parser configuration.
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            footers: FooterMatcher::new(config.footer_phrases()),
            continuation_marker: config.continuation_marker().clone(),
        }
    }

    /// The first removal predicate the line matches, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use slugline_parse::{ParserConfig, RemovalReason, Sanitizer};
    ///
    /// let sanitizer = Sanitizer::new(&ParserConfig::default());
    /// assert_eq!(sanitizer.removal_reason("   "), Some(RemovalReason::Blank));
    /// assert_eq!(sanitizer.removal_reason("(CONTINUED)"), Some(RemovalReason::Continued));
    /// assert_eq!(sanitizer.removal_reason("42."), Some(RemovalReason::PageNumber));
    /// assert_eq!(sanitizer.removal_reason(r"\ stray \"), Some(RemovalReason::Wrapped));
    /// assert_eq!(sanitizer.removal_reason("She waits."), None);
    /// ```
    pub fn removal_reason(&self, text: &str) -> Option<RemovalReason> {
        if text.trim().is_empty() {
            Some(RemovalReason::Blank)
        } else if self.footers.matches(text) {
            Some(RemovalReason::Footer)
        } else if text.to_uppercase().contains("CONTINUED") {
            Some(RemovalReason::Continued)
        } else if patterns::is_page_number(text) {
            Some(RemovalReason::PageNumber)
        } else if text.starts_with(self.continuation_marker.as_str())
            && text.ends_with(self.continuation_marker.as_str())
        {
            Some(RemovalReason::Wrapped)
        } else {
            None
        }
    }

    /// Filter the scene's lines in place and refresh its clean text.
    #[instrument(skip(self, scene), fields(scene_index = scene.index))]
    pub fn sanitize(&self, scene: &mut Scene) -> SanitizeReport {
        let mut report = SanitizeReport {
            scene_index: scene.index,
            ..SanitizeReport::default()
        };

        scene.lines.retain(|line| match self.removal_reason(line.text()) {
            Some(reason) => {
                report.count(reason);
                false
            }
            None => true,
        });
        scene.refresh_clean_text();

        debug!(
            retained = scene.lines.len(),
            removed = report.total(),
            blank = report.blank,
            footer = report.footer,
            continued = report.continued,
            page_number = report.page_number,
            wrapped = report.wrapped,
            "Sanitized scene"
        );
        report
    }
}
