//! Ordered structural parse of a whole corpus.

use crate::{ElementExtractor, ParserConfig, RoleClassifier, SanitizeReport, Sanitizer, Segmenter};
use slugline_core::{LineCorpus, Registry, Scene};
use tracing::{info, instrument};

/// Scenes and sanitation reports produced by [`ScriptParser::parse`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    /// Scenes in document order
    pub scenes: Vec<Scene>,
    /// One sanitation report per scene, same order
    pub sanitize_reports: Vec<SanitizeReport>,
}

impl ParseOutcome {
    /// Total lines removed by sanitation across all scenes.
    pub fn removed_lines(&self) -> usize {
        self.sanitize_reports.iter().map(SanitizeReport::total).sum()
    }
}

/// Runs segmentation, sanitation, extraction and role classification.
///
/// Each scene is fully processed when the segmenter closes it, so the
/// registry sees scenes strictly in document order.
#[derive(Debug, Clone)]
pub struct ScriptParser {
    segmenter: Segmenter,
    sanitizer: Sanitizer,
    extractor: ElementExtractor,
    roles: RoleClassifier,
}

impl ScriptParser {
    /// Build a parser from configuration.
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            segmenter: Segmenter::new(config),
            sanitizer: Sanitizer::new(config),
            extractor: ElementExtractor::new(),
            roles: RoleClassifier::new(),
        }
    }

    /// Parse a corpus, recording every element occurrence in `registry`.
    #[instrument(skip_all, fields(line_count = corpus.len()))]
    pub fn parse(&self, corpus: &LineCorpus, registry: &mut Registry) -> ParseOutcome {
        let mut outcome = ParseOutcome::default();

        self.segmenter.segment(corpus, |mut scene| {
            let report = self.sanitizer.sanitize(&mut scene);
            self.extractor.extract(&mut scene, registry);
            self.roles.classify_scene(&mut scene);
            outcome.sanitize_reports.push(report);
            outcome.scenes.push(scene);
        });

        info!(
            scenes = outcome.scenes.len(),
            removed = outcome.removed_lines(),
            master_elements = registry.len(),
            "Parsed corpus"
        );
        outcome
    }
}
