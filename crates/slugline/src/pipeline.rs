//! End-to-end pipeline from line corpus to classified script.

use crate::SluglineConfig;
use serde::Serialize;
use slugline_classify::{ClassificationSummary, ScriptClassifier};
use slugline_core::{LineCorpus, Registry, RegistrySnapshot, Scene};
use slugline_error::{JsonError, SluglineResult};
use slugline_interface::ElementClassifier;
use slugline_parse::{SanitizeReport, ScriptParser};
use tracing::{info, instrument};

/// Everything produced for one script.
#[derive(Debug, Clone)]
pub struct ScriptReport {
    /// Scenes in document order, with roles, categories and metadata
    pub scenes: Vec<Scene>,
    /// Document-wide element registry
    pub registry: Registry,
    /// Lines dropped per scene
    pub sanitize_reports: Vec<SanitizeReport>,
    /// Per-scene classification results
    pub summary: ClassificationSummary,
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    scenes: &'a [Scene],
    elements: RegistrySnapshot,
}

impl ScriptReport {
    /// The registry grouped by category.
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.registry.snapshot()
    }

    /// Serialize scenes and the registry snapshot as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> SluglineResult<String> {
        let document = ReportDocument {
            scenes: &self.scenes,
            elements: self.snapshot(),
        };
        serde_json::to_string_pretty(&document)
            .map_err(|e| JsonError::new(format!("Failed to serialize script report: {}", e)).into())
    }
}

/// Parses a corpus, then classifies its scenes through an [`ElementClassifier`].
pub struct ScriptPipeline<C: ElementClassifier> {
    parser: ScriptParser,
    classifier: ScriptClassifier<C>,
}

impl<C: ElementClassifier> ScriptPipeline<C> {
    /// Build a pipeline from configuration.
    pub fn new(config: &SluglineConfig, classifier: C) -> Self {
        Self {
            parser: ScriptParser::new(&config.parser),
            classifier: ScriptClassifier::new(classifier, config.classify.clone()),
        }
    }

    /// The structural parser.
    pub fn parser(&self) -> &ScriptParser {
        &self.parser
    }

    /// The classification driver.
    pub fn classifier(&self) -> &ScriptClassifier<C> {
        &self.classifier
    }

    /// Run the whole pipeline over a corpus.
    ///
    /// # Errors
    ///
    /// Returns an error if a scene's classifier call fails or its attempt
    /// ceiling is reached.
    #[instrument(skip_all, fields(line_count = corpus.len()))]
    pub async fn run(&self, corpus: &LineCorpus) -> SluglineResult<ScriptReport> {
        let mut registry = Registry::new();
        let outcome = self.parser.parse(corpus, &mut registry);
        let mut scenes = outcome.scenes;

        let summary = self
            .classifier
            .classify_script(&mut scenes, &mut registry)
            .await?;

        info!(
            scenes = scenes.len(),
            master_elements = registry.len(),
            attempts = summary.attempts(),
            "Pipeline complete"
        );

        Ok(ScriptReport {
            scenes,
            registry,
            sanitize_reports: outcome.sanitize_reports,
            summary,
        })
    }
}
