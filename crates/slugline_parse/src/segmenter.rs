//! Scene segmentation at scene headings.

use crate::ParserConfig;
use slugline_core::{LineCorpus, Scene, SceneId, SceneLine};
use tracing::{debug, instrument};

/// Splits a corpus into scenes wherever a line starts with a heading prefix.
#[derive(Debug, Clone)]
pub struct Segmenter {
    prefixes: Vec<String>,
}

impl Segmenter {
    /// Create a segmenter from parser configuration.
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            prefixes: config.header_prefixes().clone(),
        }
    }

    /// Whether the line opens a new scene. Matching is case-sensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use slugline_parse::{ParserConfig, Segmenter};
    ///
    /// let segmenter = Segmenter::new(&ParserConfig::default());
    /// assert!(segmenter.is_header("INT. KITCHEN - DAY"));
    /// assert!(segmenter.is_header("EXT./INT. CAR - NIGHT"));
    /// assert!(!segmenter.is_header("int. kitchen - day"));
    /// assert!(!segmenter.is_header("JOHN"));
    /// ```
    pub fn is_header(&self, text: &str) -> bool {
        self.prefixes.iter().any(|p| text.starts_with(p.as_str()))
    }

    /// Walk the corpus, handing every completed scene to `close` in order.
    ///
    /// Lines before the first heading belong to no scene and are dropped.
    /// A corpus without headings produces no scenes.
    #[instrument(skip_all, fields(line_count = corpus.len()))]
    pub fn segment<F>(&self, corpus: &LineCorpus, mut close: F) -> usize
    where
        F: FnMut(Scene),
    {
        let mut current: Option<Scene> = None;
        let mut index = 0usize;
        let mut discarded = 0usize;

        for line in corpus {
            if self.is_header(&line.text) {
                if let Some(scene) = current.take() {
                    close(scene);
                }
                current = Some(Scene::new(SceneId::new(line.id.clone()), line.text.clone(), index));
                index += 1;
            } else if let Some(scene) = current.as_mut() {
                scene.lines.push(SceneLine::new(line.clone()));
            } else {
                discarded += 1;
            }
        }

        if let Some(scene) = current.take() {
            close(scene);
        }

        debug!(scenes = index, discarded, "Segmented corpus");
        index
    }

    /// Split the corpus into raw, unsanitized scenes.
    pub fn split(&self, corpus: &LineCorpus) -> Vec<Scene> {
        let mut scenes = Vec::new();
        self.segment(corpus, |scene| scenes.push(scene));
        scenes
    }
}
