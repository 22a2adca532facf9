//! Document-level classification driver.

use crate::{BackfillPolicy, ClassificationLoop, ClassifiedAnswer, ClassifyConfig, RequestBuilder};
use slugline_core::{Registry, Scene};
use slugline_error::{ClassificationError, ClassificationErrorKind, SluglineResult};
use slugline_interface::ElementClassifier;
use slugline_parse::DialogueAssociator;
use tracing::{debug, info, instrument};

/// What happened to one scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneClassification {
    /// Position of the scene in the script
    pub scene_index: usize,
    /// Round-trips made, zero when skipped
    pub attempts: u32,
    /// Whether the scene had nothing to classify
    pub skipped: bool,
    /// Element occurrences given a category from the answer
    pub assigned: usize,
    /// Dialogue runs found after classification
    pub dialogue_runs: usize,
}

/// Per-scene results for a whole script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationSummary {
    /// One entry per scene, in order
    pub scenes: Vec<SceneClassification>,
}

impl ClassificationSummary {
    /// Total round-trips across all scenes.
    pub fn attempts(&self) -> u32 {
        self.scenes.iter().map(|s| s.attempts).sum()
    }

    /// Number of scenes skipped with nothing to classify.
    pub fn skipped(&self) -> usize {
        self.scenes.iter().filter(|s| s.skipped).count()
    }
}

/// Classifies every scene of a parsed script through an [`ElementClassifier`].
///
/// Scenes are classified strictly in order. After a scene's answer is
/// accepted its categories are written back, then cast cues and dialogue
/// are resolved for that scene.
pub struct ScriptClassifier<C: ElementClassifier> {
    classifier: C,
    config: ClassifyConfig,
    builder: RequestBuilder,
    associator: DialogueAssociator,
}

impl<C: ElementClassifier> ScriptClassifier<C> {
    /// Create a driver around a classifier.
    pub fn new(classifier: C, config: ClassifyConfig) -> Self {
        Self {
            classifier,
            config,
            builder: RequestBuilder::new(),
            associator: DialogueAssociator::new(),
        }
    }

    /// The wrapped classifier.
    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Classify every scene in order.
    ///
    /// # Errors
    ///
    /// Stops at the first scene whose classifier call fails or whose attempt
    /// ceiling is reached. Earlier scenes keep their results.
    #[instrument(skip_all, fields(scenes = scenes.len(), backfill = %self.config.backfill()))]
    pub async fn classify_script(
        &self,
        scenes: &mut [Scene],
        registry: &mut Registry,
    ) -> SluglineResult<ClassificationSummary> {
        let mut summary = ClassificationSummary::default();
        for position in 0..scenes.len() {
            summary
                .scenes
                .push(self.classify_at(scenes, position, registry).await?);
        }
        info!(
            attempts = summary.attempts(),
            skipped = summary.skipped(),
            "Classified script"
        );
        Ok(summary)
    }

    /// Classify the scene at `position` within `scenes`.
    ///
    /// Under [`BackfillPolicy::Eager`] the accepted categories are also copied
    /// to the other scenes' elements.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationErrorKind::UnknownScene`] for a position outside
    /// `scenes`, and otherwise fails like [`ScriptClassifier::classify_script`].
    #[instrument(skip(self, scenes, registry), fields(classifier = self.classifier.name()))]
    pub async fn classify_at(
        &self,
        scenes: &mut [Scene],
        position: usize,
        registry: &mut Registry,
    ) -> SluglineResult<SceneClassification> {
        let scene = scenes.get_mut(position).ok_or_else(|| {
            ClassificationError::new(ClassificationErrorKind::UnknownScene(position.to_string()))
        })?;

        let Some((answer, attempts)) = self.request_answer(scene, registry).await? else {
            return Ok(self.finish(scene, registry, 0, 0, true));
        };

        let assigned = Self::apply(scene, registry, &answer);
        scene.meta = Some(answer.meta.clone());
        let result = self.finish(scene, registry, attempts, assigned, false);

        if *self.config.backfill() == BackfillPolicy::Eager {
            let filled = Self::backfill(scenes, position, registry);
            debug!(filled, "Back-filled categories into other scenes");
        }
        Ok(result)
    }

    /// Classify a single scene on its own, without touching other scenes.
    ///
    /// # Errors
    ///
    /// Fails like [`ScriptClassifier::classify_script`].
    pub async fn classify_scene(
        &self,
        scene: &mut Scene,
        registry: &mut Registry,
    ) -> SluglineResult<SceneClassification> {
        self.classify_at(std::slice::from_mut(scene), 0, registry).await
    }

    async fn request_answer(
        &self,
        scene: &mut Scene,
        registry: &mut Registry,
    ) -> SluglineResult<Option<(ClassifiedAnswer, u32)>> {
        let Some(request) = self.builder.build(scene, registry) else {
            debug!(scene_index = scene.index, "Nothing to classify");
            return Ok(None);
        };
        let answer = ClassificationLoop::new(&self.classifier, *self.config.max_attempts())
            .run(&request)
            .await?;
        Ok(Some(answer))
    }

    /// Write accepted categories to the scene's elements and their masters.
    fn apply(scene: &mut Scene, registry: &mut Registry, answer: &ClassifiedAnswer) -> usize {
        let mut assigned = 0usize;
        for element in &mut scene.elements {
            if element.category.is_some() {
                continue;
            }
            if let Some(category) = answer.category_of(&element.text) {
                element.category = Some(category);
                registry.assign_category(element.master_element_id, category);
                assigned += 1;
            }
        }
        assigned
    }

    /// Copy master categories into every other scene's uncategorized elements.
    fn backfill(scenes: &mut [Scene], position: usize, registry: &Registry) -> usize {
        let mut filled = 0usize;
        for (i, scene) in scenes.iter_mut().enumerate() {
            if i == position {
                continue;
            }
            for element in &mut scene.elements {
                if element.category.is_some() {
                    continue;
                }
                if let Some(category) = registry
                    .get(element.master_element_id)
                    .and_then(|master| *master.category())
                {
                    element.category = Some(category);
                    filled += 1;
                }
            }
        }
        filled
    }

    fn finish(
        &self,
        scene: &mut Scene,
        registry: &mut Registry,
        attempts: u32,
        assigned: usize,
        skipped: bool,
    ) -> SceneClassification {
        let runs = self.associator.associate(scene, registry);
        SceneClassification {
            scene_index: scene.index,
            attempts,
            skipped,
            assigned,
            dialogue_runs: runs.len(),
        }
    }
}
