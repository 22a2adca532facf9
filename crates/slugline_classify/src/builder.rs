//! Per-scene classification request building.

use crate::{PromptBuilder, ResponseSchema};
use slugline_core::{Category, Registry, Scene, SceneId};
use slugline_interface::{ClassificationPrompt, ClassificationRequest};
use std::collections::HashSet;
use tracing::debug;

/// Everything needed to ask about one scene, reused across attempts.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct SceneRequest {
    /// Scene being classified
    scene_id: SceneId,
    /// Position of the scene in the script
    scene_index: usize,
    /// Expected answer shape
    schema: ResponseSchema,
    /// Prompt text
    prompt: ClassificationPrompt,
}

impl SceneRequest {
    /// The request for one attempt, numbered from 1.
    pub fn attempt(&self, attempt: u32) -> ClassificationRequest {
        ClassificationRequest::new(
            self.scene_id.clone(),
            self.scene_index,
            attempt,
            self.schema.element_names().clone(),
            self.schema.to_json(),
            self.prompt.clone(),
        )
    }
}

/// Builds [`SceneRequest`]s from extracted scenes.
#[derive(Debug, Clone, Default)]
pub struct RequestBuilder {
    prompts: PromptBuilder,
}

impl RequestBuilder {
    /// Create a request builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Give every parenthesized element the PARENTHESIS category.
    ///
    /// Returns the number of elements resolved.
    pub fn resolve_parentheses(&self, scene: &mut Scene, registry: &mut Registry) -> usize {
        let mut resolved = 0usize;
        for element in &mut scene.elements {
            if element.category.is_none() && element.is_parenthesized() {
                element.category = Some(Category::Parenthesis);
                registry.assign_category(element.master_element_id, Category::Parenthesis);
                resolved += 1;
            }
        }
        resolved
    }

    /// Distinct element texts still lacking a category, in first-seen order.
    pub fn unclassified_names(scene: &Scene) -> Vec<String> {
        let mut seen = HashSet::new();
        scene
            .elements
            .iter()
            .filter(|e| e.category.is_none())
            .filter(|e| seen.insert(e.text.as_str()))
            .map(|e| e.text.clone())
            .collect()
    }

    /// Build the request for a scene.
    ///
    /// Parenthesized elements are resolved first. Returns `None` when no
    /// element is left to classify, in which case the scene is skipped.
    pub fn build(&self, scene: &mut Scene, registry: &mut Registry) -> Option<SceneRequest> {
        let resolved = self.resolve_parentheses(scene, registry);
        let names = Self::unclassified_names(scene);
        debug!(
            scene_index = scene.index,
            resolved,
            requested = names.len(),
            "Built classification request"
        );
        if names.is_empty() {
            return None;
        }

        let prompt = self.prompts.build(scene, &names);
        Some(SceneRequest {
            scene_id: scene.id.clone(),
            scene_index: scene.index,
            schema: ResponseSchema::for_elements(names),
            prompt,
        })
    }
}
