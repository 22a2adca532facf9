//! Cast cue refinement and dialogue block detection.

use crate::patterns::{has_voice_over_marker, is_all_caps};
use slugline_core::{
    Category, DialogueSet, LineRef, LineRole, MasterElementId, MultilineMark, Registry, Scene,
};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// A contiguous run of dialogue under one cast cue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueRun {
    /// Line index of the cue
    pub cue_index: usize,
    /// Text of the cue line
    pub cue_text: String,
    /// The cast element named by the cue
    pub master_element_id: Option<MasterElementId>,
    /// Dialogue lines in order
    pub lines: Vec<LineRef>,
}

/// Refines cast cue lines and groups the dialogue that follows them.
///
/// Runs after element categories are known; lines without a CAST element
/// are never refined.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogueAssociator;

impl DialogueAssociator {
    /// Create an associator.
    pub fn new() -> Self {
        Self
    }

    /// Refine element-bearing lines that name a CAST element.
    ///
    /// A line holding only the cast name becomes [`LineRole::CastNormal`], a
    /// line with a voice-over marker [`LineRole::CastNarrative`], anything
    /// else [`LineRole::CastContext`]. Returns the number of refined lines.
    pub fn refine_cast(&self, scene: &mut Scene) -> usize {
        let mut refined = 0usize;
        for index in 0..scene.lines.len() {
            let eligible = matches!(
                scene.lines[index].role,
                Some(LineRole::SingleElement | LineRole::GroupElement | LineRole::VoiceOver)
            );
            if !eligible {
                continue;
            }
            let Some(cast) = scene
                .elements_on(index)
                .find(|e| e.category == Some(Category::Cast))
            else {
                continue;
            };

            let text = scene.lines[index].text();
            let role = if text.trim().to_lowercase() == cast.text.to_lowercase() {
                LineRole::CastNormal
            } else if has_voice_over_marker(text) {
                LineRole::CastNarrative
            } else {
                LineRole::CastContext
            };
            scene.lines[index].role = Some(role);
            refined += 1;
        }
        refined
    }

    /// Relabel the lines following each cast cue as dialogue.
    ///
    /// Lines without elements become [`LineRole::Dialogue`], and so do the
    /// opening and closing lines of a multiline parenthetical. Inner lines of
    /// that span are group elements and end the block like any other element
    /// line. A parenthesis line that is not all caps stays a parenthesis and
    /// keeps the block open.
    pub fn detect_dialogue(&self, scene: &mut Scene) -> Vec<DialogueRun> {
        let mut runs = Vec::new();
        let mut current: Option<DialogueRun> = None;

        for index in 0..scene.lines.len() {
            let role = scene.lines[index].role;

            if role.is_some_and(LineRole::is_cast) {
                if let Some(run) = current.take() {
                    Self::flush(&mut runs, run);
                }
                current = Some(DialogueRun {
                    cue_index: index,
                    cue_text: scene.lines[index].text().to_string(),
                    master_element_id: scene
                        .elements_on(index)
                        .find(|e| e.category == Some(Category::Cast))
                        .map(|e| e.master_element_id),
                    lines: Vec::new(),
                });
                continue;
            }

            let Some(run) = current.as_mut() else {
                continue;
            };

            let line = &mut scene.lines[index];
            let marker = matches!(
                line.multiline,
                Some(MultilineMark::Open | MultilineMark::Close)
            );
            let continues = if marker || role == Some(LineRole::NoElement) {
                line.role = Some(LineRole::Dialogue);
                run.lines.push(LineRef {
                    line_id: line.id().to_string(),
                    line_index: index,
                    line_text: line.text().to_string(),
                });
                true
            } else {
                role == Some(LineRole::Parenthesis) && !is_all_caps(line.text())
            };

            if !continues {
                if let Some(run) = current.take() {
                    Self::flush(&mut runs, run);
                }
            }
        }

        if let Some(run) = current.take() {
            Self::flush(&mut runs, run);
        }
        runs
    }

    fn flush(runs: &mut Vec<DialogueRun>, run: DialogueRun) {
        if !run.lines.is_empty() {
            runs.push(run);
        }
    }

    /// Group dialogue runs into numbered sets per cast element.
    pub fn dialogue_sets(runs: &[DialogueRun]) -> BTreeMap<MasterElementId, Vec<DialogueSet>> {
        let mut sets: BTreeMap<MasterElementId, Vec<DialogueSet>> = BTreeMap::new();
        for run in runs {
            let Some(id) = run.master_element_id else {
                continue;
            };
            let entry = sets.entry(id).or_default();
            let number = entry.len() + 1;
            entry.push(DialogueSet {
                number,
                cue_text: run.cue_text.clone(),
                lines: run.lines.clone(),
            });
        }
        sets
    }

    /// Refine cast cues, detect dialogue and attach dialogue sets to the registry.
    #[instrument(skip_all, fields(scene_index = scene.index))]
    pub fn associate(&self, scene: &mut Scene, registry: &mut Registry) -> Vec<DialogueRun> {
        let cues = self.refine_cast(scene);
        let runs = self.detect_dialogue(scene);

        for (id, sets) in Self::dialogue_sets(&runs) {
            registry.attach_dialogue_sets(id, &scene.id, sets);
        }

        debug!(cues, runs = runs.len(), "Associated dialogue");
        runs
    }
}
