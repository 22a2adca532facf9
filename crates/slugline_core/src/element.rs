//! Scene-scoped elements and master elements.

use crate::{Category, ElementId, MasterElementId, SceneId};
use serde::{Deserialize, Serialize};

/// How an element span was matched.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchType {
    /// A run of exactly one all-caps word
    SingleToken,
    /// A run of two or more all-caps words
    MultiTokenGroup,
    /// A `( ... )` span on one line
    Parenthetical,
    /// A parenthetical opened and closed on lines of their own
    MultilineParenthetical,
}

/// Reference to the line an element occurred on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineRef {
    /// Corpus line id
    pub line_id: String,
    /// Index of the line within its scene's retained lines
    pub line_index: usize,
    /// Text of the line
    pub line_text: String,
}

/// One occurrence of an element within a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Document-wide unique occurrence id
    pub id: ElementId,
    /// The registry entry sharing this element's text
    pub master_element_id: MasterElementId,
    /// Scene the occurrence belongs to
    pub scene_id: SceneId,
    /// Normalized element text
    pub text: String,
    /// Category, `None` until classified
    pub category: Option<Category>,
    /// How the span was matched
    pub match_type: MatchType,
    /// Lines the span covers, the attributed line first
    pub occurrences: Vec<LineRef>,
}

impl Element {
    /// Whether the element text is wrapped in parentheses on both ends.
    pub fn is_parenthesized(&self) -> bool {
        self.text.starts_with('(') && self.text.ends_with(')')
    }

    /// Whether the element occurs on the line with index `line_index`.
    pub fn occurs_on(&self, line_index: usize) -> bool {
        self.occurrences.iter().any(|r| r.line_index == line_index)
    }
}

/// A contiguous run of dialogue lines spoken under one cast cue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueSet {
    /// 1-based number of the set within the scene appearance
    pub number: usize,
    /// Text of the cue line that opened the set
    pub cue_text: String,
    /// The dialogue lines in order
    pub lines: Vec<LineRef>,
}

/// All occurrences of a master element within one scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Appearance {
    /// Scene id
    scene_id: SceneId,
    /// Scene index
    scene_index: usize,
    /// Lines within the scene
    line_refs: Vec<LineRef>,
    /// Dialogue spoken by this element in the scene (cast only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    dialogue_sets: Vec<DialogueSet>,
}

impl Appearance {
    pub(crate) fn new(scene_id: SceneId, scene_index: usize, first: LineRef) -> Self {
        Self {
            scene_id,
            scene_index,
            line_refs: vec![first],
            dialogue_sets: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, line_ref: LineRef) {
        self.line_refs.push(line_ref);
    }

    pub(crate) fn set_dialogue_sets(&mut self, sets: Vec<DialogueSet>) {
        self.dialogue_sets = sets;
    }
}

/// The document-wide record for one unique element text.
///
/// Owned by the [`Registry`](crate::Registry); read through getters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MasterElement {
    /// Registry position
    id: MasterElementId,
    /// Normalized, unique text
    text: String,
    /// Category, `None` until classified
    category: Option<Category>,
    /// Per-scene appearances in document order
    appearances: Vec<Appearance>,
}

impl MasterElement {
    pub(crate) fn new(id: MasterElementId, text: String) -> Self {
        Self {
            id,
            text,
            category: None,
            appearances: Vec::new(),
        }
    }

    pub(crate) fn set_category(&mut self, category: Category) -> Option<Category> {
        self.category.replace(category)
    }

    pub(crate) fn appearances_mut(&mut self) -> &mut Vec<Appearance> {
        &mut self.appearances
    }

    /// Total number of line occurrences across every scene.
    pub fn occurrence_count(&self) -> usize {
        self.appearances.iter().map(|a| a.line_refs.len()).sum()
    }
}
