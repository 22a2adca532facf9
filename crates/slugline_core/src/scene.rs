//! Scenes.

use crate::{Element, LineRole, SceneId, SceneLine};
use serde::{Deserialize, Serialize};

/// Scene-level facts reported by the external classifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneMeta {
    /// Whether the scene contains dialogue
    pub is_dialogue_in_scene: bool,
    /// Whether the scene contains dual (simultaneous) dialogue
    pub dual_dialogue: bool,
    /// Cast names present in the scene
    pub cast_in_scene: Vec<String>,
}

/// A contiguous run of lines opened by a scene heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Id of the heading line that opened the scene
    pub id: SceneId,
    /// Text of the heading line
    pub header: String,
    /// Position in the script, contiguous from 0
    pub index: usize,
    /// Retained lines, never including a heading
    pub lines: Vec<SceneLine>,
    /// Element occurrences in line order
    pub elements: Vec<Element>,
    /// Retained line texts joined with `\`
    pub clean_text: String,
    /// Metadata from an accepted classification answer
    pub meta: Option<SceneMeta>,
}

impl Scene {
    /// Open an empty scene for a heading.
    pub fn new(id: SceneId, header: impl Into<String>, index: usize) -> Self {
        Self {
            id,
            header: header.into(),
            index,
            lines: Vec::new(),
            elements: Vec::new(),
            clean_text: String::new(),
            meta: None,
        }
    }

    /// Elements occurring on the line with index `line_index`.
    pub fn elements_on(&self, line_index: usize) -> impl Iterator<Item = &Element> {
        self.elements
            .iter()
            .filter(move |e| e.occurs_on(line_index))
    }

    /// Lines currently carrying `role`.
    pub fn lines_with_role(&self, role: LineRole) -> impl Iterator<Item = &SceneLine> {
        self.lines.iter().filter(move |l| l.has_role(role))
    }

    /// Rebuild [`Scene::clean_text`] from the retained lines.
    pub fn refresh_clean_text(&mut self) {
        self.clean_text = self
            .lines
            .iter()
            .map(|l| l.text().replace('\n', ""))
            .collect::<Vec<_>>()
            .join("\\");
    }
}
