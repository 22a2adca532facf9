//! Scene lines.

use crate::{Line, LineRole};
use serde::{Deserialize, Serialize};

/// Position of a line inside a multiline parenthetical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultilineMark {
    /// The line holding only `(`
    Open,
    /// A line between the opening and closing parenthesis
    Inner,
    /// The line holding only `)`
    Close,
}

/// A line retained in a scene, annotated by the later passes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneLine {
    /// The corpus line
    pub line: Line,
    /// Role assigned by the role classifier, `None` until that pass runs
    pub role: Option<LineRole>,
    /// Set when the line belongs to a multiline parenthetical
    pub multiline: Option<MultilineMark>,
}

impl SceneLine {
    /// Wrap a corpus line with no annotations.
    pub fn new(line: Line) -> Self {
        Self {
            line,
            role: None,
            multiline: None,
        }
    }

    /// Raw text of the line.
    pub fn text(&self) -> &str {
        &self.line.text
    }

    /// Identifier of the line.
    pub fn id(&self) -> &str {
        &self.line.id
    }

    /// Whether the role classifier put this line under `role`.
    pub fn has_role(&self, role: LineRole) -> bool {
        self.role == Some(role)
    }
}
