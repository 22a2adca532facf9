//! Identifier newtypes.

use serde::{Deserialize, Serialize};

/// Identifier of a scene.
///
/// A scene is identified by the id of the line that opened it, which the
/// extraction collaborator guarantees to be unique and stable.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    /// Create a scene id from its header line id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Identifier of a master element, its position in the registry.
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
    derive_more::Display,
)]
#[display("master-{}", _0)]
#[serde(transparent)]
pub struct MasterElementId(pub usize);

/// Identifier of a scene-scoped element occurrence, unique across the document.
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
    derive_more::Display,
)]
#[display("element-{}", _0)]
#[serde(transparent)]
pub struct ElementId(pub usize);
