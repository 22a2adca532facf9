//! Line roles.

use serde::{Deserialize, Serialize};

/// The semantic role of a single scene line.
///
/// Roles are first assigned by the line role classifier, then refined by the
/// dialogue associator (`Cast*` and `Dialogue` only appear after refinement).
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
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum LineRole {
    /// Blank or whitespace-only line
    Whitespace,
    /// Repeats the scene heading
    Header,
    /// Carries a voice-over marker
    VoiceOver,
    /// Contains a balanced parenthesis pair
    Parenthesis,
    /// Carries a single one-word element
    SingleElement,
    /// Carries a multi-word element, several elements, or belongs to a multiline parenthetical
    GroupElement,
    /// No element on the line
    NoElement,
    /// Cast cue consisting of the cast name alone
    CastNormal,
    /// Cast cue with a voice-over marker
    CastNarrative,
    /// Cast name mentioned inside other text
    CastContext,
    /// Part of a dialogue block under a cast cue
    Dialogue,
}

impl LineRole {
    /// Whether this role is one of the refined cast roles.
    pub fn is_cast(self) -> bool {
        matches!(
            self,
            LineRole::CastNormal | LineRole::CastNarrative | LineRole::CastContext
        )
    }

    /// Whether the role was derived from an extracted element.
    pub fn is_element(self) -> bool {
        matches!(self, LineRole::SingleElement | LineRole::GroupElement)
    }
}
