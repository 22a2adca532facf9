//! Line role classification.

use crate::patterns::{has_balanced_parens, has_voice_over_marker};
use slugline_core::{LineRole, MatchType, Scene};
use tracing::{debug, instrument};

/// Assigns a [`LineRole`] to every line of an extracted scene.
///
/// Classification is a pure function of the line text, its position, the
/// scene header and the match types of the elements found on the line.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleClassifier;

impl RoleClassifier {
    /// Create a role classifier.
    pub fn new() -> Self {
        Self
    }

    /// Classify one line.
    ///
    /// Checks run in priority order: whitespace, repeated header (first line
    /// only), voice-over marker, balanced parentheses, element match types,
    /// and finally [`LineRole::NoElement`].
    ///
    /// # Examples
    ///
    /// ```
    /// use slugline_core::{LineRole, MatchType};
    /// use slugline_parse::RoleClassifier;
    ///
    /// let roles = RoleClassifier::new();
    /// let header = "INT. KITCHEN - DAY";
    /// assert_eq!(roles.classify_line("JOHN", 1, header, &[MatchType::SingleToken]), LineRole::SingleElement);
    /// assert_eq!(roles.classify_line("JOHN (V.O.)", 1, header, &[MatchType::SingleToken]), LineRole::VoiceOver);
    /// assert_eq!(roles.classify_line("(quietly)", 2, header, &[MatchType::Parenthetical]), LineRole::Parenthesis);
    /// assert_eq!(roles.classify_line("Hello there.", 3, header, &[]), LineRole::NoElement);
    /// ```
    pub fn classify_line(
        &self,
        text: &str,
        index: usize,
        header: &str,
        match_types: &[MatchType],
    ) -> LineRole {
        if text.trim().is_empty() {
            LineRole::Whitespace
        } else if index == 0 && text == header {
            // Segmented scenes never hold their own heading line, so only
            // scenes assembled by hand reach this.
            LineRole::Header
        } else if has_voice_over_marker(text) {
            LineRole::VoiceOver
        } else if has_balanced_parens(text) {
            LineRole::Parenthesis
        } else {
            Self::element_role(match_types).unwrap_or(LineRole::NoElement)
        }
    }

    /// Role implied by the elements on a line, if any.
    fn element_role(match_types: &[MatchType]) -> Option<LineRole> {
        let mut singles = 0usize;
        for match_type in match_types {
            match match_type {
                MatchType::MultiTokenGroup | MatchType::MultilineParenthetical => {
                    return Some(LineRole::GroupElement);
                }
                MatchType::SingleToken => singles += 1,
                MatchType::Parenthetical => {}
            }
        }
        match singles {
            0 => None,
            1 => Some(LineRole::SingleElement),
            _ => Some(LineRole::GroupElement),
        }
    }

    /// Assign a role to every line of the scene.
    #[instrument(skip_all, fields(scene_index = scene.index))]
    pub fn classify_scene(&self, scene: &mut Scene) {
        for index in 0..scene.lines.len() {
            let match_types: Vec<MatchType> =
                scene.elements_on(index).map(|e| e.match_type).collect();
            let role = self.classify_line(
                scene.lines[index].text(),
                index,
                &scene.header,
                &match_types,
            );
            scene.lines[index].role = Some(role);
        }
        debug!(lines = scene.lines.len(), "Classified line roles");
    }
}
