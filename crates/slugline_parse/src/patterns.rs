//! Shared text patterns.

use regex::Regex;
use std::sync::LazyLock;

/// `( letters and spaces )` on a single line.
pub(crate) static PARENTHETICAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([A-Za-z\s]+\)").expect("parenthetical regex is valid"));

/// A maximal run of all-caps words, each at least two letters long.
pub(crate) static CAPITALIZED_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z]{2,}\b(?:[ \t]+[A-Z]{2,}\b)*").expect("capitalized run regex is valid")
});

static VOICE_OVER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:V\.O|VO|VOICE[ -]?OVER)\b").expect("voice-over regex is valid")
});

static PAGE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.$").expect("page number regex is valid"));

/// Whether the text carries a voice-over marker (`V.O.`, `V.O`, `VO`, `VOICE OVER`).
///
/// Markers must stand as whole words, so `avoid` does not count.
///
/// # Examples
///
/// ```
/// use slugline_parse::has_voice_over_marker;
///
/// assert!(has_voice_over_marker("JOHN (V.O.)"));
/// assert!(has_voice_over_marker("narrator (voice over)"));
/// assert!(!has_voice_over_marker("He tries to avoid her."));
/// ```
pub fn has_voice_over_marker(text: &str) -> bool {
    VOICE_OVER.is_match(text)
}

/// Whether an opening parenthesis is followed later by a closing one.
///
/// # Examples
///
/// ```
/// use slugline_parse::has_balanced_parens;
///
/// assert!(has_balanced_parens("(quietly)"));
/// assert!(!has_balanced_parens(") backwards ("));
/// assert!(!has_balanced_parens("("));
/// ```
pub fn has_balanced_parens(text: &str) -> bool {
    match text.find('(') {
        Some(open) => text[open..].contains(')'),
        None => false,
    }
}

pub(crate) fn is_page_number(text: &str) -> bool {
    PAGE_NUMBER.is_match(text)
}

/// Whether every cased character of the text is uppercase.
pub(crate) fn is_all_caps(text: &str) -> bool {
    text == text.to_uppercase()
}
