//! Element extraction: capitalized runs and parenthetical spans.

use crate::patterns::{CAPITALIZED_RUN, PARENTHETICAL};
use slugline_core::{
    Element, LineRef, MatchType, MultilineMark, Registry, Scene, normalize_element_text,
};
use std::collections::HashSet;
use tracing::{debug, instrument, warn};

/// Counts produced by one extraction pass over a scene.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionReport {
    /// Element occurrences recorded
    pub elements: usize,
    /// Distinct element texts among them
    pub unique: usize,
}

/// A span found on one line, before registration.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Span {
    start: usize,
    text: String,
    match_type: MatchType,
}

/// Multiline parenthetical accumulation state.
#[derive(Debug)]
enum Multiline {
    Idle,
    Open {
        start_index: usize,
        text: String,
        refs: Vec<LineRef>,
    },
}

/// Scans scene lines for element spans and records them in the registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementExtractor;

impl ElementExtractor {
    /// Create an extractor.
    pub fn new() -> Self {
        Self
    }

    /// Element spans on a single line, ordered by position.
    ///
    /// Parentheticals and capitalized runs are matched independently. A run
    /// is one span however many words it holds: one word makes a
    /// [`MatchType::SingleToken`], two or more a [`MatchType::MultiTokenGroup`].
    ///
    /// # Examples
    ///
    /// ```
    /// use slugline_core::MatchType;
    /// use slugline_parse::ElementExtractor;
    ///
    /// let spans = ElementExtractor::new().line_spans("The BIG DOG (softly) sees JOHN.");
    /// assert_eq!(
    ///     spans,
    ///     vec![
    ///         ("BIG DOG".to_string(), MatchType::MultiTokenGroup),
    ///         ("(softly)".to_string(), MatchType::Parenthetical),
    ///         ("JOHN".to_string(), MatchType::SingleToken),
    ///     ]
    /// );
    /// ```
    pub fn line_spans(&self, text: &str) -> Vec<(String, MatchType)> {
        Self::spans(text)
            .into_iter()
            .map(|s| (s.text, s.match_type))
            .collect()
    }

    fn spans(text: &str) -> Vec<Span> {
        let mut spans: Vec<Span> = PARENTHETICAL
            .find_iter(text)
            .map(|m| Span {
                start: m.start(),
                text: m.as_str().to_string(),
                match_type: MatchType::Parenthetical,
            })
            .collect();

        spans.extend(CAPITALIZED_RUN.find_iter(text).map(|m| {
            let words = m.as_str().split_whitespace().count();
            Span {
                start: m.start(),
                text: m.as_str().to_string(),
                match_type: if words > 1 {
                    MatchType::MultiTokenGroup
                } else {
                    MatchType::SingleToken
                },
            }
        }));

        spans.sort_by_key(|s| s.start);
        spans
    }

    /// Extract every element of a sanitized scene.
    ///
    /// Previous elements and multiline marks on the scene are discarded first,
    /// so the pass may be repeated against a fresh registry.
    #[instrument(skip_all, fields(scene_index = scene.index))]
    pub fn extract(&self, scene: &mut Scene, registry: &mut Registry) -> ExtractionReport {
        scene.elements.clear();
        for line in &mut scene.lines {
            line.multiline = None;
        }

        let mut state = Multiline::Idle;
        for index in 0..scene.lines.len() {
            let line_ref = Self::line_ref(scene, index);
            let trimmed = line_ref.line_text.trim();

            state = match state {
                Multiline::Idle if trimmed == "(" => {
                    scene.lines[index].multiline = Some(MultilineMark::Open);
                    Multiline::Open {
                        start_index: index,
                        text: line_ref.line_text.clone(),
                        refs: vec![line_ref],
                    }
                }
                Multiline::Idle => {
                    self.extract_line(scene, index, registry);
                    Multiline::Idle
                }
                Multiline::Open {
                    start_index,
                    mut text,
                    mut refs,
                } => {
                    let closes = trimmed == ")";
                    text.push('\n');
                    text.push_str(&line_ref.line_text);
                    refs.push(line_ref);
                    if closes {
                        scene.lines[index].multiline = Some(MultilineMark::Close);
                        Self::register(scene, registry, &text, MatchType::MultilineParenthetical, refs);
                        Multiline::Idle
                    } else {
                        scene.lines[index].multiline = Some(MultilineMark::Inner);
                        Multiline::Open {
                            start_index,
                            text,
                            refs,
                        }
                    }
                }
            };
        }

        // An opening parenthesis that never closes is ordinary text.
        if let Multiline::Open { start_index, .. } = state {
            warn!(
                scene_index = scene.index,
                line_index = start_index,
                "Unterminated multiline parenthetical"
            );
            for index in start_index..scene.lines.len() {
                scene.lines[index].multiline = None;
                self.extract_line(scene, index, registry);
            }
        }

        let unique: HashSet<&str> = scene.elements.iter().map(|e| e.text.as_str()).collect();
        let report = ExtractionReport {
            elements: scene.elements.len(),
            unique: unique.len(),
        };
        debug!(
            elements = report.elements,
            unique = report.unique,
            "Extracted scene elements"
        );
        report
    }

    fn extract_line(&self, scene: &mut Scene, index: usize, registry: &mut Registry) {
        let line_ref = Self::line_ref(scene, index);
        for span in Self::spans(&line_ref.line_text) {
            Self::register(scene, registry, &span.text, span.match_type, vec![line_ref.clone()]);
        }
    }

    fn line_ref(scene: &Scene, index: usize) -> LineRef {
        let line = &scene.lines[index];
        LineRef {
            line_id: line.id().to_string(),
            line_index: index,
            line_text: line.text().to_string(),
        }
    }

    /// Record one occurrence; the first line reference is the attributed one.
    fn register(
        scene: &mut Scene,
        registry: &mut Registry,
        raw: &str,
        match_type: MatchType,
        occurrences: Vec<LineRef>,
    ) {
        let text = normalize_element_text(raw);
        if text.is_empty() {
            return;
        }
        let Some(attributed) = occurrences.first().cloned() else {
            return;
        };
        let (master_element_id, category) =
            registry.record(&scene.id, scene.index, &text, attributed);
        let id = registry.next_element_id();
        scene.elements.push(Element {
            id,
            master_element_id,
            scene_id: scene.id.clone(),
            text,
            category,
            match_type,
            occurrences,
        });
    }
}
