//! The line corpus handed over by the PDF extraction collaborator.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, warn};

/// One text record as produced by page/line extraction.
///
/// # Examples
///
/// ```
/// use slugline_core::SourceLineBuilder;
///
/// let line = SourceLineBuilder::default()
///     .id("p1-l1")
///     .text("INT. KITCHEN - DAY")
///     .page_number(1u32)
///     .build()
///     .unwrap();
/// assert_eq!(line.text, "INT. KITCHEN - DAY");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct SourceLine {
    /// Stable, unique identifier
    pub id: String,
    /// Raw text of the line
    pub text: String,
    /// Page the line was found on
    #[builder(default)]
    #[serde(default)]
    pub page_number: u32,
}

/// An immutable line with its position in the corpus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    /// Stable, unique identifier from the extraction collaborator
    pub id: String,
    /// Raw text
    pub text: String,
    /// Position in the corpus
    pub source_index: usize,
    /// Page the line was found on
    pub page_number: u32,
}

/// Ordered sequence of lines. Input order is scene and line order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineCorpus {
    lines: Vec<Line>,
}

impl LineCorpus {
    /// Build a corpus from extraction records, preserving their order.
    ///
    /// Duplicate ids and decreasing page numbers are logged but accepted:
    /// a malformed corpus degrades segmentation rather than failing it.
    pub fn from_records(records: impl IntoIterator<Item = SourceLine>) -> Self {
        let mut seen = HashSet::new();
        let mut last_page = 0u32;
        let lines: Vec<Line> = records
            .into_iter()
            .enumerate()
            .map(|(source_index, record)| {
                if !seen.insert(record.id.clone()) {
                    warn!(line_id = %record.id, source_index, "Duplicate line id in corpus");
                }
                if record.page_number < last_page {
                    warn!(
                        source_index,
                        page = record.page_number,
                        previous_page = last_page,
                        "Page numbers are not monotonic"
                    );
                }
                last_page = last_page.max(record.page_number);
                Line {
                    id: record.id,
                    text: record.text,
                    source_index,
                    page_number: record.page_number,
                }
            })
            .collect();

        debug!(line_count = lines.len(), "Built line corpus");
        Self { lines }
    }

    /// Build a corpus from bare text, generating `line-N` ids on page 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use slugline_core::LineCorpus;
    ///
    /// let corpus = LineCorpus::from_texts(["INT. KITCHEN - DAY", "JOHN"]);
    /// assert_eq!(corpus.len(), 2);
    /// assert_eq!(corpus.lines()[1].id, "line-1");
    /// ```
    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_records(texts.into_iter().enumerate().map(|(i, text)| SourceLine {
            id: format!("line-{}", i),
            text: text.into(),
            page_number: 1,
        }))
    }

    /// All lines in order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the corpus has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over lines in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a LineCorpus {
    type Item = &'a Line;
    type IntoIter = std::slice::Iter<'a, Line>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
