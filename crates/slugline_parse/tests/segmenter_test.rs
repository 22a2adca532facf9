//! Tests for scene segmentation.

use slugline_core::LineCorpus;
use slugline_parse::{ParserConfig, Segmenter};

fn segmenter() -> Segmenter {
    Segmenter::new(&ParserConfig::default())
}

#[test]
fn test_scene_indices_are_contiguous() {
    let corpus = LineCorpus::from_texts([
        "INT. KITCHEN - DAY",
        "Water boils.",
        "EXT. PARK - DAY",
        "EXT./INT. CAR - NIGHT",
        "Rain.",
        "I/E HALLWAY - LATER",
    ]);

    let scenes = segmenter().split(&corpus);

    let indices: Vec<usize> = scenes.iter().map(|s| s.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    // A heading directly after a heading leaves an empty scene.
    assert!(scenes[1].lines.is_empty());
}

#[test]
fn test_scene_takes_heading_text_and_id() {
    let corpus = LineCorpus::from_texts(["Title page", "INT. KITCHEN - DAY", "Water boils."]);

    let scenes = segmenter().split(&corpus);

    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].header, "INT. KITCHEN - DAY");
    assert_eq!(scenes[0].id.as_str(), "line-1");
    assert_eq!(scenes[0].lines.len(), 1);
    assert_eq!(scenes[0].lines[0].text(), "Water boils.");
}

#[test]
fn test_lines_before_first_heading_are_dropped() {
    let corpus = LineCorpus::from_texts(["FADE IN:", "Written by", "EXT. BEACH - DAWN", "Waves."]);

    let scenes = segmenter().split(&corpus);

    assert_eq!(scenes.len(), 1);
    assert!(scenes[0].lines.iter().all(|l| l.text() != "FADE IN:"));
}

#[test]
fn test_corpus_without_headings_yields_no_scenes() {
    let corpus = LineCorpus::from_texts(["Just prose.", "More prose."]);
    assert!(segmenter().split(&corpus).is_empty());
    assert!(segmenter().split(&LineCorpus::default()).is_empty());
}

#[test]
fn test_heading_match_is_case_sensitive() {
    let corpus = LineCorpus::from_texts(["INT. OFFICE - DAY", "int. office - day", "Papers."]);

    let scenes = segmenter().split(&corpus);

    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].lines.len(), 2);
}

#[test]
fn test_retained_lines_never_match_a_heading() {
    let corpus = LineCorpus::from_texts([
        "INT. KITCHEN - DAY",
        "JOHN",
        "EXTERIOR - GARDEN",
        "Leaves.",
        "OUTSIDE: STREET",
    ]);
    let segmenter = segmenter();

    for scene in segmenter.split(&corpus) {
        assert!(scene.lines.iter().all(|l| !segmenter.is_header(l.text())));
    }
}

#[test]
fn test_segment_reports_scene_count() {
    let corpus = LineCorpus::from_texts(["INT. A", "x", "EXT. B", "y"]);
    let mut closed = Vec::new();

    let count = segmenter().segment(&corpus, |scene| closed.push(scene.header));

    assert_eq!(count, 2);
    assert_eq!(closed, vec!["INT. A".to_string(), "EXT. B".to_string()]);
}

#[test]
fn test_custom_prefixes() {
    let config = ParserConfig::default().with_header_prefixes(vec!["SCENE ".to_string()]);
    let corpus = LineCorpus::from_texts(["SCENE 1", "Hello.", "INT. KITCHEN", "SCENE 2"]);

    let scenes = Segmenter::new(&config).split(&corpus);

    assert_eq!(scenes.len(), 2);
    assert_eq!(scenes[0].lines.len(), 2);
}
