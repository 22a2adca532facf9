//! End-to-end structural parse tests.

use slugline_core::{LineCorpus, Registry, SourceLine};
use slugline_parse::{ParserConfig, ScriptParser};

#[test]
fn test_parse_reports_per_scene() {
    let corpus = LineCorpus::from_texts([
        "INT. KITCHEN - DAY",
        "JOHN",
        "1.",
        "EXT. PARK - DAY",
        "",
        "(CONTINUED)",
        "Birds chirp.",
    ]);
    let mut registry = Registry::new();

    let outcome = ScriptParser::new(&ParserConfig::default()).parse(&corpus, &mut registry);

    assert_eq!(outcome.scenes.len(), 2);
    assert_eq!(outcome.sanitize_reports.len(), 2);
    assert_eq!(outcome.sanitize_reports[0].page_number, 1);
    assert_eq!(outcome.sanitize_reports[1].scene_index, 1);
    assert_eq!(outcome.sanitize_reports[1].total(), 2);
    assert_eq!(outcome.removed_lines(), 3);
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_door_in_two_scenes_is_one_master() {
    let corpus = LineCorpus::from_texts([
        "INT. HALL - DAY",
        "DOOR",
        "EXT. YARD - DAY",
        "Someone knocks on the DOOR.",
    ]);
    let mut registry = Registry::new();

    ScriptParser::new(&ParserConfig::default()).parse(&corpus, &mut registry);

    assert_eq!(registry.len(), 1);
    let door = registry.find("DOOR").expect("DOOR recorded");
    assert_eq!(door.text(), "DOOR");
    assert_eq!(door.appearances().len(), 2);
}

#[test]
fn test_parse_keeps_record_ids_and_pages() {
    let records = vec![
        SourceLine {
            id: "p1-l1".to_string(),
            text: "INT. LAB - NIGHT".to_string(),
            page_number: 1,
        },
        SourceLine {
            id: "p2-l1".to_string(),
            text: "The ROBOT hums.".to_string(),
            page_number: 2,
        },
    ];
    let mut registry = Registry::new();

    let outcome = ScriptParser::new(&ParserConfig::default())
        .parse(&LineCorpus::from_records(records), &mut registry);

    let scene = &outcome.scenes[0];
    assert_eq!(scene.id.as_str(), "p1-l1");
    assert_eq!(scene.lines[0].line.page_number, 2);
    assert_eq!(scene.elements[0].occurrences[0].line_id, "p2-l1");
}

#[test]
fn test_scenes_serialize_to_json() {
    let corpus = LineCorpus::from_texts(["INT. KITCHEN - DAY", "JOHN"]);
    let mut registry = Registry::new();
    let outcome = ScriptParser::new(&ParserConfig::default()).parse(&corpus, &mut registry);

    let json = serde_json::to_value(&outcome.scenes[0]).expect("scene serializes");

    assert_eq!(json["header"], "INT. KITCHEN - DAY");
    assert_eq!(json["elements"][0]["text"], "JOHN");
}
