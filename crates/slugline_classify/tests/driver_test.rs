//! Tests for whole-script classification.

mod test_utils;

use slugline_classify::{BackfillPolicy, ClassifyConfig, ScriptClassifier};
use slugline_core::{Category, LineRole, SceneMeta};
use test_utils::{MockAnswer, MockClassifier, answer_json, parse_script};

#[tokio::test]
async fn test_kitchen_script_end_to_end() {
    let (mut scenes, mut registry) = parse_script(&[
        "INT. KITCHEN - DAY",
        "JOHN",
        "Hello there.",
        "EXT. PARK - DAY",
        "Birds chirp.",
    ]);
    let driver = ScriptClassifier::new(
        MockClassifier::new_auto(&[("JOHN", Category::Cast)]),
        ClassifyConfig::default(),
    );

    let summary = driver
        .classify_script(&mut scenes, &mut registry)
        .await
        .expect("script classified");

    assert_eq!(summary.scenes.len(), 2);
    assert_eq!(summary.attempts(), 1);
    assert_eq!(summary.skipped(), 1);
    assert_eq!(driver.classifier().call_count(), 1);

    assert_eq!(scenes[0].elements[0].category, Some(Category::Cast));
    let roles: Vec<_> = scenes[0].lines.iter().filter_map(|l| l.role).collect();
    assert_eq!(roles, vec![LineRole::CastNormal, LineRole::Dialogue]);
    assert_eq!(
        scenes[0].meta,
        Some(SceneMeta {
            is_dialogue_in_scene: true,
            dual_dialogue: false,
            cast_in_scene: vec!["JOHN".to_string()],
        })
    );
    assert!(scenes[1].meta.is_none());

    let john = registry.find("JOHN").expect("JOHN recorded");
    assert_eq!(*john.category(), Some(Category::Cast));
    assert_eq!(john.appearances()[0].dialogue_sets().len(), 1);
}

#[tokio::test]
async fn test_lazy_backfill_asks_again_and_last_writer_wins() {
    let (mut scenes, mut registry) = parse_script(&[
        "INT. HALL - DAY",
        "The DOOR creaks.",
        "EXT. YARD - DAY",
        "A DOOR slams.",
    ]);
    let driver = ScriptClassifier::new(
        MockClassifier::new_sequence(vec![
            MockAnswer::Text(answer_json(&[("DOOR", Category::Prop)], &[])),
            MockAnswer::Text(answer_json(&[("DOOR", Category::Location)], &[])),
        ]),
        ClassifyConfig::default(),
    );

    driver
        .classify_script(&mut scenes, &mut registry)
        .await
        .expect("script classified");

    assert_eq!(driver.classifier().call_count(), 2);
    // Earlier copies keep the category they were given.
    assert_eq!(scenes[0].elements[0].category, Some(Category::Prop));
    assert_eq!(scenes[1].elements[0].category, Some(Category::Location));
    assert_eq!(
        *registry.find("DOOR").expect("DOOR recorded").category(),
        Some(Category::Location)
    );
}

#[tokio::test]
async fn test_eager_backfill_skips_known_texts() {
    let (mut scenes, mut registry) = parse_script(&[
        "INT. HALL - DAY",
        "The DOOR creaks.",
        "EXT. YARD - DAY",
        "A DOOR slams.",
        "EXT. ROAD - NIGHT",
        "The DOOR and the TRUCK.",
    ]);
    let driver = ScriptClassifier::new(
        MockClassifier::new_auto(&[("DOOR", Category::Prop), ("TRUCK", Category::Vehicle)]),
        ClassifyConfig::default().with_backfill(BackfillPolicy::Eager),
    );

    let summary = driver
        .classify_script(&mut scenes, &mut registry)
        .await
        .expect("script classified");

    assert_eq!(driver.classifier().call_count(), 2);
    assert!(summary.scenes[1].skipped);
    assert_eq!(scenes[1].elements[0].category, Some(Category::Prop));

    let requests = driver.classifier().requests();
    assert_eq!(requests[1].required_names(), &vec!["TRUCK".to_string()]);
    assert_eq!(*requests[1].scene_index(), 2);
}

#[tokio::test]
async fn test_cast_refinement_waits_for_categories() {
    let (mut scenes, mut registry) = parse_script(&[
        "INT. OFFICE - DAY",
        "MARY (V.O.)",
        "Where are you?",
        "The PHONE rings.",
        "Nobody answers.",
    ]);
    let driver = ScriptClassifier::new(
        MockClassifier::new_auto(&[("MARY", Category::Cast), ("PHONE", Category::Prop)]),
        ClassifyConfig::default(),
    );

    let summary = driver
        .classify_script(&mut scenes, &mut registry)
        .await
        .expect("script classified");

    let roles: Vec<_> = scenes[0].lines.iter().filter_map(|l| l.role).collect();
    assert_eq!(
        roles,
        vec![
            LineRole::CastNarrative,
            LineRole::Dialogue,
            LineRole::SingleElement,
            LineRole::NoElement,
        ]
    );
    assert_eq!(summary.scenes[0].dialogue_runs, 1);
    assert_eq!(summary.scenes[0].assigned, 2);
}

#[tokio::test]
async fn test_failure_stops_at_the_failing_scene() {
    let (mut scenes, mut registry) = parse_script(&[
        "INT. HALL - DAY",
        "The DOOR creaks.",
        "EXT. YARD - DAY",
        "The GATE swings.",
    ]);
    let driver = ScriptClassifier::new(
        MockClassifier::new_sequence(vec![
            MockAnswer::Text(answer_json(&[("DOOR", Category::Prop)], &[])),
            MockAnswer::Text("garbage".to_string()),
        ]),
        ClassifyConfig::default().with_max_attempts(1),
    );

    let result = driver.classify_script(&mut scenes, &mut registry).await;

    assert!(result.is_err());
    assert_eq!(scenes[0].elements[0].category, Some(Category::Prop));
    assert_eq!(scenes[1].elements[0].category, None);
}

#[tokio::test]
async fn test_unknown_scene_position() {
    let (mut scenes, mut registry) = parse_script(&["INT. HALL - DAY", "Quiet."]);
    let driver = ScriptClassifier::new(MockClassifier::new_auto(&[]), ClassifyConfig::default());

    let result = driver.classify_at(&mut scenes, 5, &mut registry).await;

    assert!(result.is_err());
    assert_eq!(driver.classifier().call_count(), 0);
}

#[test]
fn test_config_validation() {
    assert!(ClassifyConfig::default().validate().is_ok());
    assert!(ClassifyConfig::default().with_max_attempts(0).validate().is_err());
    assert_eq!(*ClassifyConfig::default().backfill(), BackfillPolicy::Lazy);
    assert_eq!("eager".parse::<BackfillPolicy>().unwrap(), BackfillPolicy::Eager);
}
