//! Tests for the classification retry loop.

mod test_utils;

use slugline_classify::{AttemptOutcome, ClassificationLoop, RejectReason, RequestBuilder};
use slugline_core::Category;
use slugline_error::{ClassificationErrorKind, SluglineErrorKind};
use test_utils::{MockAnswer, MockClassifier, answer_json, parse_script};

fn john_request() -> slugline_classify::SceneRequest {
    let (mut scenes, mut registry) = parse_script(&["INT. KITCHEN - DAY", "JOHN", "Hello there."]);
    RequestBuilder::new()
        .build(&mut scenes[0], &mut registry)
        .expect("JOHN needs classifying")
}

#[tokio::test]
async fn test_accepts_first_valid_answer() {
    let mock = MockClassifier::new_sequence(vec![MockAnswer::Text(answer_json(
        &[("JOHN", Category::Cast)],
        &["JOHN"],
    ))]);

    let (answer, attempts) = ClassificationLoop::new(&mock, None)
        .run(&john_request())
        .await
        .expect("answer accepted");

    assert_eq!(attempts, 1);
    assert_eq!(answer.category_of("JOHN"), Some(Category::Cast));
    assert!(answer.meta.is_dialogue_in_scene);
    assert_eq!(answer.meta.cast_in_scene, vec!["JOHN".to_string()]);
}

#[tokio::test]
async fn test_retries_until_valid() {
    let mock = MockClassifier::new_sequence(vec![
        MockAnswer::Text("I think JOHN is a person.".to_string()),
        MockAnswer::Text(answer_json(&[("JOHN", Category::Cast), ("MARY", Category::Cast)], &[])),
        MockAnswer::Text(answer_json(&[("JOHN", Category::Prop)], &[]).replace("PROP", "PERSON")),
        MockAnswer::Text(format!(
            "```json\n{}\n```",
            answer_json(&[("JOHN", Category::Cast)], &["JOHN"])
        )),
    ]);

    let (answer, attempts) = ClassificationLoop::new(&mock, None)
        .run(&john_request())
        .await
        .expect("answer accepted");

    assert_eq!(attempts, 4);
    assert_eq!(mock.call_count(), 4);
    assert_eq!(answer.category_of("JOHN"), Some(Category::Cast));

    let numbers: Vec<u32> = mock.requests().iter().map(|r| *r.attempt()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_single_attempt_reports_reason() {
    let mock = MockClassifier::new_sequence(vec![MockAnswer::Text(
        answer_json(&[], &[]),
    )]);

    let outcome = ClassificationLoop::new(&mock, None)
        .attempt(&john_request(), 1)
        .await
        .expect("classifier answered");

    assert_eq!(
        outcome,
        AttemptOutcome::Retry(RejectReason::MissingField("JOHN".to_string()))
    );
}

#[tokio::test]
async fn test_array_wrapped_answer_is_retried() {
    let wrapped = format!("[{}]", answer_json(&[("JOHN", Category::Cast)], &["JOHN"]));
    let mock = MockClassifier::new_sequence(vec![
        MockAnswer::Text(wrapped.clone()),
        MockAnswer::Text(format!("```json\n{}\n```", wrapped)),
        MockAnswer::Text(answer_json(&[("JOHN", Category::Cast)], &["JOHN"])),
    ]);
    let request = john_request();
    let looped = ClassificationLoop::new(&mock, None);

    let outcome = looped.attempt(&request, 1).await.expect("classifier answered");
    assert_eq!(
        outcome,
        AttemptOutcome::Retry(RejectReason::ShapeMismatch {
            path: "$".to_string(),
            expected: "object",
            found: "array",
        })
    );

    let (answer, attempts) = looped.run(&request).await.expect("answer accepted");
    assert_eq!(attempts, 2);
    assert_eq!(mock.call_count(), 3);
    assert_eq!(answer.category_of("JOHN"), Some(Category::Cast));
}

#[tokio::test]
async fn test_attempt_ceiling() {
    let mock = MockClassifier::new_sequence(vec![
        MockAnswer::Text("nope".to_string()),
        MockAnswer::Text("still nope".to_string()),
        MockAnswer::Text(answer_json(&[("JOHN", Category::Cast)], &[])),
    ]);

    let err = ClassificationLoop::new(&mock, Some(2))
        .run(&john_request())
        .await
        .unwrap_err();

    assert_eq!(mock.call_count(), 2);
    match err.kind() {
        SluglineErrorKind::Classification(e) => assert_eq!(
            e.kind,
            ClassificationErrorKind::AttemptsExhausted {
                scene_index: 0,
                attempts: 2,
            }
        ),
        other => panic!("Expected AttemptsExhausted, got {}", other),
    }
}

#[tokio::test]
async fn test_classifier_error_propagates() {
    let mock = MockClassifier::new_sequence(vec![MockAnswer::Error("connection refused".to_string())]);

    let err = ClassificationLoop::new(&mock, None)
        .run(&john_request())
        .await
        .unwrap_err();

    assert_eq!(mock.call_count(), 1);
    assert!(matches!(err.kind(), SluglineErrorKind::Classifier(_)));
}
