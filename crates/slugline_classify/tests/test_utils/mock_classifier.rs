//! Mock element classifier for testing.

use async_trait::async_trait;
use serde_json::{Map, Value as JsonValue, json};
use slugline_core::Category;
use slugline_error::{ClassifierError, SluglineResult};
use slugline_interface::{ClassificationRequest, ElementClassifier};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A single canned answer.
#[derive(Debug, Clone)]
pub enum MockAnswer {
    /// Answer with this text
    Text(String),
    /// Fail the round-trip with this message
    Error(String),
}

/// Behavior configuration for mock answers.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return answers in order, failing once they run out
    Sequence(Vec<MockAnswer>),
    /// Answer every request validly, looking categories up by text (PROP otherwise)
    Auto(HashMap<String, Category>),
}

/// Mock classifier that records every request it receives.
pub struct MockClassifier {
    behavior: MockBehavior,
    requests: Arc<Mutex<Vec<ClassificationRequest>>>,
}

impl MockClassifier {
    /// Create a mock returning canned answers in order.
    pub fn new_sequence(answers: Vec<MockAnswer>) -> Self {
        Self {
            behavior: MockBehavior::Sequence(answers),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that always answers validly.
    pub fn new_auto(categories: &[(&str, Category)]) -> Self {
        Self {
            behavior: MockBehavior::Auto(
                categories
                    .iter()
                    .map(|(text, category)| (text.to_string(), *category))
                    .collect(),
            ),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of classify() calls so far.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Every request received, in order.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<ClassificationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// A schema-conforming answer for the given element categories.
#[allow(dead_code)]
pub fn answer_json(categories: &[(&str, Category)], cast: &[&str]) -> String {
    let mut object = Map::new();
    for (text, category) in categories {
        object.insert(text.to_string(), json!({ "category": category.to_string() }));
    }
    object.insert(
        "meta".to_string(),
        json!({
            "isDialogueInScene": !cast.is_empty(),
            "dualDialogue": false,
            "castInScene": cast,
        }),
    );
    JsonValue::Object(object).to_string()
}

#[async_trait]
impl ElementClassifier for MockClassifier {
    async fn classify(&self, request: &ClassificationRequest) -> SluglineResult<String> {
        let call = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request.clone());
            requests.len() - 1
        };

        match &self.behavior {
            MockBehavior::Sequence(answers) => match answers.get(call) {
                Some(MockAnswer::Text(text)) => Ok(text.clone()),
                Some(MockAnswer::Error(message)) => Err(ClassifierError::new("mock", message.clone()).into()),
                None => Err(ClassifierError::new("mock", "answer sequence exhausted").into()),
            },
            MockBehavior::Auto(known) => {
                let categories: Vec<(&str, Category)> = request
                    .required_names()
                    .iter()
                    .map(|name| {
                        (
                            name.as_str(),
                            known.get(name).copied().unwrap_or(Category::Prop),
                        )
                    })
                    .collect();
                let cast: Vec<&str> = categories
                    .iter()
                    .filter(|(_, c)| *c == Category::Cast)
                    .map(|(name, _)| *name)
                    .collect();
                Ok(answer_json(&categories, &cast))
            }
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}
