//! Test utilities for slugline_classify tests.

#![allow(dead_code)]

pub mod mock_classifier;

#[allow(unused_imports)]
pub use mock_classifier::{MockAnswer, MockBehavior, MockClassifier, answer_json};

use slugline_core::{LineCorpus, Registry, Scene};
use slugline_parse::{ParserConfig, ScriptParser};

/// Parse bare lines into scenes with a fresh registry.
#[allow(dead_code)]
pub fn parse_script(texts: &[&str]) -> (Vec<Scene>, Registry) {
    let mut registry = Registry::new();
    let outcome = ScriptParser::new(&ParserConfig::default())
        .parse(&LineCorpus::from_texts(texts.iter().copied()), &mut registry);
    (outcome.scenes, registry)
}
