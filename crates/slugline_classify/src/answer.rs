//! Conversion of an accepted answer into categories and scene metadata.

use crate::{CATEGORY_FIELD, META_FIELD, ResponseSchema};
use serde_json::Value as JsonValue;
use slugline_core::{Category, SceneMeta};
use slugline_error::{ClassificationError, ClassificationErrorKind};

/// Categories and metadata read from a validated answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedAnswer {
    /// Element text and its category, in request order
    pub categories: Vec<(String, Category)>,
    /// Scene metadata
    pub meta: SceneMeta,
}

impl ClassifiedAnswer {
    /// Read an answer that the validator accepted for `schema`.
    ///
    /// # Errors
    ///
    /// Returns [`ClassificationErrorKind::MalformedAnswer`] if the answer does
    /// not actually conform, which means it was not validated first.
    pub fn from_validated(
        schema: &ResponseSchema,
        answer: &JsonValue,
    ) -> Result<Self, ClassificationError> {
        let malformed =
            |message: String| ClassificationError::new(ClassificationErrorKind::MalformedAnswer(message));

        let mut categories = Vec::with_capacity(schema.element_names().len());
        for name in schema.element_names() {
            let raw = answer
                .get(name)
                .and_then(|entry| entry.get(CATEGORY_FIELD))
                .and_then(JsonValue::as_str)
                .ok_or_else(|| malformed(format!("no category for {}", name)))?;
            let category: Category = raw
                .parse()
                .map_err(|_| malformed(format!("unknown category {} for {}", raw, name)))?;
            categories.push((name.clone(), category));
        }

        let meta_value = answer
            .get(META_FIELD)
            .cloned()
            .ok_or_else(|| malformed("no meta".to_string()))?;
        let meta: SceneMeta =
            serde_json::from_value(meta_value).map_err(|e| malformed(e.to_string()))?;

        Ok(Self { categories, meta })
    }

    /// Category given to an element text.
    pub fn category_of(&self, text: &str) -> Option<Category> {
        self.categories
            .iter()
            .find(|(name, _)| name == text)
            .map(|(_, category)| *category)
    }
}
