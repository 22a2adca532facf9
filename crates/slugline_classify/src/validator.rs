//! Structural validation of classification answers.

use crate::SchemaNode;
use serde_json::Value as JsonValue;
use tracing::debug;

/// Why an answer was rejected. Paths use `/` between property names.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RejectReason {
    /// No JSON object could be read from the answer
    #[display("Malformed JSON: {}", _0)]
    MalformedJson(String),
    /// A required property is absent
    #[display("Missing field: {}", _0)]
    MissingField(String),
    /// A property the schema did not request is present
    #[display("Unexpected field: {}", _0)]
    UnexpectedField(String),
    /// A value has the wrong JSON type
    #[display("Shape mismatch at {}: expected {}, found {}", path, expected, found)]
    ShapeMismatch {
        /// Location of the value
        path: String,
        /// Type required by the schema
        expected: &'static str,
        /// Type found in the answer
        found: &'static str,
    },
    /// A string is outside its closed set of values
    #[display("Value outside enumeration at {}: {}", path, value)]
    CategoryOutsideEnum {
        /// Location of the value
        path: String,
        /// The offending value
        value: String,
    },
}

/// Result of validating one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The answer conforms to the schema
    Accepted,
    /// The answer breaks the contract and the request should be re-issued
    Rejected(RejectReason),
}

impl Validation {
    /// Whether the answer was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Validation::Accepted)
    }
}

/// Checks answers against a [`SchemaNode`]. Never retries by itself.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use slugline_classify::{RejectReason, ResponseSchema, ResponseValidator, Validation};
///
/// let schema = ResponseSchema::for_elements(vec!["JOHN".to_string()]);
/// let answer = json!({
///     "JOHN": { "category": "CAST" },
///     "meta": { "isDialogueInScene": true, "dualDialogue": false, "castInScene": ["JOHN"] }
/// });
/// assert_eq!(ResponseValidator::validate(schema.root(), &answer), Validation::Accepted);
///
/// let missing = json!({ "meta": answer["meta"].clone() });
/// assert_eq!(
///     ResponseValidator::validate(schema.root(), &missing),
///     Validation::Rejected(RejectReason::MissingField("JOHN".to_string()))
/// );
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseValidator;

impl ResponseValidator {
    /// Validate an answer against a schema node.
    pub fn validate(schema: &SchemaNode, answer: &JsonValue) -> Validation {
        match Self::check(schema, answer, "") {
            Ok(()) => Validation::Accepted,
            Err(reason) => {
                debug!(%reason, "Answer rejected");
                Validation::Rejected(reason)
            }
        }
    }

    fn check(schema: &SchemaNode, value: &JsonValue, path: &str) -> Result<(), RejectReason> {
        match (schema, value) {
            (
                SchemaNode::Object {
                    properties,
                    required,
                },
                JsonValue::Object(map),
            ) => {
                if let Some(missing) = required.iter().find(|name| !map.contains_key(name.as_str())) {
                    return Err(RejectReason::MissingField(Self::join(path, missing)));
                }
                if let Some(extra) = map.keys().find(|key| schema.property(key).is_none()) {
                    return Err(RejectReason::UnexpectedField(Self::join(path, extra)));
                }
                for (name, node) in properties {
                    if let Some(child) = map.get(name) {
                        Self::check(node, child, &Self::join(path, name))?;
                    }
                }
                Ok(())
            }
            (SchemaNode::Array { items }, JsonValue::Array(values)) => {
                for (i, item) in values.iter().enumerate() {
                    Self::check(items, item, &Self::join(path, &i.to_string()))?;
                }
                Ok(())
            }
            (SchemaNode::String { allowed }, JsonValue::String(s)) => match allowed {
                Some(values) if !values.iter().any(|v| v == s) => {
                    Err(RejectReason::CategoryOutsideEnum {
                        path: Self::display_path(path),
                        value: s.clone(),
                    })
                }
                _ => Ok(()),
            },
            (SchemaNode::Boolean, JsonValue::Bool(_)) => Ok(()),
            (node, other) => Err(RejectReason::ShapeMismatch {
                path: Self::display_path(path),
                expected: node.type_name(),
                found: Self::json_type(other),
            }),
        }
    }

    fn join(path: &str, name: &str) -> String {
        if path.is_empty() {
            name.to_string()
        } else {
            format!("{}/{}", path, name)
        }
    }

    fn display_path(path: &str) -> String {
        if path.is_empty() {
            "$".to_string()
        } else {
            path.to_string()
        }
    }

    fn json_type(value: &JsonValue) -> &'static str {
        match value {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "boolean",
            JsonValue::Number(_) => "number",
            JsonValue::String(_) => "string",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}
