//! JSON-schema-shaped description of a classification answer.

use serde_json::{Map, Value as JsonValue, json};
use slugline_core::Category;

/// Sub-field carrying the chosen category of one element.
pub const CATEGORY_FIELD: &str = "category";

/// Top-level field carrying scene metadata.
pub const META_FIELD: &str = "meta";

/// One node of a response schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// An object with named properties, all of them listed in `required`
    Object {
        /// Properties in declaration order
        properties: Vec<(String, SchemaNode)>,
        /// Names that must be present
        required: Vec<String>,
    },
    /// An array whose items share one shape
    Array {
        /// Shape of every item
        items: Box<SchemaNode>,
    },
    /// A string, optionally restricted to a closed set of values
    String {
        /// Allowed values, if restricted
        allowed: Option<Vec<String>>,
    },
    /// A boolean
    Boolean,
}

impl SchemaNode {
    /// An object requiring every given property.
    pub fn object(properties: Vec<(String, SchemaNode)>) -> Self {
        let required = properties.iter().map(|(name, _)| name.clone()).collect();
        SchemaNode::Object {
            properties,
            required,
        }
    }

    /// The JSON type name of this node.
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaNode::Object { .. } => "object",
            SchemaNode::Array { .. } => "array",
            SchemaNode::String { .. } => "string",
            SchemaNode::Boolean => "boolean",
        }
    }

    /// Look up a property of an object node.
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        match self {
            SchemaNode::Object { properties, .. } => properties
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, node)| node),
            _ => None,
        }
    }

    /// Render as a JSON schema object.
    pub fn to_json(&self) -> JsonValue {
        match self {
            SchemaNode::Object {
                properties,
                required,
            } => {
                let mut props = Map::new();
                for (name, node) in properties {
                    props.insert(name.clone(), node.to_json());
                }
                json!({ "type": "object", "properties": props, "required": required })
            }
            SchemaNode::Array { items } => json!({ "type": "array", "items": items.to_json() }),
            SchemaNode::String { allowed: Some(values) } => json!({ "type": "string", "enum": values }),
            SchemaNode::String { allowed: None } => json!({ "type": "string" }),
            SchemaNode::Boolean => json!({ "type": "boolean" }),
        }
    }
}

/// The expected answer for one scene: one object per element text plus `meta`.
///
/// # Examples
///
/// ```
/// use slugline_classify::{META_FIELD, ResponseSchema};
///
/// let schema = ResponseSchema::for_elements(vec!["JOHN".to_string(), "DOOR".to_string()]);
/// let json = schema.to_json();
///
/// assert_eq!(json["required"][0], "JOHN");
/// assert_eq!(json["required"][2], META_FIELD);
/// assert_eq!(json["properties"]["JOHN"]["properties"]["category"]["enum"][0], "CAST");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct ResponseSchema {
    /// Texts requested for classification, in first-seen order
    element_names: Vec<String>,
    /// Root object node
    root: SchemaNode,
}

impl ResponseSchema {
    /// Build the schema for the given element texts.
    pub fn for_elements(element_names: Vec<String>) -> Self {
        let category = SchemaNode::String {
            allowed: Some(Category::assignable().map(|c| c.to_string()).collect()),
        };

        let mut properties: Vec<(String, SchemaNode)> = element_names
            .iter()
            .map(|name| {
                (
                    name.clone(),
                    SchemaNode::object(vec![(CATEGORY_FIELD.to_string(), category.clone())]),
                )
            })
            .collect();
        properties.push((META_FIELD.to_string(), Self::meta()));

        Self {
            element_names,
            root: SchemaNode::object(properties),
        }
    }

    fn meta() -> SchemaNode {
        SchemaNode::object(vec![
            ("isDialogueInScene".to_string(), SchemaNode::Boolean),
            ("dualDialogue".to_string(), SchemaNode::Boolean),
            (
                "castInScene".to_string(),
                SchemaNode::Array {
                    items: Box::new(SchemaNode::String { allowed: None }),
                },
            ),
        ])
    }

    /// Whether the schema requests nothing beyond `meta`.
    pub fn is_empty(&self) -> bool {
        self.element_names.is_empty()
    }

    /// Render as a JSON schema object.
    pub fn to_json(&self) -> JsonValue {
        self.root.to_json()
    }
}
