//! Request types sent to an element classifier.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use slugline_core::SceneId;

/// System and user prompt text for one classification attempt.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct ClassificationPrompt {
    /// Instructions, element names and category options
    system: String,
    /// Scene context
    user: String,
}

impl ClassificationPrompt {
    /// Create a prompt from system and user text.
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}

/// One classification attempt for one scene.
///
/// Rebuilt for every attempt and never persisted.
///
/// # Examples
///
/// ```
/// use slugline_core::SceneId;
/// use slugline_interface::{ClassificationPromptBuilder, ClassificationRequestBuilder};
///
/// let prompt = ClassificationPromptBuilder::default()
///     .system("Classify these elements")
///     .user("INT. KITCHEN - DAY\\JOHN")
///     .build()
///     .unwrap();
///
/// let request = ClassificationRequestBuilder::default()
///     .scene_id(SceneId::new("line-0"))
///     .scene_index(0usize)
///     .attempt(1u32)
///     .required_names(vec!["JOHN".to_string()])
///     .schema(serde_json::json!({ "type": "object" }))
///     .prompt(prompt)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.required_names(), &["JOHN".to_string()]);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_builder::Builder,
    derive_getters::Getters,
)]
#[builder(setter(into))]
pub struct ClassificationRequest {
    /// Scene being classified
    scene_id: SceneId,
    /// Position of the scene in the script
    scene_index: usize,
    /// 1-based attempt number for this scene
    attempt: u32,
    /// Element texts the answer must carry, in first-seen order
    required_names: Vec<String>,
    /// JSON-schema-shaped description of the expected answer
    schema: JsonValue,
    /// Prompt text
    prompt: ClassificationPrompt,
}

impl ClassificationRequest {
    /// Create a request for one attempt.
    pub fn new(
        scene_id: SceneId,
        scene_index: usize,
        attempt: u32,
        required_names: Vec<String>,
        schema: JsonValue,
        prompt: ClassificationPrompt,
    ) -> Self {
        Self {
            scene_id,
            scene_index,
            attempt,
            required_names,
            schema,
            prompt,
        }
    }
}
