//! Prompt text for classification requests.

use slugline_core::{Category, Scene};
use slugline_interface::ClassificationPrompt;

/// Builds the system and user prompt for one scene.
///
/// The system prompt numbers the element texts and lists the category
/// options. The user prompt carries the scene as `header\clean text`.
///
/// # Examples
///
/// ```
/// use slugline_classify::PromptBuilder;
/// use slugline_core::{Scene, SceneId};
///
/// let mut scene = Scene::new(SceneId::new("line-0"), "INT. KITCHEN - DAY", 0);
/// scene.clean_text = "JOHN\\Hello there.".to_string();
///
/// let prompt = PromptBuilder::new().build(&scene, &["JOHN".to_string()]);
/// assert!(prompt.system().contains("1. \"JOHN\""));
/// assert!(prompt.user().contains("INT. KITCHEN - DAY\\JOHN\\Hello there."));
/// ```
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    categories: String,
    numbered_categories: String,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBuilder {
    /// Create a prompt builder offering every assignable category.
    pub fn new() -> Self {
        let names: Vec<String> = Category::assignable().map(|c| c.to_string()).collect();
        Self {
            categories: names.join(", "),
            numbered_categories: Self::numbered(&names),
        }
    }

    fn numbered(items: &[String]) -> String {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. \"{}\"", i + 1, item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Comma-separated category options.
    pub fn categories(&self) -> &str {
        &self.categories
    }

    /// Build the prompt for a scene and the element texts it must classify.
    pub fn build(&self, scene: &Scene, names: &[String]) -> ClassificationPrompt {
        let system = format!(
            "You classify screenplay elements. Each element below is a key of the \
             answer object; give it a \"category\" chosen from the options. \
             Use only the listed options and pick the closest one when unsure.\n\
             <ELEMENTS>\n{}\n</ELEMENTS>\n\
             <CATEGORIES>\n{}\n</CATEGORIES>\n\
             Also fill \"meta\" with isDialogueInScene, dualDialogue and castInScene.\n\
             Output ONLY valid JSON.",
            Self::numbered(names),
            self.numbered_categories
        );

        let user = format!(
            "Scene for context:\n<CONTEXT>{}\\{}</CONTEXT>\n\
             Classify each element using only these categories: {}",
            scene.header, scene.clean_text, self.categories
        );

        ClassificationPrompt::new(system, user)
    }
}
