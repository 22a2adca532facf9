//! The document-wide master element registry.

use crate::{
    Appearance, Category, DialogueSet, ElementId, LineRef, MasterElement, MasterElementId, SceneId,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Snapshot key for master elements that have no category yet.
pub const UNCLASSIFIED_KEY: &str = "UNCLASSIFIED";

/// Collapse whitespace runs (newlines included) to single spaces and trim.
///
/// # Examples
///
/// ```
/// use slugline_core::normalize_element_text;
///
/// assert_eq!(normalize_element_text("(\n  softly\n)"), "( softly )");
/// assert_eq!(normalize_element_text(" BIG   DOG "), "BIG DOG");
/// ```
pub fn normalize_element_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Deduplicated store of every element text seen in the document.
///
/// The registry is passed explicitly into each pass that mutates it. It is
/// only appended to, except for category back-fill after an accepted
/// classification answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RegistryData")]
pub struct Registry {
    elements: Vec<MasterElement>,
    #[serde(skip)]
    by_text: HashMap<String, MasterElementId>,
    next_element_id: usize,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of master elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether no element has been recorded.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Master elements in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, MasterElement> {
        self.elements.iter()
    }

    /// Look up a master element by id.
    pub fn get(&self, id: MasterElementId) -> Option<&MasterElement> {
        self.elements.get(id.0)
    }

    /// Look up a master element by its normalized text.
    pub fn find(&self, text: &str) -> Option<&MasterElement> {
        self.by_text.get(text).and_then(|id| self.get(*id))
    }

    /// Record one occurrence of `text` in a scene.
    ///
    /// Creates the master element on first sight. Occurrences in the same
    /// scene are grouped under one appearance. Returns the master id and its
    /// current category.
    pub fn record(
        &mut self,
        scene_id: &SceneId,
        scene_index: usize,
        text: &str,
        line_ref: LineRef,
    ) -> (MasterElementId, Option<Category>) {
        let id = match self.by_text.get(text) {
            Some(id) => *id,
            None => {
                let id = MasterElementId(self.elements.len());
                self.elements.push(MasterElement::new(id, text.to_string()));
                self.by_text.insert(text.to_string(), id);
                debug!(%id, text, "New master element");
                id
            }
        };

        let master = &mut self.elements[id.0];
        let appearances = master.appearances_mut();
        match appearances.last_mut() {
            Some(last) if last.scene_id() == scene_id => last.push(line_ref),
            _ => appearances.push(Appearance::new(scene_id.clone(), scene_index, line_ref)),
        }

        (id, *master.category())
    }

    /// Allocate the next document-wide element occurrence id.
    pub fn next_element_id(&mut self) -> ElementId {
        let id = ElementId(self.next_element_id);
        self.next_element_id += 1;
        id
    }

    /// Set the category of a master element, returning the previous one.
    ///
    /// Last writer wins: a conflicting earlier category is overwritten.
    pub fn assign_category(
        &mut self,
        id: MasterElementId,
        category: Category,
    ) -> Option<Category> {
        let master = self.elements.get_mut(id.0)?;
        let previous = master.set_category(category);
        if let Some(prev) = previous.filter(|prev| *prev != category) {
            debug!(%id, text = %master.text(), from = %prev, to = %category, "Category overwritten");
        }
        previous
    }

    /// Attach dialogue sets to a master element's appearance in a scene.
    ///
    /// Returns `false` when the element never appeared in that scene.
    pub fn attach_dialogue_sets(
        &mut self,
        id: MasterElementId,
        scene_id: &SceneId,
        sets: Vec<DialogueSet>,
    ) -> bool {
        let Some(master) = self.elements.get_mut(id.0) else {
            return false;
        };
        match master
            .appearances_mut()
            .iter_mut()
            .find(|a| a.scene_id() == scene_id)
        {
            Some(appearance) => {
                appearance.set_dialogue_sets(sets);
                true
            }
            None => false,
        }
    }


    /// Group every master element by category key.
    ///
    /// Keys are category names (`CAST`, `PROP`, ...) plus
    /// [`UNCLASSIFIED_KEY`] for elements without a category.
    pub fn snapshot(&self) -> RegistrySnapshot {
        let mut groups: BTreeMap<String, Vec<MasterElement>> = BTreeMap::new();
        for master in &self.elements {
            let key = master
                .category()
                .map(|c| c.to_string())
                .unwrap_or_else(|| UNCLASSIFIED_KEY.to_string());
            groups.entry(key).or_default().push(master.clone());
        }
        RegistrySnapshot { groups }
    }
}

/// Serialized form of a [`Registry`]; the text index is rebuilt on load.
#[derive(Deserialize)]
struct RegistryData {
    elements: Vec<MasterElement>,
    next_element_id: usize,
}

impl From<RegistryData> for Registry {
    fn from(data: RegistryData) -> Self {
        let by_text = data
            .elements
            .iter()
            .map(|m| (m.text().clone(), *m.id()))
            .collect();
        Self {
            elements: data.elements,
            by_text,
            next_element_id: data.next_element_id,
        }
    }
}

/// Master elements grouped by category, for downstream reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrySnapshot {
    groups: BTreeMap<String, Vec<MasterElement>>,
}

impl RegistrySnapshot {
    /// Elements under a category key.
    pub fn group(&self, key: &str) -> &[MasterElement] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Elements under a category.
    pub fn category(&self, category: Category) -> &[MasterElement] {
        self.group(category.as_ref())
    }

    /// All category keys present.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}
