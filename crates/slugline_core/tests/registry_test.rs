//! Tests for the master element registry.

use slugline_core::{
    Category, DialogueSet, ElementId, LineRef, MasterElementId, Registry, SceneId, UNCLASSIFIED_KEY,
    normalize_element_text,
};

fn line_ref(index: usize, text: &str) -> LineRef {
    LineRef {
        line_id: format!("line-{}", index),
        line_index: index,
        line_text: text.to_string(),
    }
}

#[test]
fn test_record_groups_occurrences_per_scene() {
    let mut registry = Registry::new();
    let kitchen = SceneId::new("line-0");
    let park = SceneId::new("line-9");

    let (first, category) = registry.record(&kitchen, 0, "DOOR", line_ref(1, "A DOOR."));
    let (again, _) = registry.record(&kitchen, 0, "DOOR", line_ref(2, "The DOOR shuts."));
    let (later, _) = registry.record(&park, 1, "DOOR", line_ref(10, "DOOR"));

    assert_eq!(category, None);
    assert_eq!(first, again);
    assert_eq!(first, later);
    assert_eq!(registry.len(), 1);

    let door = registry.get(first).unwrap();
    assert_eq!(door.appearances().len(), 2);
    assert_eq!(door.appearances()[0].line_refs().len(), 2);
    assert_eq!(door.appearances()[1].scene_id(), &park);
    assert_eq!(door.occurrence_count(), 3);
}

#[test]
fn test_element_ids_are_document_wide() {
    let mut registry = Registry::new();
    let ids: Vec<_> = (0..3).map(|_| registry.next_element_id()).collect();
    assert_eq!(ids[0].0, 0);
    assert_eq!(ids[2].0, 2);
    assert_eq!(ids[1].to_string(), "element-1");
}

#[test]
fn test_assign_category_last_writer_wins() {
    let mut registry = Registry::new();
    let scene = SceneId::new("line-0");
    let (id, _) = registry.record(&scene, 0, "ROVER", line_ref(1, "ROVER"));

    assert_eq!(registry.assign_category(id, Category::Animal), None);
    assert_eq!(registry.assign_category(id, Category::Vehicle), Some(Category::Animal));
    assert_eq!(*registry.get(id).unwrap().category(), Some(Category::Vehicle));

    // New occurrences report the current category.
    let (_, current) = registry.record(&scene, 0, "ROVER", line_ref(2, "ROVER barks"));
    assert_eq!(current, Some(Category::Vehicle));
}

#[test]
fn test_attach_dialogue_sets_requires_appearance() {
    let mut registry = Registry::new();
    let scene = SceneId::new("line-0");
    let (id, _) = registry.record(&scene, 0, "JOHN", line_ref(1, "JOHN"));
    let set = DialogueSet {
        number: 1,
        cue_text: "JOHN".to_string(),
        lines: vec![line_ref(2, "Hello there.")],
    };

    assert!(registry.attach_dialogue_sets(id, &scene, vec![set.clone()]));
    assert!(!registry.attach_dialogue_sets(id, &SceneId::new("line-7"), vec![set]));
    assert_eq!(registry.get(id).unwrap().appearances()[0].dialogue_sets().len(), 1);
}

#[test]
fn test_snapshot_groups_by_category() {
    let mut registry = Registry::new();
    let scene = SceneId::new("line-0");
    let (john, _) = registry.record(&scene, 0, "JOHN", line_ref(1, "JOHN"));
    registry.record(&scene, 0, "DOOR", line_ref(2, "The DOOR."));
    registry.assign_category(john, Category::Cast);

    let snapshot = registry.snapshot();

    let keys: Vec<&str> = snapshot.keys().collect();
    assert_eq!(keys, vec!["CAST", UNCLASSIFIED_KEY]);
    assert_eq!(snapshot.category(Category::Cast)[0].text(), "JOHN");
    assert_eq!(snapshot.group(UNCLASSIFIED_KEY)[0].text(), "DOOR");
    assert!(snapshot.category(Category::Prop).is_empty());
}

#[test]
fn test_deserialized_registry_keeps_text_index() {
    let mut registry = Registry::new();
    registry.record(&SceneId::new("line-0"), 0, "DOOR", line_ref(1, "The DOOR creaks."));
    registry.next_element_id();

    let json = serde_json::to_string(&registry).unwrap();
    let mut restored: Registry = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, registry);
    assert!(restored.find("DOOR").is_some());

    let (id, _) = restored.record(&SceneId::new("s1"), 1, "DOOR", line_ref(0, "A DOOR slams."));
    assert_eq!(id, MasterElementId(0));
    assert_eq!(restored.len(), 1);
    assert_eq!(restored.find("DOOR").unwrap().appearances().len(), 2);
    assert_eq!(restored.next_element_id(), ElementId(1));
}

#[test]
fn test_normalize_collapses_whitespace() {
    assert_eq!(normalize_element_text("  BIG \t DOG \n"), "BIG DOG");
    assert_eq!(normalize_element_text("(\nwhispering\n)"), "( whispering )");
    assert_eq!(normalize_element_text("   "), "");
}
