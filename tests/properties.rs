//! Property-based tests for the editing invariants.
//!
//! Documents are generated as small lists of groups whose records carry only a prefab id,
//! so ids may repeat across and within groups.

use proptest::prelude::*;

use onise::{
    Behavior, Document, EditError, EditorState, Group, Location, Record, SaveEditor, SaveValue,
};

fn record(id: i64) -> Record {
    Record::new(vec![Behavior::new(
        "KPrefabID",
        SaveValue::parse_json5(&format!("{{ InstanceID: {id} }}")).unwrap(),
    )])
}

/// Strategy for a document with up to 4 groups of up to 6 records, ids in 0..20.
fn document() -> impl Strategy<Value = Document> {
    prop::collection::vec(prop::collection::vec(0_i64..20, 0..6), 0..4).prop_map(|groups| {
        Document::new(
            groups
                .into_iter()
                .enumerate()
                .map(|(i, ids)| {
                    Group::new(format!("Group{i}"), ids.into_iter().map(record).collect())
                })
                .collect(),
        )
    })
}

fn group_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Group0".to_string()),
        Just("Group1".to_string()),
        Just("Fresh".to_string()),
    ]
}

proptest! {
    #[test]
    fn add_then_remove_is_identity(doc in document(), group in group_name()) {
        let editor = SaveEditor::new();
        // 1000 is outside the generated id range, so it is new to the document.
        let added = editor.add(&doc, &group, record(1000));
        let restored = editor.remove(&added, 1000).unwrap();

        // A freshly created group stays behind, empty.
        if doc.group(&group).is_none() {
            prop_assert_eq!(restored.groups.len(), doc.groups.len() + 1);
            prop_assert!(restored.groups.last().unwrap().records.is_empty());
            prop_assert_eq!(&restored.groups[..doc.groups.len()], &doc.groups[..]);
        } else {
            prop_assert_eq!(restored, doc);
        }
    }

    #[test]
    fn locate_returns_first_match(doc in document(), id in 0_i64..20) {
        let editor = SaveEditor::new();
        let expected = doc.groups.iter().enumerate().find_map(|(group_index, group)| {
            group
                .records
                .iter()
                .position(|r| **r == record(id))
                .map(|record_index| Location { group_index, record_index })
        });

        match expected {
            Some(location) => prop_assert_eq!(editor.locate(&doc, id), Ok(location)),
            None => prop_assert_eq!(editor.locate(&doc, id), Err(EditError::NotFound { id })),
        }
    }

    #[test]
    fn remove_drops_exactly_one_record(doc in document(), id in 0_i64..20) {
        let editor = SaveEditor::new();
        match editor.remove(&doc, id) {
            Ok(out) => {
                prop_assert_eq!(out.record_count() + 1, doc.record_count());
                prop_assert_eq!(out.groups.len(), doc.groups.len());
            }
            Err(err) => {
                prop_assert_eq!(err, EditError::NotFound { id });
                prop_assert!(!editor.contains(&doc, id));
            }
        }
    }

    #[test]
    fn rejected_guarded_edit_is_noop(
        doc in document(),
        id in 20_i64..40,
        modified in any::<bool>(),
    ) {
        let editor = SaveEditor::new();
        let before = EditorState { document: Some(doc), is_modified: modified };

        // Ids 20.. never exist, so the removal always fails validation.
        let after = before.clone().try_apply(|doc| Ok(editor.remove(doc, id)?)).unwrap();
        prop_assert_eq!(after, before);
    }
}
