//! Merge rules used by edits.
//!
//! Two flavors exist and they are deliberately different:
//! - [`shallow_merge`]: fragment keys override the stored object's keys one level deep.
//!   Used by [`crate::DataPatch::Merge`].
//! - [`deep_merge`] / [`merge_record`]: objects merge key-by-key at every depth. Used by
//!   [`crate::SaveEditor::replace`], so a field the incoming record leaves out keeps its
//!   stored value instead of being cleared.
//!
//! In both, a stored key order is kept and new keys are appended. Arrays are never merged
//! element-wise: an incoming array (empty included) replaces the stored one.

use crate::{Behavior, Record, SaveValue};
use indexmap::IndexMap;

/// Override `base`'s top-level keys with `fragment`'s.
///
/// A non-object `base` (typically `Null` for an unset slot) is treated as an empty object.
pub fn shallow_merge(base: SaveValue, fragment: IndexMap<String, SaveValue>) -> SaveValue {
    let mut map = match base {
        SaveValue::Object(map) => map,
        _ => IndexMap::new(),
    };
    for (key, value) in fragment {
        map.insert(key, value);
    }
    SaveValue::Object(map)
}

/// Recursively merge `incoming` into `stored`.
///
/// Object + object merges key-by-key; any other pairing takes `incoming` as-is, `Null`
/// included.
pub fn deep_merge(stored: &SaveValue, incoming: &SaveValue) -> SaveValue {
    match (stored, incoming) {
        (SaveValue::Object(stored), SaveValue::Object(incoming)) => {
            SaveValue::Object(deep_merge_map(stored, incoming))
        }
        _ => incoming.clone(),
    }
}

fn deep_merge_map(
    stored: &IndexMap<String, SaveValue>,
    incoming: &IndexMap<String, SaveValue>,
) -> IndexMap<String, SaveValue> {
    let mut out = stored.clone();
    for (key, value) in incoming {
        let merged = match out.get(key) {
            Some(existing) => deep_merge(existing, value),
            None => value.clone(),
        };
        out.insert(key.clone(), merged);
    }
    out
}

/// Deep-merge a whole record.
///
/// Behaviors pair up by position: the incoming behavior's name wins and both data slots are
/// deep-merged. An incoming slot that is `Null` means "not provided" and keeps the stored
/// slot. Stored behaviors beyond the incoming list are kept; extra incoming ones are appended.
pub fn merge_record(stored: &Record, incoming: &Record) -> Record {
    let paired = stored.behaviors.len().min(incoming.behaviors.len());
    let mut behaviors: Vec<Behavior> = stored
        .behaviors
        .iter()
        .zip(&incoming.behaviors)
        .map(|(old, new)| merge_behavior(old, new))
        .collect();
    behaviors.extend_from_slice(&stored.behaviors[paired..]);
    behaviors.extend_from_slice(&incoming.behaviors[paired..]);

    Record {
        behaviors,
        fields: deep_merge_map(&stored.fields, &incoming.fields),
    }
}

fn merge_behavior(stored: &Behavior, incoming: &Behavior) -> Behavior {
    Behavior {
        name: incoming.name.clone(),
        template_data: merge_slot(&stored.template_data, &incoming.template_data),
        extra_data: merge_slot(&stored.extra_data, &incoming.extra_data),
    }
}

fn merge_slot(stored: &SaveValue, incoming: &SaveValue) -> SaveValue {
    if incoming.is_null() {
        stored.clone()
    } else {
        deep_merge(stored, incoming)
    }
}
