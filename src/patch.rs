use crate::{DataSlot, EditError, EditResult, Record, SaveValue, merge};
use indexmap::IndexMap;
use std::fmt;

/// How to change one behavior data slot.
pub enum DataPatch<'a> {
    /// The closure receives the current slot value and owns the whole result.
    Transform(Box<dyn FnOnce(SaveValue) -> SaveValue + 'a>),
    /// Keys override the current value's keys one level deep; other keys are kept.
    Merge(IndexMap<String, SaveValue>),
}

impl<'a> DataPatch<'a> {
    pub fn transform(f: impl FnOnce(SaveValue) -> SaveValue + 'a) -> Self {
        DataPatch::Transform(Box::new(f))
    }

    pub fn merge<K, V>(fragment: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<SaveValue>,
    {
        DataPatch::Merge(
            fragment
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    fn apply(self, current: SaveValue) -> SaveValue {
        match self {
            DataPatch::Transform(f) => f(current),
            DataPatch::Merge(fragment) => merge::shallow_merge(current, fragment),
        }
    }
}

impl fmt::Debug for DataPatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataPatch::Transform(_) => f.write_str("Transform(..)"),
            DataPatch::Merge(fragment) => f.debug_tuple("Merge").field(fragment).finish(),
        }
    }
}

/// Patch one data slot of the first behavior named `behavior_name`.
///
/// Returns a new record; every other behavior, and the other slot of the patched one, is
/// carried over unchanged.
pub fn patch_behavior_data(
    record: &Record,
    behavior_name: &str,
    slot: DataSlot,
    patch: DataPatch<'_>,
) -> EditResult<Record> {
    let index = record
        .behaviors
        .iter()
        .position(|b| b.name == behavior_name)
        .ok_or_else(|| EditError::BehaviorNotFound {
            behavior: behavior_name.to_string(),
        })?;

    let mut out = record.clone();
    let target = out.behaviors[index].slot_mut(slot);
    let current = std::mem::take(target);
    *target = patch.apply(current);
    Ok(out)
}
