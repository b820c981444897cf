use crate::{Document, EditError, EditResult, Location, Record, SaveValue, statics};
use serde::Deserialize;

/// Numeric identity of a game object.
pub type ObjectId = i64;

/// Derives a record's identity from its behaviors.
///
/// Implementations must be pure: the same record always yields the same answer.
/// `None` marks a record that cannot be looked up.
pub trait Identify {
    fn identity_of(&self, record: &Record) -> Option<ObjectId>;
}

impl<F> Identify for F
where
    F: Fn(&Record) -> Option<ObjectId>,
{
    fn identity_of(&self, record: &Record) -> Option<ObjectId> {
        self(record)
    }
}

/// Reads the instance id the game stores on every object's prefab behavior.
///
/// Defaults to `KPrefabID.templateData.InstanceID`; both names can be overridden from
/// host configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrefabInstanceId {
    pub behavior: String,
    pub field: String,
}

impl Default for PrefabInstanceId {
    fn default() -> Self {
        Self {
            behavior: statics::ONI_BEHAVIOR_PREFAB_ID.to_string(),
            field: statics::ONI_FIELD_INSTANCE_ID.to_string(),
        }
    }
}

impl Identify for PrefabInstanceId {
    fn identity_of(&self, record: &Record) -> Option<ObjectId> {
        record
            .behavior(&self.behavior)?
            .template_data
            .get(&self.field)
            .and_then(SaveValue::as_i64)
    }
}

/// Find the first record whose identity is `id`.
///
/// Groups are scanned in document order and records in group order; there is no index,
/// so every call is a full linear scan.
pub fn locate<I>(document: &Document, id: ObjectId, identify: &I) -> EditResult<Location>
where
    I: Identify + ?Sized,
{
    for (group_index, group) in document.groups.iter().enumerate() {
        let found = group
            .records
            .iter()
            .position(|record| identify.identity_of(record) == Some(id));
        if let Some(record_index) = found {
            log::trace!("located game object {id} in {} at {record_index}", group.name);
            return Ok(Location {
                group_index,
                record_index,
            });
        }
    }

    Err(EditError::NotFound { id })
}
