use crate::{
    Document, EditError, EditResult, Group, Identify, Location, ObjectId, PrefabInstanceId,
    Record, identity, merge,
};
use std::sync::Arc;

/// Structural edits on a save document.
///
/// The editor holds no document state, only the identity function used to find game objects.
/// Every method takes the current snapshot by reference and returns a new one; the input is
/// never modified, and untouched records are shared with the result.
#[derive(Debug, Clone, Default)]
pub struct SaveEditor<I = PrefabInstanceId> {
    identify: I,
}

impl SaveEditor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<I: Identify> SaveEditor<I> {
    pub fn with_identity(identify: I) -> Self {
        Self { identify }
    }

    pub fn identity(&self) -> &I {
        &self.identify
    }

    pub fn locate(&self, document: &Document, id: ObjectId) -> EditResult<Location> {
        identity::locate(document, id, &self.identify)
    }

    pub fn contains(&self, document: &Document, id: ObjectId) -> bool {
        self.locate(document, id).is_ok()
    }

    /// Append `record` to the group named `group_name`, creating the group at the end of
    /// the document if it does not exist yet.
    pub fn add(&self, document: &Document, group_name: &str, record: Record) -> Document {
        let mut groups = document.groups.clone();
        match groups.iter_mut().find(|g| g.name == group_name) {
            Some(group) => group.records.push(Arc::new(record)),
            None => groups.push(Group {
                name: group_name.to_string(),
                records: vec![Arc::new(record)],
            }),
        }
        Document { groups }
    }

    /// Drop the game object `id`, keeping the order of the rest.
    ///
    /// Removing the last object of a group leaves the group in place with no records.
    pub fn remove(&self, document: &Document, id: ObjectId) -> EditResult<Document> {
        let location = self.locate(document, id)?;
        let mut groups = document.groups.clone();
        groups[location.group_index]
            .records
            .remove(location.record_index);
        Ok(Document { groups })
    }

    /// Look up game object `id`, optionally checking it lives in the group `expected_type`.
    pub fn require<'a>(
        &self,
        document: &'a Document,
        id: ObjectId,
        expected_type: Option<&str>,
    ) -> EditResult<&'a Record> {
        let location = self.locate(document, id)?;
        let group = &document.groups[location.group_index];
        if let Some(expected) = expected_type.filter(|expected| *expected != group.name) {
            return Err(EditError::TypeMismatch {
                id,
                expected: expected.to_string(),
                actual: group.name.clone(),
            });
        }
        Ok(&group.records[location.record_index])
    }

    /// Deep-merge `record` over the stored game object with the same identity.
    ///
    /// Fields `record` leaves out keep their stored values; see [`merge::merge_record`].
    pub fn replace(&self, document: &Document, record: &Record) -> EditResult<Document> {
        let id = self
            .identify
            .identity_of(record)
            .ok_or(EditError::MissingIdentity)?;
        let location = self.locate(document, id)?;

        let stored = &document.groups[location.group_index].records[location.record_index];
        let merged = Arc::new(merge::merge_record(stored, record));

        let mut groups = document.groups.clone();
        groups[location.group_index].records[location.record_index] = merged;
        Ok(Document { groups })
    }
}
