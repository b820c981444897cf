use crate::SaveValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The game object section of a loaded save: an ordered list of groups, one per prefab type.
///
/// Documents are treated as immutable snapshots. Every edit builds a new `Document`;
/// unchanged records are shared between snapshots through `Arc`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "gameObjects")]
    pub groups: Vec<Group>,
}

/// A named bucket of records sharing a prefab type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    // Always present, even when empty, so "no objects left" stays distinct from "no group".
    #[serde(rename = "gameObjects")]
    pub records: Vec<Arc<Record>>,
}

/// A single game object.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    pub behaviors: Vec<Behavior>,
    /// Record attributes that are not behaviors (position, rotation, scale, folder...).
    #[serde(flatten)]
    pub fields: IndexMap<String, SaveValue>,
}

/// A named component of a record, with two independent data slots.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Behavior {
    pub name: String,
    #[serde(rename = "templateData", default)]
    pub template_data: SaveValue,
    #[serde(rename = "extraData", default)]
    pub extra_data: SaveValue,
}

/// Resolved path to a record. Only valid for the document it was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    pub group_index: usize,
    pub record_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSlot {
    Template,
    Extra,
}

impl Document {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Build a document from the save parser's JSON shape:
    /// `{ gameObjects: [ { name, gameObjects: [ { behaviors: [...] } ] } ] }`.
    pub fn parse_json5(text: &str) -> anyhow::Result<Self> {
        Ok(json5::from_str::<Document>(text)?)
    }

    /// First group with the given name.
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn group_index(&self, name: &str) -> Option<usize> {
        self.groups.iter().position(|g| g.name == name)
    }

    pub fn record_at(&self, location: Location) -> Option<&Arc<Record>> {
        self.groups
            .get(location.group_index)?
            .records
            .get(location.record_index)
    }

    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|g| g.records.len()).sum()
    }
}

impl Group {
    pub fn new(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            records: records.into_iter().map(Arc::new).collect(),
        }
    }
}

impl Record {
    pub fn new(behaviors: Vec<Behavior>) -> Self {
        Self {
            behaviors,
            fields: IndexMap::new(),
        }
    }

    pub fn behavior(&self, name: &str) -> Option<&Behavior> {
        self.behaviors.iter().find(|b| b.name == name)
    }
}

impl Behavior {
    pub fn new(name: impl Into<String>, template_data: SaveValue) -> Self {
        Self {
            name: name.into(),
            template_data,
            extra_data: SaveValue::Null,
        }
    }

    pub fn with_extra_data(mut self, extra_data: SaveValue) -> Self {
        self.extra_data = extra_data;
        self
    }

    pub fn slot(&self, slot: DataSlot) -> &SaveValue {
        match slot {
            DataSlot::Template => &self.template_data,
            DataSlot::Extra => &self.extra_data,
        }
    }

    pub fn slot_mut(&mut self, slot: DataSlot) -> &mut SaveValue {
        match slot {
            DataSlot::Template => &mut self.template_data,
            DataSlot::Extra => &mut self.extra_data,
        }
    }
}
