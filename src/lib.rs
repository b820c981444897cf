//! Core library for ONISE, a save editor for Oxygen Not Included.
//! Provides immutable structural edits over a loaded save document: identity lookup,
//! add/remove/replace of game objects, behavior data patches, and a guard that turns
//! rejected edits into no-ops.

mod document;
mod edit;
mod error;
mod identity;
pub mod merge;
mod patch;
mod state;
pub mod statics;
mod value;

pub use document::{Behavior, DataSlot, Document, Group, Location, Record};
pub use edit::SaveEditor;
pub use error::{EditError, EditResult};
pub use identity::{Identify, ObjectId, PrefabInstanceId, locate};
pub use patch::{DataPatch, patch_behavior_data};
pub use state::{EditOutcome, EditorState};
pub use value::{SaveNumber, SaveValue};
