use crate::ObjectId;
use thiserror::Error;

pub type EditResult<T> = Result<T, EditError>;

/// Expected validation failures raised by edit operations.
///
/// These are the only errors `EditorState::try_apply` absorbs. Anything else a modifier
/// returns is a fault and reaches the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("game object {id} does not exist in the save")]
    NotFound { id: ObjectId },

    #[error("expected game object {id} to be type {expected}, found {actual}")]
    TypeMismatch {
        id: ObjectId,
        expected: String,
        actual: String,
    },

    #[error("game object has no id")]
    MissingIdentity,

    #[error("game object does not have behavior \"{behavior}\"")]
    BehaviorNotFound { behavior: String },
}
