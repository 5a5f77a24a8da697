//! Editor-facing errors.

use schema_sketch_tree::FieldId;
use thiserror::Error;

/// What went wrong with an edit command.
///
/// None of these leave the tree in an inconsistent state; the underlying
/// model treats every one of them as a no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("no field with id {0} exists in the tree")]
    UnknownField(FieldId),
    #[error("field {0} is not a nested field and cannot take children")]
    NotNested(FieldId),
    #[error("unrecognized field kind tag {0:?}")]
    UnknownKind(String),
}
