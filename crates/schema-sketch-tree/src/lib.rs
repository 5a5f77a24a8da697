//! Field-tree model for the schema sketch editor.
//!
//! An ordered, recursively nested forest of named, typed fields, plus the
//! pure projection of that forest into a JSON document. All mutation is
//! structural/persistent: a change at depth N rebuilds exactly the N
//! ancestors on the path to the changed node and shares every unrelated
//! subtree by pointer.

pub mod field;
pub mod forest;
pub mod id;
pub mod project;

pub use field::{Field, FieldKind};
pub use forest::FieldForest;
pub use id::FieldId;
pub use project::{project, STR_PLACEHOLDER};
