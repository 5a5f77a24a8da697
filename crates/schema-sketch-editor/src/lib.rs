//! Editor session adapter over the schema-sketch field tree.
//!
//! The model's operations are total and silently ignore unresolvable ids;
//! reporting those conditions to a user is a presentation concern, so this
//! crate is where they become typed errors. It also derives the two outputs
//! a renderer paints: the flat row list mirroring the tree shape, and the
//! pretty-printed JSON preview.

pub mod error;
pub mod session;

pub use error::EditorError;
pub use session::{EditorRow, EditorSession};
