//! The editor session: event surface in, derived render outputs out.

use std::sync::Arc;

use schema_sketch_tree::{project, Field, FieldForest, FieldId, FieldKind};

use crate::error::EditorError;

/// One visual row of the tree editor.
///
/// The renderer paints one row per field — name input, type selector, delete
/// control — indented by `depth`, with an "add nested field" control when the
/// kind is nested. Dormant children of non-nested fields produce no rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorRow {
    pub id: FieldId,
    pub depth: usize,
    pub key: String,
    pub kind: FieldKind,
}

/// A single-user editing session over one field forest.
///
/// Every method runs to completion synchronously; after any mutation the
/// caller re-reads [`rows`](Self::rows) and [`preview`](Self::preview) to
/// re-render.
#[derive(Debug, Default)]
pub struct EditorSession {
    forest: FieldForest,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current immutable snapshot of the field forest.
    pub fn fields(&self) -> &[Arc<Field>] {
        self.forest.fields()
    }

    /// Appends a new unnamed string field at the root.
    pub fn add_root_field(&mut self) -> FieldId {
        self.forest.add_root_field()
    }

    /// Appends a new unnamed string field under the nested field `parent`.
    pub fn add_child_field(&mut self, parent: FieldId) -> Result<FieldId, EditorError> {
        match self.forest.add_child_field(parent) {
            Some(id) => Ok(id),
            None => match self.forest.find(parent) {
                Some(_) => Err(EditorError::NotNested(parent)),
                None => Err(EditorError::UnknownField(parent)),
            },
        }
    }

    /// Sets the field's key name. An empty key is legal; the field simply
    /// drops out of the projection until named again.
    pub fn rename_field(&mut self, id: FieldId, key: &str) -> Result<(), EditorError> {
        let mut field = self.cloned(id)?;
        field.key = key.to_string();
        self.forest.update_field(field);
        Ok(())
    }

    /// Sets the field's kind from a type-selector tag (`"str"`, `"num"`,
    /// `"nested"`). Unknown tags are rejected and the tree is untouched.
    /// Children are retained across kind changes in either direction.
    pub fn set_field_kind(&mut self, id: FieldId, tag: &str) -> Result<(), EditorError> {
        let kind =
            FieldKind::parse(tag).ok_or_else(|| EditorError::UnknownKind(tag.to_string()))?;
        let mut field = self.cloned(id)?;
        field.kind = kind;
        self.forest.update_field(field);
        Ok(())
    }

    /// Removes the field and its entire subtree.
    pub fn remove_field(&mut self, id: FieldId) -> Result<(), EditorError> {
        if self.forest.remove_field(id) {
            Ok(())
        } else {
            Err(EditorError::UnknownField(id))
        }
    }

    /// Depth-first flattening of the forest into render rows.
    pub fn rows(&self) -> Vec<EditorRow> {
        let mut rows = Vec::new();
        push_rows(self.forest.fields(), 0, &mut rows);
        rows
    }

    /// The two-space-indented JSON preview of the current projection.
    pub fn preview(&self) -> String {
        let value = project(self.forest.fields());
        // A projected Value always serializes; the fallback is unreachable.
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
    }

    fn cloned(&self, id: FieldId) -> Result<Field, EditorError> {
        self.forest
            .find(id)
            .map(|node| Field::clone(node))
            .ok_or(EditorError::UnknownField(id))
    }
}

fn push_rows(fields: &[Arc<Field>], depth: usize, rows: &mut Vec<EditorRow>) {
    for field in fields {
        rows.push(EditorRow {
            id: field.id,
            depth,
            key: field.key.clone(),
            kind: field.kind,
        });
        if field.kind.is_nested() {
            push_rows(&field.children, depth + 1, rows);
        }
    }
}
