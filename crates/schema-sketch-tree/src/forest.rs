//! The field forest and its mutation operations.
//!
//! All operations are total: an id that resolves nowhere in the forest makes
//! the operation a no-op, reported through the return value. Callers cannot
//! corrupt the tree through this surface.

use std::sync::Arc;

use crate::field::{Field, FieldKind};
use crate::id::{FieldId, IdGen};

/// The document under construction: a root-level ordered sequence of fields
/// (a forest, not a single root) plus the session id generator.
///
/// Every mutation is structural/persistent. Locating a node at depth N and
/// replacing or removing it rebuilds exactly the N ancestor nodes on the
/// path; sibling subtrees keep their `Arc` identity, which callers may rely
/// on for reference-equality change detection.
#[derive(Debug, Default)]
pub struct FieldForest {
    roots: Vec<Arc<Field>>,
    ids: IdGen,
}

impl FieldForest {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current immutable snapshot of the root sequence.
    pub fn fields(&self) -> &[Arc<Field>] {
        &self.roots
    }

    /// A cheap owned snapshot; later mutations never alter it.
    pub fn snapshot(&self) -> Vec<Arc<Field>> {
        self.roots.clone()
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Returns a new default field with a fresh session-unique id.
    ///
    /// The field is not yet part of the forest; `add_root_field` and
    /// `add_child_field` are the attachment points.
    pub fn create_field(&mut self) -> Field {
        Field::new(self.ids.next_id())
    }

    /// Appends a new default field to the root sequence and returns its id.
    pub fn add_root_field(&mut self) -> FieldId {
        let field = self.create_field();
        let id = field.id;
        self.roots.push(Arc::new(field));
        id
    }

    /// Appends a new default field to the children of the nested field
    /// `parent`, wherever it sits in the forest.
    ///
    /// Returns the new field's id, or `None` (a no-op) if `parent` resolves
    /// to nothing or to a non-nested field.
    pub fn add_child_field(&mut self, parent: FieldId) -> Option<FieldId> {
        let child = self.create_field();
        let id = child.id;
        let roots = append_child_in(&self.roots, parent, Arc::new(child))?;
        self.roots = roots;
        Some(id)
    }

    /// Replaces the node whose id matches `updated.id` wholesale, at the same
    /// position, anywhere in the forest.
    ///
    /// Returns `false` (a no-op) if no node carries that id.
    pub fn update_field(&mut self, updated: Field) -> bool {
        match replace_in(&self.roots, &Arc::new(updated)) {
            Some(roots) => {
                self.roots = roots;
                true
            }
            None => false,
        }
    }

    /// Removes the node with `id` — and its entire subtree — from its
    /// parent's children or from the root sequence.
    ///
    /// Returns `false` (a no-op) if no node carries that id.
    pub fn remove_field(&mut self, id: FieldId) -> bool {
        match remove_in(&self.roots, id) {
            Some(roots) => {
                self.roots = roots;
                true
            }
            None => false,
        }
    }

    /// Looks up the node with `id` anywhere in the forest.
    pub fn find(&self, id: FieldId) -> Option<&Arc<Field>> {
        find_in(&self.roots, id)
    }
}

/// Rebuilds one node with a new child sequence, keeping everything else.
fn with_children(node: &Field, children: Vec<Arc<Field>>) -> Arc<Field> {
    Arc::new(Field {
        id: node.id,
        key: node.key.clone(),
        kind: node.kind,
        children,
    })
}

/// Locate-and-replace by recursive descent.
///
/// If a direct member of `seq` matches the target id, it is replaced there;
/// otherwise the descent continues into every nested member's children. The
/// return value is the rebuilt sequence, or `None` when the target is absent
/// from this subtree — in which case the sequence is left untouched, so only
/// the ancestor path of a hit is ever reconstructed.
fn replace_in(seq: &[Arc<Field>], updated: &Arc<Field>) -> Option<Vec<Arc<Field>>> {
    if let Some(pos) = seq.iter().position(|f| f.id == updated.id) {
        let mut next = seq.to_vec();
        next[pos] = Arc::clone(updated);
        return Some(next);
    }
    for (pos, node) in seq.iter().enumerate() {
        if node.kind != FieldKind::Nested {
            continue;
        }
        if let Some(children) = replace_in(&node.children, updated) {
            let mut next = seq.to_vec();
            next[pos] = with_children(node, children);
            return Some(next);
        }
    }
    None
}

/// Locate-and-remove by recursive descent; same contract as [`replace_in`].
fn remove_in(seq: &[Arc<Field>], id: FieldId) -> Option<Vec<Arc<Field>>> {
    if let Some(pos) = seq.iter().position(|f| f.id == id) {
        let mut next = seq.to_vec();
        next.remove(pos);
        return Some(next);
    }
    for (pos, node) in seq.iter().enumerate() {
        if node.kind != FieldKind::Nested {
            continue;
        }
        if let Some(children) = remove_in(&node.children, id) {
            let mut next = seq.to_vec();
            next[pos] = with_children(node, children);
            return Some(next);
        }
    }
    None
}

/// Appends `child` to the children of the nested field `parent`; same
/// contract as [`replace_in`]. A `parent` that exists but is not nested does
/// not match.
fn append_child_in(
    seq: &[Arc<Field>],
    parent: FieldId,
    child: Arc<Field>,
) -> Option<Vec<Arc<Field>>> {
    if let Some(pos) = seq
        .iter()
        .position(|f| f.id == parent && f.kind == FieldKind::Nested)
    {
        let node = &seq[pos];
        let mut children = node.children.clone();
        children.push(child);
        let mut next = seq.to_vec();
        next[pos] = with_children(node, children);
        return Some(next);
    }
    for (pos, node) in seq.iter().enumerate() {
        if node.kind != FieldKind::Nested {
            continue;
        }
        if let Some(children) = append_child_in(&node.children, parent, Arc::clone(&child)) {
            let mut next = seq.to_vec();
            next[pos] = with_children(node, children);
            return Some(next);
        }
    }
    None
}

fn find_in(seq: &[Arc<Field>], id: FieldId) -> Option<&Arc<Field>> {
    for node in seq {
        if node.id == id {
            return Some(node);
        }
        if node.kind == FieldKind::Nested {
            if let Some(found) = find_in(&node.children, id) {
                return Some(found);
            }
        }
    }
    None
}
