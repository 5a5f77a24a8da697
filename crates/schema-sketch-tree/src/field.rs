//! The `Field` node and its kind enumeration.

use std::sync::Arc;

use crate::id::FieldId;

/// The kind of value a field produces in the projected JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A string-valued field.
    Str,
    /// A number-valued field.
    Num,
    /// An object-valued field containing further child fields.
    Nested,
}

impl FieldKind {
    /// Returns the "kind" string tag for this field kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Num => "num",
            Self::Nested => "nested",
        }
    }

    /// Parses a kind tag as supplied by a type-selector widget.
    ///
    /// Unknown tags yield `None`; an unrecognized kind can therefore never
    /// enter the tree.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "str" => Some(Self::Str),
            "num" => Some(Self::Num),
            "nested" => Some(Self::Nested),
            _ => None,
        }
    }

    pub fn is_nested(self) -> bool {
        matches!(self, Self::Nested)
    }
}

/// A node in the schema tree: a key, a kind, and (if nested) child fields.
///
/// Nodes are held behind [`Arc`] so mutations can rebuild the path from a
/// changed node to the root while sharing every unrelated subtree by pointer.
/// `children` is meaningful only while `kind` is [`FieldKind::Nested`];
/// switching the kind away retains the children as dormant data and switching
/// back restores them.
#[derive(Debug, Clone)]
pub struct Field {
    pub id: FieldId,
    /// The property name this field produces in JSON output. May be empty
    /// during editing; blank-keyed fields are excluded from projection.
    pub key: String,
    pub kind: FieldKind,
    pub children: Vec<Arc<Field>>,
}

impl Field {
    /// A default field: string-kinded, unnamed, childless.
    pub fn new(id: FieldId) -> Self {
        Self {
            id,
            key: String::new(),
            kind: FieldKind::Str,
            children: Vec::new(),
        }
    }
}
