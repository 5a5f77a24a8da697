//! Projection of a field forest into a JSON value.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::field::{Field, FieldKind};

/// Placeholder emitted for string-kinded fields. The projection models the
/// shape of the document, not actual data.
pub const STR_PLACEHOLDER: &str = "String (default)";

/// Projects a field sequence into a JSON object.
///
/// Pure and deterministic: identical snapshots always project to identical
/// values, key order equals field sequence order (`serde_json` is built with
/// `preserve_order`), and the input is never mutated. Fields whose key is
/// empty or blank are skipped; nested fields recurse, with empty children
/// projecting to an empty object.
pub fn project(fields: &[Arc<Field>]) -> Value {
    let mut out = Map::new();
    for field in fields {
        if field.key.trim().is_empty() {
            continue;
        }
        let value = match field.kind {
            FieldKind::Str => Value::String(STR_PLACEHOLDER.to_string()),
            FieldKind::Num => Value::from(0),
            FieldKind::Nested => project(&field.children),
        };
        out.insert(field.key.clone(), value);
    }
    Value::Object(out)
}
