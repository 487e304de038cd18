//! Frontmatter field schema: the authoritative contract shared by the
//! reconciler and the validator.

mod fields;
mod order;

pub use fields::{
    autofill_fields, default_tools, field_position, fields_of_kind, required_fields, FieldDef,
    FieldKind, ARRAY_STRING_FIELDS, DEFAULT_ACCESS, DEFAULT_CHAPTER, FIELDS,
};
pub use order::order_record;

/// A frontmatter record. Keys beyond the schema are allowed; the schema only
/// constrains recognized fields. Insertion order is preserved and meaningful
/// (see [`order_record`]).
pub type Record = serde_json::Map<String, serde_json::Value>;
