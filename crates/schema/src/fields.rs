use serde_json::Value;

/// Runtime kind a frontmatter value must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Array,
}

/// One recognized frontmatter field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    /// Validation treats absence of the field as a problem.
    pub required: bool,
    pub kind: FieldKind,
    /// The update flow may fill this field when it is absent.
    pub autofill: bool,
}

const fn field(name: &'static str, required: bool, kind: FieldKind, autofill: bool) -> FieldDef {
    FieldDef {
        name,
        required,
        kind,
        autofill,
    }
}

/// Every recognized field, in canonical serialization order.
pub const FIELDS: &[FieldDef] = &[
    field("uid", true, FieldKind::String, true),
    field("title", true, FieldKind::String, false),
    field("subtitle", false, FieldKind::String, false),
    field("description", false, FieldKind::String, false),
    field("tags", false, FieldKind::Array, false),
    field("info", false, FieldKind::Array, false),
    field("draft", false, FieldKind::Boolean, false),
    field("technology", true, FieldKind::String, true),
    field("specialty", true, FieldKind::String, true),
    field("tools", true, FieldKind::Array, true),
    field("chapter", false, FieldKind::String, true),
    field("order", true, FieldKind::Number, true),
    field("access", true, FieldKind::String, true),
    field("created_at", true, FieldKind::String, true),
    field("updated_at", true, FieldKind::String, true),
];

/// Array fields whose elements must all be strings.
pub const ARRAY_STRING_FIELDS: &[&str] = &["tags", "info"];

pub const DEFAULT_ACCESS: &str = "free";
pub const DEFAULT_CHAPTER: &str = "";

/// Default value for an absent `tools` field.
pub fn default_tools() -> Value {
    Value::Array(Vec::new())
}

/// Fields the update flow is allowed to fill.
pub fn autofill_fields() -> impl Iterator<Item = &'static FieldDef> {
    FIELDS.iter().filter(|f| f.autofill)
}

/// Fields whose absence is a validation problem.
pub fn required_fields() -> impl Iterator<Item = &'static FieldDef> {
    FIELDS.iter().filter(|f| f.required)
}

/// Fields declared with the given runtime kind.
pub fn fields_of_kind(kind: FieldKind) -> impl Iterator<Item = &'static FieldDef> {
    FIELDS.iter().filter(move |f| f.kind == kind)
}

/// Canonical index of a field name, `None` for unknown keys.
pub fn field_position(name: &str) -> Option<usize> {
    FIELDS.iter().position(|f| f.name == name)
}
