use frontmatter_schema::{
    autofill_fields, default_tools, order_record, Record, DEFAULT_ACCESS, DEFAULT_CHAPTER,
};
use serde_json::Value;

use crate::derive::{strip_order_prefix, DerivedValues};

/// Result of filling a record from derived values and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcileOutcome {
    /// The filled record, in canonical key order with unknown keys appended.
    pub record: Record,
    /// True iff at least one field was actually added.
    pub changed: bool,
}

/// Fill absent fields of `existing` from the path-derived values, the
/// mapping-resolved specialty and static defaults.
///
/// A field already present is never overwritten, even when its value differs
/// from what would have been derived. A computed value that is null or an
/// empty string does not count as filling the field.
pub fn reconcile(
    existing: &Record,
    derived: &DerivedValues,
    specialty: Option<&str>,
    file_name: &str,
) -> ReconcileOutcome {
    let title = strip_order_prefix(file_name.strip_suffix(".md").unwrap_or(file_name));

    let candidates: [(&str, Value); 7] = [
        ("title", Value::String(title)),
        ("order", Value::from(derived.order)),
        ("technology", Value::String(derived.technology.clone())),
        (
            "specialty",
            specialty.map_or(Value::Null, |s| Value::String(s.to_string())),
        ),
        ("tools", default_tools()),
        // The empty-string chapter default never survives the empty-value
        // guard below; kept as-is so chapter-less documents keep their
        // current shape.
        ("chapter", Value::String(DEFAULT_CHAPTER.to_string())),
        ("access", Value::String(DEFAULT_ACCESS.to_string())),
    ];

    let mut next = existing.clone();
    let mut changed = false;

    for (field, value) in candidates {
        if next.contains_key(field) || is_empty_value(&value) {
            continue;
        }
        next.insert(field.to_string(), value);
        changed = true;
    }

    ReconcileOutcome {
        record: order_record(&next),
        changed,
    }
}

/// Autofill-flagged fields absent from the pre-reconciliation record, in
/// schema order. When `specialty` is among them and the mapping resolved
/// nothing, a distinguished `specialty (no mapping)` marker is appended so
/// callers can tell a data problem from a configuration gap.
pub fn missing_autofill_fields(existing: &Record, specialty: Option<&str>) -> Vec<String> {
    let mut missing: Vec<String> = autofill_fields()
        .filter(|f| !existing.contains_key(f.name))
        .map(|f| f.name.to_string())
        .collect();

    let unresolved = specialty.map_or(true, str::is_empty);
    if unresolved && missing.iter().any(|f| f == "specialty") {
        missing.push("specialty (no mapping)".to_string());
    }

    missing
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
