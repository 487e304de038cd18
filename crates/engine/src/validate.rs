use frontmatter_schema::{fields_of_kind, required_fields, FieldKind, Record, ARRAY_STRING_FIELDS};
use serde_json::Value;

/// Check a record's completeness and type-correctness against the field
/// schema. Two independent passes, missing-pass first, concatenated.
///
/// `specialty` is the mapping lookup for the document's technology; it only
/// matters for the `specialty: no mapping` problem, which distinguishes a
/// configuration gap from a plain missing field.
pub fn validate(record: &Record, specialty: Option<&str>) -> Vec<String> {
    let mut problems = missing_problems(record, specialty);
    problems.extend(type_problems(record));
    problems
}

fn missing_problems(record: &Record, specialty: Option<&str>) -> Vec<String> {
    let mut problems: Vec<String> = required_fields()
        .filter(|f| !record.contains_key(f.name))
        .map(|f| format!("{}: missing", f.name))
        .collect();

    if !record.contains_key("specialty") && specialty.map_or(true, str::is_empty) {
        problems.push("specialty: no mapping".to_string());
    }

    problems
}

fn type_problems(record: &Record) -> Vec<String> {
    let mut problems = Vec::new();

    let checks: [(FieldKind, fn(&Value) -> bool); 4] = [
        (FieldKind::String, Value::is_string),
        (FieldKind::Number, Value::is_number),
        (FieldKind::Array, Value::is_array),
        (FieldKind::Boolean, Value::is_boolean),
    ];

    for (kind, matches) in checks {
        for field in fields_of_kind(kind) {
            if let Some(value) = record.get(field.name) {
                if !matches(value) {
                    problems.push(format!("{}: invalid type", field.name));
                }
            }
        }
    }

    for field in ARRAY_STRING_FIELDS {
        if let Some(Value::Array(items)) = record.get(*field) {
            if items.iter().any(|item| !item.is_string()) {
                problems.push(format!("{field}: invalid items"));
            }
        }
    }

    problems
}
