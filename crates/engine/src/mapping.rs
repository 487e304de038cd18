use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, Result};

/// Technology name → specialty label. Loaded once per run, read-only after.
pub type CategoryMapping = BTreeMap<String, String>;

/// Load the category mapping table from a YAML file.
///
/// Two historical shapes are accepted and normalized here so consumers only
/// ever see the flat mapping:
///
/// 1. Legacy: the table lives under a `specialtyByCategory` key and maps a
///    technology directly to a specialty string.
/// 2. Current: the root object maps a technology to either a specialty
///    string or an object with a `specialty` string plus auxiliary fields
///    (priority, description) that are ignored.
///
/// Entries of any other shape are skipped. A missing or unparseable file is
/// an error: without the mapping neither reconciliation nor validation is
/// meaningful.
pub fn load_category_mapping(path: &Path) -> Result<CategoryMapping> {
    let raw = fs::read_to_string(path)?;
    let parsed: Value = serde_yaml::from_str(&raw)?;

    let root = match parsed {
        Value::Null => return Ok(CategoryMapping::new()),
        Value::Object(map) => map,
        other => {
            return Err(EngineError::MappingShape(format!(
                "expected a mapping at the top level, got {}",
                value_kind(&other)
            )))
        }
    };

    let table = match root.get("specialtyByCategory") {
        Some(Value::Object(inner)) => inner.clone(),
        _ => root,
    };

    let mut mapping = CategoryMapping::new();
    for (technology, value) in table {
        match value {
            Value::String(specialty) => {
                mapping.insert(technology, specialty);
            }
            Value::Object(config) => {
                if let Some(Value::String(specialty)) = config.get("specialty") {
                    mapping.insert(technology, specialty.clone());
                } else {
                    log::debug!("mapping entry `{technology}` has no specialty string, skipped");
                }
            }
            _ => {
                log::debug!("mapping entry `{technology}` is not a string or object, skipped");
            }
        }
    }

    Ok(mapping)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn load(yaml: &str) -> Result<CategoryMapping> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        load_category_mapping(file.path())
    }

    #[test]
    fn current_shape_with_config_objects() {
        let mapping = load(
            "Git:\n  specialty: DevOps\n  priority: 1\n  description: version control\nJSCore:\n  specialty: Frontend\n",
        )
        .unwrap();

        assert_eq!(mapping.get("Git").map(String::as_str), Some("DevOps"));
        assert_eq!(mapping.get("JSCore").map(String::as_str), Some("Frontend"));
    }

    #[test]
    fn legacy_shape_under_specialty_by_category() {
        let mapping = load("specialtyByCategory:\n  Git: DevOps\n  Docker: DevOps\n").unwrap();

        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("Docker").map(String::as_str), Some("DevOps"));
    }

    #[test]
    fn bare_string_values_at_the_root() {
        let mapping = load("Git: DevOps\n").unwrap();
        assert_eq!(mapping.get("Git").map(String::as_str), Some("DevOps"));
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let mapping = load(
            "Git: DevOps\nBroken: 42\nAlsoBroken:\n  priority: 1\nListShaped:\n  - a\n",
        )
        .unwrap();

        assert_eq!(mapping.len(), 1);
        assert!(mapping.contains_key("Git"));
    }

    #[test]
    fn empty_file_yields_empty_mapping() {
        let mapping = load("").unwrap();
        assert!(mapping.is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = load_category_mapping(Path::new("/nonexistent/mapping.yaml"));
        assert!(matches!(result, Err(EngineError::IoError(_))));
    }

    #[test]
    fn scalar_top_level_is_an_error() {
        assert!(matches!(
            load("just a string"),
            Err(EngineError::MappingShape(_))
        ));
    }
}
