use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Structural metadata read out of a document's relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedValues {
    pub category: String,
    pub technology: String,
    pub chapter: String,
    pub order: u64,
}

static ORDER_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\s+").unwrap());
static FILE_ORDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)[\s._-]").unwrap());

/// Remove a leading digit-run-plus-whitespace prefix from a folder-style
/// name ("001 Example" → "Example") and trim the result. Idempotent.
///
/// Filenames use a different prefix convention (digits followed by `.`, `_`
/// or `-`); those prefixes are left alone here.
pub fn strip_order_prefix(name: &str) -> String {
    ORDER_PREFIX.replace(name, "").trim().to_string()
}

/// Extract the numeric ordering prefix from a filename
/// ("001 File.md" → 1). Yields 0 when there is no prefix, never an error.
pub fn parse_order(file_name: &str) -> u64 {
    FILE_ORDER
        .captures(file_name)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}

/// Derive structural values from a path relative to the documents root.
///
/// Two corpus layouts compete here. In the flat layout the first segment is
/// a numbered technology folder ("100 Git/001 Basics.md"); in the nested
/// layout it is a category above a technology folder
/// ("001 Frontend/003 JSCore/..."). A digit-prefixed first segment with at
/// least one more segment below it selects the flat reading.
pub fn derive_from_path(rel_path: &Path) -> DerivedValues {
    let segments: Vec<String> = rel_path
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .filter(|s| !s.is_empty())
        .collect();

    let file_name = segments.last().cloned().unwrap_or_default();
    let category_raw = segments.first().cloned().unwrap_or_default();
    let category = strip_order_prefix(&category_raw);

    let technology_raw = if starts_with_digit(&category_raw) && segments.len() >= 2 {
        category_raw.clone()
    } else {
        segments.get(1).cloned().unwrap_or(category_raw)
    };

    let chapter_raw = segments.get(2).cloned().unwrap_or_default();

    // When a document has no technology subfolder the "technology" segment
    // is the filename itself; drop the extension in that case.
    let mut technology = strip_order_prefix(&technology_raw);
    if let Some(stem) = technology.strip_suffix(".md") {
        technology = stem.to_string();
    }

    DerivedValues {
        category,
        technology,
        chapter: strip_order_prefix(&chapter_raw),
        order: parse_order(&file_name),
    }
}

fn starts_with_digit(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_digit())
}
