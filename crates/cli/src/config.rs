use std::env;
use std::path::PathBuf;

/// Globs excluded from document enumeration: image folders and
/// editor-private folders.
pub const DOCS_IGNORE: &[&str] = &["**/img/**", "**/sidian/**", "**/.obsidian/**"];

/// Runtime configuration. Read from the environment once at startup and
/// threaded explicitly into every flow; nothing below `main` touches the
/// environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the documents tree.
    pub docs_dir: PathBuf,
    /// Location of the category-mapping table.
    pub mapping_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            docs_dir: env::var("FRONTMATTER_DOCS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("docs")),
            mapping_path: env::var("FRONTMATTER_MAPPING_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| ["config", "category-mapping.yaml"].iter().collect()),
        }
    }
}
