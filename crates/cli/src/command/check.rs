use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use frontmatter_engine::{
    derive_from_path, format_issues, load_category_mapping, total_problems, validate,
    CategoryMapping, FileIssue,
};

use crate::config::Config;
use crate::scanner::DocScanner;

/// Validate frontmatter across the docs tree (or the staged subset).
/// Exit code 1 iff any issue was found; per-file processing failures are
/// logged and counted but do not affect the exit code.
pub fn run(config: &Config, staged: bool) -> Result<i32> {
    let mapping = load_category_mapping(&config.mapping_path).with_context(|| {
        format!(
            "failed to load category mapping from {}",
            config.mapping_path.display()
        )
    })?;

    let scanner = DocScanner::new(&config.docs_dir);
    let files: Vec<PathBuf> = if staged {
        let staged_paths =
            frontmatter_vcs::staged_files(Path::new(".")).context("failed to list staged files")?;
        scanner.filter_staged(&staged_paths)
    } else {
        scanner.scan()
    };

    let mut issues = Vec::new();
    let mut failed = 0usize;

    for file in &files {
        let rel = super::rel_display(&config.docs_dir, file);
        match check_file(config, &mapping, file) {
            Ok(problems) => {
                if !problems.is_empty() {
                    issues.push(FileIssue::new(rel, problems));
                }
            }
            Err(err) => {
                log::error!("{rel}: {err:#}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        log::warn!("{failed} file(s) could not be processed");
    }

    if issues.is_empty() {
        println!("\nFrontmatter is valid.");
        return Ok(0);
    }

    println!("\nFound frontmatter problems:");
    println!("   Files with problems: {}", issues.len());
    println!("   Total problems: {}", total_problems(&issues));
    println!("{}", format_issues(&issues));
    Ok(1)
}

fn check_file(config: &Config, mapping: &CategoryMapping, file: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(file)?;
    let doc = frontmatter_codec::parse(&raw)?;

    let rel = file.strip_prefix(&config.docs_dir).unwrap_or(file);
    let derived = derive_from_path(rel);
    let specialty = mapping.get(&derived.technology).map(String::as_str);

    Ok(validate(&doc.metadata, specialty))
}
