use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use frontmatter_codec::{canonicalize, parse, serialize};
use frontmatter_engine::{
    derive_from_path, format_issues, load_category_mapping, missing_autofill_fields, reconcile,
    total_problems, CategoryMapping, FileIssue,
};

use crate::config::Config;
use crate::scanner::DocScanner;

struct UpdateOutcome {
    changed: bool,
    missing: Vec<String>,
}

/// Fill missing frontmatter fields across the docs tree from path-derived
/// values, the category mapping and static defaults. Data problems are
/// reported but never change the exit code.
pub fn run(config: &Config) -> Result<i32> {
    let mapping = load_category_mapping(&config.mapping_path).with_context(|| {
        format!(
            "failed to load category mapping from {}",
            config.mapping_path.display()
        )
    })?;

    let files = DocScanner::new(&config.docs_dir).scan();

    let mut issues = Vec::new();
    let mut changed_count = 0usize;
    let mut failed = 0usize;

    for file in &files {
        let rel = super::rel_display(&config.docs_dir, file);
        match update_file(config, &mapping, file) {
            Ok(outcome) => {
                if outcome.changed {
                    changed_count += 1;
                    println!("✓ {rel}");
                }
                if !outcome.missing.is_empty() {
                    issues.push(FileIssue::new(rel, outcome.missing));
                }
            }
            Err(err) => {
                log::error!("{rel}: {err:#}");
                failed += 1;
            }
        }
    }

    if !issues.is_empty() {
        println!("\nFiles with missing frontmatter fields:");
        println!("   Files affected: {}", issues.len());
        println!("   Missing fields total: {}", total_problems(&issues));
        println!("{}", format_issues(&issues));
    }

    if failed > 0 {
        log::warn!("{failed} file(s) could not be processed");
    }

    println!("\nDone. Updated files: {changed_count}.");
    Ok(0)
}

fn update_file(config: &Config, mapping: &CategoryMapping, file: &Path) -> Result<UpdateOutcome> {
    let raw = fs::read_to_string(file)?;
    let doc = parse(&raw)?;

    let rel = file.strip_prefix(&config.docs_dir).unwrap_or(file);
    let derived = derive_from_path(rel);
    let specialty = mapping.get(&derived.technology).map(String::as_str);
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let outcome = reconcile(&doc.metadata, &derived, specialty, &file_name);
    let missing = missing_autofill_fields(&doc.metadata, specialty);

    if outcome.changed {
        let text = serialize(&doc.body, &outcome.record)?;
        fs::write(file, canonicalize(&text))?;
    }

    Ok(UpdateOutcome {
        changed: outcome.changed,
        missing,
    })
}
