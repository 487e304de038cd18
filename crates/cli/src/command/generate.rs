use anyhow::{bail, Result};
use chrono::{SecondsFormat, Utc};
use nanoid::nanoid;
use serde_json::Value;
use std::fs;
use std::path::Path;

use frontmatter_codec::{canonicalize, parse, serialize};
use frontmatter_schema::order_record;

use crate::config::Config;
use crate::scanner::DocScanner;

/// Generate `uid`, `created_at` and `updated_at` for documents that lack
/// them. Defaults to the staged set; `--all` sweeps the whole docs tree.
/// Per-file failures are isolated but make the whole run exit non-zero.
pub fn run(config: &Config, all: bool) -> Result<i32> {
    let scanner = DocScanner::new(&config.docs_dir);
    let files = if all {
        scanner.scan()
    } else {
        scanner.filter_staged(&frontmatter_vcs::staged_files(Path::new("."))?)
    };

    if files.is_empty() {
        println!("generate: no files to process.");
        return Ok(0);
    }

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let mut changed_count = 0usize;
    let mut failed = 0usize;

    for file in &files {
        let rel = super::rel_display(&config.docs_dir, file);
        match generate_file(file, &now, !all) {
            Ok(true) => {
                changed_count += 1;
                println!("✓ {rel}");
            }
            Ok(false) => {}
            Err(err) => {
                log::error!("{rel}: {err:#}");
                failed += 1;
            }
        }
    }

    println!("\nGeneration finished:");
    println!("   Mode: {}", if all { "all" } else { "staged" });
    println!("   Files processed: {}", files.len());
    println!("   Changed: {changed_count}");
    if failed > 0 {
        println!("   Failed: {failed}");
        bail!("generate: failed files={failed}");
    }

    Ok(0)
}

fn generate_file(file: &Path, now: &str, stage: bool) -> Result<bool> {
    let raw = fs::read_to_string(file)?;
    let doc = parse(&raw)?;
    let mut data = doc.metadata.clone();
    let mut changed = false;

    if !data.contains_key("uid") {
        data.insert("uid".to_string(), Value::String(nanoid!()));
        changed = true;
    }

    if !data.contains_key("created_at") {
        let created = frontmatter_vcs::earliest_commit_time(Path::new("."), file)
            .unwrap_or_else(|| now.to_string());
        data.insert("created_at".to_string(), Value::String(created));
        changed = true;
    }

    if changed {
        data.insert("updated_at".to_string(), Value::String(now.to_string()));

        let text = serialize(&doc.body, &order_record(&data))?;
        fs::write(file, canonicalize(&text))?;

        if stage {
            frontmatter_vcs::stage(Path::new("."), file)?;
        }
    }

    Ok(changed)
}
