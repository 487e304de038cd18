use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const VALID_DOC: &str = "---\n\
uid: vY3kR9aQ\n\
title: Basics\n\
technology: Git\n\
specialty: DevOps\n\
tools: []\n\
order: 1\n\
access: free\n\
created_at: 2024-01-01T00:00:00.000Z\n\
updated_at: 2024-01-01T00:00:00.000Z\n\
---\n\
# Basics\n";

fn setup_tree(root: &Path) {
    fs::create_dir_all(root.join("docs")).unwrap();
    fs::create_dir_all(root.join("config")).unwrap();
    fs::write(
        root.join("config/category-mapping.yaml"),
        "Git:\n  specialty: DevOps\n  priority: 1\n  description: version control\n",
    )
    .unwrap();
}

fn cli(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("frontmatter").expect("binary");
    cmd.current_dir(root)
        .env("FRONTMATTER_DOCS_DIR", root.join("docs"))
        .env(
            "FRONTMATTER_MAPPING_PATH",
            root.join("config/category-mapping.yaml"),
        );
    cmd
}

#[test]
fn check_passes_on_a_valid_tree() {
    let temp = tempdir().unwrap();
    setup_tree(temp.path());
    let doc_dir = temp.path().join("docs/100 Git");
    fs::create_dir_all(&doc_dir).unwrap();
    fs::write(doc_dir.join("001 Basics.md"), VALID_DOC).unwrap();

    cli(temp.path())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Frontmatter is valid."));
}

#[test]
fn check_reports_missing_fields_and_exits_one() {
    let temp = tempdir().unwrap();
    setup_tree(temp.path());
    let doc_dir = temp.path().join("docs/200 Docker");
    fs::create_dir_all(&doc_dir).unwrap();
    fs::write(doc_dir.join("001 Intro.md"), "# Intro\n").unwrap();

    cli(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("uid: missing"))
        .stdout(predicate::str::contains("specialty: no mapping"))
        .stdout(predicate::str::contains("200 Docker/001 Intro.md"));
}

#[test]
fn check_reports_type_problems() {
    let temp = tempdir().unwrap();
    setup_tree(temp.path());
    let doc_dir = temp.path().join("docs/100 Git");
    fs::create_dir_all(&doc_dir).unwrap();
    let doc = VALID_DOC.replace("order: 1", "order: first");
    fs::write(doc_dir.join("001 Basics.md"), doc).unwrap();

    cli(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stdout(predicate::str::contains("order: invalid type"));
}

#[test]
fn check_aborts_when_the_mapping_is_missing() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("docs")).unwrap();

    cli(temp.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load category mapping"));
}

#[test]
fn unknown_subcommand_fails_with_usage() {
    let temp = tempdir().unwrap();
    setup_tree(temp.path());

    cli(temp.path())
        .arg("bogus")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
