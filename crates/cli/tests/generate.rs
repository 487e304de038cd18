use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn setup_tree(root: &Path) {
    fs::create_dir_all(root.join("docs/100 Git")).unwrap();
    fs::create_dir_all(root.join("config")).unwrap();
    fs::write(
        root.join("config/category-mapping.yaml"),
        "Git: DevOps\n",
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
fn generate_all_adds_uid_and_timestamps() {
    let temp = tempdir().unwrap();
    setup_tree(temp.path());
    let doc_path = temp.path().join("docs/100 Git/001 Basics.md");
    fs::write(&doc_path, "---\ntitle: Basics\n---\nBody.\n").unwrap();

    cli(temp.path())
        .args(["generate", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changed: 1"));

    let written = fs::read_to_string(&doc_path).unwrap();
    assert!(written.contains("uid: "));
    assert!(written.contains("created_at: "));
    assert!(written.contains("updated_at: "));
    assert!(written.contains("title: Basics"));
    // uid leads the block, title follows: canonical order survives.
    let uid_pos = written.find("uid: ").unwrap();
    let title_pos = written.find("title: ").unwrap();
    assert!(uid_pos < title_pos);
}

#[test]
fn generate_all_leaves_complete_documents_alone() {
    let temp = tempdir().unwrap();
    setup_tree(temp.path());
    let doc_path = temp.path().join("docs/100 Git/001 Basics.md");
    let doc = "---\n\
        uid: vY3kR9aQ\n\
        title: Basics\n\
        created_at: 2024-01-01T00:00:00.000Z\n\
        updated_at: 2024-01-01T00:00:00.000Z\n\
        ---\n\
        Body.\n";
    fs::write(&doc_path, doc).unwrap();

    cli(temp.path())
        .args(["generate", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Changed: 0"));

    assert_eq!(fs::read_to_string(&doc_path).unwrap(), doc);
}

#[test]
fn generate_without_a_repo_fails_in_staged_mode() {
    let temp = tempdir().unwrap();
    setup_tree(temp.path());

    cli(temp.path())
        .arg("generate")
        .assert()
        .failure();
}

#[test]
fn generate_all_with_empty_tree_is_a_noop() {
    let temp = tempdir().unwrap();
    setup_tree(temp.path());

    cli(temp.path())
        .args(["generate", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no files to process"));
}
