//! Thin wrapper around the `git` binary: the staged-file list, the earliest
//! recorded add time of a path, and staging of rewritten files.

mod error;

pub use error::{Result, VcsError};

use std::path::Path;
use std::process::Command;

/// Paths currently staged as added, copied, modified or renamed, relative to
/// the repository root.
pub fn staged_files(repo_root: &Path) -> Result<Vec<String>> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(["diff", "--cached", "--name-only", "--diff-filter=ACMR"])
        .output()?;

    if !output.status.success() {
        return Err(VcsError::Git(stderr_line(&output.stderr)));
    }

    Ok(String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// The author timestamp (RFC 3339) of the commit that first added `path`,
/// or `None` when history has no record of it. Failures are treated as
/// absence, not errors.
pub fn earliest_commit_time(repo_root: &Path, path: &Path) -> Option<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(["log", "--follow", "--diff-filter=A", "--format=%aI", "--reverse", "--"])
        .arg(path)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(str::to_string)
}

/// Stage a rewritten file.
pub fn stage(repo_root: &Path, path: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo_root)
        .args(["add", "--"])
        .arg(path)
        .output()?;

    if !output.status.success() {
        return Err(VcsError::Git(stderr_line(&output.stderr)));
    }

    Ok(())
}

fn stderr_line(stderr: &[u8]) -> String {
    String::from_utf8_lossy(stderr)
        .lines()
        .next()
        .unwrap_or("git exited with failure")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn earliest_commit_time_outside_a_repo_is_none() {
        let temp = tempdir().unwrap();
        let when = earliest_commit_time(temp.path(), Path::new("docs/missing.md"));
        assert!(when.is_none());
    }

    #[test]
    fn staged_files_outside_a_repo_is_an_error() {
        let temp = tempdir().unwrap();
        assert!(staged_files(temp.path()).is_err());
    }

    #[test]
    fn stage_outside_a_repo_is_an_error() {
        let temp = tempdir().unwrap();
        assert!(stage(temp.path(), Path::new("docs/a.md")).is_err());
    }
}
