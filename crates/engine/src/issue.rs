/// Problems recorded against one document: either missing fields from the
/// update flow or validation problems from the check flow, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileIssue {
    /// Path relative to the documents root.
    pub file: String,
    pub problems: Vec<String>,
}

impl FileIssue {
    pub fn new(file: impl Into<String>, problems: Vec<String>) -> Self {
        Self {
            file: file.into(),
            problems,
        }
    }
}

/// Render issues as an indented per-file bullet list.
pub fn format_issues(issues: &[FileIssue]) -> String {
    issues
        .iter()
        .map(|issue| {
            let items = issue
                .problems
                .iter()
                .map(|problem| format!("    • {problem}"))
                .collect::<Vec<_>>()
                .join("\n");
            format!("\n  {}\n{items}", issue.file)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Total problem count across all files.
pub fn total_problems(issues: &[FileIssue]) -> usize {
    issues.iter().map(|issue| issue.problems.len()).sum()
}
