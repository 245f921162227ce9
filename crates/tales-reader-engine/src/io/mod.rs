use relative_path::RelativePath;
use std::fs;
use std::path::{Path, PathBuf};

/// File-name pattern of issue text files inside an issues directory.
pub const ISSUE_FILE_PATTERN: &str = "issue_*.txt";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid issues directory: {0}")]
    InvalidIssuesDir(String),
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Unreadable directory entry: {0}")]
    Glob(#[from] glob::GlobError),
}

/// Read an issue file and return its text
pub fn read_issue(relative_path: &RelativePath, issues_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(issues_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// List issue files directly inside the issues directory, sorted by name
pub fn scan_issue_files(issues_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_issues_dir(issues_root)?;

    let escaped = glob::Pattern::escape(&issues_root.to_string_lossy());
    let pattern = format!("{escaped}/{ISSUE_FILE_PATTERN}");

    let mut files = glob::glob(&pattern)?
        .filter_map(|entry| match entry {
            Ok(path) if path.is_file() => Some(Ok(path)),
            Ok(_) => None,
            Err(e) => Some(Err(IoError::Glob(e))),
        })
        .collect::<Result<Vec<_>, _>>()?;
    files.sort();
    Ok(files)
}

pub fn validate_issues_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidIssuesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
