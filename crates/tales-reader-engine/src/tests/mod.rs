use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary issues directory for testing
pub fn create_test_issues_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test file with content
pub fn create_test_file(issues_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = issues_dir.path().join(filename);
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A complete small issue: preamble, one story and one letters column.
pub fn sample_issue(number: u32, date: &str) -> String {
    format!(
        r#"==========
TALES FROM THE FUTURE AND BEYOND
Issue #{number} — {date}
Published by Meridian Press
Editors: Maxwell Sterling & June Hale
Cover Price: 35¢
==========
Cover Art: "The Glass Moon" by R. K. Vance
==========
TABLE OF CONTENTS

  1. "The Long Equations" by Dr. Vincent Koslov .......... p. 4

Features:
  Signals Received ....... p. 60
==========
THE LONG EQUATIONS
by Dr. Vincent Koslov
==========
It began with a _number_.
[THE END]
==========
SIGNALS RECEIVED
==========
Dear editors.
"#
    )
}
