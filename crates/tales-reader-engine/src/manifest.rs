//! Library-wide index of issues, built from an issues directory.

use std::collections::BTreeSet;
use std::path::Path;

use log::{debug, warn};
use serde::Serialize;

use crate::io::{IoError, scan_issue_files};
use crate::models::{CoverArt, Era, IssueFileName, TocFeature, TocStory};
use crate::parsing::Parser;

pub const MAGAZINE_TITLE: &str = "Tales from the Future and Beyond";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub title: String,
    pub total_issues: usize,
    pub era_i_count: usize,
    pub era_ii_count: usize,
    /// Sorted, without duplicates.
    pub years: Vec<u32>,
    pub issues: Vec<IssueSummary>,
}

/// One manifest row: file-name fields plus preamble metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueSummary {
    #[serde(flatten)]
    pub file: IssueFileName,
    pub date: String,
    pub filename: String,
    pub publisher: String,
    pub editors: String,
    pub cover_price: String,
    pub cover_art: Option<CoverArt>,
    pub stories: Vec<TocStory>,
    pub features: Vec<TocFeature>,
    pub story_count: usize,
}

impl Manifest {
    pub fn from_issues(issues: Vec<IssueSummary>) -> Self {
        let era_count = |era: Era| issues.iter().filter(|i| i.file.era == era).count();
        let years: BTreeSet<u32> = issues.iter().map(|i| i.file.year).collect();

        Self {
            title: MAGAZINE_TITLE.to_string(),
            total_issues: issues.len(),
            era_i_count: era_count(Era::I),
            era_ii_count: era_count(Era::II),
            years: years.into_iter().collect(),
            issues,
        }
    }

    /// The issue with this number, if indexed.
    pub fn issue(&self, number: u32) -> Option<&IssueSummary> {
        self.issues.iter().find(|i| i.file.number == number)
    }

    /// Looks an issue up by its zero-padded number, e.g. `"007"`.
    pub fn issue_by_padded(&self, number_padded: &str) -> Option<&IssueSummary> {
        self.issues.iter().find(|i| i.file.number_padded == number_padded)
    }

    /// Issues numbered one before and one after `number`, where indexed.
    pub fn adjacent(&self, number: u32) -> (Option<&IssueSummary>, Option<&IssueSummary>) {
        let previous = number.checked_sub(1).and_then(|n| self.issue(n));
        let next = number.checked_add(1).and_then(|n| self.issue(n));
        (previous, next)
    }
}

/// Summarises one issue file. `None` when the name or preamble is unusable.
pub fn summarize_issue(filename: &str, text: &str, parser: &Parser) -> Option<IssueSummary> {
    let Some(file) = IssueFileName::parse(filename) else {
        warn!("skipping {filename}: not an issue file name");
        return None;
    };
    let Some(header) = parser.parse_header(text) else {
        warn!("skipping {filename}: no issue header");
        return None;
    };

    Some(IssueSummary {
        date: file.date(),
        filename: filename.to_string(),
        file,
        publisher: header.publisher,
        editors: header.editors,
        cover_price: header.cover_price,
        cover_art: header.cover_art,
        story_count: header.stories.len(),
        stories: header.stories,
        features: header.features,
    })
}

/// Reads every issue file under `issues_root` and indexes it.
pub fn build_manifest(issues_root: &Path, parser: &Parser) -> Result<Manifest, IoError> {
    let mut issues = vec![];

    for path in scan_issue_files(issues_root)? {
        let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
            warn!("skipping {}: file name is not UTF-8", path.display());
            continue;
        };
        let text = std::fs::read_to_string(&path)?;
        if let Some(summary) = summarize_issue(filename, &text, parser) {
            debug!(
                "indexed issue {} with {} stories",
                summary.file.number, summary.story_count
            );
            issues.push(summary);
        }
    }

    Ok(Manifest::from_issues(issues))
}
