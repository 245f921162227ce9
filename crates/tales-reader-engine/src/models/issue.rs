use serde::Serialize;

use super::document::Document;

/// Cover illustration credit from the preamble.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverArt {
    pub title: String,
    pub artist: String,
}

/// Numbered story entry from the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocStory {
    pub number: u32,
    pub title: String,
    pub author: String,
    /// `0` when the entry carries no page reference.
    pub page: u32,
}

/// Entry from the `Features:` part of the table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocFeature {
    pub title: String,
    pub page: u32,
}

/// Metadata recovered from the masthead, cover-art and contents blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueHeader {
    pub issue_number: Option<u32>,
    pub date_line: String,
    pub publisher: String,
    pub editors: String,
    pub cover_price: String,
    pub cover_art: Option<CoverArt>,
    pub stories: Vec<TocStory>,
    pub features: Vec<TocFeature>,
}

/// A fully parsed issue: preamble metadata plus the section document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// `None` when the text has fewer than three dividers.
    pub header: Option<IssueHeader>,
    pub document: Document,
}
