//! # Issue Parsing
//!
//! Raw issue text goes through a fixed pipeline:
//!
//! 1. [`dividers`]: indices of structural `==========` lines.
//! 2. [`segment`]: divider indices grouped into title/body spans, skipping the
//!    preamble.
//! 3. [`title`] and [`content`]: each span's title block and body interpreted.
//! 4. [`assemble`]: one [`Section`](crate::models::Section) per span.
//!
//! [`header`] reads the preamble the segmenter skips.
//!
//! Parsing is total. Malformed input degrades to fewer or emptier sections,
//! never to an error.

pub mod assemble;
pub mod content;
pub mod dividers;
pub mod header;
pub mod inline;
pub mod segment;
pub mod span;
pub mod title;

use log::{debug, warn};

use crate::config::{PREAMBLE_DIVIDERS, ParserConfig};
use crate::error::ParserConfigError;
use crate::models::{Document, Issue, IssueHeader};

use content::ContentLineClassifier;
use dividers::DividerScanner;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// A validated parser. Cheap to clone and reusable across issues.
#[derive(Debug, Clone)]
pub struct Parser {
    config: ParserConfig,
    dividers: DividerScanner,
    classifier: ContentLineClassifier,
}

impl Parser {
    pub fn new(config: ParserConfig) -> Result<Self, ParserConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: ParserConfig) -> Self {
        Self {
            dividers: DividerScanner::new(config.divider_char, config.min_divider_run),
            classifier: ContentLineClassifier::new(
                config.sub_heading_min_indent,
                config.typographic_divider_max_len,
            ),
            config,
        }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses the content sections of one issue.
    pub fn parse(&self, text: &str) -> Document {
        let lines = split_lines(text);
        let dividers = self.dividers.scan(&lines);
        self.document_from(&lines, &dividers)
    }

    /// Parses the preamble header and the content sections of one issue.
    pub fn parse_issue(&self, text: &str) -> Issue {
        let lines = split_lines(text);
        let dividers = self.dividers.scan(&lines);
        Issue {
            header: header::parse_header(&lines, &dividers),
            document: self.document_from(&lines, &dividers),
        }
    }

    /// Parses only the preamble header.
    pub fn parse_header(&self, text: &str) -> Option<IssueHeader> {
        let lines = split_lines(text);
        let dividers = self.dividers.scan(&lines);
        header::parse_header(&lines, &dividers)
    }

    fn document_from(&self, lines: &[&str], dividers: &[usize]) -> Document {
        debug!("{} lines, {} dividers", lines.len(), dividers.len());
        if dividers.len() <= PREAMBLE_DIVIDERS {
            warn!(
                "only {} dividers found, issue has no content sections",
                dividers.len()
            );
            return Document::default();
        }

        let raw = segment::segment(lines, dividers, self.config.title_pair_max_gap);
        assemble::assemble(&raw, &self.classifier)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::from_valid(ParserConfig::default())
    }
}

/// Splits issue text into lines, dropping a leading byte-order mark.
fn split_lines(text: &str) -> Vec<&str> {
    text.strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(text)
        .split('\n')
        .collect()
}

/// Parses with the default configuration.
pub fn parse_document(text: &str) -> Document {
    Parser::default().parse(text)
}

/// Parses header and sections with the default configuration.
pub fn parse_issue(text: &str) -> Issue {
    Parser::default().parse_issue(text)
}
