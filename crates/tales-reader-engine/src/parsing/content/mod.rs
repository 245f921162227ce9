//! # Content Formatting
//!
//! Two phases, as for any line-oriented block parse:
//!
//! 1. **Line Classification** (`classify`): each body line becomes a
//!    `LineClass` from local facts only (indentation, trimmed text).
//! 2. **Block Construction** (`builder`): a `ContentBuilder` buffers prose
//!    lines and flushes them as one paragraph whenever a blank or special
//!    line arrives.
//!
//! Block order is the order of the lines that produced them.

pub mod builder;
pub mod classify;

pub use builder::ContentBuilder;
pub use classify::{ContentLineClassifier, LineClass};

use crate::models::ContentBlock;

/// Blocks of one section body plus the drop-cap rendering hint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedContent {
    pub blocks: Vec<ContentBlock>,
    pub drop_cap: bool,
}

pub fn format_content(
    lines: &[&str],
    is_story: bool,
    classifier: &ContentLineClassifier,
) -> FormattedContent {
    let mut builder = ContentBuilder::new();
    for line in lines {
        builder.push(classifier.classify(line));
    }
    FormattedContent {
        blocks: builder.finish(),
        drop_cap: is_story,
    }
}
