pub mod block;
pub mod document;
pub mod issue;
pub mod issue_file;

pub use block::{ContentBlock, Paragraph, Segment};
pub use document::{Document, OutlineEntry, OutlineGroup, Section, SectionKind};
pub use issue::{CoverArt, Issue, IssueHeader, TocFeature, TocStory};
pub use issue_file::{Era, IssueFileName};
