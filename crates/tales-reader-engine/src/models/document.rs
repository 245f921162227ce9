use std::fmt;

use serde::{Deserialize, Serialize};

use super::block::ContentBlock;

/// The closed classification of a section's purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    #[default]
    Story,
    Editorial,
    Authors,
    Letters,
    Reviews,
    Feature,
}

impl SectionKind {
    pub fn is_story(self) -> bool {
        matches!(self, SectionKind::Story)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Story => "story",
            SectionKind::Editorial => "editorial",
            SectionKind::Authors => "authors",
            SectionKind::Letters => "letters",
            SectionKind::Reviews => "reviews",
            SectionKind::Feature => "feature",
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One classified section of an issue.
///
/// A section's identity is its index in the owning [`Document`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    kind: SectionKind,
    title: String,
    author: Option<String>,
    blocks: Vec<ContentBlock>,
    drop_cap: bool,
}

impl Section {
    pub(crate) fn new(
        kind: SectionKind,
        title: String,
        author: Option<String>,
        blocks: Vec<ContentBlock>,
        drop_cap: bool,
    ) -> Self {
        Self {
            kind,
            title,
            author,
            blocks,
            drop_cap,
        }
    }

    pub fn kind(&self) -> SectionKind {
        self.kind
    }

    /// Normalized display title, never empty.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    pub fn blocks(&self) -> &[ContentBlock] {
        &self.blocks
    }

    /// Rendering hint: the first paragraph gets a drop cap (story sections only).
    pub fn drop_cap(&self) -> bool {
        self.drop_cap
    }
}

/// Table-of-contents grouping label, attached to the first section of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutlineGroup {
    Stories,
    Features,
}

/// Outline row for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutlineEntry<'a> {
    pub index: usize,
    pub kind: SectionKind,
    pub title: &'a str,
    pub author: Option<&'a str>,
    pub group: Option<OutlineGroup>,
}

/// The ordered sections of one issue. Built once per input, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    pub(crate) fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    /// Caps a requested index at the last section (0 when empty).
    pub fn clamp_index(&self, requested: usize) -> usize {
        requested.min(self.sections.len().saturating_sub(1))
    }

    /// Previous and next sections around `index`.
    pub fn neighbors(&self, index: usize) -> (Option<&Section>, Option<&Section>) {
        let previous = index.checked_sub(1).and_then(|i| self.sections.get(i));
        let next = index.checked_add(1).and_then(|i| self.sections.get(i));
        (previous, next)
    }

    /// One entry per section, with group labels where a story run starts or
    /// a feature run follows a story.
    pub fn outline(&self) -> Vec<OutlineEntry<'_>> {
        let mut last: Option<SectionKind> = None;
        self.sections
            .iter()
            .enumerate()
            .map(|(index, section)| {
                let kind = section.kind();
                let follows_story = last.is_some_and(SectionKind::is_story);
                let group = if kind.is_story() && !follows_story {
                    Some(OutlineGroup::Stories)
                } else if !kind.is_story() && follows_story {
                    Some(OutlineGroup::Features)
                } else {
                    None
                };
                last = Some(kind);
                OutlineEntry {
                    index,
                    kind,
                    title: section.title(),
                    author: section.author(),
                    group,
                }
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
