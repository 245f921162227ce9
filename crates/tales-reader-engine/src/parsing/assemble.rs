use log::{debug, warn};

use crate::models::{Document, Section, SectionKind};

use super::{
    content::{ContentLineClassifier, format_content},
    segment::RawSection,
    title::{TitleBlock, parse_title_block},
};

/// Title used when a section yields no title text at all.
pub const FALLBACK_TITLE: &str = "Section";

/// Kind given to sections that open on a lone divider with no title block.
pub const UNTITLED_SECTION_KIND: SectionKind = SectionKind::Feature;

/// Turns raw spans into sections, one per span, in order.
pub fn assemble(raw: &[RawSection<'_>], classifier: &ContentLineClassifier) -> Document {
    let sections = raw
        .iter()
        .map(|span| {
            let TitleBlock {
                kind,
                title,
                author,
            } = match &span.title_lines {
                Some(lines) => parse_title_block(lines),
                None => TitleBlock {
                    kind: UNTITLED_SECTION_KIND,
                    title: untitled_title(span.content),
                    author: None,
                },
            };

            let title = if title.is_empty() {
                warn!("section has an empty title block, using {FALLBACK_TITLE:?}");
                FALLBACK_TITLE.to_string()
            } else {
                title
            };

            let content = format_content(span.content, kind.is_story(), classifier);
            debug!(
                "section {title:?} ({kind}) with {} blocks",
                content.blocks.len()
            );
            Section::new(kind, title, author, content.blocks, content.drop_cap)
        })
        .collect();

    Document::new(sections)
}

/// First non-blank body line, trimmed.
fn untitled_title(content: &[&str]) -> String {
    content
        .iter()
        .map(|l| l.trim())
        .find(|l| !l.is_empty())
        .unwrap_or(FALLBACK_TITLE)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untitled_span_uses_first_line() {
        let content = ["", "  A Note From The Printer  ", "Text."];
        let raw = [RawSection {
            title_lines: None,
            content: &content,
        }];
        let doc = assemble(&raw, &ContentLineClassifier::default());
        let section = doc.get(0).unwrap();
        assert_eq!(section.title(), "A Note From The Printer");
        assert_eq!(section.kind(), SectionKind::Feature);
        assert_eq!(section.author(), None);
        assert!(!section.drop_cap());
        assert_eq!(section.blocks().len(), 1);
    }

    #[test]
    fn empty_spans_still_produce_titled_sections() {
        let empty: [&str; 0] = [];
        let raw = [
            RawSection {
                title_lines: Some(vec![]),
                content: &empty,
            },
            RawSection {
                title_lines: None,
                content: &empty,
            },
        ];
        let doc = assemble(&raw, &ContentLineClassifier::default());
        assert_eq!(doc.len(), 2);
        for section in &doc {
            assert_eq!(section.title(), FALLBACK_TITLE);
            assert!(section.blocks().is_empty());
        }
        assert_eq!(doc.get(0).map(Section::kind), Some(SectionKind::Story));
        assert_eq!(doc.get(0).map(Section::drop_cap), Some(true));
    }
}
