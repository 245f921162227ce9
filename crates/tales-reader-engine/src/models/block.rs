use serde::Serialize;

use crate::parsing::{
    inline::{InlineNode, parse_inline},
    span::Span,
};

/// One semantic block of a section body, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Reflowed prose with emphasis resolved.
    Paragraph(Paragraph),
    /// An indented roman numeral or PART/CHAPTER line, trimmed.
    SubsectionHeading(String),
    /// The `[THE END]` line.
    EndMarker,
    /// A short line of dashes or asterisks.
    Divider,
}

impl ContentBlock {
    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            ContentBlock::Paragraph(p) => Some(p),
            _ => None,
        }
    }
}

/// A piece of paragraph text with its emphasis state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Emphasis(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Segment::Plain(s) | Segment::Emphasis(s) => s,
        }
    }
}

/// A reflowed paragraph.
///
/// `text` is the space-joined source lines, underscores included; `inlines`
/// partition it into literal and emphasised runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    text: String,
    inlines: Vec<InlineNode>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let inlines = parse_inline(&text);
        Self { text, inlines }
    }

    /// The reflowed source text, emphasis delimiters included.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn inlines(&self) -> &[InlineNode] {
        &self.inlines
    }

    pub fn slice(&self, span: Span) -> &str {
        &self.text[span.start..span.end]
    }

    /// Visible runs in order, delimiters stripped.
    pub fn segments(&self) -> impl Iterator<Item = Segment<'_>> + '_ {
        self.inlines.iter().map(|node| {
            let content = self.slice(node.content_span());
            if node.is_emphasis() {
                Segment::Emphasis(content)
            } else {
                Segment::Plain(content)
            }
        })
    }

    /// Text with emphasis delimiters removed.
    pub fn plain_text(&self) -> String {
        self.segments().map(|s| s.text()).collect()
    }

    pub fn emphasized(&self) -> Vec<&str> {
        self.segments()
            .filter_map(|s| match s {
                Segment::Emphasis(text) => Some(text),
                Segment::Plain(_) => None,
            })
            .collect()
    }
}
