use crate::models::{ContentBlock, Paragraph};

use super::classify::LineClass;

/// Turns classified lines into content blocks, reflowing prose lines into
/// paragraphs.
pub struct ContentBuilder<'a> {
    paragraph: Vec<&'a str>,
    out: Vec<ContentBlock>,
}

impl<'a> ContentBuilder<'a> {
    pub fn new() -> Self {
        Self {
            paragraph: vec![],
            out: vec![],
        }
    }

    pub fn push(&mut self, class: LineClass<'a>) {
        match class {
            LineClass::Blank => self.flush_paragraph(),
            LineClass::SubsectionHeading(label) => {
                self.flush_paragraph();
                self.out.push(ContentBlock::SubsectionHeading(label.to_string()));
            }
            LineClass::EndMarker => {
                self.flush_paragraph();
                self.out.push(ContentBlock::EndMarker);
            }
            LineClass::Divider => {
                self.flush_paragraph();
                self.out.push(ContentBlock::Divider);
            }
            LineClass::Text(text) => self.paragraph.push(text),
        }
    }

    pub fn finish(mut self) -> Vec<ContentBlock> {
        // EOF flush
        self.flush_paragraph();
        self.out
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        self.paragraph.clear();
        self.out.push(ContentBlock::Paragraph(Paragraph::new(text)));
    }
}

impl Default for ContentBuilder<'_> {
    fn default() -> Self {
        Self::new()
    }
}
