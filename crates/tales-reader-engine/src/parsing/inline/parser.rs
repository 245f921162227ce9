use crate::parsing::span::Span;

use super::{cursor::Cursor, types::InlineNode};

/// Emphasis delimiter.
pub const UNDERSCORE: u8 = b'_';

/// Parses reflowed paragraph text into a sequence of [`InlineNode`]s.
///
/// Emphasis pairs are matched left to right, each one consuming the
/// shortest run between two underscores. An underscore with no closing
/// partner stays in the surrounding text.
///
/// # Returns
/// Nodes covering the entire input without gaps or overlaps.
pub fn parse_inline(s: &str) -> Vec<InlineNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<InlineNode>, start: usize, end: usize) {
        if end > start {
            out.push(InlineNode::Text {
                span: Span { start, end },
            });
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_emphasis(&mut cur) {
            flush_text(&mut out, text_start, node.span().start);
            text_start = node.span().end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Attempts to parse an emphasis run starting at the current position.
///
/// Returns `None` if not at an underscore or if no closing underscore
/// follows. On failure, cursor position is restored.
fn try_parse_emphasis(cur: &mut Cursor<'_>) -> Option<InlineNode> {
    if cur.peek() != Some(UNDERSCORE) {
        return None;
    }

    let saved = cur.clone();
    let start = cur.pos();
    cur.bump(); // _
    let inner_start = cur.pos();

    if !cur.seek(UNDERSCORE) {
        *cur = saved;
        return None;
    }
    let inner_end = cur.pos();
    cur.bump(); // closing _

    Some(InlineNode::Emphasis {
        full: Span {
            start,
            end: cur.pos(),
        },
        inner: Span {
            start: inner_start,
            end: inner_end,
        },
    })
}
