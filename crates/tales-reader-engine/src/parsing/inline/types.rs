use serde::Serialize;

use crate::parsing::span::Span;

/// A parsed inline node with byte spans into the paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InlineNode {
    /// Literal text outside any emphasis.
    Text { span: Span },
    /// An `_underscore_` delimited run.
    Emphasis {
        /// Full span including both underscores.
        full: Span,
        /// Inner span (content between the underscores).
        inner: Span,
    },
}

impl InlineNode {
    /// The full span covered by this node, delimiters included.
    pub fn span(&self) -> Span {
        match self {
            InlineNode::Text { span } => *span,
            InlineNode::Emphasis { full, .. } => *full,
        }
    }

    /// The span of the visible content, delimiters excluded.
    pub fn content_span(&self) -> Span {
        match self {
            InlineNode::Text { span } => *span,
            InlineNode::Emphasis { inner, .. } => *inner,
        }
    }

    pub fn is_emphasis(&self) -> bool {
        matches!(self, InlineNode::Emphasis { .. })
    }
}
