use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use crate::models::SectionKind;

/// Result of interpreting a title block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBlock {
    pub kind: SectionKind,
    pub title: String,
    pub author: Option<String>,
}

/// Keyword table, checked in order against the upper-cased raw title.
const KIND_KEYWORDS: &[(SectionKind, &[&str])] = &[
    (SectionKind::Editorial, &["EDITOR", "TRANSMISSION"]),
    (SectionKind::Authors, &["ABOUT THE AUTHORS"]),
    (SectionKind::Letters, &["SIGNALS RECEIVED", "LETTERS"]),
    (SectionKind::Reviews, &["BOOKSHELF", "BOOK REVIEW"]),
    (SectionKind::Feature, &["COMING ATTRACTION", "COLOPHON", "FAREWELL"]),
];

fn author_prefix() -> &'static Regex {
    static BY: OnceLock<Regex> = OnceLock::new();
    BY.get_or_init(|| Regex::new(r"(?i)^by\s+").expect("Invalid author regex"))
}

/// Interprets the trimmed, non-blank lines of a title block.
///
/// A `by NAME` line gives the author; a later one replaces an earlier one.
/// Lines before the first author line form the title. With no such lines the
/// whole block is used as the title. Never fails.
pub fn parse_title_block(lines: &[&str]) -> TitleBlock {
    let mut title_parts: Vec<&str> = vec![];
    let mut author: Option<String> = None;

    for line in lines {
        if let Some(m) = author_prefix().find(line) {
            author = Some(line[m.end()..].trim().to_string());
        } else if author.is_none() {
            title_parts.push(line);
        }
    }

    let raw_title = if title_parts.is_empty() {
        lines.join(" ")
    } else {
        title_parts.join(" ")
    };

    let kind = classify_title(&raw_title);
    debug!("title {raw_title:?} classified as {kind}");

    TitleBlock {
        kind,
        title: title_case(&raw_title),
        author,
    }
}

/// Keyword classification, first match wins; defaults to [`SectionKind::Story`].
pub fn classify_title(raw_title: &str) -> SectionKind {
    let upper = raw_title.to_uppercase();
    KIND_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| upper.contains(k)))
        .map(|(kind, _)| *kind)
        .unwrap_or_default()
}

/// Converts an all-caps title longer than three characters to title case.
///
/// Every ASCII word character at the start or after whitespace, `-`, `"`
/// or `(` is capitalised; everything else is lower-cased. Titles that are
/// not entirely upper case are returned unchanged.
pub fn title_case(s: &str) -> String {
    if s != s.to_uppercase() || s.chars().count() <= 3 {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    for c in s.to_lowercase().chars() {
        let at_boundary = match prev {
            None => true,
            Some(p) => p.is_whitespace() || matches!(p, '-' | '"' | '('),
        };
        if at_boundary && (c.is_ascii_alphanumeric() || c == '_') {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
        prev = Some(c);
    }
    out
}
