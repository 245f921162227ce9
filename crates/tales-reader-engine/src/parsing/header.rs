//! Preamble metadata: masthead, cover art and table of contents.
//!
//! The preamble is the text bracketed by the first three dividers, plus the
//! contents block that runs to the fourth divider (or the end of the text).

use std::sync::OnceLock;

use log::{debug, warn};
use regex::Regex;

use crate::config::PREAMBLE_DIVIDERS;
use crate::models::{CoverArt, IssueHeader, TocFeature, TocStory};

macro_rules! regex {
    ($name:ident, $pattern:literal) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($pattern).expect(concat!("Invalid regex: ", $pattern)))
        }
    };
}

regex!(issue_line, r"^Issue\s+#(\d+)\s*[—–-]\s*(.+)");
regex!(publisher_line, r"^Published by\s+(.+)");
regex!(editors_line, r"^Editors?:\s*(.+)");
regex!(price_line, r"^Cover Price:\s*(.+)");
regex!(cover_art_line, r#"^Cover Art:\s*"(.+?)"\s*by\s+(.+)"#);
regex!(first_entry, r"^\s*1\.");
regex!(entry_start, r"^\d+\.");
regex!(numbered_entry, r"^\s*(\d+)\.\s+(.+)");
regex!(story_with_page, r#"^"(.+?)"\s*by\s+(.+?)\s*\.{2,}\s*p\.\s*(\d+)"#);
regex!(story_without_page, r#"^"(.+?)"\s*by\s+(.+)"#);
regex!(page_suffix, r"\s*\.{2,}\s*p\.\s*\d+");
regex!(feature_entry, r"^\s+(.+?)\s*\.{2,}\s*p\.\s*(\d+)");

const FEATURES_LABEL: &str = "Features:";

/// Parses the preamble. Returns `None` when fewer than three dividers exist.
pub fn parse_header(lines: &[&str], dividers: &[usize]) -> Option<IssueHeader> {
    if dividers.len() < PREAMBLE_DIVIDERS {
        warn!(
            "only {} dividers found, no issue header to read",
            dividers.len()
        );
        return None;
    }

    let (masthead_end, art_end, toc_start) = (dividers[1], dividers[2], dividers[2] + 1);
    let toc_end = dividers
        .get(PREAMBLE_DIVIDERS)
        .copied()
        .unwrap_or(lines.len());

    let mut header = IssueHeader::default();
    parse_masthead(&lines[dividers[0] + 1..masthead_end], &mut header);
    header.cover_art = parse_cover_art(&lines[masthead_end + 1..art_end]);

    let toc = &lines[toc_start..toc_end];
    let first = toc.iter().position(|l| first_entry().is_match(l)).unwrap_or(0);
    let (stories, features) = parse_toc(&toc[first..]);
    debug!(
        "contents list {} stories and {} features",
        stories.len(),
        features.len()
    );
    header.stories = stories;
    header.features = features;

    Some(header)
}

fn parse_masthead(lines: &[&str], header: &mut IssueHeader) {
    for line in lines.iter().map(|l| l.trim()) {
        if let Some(caps) = issue_line().captures(line) {
            header.issue_number = caps[1].parse().ok();
            header.date_line = caps[2].trim().to_string();
        } else if let Some(caps) = publisher_line().captures(line) {
            header.publisher = caps[1].trim().to_string();
        } else if let Some(caps) = editors_line().captures(line) {
            header.editors = caps[1].trim().to_string();
        } else if let Some(caps) = price_line().captures(line) {
            header.cover_price = caps[1].trim().to_string();
        }
    }
}

fn parse_cover_art(lines: &[&str]) -> Option<CoverArt> {
    lines.iter().find_map(|line| {
        let caps = cover_art_line().captures(line.trim())?;
        Some(CoverArt {
            title: caps[1].to_string(),
            artist: caps[2].trim().to_string(),
        })
    })
}

fn parse_toc(lines: &[&str]) -> (Vec<TocStory>, Vec<TocFeature>) {
    let mut stories = vec![];
    let mut features = vec![];
    let mut in_features = false;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let stripped = line.trim();

        if stripped.starts_with(FEATURES_LABEL) {
            in_features = true;
        } else if in_features {
            if let Some(caps) = feature_entry().captures(line) {
                features.push(TocFeature {
                    title: caps[1].trim().to_string(),
                    page: caps[2].parse().unwrap_or(0),
                });
            }
        } else if let Some(caps) = numbered_entry().captures(stripped) {
            let mut full_text = caps[2].to_string();

            // Continuation lines run until a blank, the next entry, or the features list.
            while let Some(next) = lines.get(i + 1).map(|l| l.trim()) {
                if next.is_empty()
                    || entry_start().is_match(next)
                    || next.starts_with(FEATURES_LABEL)
                {
                    break;
                }
                full_text.push(' ');
                full_text.push_str(next);
                i += 1;
            }

            if let Ok(number) = caps[1].parse()
                && let Some(story) = parse_story_entry(number, &full_text)
            {
                stories.push(story);
            }
        }
        i += 1;
    }

    (stories, features)
}

fn parse_story_entry(number: u32, text: &str) -> Option<TocStory> {
    if let Some(caps) = story_with_page().captures(text) {
        return Some(TocStory {
            number,
            title: caps[1].trim().to_string(),
            author: caps[2].trim().to_string(),
            page: caps[3].parse().unwrap_or(0),
        });
    }

    let caps = story_without_page().captures(text)?;
    let author = page_suffix().replace_all(caps[2].trim(), "");
    Some(TocStory {
        number,
        title: caps[1].trim().to_string(),
        author: author.trim().to_string(),
        page: 0,
    })
}
