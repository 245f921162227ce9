use log::debug;

use crate::config::PREAMBLE_DIVIDERS;

/// One section's raw lines before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection<'a> {
    /// Trimmed non-blank lines between a close divider pair, if any.
    pub title_lines: Option<Vec<&'a str>>,
    /// Body lines, blank lines included.
    pub content: &'a [&'a str],
}

/// Groups divider positions into section spans.
///
/// The first [`PREAMBLE_DIVIDERS`] dividers close the preamble and are
/// skipped. From there, a divider whose successor is fewer than
/// `max_gap` lines away opens a title block and the body runs to the
/// divider after that; otherwise the body runs straight to the next divider.
pub fn segment<'a>(
    lines: &'a [&'a str],
    dividers: &[usize],
    max_gap: usize,
) -> Vec<RawSection<'a>> {
    let boundary = |i: usize| dividers.get(i).copied().unwrap_or(lines.len());
    let mut out = vec![];
    let mut i = PREAMBLE_DIVIDERS;

    while i < dividers.len() {
        let start = dividers[i];

        match dividers.get(i + 1) {
            Some(&close) if close - start < max_gap => {
                let title_lines = lines[start + 1..close]
                    .iter()
                    .map(|l| l.trim())
                    .filter(|l| !l.is_empty())
                    .collect();
                let end = boundary(i + 2);
                debug!("title block at lines {start}..{close}, body to {end}");
                out.push(RawSection {
                    title_lines: Some(title_lines),
                    content: &lines[close + 1..end],
                });
                i += 2;
            }
            _ => {
                let end = boundary(i + 1);
                debug!("untitled section at line {start}, body to {end}");
                out.push(RawSection {
                    title_lines: None,
                    content: &lines[start + 1..end],
                });
                i += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_with_dividers(dividers: &[usize], len: usize) -> Vec<String> {
        (0..len)
            .map(|i| {
                if dividers.contains(&i) {
                    "==========".to_string()
                } else {
                    format!("line {i}")
                }
            })
            .collect()
    }

    #[test]
    fn fewer_than_four_dividers_yields_nothing() {
        let owned = lines_with_dividers(&[0, 2, 4], 10);
        let lines: Vec<&str> = owned.iter().map(String::as_str).collect();
        assert!(segment(&lines, &[0, 2, 4], 15).is_empty());
        assert!(segment(&lines, &[], 15).is_empty());
    }

    #[test]
    fn close_pair_is_title_block_and_body_runs_to_eof() {
        let dividers = [0, 2, 4, 6, 9];
        let owned = lines_with_dividers(&dividers, 14);
        let lines: Vec<&str> = owned.iter().map(String::as_str).collect();

        let sections = segment(&lines, &dividers, 15);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title_lines, Some(vec!["line 7", "line 8"]));
        assert_eq!(sections[0].content, &["line 10", "line 11", "line 12", "line 13"]);
    }

    #[test]
    fn gap_of_exactly_max_is_not_a_pair() {
        // 6 -> 21 is a gap of 15, which is not strictly less than 15.
        let dividers = [0, 2, 4, 6, 21];
        let owned = lines_with_dividers(&dividers, 25);
        let lines: Vec<&str> = owned.iter().map(String::as_str).collect();

        let sections = segment(&lines, &dividers, 15);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title_lines, None);
        assert_eq!(sections[0].content.len(), 14);
        assert_eq!(sections[1].title_lines, None);
        assert_eq!(sections[1].content, &["line 22", "line 23", "line 24"]);
    }

    #[test]
    fn gap_of_fourteen_is_a_pair() {
        let dividers = [0, 2, 4, 6, 20];
        let owned = lines_with_dividers(&dividers, 22);
        let lines: Vec<&str> = owned.iter().map(String::as_str).collect();

        let sections = segment(&lines, &dividers, 15);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title_lines.as_ref().map(Vec::len), Some(13));
        assert_eq!(sections[0].content, &["line 21"]);
    }

    #[test]
    fn blank_title_lines_are_dropped() {
        let lines = [
            "==========",
            "h",
            "==========",
            "c",
            "==========",
            "t",
            "==========",
            "  TITLE  ",
            "",
            "   ",
            "by Someone",
            "==========",
            "body",
        ];
        let dividers = [0, 2, 4, 6, 11];
        let sections = segment(&lines, &dividers, 15);
        assert_eq!(sections[0].title_lines, Some(vec!["TITLE", "by Someone"]));
        assert_eq!(sections[0].content, &["body"]);
    }

    #[test]
    fn consecutive_titled_sections() {
        let dividers = [0, 2, 4, 6, 8, 11, 13];
        let owned = lines_with_dividers(&dividers, 16);
        let lines: Vec<&str> = owned.iter().map(String::as_str).collect();

        let sections = segment(&lines, &dividers, 15);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].title_lines, Some(vec!["line 7"]));
        assert_eq!(sections[0].content, &["line 9", "line 10"]);
        assert_eq!(sections[1].title_lines, Some(vec!["line 12"]));
        assert_eq!(sections[1].content, &["line 14", "line 15"]);
    }
}
