use std::sync::OnceLock;

use regex::Regex;

use crate::config::TYPOGRAPHIC_DIVIDER_MIN_RUN;

/// What a single body line means, decided without looking at its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only; ends the current paragraph.
    Blank,
    /// Indented roman numeral or PART/CHAPTER line (trimmed).
    SubsectionHeading(&'a str),
    /// `[THE END]`, any case.
    EndMarker,
    /// Short run of `-`, `*` and spaces.
    Divider,
    /// Prose (trimmed), to be reflowed into the current paragraph.
    Text(&'a str),
}

pub const END_MARKER: &str = "[THE END]";

fn roman_numeral() -> &'static Regex {
    static ROMAN: OnceLock<Regex> = OnceLock::new();
    ROMAN.get_or_init(|| Regex::new(r"^[IVXLC]+\.?\s*$").expect("Invalid roman numeral regex"))
}

fn part_or_chapter() -> &'static Regex {
    static PART: OnceLock<Regex> = OnceLock::new();
    PART.get_or_init(|| Regex::new(r"(?i)^(PART|CHAPTER)\s").expect("Invalid heading regex"))
}

/// Classifies body lines for the content formatter.
///
/// Checks run in a fixed order: blank, indented sub-heading, end marker,
/// typographic divider, prose. The sub-heading and divider patterns cannot
/// both match one line since the former needs a letter and the latter
/// forbids one.
#[derive(Debug, Clone, Copy)]
pub struct ContentLineClassifier {
    sub_heading_min_indent: usize,
    typographic_divider_max_len: usize,
}

impl ContentLineClassifier {
    pub fn new(sub_heading_min_indent: usize, typographic_divider_max_len: usize) -> Self {
        Self {
            sub_heading_min_indent,
            typographic_divider_max_len,
        }
    }

    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return LineClass::Blank;
        }
        if self.is_sub_heading(line) {
            return LineClass::SubsectionHeading(trimmed);
        }
        if trimmed.eq_ignore_ascii_case(END_MARKER) {
            return LineClass::EndMarker;
        }
        if self.is_typographic_divider(trimmed) {
            return LineClass::Divider;
        }
        LineClass::Text(trimmed)
    }

    /// Works on the untrimmed line: indentation is part of the signal.
    fn is_sub_heading(&self, line: &str) -> bool {
        let rest = line.trim_start();
        let indent = line[..line.len() - rest.len()].chars().count();
        indent >= self.sub_heading_min_indent
            && (roman_numeral().is_match(rest) || part_or_chapter().is_match(rest))
    }

    fn is_typographic_divider(&self, trimmed: &str) -> bool {
        let len = trimmed.chars().count();
        len >= TYPOGRAPHIC_DIVIDER_MIN_RUN
            && len < self.typographic_divider_max_len
            && trimmed
                .chars()
                .all(|c| c == '-' || c == '*' || c.is_whitespace())
    }
}

impl Default for ContentLineClassifier {
    fn default() -> Self {
        Self::new(5, 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", LineClass::Blank)]
    #[case("   \t", LineClass::Blank)]
    #[case("     IV.", LineClass::SubsectionHeading("IV."))]
    #[case("          XII   ", LineClass::SubsectionHeading("XII"))]
    #[case("     PART TWO", LineClass::SubsectionHeading("PART TWO"))]
    #[case("        Chapter 3", LineClass::SubsectionHeading("Chapter 3"))]
    #[case("    IV.", LineClass::Text("IV."))]
    #[case("     iv.", LineClass::Text("iv."))]
    #[case("     IV. The Return", LineClass::Text("IV. The Return"))]
    #[case("     PARTING WORDS", LineClass::Text("PARTING WORDS"))]
    #[case("[THE END]", LineClass::EndMarker)]
    #[case("   [the end]  ", LineClass::EndMarker)]
    #[case("[THE END] indeed", LineClass::Text("[THE END] indeed"))]
    #[case("---", LineClass::Divider)]
    #[case("* * *", LineClass::Divider)]
    #[case("        -  -  -", LineClass::Divider)]
    #[case("--", LineClass::Text("--"))]
    #[case("--------------------", LineClass::Text("--------------------"))]
    #[case("-------------------", LineClass::Divider)]
    #[case("- not a divider", LineClass::Text("- not a divider"))]
    #[case("  It was a dark night.  ", LineClass::Text("It was a dark night."))]
    fn classifies_lines(#[case] line: &str, #[case] expected: LineClass<'_>) {
        assert_eq!(ContentLineClassifier::default().classify(line), expected);
    }

    #[test]
    fn indent_threshold_is_configurable() {
        let classifier = ContentLineClassifier::new(2, 20);
        assert_eq!(classifier.classify("  II"), LineClass::SubsectionHeading("II"));
    }
}
