use serde::{Deserialize, Serialize};

use crate::error::ParserConfigError;

/// Shortest run of `-`/`*`/space that counts as a typographic divider.
pub const TYPOGRAPHIC_DIVIDER_MIN_RUN: usize = 3;

/// Number of leading dividers bracketing the masthead, cover art and
/// contents. Content sections start at the divider with this index.
pub const PREAMBLE_DIVIDERS: usize = 3;

/// Fixed constants of the authoring convention, exposed as configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Character repeated to form a structural divider line.
    pub divider_char: char,
    /// Minimum repetitions of `divider_char` on a divider line.
    pub min_divider_run: usize,
    /// Two dividers closer than this many lines bracket a title block.
    pub title_pair_max_gap: usize,
    /// Leading whitespace needed before a roman numeral or PART/CHAPTER heading.
    pub sub_heading_min_indent: usize,
    /// Typographic dividers must be strictly shorter than this once trimmed.
    pub typographic_divider_max_len: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            divider_char: '=',
            min_divider_run: 10,
            title_pair_max_gap: 15,
            sub_heading_min_indent: 5,
            typographic_divider_max_len: 20,
        }
    }
}

impl ParserConfig {
    pub fn validate(&self) -> Result<(), ParserConfigError> {
        if self.divider_char.is_whitespace() {
            return Err(ParserConfigError::WhitespaceDivider(self.divider_char));
        }
        if self.min_divider_run < 1 {
            return Err(ParserConfigError::ZeroDividerRun);
        }
        if self.title_pair_max_gap < 1 {
            return Err(ParserConfigError::ZeroTitlePairGap);
        }
        if self.typographic_divider_max_len <= TYPOGRAPHIC_DIVIDER_MIN_RUN {
            return Err(ParserConfigError::TypographicDividerTooShort {
                min: TYPOGRAPHIC_DIVIDER_MIN_RUN,
                got: self.typographic_divider_max_len,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ParserConfig::default();
        assert_eq!(config.divider_char, '=');
        assert_eq!(config.min_divider_run, 10);
        assert_eq!(config.title_pair_max_gap, 15);
        assert_eq!(config.sub_heading_min_indent, 5);
        assert_eq!(config.typographic_divider_max_len, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_divider_run() {
        let config = ParserConfig {
            min_divider_run: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ParserConfigError::ZeroDividerRun));
    }

    #[test]
    fn rejects_whitespace_divider() {
        let config = ParserConfig {
            divider_char: ' ',
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ParserConfigError::WhitespaceDivider(' '))
        );
    }

    #[test]
    fn rejects_short_typographic_limit() {
        let config = ParserConfig {
            typographic_divider_max_len: 3,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ParserConfigError::TypographicDividerTooShort { got: 3, .. })
        ));
    }

    #[test]
    fn partial_table_falls_back_to_defaults() {
        let config: ParserConfig =
            serde_json::from_str(r##"{ "divider_char": "#", "title_pair_max_gap": 8 }"##).unwrap();
        assert_eq!(config.divider_char, '#');
        assert_eq!(config.title_pair_max_gap, 8);
        assert_eq!(config.min_divider_run, 10);
    }
}
