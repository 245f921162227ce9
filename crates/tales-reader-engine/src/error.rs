use thiserror::Error;

/// Rejected parser configuration. Raised at construction, never while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserConfigError {
    #[error("divider character must not be whitespace, got {0:?}")]
    WhitespaceDivider(char),

    #[error("min_divider_run must be at least 1")]
    ZeroDividerRun,

    #[error("title_pair_max_gap must be at least 1")]
    ZeroTitlePairGap,

    #[error("typographic_divider_max_len must be greater than {min}, got {got}")]
    TypographicDividerTooShort { min: usize, got: usize },
}
