use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Last issue number of the first publication run.
pub const ERA_I_LAST_ISSUE: u32 = 48;

/// Publication era, split at issue 48.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Era {
    I,
    II,
}

impl Era {
    pub fn for_issue(number: u32) -> Self {
        if number <= ERA_I_LAST_ISSUE {
            Era::I
        } else {
            Era::II
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Era::I => f.write_str("I"),
            Era::II => f.write_str("II"),
        }
    }
}

/// Fields encoded in an issue file name like `issue_001_jan_1953.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueFileName {
    pub number: u32,
    pub number_padded: String,
    pub month_abbr: String,
    pub month: String,
    pub year: u32,
    pub era: Era,
}

impl IssueFileName {
    /// Parses a bare file name. Returns `None` for anything else.
    pub fn parse(file_name: &str) -> Option<Self> {
        static FILE_NAME: OnceLock<Regex> = OnceLock::new();
        let re = FILE_NAME.get_or_init(|| {
            Regex::new(r"^issue_(\d{3})_([a-z]{3})_(\d{4})\.txt$").expect("Invalid file name regex")
        });

        let caps = re.captures(file_name)?;
        let number: u32 = caps[1].parse().ok()?;
        let month_abbr = caps[2].to_string();
        let month = month_name(&month_abbr)?.to_string();
        let year: u32 = caps[3].parse().ok()?;

        Some(Self {
            number,
            number_padded: format!("{number:03}"),
            month_abbr,
            month,
            year,
            era: Era::for_issue(number),
        })
    }

    /// Display date, e.g. `January 1953`.
    pub fn date(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}

fn month_name(abbr: &str) -> Option<&'static str> {
    Some(match abbr {
        "jan" => "January",
        "feb" => "February",
        "mar" => "March",
        "apr" => "April",
        "may" => "May",
        "jun" => "June",
        "jul" => "July",
        "aug" => "August",
        "sep" => "September",
        "oct" => "October",
        "nov" => "November",
        "dec" => "December",
        _ => return None,
    })
}
