// Whitespace-normalized splitting of container text into displaceable
// units. Pure string logic; the DOM wrapping lives in `decompose`.

use std::fmt;
use std::str::FromStr;

/// Split granularity: one unit per word, or one per character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Granularity {
    Words,
    Letters,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseGranularityError(String);

impl fmt::Display for ParseGranularityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown granularity {:?} (expected \"words\" or \"letters\")",
            self.0
        )
    }
}

impl std::error::Error for ParseGranularityError {}

impl FromStr for Granularity {
    type Err = ParseGranularityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "words" => Ok(Self::Words),
            "letters" => Ok(Self::Letters),
            other => Err(ParseGranularityError(other.to_owned())),
        }
    }
}

/// Trim and collapse internal whitespace runs to single spaces.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Split `text` into display units. Word mode drops the separators (the
/// DOM layer re-inserts single spaces between spans); letter mode keeps
/// the single spaces of the normalized text as units of their own, so
/// concatenating all units reproduces the normalized text exactly.
pub fn split_units(text: &str, granularity: Granularity) -> Vec<String> {
    match granularity {
        Granularity::Words => text.split_whitespace().map(str::to_owned).collect(),
        Granularity::Letters => normalize_whitespace(text)
            .chars()
            .map(String::from)
            .collect(),
    }
}
