//! Which fields a search looks at.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::domain::Note;

/// Fields a search term is matched against.
///
/// Parses from the field names (`title`, `content`, `both`) or from the
/// shell's menu numbers (`1`, `2`, `3`).
///
/// # Examples
///
/// ```
/// use flatnotes::domain::SearchScope;
///
/// let scope: SearchScope = "Content".parse().unwrap();
/// assert_eq!(scope, SearchScope::Content);
/// assert_eq!("3".parse::<SearchScope>().unwrap(), SearchScope::Both);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchScope {
    Title,
    Content,
    #[default]
    Both,
}

/// Error returned when parsing an unknown search scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSearchScopeError(String);

impl fmt::Display for ParseSearchScopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid search scope '{}': expected title, content or both",
            self.0
        )
    }
}

impl std::error::Error for ParseSearchScopeError {}

impl SearchScope {
    /// Returns true if `needle` (already lowercased) occurs in the scoped fields.
    pub(crate) fn matches(self, note: &Note, needle: &str) -> bool {
        let in_title = || note.title().to_lowercase().contains(needle);
        let in_content = || note.content().to_lowercase().contains(needle);
        match self {
            SearchScope::Title => in_title(),
            SearchScope::Content => in_content(),
            SearchScope::Both => in_title() || in_content(),
        }
    }
}

impl FromStr for SearchScope {
    type Err = ParseSearchScopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "title" => Ok(SearchScope::Title),
            "2" | "content" => Ok(SearchScope::Content),
            "3" | "both" => Ok(SearchScope::Both),
            _ => Err(ParseSearchScopeError(s.trim().to_string())),
        }
    }
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchScope::Title => "title",
            SearchScope::Content => "content",
            SearchScope::Both => "both",
        };
        f.write_str(name)
    }
}
