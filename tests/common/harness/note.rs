//! Builder for test notes with sensible defaults.

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use flatnotes::domain::Note;

/// Builder for creating test notes with fixed, readable timestamps.
///
/// Defaults to 2024-01-15 10:30:00 for both timestamps so listings are
/// stable across runs.
#[derive(Debug, Clone)]
pub struct TestNote {
    title: String,
    content: String,
    created: NaiveDateTime,
    modified: NaiveDateTime,
}

/// Builds a timestamp from `YYYY-MM-DD HH:MM:SS` parts.
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, s))
        .expect("Invalid test timestamp")
}

impl TestNote {
    /// Creates a new test note with the given title and placeholder content.
    pub fn new(title: impl Into<String>) -> Self {
        let default = at(2024, 1, 15, 10, 30, 0);
        let title = title.into();
        Self {
            content: format!("Content of {title}"),
            title,
            created: default,
            modified: default,
        }
    }

    /// Sets the content (builder method).
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Sets the creation time; modified follows unless set afterwards.
    pub fn created(mut self, created: NaiveDateTime) -> Self {
        self.created = created;
        self.modified = self.modified.max(created);
        self
    }

    /// Sets the last-modified time.
    pub fn modified(mut self, modified: NaiveDateTime) -> Self {
        self.modified = modified;
        self
    }

    /// Returns the title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the content.
    pub fn get_content(&self) -> &str {
        &self.content
    }

    /// Converts to a domain `Note`.
    pub fn to_note(&self) -> Note {
        Note::with_timestamps(
            self.title.clone(),
            self.content.clone(),
            self.created,
            self.modified,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_defaults() {
        let note = TestNote::new("Sample").to_note();
        assert_eq!(note.title(), "Sample");
        assert_eq!(note.content(), "Content of Sample");
        assert_eq!(note.created(), note.modified());
    }

    #[test]
    fn test_note_created_pushes_modified_forward() {
        let note = TestNote::new("Later")
            .created(at(2025, 3, 1, 8, 0, 0))
            .to_note();
        assert_eq!(note.modified(), at(2025, 3, 1, 8, 0, 0));
    }
}
