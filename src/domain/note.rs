//! Note struct: a titled body of text with creation and modification times.

use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::Serialize;
use std::fmt;

/// Marker appended to previews that were cut short.
const TRUNCATION_MARKER: &str = "...";

/// Returns the current local time at whole-second precision.
///
/// The store format carries no sub-second component, so every timestamp the
/// application produces is truncated up front.
pub fn now() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}

/// A single note.
///
/// The title and content are stored as given; trimming and uniqueness checks
/// belong to the store. Every mutation through [`Note::set_title`],
/// [`Note::set_content`] or [`Note::update`] moves `modified` to now.
///
/// # Examples
///
/// ```
/// use flatnotes::domain::Note;
///
/// let note = Note::new("Groceries", "buy milk");
/// assert_eq!(note.title(), "Groceries");
/// assert_eq!(note.created(), note.modified());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Note {
    title: String,
    content: String,
    created: NaiveDateTime,
    modified: NaiveDateTime,
}

impl Note {
    /// Creates a note stamped with the current time.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = now();
        Self::with_timestamps(title, content, now, now)
    }

    /// Rebuilds a note with explicit timestamps, as read back from storage.
    pub fn with_timestamps(
        title: impl Into<String>,
        content: impl Into<String>,
        created: NaiveDateTime,
        modified: NaiveDateTime,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            created,
            modified,
        }
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns when the note was created.
    pub fn created(&self) -> NaiveDateTime {
        self.created
    }

    /// Returns when the note was last modified.
    pub fn modified(&self) -> NaiveDateTime {
        self.modified
    }

    /// Replaces the title and touches the modification time.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.update(Some(title.into()), None);
    }

    /// Replaces the content and touches the modification time.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.update(None, Some(content.into()));
    }

    /// Applies a title and/or content change, touching `modified` once.
    ///
    /// Does nothing when both are `None`.
    pub fn update(&mut self, title: Option<String>, content: Option<String>) {
        if title.is_none() && content.is_none() {
            return;
        }
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(content) = content {
            self.content = content;
        }
        self.modified = now().max(self.created);
    }

    /// Number of characters in the content.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Number of whitespace-separated words in the content.
    pub fn word_count(&self) -> usize {
        self.content.split_whitespace().count()
    }

    /// Single-line preview of the content.
    ///
    /// Takes the first `max_chars` characters, flattens line breaks to spaces
    /// and appends `...` if anything was cut.
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.content.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        let mut preview = head.replace("\r\n", " ").replace('\n', " ");
        if chars.next().is_some() {
            preview.push_str(TRUNCATION_MARKER);
        }
        preview
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} chars)", self.title, self.char_count())
    }
}
