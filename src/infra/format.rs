//! Block format for the notes file.
//!
//! # Format
//! ```text
//! TITLE:Groceries
//! CREATED:2024-01-15 10:30:00
//! MODIFIED:2024-01-16 14:00:00
//! CONTENT:
//! buy milk
//! buy eggs
//! ---END-NOTE---
//! ```
//!
//! Once `CONTENT:` has been seen, every line up to the end marker belongs to
//! the content, even lines that look like keywords.
//!
//! Parsing never fails. Bad timestamps fall back to the current time, blocks
//! without a title are skipped, and a trailing block with no end marker is
//! dropped. A modified time earlier than the created time is raised to it.

use chrono::NaiveDateTime;
use tracing::warn;

use crate::domain::{Note, now};

const TITLE_PREFIX: &str = "TITLE:";
const CREATED_PREFIX: &str = "CREATED:";
const MODIFIED_PREFIX: &str = "MODIFIED:";
const CONTENT_MARKER: &str = "CONTENT:";
const END_MARKER: &str = "---END-NOTE---";

/// Timestamp format used in the notes file.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Timestamp format for detail views and exports.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
/// Timestamp format for listings.
pub const SHORT_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Formats a timestamp for the notes file.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format(STORAGE_FORMAT).to_string()
}

/// Parses a timestamp written by [`format_timestamp`].
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, STORAGE_FORMAT).ok()
}

/// Formats a timestamp as `dd/MM/yyyy HH:mm:ss`.
pub fn format_display(ts: NaiveDateTime) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}

/// Formats a timestamp as `dd/MM/yyyy HH:mm`.
pub fn format_short(ts: NaiveDateTime) -> String {
    ts.format(SHORT_FORMAT).to_string()
}

/// Serializes one note as a block, including the trailing newline.
pub fn serialize(note: &Note) -> String {
    format!(
        "{TITLE_PREFIX}{}\n{CREATED_PREFIX}{}\n{MODIFIED_PREFIX}{}\n{CONTENT_MARKER}\n{}\n{END_MARKER}\n",
        note.title(),
        format_timestamp(note.created()),
        format_timestamp(note.modified()),
        note.content(),
    )
}

/// Serializes notes in order, one block each.
pub fn serialize_all<'a>(notes: impl IntoIterator<Item = &'a Note>) -> String {
    notes.into_iter().map(serialize).collect()
}

/// Fields collected for the block currently being read.
#[derive(Default)]
struct PendingNote {
    title: String,
    created: Option<NaiveDateTime>,
    modified: Option<NaiveDateTime>,
    content: Vec<String>,
    reading_content: bool,
}

impl PendingNote {
    fn finish(self) -> Option<Note> {
        if self.title.is_empty() {
            return None;
        }
        let content = self.content.join("\n");
        let created = self.created.unwrap_or_else(now);
        let modified = self.modified.unwrap_or(created).max(created);
        Some(Note::with_timestamps(
            self.title,
            content.trim(),
            created,
            modified,
        ))
    }
}

/// Parses the notes file into notes, in file order.
pub fn parse(contents: &str) -> Vec<Note> {
    let mut notes = Vec::new();
    let mut pending = PendingNote::default();

    for line in contents.lines() {
        if line == END_MARKER {
            if let Some(note) = std::mem::take(&mut pending).finish() {
                notes.push(note);
            }
        } else if pending.reading_content {
            pending.content.push(line.to_string());
        } else if let Some(title) = line.strip_prefix(TITLE_PREFIX) {
            pending.title = title.to_string();
            pending.content.clear();
            pending.reading_content = false;
        } else if let Some(raw) = line.strip_prefix(CREATED_PREFIX) {
            pending.created = Some(timestamp_or_now(raw, "CREATED"));
        } else if let Some(raw) = line.strip_prefix(MODIFIED_PREFIX) {
            pending.modified = Some(timestamp_or_now(raw, "MODIFIED"));
        } else if line == CONTENT_MARKER {
            pending.reading_content = true;
        }
    }

    if !pending.title.is_empty() {
        warn!(title = %pending.title, "dropping unterminated note block");
    }

    notes
}

fn timestamp_or_now(raw: &str, field: &str) -> NaiveDateTime {
    parse_timestamp(raw).unwrap_or_else(|| {
        warn!(field, value = raw, "unparseable timestamp, using current time");
        now()
    })
}
