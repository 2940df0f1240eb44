//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::Note;
use crate::infra::format_timestamp;

use super::render::LIST_PREVIEW;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    /// 1-based position in the store, usable with `show` and `export`
    pub number: usize,
    pub title: String,
    pub created: String,
    pub modified: String,
    pub preview: String,
}

impl NoteListing {
    /// Builds one listing row under the given 1-based number.
    pub fn at(number: usize, note: &Note) -> Self {
        Self {
            number,
            title: note.title().to_string(),
            created: format_timestamp(note.created()),
            modified: format_timestamp(note.modified()),
            preview: note.preview(LIST_PREVIEW),
        }
    }

    /// Builds listings numbered from 1 in iteration order.
    pub fn numbered<'a>(notes: impl IntoIterator<Item = &'a Note>) -> Vec<Self> {
        notes
            .into_iter()
            .enumerate()
            .map(|(i, note)| Self::at(i + 1, note))
            .collect()
    }
}
