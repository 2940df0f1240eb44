use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ParseSearchScopeError;
use crate::infra::FsError;

/// Errors returned by [`NoteStore`](super::NoteStore) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("title cannot be empty")]
    EmptyTitle,

    #[error("title cannot contain line breaks")]
    MultilineTitle,

    #[error("content cannot be empty")]
    EmptyContent,

    #[error("a note titled '{title}' already exists")]
    DuplicateTitle { title: String },

    #[error("index {index} is out of range for {len} notes")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("notes file not found: {}", .path.display())]
    StoreNotFound { path: PathBuf },

    #[error("import source not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] FsError),

    #[error("no notes available")]
    EmptyStore,

    #[error(transparent)]
    InvalidSearchScope(#[from] ParseSearchScopeError),

    #[error("search term cannot be empty")]
    EmptySearchTerm,
}

impl StoreError {
    /// Returns true for failures of the file system rather than of the input.
    ///
    /// A missing notes file is not counted: it is the normal first-run state.
    pub fn is_io(&self) -> bool {
        matches!(self, StoreError::Io(_))
    }
}
