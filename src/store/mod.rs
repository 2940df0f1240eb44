//! In-memory note collection backed by a single notes file.
//!
//! The store owns the ordered list of notes. Positions are 0-based and follow
//! insertion order; removing a note shifts every later note down by one.
//! Each mutating operation validates fully before touching the list, then
//! writes the whole file. A failed write is reported but the in-memory change
//! stays, so memory and disk can differ until the next successful save.

mod error;


pub use error::StoreError;

use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::{Note, SearchScope, Statistics};
use crate::infra::{
    FsError, export_filename, file_size, parse, read_text, render_export, serialize_all,
    write_atomic,
};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Ordered collection of notes persisted to one file.
#[derive(Debug)]
pub struct NoteStore {
    path: PathBuf,
    notes: Vec<Note>,
}

impl NoteStore {
    /// Creates an empty store bound to `path`. Does no I/O.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            notes: Vec::new(),
        }
    }

    /// Path of the backing notes file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All notes in order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The note at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Replaces the in-memory notes with the contents of the backing file.
    ///
    /// Returns the number of notes loaded.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StoreNotFound` if the file doesn't exist, and
    /// `StoreError::Io` if it can't be read. In both cases the store is left
    /// empty and usable.
    pub fn load(&mut self) -> Result<usize> {
        self.notes.clear();

        let text = match read_text(&self.path) {
            Ok(text) => text,
            Err(e) if e.is_not_found() => {
                info!(path = %self.path.display(), "notes file not found, starting empty");
                return Err(StoreError::StoreNotFound {
                    path: self.path.clone(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        self.notes = parse(&text);
        info!(count = self.notes.len(), path = %self.path.display(), "loaded notes");
        Ok(self.notes.len())
    }

    /// Writes every note to the backing file, replacing it atomically.
    pub fn save(&self) -> Result<()> {
        write_atomic(&self.path, &serialize_all(&self.notes))?;
        info!(count = self.notes.len(), path = %self.path.display(), "saved notes");
        Ok(())
    }

    /// Appends a new note and saves.
    ///
    /// Title and content are trimmed before validation and storage.
    ///
    /// # Errors
    ///
    /// `EmptyTitle`, `MultilineTitle`, `DuplicateTitle` (case-insensitive) or
    /// `EmptyContent`, checked in that order; `Io` if the save fails.
    pub fn add(&mut self, title: &str, content: &str) -> Result<&Note> {
        let title = self.check_title(title, None)?;
        let content = validate_content(content)?;

        debug!(%title, "adding note");
        self.notes.push(Note::new(title, content));
        self.save()?;
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Changes the title and/or content of the note at `index` and saves.
    ///
    /// `modified` is touched once however many fields change. Passing neither
    /// field returns the note untouched without saving.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange`; for a new title `EmptyTitle`, `MultilineTitle` or
    /// `DuplicateTitle` (ignoring the note itself); for new content
    /// `EmptyContent`; `Io` if the save fails. Nothing changes unless every
    /// check passes.
    pub fn update(
        &mut self,
        index: usize,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<&Note> {
        self.check_index(index)?;

        let title = title
            .map(|t| self.check_title(t, Some(index)))
            .transpose()?;
        let content = content.map(validate_content).transpose()?;

        if title.is_none() && content.is_none() {
            return Ok(&self.notes[index]);
        }

        debug!(index, ?title, content_changed = content.is_some(), "updating note");
        self.notes[index].update(title, content);
        self.save()?;
        Ok(&self.notes[index])
    }

    /// Removes and returns the note at `index`, then saves.
    ///
    /// Later notes move down one position.
    pub fn remove(&mut self, index: usize) -> Result<Note> {
        self.check_index(index)?;

        let removed = self.notes.remove(index);
        debug!(index, title = removed.title(), "removed note");
        self.save()?;
        Ok(removed)
    }

    /// Case-insensitive substring search over the given fields.
    ///
    /// Matches come back in store order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptySearchTerm` if the trimmed term is empty.
    pub fn find(&self, term: &str, scope: SearchScope) -> Result<Vec<&Note>> {
        Ok(self
            .find_positions(term, scope)?
            .into_iter()
            .map(|i| &self.notes[i])
            .collect())
    }

    /// Like [`find`](Self::find), but returns the 0-based positions of the
    /// matching notes.
    pub fn find_positions(&self, term: &str, scope: SearchScope) -> Result<Vec<usize>> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Err(StoreError::EmptySearchTerm);
        }

        Ok(self
            .notes
            .iter()
            .enumerate()
            .filter(|(_, note)| scope.matches(note, &needle))
            .map(|(i, _)| i)
            .collect())
    }

    /// Writes a plain-text copy of the note at `index` into `dest_dir`.
    ///
    /// The file name comes from [`export_filename`]. Returns the written path.
    pub fn export_single(&self, index: usize, dest_dir: &Path) -> Result<PathBuf> {
        self.check_index(index)?;

        let note = &self.notes[index];
        let dest = dest_dir.join(export_filename(note.title()));
        write_atomic(&dest, &render_export(note))?;
        debug!(index, path = %dest.display(), "exported note");
        Ok(dest)
    }

    /// Creates a note from the contents of a text file and saves.
    ///
    /// Without a (non-blank) title the note is named `Imported_Note_<N+1>`.
    /// A title already in use gets `_<epoch millis>` appended; that suffix is
    /// not guaranteed unique if two imports land in the same millisecond.
    ///
    /// # Errors
    ///
    /// `SourceNotFound` if the file is missing, `EmptyContent` if it holds only
    /// whitespace, `MultilineTitle` for a title with a line break, `Io` for
    /// other read failures or a failed save.
    pub fn import_single(&mut self, source: &Path, title: Option<&str>) -> Result<&Note> {
        let text = read_text(source).map_err(|e| match e {
            FsError::NotFound { path } => StoreError::SourceNotFound { path },
            other => StoreError::Io(other),
        })?;

        let content = validate_content(&text.lines().collect::<Vec<_>>().join("\n"))?;

        let mut title = match title.map(str::trim) {
            Some(t) if !t.is_empty() => single_line(t)?.to_string(),
            _ => format!("Imported_Note_{}", self.notes.len() + 1),
        };
        if self.title_taken(&title, None) {
            title = format!("{}_{}", title, Utc::now().timestamp_millis());
        }

        debug!(%title, source = %source.display(), "importing note");
        self.notes.push(Note::new(title, content));
        self.save()?;
        Ok(&self.notes[self.notes.len() - 1])
    }

    /// Summary statistics over all notes, including the backing file size.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyStore` when there are no notes.
    pub fn statistics(&self) -> Result<Statistics> {
        Statistics::compute(&self.notes, file_size(&self.path)).ok_or(StoreError::EmptyStore)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.notes.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.notes.len(),
            });
        }
        Ok(())
    }

    /// True if another note (not the one at `except`) has this title,
    /// ignoring case.
    fn title_taken(&self, title: &str, except: Option<usize>) -> bool {
        let wanted = title.to_lowercase();
        self.notes
            .iter()
            .enumerate()
            .any(|(i, n)| Some(i) != except && n.title().to_lowercase() == wanted)
    }

    /// Validates a candidate title, returning it trimmed.
    ///
    /// `except` names the position of a note being renamed, which may keep
    /// its own title. Lets a caller reject a title before collecting content.
    ///
    /// # Errors
    ///
    /// `EmptyTitle`, `MultilineTitle` or `DuplicateTitle`.
    pub fn check_title(&self, title: &str, except: Option<usize>) -> Result<String> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::EmptyTitle);
        }
        let title = single_line(title)?;
        if self.title_taken(title, except) {
            return Err(StoreError::DuplicateTitle {
                title: title.to_string(),
            });
        }
        Ok(title.to_string())
    }
}

/// The notes file stores the title on one `TITLE:` line.
fn single_line(title: &str) -> Result<&str> {
    if title.contains(['\n', '\r']) {
        return Err(StoreError::MultilineTitle);
    }
    Ok(title)
}

fn validate_content(content: &str) -> Result<String> {
    let content = content.trim();
    if content.is_empty() {
        return Err(StoreError::EmptyContent);
    }
    Ok(content.to_string())
}
