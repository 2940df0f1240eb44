//! Command handlers for the CLI.

mod list;
mod new;
mod search;
mod stats;
mod transfer;


use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::store::{NoteStore, StoreError};

// Re-export public items
pub use list::{handle_list, handle_show};
pub use new::handle_new;
pub use search::handle_search;
pub use stats::handle_stats;
pub use transfer::{handle_export, handle_import};

// ===========================================
// Shared Utilities
// ===========================================

/// Opens and loads the store at `path`.
///
/// A missing notes file is the first-run state and yields an empty store.
pub(crate) fn load_store(path: &Path) -> Result<NoteStore> {
    let mut store = NoteStore::open(path);
    match store.load() {
        Ok(_) | Err(StoreError::StoreNotFound { .. }) => Ok(store),
        Err(e) => {
            Err(e).with_context(|| format!("failed to load notes from {}", path.display()))
        }
    }
}

/// Converts a 1-based note number into a store position.
pub(crate) fn note_index(number: usize, store: &NoteStore) -> Result<usize> {
    if number == 0 || number > store.len() {
        bail!(
            "no note numbered {} (there are {} notes)",
            number,
            store.len()
        );
    }
    Ok(number - 1)
}
