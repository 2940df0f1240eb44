//! Export and import command handlers.

use anyhow::{Context, Result};
use std::path::Path;

use super::{load_store, note_index};
use crate::cli::{ExportArgs, ImportArgs};

/// Exports one note into `--out`, or `notes_dir` when not given.
pub fn handle_export(args: &ExportArgs, store_path: &Path, notes_dir: &Path) -> Result<()> {
    let store = load_store(store_path)?;
    let index = note_index(args.number, &store)?;
    let dest_dir = args.out.as_deref().unwrap_or(notes_dir);

    let written = store
        .export_single(index, dest_dir)
        .with_context(|| format!("failed to export note {}", args.number))?;

    println!("Exported to {}", written.display());
    Ok(())
}

pub fn handle_import(args: &ImportArgs, store_path: &Path) -> Result<()> {
    let mut store = load_store(store_path)?;
    let number = store.len() + 1;
    let note = store
        .import_single(&args.path, args.title.as_deref())
        .with_context(|| format!("failed to import {}", args.path.display()))?;

    println!(
        "Imported note {}: {} ({} characters)",
        number,
        note.title(),
        note.char_count()
    );
    Ok(())
}
