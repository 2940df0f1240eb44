//! List and show command handlers.

use anyhow::Result;
use std::path::Path;

use super::{load_store, note_index};
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::render::{render_details, render_list};
use crate::cli::{ListArgs, ShowArgs};

pub fn handle_list(args: &ListArgs, store_path: &Path) -> Result<()> {
    let store = load_store(store_path)?;

    match args.format {
        OutputFormat::Human => print!("{}", render_list(store.notes())),
        OutputFormat::Json => {
            let output = Output::new(NoteListing::numbered(store.notes()));
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

pub fn handle_show(args: &ShowArgs, store_path: &Path) -> Result<()> {
    let store = load_store(store_path)?;
    let index = note_index(args.number, &store)?;

    print!("{}", render_details(&store.notes()[index]));
    Ok(())
}
