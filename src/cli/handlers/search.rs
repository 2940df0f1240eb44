//! Search command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::load_store;
use crate::cli::SearchArgs;
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::render::render_search;

pub fn handle_search(args: &SearchArgs, store_path: &Path) -> Result<()> {
    let store = load_store(store_path)?;
    let positions = store
        .find_positions(&args.term, args.scope)
        .with_context(|| format!("search failed for term: {}", args.term))?;
    let notes = store.notes();

    match args.format {
        OutputFormat::Human => {
            let results: Vec<_> = positions.iter().map(|&i| &notes[i]).collect();
            print!("{}", render_search(args.term.trim(), &results));
        }
        OutputFormat::Json => {
            // Numbers refer to store positions so they work with `show` and `export`.
            let listings: Vec<_> = positions
                .iter()
                .map(|&i| NoteListing::at(i + 1, &notes[i]))
                .collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }

    Ok(())
}
