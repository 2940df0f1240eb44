//! New note command handler.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

use super::load_store;
use crate::cli::NewArgs;

pub fn handle_new(args: &NewArgs, store_path: &Path) -> Result<()> {
    let content = match &args.content {
        Some(content) => content.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read note content from stdin")?;
            buf
        }
    };

    let mut store = load_store(store_path)?;
    let number = store.len() + 1;
    let note = store
        .add(&args.title, &content)
        .with_context(|| format!("failed to create note '{}'", args.title.trim()))?;

    println!(
        "Created note {}: {} ({} characters)",
        number,
        note.title(),
        note.char_count()
    );
    Ok(())
}
