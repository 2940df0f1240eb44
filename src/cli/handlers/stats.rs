//! Statistics command handler.

use anyhow::{Context, Result};
use std::path::Path;

use super::load_store;
use crate::cli::StatsArgs;
use crate::cli::output::{Output, OutputFormat};
use crate::cli::render::render_statistics;
use crate::store::StoreError;

pub fn handle_stats(args: &StatsArgs, store_path: &Path) -> Result<()> {
    let store = load_store(store_path)?;

    let stats = match store.statistics() {
        Ok(stats) => stats,
        Err(StoreError::EmptyStore) => {
            match args.format {
                OutputFormat::Human => println!("No notes available for statistics!"),
                OutputFormat::Json => {
                    let output = Output::new(None::<()>);
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }
            return Ok(());
        }
        Err(e) => return Err(e).context("failed to compute statistics"),
    };

    match args.format {
        OutputFormat::Human => print!("{}", render_statistics(&stats, store.path())),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&Output::new(&stats))?);
        }
    }

    Ok(())
}
