//! flatnotes - personal notes kept in a single plain-text file

pub mod cli;
pub mod domain;
pub mod infra;
pub mod store;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_export, handle_import, handle_list, handle_new, handle_search, handle_show,
        handle_stats,
    },
    shell::run_interactive,
};

/// Initialize tracing on stderr so stdout stays clean for command output.
///
/// `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "flatnotes=warn",
        1 => "flatnotes=info",
        _ => "flatnotes=debug",
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    // Ignore a subscriber that is already set (tests calling run twice).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(Command::Completions(args)) = &cli.command {
        clap_complete::generate(
            args.shell,
            &mut Cli::command(),
            "flatnotes",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let config = Config::load()?;
    let notes_dir = config.notes_dir(cli.dir.as_ref());
    let store_path = notes_dir.join(config.store_file(cli.file.as_deref()));

    std::fs::create_dir_all(&notes_dir)
        .with_context(|| format!("failed to create notes directory {}", notes_dir.display()))?;
    tracing::debug!(store = %store_path.display(), "resolved notes file");

    match &cli.command {
        None => {
            let mut store = store::NoteStore::open(&store_path);
            run_interactive(&mut store, &notes_dir).context("interactive session failed")
        }
        Some(Command::List(args)) => handle_list(args, &store_path),
        Some(Command::Show(args)) => handle_show(args, &store_path),
        Some(Command::New(args)) => handle_new(args, &store_path),
        Some(Command::Search(args)) => handle_search(args, &store_path),
        Some(Command::Export(args)) => handle_export(args, &store_path, &notes_dir),
        Some(Command::Import(args)) => handle_import(args, &store_path),
        Some(Command::Stats(args)) => handle_stats(args, &store_path),
        Some(Command::Completions(_)) => Ok(()),
    }
}
