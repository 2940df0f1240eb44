//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;
pub mod render;
pub mod shell;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::SearchScope;
use output::OutputFormat;

/// flatnotes - personal notes kept in a single plain-text file
///
/// Run without a subcommand to start the interactive menu.
#[derive(Parser, Debug)]
#[command(name = "flatnotes", version, about, long_about = None)]
pub struct Cli {
    /// Notes directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Notes file name inside the notes directory
    #[arg(short = 'f', long, global = true)]
    pub file: Option<String>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all notes
    #[command(name = "ls")]
    List(ListArgs),

    /// Show one note in full
    Show(ShowArgs),

    /// Create a new note
    New(NewArgs),

    /// Search notes by title and/or content
    Search(SearchArgs),

    /// Export a note to a plain-text file
    Export(ExportArgs),

    /// Import a text file as a new note
    Import(ImportArgs),

    /// Show statistics about the notes
    Stats(StatsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note number as shown by `ls` (starting at 1)
    pub number: usize,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Note content (read from stdin if omitted)
    #[arg(short, long)]
    pub content: Option<String>,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    pub term: String,

    /// Which fields to search
    #[arg(long = "in", value_enum, default_value_t = SearchScope::Both)]
    pub scope: SearchScope,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Note number as shown by `ls` (starting at 1)
    pub number: usize,

    /// Directory to write into (defaults to the notes directory)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `import` command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Text file to import
    pub path: PathBuf,

    /// Title for the new note (defaults to Imported_Note_<N>)
    #[arg(short, long)]
    pub title: Option<String>,
}

/// Arguments for the `stats` command
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
