//! Human-readable rendering of notes, search results and statistics.

use std::fmt::Write as _;
use std::path::Path;

use crate::domain::{Note, Statistics};
use crate::infra::{format_display, format_short};

/// Preview length in full listings and the edit screen.
pub const LIST_PREVIEW: usize = 100;
/// Preview length in search results.
pub const SEARCH_PREVIEW: usize = 80;

fn rule(c: char, width: usize) -> String {
    c.to_string().repeat(width)
}

/// Numbered listing of every note with dates and a preview.
pub fn render_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found! Create your first note.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('-', 80));
    for (i, note) in notes.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, note.title());
        let _ = writeln!(
            out,
            "   Created: {} | Modified: {}",
            format_short(note.created()),
            format_short(note.modified())
        );
        let _ = writeln!(out, "   Preview: {}", note.preview(LIST_PREVIEW));
        out.push('\n');
    }
    let _ = writeln!(out, "{}", rule('-', 80));
    let _ = writeln!(out, "Total Notes: {}", notes.len());
    out
}

/// Full view of one note.
pub fn render_details(note: &Note) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('=', 60));
    let _ = writeln!(out, "TITLE: {}", note.title());
    let _ = writeln!(out, "{}", rule('=', 60));
    let _ = writeln!(out, "Created: {}", format_display(note.created()));
    let _ = writeln!(out, "Modified: {}", format_display(note.modified()));
    let _ = writeln!(out, "Content Length: {} characters", note.char_count());
    let _ = writeln!(out, "{}", rule('-', 60));
    let _ = writeln!(out, "CONTENT:");
    let _ = writeln!(out, "{}", note.content());
    let _ = writeln!(out, "{}", rule('=', 60));
    out
}

/// Search results numbered in match order.
pub fn render_search(term: &str, results: &[&Note]) -> String {
    if results.is_empty() {
        return format!("No notes found matching '{}'\n", term);
    }

    let mut out = String::new();
    let _ = writeln!(out, "Search Results for '{}':", term);
    let _ = writeln!(out, "{}", rule('-', 60));
    for (i, note) in results.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, note.title());
        let _ = writeln!(out, "   Preview: {}", note.preview(SEARCH_PREVIEW));
        out.push('\n');
    }
    let _ = writeln!(out, "{}", rule('-', 60));
    let _ = writeln!(out, "Found {} matching notes.", results.len());
    out
}

/// Statistics report, including where the notes file lives.
pub fn render_statistics(stats: &Statistics, store_path: &Path) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule('=', 40));
    let _ = writeln!(out, "Total Notes: {}", stats.count);
    let _ = writeln!(out, "Total Characters: {}", stats.total_chars);
    let _ = writeln!(out, "Total Words: {}", stats.total_words);
    let _ = writeln!(out, "Average Characters per Note: {}", stats.avg_chars);
    let _ = writeln!(out, "Average Words per Note: {}", stats.avg_words);
    out.push('\n');
    let _ = writeln!(
        out,
        "Oldest Note: {} ({})",
        stats.oldest.title(),
        format_short(stats.oldest.created())
    );
    let _ = writeln!(
        out,
        "Newest Note: {} ({})",
        stats.newest.title(),
        format_short(stats.newest.created())
    );
    let _ = writeln!(
        out,
        "Longest Note: {} ({} characters)",
        stats.longest.title(),
        stats.longest.char_count()
    );
    let _ = writeln!(
        out,
        "Shortest Note: {} ({} characters)",
        stats.shortest.title(),
        stats.shortest.char_count()
    );
    out.push('\n');
    let _ = writeln!(out, "Storage Location: {}", store_path.display());
    if let Some(size) = stats.file_size {
        let _ = writeln!(out, "File Size: {} bytes", size);
    }
    let _ = writeln!(out, "{}", rule('=', 40));
    out
}
