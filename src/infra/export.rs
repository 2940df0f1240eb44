//! Plain-text export of a single note.

use crate::domain::Note;
use crate::infra::format::format_display;

const RULE_WIDTH: usize = 50;

/// Derives the export filename for a title.
///
/// - Keeps ASCII letters, digits and whitespace; drops everything else
/// - Replaces each whitespace character with `_`
/// - Appends `.txt`
/// - Falls back to `untitled.txt` when nothing is left
///
/// # Examples
///
/// ```
/// use flatnotes::infra::export_filename;
///
/// assert_eq!(export_filename("Q&A: Notes!"), "QA_Notes.txt");
/// assert_eq!(export_filename("Shopping list 2"), "Shopping_list_2.txt");
/// ```
pub fn export_filename(title: &str) -> String {
    let stem: String = title
        .chars()
        .filter_map(|c| {
            if c.is_ascii_alphanumeric() {
                Some(c)
            } else if c.is_whitespace() {
                Some('_')
            } else {
                None
            }
        })
        .collect();

    if stem.is_empty() {
        return "untitled.txt".to_string();
    }
    format!("{stem}.txt")
}

/// Renders the export document for a note.
///
/// ```text
/// Title: <title>
/// Created: <dd/MM/yyyy HH:mm:ss>
/// Modified: <dd/MM/yyyy HH:mm:ss>
/// --------------------------------------------------
///
/// <content>
/// ```
pub fn render_export(note: &Note) -> String {
    format!(
        "Title: {}\nCreated: {}\nModified: {}\n{}\n\n{}",
        note.title(),
        format_display(note.created()),
        format_display(note.modified()),
        "-".repeat(RULE_WIDTH),
        note.content(),
    )
}
