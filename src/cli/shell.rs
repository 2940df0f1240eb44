//! Interactive menu-driven session over any input/output pair.
//!
//! Note numbers shown to and typed by the user start at 1; the store is
//! addressed with 0-based positions. Store errors are printed and the menu
//! comes back; only I/O errors on the terminal itself end the session.
//! End of input is treated as "Save & Exit".

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::domain::SearchScope;
use crate::store::{NoteStore, StoreError};

use super::render::{
    LIST_PREVIEW, render_details, render_list, render_search, render_statistics,
};

/// Line that ends multi-line content entry.
const CONTENT_TERMINATOR: &str = "END";
const EXIT_CHOICE: u32 = 10;

pub struct Shell<'a, R, W> {
    store: &'a mut NoteStore,
    input: R,
    output: W,
    export_dir: PathBuf,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Creates a shell over `store`. Exports are written into `export_dir`.
    pub fn new(store: &'a mut NoteStore, input: R, output: W, export_dir: impl Into<PathBuf>) -> Self {
        Self {
            store,
            input,
            output,
            export_dir: export_dir.into(),
        }
    }

    /// Loads the store, then serves menu choices until exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to Notes Manager!")?;
        writeln!(self.output, "{}", "=".repeat(30))?;
        self.load()?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                writeln!(self.output)?;
                return self.save_and_exit();
            };

            match choice.trim().parse::<u32>() {
                Ok(1) => self.create_note()?,
                Ok(2) => self.list_notes()?,
                Ok(3) => self.view_details()?,
                Ok(4) => self.edit_note()?,
                Ok(5) => self.delete_note()?,
                Ok(6) => self.search_notes()?,
                Ok(7) => self.export_note()?,
                Ok(8) => self.import_note()?,
                Ok(9) => self.show_statistics()?,
                Ok(EXIT_CHOICE) => return self.save_and_exit(),
                _ => writeln!(self.output, "Invalid choice! Please select 1-10.")?,
            }
        }
    }

    // ===========================================
    // Menu actions
    // ===========================================

    fn load(&mut self) -> io::Result<()> {
        match self.store.load() {
            Ok(count) => writeln!(
                self.output,
                "Loaded {} notes from {}.",
                count,
                self.store.path().display()
            ),
            Err(StoreError::StoreNotFound { .. }) => writeln!(
                self.output,
                "Notes file not found. Starting with empty notes list."
            ),
            Err(e) => writeln!(
                self.output,
                "Error reading notes file: {e}. Starting with empty notes list."
            ),
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let bar = "=".repeat(50);
        writeln!(self.output, "\n{bar}")?;
        writeln!(self.output, "              NOTES MANAGER")?;
        writeln!(self.output, "{bar}")?;
        for line in [
            "1.  Create New Note",
            "2.  View All Notes",
            "3.  View Note Details",
            "4.  Edit Note",
            "5.  Delete Note",
            "6.  Search Notes",
            "7.  Export Note to File",
            "8.  Import Note from File",
            "9.  Notes Statistics",
            "10. Save & Exit",
        ] {
            writeln!(self.output, "{line}")?;
        }
        writeln!(self.output, "{bar}")?;
        writeln!(
            self.output,
            "Total Notes: {} | File: {}",
            self.store.len(),
            self.store.path().display()
        )?;
        writeln!(self.output, "{bar}")?;
        write!(self.output, "Choose an option (1-10): ")?;
        self.output.flush()
    }

    fn create_note(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- CREATE NEW NOTE ---")?;
        let Some(title) = self.prompt("Enter note title: ")? else {
            return Ok(());
        };
        if let Err(e) = self.store.check_title(&title, None) {
            return self.report(&e);
        }

        writeln!(
            self.output,
            "Enter note content (type '{CONTENT_TERMINATOR}' on a new line to finish):"
        )?;
        let content = self.read_content()?;

        match self.store.add(&title, &content) {
            Ok(note) => {
                writeln!(self.output, "\nNote created successfully!")?;
                writeln!(self.output, "Title: {}", note.title())?;
                writeln!(self.output, "Content length: {} characters", note.char_count())
            }
            Err(e) => self.report(&e),
        }
    }

    fn list_notes(&mut self) -> io::Result<()> {
        if !self.store.is_empty() {
            writeln!(self.output, "\n--- ALL NOTES ---")?;
        }
        write!(self.output, "{}", render_list(self.store.notes()))
    }

    fn view_details(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.output, "\nNo notes available!");
        }
        writeln!(self.output, "\n--- VIEW NOTE DETAILS ---")?;
        self.list_notes()?;

        if let Some(index) = self.read_note_number("view")? {
            write!(self.output, "\n{}", render_details(&self.store.notes()[index]))?;
        }
        Ok(())
    }

    fn edit_note(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.output, "\nNo notes available to edit!");
        }
        writeln!(self.output, "\n--- EDIT NOTE ---")?;
        self.list_notes()?;

        let Some(index) = self.read_note_number("edit")? else {
            return Ok(());
        };

        let current = &self.store.notes()[index];
        writeln!(self.output, "\nCurrent Note:")?;
        writeln!(self.output, "Title: {}", current.title())?;
        writeln!(self.output, "Content: {}", current.preview(LIST_PREVIEW))?;
        writeln!(self.output, "\nWhat would you like to edit?")?;
        writeln!(self.output, "1. Title only")?;
        writeln!(self.output, "2. Content only")?;
        writeln!(self.output, "3. Both title and content")?;

        let Some(choice) = self.prompt("Choose option (1-3): ")? else {
            return Ok(());
        };

        let (title, content, done) = match choice.trim() {
            "1" => {
                let Some(title) = self.prompt("Enter new title: ")? else {
                    return Ok(());
                };
                (Some(title), None, "Title updated successfully!")
            }
            "2" => {
                let content = self.read_new_content()?;
                (None, Some(content), "Content updated successfully!")
            }
            "3" => {
                let Some(title) = self.prompt("Enter new title: ")? else {
                    return Ok(());
                };
                if let Err(e) = self.store.check_title(&title, Some(index)) {
                    return self.report(&e);
                }
                let content = self.read_new_content()?;
                (
                    Some(title),
                    Some(content),
                    "Both title and content updated successfully!",
                )
            }
            _ => return writeln!(self.output, "Invalid option!"),
        };

        match self
            .store
            .update(index, title.as_deref(), content.as_deref())
        {
            Ok(_) => writeln!(self.output, "{done}"),
            Err(e) => self.report(&e),
        }
    }

    fn delete_note(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.output, "\nNo notes available to delete!");
        }
        writeln!(self.output, "\n--- DELETE NOTE ---")?;
        self.list_notes()?;

        let Some(index) = self.read_note_number("delete")? else {
            return Ok(());
        };

        let note = &self.store.notes()[index];
        writeln!(self.output, "\nNote to delete:")?;
        writeln!(self.output, "Title: {}", note.title())?;
        writeln!(
            self.output,
            "Created: {}",
            crate::infra::format_display(note.created())
        )?;

        let Some(answer) = self.prompt("Are you sure you want to delete this note? (y/n): ")?
        else {
            return Ok(());
        };
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            return writeln!(self.output, "Delete cancelled.");
        }

        match self.store.remove(index) {
            Ok(_) => writeln!(self.output, "Note deleted successfully!"),
            Err(e) => self.report(&e),
        }
    }

    fn search_notes(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.output, "\nNo notes available to search!");
        }
        writeln!(self.output, "\n--- SEARCH NOTES ---")?;
        writeln!(self.output, "1. Search by title")?;
        writeln!(self.output, "2. Search by content")?;
        writeln!(self.output, "3. Search in both title and content")?;

        let Some(raw_scope) = self.prompt("Choose search option (1-3): ")? else {
            return Ok(());
        };
        let scope = match raw_scope.parse::<SearchScope>() {
            Ok(scope) => scope,
            Err(e) => return self.report(&StoreError::from(e)),
        };

        let Some(term) = self.prompt("Enter search term: ")? else {
            return Ok(());
        };
        match self.store.find(&term, scope) {
            Ok(results) => write!(self.output, "\n{}", render_search(term.trim(), &results)),
            Err(e) => self.report(&e),
        }
    }

    fn export_note(&mut self) -> io::Result<()> {
        if self.store.is_empty() {
            return writeln!(self.output, "\nNo notes available to export!");
        }
        writeln!(self.output, "\n--- EXPORT NOTE TO FILE ---")?;
        self.list_notes()?;

        let Some(index) = self.read_note_number("export")? else {
            return Ok(());
        };
        match self.store.export_single(index, &self.export_dir) {
            Ok(path) => writeln!(
                self.output,
                "Note exported successfully to: {}",
                path.display()
            ),
            Err(e) => self.report(&e),
        }
    }

    fn import_note(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- IMPORT NOTE FROM FILE ---")?;
        let Some(raw_path) = self.prompt("Enter the full file path to import: ")? else {
            return Ok(());
        };
        let source = PathBuf::from(raw_path.trim());
        if !source.is_file() {
            return self.report(&StoreError::SourceNotFound { path: source });
        }

        let Some(title) =
            self.prompt("Enter title for the imported note (leave blank for default): ")?
        else {
            return Ok(());
        };

        match self.store.import_single(&source, Some(&title)) {
            Ok(note) => {
                writeln!(self.output, "Note imported successfully!")?;
                writeln!(self.output, "Title: {}", note.title())?;
                writeln!(self.output, "Content length: {} characters", note.char_count())
            }
            Err(e) => self.report(&e),
        }
    }

    fn show_statistics(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n--- NOTES STATISTICS ---")?;
        match self.store.statistics() {
            Ok(stats) => write!(
                self.output,
                "{}",
                render_statistics(&stats, self.store.path())
            ),
            Err(StoreError::EmptyStore) => {
                writeln!(self.output, "No notes available for statistics!")
            }
            Err(e) => self.report(&e),
        }
    }

    fn save_and_exit(&mut self) -> io::Result<()> {
        writeln!(self.output, "\nSaving notes...")?;
        match self.store.save() {
            Ok(()) => writeln!(
                self.output,
                "Notes saved successfully to {}",
                self.store.path().display()
            )?,
            Err(e) => writeln!(self.output, "Error saving notes: {e}")?,
        }
        writeln!(self.output, "Thank you for using Notes Manager!")?;
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()
    }

    // ===========================================
    // Input helpers
    // ===========================================

    /// Reads one line without its line ending. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{message}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Reads lines until the terminator line or end of input.
    fn read_content(&mut self) -> io::Result<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line == CONTENT_TERMINATOR {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join("\n"))
    }

    fn read_new_content(&mut self) -> io::Result<String> {
        writeln!(
            self.output,
            "Enter new content (type '{CONTENT_TERMINATOR}' on a new line to finish):"
        )?;
        self.read_content()
    }

    /// Asks for a 1-based note number and returns the 0-based position.
    fn read_note_number(&mut self, action: &str) -> io::Result<Option<usize>> {
        let Some(raw) = self.prompt(&format!("Enter note number to {action}: "))? else {
            return Ok(None);
        };
        match raw.trim().parse::<usize>() {
            Ok(n) if (1..=self.store.len()).contains(&n) => Ok(Some(n - 1)),
            Ok(_) => {
                writeln!(self.output, "Invalid note number!")?;
                Ok(None)
            }
            Err(_) => {
                writeln!(self.output, "Invalid input! Please enter a number.")?;
                Ok(None)
            }
        }
    }

    fn report(&mut self, err: &StoreError) -> io::Result<()> {
        writeln!(self.output, "Error: {err}")?;
        if err.is_io() {
            writeln!(
                self.output,
                "Check the file path and its permissions. Unsaved changes are kept until option 10 saves them."
            )?;
        }
        Ok(())
    }
}

/// Runs a shell on stdin/stdout.
pub fn run_interactive(store: &mut NoteStore, export_dir: &Path) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(store, stdin.lock(), stdout.lock(), export_dir).run()
}
