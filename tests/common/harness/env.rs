//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::{NotesCommand, TestNote};
use flatnotes::domain::Note;
use flatnotes::infra::serialize_all;
use flatnotes::store::NoteStore;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// A separate config home keeps the user's own config file out of the
/// commands run from here.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the notes directory
    notes_dir: PathBuf,
    /// Directory used as XDG_CONFIG_HOME for spawned commands
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        let config_home = temp_dir.path().join("config");
        std::fs::create_dir_all(&notes_dir).expect("Failed to create notes directory");
        std::fs::create_dir_all(&config_home).expect("Failed to create config directory");
        Self {
            _temp_dir: temp_dir,
            notes_dir,
            config_home,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the path of the default notes file.
    pub fn store_path(&self) -> PathBuf {
        self.notes_dir.join("notes.txt")
    }

    /// Writes the given notes to the notes file, replacing its contents.
    pub fn write_notes(&self, notes: &[TestNote]) {
        let notes: Vec<Note> = notes.iter().map(TestNote::to_note).collect();
        std::fs::write(self.store_path(), serialize_all(&notes))
            .expect("Failed to write notes file");
    }

    /// Loads the notes file as the application would.
    pub fn load_store(&self) -> NoteStore {
        let mut store = NoteStore::open(self.store_path());
        store.load().expect("Failed to load notes file");
        store
    }

    /// Writes `flatnotes/config.toml` under the isolated config home.
    pub fn write_config(&self, toml: &str) {
        let dir = self.config_home.join("flatnotes");
        std::fs::create_dir_all(&dir).expect("Failed to create config dir");
        std::fs::write(dir.join("config.toml"), toml).expect("Failed to write config");
    }

    /// Creates a NotesCommand configured for this test environment.
    pub fn cmd(&self) -> NotesCommand {
        self.bare_cmd().dir(&self.notes_dir)
    }

    /// Creates a NotesCommand without `--dir`, so config and defaults apply.
    pub fn bare_cmd(&self) -> NotesCommand {
        NotesCommand::new()
            .config_home(&self.config_home)
            .current_dir(self._temp_dir.path())
    }

    /// Writes a file to the test environment and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self._temp_dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the root of the temp directory.
    pub fn root(&self) -> &Path {
        self._temp_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Phase 1: TestEnv Foundation
    // ===========================================

    #[test]
    fn test_env_creates_notes_directory() {
        let env = TestEnv::new();
        assert!(env.notes_dir().is_dir(), "notes directory should exist");
        assert!(!env.store_path().exists(), "notes file starts absent");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.notes_dir().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_env_provides_command() {
        let env = TestEnv::new();
        let cmd = env.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], env.notes_dir().to_string_lossy());
    }

    // ===========================================
    // Phase 2: Writing Notes
    // ===========================================

    #[test]
    fn test_env_write_notes_round_trips() {
        let env = TestEnv::new();
        env.write_notes(&[
            TestNote::new("First").content("one"),
            TestNote::new("Second").content("two\nlines"),
        ]);

        let store = env.load_store();
        assert_eq!(store.len(), 2);
        assert_eq!(store.notes()[1].content(), "two\nlines");
    }
}
