//! Shared helpers for the integration tests.
//!
//! Fixtures are notes files in the block format: `valid/` holds files the
//! parser must read exactly, `invalid/` holds damaged or hand-edited ones.

pub mod harness;

use std::path::{Path, PathBuf};

/// `tests/fixtures` under the crate root.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// A well-formed notes file.
pub fn valid_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("valid").join(name)
}

/// A notes file the parser has to recover from.
pub fn invalid_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("invalid").join(name)
}

/// Raw text of a fixture, without BOM or encoding checks.
///
/// Panics when the file is missing or not UTF-8, so only use it on fixtures
/// that are meant to be readable text.
pub fn read_fixture(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("notes fixture {} is unreadable: {e}", path.display()))
}
