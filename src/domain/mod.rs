//! Core types: Note, SearchScope, Statistics

mod note;
mod search;
mod stats;

pub use note::{Note, now};
pub use search::{ParseSearchScopeError, SearchScope};
pub use stats::Statistics;
