//! File I/O, the notes file format, export rendering

mod export;
mod format;
mod fs;

pub use export::{export_filename, render_export};
pub use format::{
    DISPLAY_FORMAT, SHORT_FORMAT, STORAGE_FORMAT, format_display, format_short, format_timestamp,
    parse, parse_timestamp, serialize, serialize_all,
};
pub use fs::{FsError, file_size, read_text, write_atomic};
