/// Shared data structures for the application state
///
/// Entries live only as long as the current search result; every search
/// rebuilds the list from scratch.

use std::path::PathBuf;

/// Represents a single image file in the active folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    /// Full path to the image file
    pub path: PathBuf,
    /// Filename only (e.g., "cat.png")
    pub filename: String,
}

impl ImageEntry {
    pub fn new(path: PathBuf) -> Self {
        let filename = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        Self { path, filename }
    }
}
