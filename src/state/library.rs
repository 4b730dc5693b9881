use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::data::ImageEntry;
use crate::config::IMAGE_EXTENSIONS;
use crate::error::LibraryError;

/// The Library is the folder currently being browsed.
/// It lists the folder's image files, filtered by a filename keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Library {
    folder: PathBuf,
}

impl Library {
    pub fn new(folder: PathBuf) -> Self {
        Library { folder }
    }

    /// Get the path to the folder
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Base name of the folder, for the window title
    pub fn display_name(&self) -> String {
        self.folder
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.folder.display().to_string())
    }

    /// List the images directly inside the folder whose filename contains `keyword`.
    ///
    /// Matching is case-sensitive on the keyword and case-insensitive on the
    /// extension. An empty keyword matches every image. Results follow the
    /// directory listing order.
    pub fn search(&self, keyword: &str) -> Result<Vec<ImageEntry>, LibraryError> {
        let mut images = Vec::new();

        for entry in WalkDir::new(&self.folder).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|source| LibraryError::ReadDir {
                path: self.folder.clone(),
                source,
            })?;

            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            // A keyword can't meaningfully match a name that isn't UTF-8
            let Some(filename) = entry.file_name().to_str() else {
                log::debug!("Skipping non UTF-8 filename {}", path.display());
                continue;
            };
            if is_match(filename, keyword) {
                images.push(ImageEntry::new(path.to_path_buf()));
            }
        }

        log::debug!(
            "Found {} images matching '{}' in {}",
            images.len(),
            keyword,
            self.folder.display()
        );

        Ok(images)
    }
}

/// Keyword containment plus the extension allow-list
pub fn is_match(filename: &str, keyword: &str) -> bool {
    filename.contains(keyword) && has_image_extension(filename)
}

/// Check if this is an image file by extension
pub fn has_image_extension(filename: &str) -> bool {
    match filename.rsplit_once('.') {
        Some((_, ext)) => {
            let ext = ext.to_lowercase();
            IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}
