use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while listing the active folder
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Search was requested before any folder was chosen
    #[error("please choose a folder first")]
    NoFolder,

    #[error("failed to read folder {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// Errors raised while copying an image to the clipboard
#[derive(Debug, Error)]
pub enum CopyError {
    #[error("failed to open {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode bitmap: {0}")]
    Encode(#[from] image::ImageError),

    #[error("encoded bitmap is not a 24-bit BI_RGB DIB")]
    InvalidBitmap,

    #[error("clipboard error: {0}")]
    Clipboard(String),
}
