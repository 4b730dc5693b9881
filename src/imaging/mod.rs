/// Image processing module
///
/// This module handles:
/// - Generating bounded grid thumbnails
/// - Re-encoding images as device-independent bitmaps for the clipboard

pub mod bitmap;
pub mod thumbnail;
