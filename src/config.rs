/// Application-wide constants
///
/// There are no config files or persisted settings; everything tunable lives here.

/// Application name, used as the window title prefix
pub const APP_NAME: &str = "Image Finder";

/// Window title shown before a folder has been chosen
pub const DEFAULT_TITLE: &str = "Image Finder - choose a folder";

/// Title of the native folder picker
pub const PICKER_TITLE: &str = "Select a folder of images";

/// Number of thumbnails per grid row
pub const GRID_COLUMNS: usize = 8;

/// Longest side of a thumbnail, in pixels
pub const THUMBNAIL_SIZE: u32 = 100;

/// Caption font size beneath each thumbnail
pub const CAPTION_SIZE: u16 = 11;

/// Recognized image extensions (compared lowercased)
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "png", "jpeg", "gif", "bmp"];

/// Size of the BITMAPFILEHEADER that precedes the DIB body in a .bmp file
pub const BMP_FILE_HEADER_LEN: usize = 14;

/// Initial window size
pub const WINDOW_WIDTH: f32 = 960.0;
pub const WINDOW_HEIGHT: f32 = 720.0;
