/// Native dialogs
///
/// Thin wrappers around rfd so the update loop reads as plain calls.
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

use crate::config::{APP_NAME, PICKER_TITLE};

/// Show the native folder picker
///
/// Starts in `current` when a folder is already active, otherwise in the
/// user's Pictures directory. Returns None on cancel.
pub fn pick_folder(current: Option<&Path>) -> Option<PathBuf> {
    let start = current
        .map(Path::to_path_buf)
        .or_else(dirs::picture_dir)
        .or_else(dirs::home_dir);

    let mut dialog = FileDialog::new().set_title(PICKER_TITLE);
    if let Some(start) = start {
        dialog = dialog.set_directory(start);
    }

    dialog.pick_folder()
}

/// Informational message box
pub fn show_info(message: &str) {
    show(MessageLevel::Info, APP_NAME, message);
}

/// Error message box
pub fn show_error(title: &str, message: &str) {
    show(MessageLevel::Error, title, message);
}

fn show(level: MessageLevel, title: &str, message: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
