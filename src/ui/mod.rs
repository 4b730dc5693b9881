/// User interface pieces that aren't the main window shell
pub mod dialogs;
pub mod grid;
