use std::path::PathBuf;

use super::library::Library;
use crate::config::{APP_NAME, DEFAULT_TITLE};
use crate::error::LibraryError;
use crate::ui::grid::Grid;

/// Everything the window shows: the active folder, the keyword field and
/// the thumbnails of the last search.
///
/// Without a folder the session is in its initial state and only a folder
/// change makes sense. Once a folder is chosen it never goes back.
#[derive(Debug, Default)]
pub struct Session {
    library: Option<Library>,
    keyword: String,
    grid: Grid,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn library(&self) -> Option<&Library> {
        self.library.as_ref()
    }

    pub fn has_folder(&self) -> bool {
        self.library.is_some()
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn set_keyword(&mut self, keyword: String) {
        self.keyword = keyword;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Make `folder` the active folder, resetting the keyword and the grid
    pub fn open_folder(&mut self, folder: PathBuf) {
        log::info!("Browsing {}", folder.display());

        self.library = Some(Library::new(folder));
        self.keyword.clear();
        self.grid = Grid::Empty;
    }

    /// Run the keyword filter on the active folder and rebuild the grid.
    ///
    /// Returns the number of matching files. Without a folder nothing
    /// changes. The previous grid is always dropped before listing, so a
    /// listing error leaves it empty.
    pub fn search(&mut self) -> Result<usize, LibraryError> {
        let library = self.library.as_ref().ok_or(LibraryError::NoFolder)?;
        let keyword = self.keyword.trim().to_string();

        self.grid = Grid::Empty;

        let entries = library.search(&keyword)?;
        let count = entries.len();
        self.grid = Grid::render(entries, keyword);

        Ok(count)
    }

    /// Window title: the folder's base name, or a prompt to pick one
    pub fn title(&self) -> String {
        match &self.library {
            Some(library) => format!("{} - {}", APP_NAME, library.display_name()),
            None => DEFAULT_TITLE.to_string(),
        }
    }
}
