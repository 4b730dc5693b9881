/// State management module
///
/// This module handles all application state, including:
/// - The image entries shown in the grid (data.rs)
/// - Listing and filtering the active folder (library.rs)
/// - The window session: folder, keyword, grid (session.rs)

pub mod data;
pub mod library;
pub mod session;
