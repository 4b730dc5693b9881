use iced::widget::{button, column, row, scrollable, text, text_input};
use iced::{Alignment, Element, Length, Task, Theme};
use std::path::PathBuf;

mod clipboard;
mod config;
mod error;
mod imaging;
mod state;
mod ui;

use clipboard::SystemClipboard;
use error::LibraryError;
use state::session::Session;
use ui::dialogs;

/// Main application state
struct ImageFinder {
    /// Active folder, keyword and grid
    session: Session,
    /// Kept for the whole run so copied images stay available
    clipboard: SystemClipboard,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User clicked "Change folder" (also sent once at startup)
    ChooseFolder,
    /// Keyword field edited
    KeywordChanged(String),
    /// Enter pressed in the keyword field or "Search" clicked
    Search,
    /// A thumbnail was clicked
    CopyImage(PathBuf),
}

fn keyword_input_id() -> text_input::Id {
    text_input::Id::new("keyword")
}

impl ImageFinder {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let app = ImageFinder {
            session: Session::new(),
            clipboard: SystemClipboard::default(),
            status: String::from("Choose a folder to get started."),
        };

        // The folder picker opens right away
        (app, Task::done(Message::ChooseFolder))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ChooseFolder => {
                let current = self.session.library().map(|library| library.folder());

                match dialogs::pick_folder(current) {
                    Some(folder) => {
                        self.session.open_folder(folder);
                        self.status = String::from("Type a keyword and press Enter.");
                        text_input::focus(keyword_input_id())
                    }
                    None if !self.session.has_folder() => {
                        log::info!("No folder chosen, exiting");
                        iced::exit()
                    }
                    None => Task::none(),
                }
            }
            Message::KeywordChanged(keyword) => {
                self.session.set_keyword(keyword);
                Task::none()
            }
            Message::Search => {
                match self.session.search() {
                    Ok(count) => {
                        self.status = format!(
                            "{} image(s) matching '{}'",
                            count,
                            self.session.keyword().trim()
                        );
                    }
                    Err(LibraryError::NoFolder) => {
                        dialogs::show_info(&LibraryError::NoFolder.to_string());
                    }
                    Err(e) => {
                        log::error!("Search failed: {}", e);
                        self.status = String::from("Search failed.");
                        dialogs::show_error("Search failed", &e.to_string());
                    }
                }
                Task::none()
            }
            Message::CopyImage(path) => {
                match clipboard::copy_image(&path, &mut self.clipboard) {
                    Ok(()) => {
                        let name = path.file_name().unwrap_or_default().to_string_lossy();
                        self.status = format!("Copied {} to the clipboard", name);
                    }
                    Err(e) => {
                        log::error!("Copy failed: {}", e);
                        dialogs::show_error("Copy failed", &format!("Failed to copy image: {}", e));
                    }
                }
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let toolbar = row![
            text("Keyword:"),
            text_input("keyword", self.session.keyword())
                .id(keyword_input_id())
                .on_input(Message::KeywordChanged)
                .on_submit(Message::Search)
                .width(200),
            button("Search").on_press(Message::Search),
            button("Change folder").on_press(Message::ChooseFolder),
        ]
        .spacing(5)
        .align_y(Alignment::Center);

        column![
            toolbar,
            text(&self.status).size(14),
            scrollable(self.session.grid().view())
                .width(Length::Fill)
                .height(Length::Fill),
        ]
        .spacing(10)
        .padding(10)
        .into()
    }

    fn title(&self) -> String {
        self.session.title()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    iced::application(ImageFinder::title, ImageFinder::update, ImageFinder::view)
        .theme(ImageFinder::theme)
        .window_size((config::WINDOW_WIDTH, config::WINDOW_HEIGHT))
        .centered()
        .run_with(ImageFinder::new)
}
