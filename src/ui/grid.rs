/// Thumbnail grid
///
/// Each cell owns the pixel handle of its thumbnail, so dropping the grid
/// releases every preview at once.
use iced::widget::image::Handle;
use iced::widget::{button, column, container, text, Column, Image, Row, Space};
use iced::{Alignment, Element, Length};

use crate::config::{CAPTION_SIZE, GRID_COLUMNS, THUMBNAIL_SIZE};
use crate::imaging::thumbnail::generate_thumbnail;
use crate::state::data::ImageEntry;
use crate::Message;

/// A rendered grid cell
#[derive(Debug, Clone)]
pub struct Thumbnail {
    pub entry: ImageEntry,
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

/// What the grid region currently shows
#[derive(Debug, Clone, Default)]
pub enum Grid {
    /// Nothing yet (no search since the folder was chosen)
    #[default]
    Empty,
    /// The last search matched no files
    NoMatches { keyword: String },
    /// One slot per matched file, in listing order; `None` where decoding failed
    Thumbnails(Vec<Option<Thumbnail>>),
}

impl Grid {
    /// Build thumbnails for `entries`, in order.
    ///
    /// Files that fail to decode are skipped silently but keep their slot,
    /// so every entry sits at the cell its listing index gives it.
    pub fn render(entries: Vec<ImageEntry>, keyword: String) -> Self {
        if entries.is_empty() {
            return Grid::NoMatches { keyword };
        }

        let mut slots: Vec<Option<Thumbnail>> = entries
            .into_iter()
            .map(|entry| {
                let pixels = generate_thumbnail(&entry.path)?;
                let (width, height) = pixels.dimensions();
                Some(Thumbnail {
                    handle: Handle::from_rgba(width, height, pixels.into_raw()),
                    entry,
                    width,
                    height,
                })
            })
            .collect();

        let skipped = slots.iter().filter(|slot| slot.is_none()).count();
        if skipped > 0 {
            log::debug!("Skipped {} unreadable images", skipped);
        }

        // Trailing gaps would only add blank rows
        while let Some(None) = slots.last() {
            slots.pop();
        }

        Grid::Thumbnails(slots)
    }

    /// Number of thumbnails actually shown
    pub fn thumbnail_count(&self) -> usize {
        match self {
            Grid::Thumbnails(slots) => slots.iter().flatten().count(),
            _ => 0,
        }
    }

    /// Slots grouped into rows of `GRID_COLUMNS`: slot `i` is at row
    /// `i / GRID_COLUMNS`, column `i % GRID_COLUMNS`
    pub fn rows(&self) -> Vec<&[Option<Thumbnail>]> {
        match self {
            Grid::Thumbnails(slots) => slots.chunks(GRID_COLUMNS).collect(),
            _ => Vec::new(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        match self {
            Grid::Empty => column![].into(),
            Grid::NoMatches { keyword } => {
                container(text(format!("no images found containing '{}'", keyword)))
                    .padding(5)
                    .into()
            }
            Grid::Thumbnails(_) => {
                let rows = self.rows().into_iter().map(|row| {
                    Element::from(Row::with_children(row.iter().map(slot)).spacing(10))
                });

                Column::with_children(rows).spacing(8).padding(5).into()
            }
        }
    }
}

/// A thumbnail cell, or a blank of the same width for a skipped file
fn slot(thumb: &Option<Thumbnail>) -> Element<Message> {
    match thumb {
        Some(thumb) => cell(thumb),
        None => Space::with_width(Length::Fixed(THUMBNAIL_SIZE as f32)).into(),
    }
}

/// Clickable thumbnail with its filename underneath
fn cell(thumb: &Thumbnail) -> Element<Message> {
    let cell_width = Length::Fixed(THUMBNAIL_SIZE as f32);

    let picture = button(
        Image::new(thumb.handle.clone())
            .width(thumb.width as f32)
            .height(thumb.height as f32),
    )
    .on_press(Message::CopyImage(thumb.entry.path.clone()))
    .padding(2)
    .style(button::text);

    column![
        container(picture)
            .height(Length::Fixed(THUMBNAIL_SIZE as f32 + 4.0))
            .center_x(cell_width),
        text(&thumb.entry.filename)
            .size(CAPTION_SIZE)
            .width(cell_width),
    ]
    .spacing(2)
    .align_x(Alignment::Center)
    .into()
}
