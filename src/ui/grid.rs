// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid over the gallery entries.
//!
//! Every thumbnail is clickable; only the app's single delegated message arm
//! decides whether a click opens the lightbox (untagged images never do).

use crate::gallery::{Gallery, ImageEntry};
use iced::widget::{button, column, container, image, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

/// Thumbnails per grid row.
const COLUMNS: usize = 4;

/// Messages emitted by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A thumbnail was clicked; carries the gallery index.
    ImageClicked(usize),
}

/// Builds the scrollable thumbnail grid.
pub fn view(gallery: &Gallery, thumbnail_height: u16) -> Element<'_, Message> {
    if gallery.is_empty() {
        return container(
            text("No images. Open a folder or a gallery.toml manifest.").size(16),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into();
    }

    let mut grid = Column::new().spacing(12);
    for (row_index, chunk) in gallery.entries().chunks(COLUMNS).enumerate() {
        let mut grid_row = Row::new().spacing(12);
        for (offset, entry) in chunk.iter().enumerate() {
            let index = row_index * COLUMNS + offset;
            grid_row = grid_row.push(thumbnail(entry, index, thumbnail_height));
        }
        grid = grid.push(grid_row);
    }

    scrollable(
        container(grid)
            .padding(16)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .height(Length::Fill)
    .into()
}

fn thumbnail(entry: &ImageEntry, index: usize, height: u16) -> Element<'_, Message> {
    let badge = match &entry.album {
        Some(tag) => format!("album: {tag}"),
        None => String::new(),
    };

    let card = column![
        image(image::Handle::from_path(&entry.path)).height(Length::Fixed(f32::from(height))),
        text(entry.display_name()).size(13),
        text(badge).size(11),
    ]
    .spacing(4)
    .align_x(Alignment::Center);

    button(card)
        .on_press(Message::ImageClicked(index))
        .style(button::text)
        .padding(4)
        .into()
}
