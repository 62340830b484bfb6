// SPDX-License-Identifier: MPL-2.0
//! Lightbox sub-component: an album carousel shown in an overlay.
//!
//! Clicking any gallery image that carries an album tag opens the overlay on
//! that image; previous/next cycle through the album with wrap-around. The
//! album is re-queried from the gallery on every open rather than cached, so
//! gallery reloads between opens need no invalidation logic.
//!
//! The component owns its state explicitly and only supplies overlay
//! *content*; presentation (backdrop, centering) is [`super::modal`]'s job.

use crate::gallery::{Gallery, ImageEntry};
use iced::widget::{button, column, container, image, row, text};
use iced::{Alignment, Element, Length};

/// Element identifiers wiring the lightbox to the overlay markup the caller
/// provides: the overlay container, the image display element, and the
/// previous/next controls, all scoped within the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub container_id: String,
    pub image_id: String,
    pub prev_id: String,
    pub next_id: String,
}

impl Config {
    fn is_complete(&self) -> bool {
        ![
            &self.container_id,
            &self.image_id,
            &self.prev_id,
            &self.next_id,
        ]
        .iter()
        .any(|id| id.trim().is_empty())
    }
}

/// Lightbox sub-component state.
///
/// Invariant: while the overlay is open and an image is shown,
/// `current` is `Some(i)` with `i < album.len()`. Both fields are
/// meaningless while the overlay is closed.
#[derive(Debug, Clone, Default)]
pub struct State {
    config: Option<Config>,
    album: Vec<ImageEntry>,
    current: Option<usize>,
    visible: bool,
}

/// Messages for the lightbox sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Show the previous album image, wrapping to the last.
    Previous,
    /// Show the next album image, wrapping to the first.
    Next,
    /// Hide the overlay.
    Close,
}

/// Effects produced by lightbox changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Overlay opened on a freshly queried album.
    Opened,
    /// Shown image changed through navigation.
    Navigated,
    /// Overlay closed.
    Closed,
}

impl State {
    /// Registers the lightbox against the caller's overlay markup.
    ///
    /// Idempotent: a second registration is ignored and the first config
    /// wins. A config with a blank identifier means the markup is missing a
    /// required element, so registration silently does nothing.
    pub fn register(&mut self, config: Config) {
        if self.config.is_some() || !config.is_complete() {
            return;
        }
        self.config = Some(config);
    }

    /// Whether a registration has taken effect.
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.config.is_some()
    }

    /// Opens the overlay for a clicked gallery image.
    ///
    /// Acts as the delegation filter: clicks on untagged images are ignored.
    /// The album is queried fresh from the gallery in document order and the
    /// clicked entry's position becomes the current index. A clicked entry
    /// absent from the query (a stale click after a reload) still opens the
    /// overlay but shows nothing.
    pub fn open(&mut self, gallery: &Gallery, clicked: &ImageEntry) -> Effect {
        if !self.is_registered() {
            return Effect::None;
        }
        let Some(tag) = clicked.album.as_deref() else {
            return Effect::None;
        };

        self.album = gallery.album_entries(tag);
        self.current = self.album.iter().position(|entry| entry.path == clicked.path);
        self.visible = true;
        Effect::Opened
    }

    /// Handles a lightbox message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::Previous => self.step_previous(),
            Message::Next => self.step_next(),
            Message::Close => {
                if !self.visible {
                    return Effect::None;
                }
                self.visible = false;
                Effect::Closed
            }
        }
    }

    fn step_next(&mut self) -> Effect {
        // Empty album: nothing to cycle through, and no modulo by zero.
        if !self.visible || self.album.is_empty() {
            return Effect::None;
        }
        let len = self.album.len();
        self.current = Some(match self.current {
            Some(index) => (index + 1) % len,
            None => 0,
        });
        Effect::Navigated
    }

    fn step_previous(&mut self) -> Effect {
        if !self.visible || self.album.is_empty() {
            return Effect::None;
        }
        let len = self.album.len();
        self.current = Some(match self.current {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        });
        Effect::Navigated
    }

    /// Whether the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.visible
    }

    /// Index of the shown image within the album, if one is shown.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Number of images in the current album snapshot.
    #[must_use]
    pub fn album_len(&self) -> usize {
        self.album.len()
    }

    /// The entry whose image the overlay displays, if any.
    #[must_use]
    pub fn shown(&self) -> Option<&ImageEntry> {
        self.current.and_then(|index| self.album.get(index))
    }

    /// Overlay content: the full-size image with navigation controls.
    ///
    /// Returns `None` while closed. `dimensions` is the probed pixel size of
    /// the shown image, if the probe has completed.
    pub fn view(&self, dimensions: Option<(u32, u32)>) -> Option<Element<'_, Message>> {
        if !self.visible {
            return None;
        }
        let config = self.config.as_ref()?;

        let display: Element<'_, Message> = match self.shown() {
            Some(entry) => image(image::Handle::from_path(&entry.path))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => text("No image to display").size(18).into(),
        };

        let caption = match (self.shown(), self.current) {
            (Some(entry), Some(index)) => {
                let mut line =
                    format!("{} ({}/{})", entry.display_name(), index + 1, self.album.len());
                if let Some((width, height)) = dimensions {
                    line.push_str(&format!(" - {}x{}", width, height));
                }
                line
            }
            _ => String::new(),
        };

        let controls = row![
            button(text("‹").size(28))
                .on_press(Message::Previous)
                .padding(10),
            text(caption)
                .size(14)
                .width(Length::Fill)
                .align_x(Alignment::Center),
            button(text("›").size(28))
                .on_press(Message::Next)
                .padding(10),
        ]
        .spacing(12)
        .align_y(Alignment::Center);

        let content = column![
            row![
                iced::widget::horizontal_space(),
                button(text("×").size(20)).on_press(Message::Close).padding(6),
            ],
            container(display)
                .width(Length::Fill)
                .height(Length::Fill)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
            controls,
        ]
        .spacing(8)
        .padding(12);

        Some(
            container(content)
                .id(container::Id::new(config.container_id.clone()))
                .width(Length::Fixed(900.0))
                .height(Length::Fixed(640.0))
                .style(container::rounded_box)
                .into(),
        )
    }
}
