// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery grid and the
//! lightbox overlay.
//!
//! The `App` struct wires together the gallery model, the lightbox widget,
//! and persisted preferences, and translates messages into side effects like
//! gallery loading or dimension probing. Policy decisions (window sizing,
//! which element identifiers the overlay is registered with, what gets
//! persisted) stay close to the main update loop so user-facing behavior is
//! easy to audit.

use crate::config;
use crate::error::Error;
use crate::gallery::Gallery;
use crate::ui::grid;
use crate::ui::lightbox;
use crate::ui::modal::modal;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{keyboard, Alignment, Element, Length, Subscription, Task, Theme};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct Flags {
    /// Optional gallery path (folder or manifest) to open on startup.
    pub gallery_path: Option<String>,
    /// Optional theme override (`light`, `dark`, `system`).
    pub theme: Option<String>,
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 640;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

// Overlay markup wiring handed to the lightbox at registration.
const LIGHTBOX_CONTAINER_ID: &str = "lightbox";
const LIGHTBOX_IMAGE_ID: &str = "lightbox-image";
const LIGHTBOX_PREV_ID: &str = "lightbox-prev";
const LIGHTBOX_NEXT_ID: &str = "lightbox-next";

/// Root Iced application state.
pub struct App {
    gallery: Gallery,
    gallery_path: Option<PathBuf>,
    lightbox: lightbox::State,
    /// Probed pixel size of the image the lightbox shows.
    shown_dimensions: Option<(u32, u32)>,
    theme_mode: ThemeMode,
    thumbnail_height: u16,
    status: String,
}

/// Top-level application messages.
#[derive(Debug, Clone)]
pub enum Message {
    Grid(grid::Message),
    Lightbox(lightbox::Message),
    GalleryLoaded {
        path: PathBuf,
        result: Result<Gallery, Error>,
    },
    DimensionsProbed {
        path: PathBuf,
        dimensions: Option<(u32, u32)>,
    },
    OpenFolderRequested,
    ReloadRequested,
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run_with(move || App::new(flags))
}

impl Default for App {
    fn default() -> Self {
        Self {
            gallery: Gallery::new(),
            gallery_path: None,
            lightbox: lightbox::State::default(),
            shown_dimensions: None,
            theme_mode: ThemeMode::System,
            thumbnail_height: config::DEFAULT_THUMBNAIL_HEIGHT,
            status: String::from("No gallery loaded."),
        }
    }
}

impl App {
    /// Initializes application state and kicks off asynchronous gallery
    /// loading based on `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let cfg = config::load().unwrap_or_default();

        let mut app = App::default();
        app.theme_mode = flags
            .theme
            .as_deref()
            .and_then(ThemeMode::parse)
            .unwrap_or(cfg.theme_mode);
        app.thumbnail_height = config::clamp_thumbnail_height(
            cfg.thumbnail_height
                .unwrap_or(config::DEFAULT_THUMBNAIL_HEIGHT),
        );

        app.lightbox.register(lightbox::Config {
            container_id: LIGHTBOX_CONTAINER_ID.into(),
            image_id: LIGHTBOX_IMAGE_ID.into(),
            prev_id: LIGHTBOX_PREV_ID.into(),
            next_id: LIGHTBOX_NEXT_ID.into(),
        });

        let startup_path = flags
            .gallery_path
            .map(PathBuf::from)
            .or(cfg.last_gallery);

        let task = match startup_path {
            Some(path) => {
                app.status = format!("Loading {}...", path.display());
                load_gallery_task(path)
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        match &self.gallery_path {
            Some(path) => format!("AlbumLens - {}", path.display()),
            None => String::from("AlbumLens"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        // Keyboard navigation only makes sense while the overlay is open.
        if self.lightbox.is_open() {
            keyboard::on_key_press(|key, _modifiers| match key.as_ref() {
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    Some(Message::Lightbox(lightbox::Message::Previous))
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                    Some(Message::Lightbox(lightbox::Message::Next))
                }
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    Some(Message::Lightbox(lightbox::Message::Close))
                }
                _ => None,
            })
        } else {
            Subscription::none()
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Grid(grid::Message::ImageClicked(index)) => {
                // The single delegated click arm: the lightbox itself decides
                // whether the clicked image participates in an album.
                let Some(entry) = self.gallery.get(index).cloned() else {
                    return Task::none();
                };
                match self.lightbox.open(&self.gallery, &entry) {
                    lightbox::Effect::Opened => {
                        self.shown_dimensions = None;
                        self.probe_shown_dimensions()
                    }
                    _ => Task::none(),
                }
            }
            Message::Lightbox(msg) => match self.lightbox.handle(msg) {
                lightbox::Effect::Navigated => {
                    self.shown_dimensions = None;
                    self.probe_shown_dimensions()
                }
                _ => Task::none(),
            },
            Message::GalleryLoaded { path, result } => {
                match result {
                    Ok(gallery) => {
                        self.status = gallery_summary(&gallery);
                        self.gallery = gallery;
                        self.gallery_path = Some(path.clone());
                        remember_gallery(&path);
                    }
                    Err(err) => {
                        eprintln!("Failed to load gallery: {}", err);
                        self.status = format!("Failed to load gallery: {}", err);
                    }
                }
                Task::none()
            }
            Message::DimensionsProbed { path, dimensions } => {
                // Ignore probes that finished after the user moved on.
                if self.lightbox.shown().is_some_and(|entry| entry.path == path) {
                    self.shown_dimensions = dimensions;
                }
                Task::none()
            }
            Message::OpenFolderRequested => {
                let folder = rfd::FileDialog::new()
                    .set_title("Select Gallery Folder")
                    .pick_folder();

                match folder {
                    Some(path) => {
                        self.status = format!("Loading {}...", path.display());
                        load_gallery_task(path)
                    }
                    None => Task::none(),
                }
            }
            Message::ReloadRequested => match self.gallery_path.clone() {
                Some(path) => {
                    self.status = format!("Reloading {}...", path.display());
                    load_gallery_task(path)
                }
                None => Task::none(),
            },
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let toolbar = row![
            text("AlbumLens").size(20),
            horizontal_space(),
            button("Open Folder...").on_press(Message::OpenFolderRequested),
            button("Reload").on_press(Message::ReloadRequested),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let base = column![
            container(toolbar).padding(12).width(Length::Fill),
            grid::view(&self.gallery, self.thumbnail_height).map(Message::Grid),
            container(text(&self.status).size(13)).padding(8),
        ];

        match self.lightbox.view(self.shown_dimensions) {
            Some(overlay) => modal(
                base,
                overlay.map(Message::Lightbox),
                Message::Lightbox(lightbox::Message::Close),
            ),
            None => base.into(),
        }
    }

    fn probe_shown_dimensions(&self) -> Task<Message> {
        match self.lightbox.shown() {
            Some(entry) => {
                let path = entry.path.clone();
                Task::perform(probe_dimensions(path.clone()), move |dimensions| {
                    Message::DimensionsProbed {
                        path: path.clone(),
                        dimensions,
                    }
                })
            }
            None => Task::none(),
        }
    }
}

fn load_gallery_task(path: PathBuf) -> Task<Message> {
    let load_path = path.clone();
    Task::perform(
        async move {
            let target = load_path.clone();
            tokio::task::spawn_blocking(move || Gallery::load(&target))
                .await
                .unwrap_or_else(|err| Err(Error::Gallery(err.to_string())))
        },
        move |result| Message::GalleryLoaded {
            path: path.clone(),
            result,
        },
    )
}

/// Reads image dimensions off the UI thread; header-only, no full decode.
async fn probe_dimensions(path: PathBuf) -> Option<(u32, u32)> {
    tokio::task::spawn_blocking(move || image_rs::image_dimensions(&path).ok())
        .await
        .ok()
        .flatten()
}

fn gallery_summary(gallery: &Gallery) -> String {
    let albums: BTreeSet<&str> = gallery
        .entries()
        .iter()
        .filter_map(|entry| entry.album.as_deref())
        .collect();
    format!(
        "{} images, {} albums.",
        gallery.len(),
        albums.len()
    )
}

fn remember_gallery(path: &Path) {
    let mut cfg = config::load().unwrap_or_default();
    cfg.last_gallery = Some(path.to_path_buf());
    if let Err(err) = config::save(&cfg) {
        eprintln!("Failed to persist settings: {}", err);
    }
}
