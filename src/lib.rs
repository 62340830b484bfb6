// SPDX-License-Identifier: MPL-2.0
//! `album_lens` is a small album-aware image gallery built with the Iced GUI
//! framework.
//!
//! Images in a gallery can carry an album tag; clicking a tagged thumbnail
//! opens a lightbox overlay that cycles through the album with wrap-around
//! previous/next navigation. Album membership is re-derived from the live
//! gallery on every open.

pub mod app;
pub mod config;
pub mod error;
pub mod gallery;
pub mod ui;
