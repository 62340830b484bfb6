// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages
//! up" pattern.
//!
//! - [`grid`] - thumbnail grid over the gallery
//! - [`lightbox`] - album carousel sub-component (state + overlay content)
//! - [`modal`] - overlay presentation collaborator
//! - [`theming`] - Light/Dark/System theme mode management

pub mod grid;
pub mod lightbox;
pub mod modal;
pub mod theming;
