// SPDX-License-Identifier: MPL-2.0
//! Overlay display collaborator.
//!
//! Stacks a dimmed backdrop and centered content over the base view. The
//! lightbox only supplies content; show/hide and presentation live here.

use iced::widget::{center, container, mouse_area, opaque, stack};
use iced::{Color, Element};

/// Shows `content` centered over `base` behind a dimmed, click-to-dismiss
/// backdrop. Clicking outside the content emits `on_blur`.
pub fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}
