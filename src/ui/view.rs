// SPDX-License-Identifier: MPL-2.0
//! Iced rendering of slide surfaces.

use crate::slide::{ImageSlide, ImageSurface};
use iced::widget::{container, image, Column};
use iced::{Border, Element, Length};

/// Renders a surface at its frame size, clipped to its corner radius.
/// Hidden surfaces and surfaces without an image render empty.
pub fn surface<'a, Message: 'a>(surface: &'a ImageSurface) -> Element<'a, Message> {
    let frame = surface.frame();
    let radius = surface.layer().corner_radius();

    let content: Element<'a, Message> = match surface.image() {
        Some(data) if !surface.is_hidden() => image(data.handle.clone())
            .width(Length::Fixed(frame.width))
            .height(Length::Fixed(frame.height))
            .content_fit(surface.content_mode().content_fit())
            .into(),
        _ => Column::new()
            .width(Length::Fixed(frame.width))
            .height(Length::Fixed(frame.height))
            .into(),
    };

    container(content)
        .clip(radius > 0.0)
        .style(move |_theme| container::Style {
            border: Border {
                radius: radius.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

/// Renders an image slide: its surface, centered by the viewport insets.
pub fn image_slide<'a, Message: 'a>(slide: &'a ImageSlide) -> Element<'a, Message> {
    container(surface(slide.surface()))
        .padding(slide.viewport().insets)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
