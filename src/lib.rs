// SPDX-License-Identifier: MPL-2.0
//! `iced_slides` holds the view state of the slides shown by a paged media
//! viewer built with the Iced GUI framework.
//!
//! An [`ImageSlide`](slide::ImageSlide) owns pinch and double-tap zoom,
//! content-mode-aware sizing and an asynchronous load/release lifecycle that
//! stays correct when a slide is released while its image is still loading.
//! A [`VideoSlide`](slide::VideoSlide) embeds a player and hands a thumbnail
//! surface to the container for cross-fade transitions. Both are driven
//! through the [`Slide`](slide::Slide) trait.

#![doc(html_root_url = "https://docs.rs/iced_slides/0.1.0")]

pub mod config;
pub mod error;
pub mod media;
pub mod slide;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
