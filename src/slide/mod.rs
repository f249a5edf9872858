// SPDX-License-Identifier: MPL-2.0
//! Slides shown by a paging media container.
//!
//! A slide is one page of the viewer, backed either by an image
//! ([`ImageSlide`]) or by an embedded video player ([`VideoSlide`]). The
//! container drives every slide through the [`Slide`] trait:
//!
//! ```text
//! container
//!     ├── load_media()            slide became nearby/visible
//!     ├── layout(frame)           size changed
//!     ├── did_appear()            visibility edges
//!     ├── did_disappear()
//!     ├── transition_surface()    cross-fade between slides
//!     ├── will_be_removed()       leaving the pool
//!     └── release_media()         reclaim memory
//! ```

pub mod gesture;
pub mod image_slide;
pub mod layer;
pub mod surface;
pub mod video_slide;

pub use gesture::TapGesture;
pub use image_slide::{ImageSlide, ImageSlideOptions};
pub use layer::{Layer, LayerKind};
pub use surface::{Accessibility, AccessibilityRole, ImageSurface};
pub use video_slide::{VideoGravity, VideoPlayer, VideoSlide, VideoSlideDelegate};

use iced::{ContentFit, Size, Vector};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SLIDE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a slide, stable for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlideId(u64);

impl SlideId {
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_SLIDE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slide#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Image,
    Video,
}

/// Policy for fitting media into its viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentMode {
    /// Whole content visible, aspect ratio kept.
    #[default]
    AspectFit,
    /// Viewport covered, aspect ratio kept, overflow cropped.
    AspectFill,
    /// Stretched to the viewport.
    Fill,
    /// Natural size, centered.
    Center,
}

/// How an image slide sizes its content wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizingPolicy {
    /// Wrapper takes the aspect-fitted size of the image.
    FitImage,
    /// Wrapper matches the viewport.
    FillViewport,
}

impl ContentMode {
    #[must_use]
    pub fn sizing_policy(self) -> SizingPolicy {
        match self {
            ContentMode::AspectFit => SizingPolicy::FitImage,
            ContentMode::AspectFill | ContentMode::Fill | ContentMode::Center => {
                SizingPolicy::FillViewport
            }
        }
    }

    /// Equivalent iced fit for rendering.
    #[must_use]
    pub fn content_fit(self) -> ContentFit {
        match self {
            ContentMode::AspectFit => ContentFit::Contain,
            ContentMode::AspectFill => ContentFit::Cover,
            ContentMode::Fill => ContentFit::Fill,
            ContentMode::Center => ContentFit::None,
        }
    }
}

impl FromStr for ContentMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "aspect-fit" | "fit" => Ok(ContentMode::AspectFit),
            "aspect-fill" | "cover" => Ok(ContentMode::AspectFill),
            "fill" | "stretch" => Ok(ContentMode::Fill),
            "center" => Ok(ContentMode::Center),
            other => Err(format!("unknown content mode: {other}")),
        }
    }
}

/// Load lifecycle of a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// User interaction routed to a slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    SingleTap,
    DoubleTap,
    /// Pinch gesture reporting an absolute zoom scale.
    Pinch { scale: f32 },
    /// Pan gesture reporting an absolute content offset.
    Pan { offset: Vector },
}

/// Outcome of feeding an event to a slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// A retry load was issued after a tap on a failed slide.
    RetryRequested,
    /// The image arrived and is displayed.
    Loaded,
    /// The source produced no image.
    LoadFailed,
    /// A load finished after release and its result was dropped.
    StaleResultDiscarded,
    /// A cancelled load ended without an image; the slide is idle again.
    LoadCancelled,
    /// The load has been outstanding longer than the indicator timeout.
    LoadingTimedOut,
    ZoomChanged { scale: f32, animated: bool },
    OffsetChanged,
}

/// Capability set every slide exposes to its container.
pub trait Slide {
    fn id(&self) -> SlideId;

    fn kind(&self) -> SlideKind;

    /// Starts loading media if nothing is displayed or in flight.
    fn load_media(&mut self);

    /// Drops displayed media and cancels any load in flight.
    fn release_media(&mut self);

    /// Called when the slide leaves the pool without being discarded.
    fn will_be_removed(&mut self);

    fn did_appear(&mut self);

    fn did_disappear(&mut self);

    /// Lays the slide out inside `frame`.
    fn layout(&mut self, frame: Size);

    /// Routes a user interaction to the slide.
    fn handle(&mut self, interaction: Interaction) -> Effect;

    /// Applies a finished load, if any.
    fn poll_media(&mut self) -> Effect {
        Effect::None
    }

    /// Surface the container animates during slide transitions.
    fn transition_surface(&mut self) -> &ImageSurface;

    fn content_mode(&self) -> ContentMode;

    fn set_content_mode(&mut self, mode: ContentMode);

    fn corner_radius(&self) -> f32;

    fn set_corner_radius(&mut self, radius: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_aspect_fit_sizes_to_the_image() {
        assert_eq!(ContentMode::AspectFit.sizing_policy(), SizingPolicy::FitImage);
        assert_eq!(ContentMode::AspectFill.sizing_policy(), SizingPolicy::FillViewport);
        assert_eq!(ContentMode::Fill.sizing_policy(), SizingPolicy::FillViewport);
        assert_eq!(ContentMode::Center.sizing_policy(), SizingPolicy::FillViewport);
    }

    #[test]
    fn content_fit_table() {
        assert_eq!(ContentMode::AspectFit.content_fit(), ContentFit::Contain);
        assert_eq!(ContentMode::AspectFill.content_fit(), ContentFit::Cover);
        assert_eq!(ContentMode::Fill.content_fit(), ContentFit::Fill);
        assert_eq!(ContentMode::Center.content_fit(), ContentFit::None);
    }

    #[test]
    fn content_mode_parses_aliases() {
        assert_eq!("aspect-fit".parse(), Ok(ContentMode::AspectFit));
        assert_eq!("Cover".parse(), Ok(ContentMode::AspectFill));
        assert_eq!(" stretch ".parse(), Ok(ContentMode::Fill));
        assert!("tile".parse::<ContentMode>().is_err());
    }

    #[test]
    fn slide_ids_are_unique() {
        assert_ne!(SlideId::next(), SlideId::next());
    }
}
