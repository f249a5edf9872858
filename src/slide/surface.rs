// SPDX-License-Identifier: MPL-2.0
//! Image-bearing surface shared by slides and transitions.

use super::layer::{Layer, LayerKind};
use super::ContentMode;
use crate::media::{ImageData, SurfaceId};
use iced::{Point, Rectangle, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessibilityRole {
    Image,
}

/// Accessibility metadata exposed to assistive technologies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessibility {
    pub is_element: bool,
    pub role: AccessibilityRole,
}

impl Default for Accessibility {
    fn default() -> Self {
        Self {
            is_element: true,
            role: AccessibilityRole::Image,
        }
    }
}

/// A rectangle that shows at most one image.
#[derive(Debug, Clone)]
pub struct ImageSurface {
    id: SurfaceId,
    image: Option<ImageData>,
    frame: Rectangle,
    content_mode: ContentMode,
    hidden: bool,
    layer: Layer,
    accessibility: Accessibility,
}

impl ImageSurface {
    #[must_use]
    pub fn new(content_mode: ContentMode) -> Self {
        Self {
            id: SurfaceId::next(),
            image: None,
            frame: Rectangle::new(Point::ORIGIN, Size::ZERO),
            content_mode,
            hidden: false,
            layer: Layer::new(LayerKind::Image),
            accessibility: Accessibility::default(),
        }
    }

    /// A surface that stays attached but invisible.
    #[must_use]
    pub fn hidden(content_mode: ContentMode) -> Self {
        Self {
            hidden: true,
            ..Self::new(content_mode)
        }
    }

    #[must_use]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn set_image(&mut self, image: Option<ImageData>) {
        self.image = image;
    }

    #[must_use]
    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub fn set_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
    }

    #[must_use]
    pub fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    pub fn set_content_mode(&mut self, mode: ContentMode) {
        self.content_mode = mode;
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    #[must_use]
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut Layer {
        &mut self.layer
    }

    #[must_use]
    pub fn accessibility(&self) -> &Accessibility {
        &self.accessibility
    }
}
