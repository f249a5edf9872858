// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! This module handles the zoom scale of an image slide:
//! - Scale bounds (minimum fixed at 1.0, configurable maximum)
//! - Min/max toggling for double tap
//! - Whether the last change should be animated

pub use crate::config::{DEFAULT_MAX_ZOOM_SCALE, MAX_ZOOM_SCALE_LIMIT, MIN_ZOOM_SCALE};

/// Configured maximum zoom scale, guaranteed to be within `1.0..=8.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxZoomScale(f32);

impl MaxZoomScale {
    /// Creates a maximum scale, clamping the value to the valid range.
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if scale.is_finite() {
            Self(scale.clamp(MIN_ZOOM_SCALE, MAX_ZOOM_SCALE_LIMIT))
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for MaxZoomScale {
    fn default() -> Self {
        Self(DEFAULT_MAX_ZOOM_SCALE)
    }
}

/// Manages the zoom scale of a slide viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    scale: f32,
    minimum: f32,
    maximum: f32,
    /// Whether the most recent scale change asked for animation.
    last_change_animated: bool,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(MaxZoomScale::default())
    }
}

impl ZoomState {
    #[must_use]
    pub fn new(maximum: MaxZoomScale) -> Self {
        Self {
            scale: MIN_ZOOM_SCALE,
            minimum: MIN_ZOOM_SCALE,
            maximum: maximum.value(),
            last_change_animated: false,
        }
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn minimum(&self) -> f32 {
        self.minimum
    }

    #[must_use]
    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    #[must_use]
    pub fn last_change_animated(&self) -> bool {
        self.last_change_animated
    }

    /// Whether the scale is above the minimum.
    #[must_use]
    pub fn is_zoomed_in(&self) -> bool {
        self.scale > self.minimum + f32::EPSILON
    }

    /// Sets the scale, clamped to the current bounds.
    /// Returns true if the scale changed.
    pub fn set_scale(&mut self, scale: f32, animated: bool) -> bool {
        let clamped = if scale.is_finite() {
            scale.clamp(self.minimum, self.maximum)
        } else {
            self.minimum
        };
        let changed = (clamped - self.scale).abs() > f32::EPSILON;
        self.scale = clamped;
        self.last_change_animated = animated;
        changed
    }

    pub fn zoom_to_minimum(&mut self, animated: bool) -> bool {
        self.set_scale(self.minimum, animated)
    }

    pub fn zoom_to_maximum(&mut self, animated: bool) -> bool {
        self.set_scale(self.maximum, animated)
    }

    /// Double-tap behavior: back to minimum when zoomed in, otherwise to maximum.
    pub fn toggle(&mut self, animated: bool) -> bool {
        if self.is_zoomed_in() {
            self.zoom_to_minimum(animated)
        } else {
            self.zoom_to_maximum(animated)
        }
    }

    /// Replaces the maximum, pulling the current scale down if needed.
    pub fn set_maximum(&mut self, maximum: MaxZoomScale) {
        self.maximum = maximum.value();
        if self.scale > self.maximum {
            self.scale = self.maximum;
        }
    }
}
