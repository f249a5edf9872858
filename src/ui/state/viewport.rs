// SPDX-License-Identifier: MPL-2.0
//! Viewport state management
//!
//! Handles the zoomable viewport of a slide: frame extent, content size,
//! centering insets and scroll offset, plus the sizing math they rely on.

use iced::{Padding, Size, Vector};

/// Size of `content` scaled to fit inside `viewport` while keeping its
/// aspect ratio.
///
/// Content relatively wider than the viewport is constrained by the viewport
/// width, anything else by its height. Degenerate sizes yield the viewport.
#[must_use]
pub fn aspect_fit(content: Size, viewport: Size) -> Size {
    if content.width <= 0.0 || content.height <= 0.0 || viewport.height <= 0.0 {
        return viewport;
    }

    let content_ratio = content.width / content.height;
    let viewport_ratio = viewport.width / viewport.height;

    if content_ratio > viewport_ratio {
        Size::new(
            viewport.width,
            viewport.width / content.width * content.height,
        )
    } else {
        Size::new(
            viewport.height / content.height * content.width,
            viewport.height,
        )
    }
}

/// Whether `content` covers `viewport` in both dimensions. An exact fit counts.
#[must_use]
pub fn covers(content: Size, viewport: Size) -> bool {
    content.width >= viewport.width && content.height >= viewport.height
}

/// Symmetric insets that center `content` inside `viewport`.
///
/// Each side gets half the slack of its axis, never negative. Content covering
/// the viewport gets no insets at all.
#[must_use]
pub fn centering_insets(content: Size, viewport: Size) -> Padding {
    if covers(content, viewport) {
        return Padding::ZERO;
    }

    let horizontal = ((viewport.width - content.width) / 2.0).max(0.0);
    let vertical = ((viewport.height - content.height) / 2.0).max(0.0);

    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

/// Manages viewport geometry of a zoomable slide.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    /// Frame used by the current layout pass.
    pub frame: Size,

    /// Frame recorded by the previous layout pass (zero before the first).
    pub last_frame: Size,

    /// Unzoomed size of the content wrapper.
    pub wrapper_size: Size,

    /// Scrollable extent (wrapper size at the current zoom scale).
    pub content_size: Size,

    /// Insets centering the content inside the frame.
    pub insets: Padding,

    /// Current scroll offset.
    pub offset: Vector,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            frame: Size::ZERO,
            last_frame: Size::ZERO,
            wrapper_size: Size::ZERO,
            content_size: Size::ZERO,
            insets: Padding::ZERO,
            offset: Vector::new(0.0, 0.0),
        }
    }
}

impl ViewportState {
    /// Whether any layout pass has recorded a frame yet.
    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frame.width > 0.0 && self.frame.height > 0.0
    }

    /// Whether the frame differs from the one recorded by the previous pass.
    #[must_use]
    pub fn frame_changed(&self) -> bool {
        self.frame != self.last_frame
    }

    /// Remembers the current frame for change detection on the next pass.
    pub fn record_frame(&mut self) {
        self.last_frame = self.frame;
    }

    /// Wrapper size scaled by `scale`.
    #[must_use]
    pub fn displayed_size(&self, scale: f32) -> Size {
        Size::new(self.wrapper_size.width * scale, self.wrapper_size.height * scale)
    }

    /// Updates content size and insets for the wrapper shown at `scale`, and
    /// keeps the offset within the new scrollable range.
    pub fn apply_scale(&mut self, scale: f32) {
        let displayed = self.displayed_size(scale);
        self.content_size = displayed;
        self.insets = centering_insets(displayed, self.frame);
        self.set_offset(self.offset);
    }

    /// Whether the content covers the whole frame.
    #[must_use]
    pub fn is_full_screen(&self) -> bool {
        covers(self.content_size, self.frame)
    }

    /// Largest offset reachable by panning.
    #[must_use]
    pub fn max_offset(&self) -> Vector {
        Vector::new(
            (self.content_size.width - self.frame.width).max(0.0),
            (self.content_size.height - self.frame.height).max(0.0),
        )
    }

    /// Sets the scroll offset, clamped to the scrollable range.
    pub fn set_offset(&mut self, offset: Vector) {
        let max = self.max_offset();
        self.offset = Vector::new(offset.x.clamp(0.0, max.x), offset.y.clamp(0.0, max.y));
    }

    /// Scrolls to the middle of the content.
    pub fn center_offset(&mut self) {
        let max = self.max_offset();
        self.offset = Vector::new(max.x / 2.0, max.y / 2.0);
    }

    pub fn reset_offset(&mut self) {
        self.offset = Vector::new(0.0, 0.0);
    }
}
