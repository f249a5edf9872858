// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Zoom scale bounds for image slides
//! - **Presentation**: Corner radius and content mode
//! - **Loading**: Activity indicator timing

use crate::slide::ContentMode;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Minimum zoom scale of an image slide (1.0 = content fitted to the viewport).
pub const MIN_ZOOM_SCALE: f32 = 1.0;

/// Default maximum zoom scale reached by double tap.
pub const DEFAULT_MAX_ZOOM_SCALE: f32 = 2.0;

/// Upper bound accepted for a configured maximum zoom scale.
pub const MAX_ZOOM_SCALE_LIMIT: f32 = 8.0;

/// Zoom is enabled on image slides unless configured otherwise.
pub const DEFAULT_ZOOM_ENABLED: bool = true;

// ==========================================================================
// Presentation Defaults
// ==========================================================================

/// Default corner radius of slide layers (square corners).
pub const DEFAULT_CORNER_RADIUS: f32 = 0.0;

/// Default content mode for new slides.
pub const DEFAULT_CONTENT_MODE: ContentMode = ContentMode::AspectFit;

// ==========================================================================
// Loading Defaults
// ==========================================================================

/// Seconds before a visible activity indicator reports a stuck load.
pub const LOADING_TIMEOUT_SECS: u64 = 10;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_ZOOM_SCALE > 0.0);
    assert!(DEFAULT_MAX_ZOOM_SCALE >= MIN_ZOOM_SCALE);
    assert!(MAX_ZOOM_SCALE_LIMIT >= DEFAULT_MAX_ZOOM_SCALE);
    assert!(DEFAULT_CORNER_RADIUS >= 0.0);
    assert!(LOADING_TIMEOUT_SECS > 0);
};
