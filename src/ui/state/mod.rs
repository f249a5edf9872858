// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Zoom and viewport state are kept apart from the slides that own them so
//! the math can be exercised on its own.

pub mod viewport;
pub mod zoom;

// Re-export commonly used types for convenience
pub use viewport::ViewportState;
pub use zoom::{MaxZoomScale, ZoomState};
