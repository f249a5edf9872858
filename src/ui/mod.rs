// SPDX-License-Identifier: MPL-2.0
//! Presentation-side state and rendering of slides.
//!
//! - [`state`] - Zoom and viewport state with the sizing math
//! - [`activity`] - Loading indicator shown by image slides
//! - [`view`] - Iced elements for slide surfaces

pub mod activity;
pub mod state;
pub mod view;
