// SPDX-License-Identifier: MPL-2.0
//! Zoomable image slide.
//!
//! Owns the zoom/pan viewport, the image surface and the load/release state
//! machine:
//!
//! ```text
//! Idle ──load_media──▶ Loading ──image──▶ Loaded
//!  ▲                      │
//!  │                      ├──empty──▶ Failed ──single tap──▶ Loading
//!  │◀──cancelled, empty───┘
//!  └──────────── release_media (from any state) ◀──────────────┘
//! ```
//!
//! A release during a load does not wait for the source. The `released` flag
//! makes the eventual completion drop its result instead of overwriting the
//! intentionally empty surface. A load cancelled by `will_be_removed` that
//! ends without an image returns to `Idle` rather than `Failed`.

use super::gesture::TapGesture;
use super::layer::{Layer, LayerKind};
use super::surface::ImageSurface;
use super::{
    ContentMode, Effect, Interaction, LoadState, SizingPolicy, Slide, SlideId, SlideKind,
};
use crate::config::{Config, DEFAULT_CORNER_RADIUS, DEFAULT_ZOOM_ENABLED};
use crate::media::{load_request, ImageData, ImageSource, PendingLoad};
use crate::ui::activity::{ActivityIndicator, Spinner, SpinnerEffect};
use crate::ui::state::viewport::aspect_fit;
use crate::ui::state::{MaxZoomScale, ViewportState, ZoomState};
use iced::{Point, Rectangle, Size};
use std::rc::Rc;

/// Construction options of an [`ImageSlide`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSlideOptions {
    pub zoom_enabled: bool,
    pub maximum_zoom_scale: MaxZoomScale,
    /// Snap to the maximum zoom scale whenever the frame changes.
    pub zoom_in_initially: bool,
    pub content_mode: ContentMode,
    pub corner_radius: f32,
    pub activity_indicator: bool,
}

impl Default for ImageSlideOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for ImageSlideOptions {
    fn from(config: &Config) -> Self {
        Self {
            zoom_enabled: config.zoom_enabled.unwrap_or(DEFAULT_ZOOM_ENABLED),
            maximum_zoom_scale: config
                .maximum_zoom_scale
                .map(MaxZoomScale::new)
                .unwrap_or_default(),
            zoom_in_initially: config.zoom_in_initially.unwrap_or(false),
            content_mode: config.content_mode.unwrap_or_default(),
            corner_radius: config.corner_radius.unwrap_or(DEFAULT_CORNER_RADIUS),
            activity_indicator: config.activity_indicator.unwrap_or(true),
        }
    }
}

#[derive(Debug)]
pub struct ImageSlide {
    id: SlideId,
    source: Rc<dyn ImageSource>,
    surface: ImageSurface,
    layer: Layer,
    zoom_enabled: bool,
    zoom_in_initially: bool,
    maximum_zoom_scale: MaxZoomScale,
    zoom: ZoomState,
    viewport: ViewportState,
    load_state: LoadState,
    /// Set by a release; the in-flight completion must discard its result.
    released: bool,
    /// Set when the load in flight was cancelled; an empty result is then
    /// not a failure.
    cancelled: bool,
    pending: Option<PendingLoad>,
    activity_indicator: Option<Box<dyn ActivityIndicator>>,
    retry_tap: TapGesture,
    zoom_tap: TapGesture,
    corner_radius: f32,
}

impl ImageSlide {
    #[must_use]
    pub fn new(source: Rc<dyn ImageSource>, options: ImageSlideOptions) -> Self {
        let activity_indicator: Option<Box<dyn ActivityIndicator>> = if options.activity_indicator
        {
            Some(Box::new(Spinner::default()))
        } else {
            None
        };

        let mut slide = Self {
            id: SlideId::next(),
            source,
            surface: ImageSurface::new(options.content_mode),
            layer: Layer::new(LayerKind::Backing),
            zoom_enabled: options.zoom_enabled,
            zoom_in_initially: options.zoom_in_initially,
            maximum_zoom_scale: options.maximum_zoom_scale,
            zoom: ZoomState::new(options.maximum_zoom_scale),
            viewport: ViewportState::default(),
            load_state: LoadState::Idle,
            released: false,
            cancelled: false,
            pending: None,
            activity_indicator,
            retry_tap: TapGesture::single(false),
            zoom_tap: TapGesture::double(options.zoom_enabled),
            corner_radius: 0.0,
        };
        slide.set_corner_radius(options.corner_radius);
        slide
    }

    /// Replaces the activity indicator shown while loading.
    #[must_use]
    pub fn with_activity_indicator(mut self, indicator: Box<dyn ActivityIndicator>) -> Self {
        self.activity_indicator = Some(indicator);
        self
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.surface.image()
    }

    #[must_use]
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    #[must_use]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    #[must_use]
    pub fn zoom_enabled(&self) -> bool {
        self.zoom_enabled
    }

    #[must_use]
    pub fn zoom_in_initially(&self) -> bool {
        self.zoom_in_initially
    }

    #[must_use]
    pub fn retry_tap(&self) -> TapGesture {
        self.retry_tap
    }

    #[must_use]
    pub fn zoom_tap(&self) -> TapGesture {
        self.zoom_tap
    }

    #[must_use]
    pub fn activity_indicator(&self) -> Option<&dyn ActivityIndicator> {
        self.activity_indicator.as_deref()
    }

    /// Asks the source to stop the load in flight, if any.
    pub fn cancel_pending_load(&mut self) {
        tracing::trace!(slide = %self.id, surface = %self.surface.id(), "cancel pending load");
        if self.pending.is_some() {
            self.cancelled = true;
        }
        self.source.cancel_load(self.surface.id());
    }

    /// Advances the activity indicator. Reports a load that has been
    /// outstanding longer than the indicator's timeout.
    pub fn tick(&mut self) -> Effect {
        if !self.is_loading() {
            return Effect::None;
        }
        let Some(indicator) = self.activity_indicator.as_mut() else {
            return Effect::None;
        };
        match indicator.tick() {
            SpinnerEffect::TimedOut => {
                tracing::warn!(slide = %self.id, surface = %self.surface.id(), "image load timed out");
                Effect::LoadingTimedOut
            }
            SpinnerEffect::None => Effect::None,
        }
    }

    /// Applies the load result if the source has delivered it.
    pub fn poll_load(&mut self) -> Effect {
        let Some(pending) = self.pending.as_mut() else {
            return Effect::None;
        };
        match pending.try_finish() {
            Some(result) => self.finish_load(result),
            None => Effect::None,
        }
    }

    /// Waits for the load in flight and applies its result.
    pub async fn wait_for_load(&mut self) -> Effect {
        let Some(pending) = self.pending.as_mut() else {
            return Effect::None;
        };
        let result = pending.finished().await;
        self.finish_load(result)
    }

    fn finish_load(&mut self, result: Option<ImageData>) -> Effect {
        self.pending = None;
        let cancelled = std::mem::take(&mut self.cancelled);
        if let Some(indicator) = self.activity_indicator.as_mut() {
            indicator.hide();
        }

        if self.released {
            tracing::debug!(slide = %self.id, "load finished after release, result discarded");
            self.surface.set_image(None);
            self.load_state = LoadState::Idle;
            self.set_load_failed(false);
            self.relayout();
            return Effect::StaleResultDiscarded;
        }

        if cancelled && result.is_none() {
            tracing::debug!(slide = %self.id, "cancelled load ended without an image");
            self.load_state = LoadState::Idle;
            self.set_load_failed(false);
            self.relayout();
            return Effect::LoadCancelled;
        }

        let image = result.filter(|image| image.width > 0 && image.height > 0);
        let failed = image.is_none();
        if let Some(image) = image.as_ref() {
            tracing::debug!(slide = %self.id, width = image.width, height = image.height, "image loaded");
        } else {
            tracing::warn!(slide = %self.id, "image source produced no image");
        }

        self.surface.set_image(image);
        self.load_state = if failed {
            LoadState::Failed
        } else {
            LoadState::Loaded
        };
        self.set_load_failed(failed);
        self.relayout();

        if failed {
            Effect::LoadFailed
        } else {
            Effect::Loaded
        }
    }

    /// Failure swaps double-tap zoom for single-tap retry.
    fn set_load_failed(&mut self, failed: bool) {
        self.retry_tap.set_enabled(failed);
        self.zoom_tap.set_enabled(self.zoom_enabled && !failed);
    }

    /// Natural size of the content wrapper for the current frame.
    #[must_use]
    pub fn calculate_picture_size(&self) -> Size {
        let frame = self.viewport.frame;
        match (self.surface.image(), self.surface.content_mode().sizing_policy()) {
            (Some(image), SizingPolicy::FitImage) => aspect_fit(image.size(), frame),
            _ => frame,
        }
    }

    /// Maximum zoom scale allowed for the current content.
    #[must_use]
    pub fn maximum_scale_for_content(&self) -> MaxZoomScale {
        self.maximum_zoom_scale
    }

    fn relayout(&mut self) {
        if self.viewport.has_frame() {
            self.layout(self.viewport.frame);
        } else {
            self.viewport.apply_scale(self.zoom.scale());
        }
    }

    fn apply_zoom(&mut self, changed: bool) -> Effect {
        if !changed {
            return Effect::None;
        }
        self.relayout();
        if self.zoom.is_zoomed_in() {
            self.viewport.center_offset();
        } else {
            self.viewport.reset_offset();
        }
        Effect::ZoomChanged {
            scale: self.zoom.scale(),
            animated: self.zoom.last_change_animated(),
        }
    }
}

impl Slide for ImageSlide {
    fn id(&self) -> SlideId {
        self.id
    }

    fn kind(&self) -> SlideKind {
        SlideKind::Image
    }

    fn load_media(&mut self) {
        if self.surface.has_image() || self.is_loading() {
            tracing::trace!(slide = %self.id, state = ?self.load_state, "load skipped");
            return;
        }

        tracing::debug!(slide = %self.id, surface = %self.surface.id(), "load requested");
        self.load_state = LoadState::Loading;
        self.released = false;
        self.cancelled = false;
        if let Some(indicator) = self.activity_indicator.as_mut() {
            indicator.show();
        }

        let target = self.surface.id();
        let (completion, pending) = load_request(target);
        // Replacing an earlier released request drops its receiver.
        self.pending = Some(pending);
        self.source.load(target, completion);

        // Synchronous sources have already delivered.
        self.poll_load();
    }

    fn release_media(&mut self) {
        tracing::debug!(slide = %self.id, state = ?self.load_state, "media released");
        self.released = true;
        self.cancel_pending_load();
        self.surface.set_image(None);
        self.load_state = LoadState::Idle;
        self.set_load_failed(false);
    }

    fn will_be_removed(&mut self) {
        self.cancel_pending_load();
    }

    fn did_appear(&mut self) {}

    fn did_disappear(&mut self) {
        let changed = self.zoom.zoom_to_minimum(false);
        self.apply_zoom(changed);
    }

    fn layout(&mut self, frame: Size) {
        self.viewport.frame = frame;

        if !self.zoom_enabled {
            self.viewport.wrapper_size = frame;
        } else if !self.zoom.is_zoomed_in() {
            self.viewport.wrapper_size = self.calculate_picture_size();
        }

        if self.zoom_enabled && self.zoom_in_initially && self.viewport.frame_changed() {
            tracing::debug!(slide = %self.id, ?frame, "frame changed, zooming in");
            self.zoom.zoom_to_maximum(false);
        }

        self.viewport.record_frame();
        self.zoom.set_maximum(self.maximum_scale_for_content());
        self.viewport.apply_scale(self.zoom.scale());
        self.surface.set_frame(Rectangle::new(
            Point::ORIGIN,
            self.viewport.content_size,
        ));
    }

    fn handle(&mut self, interaction: Interaction) -> Effect {
        match interaction {
            Interaction::SingleTap => {
                if !self.retry_tap.is_enabled() {
                    return Effect::None;
                }
                tracing::info!(slide = %self.id, "retrying failed load");
                self.load_media();
                Effect::RetryRequested
            }
            Interaction::DoubleTap => {
                if !self.zoom_tap.is_enabled() {
                    return Effect::None;
                }
                let changed = self.zoom.toggle(true);
                self.apply_zoom(changed)
            }
            Interaction::Pinch { scale } => {
                if !self.zoom_enabled {
                    return Effect::None;
                }
                let changed = self.zoom.set_scale(scale, false);
                self.apply_zoom(changed)
            }
            Interaction::Pan { offset } => {
                let before = self.viewport.offset;
                self.viewport.set_offset(offset);
                if self.viewport.offset == before {
                    Effect::None
                } else {
                    Effect::OffsetChanged
                }
            }
        }
    }

    fn poll_media(&mut self) -> Effect {
        self.poll_load()
    }

    fn transition_surface(&mut self) -> &ImageSurface {
        &self.surface
    }

    fn content_mode(&self) -> ContentMode {
        self.surface.content_mode()
    }

    fn set_content_mode(&mut self, mode: ContentMode) {
        self.surface.set_content_mode(mode);
        self.relayout();
    }

    fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius.max(0.0);
        self.layer.set_corner_radius(self.corner_radius);
        self.surface.layer_mut().set_corner_radius(self.corner_radius);
    }
}
