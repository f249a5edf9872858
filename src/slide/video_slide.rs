// SPDX-License-Identifier: MPL-2.0
//! Slide embedding a video player.
//!
//! The player owns buffering and play state. The slide only mirrors
//! presentation settings onto it, pauses it when leaving the pool, and keeps
//! a hidden thumbnail surface for cross-slide transitions.

use super::gesture::TapGesture;
use super::layer::{Layer, LayerKind};
use super::surface::ImageSurface;
use super::{ContentMode, Effect, Interaction, Slide, SlideId, SlideKind};
use crate::media::ImageData;
use iced::{Rectangle, Size};
use std::rc::{Rc, Weak};

/// Native fill policy of a video player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoGravity {
    /// Whole frame visible, aspect ratio kept.
    #[default]
    ResizeAspect,
    /// Layer covered, aspect ratio kept.
    ResizeAspectFill,
    /// Stretched to the layer.
    Resize,
}

impl From<ContentMode> for VideoGravity {
    fn from(mode: ContentMode) -> Self {
        match mode {
            ContentMode::AspectFill => VideoGravity::ResizeAspectFill,
            ContentMode::Fill => VideoGravity::Resize,
            ContentMode::AspectFit | ContentMode::Center => VideoGravity::ResizeAspect,
        }
    }
}

/// Playback engine embedded by a [`VideoSlide`].
pub trait VideoPlayer {
    fn play(&mut self);

    fn pause(&mut self);

    /// Rectangle currently covered by video frames.
    fn video_bounds(&self) -> Rectangle;

    fn set_video_gravity(&mut self, gravity: VideoGravity);

    /// Root of the player's layer tree.
    fn layer(&self) -> &Layer;

    fn layer_mut(&mut self) -> &mut Layer;

    /// Whether the player draws its own playback controls.
    fn shows_playback_controls(&self) -> bool {
        false
    }
}

/// Container-side callbacks of a video slide.
///
/// Held weakly: a slide never keeps its container alive.
pub trait VideoSlideDelegate {
    /// Snapshot of the frame currently shown by `slide`'s player.
    fn current_thumbnail(&self, slide: &dyn Slide) -> Option<ImageData>;

    fn slide_did_appear(&self, slide: &dyn Slide);

    fn slide_did_disappear(&self, slide: &dyn Slide);
}

pub struct VideoSlide<P: VideoPlayer> {
    id: SlideId,
    player: P,
    layer: Layer,
    transition_surface: ImageSurface,
    delegate: Option<Weak<dyn VideoSlideDelegate>>,
    content_mode: ContentMode,
    corner_radius: f32,
    frame: Size,
    /// Present only when the player shows native controls.
    controls_tap: Option<TapGesture>,
}

impl<P: VideoPlayer> std::fmt::Debug for VideoSlide<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoSlide")
            .field("id", &self.id)
            .field("content_mode", &self.content_mode)
            .field("corner_radius", &self.corner_radius)
            .field("has_delegate", &self.delegate().is_some())
            .finish()
    }
}

impl<P: VideoPlayer> VideoSlide<P> {
    #[must_use]
    pub fn new(player: P, content_mode: ContentMode) -> Self {
        let controls_tap = player
            .shows_playback_controls()
            .then(|| TapGesture::single(true));
        let mut slide = Self {
            id: SlideId::next(),
            player,
            layer: Layer::new(LayerKind::Backing),
            transition_surface: ImageSurface::hidden(content_mode),
            delegate: None,
            content_mode,
            corner_radius: 0.0,
            frame: Size::ZERO,
            controls_tap,
        };
        slide.player.set_video_gravity(VideoGravity::from(content_mode));
        slide
    }

    /// Sets the container callbacks without taking ownership of them.
    pub fn set_delegate(&mut self, delegate: Weak<dyn VideoSlideDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    /// The delegate, if it is still alive.
    #[must_use]
    pub fn delegate(&self) -> Option<Rc<dyn VideoSlideDelegate>> {
        self.delegate.as_ref().and_then(Weak::upgrade)
    }

    #[must_use]
    pub fn player(&self) -> &P {
        &self.player
    }

    #[must_use]
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    #[must_use]
    pub fn frame(&self) -> Size {
        self.frame
    }

    #[must_use]
    pub fn controls_tap(&self) -> Option<TapGesture> {
        self.controls_tap
    }
}

impl<P: VideoPlayer> Slide for VideoSlide<P> {
    fn id(&self) -> SlideId {
        self.id
    }

    fn kind(&self) -> SlideKind {
        SlideKind::Video
    }

    fn load_media(&mut self) {}

    fn release_media(&mut self) {}

    fn will_be_removed(&mut self) {
        tracing::debug!(slide = %self.id, "pausing player before removal");
        self.player.pause();
    }

    fn did_appear(&mut self) {
        match self.delegate() {
            Some(delegate) => delegate.slide_did_appear(&*self),
            None => tracing::trace!(slide = %self.id, "appear not forwarded, no delegate"),
        }
    }

    fn did_disappear(&mut self) {
        match self.delegate() {
            Some(delegate) => delegate.slide_did_disappear(&*self),
            None => tracing::trace!(slide = %self.id, "disappear not forwarded, no delegate"),
        }
    }

    fn layout(&mut self, frame: Size) {
        self.frame = frame;
    }

    fn handle(&mut self, interaction: Interaction) -> Effect {
        if interaction == Interaction::SingleTap && self.controls_tap.is_some() {
            tracing::trace!(slide = %self.id, "tap on player controls");
        }
        Effect::None
    }

    fn transition_surface(&mut self) -> &ImageSurface {
        let thumbnail = self
            .delegate()
            .and_then(|delegate| delegate.current_thumbnail(&*self));

        self.transition_surface.set_frame(self.player.video_bounds());
        self.transition_surface.set_content_mode(self.content_mode);
        self.transition_surface.set_image(thumbnail);
        &self.transition_surface
    }

    fn content_mode(&self) -> ContentMode {
        self.content_mode
    }

    fn set_content_mode(&mut self, mode: ContentMode) {
        self.content_mode = mode;
        self.player.set_video_gravity(VideoGravity::from(mode));
    }

    fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    fn set_corner_radius(&mut self, radius: f32) {
        self.corner_radius = radius.max(0.0);
        self.layer.set_corner_radius(self.corner_radius);
        self.transition_surface
            .layer_mut()
            .set_corner_radius(self.corner_radius);

        let player_layer = self.player.layer_mut();
        player_layer.set_corner_radius(self.corner_radius);
        match player_layer.find_kind_mut(LayerKind::Video) {
            Some(video_layer) => video_layer.set_corner_radius(self.corner_radius),
            None => tracing::trace!(slide = %self.id, "player has no nested video layer"),
        }
    }
}
