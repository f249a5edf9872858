// SPDX-License-Identifier: MPL-2.0
use approx::assert_abs_diff_eq;
use iced::{Size, Vector};
use iced_slides::media::{DeferredImageSource, FileImageSource, ImageData};
use iced_slides::slide::{
    ContentMode, Effect, ImageSlide, ImageSlideOptions, Interaction, LoadState, Slide,
};
use iced_slides::ui::state::MaxZoomScale;
use std::rc::Rc;
use tempfile::tempdir;

fn viewport() -> Size {
    Size::new(300.0, 200.0)
}

fn deferred_slide(options: ImageSlideOptions) -> (Rc<DeferredImageSource>, ImageSlide) {
    let source = Rc::new(DeferredImageSource::new());
    let mut slide = ImageSlide::new(source.clone(), options);
    slide.layout(viewport());
    (source, slide)
}

fn indicator_visible(slide: &ImageSlide) -> bool {
    slide
        .activity_indicator()
        .is_some_and(|indicator| indicator.is_visible())
}

#[test]
fn repeated_load_requests_reach_the_source_once() {
    let (source, mut slide) = deferred_slide(ImageSlideOptions::default());

    slide.load_media();
    slide.load_media();
    slide.load_media();
    assert_eq!(source.requests(), 1);
    assert_eq!(slide.load_state(), LoadState::Loading);
    assert!(indicator_visible(&slide));

    assert!(source.complete_next(Some(ImageData::blank(100, 50))));
    assert_eq!(slide.poll_media(), Effect::Loaded);
    assert!(!indicator_visible(&slide));

    slide.load_media();
    assert_eq!(source.requests(), 1, "loaded slide must not reload");
}

#[test]
fn completion_after_release_leaves_slide_empty() {
    let (source, mut slide) = deferred_slide(ImageSlideOptions::default());

    slide.load_media();
    slide.release_media();
    assert_eq!(slide.load_state(), LoadState::Idle);
    assert_eq!(source.cancellations(), 1);
    assert!(source.is_cancelled(slide.surface().id()));

    assert!(source.complete_next(Some(ImageData::blank(100, 50))));
    assert_eq!(slide.poll_media(), Effect::StaleResultDiscarded);
    assert!(slide.image().is_none());
    assert_eq!(slide.load_state(), LoadState::Idle);
    assert!(!slide.retry_tap().is_enabled());
}

#[test]
fn reload_after_release_ignores_the_superseded_request() {
    let (source, mut slide) = deferred_slide(ImageSlideOptions::default());

    slide.load_media();
    slide.release_media();
    slide.load_media();
    assert_eq!(source.requests(), 2);
    assert!(!slide.is_released());

    // The first request resolves into a dropped receiver.
    assert!(source.complete_next(Some(ImageData::blank(10, 10))));
    assert_eq!(slide.poll_media(), Effect::None);
    assert_eq!(slide.load_state(), LoadState::Loading);

    assert!(source.complete_next(Some(ImageData::blank(100, 50))));
    assert_eq!(slide.poll_media(), Effect::Loaded);
    assert_eq!(slide.image().map(|image| image.width), Some(100));
}

#[test]
fn failed_load_swaps_zoom_tap_for_retry_tap() {
    let (source, mut slide) = deferred_slide(ImageSlideOptions::default());

    slide.load_media();
    assert!(source.complete_next(None));
    assert_eq!(slide.poll_media(), Effect::LoadFailed);
    assert_eq!(slide.load_state(), LoadState::Failed);
    assert!(slide.retry_tap().is_enabled());
    assert!(!slide.zoom_tap().is_enabled());
    assert_eq!(slide.handle(Interaction::DoubleTap), Effect::None);

    assert_eq!(slide.handle(Interaction::SingleTap), Effect::RetryRequested);
    assert_eq!(source.requests(), 2);
    assert_eq!(slide.load_state(), LoadState::Loading);

    assert!(source.complete_next(Some(ImageData::blank(100, 50))));
    assert_eq!(slide.poll_media(), Effect::Loaded);
    assert!(!slide.retry_tap().is_enabled());
    assert!(slide.zoom_tap().is_enabled());
}

#[test]
fn abandoned_load_counts_as_failure() {
    let (source, mut slide) = deferred_slide(ImageSlideOptions::default());

    slide.load_media();
    source.abandon_all();
    assert_eq!(slide.poll_media(), Effect::LoadFailed);
    assert!(slide.retry_tap().is_enabled());
}

#[test]
fn single_tap_on_healthy_slide_does_nothing() {
    let (source, mut slide) = deferred_slide(ImageSlideOptions::default());
    slide.load_media();
    assert!(source.complete_next(Some(ImageData::blank(100, 50))));
    slide.poll_media();

    assert_eq!(slide.handle(Interaction::SingleTap), Effect::None);
    assert_eq!(source.requests(), 1);
}

#[test]
fn wide_image_is_letterboxed_then_fills_when_zoomed() {
    let (source, mut slide) = deferred_slide(ImageSlideOptions::default());
    slide.load_media();
    assert!(source.complete_next(Some(ImageData::blank(100, 50))));
    slide.poll_media();

    let state = slide.viewport();
    assert_abs_diff_eq!(state.wrapper_size.width, 300.0);
    assert_abs_diff_eq!(state.wrapper_size.height, 150.0);
    assert_abs_diff_eq!(state.insets.top, 25.0);
    assert_abs_diff_eq!(state.insets.bottom, 25.0);
    assert_abs_diff_eq!(state.insets.left, 0.0);
    assert!(!state.is_full_screen());

    let effect = slide.handle(Interaction::DoubleTap);
    assert_eq!(
        effect,
        Effect::ZoomChanged {
            scale: 2.0,
            animated: true
        }
    );
    let state = slide.viewport();
    assert!(state.is_full_screen());
    assert_abs_diff_eq!(state.insets.top, 0.0);
    assert_abs_diff_eq!(state.insets.left, 0.0);
    assert_abs_diff_eq!(state.offset.x, 150.0);
    assert_abs_diff_eq!(state.offset.y, 50.0);

    assert_eq!(
        slide.handle(Interaction::Pan {
            offset: Vector::new(1000.0, -5.0)
        }),
        Effect::OffsetChanged
    );
    assert_abs_diff_eq!(slide.viewport().offset.x, 300.0);
    assert_abs_diff_eq!(slide.viewport().offset.y, 0.0);
}

#[test]
fn square_image_is_centered_horizontally() {
    let (source, mut slide) = deferred_slide(ImageSlideOptions::default());
    slide.load_media();
    assert!(source.complete_next(Some(ImageData::blank(100, 100))));
    slide.poll_media();

    let state = slide.viewport();
    assert_abs_diff_eq!(state.content_size.width, 200.0);
    assert_abs_diff_eq!(state.content_size.height, 200.0);
    assert_abs_diff_eq!(state.insets.left, 50.0);
    assert_abs_diff_eq!(state.insets.right, 50.0);
    assert_abs_diff_eq!(state.insets.top, 0.0);
}

#[test]
fn disabled_zoom_pins_wrapper_to_frame() {
    let options = ImageSlideOptions {
        zoom_enabled: false,
        ..ImageSlideOptions::default()
    };
    let (source, mut slide) = deferred_slide(options);
    slide.load_media();
    assert!(source.complete_next(Some(ImageData::blank(100, 50))));
    slide.poll_media();

    assert_eq!(slide.viewport().wrapper_size, viewport());
    assert!(!slide.zoom_tap().is_enabled());
    assert_eq!(slide.handle(Interaction::DoubleTap), Effect::None);
    assert_eq!(slide.handle(Interaction::Pinch { scale: 3.0 }), Effect::None);
}

#[test]
fn zoom_in_initially_snaps_on_frame_changes_only() {
    let options = ImageSlideOptions {
        zoom_in_initially: true,
        maximum_zoom_scale: MaxZoomScale::new(3.0),
        ..ImageSlideOptions::default()
    };
    let (_source, mut slide) = deferred_slide(options);
    assert_abs_diff_eq!(slide.zoom().scale(), 3.0);

    slide.handle(Interaction::DoubleTap);
    assert_abs_diff_eq!(slide.zoom().scale(), 1.0);

    slide.layout(viewport());
    assert_abs_diff_eq!(slide.zoom().scale(), 1.0);

    slide.layout(Size::new(400.0, 300.0));
    assert_abs_diff_eq!(slide.zoom().scale(), 3.0);
}

#[test]
fn disappearing_resets_zoom_without_animation() {
    let (source, mut slide) = deferred_slide(ImageSlideOptions::default());
    slide.load_media();
    assert!(source.complete_next(Some(ImageData::blank(100, 50))));
    slide.poll_media();

    slide.handle(Interaction::DoubleTap);
    assert_abs_diff_eq!(slide.zoom().scale(), slide.zoom().maximum());
    assert!(slide.zoom().last_change_animated());

    slide.did_disappear();
    assert!(!slide.zoom().is_zoomed_in());
    assert_abs_diff_eq!(slide.zoom().scale(), slide.zoom().minimum());
    assert!(!slide.zoom().last_change_animated());
    assert_eq!(slide.viewport().offset, Vector::new(0.0, 0.0));
}

#[test]
fn content_mode_change_resizes_wrapper() {
    let (source, mut slide) = deferred_slide(ImageSlideOptions::default());
    slide.load_media();
    assert!(source.complete_next(Some(ImageData::blank(100, 50))));
    slide.poll_media();

    slide.set_content_mode(ContentMode::AspectFill);
    assert_eq!(slide.viewport().wrapper_size, viewport());
    assert_eq!(slide.surface().content_mode(), ContentMode::AspectFill);
}

#[test]
fn corner_radius_masks_slide_and_surface() {
    let (_source, mut slide) = deferred_slide(ImageSlideOptions::default());
    slide.set_corner_radius(16.0);

    assert_abs_diff_eq!(slide.corner_radius(), 16.0);
    assert!(slide.layer().masks_to_bounds());
    assert_abs_diff_eq!(slide.surface().layer().corner_radius(), 16.0);

    slide.set_corner_radius(0.0);
    assert!(!slide.layer().masks_to_bounds());
}

#[tokio::test]
async fn file_source_loads_from_disk() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("wide.png");
    image_rs::RgbaImage::new(8, 4)
        .save(&path)
        .expect("failed to write test image");

    let mut slide = ImageSlide::new(
        Rc::new(FileImageSource::new(&path)),
        ImageSlideOptions::default(),
    );
    slide.layout(viewport());
    slide.load_media();

    assert_eq!(slide.wait_for_load().await, Effect::Loaded);
    assert_eq!(slide.image().map(|image| (image.width, image.height)), Some((8, 4)));
    assert_abs_diff_eq!(slide.viewport().wrapper_size.height, 150.0);
}

#[tokio::test]
async fn missing_file_fails_the_load() {
    let dir = tempdir().expect("failed to create temp dir");
    let mut slide = ImageSlide::new(
        Rc::new(FileImageSource::new(dir.path().join("absent.png"))),
        ImageSlideOptions::default(),
    );
    slide.layout(viewport());
    slide.load_media();

    assert_eq!(slide.wait_for_load().await, Effect::LoadFailed);
    assert_eq!(slide.load_state(), LoadState::Failed);
}

#[tokio::test]
async fn removing_slide_mid_file_load_is_not_a_failure() {
    let dir = tempdir().expect("failed to create temp dir");
    let path = dir.path().join("slow.png");
    image_rs::RgbaImage::new(8, 4)
        .save(&path)
        .expect("failed to write test image");

    let source = Rc::new(FileImageSource::new(&path));
    let mut slide = ImageSlide::new(source.clone(), ImageSlideOptions::default());
    slide.layout(viewport());
    slide.load_media();
    slide.will_be_removed();
    assert_eq!(source.loads_in_flight(), 0);

    assert_eq!(slide.wait_for_load().await, Effect::LoadCancelled);
    assert_eq!(slide.load_state(), LoadState::Idle);
    assert!(!slide.retry_tap().is_enabled());
    assert!(slide.image().is_none());

    slide.load_media();
    assert_eq!(slide.wait_for_load().await, Effect::Loaded);
}

#[test]
fn will_be_removed_keeps_the_displayed_image() {
    let (source, mut slide) = deferred_slide(ImageSlideOptions::default());
    slide.load_media();
    assert!(source.complete_next(Some(ImageData::blank(100, 50))));
    slide.poll_media();

    slide.will_be_removed();
    assert_eq!(source.cancellations(), 1);
    assert_eq!(slide.load_state(), LoadState::Loaded);
    assert!(slide.image().is_some());
    assert_eq!(slide.poll_media(), Effect::None);
}

#[test]
fn releasing_an_idle_slide_is_harmless() {
    let (source, mut slide) = deferred_slide(ImageSlideOptions::default());
    let before = slide.viewport().clone();

    slide.release_media();
    assert_eq!(slide.load_state(), LoadState::Idle);
    assert!(slide.image().is_none());
    assert!(!slide.retry_tap().is_enabled());
    assert_eq!(slide.viewport(), &before);
    assert_eq!(source.requests(), 0);

    slide.load_media();
    assert_eq!(source.requests(), 1);
}
