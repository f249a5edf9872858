// SPDX-License-Identifier: MPL-2.0
//! `slide-inspect`: loads an image into an image slide and prints the
//! resulting layout.

use iced::Size;
use iced_slides::config::{self, Config};
use iced_slides::media::FileImageSource;
use iced_slides::slide::{ContentMode, ImageSlide, ImageSlideOptions, Interaction, Slide};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "usage: slide-inspect [--viewport WxH] [--mode MODE] [--zoom-in] [--config FILE] <image>";

struct Args {
    image: PathBuf,
    viewport: Size,
    mode: Option<ContentMode>,
    zoom_in: bool,
    config: Option<PathBuf>,
}

fn parse_viewport(value: &str) -> Result<Size, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got {value}"))?;
    let width: f32 = width.trim().parse().map_err(|_| format!("bad width: {width}"))?;
    let height: f32 = height.trim().parse().map_err(|_| format!("bad height: {height}"))?;
    if width <= 0.0 || height <= 0.0 {
        return Err(format!("viewport must be positive, got {value}"));
    }
    Ok(Size::new(width, height))
}

fn parse_args() -> Result<Args, String> {
    let mut args = pico_args::Arguments::from_env();
    let viewport = args
        .opt_value_from_fn("--viewport", parse_viewport)
        .map_err(|e| e.to_string())?
        .unwrap_or(Size::new(800.0, 600.0));
    let mode = args
        .opt_value_from_str("--mode")
        .map_err(|e| e.to_string())?;
    let zoom_in = args.contains("--zoom-in");
    let config = args
        .opt_value_from_os_str("--config", |s| Ok::<_, String>(PathBuf::from(s)))
        .map_err(|e| e.to_string())?;
    let image = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| USAGE.to_string())?;

    Ok(Args {
        image,
        viewport,
        mode,
        zoom_in,
        config,
    })
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "iced_slides=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_tracing();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let loaded = match args.config.as_deref() {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(%err, "config unavailable, using defaults");
        Config::default()
    });

    let mut options = ImageSlideOptions::from(&config);
    options.activity_indicator = false;
    if let Some(mode) = args.mode {
        options.content_mode = mode;
    }
    options.zoom_in_initially |= args.zoom_in;

    let source = Rc::new(FileImageSource::new(&args.image));
    let mut slide = ImageSlide::new(source, options);
    slide.layout(args.viewport);
    slide.load_media();
    let effect = slide.wait_for_load().await;
    tracing::info!(?effect, state = ?slide.load_state(), "load finished");

    print_geometry(&slide);
    if slide.image().is_none() {
        return ExitCode::FAILURE;
    }

    if !slide.zoom().is_zoomed_in() {
        slide.handle(Interaction::DoubleTap);
        println!("-- after double tap --");
        print_geometry(&slide);
    }

    ExitCode::SUCCESS
}

fn print_geometry(slide: &ImageSlide) {
    let viewport = slide.viewport();
    if let Some(image) = slide.image() {
        println!("image:        {}x{}", image.width, image.height);
    }
    println!("state:        {:?}", slide.load_state());
    println!("content mode: {:?}", slide.content_mode());
    println!("frame:        {}x{}", viewport.frame.width, viewport.frame.height);
    println!(
        "wrapper:      {}x{}",
        viewport.wrapper_size.width, viewport.wrapper_size.height
    );
    println!(
        "content:      {}x{}",
        viewport.content_size.width, viewport.content_size.height
    );
    println!(
        "insets:       top {} right {} bottom {} left {}",
        viewport.insets.top, viewport.insets.right, viewport.insets.bottom, viewport.insets.left
    );
    println!("offset:       {}, {}", viewport.offset.x, viewport.offset.y);
    println!(
        "zoom:         {} (max {})",
        slide.zoom().scale(),
        slide.zoom().maximum()
    );
}
