// SPDX-License-Identifier: MPL-2.0
//! Slide presentation settings persisted as TOML.
//!
//! Every field is optional so a partial file only overrides what it names;
//! [`ImageSlideOptions`](crate::slide::ImageSlideOptions) fills the gaps from
//! [`defaults`].
//!
//! ```no_run
//! use iced_slides::config;
//! use iced_slides::slide::ContentMode;
//!
//! let mut settings = config::load().unwrap_or_default();
//! settings.content_mode = Some(ContentMode::AspectFill);
//! config::save(&settings)?;
//! # Ok::<(), iced_slides::error::Error>(())
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::slide::ContentMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedSlides";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub zoom_enabled: Option<bool>,
    #[serde(default)]
    pub maximum_zoom_scale: Option<f32>,
    #[serde(default)]
    pub zoom_in_initially: Option<bool>,
    #[serde(default)]
    pub content_mode: Option<ContentMode>,
    #[serde(default)]
    pub corner_radius: Option<f32>,
    /// Show a spinner while an image slide is loading.
    #[serde(default)]
    pub activity_indicator: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zoom_enabled: Some(DEFAULT_ZOOM_ENABLED),
            maximum_zoom_scale: Some(DEFAULT_MAX_ZOOM_SCALE),
            zoom_in_initially: Some(false),
            content_mode: Some(DEFAULT_CONTENT_MODE),
            corner_radius: Some(DEFAULT_CORNER_RADIUS),
            activity_indicator: Some(true),
        }
    }
}

/// Location of the user's settings file, if the platform has a config dir.
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILE))
}

/// Loads the user's settings, or defaults when no file exists yet.
pub fn load() -> Result<Config> {
    match default_path() {
        Some(path) if path.is_file() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

/// Saves to [`default_path`]. A platform without a config dir is a no-op.
pub fn save(config: &Config) -> Result<()> {
    default_path().map_or(Ok(()), |path| save_to_path(config, &path))
}

/// Reads settings from `path`. Malformed TOML is logged and replaced by
/// defaults; only I/O failures are errors.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    match toml::from_str(&text) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid slide config, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let text = toml::to_string_pretty(config)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, text)?;
    Ok(())
}
