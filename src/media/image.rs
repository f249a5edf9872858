// SPDX-License-Identifier: MPL-2.0
//! Decoded images shown by slides.

use crate::error::Result;
use iced::widget::image::Handle;
use iced::Size;
use image_rs::ImageReader;
use std::path::Path;

/// An RGBA image ready for display.
///
/// The pixels live only in the display handle; clones share them.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Wraps `width * height` RGBA pixels. The buffer moves into the display
    /// handle without copying.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Transparent placeholder of the given dimensions.
    #[must_use]
    pub fn blank(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * 4;
        Self::from_rgba(width, height, vec![0; len])
    }

    /// Pixel dimensions as a layout size.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Width divided by height, `None` for degenerate images.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0 && self.height > 0).then(|| self.width as f32 / self.height as f32)
    }
}

/// Reads and decodes the raster image at `path`. The format is sniffed from
/// the file contents, not the extension.
///
/// # Errors
///
/// [`Error::Io`](crate::error::Error::Io) when the file cannot be read,
/// [`Error::Decode`](crate::error::Error::Decode) when its bytes are not a
/// supported raster format.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let decoded = ImageReader::open(path.as_ref())?
        .with_guessed_format()?
        .decode()?
        .into_rgba8();
    let (width, height) = decoded.dimensions();
    Ok(ImageData::from_rgba(width, height, decoded.into_raw()))
}
