// SPDX-License-Identifier: MPL-2.0
//! Image source backed by an image already held in memory.

use super::source::{ImageSource, LoadCompletion, SurfaceId};
use super::ImageData;

/// Completes every load immediately with the same image.
#[derive(Debug, Clone)]
pub struct StaticImageSource {
    image: ImageData,
}

impl StaticImageSource {
    #[must_use]
    pub fn new(image: ImageData) -> Self {
        Self { image }
    }

    #[must_use]
    pub fn image(&self) -> &ImageData {
        &self.image
    }
}

impl ImageSource for StaticImageSource {
    fn load(&self, target: SurfaceId, completion: LoadCompletion) {
        tracing::trace!(target_surface = %target, "static image delivered");
        completion.complete(Some(self.image.clone()));
    }
}
