// SPDX-License-Identifier: MPL-2.0
//! Images and the sources that produce them.

pub mod deferred_source;
pub mod file_source;
pub mod image;
pub mod source;
pub mod static_source;

pub use deferred_source::DeferredImageSource;
pub use file_source::FileImageSource;
pub use image::{load_image, ImageData};
pub use source::{load_request, ImageSource, LoadCompletion, PendingLoad, SurfaceId};
pub use static_source::StaticImageSource;
