// SPDX-License-Identifier: MPL-2.0
//! Image source that decodes a file from disk on the tokio blocking pool.

use super::image::load_image;
use super::source::{ImageSource, LoadCompletion, SurfaceId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::task::AbortHandle;

/// Loads and decodes an image file.
///
/// Each load runs as a tokio task that decodes on a blocking thread. Cancelling
/// aborts the task; the dropped completion is then seen by the slide as an
/// empty result. Loads issued outside a tokio runtime fail immediately.
#[derive(Debug)]
pub struct FileImageSource {
    path: PathBuf,
    in_flight: RefCell<HashMap<SurfaceId, AbortHandle>>,
}

impl FileImageSource {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            in_flight: RefCell::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of decode tasks still running.
    #[must_use]
    pub fn loads_in_flight(&self) -> usize {
        self.in_flight
            .borrow()
            .values()
            .filter(|handle| !handle.is_finished())
            .count()
    }
}

impl ImageSource for FileImageSource {
    fn load(&self, target: SurfaceId, completion: LoadCompletion) {
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            tracing::warn!(path = %self.path.display(), "no tokio runtime, image load fails");
            completion.fail();
            return;
        };

        let path = self.path.clone();
        let task = runtime.spawn(async move {
            let decode_path = path.clone();
            let decoded = tokio::task::spawn_blocking(move || load_image(decode_path)).await;
            match decoded {
                Ok(Ok(image)) => {
                    tracing::debug!(path = %path.display(), width = image.width, height = image.height, "image decoded");
                    completion.complete(Some(image));
                }
                Ok(Err(err)) => {
                    tracing::warn!(path = %path.display(), %err, "image decoding failed");
                    completion.fail();
                }
                Err(join_err) => {
                    tracing::warn!(path = %path.display(), %join_err, "image decoding task failed");
                    completion.fail();
                }
            }
        });

        let mut in_flight = self.in_flight.borrow_mut();
        in_flight.retain(|_, handle| !handle.is_finished());
        if let Some(previous) = in_flight.insert(target, task.abort_handle()) {
            previous.abort();
        }
    }

    fn cancel_load(&self, target: SurfaceId) {
        if let Some(handle) = self.in_flight.borrow_mut().remove(&target) {
            tracing::debug!(target_surface = %target, path = %self.path.display(), "image load cancelled");
            handle.abort();
        }
    }
}
