// SPDX-License-Identifier: MPL-2.0
//! Asynchronous image source capability.
//!
//! A slide asks its [`ImageSource`] to load an image into one of its surfaces
//! and hands over a [`LoadCompletion`]. The source fulfills the completion
//! exactly once, at some later point, with either an image or `None` for a
//! failed load. The slide keeps the matching [`PendingLoad`] and observes the
//! result whenever it polls or awaits it.
//!
//! A completion that is dropped without being fulfilled (for instance because
//! the source aborted its work on cancellation) is observed as `None`, so the
//! slide never waits on a load that cannot finish.

use crate::media::ImageData;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

static NEXT_SURFACE_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies the surface a source loads into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Allocates a process-unique identifier.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_SURFACE_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Producer half of a single load request.
#[derive(Debug)]
pub struct LoadCompletion {
    target: SurfaceId,
    sender: oneshot::Sender<Option<ImageData>>,
}

impl LoadCompletion {
    /// The surface this load was requested for.
    #[must_use]
    pub fn target(&self) -> SurfaceId {
        self.target
    }

    /// Delivers the result. `None` signals a failed load.
    pub fn complete(self, image: Option<ImageData>) {
        if self.sender.send(image).is_err() {
            // The slide dropped its pending load (superseded or destroyed).
            tracing::trace!(target_surface = %self.target, "load completion had no receiver");
        }
    }

    /// Shorthand for `complete(None)`.
    pub fn fail(self) {
        self.complete(None);
    }

    /// Whether the requesting slide still waits for this result.
    #[must_use]
    pub fn is_awaited(&self) -> bool {
        !self.sender.is_closed()
    }
}

/// Consumer half of a single load request, held by the slide.
#[derive(Debug)]
pub struct PendingLoad {
    target: SurfaceId,
    receiver: oneshot::Receiver<Option<ImageData>>,
}

impl PendingLoad {
    #[must_use]
    pub fn target(&self) -> SurfaceId {
        self.target
    }

    /// Returns the result if the source has finished, `None` while the load
    /// is still outstanding.
    pub fn try_finish(&mut self) -> Option<Option<ImageData>> {
        match self.receiver.try_recv() {
            Ok(image) => Some(image),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(None),
        }
    }

    /// Waits for the source to finish.
    pub async fn finished(&mut self) -> Option<ImageData> {
        (&mut self.receiver).await.unwrap_or(None)
    }
}

/// Creates the two halves of a load request for `target`.
#[must_use]
pub fn load_request(target: SurfaceId) -> (LoadCompletion, PendingLoad) {
    let (sender, receiver) = oneshot::channel();
    (
        LoadCompletion { target, sender },
        PendingLoad { target, receiver },
    )
}

/// Something that can asynchronously produce an image for a surface.
///
/// `load` must fulfill (or drop) the completion exactly once. `cancel_load`
/// is best effort and must be safe to call at any time, including when no
/// load is outstanding for `target`.
pub trait ImageSource: fmt::Debug {
    fn load(&self, target: SurfaceId, completion: LoadCompletion);

    fn cancel_load(&self, target: SurfaceId) {
        let _ = target;
    }
}
