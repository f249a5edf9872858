// SPDX-License-Identifier: MPL-2.0
//! Image source whose loads are fulfilled later by the host.
//!
//! Useful when fetching happens elsewhere (a network client, a decoding
//! pipeline owned by the application) and results are pushed back once they
//! arrive. Cancellation is only recorded: the host decides whether to stop
//! its work, and still completes or drops the request afterwards.

use super::source::{ImageSource, LoadCompletion, SurfaceId};
use super::ImageData;
use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};

#[derive(Debug, Default)]
pub struct DeferredImageSource {
    waiting: RefCell<VecDeque<LoadCompletion>>,
    cancelled: RefCell<HashSet<SurfaceId>>,
    requests: Cell<usize>,
    cancellations: Cell<usize>,
}

impl DeferredImageSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of `load` calls received.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.requests.get()
    }

    /// Total number of `cancel_load` calls received.
    #[must_use]
    pub fn cancellations(&self) -> usize {
        self.cancellations.get()
    }

    /// Loads waiting for a result.
    #[must_use]
    pub fn waiting(&self) -> usize {
        self.waiting.borrow().len()
    }

    /// Whether a cancellation was requested for `target` since its last load.
    #[must_use]
    pub fn is_cancelled(&self, target: SurfaceId) -> bool {
        self.cancelled.borrow().contains(&target)
    }

    /// Fulfills the oldest waiting load for `target`.
    /// Returns false if nothing was waiting for it.
    pub fn complete(&self, target: SurfaceId, image: Option<ImageData>) -> bool {
        let completion = {
            let mut waiting = self.waiting.borrow_mut();
            let Some(index) = waiting.iter().position(|c| c.target() == target) else {
                return false;
            };
            waiting.remove(index)
        };
        match completion {
            Some(completion) => {
                completion.complete(image);
                true
            }
            None => false,
        }
    }

    /// Fulfills the oldest waiting load, whatever its target.
    pub fn complete_next(&self, image: Option<ImageData>) -> bool {
        let completion = self.waiting.borrow_mut().pop_front();
        match completion {
            Some(completion) => {
                completion.complete(image);
                true
            }
            None => false,
        }
    }

    /// Drops every waiting load without a result.
    pub fn abandon_all(&self) {
        self.waiting.borrow_mut().clear();
    }
}

impl ImageSource for DeferredImageSource {
    fn load(&self, target: SurfaceId, completion: LoadCompletion) {
        self.requests.set(self.requests.get() + 1);
        self.cancelled.borrow_mut().remove(&target);
        self.waiting.borrow_mut().push_back(completion);
    }

    fn cancel_load(&self, target: SurfaceId) {
        self.cancellations.set(self.cancellations.get() + 1);
        self.cancelled.borrow_mut().insert(target);
    }
}
