// SPDX-License-Identifier: MPL-2.0
//! Activity indicator shown while an image slide is loading.

use crate::config::LOADING_TIMEOUT_SECS;
use std::fmt;
use std::time::{Duration, Instant};

/// Something a slide can show while its image loads.
pub trait ActivityIndicator: fmt::Debug {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;

    /// Advances the indicator by one frame.
    fn tick(&mut self) -> SpinnerEffect {
        SpinnerEffect::None
    }
}

/// Effects produced by an activity indicator tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinnerEffect {
    /// No effect.
    None,
    /// The indicator has been visible longer than its timeout. Reported once
    /// per show.
    TimedOut,
}

/// Spinner that reports when a load has been outstanding too long.
#[derive(Debug, Clone)]
pub struct Spinner {
    /// When the spinner was shown, `None` while hidden.
    shown_at: Option<Instant>,
    timed_out: bool,
    timeout: Duration,
}

impl Default for Spinner {
    fn default() -> Self {
        Self::with_timeout(Duration::from_secs(LOADING_TIMEOUT_SECS))
    }
}

impl Spinner {
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            shown_at: None,
            timed_out: false,
            timeout,
        }
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    #[must_use]
    pub fn shown_at(&self) -> Option<Instant> {
        self.shown_at
    }
}

impl ActivityIndicator for Spinner {
    fn show(&mut self) {
        self.shown_at = Some(Instant::now());
        self.timed_out = false;
    }

    fn hide(&mut self) {
        self.shown_at = None;
        self.timed_out = false;
    }

    fn is_visible(&self) -> bool {
        self.shown_at.is_some()
    }

    fn tick(&mut self) -> SpinnerEffect {
        match self.shown_at {
            Some(shown) if !self.timed_out && shown.elapsed() > self.timeout => {
                self.timed_out = true;
                SpinnerEffect::TimedOut
            }
            _ => SpinnerEffect::None,
        }
    }
}
