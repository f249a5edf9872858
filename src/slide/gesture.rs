// SPDX-License-Identifier: MPL-2.0
//! Tap recognizers a slide enables and disables with its load state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapGesture {
    taps_required: u8,
    enabled: bool,
}

impl TapGesture {
    #[must_use]
    pub fn single(enabled: bool) -> Self {
        Self {
            taps_required: 1,
            enabled,
        }
    }

    #[must_use]
    pub fn double(enabled: bool) -> Self {
        Self {
            taps_required: 2,
            enabled,
        }
    }

    #[must_use]
    pub fn taps_required(&self) -> u8 {
        self.taps_required
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}
