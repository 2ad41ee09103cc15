// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Process-wide search settings, fixed at startup.

use std::time::Duration;

/// Window size used when the caller sends none or sends garbage.
pub const DEFAULT_WINDOW: usize = 500;

/// Windows smaller than this also trim at spaces, not just sentence punctuation.
pub const DEFAULT_WHITESPACE_THRESHOLD: usize = 500;

/// Upper bound on one correction round trip.
pub const DEFAULT_CORRECTION_TIMEOUT: Duration = Duration::from_secs(10);

/// Tunables shared by every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub default_window: usize,
    /// Fixed threshold; it does not scale with the requested window.
    pub whitespace_threshold: usize,
    pub correction_timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_window: DEFAULT_WINDOW,
            whitespace_threshold: DEFAULT_WHITESPACE_THRESHOLD,
            correction_timeout: DEFAULT_CORRECTION_TIMEOUT,
        }
    }
}

impl SearchConfig {
    /// Short windows rarely contain two sentence terminators, so spaces count too.
    pub fn cuts_at_whitespace(&self, window: usize) -> bool {
        window < self.whitespace_threshold
    }
}
