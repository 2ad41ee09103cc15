// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for offset arithmetic.
//!
//! These are **zero-cost in release builds** (`debug_assert!`) and fire during
//! tests when a slice would be taken outside the corpus or across a code point.

/// Shadow and text must share length and char boundaries.
#[inline]
pub fn check_shadow_aligned(text: &str, folded: &str) {
    debug_assert!(
        super::verify_shadow(text, folded).is_ok(),
        "Contract violation: case-folded shadow is not aligned with the corpus"
    );
}

/// A snippet window must lie inside the corpus and on char boundaries.
#[inline]
pub fn check_window_in_bounds(text: &str, start: usize, end: usize) {
    debug_assert!(
        start <= end && end <= text.len(),
        "Contract violation: window [{}, {}) outside corpus of {} bytes",
        start,
        end,
        text.len()
    );
    debug_assert!(
        text.is_char_boundary(start) && text.is_char_boundary(end),
        "Contract violation: window [{}, {}) splits a code point",
        start,
        end
    );
}

/// Match offsets must be strictly ascending (corpus order, no duplicates).
#[inline]
pub fn check_offsets_ascending(offsets: &[usize]) {
    debug_assert!(
        offsets.windows(2).all(|w| w[0] < w[1]),
        "Contract violation: match offsets not in ascending corpus order"
    );
}
