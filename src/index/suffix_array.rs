// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Byte-level suffix array over the case-folded corpus.
//!
//! Every suffix that starts with the pattern sits in one contiguous run of the
//! sorted array, so a lookup is two binary searches: find where the run starts,
//! then find where the shared prefix stops.

use super::sais::sais;

/// Sorted suffix positions of a byte string.
///
/// **Invariant**: `positions` is a permutation of `0..text.len()` ordered by the
/// suffix starting at each position.
#[derive(Debug, Clone, Default)]
pub struct SuffixArray {
    positions: Vec<usize>,
}

impl SuffixArray {
    /// Build the suffix array with SA-IS.
    pub fn build(text: &[u8]) -> Self {
        Self {
            positions: sais(text),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Raw sorted positions.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Every offset at which `pattern` occurs in `text`, overlapping matches included.
    ///
    /// `text` must be the byte string the array was built from. Offsets come back
    /// in suffix order; callers that need corpus order sort them.
    pub fn lookup(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        if pattern.is_empty() {
            return Vec::new();
        }

        let start = self
            .positions
            .partition_point(|&pos| &text[pos..] < pattern);
        let run = self.positions[start..]
            .partition_point(|&pos| text[pos..].starts_with(pattern));

        self.positions[start..start + run].to_vec()
    }
}
