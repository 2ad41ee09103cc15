// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the structure that makes substring lookup fast.
//!
//! One suffix array over the case-folded corpus, built once at load time in
//! O(n) with SA-IS. Substring queries then cost O(m log n) plus the number of
//! hits, no matter how large the corpus is.

mod sais;
mod suffix_array;

pub use sais::sais;
pub use suffix_array::SuffixArray;
