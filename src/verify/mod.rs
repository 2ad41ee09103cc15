// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: structural invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Checked verification** (`verify_corpus`) that reports the first broken
//!    invariant as an [`InvariantError`]. The test suites and fuzz targets use it.
//!
//! 2. **Runtime contracts** that panic in debug builds when invariants are violated.
//!    Zero-cost in release, but catch offset arithmetic mistakes when tests run.

mod types;
pub mod contracts;

pub use types::*;
