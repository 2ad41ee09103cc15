// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for SA-IS construction.
//!
//! Arbitrary bytes, including NUL and 0xFF, must produce a complete, sorted
//! suffix array.

#![no_main]

use folio::index::sais;
use folio::verify::verify_suffix_array;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let positions = sais(data);
    assert_eq!(verify_suffix_array(data, &positions), Ok(()));
});
