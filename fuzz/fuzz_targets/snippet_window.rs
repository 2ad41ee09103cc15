// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for snippet window arithmetic.
//!
//! Any offset, any window size, any text: the window must stay inside the
//! corpus on char boundaries, and the rendered snippet must never carry a raw
//! line break.

#![no_main]

use arbitrary::Arbitrary;
use folio::{extract_snippet, snippet_window, Corpus};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct WindowInput {
    text: String,
    offset: usize,
    window: usize,
    cut_at_whitespace: bool,
}

fuzz_target!(|input: WindowInput| {
    let corpus = Corpus::from_text(input.text.as_str());

    let range = snippet_window(&corpus, input.offset, input.window);
    assert!(range.start <= range.end);
    assert!(range.end <= input.text.len());
    assert!(input.text.is_char_boundary(range.start));
    assert!(input.text.is_char_boundary(range.end));

    let snippet = extract_snippet(&corpus, input.offset, input.window, input.cut_at_whitespace);
    assert!(!snippet.contains('\n') && !snippet.contains('\r'));
    assert_eq!(snippet, snippet.trim());
});
