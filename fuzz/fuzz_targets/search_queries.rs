// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Arbitrary corpora and queries through the full pipeline, in both match
//! modes. Emoji, null bytes, regex metacharacters and case mappings that change
//! UTF-8 width must all come back as well-formed results or nothing.

#![no_main]

use arbitrary::Arbitrary;
use folio::{fold_case, locate, verify_corpus, MatchMode, Searcher};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct QueryInput {
    text: String,
    query: String,
    window: u16,
    whole_word: bool,
}

fuzz_target!(|input: QueryInput| {
    let searcher = Searcher::from_text(input.text.as_str());
    assert!(verify_corpus(searcher.corpus()).is_ok());

    let mode = if input.whole_word {
        MatchMode::WholeWord
    } else {
        MatchMode::Substring
    };

    let offsets = locate(searcher.corpus(), &input.query, mode);
    assert!(offsets.windows(2).all(|w| w[0] < w[1]));

    let folded = fold_case(&input.query);
    for &offset in &offsets {
        assert!(searcher.corpus().folded()[offset..].starts_with(&folded));
    }

    let results = searcher.search(&input.query, input.window as usize, mode);
    assert!(results.len() <= offsets.len());
    for result in &results {
        assert!(!result.text.is_empty());
        assert!(!result.attribution.is_empty());
    }
});
