// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match locator: query → ascending byte offsets.
//!
//! | Mode        | Engine                       | Overlaps |
//! |-------------|------------------------------|----------|
//! | `Substring` | suffix array, two bisections | yes      |
//! | `WholeWord` | `\b<query>\b` regex scan     | no       |
//!
//! Both run on the case-folded shadow with a case-folded query, so matching is
//! case-insensitive on both sides.

use regex::{Regex, RegexBuilder};

use crate::corpus::{fold_case, Corpus};
use crate::types::MatchMode;
use crate::verify::contracts::check_offsets_ascending;

/// All match offsets for `query`, in corpus order.
///
/// An empty query yields nothing; callers are expected to reject it earlier.
pub fn locate(corpus: &Corpus, query: &str, mode: MatchMode) -> Vec<usize> {
    let folded_query = fold_case(query);
    if folded_query.is_empty() {
        return Vec::new();
    }

    let mut offsets = match mode {
        MatchMode::Substring => corpus
            .suffix_array()
            .lookup(corpus.folded().as_bytes(), folded_query.as_bytes()),
        MatchMode::WholeWord => match whole_word_pattern(&folded_query) {
            Some(pattern) => pattern
                .find_iter(corpus.folded())
                .map(|m| m.start())
                .collect(),
            None => Vec::new(),
        },
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::slice::ParallelSliceMut;
        offsets.par_sort_unstable();
    }
    #[cfg(not(feature = "parallel"))]
    {
        offsets.sort_unstable();
    }

    check_offsets_ascending(&offsets);
    offsets
}

/// Compile `\b<query>\b`, treating the query as literal text.
fn whole_word_pattern(folded_query: &str) -> Option<Regex> {
    let pattern = format!(r"\b{}\b", regex::escape(folded_query));
    match RegexBuilder::new(&pattern).build() {
        Ok(regex) => Some(regex),
        Err(err) => {
            tracing::warn!(query = folded_query, error = %err, "whole-word pattern rejected");
            None
        }
    }
}
