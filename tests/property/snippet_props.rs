//! Snippet and end-to-end result properties.

use proptest::prelude::*;

use super::common::assert_display_ready;
use super::oracles::ascii_corpus_strategy;
use folio::{snippet_window, Corpus, MatchMode, Searcher};

fn mixed_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("([a-zé’Ω ,.!?]|\r\n|\n|\r){0,200}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Windows stay inside the corpus and on char boundaries, whatever the
    /// offset and size.
    #[test]
    fn prop_window_in_bounds(
        text in mixed_text_strategy(),
        offset in 0usize..260,
        window in prop_oneof![0usize..600, Just(usize::MAX)],
    ) {
        let corpus = Corpus::from_text(text.as_str());
        let range = snippet_window(&corpus, offset, window);
        prop_assert!(range.start <= range.end);
        prop_assert!(range.end <= text.len());
        prop_assert!(text.is_char_boundary(range.start));
        prop_assert!(text.is_char_boundary(range.end));
    }

    /// Results are non-empty, trimmed, and carry only the display marker.
    #[test]
    fn prop_results_display_ready(
        text in mixed_text_strategy(),
        query in "[a-z]{1,2}",
        window in 0usize..700,
    ) {
        let searcher = Searcher::from_text(text.as_str());
        for mode in [MatchMode::Substring, MatchMode::WholeWord] {
            let results = searcher.search(&query, window, mode);
            assert_display_ready(&results);
        }
    }

    /// A query cut from the text yields at least one result at window 100.
    #[test]
    fn prop_present_query_has_result(
        text in ascii_corpus_strategy(),
        start in any::<prop::sample::Index>(),
        len in 1usize..6,
    ) {
        let begin = start.index(text.len());
        let end = (begin + len).min(text.len());
        let query = &text[begin..end];
        prop_assume!(!query.trim().is_empty());

        let searcher = Searcher::from_text(text.as_str());
        prop_assert!(!searcher.search(query, 100, MatchMode::Substring).is_empty());
    }
}
