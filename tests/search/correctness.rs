//! Substring search results: snippets, attributions, ordering.

use super::common::{
    assert_display_ready, attributions, complete_works, soliloquy, texts, HAMLET_ACT_I,
    HAMLET_ACT_III, SONNETS_ATTRIBUTION,
};
use folio::{MatchMode, SearchConfig, Searcher};

#[test]
fn test_reference_query_be_window_10() {
    let results = soliloquy().search("be", 10, MatchMode::Substring);
    assert_eq!(texts(&results), vec!["be", "to be,"]);
    assert_eq!(attributions(&results), vec!["?", "?"]);
}

#[test]
fn test_results_in_corpus_order_across_works() {
    let results = complete_works().search("be", 10, MatchMode::Substring);
    assert_eq!(texts(&results), vec!["bear", "be,", "to be,"]);
    assert_eq!(
        attributions(&results),
        vec![SONNETS_ATTRIBUTION, HAMLET_ACT_III, HAMLET_ACT_III]
    );
}

#[test]
fn test_query_is_case_insensitive() {
    let searcher = complete_works();
    let upper = searcher.search("WHO’S THERE", 30, MatchMode::Substring);
    let lower = searcher.search("who’s there", 30, MatchMode::Substring);
    assert_eq!(upper, lower);
    assert_eq!(texts(&upper), vec!["<br>Who’s there?"]);
    assert_eq!(attributions(&upper), vec![HAMLET_ACT_I]);
}

#[test]
fn test_snippets_keep_original_case() {
    let results = complete_works().search("slings", 60, MatchMode::Substring);
    assert_eq!(
        texts(&results),
        vec!["in the mind to suffer<br>The slings and arrows of"]
    );
}

#[test]
fn test_substring_matches_inside_words() {
    let results = soliloquy().search("questio", 10, MatchMode::Substring);
    assert_eq!(texts(&results), vec!["the"]);
}

#[test]
fn test_empty_snippets_are_dropped() {
    assert!(soliloquy().search("be", 0, MatchMode::Substring).is_empty());

    // 14 occurrences of "the", but only 6 of the 8-byte windows hold two terminators
    let works = complete_works();
    assert_eq!(works.locate("the", MatchMode::Substring).len(), 14);
    let results = works.search("the", 8, MatchMode::Substring);
    assert_eq!(
        texts(&results),
        vec!["as the", "the", "in the", "is the", "in the", "the"]
    );
}

#[test]
fn test_large_window_reaches_corpus_edges() {
    let results = complete_works().search("sleep", 500, MatchMode::Substring);
    assert_eq!(results.len(), 2);
    assert!(results[0].text.ends_with("That flesh is heir to."));
    assert_display_ready(&results);
}

#[test]
fn test_absent_query_returns_nothing() {
    assert!(complete_works()
        .search("yorick", 500, MatchMode::Substring)
        .is_empty());
}

#[test]
fn test_whitespace_threshold_is_configurable() {
    let text = folio::testing::SOLILOQUY;
    let strict = Searcher::new(
        folio::Corpus::from_text(text),
        SearchConfig {
            whitespace_threshold: 0,
            ..SearchConfig::default()
        },
    );
    // Without spaces as terminators a 10-byte window around "be" has at most one comma
    assert!(strict.search("be", 10, MatchMode::Substring).is_empty());
}
