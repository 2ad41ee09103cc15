//! Whole-word mode: boundaries, fragments, punctuation.

use super::common::{complete_works, soliloquy, texts};
use folio::MatchMode;

#[test]
fn test_fragment_of_word_not_matched() {
    assert!(soliloquy()
        .search("questio", 10, MatchMode::WholeWord)
        .is_empty());
    assert_eq!(
        texts(&soliloquy().search("question", 20, MatchMode::WholeWord)),
        vec!["is the"]
    );
}

#[test]
fn test_whole_word_subset_of_substring() {
    let searcher = complete_works();
    for query in ["the", "to", "heir", "be", "a"] {
        let whole = searcher.locate(query, MatchMode::WholeWord);
        let any = searcher.locate(query, MatchMode::Substring);
        assert!(
            whole.iter().all(|o| any.contains(o)),
            "whole-word offsets for {:?} not a subset",
            query
        );
    }
}

#[test]
fn test_whole_word_skips_longer_words() {
    let searcher = complete_works();
    let whole = searcher.locate("the", MatchMode::WholeWord);
    let text = folio::testing::COMPLETE_WORKS;
    for offset in whole {
        let after = text[offset + 3..].chars().next();
        assert!(
            !after.is_some_and(char::is_alphanumeric),
            "offset {} continues into a longer word",
            offset
        );
    }
    // "there", "thereby", "then" and "thee" never appear as whole-word "the"
    assert!(searcher.locate("there", MatchMode::WholeWord).len() == 1);
}

#[test]
fn test_hyphen_is_a_word_boundary() {
    let results = complete_works().search("ache", 30, MatchMode::WholeWord);
    assert_eq!(texts(&results), vec!["heart-ache and the"]);
}

#[test]
fn test_whole_word_in_order() {
    let results = complete_works().search("to", 20, MatchMode::WholeWord);
    assert_eq!(
        texts(&results),
        vec![
            "<br>To be, or",
            "or not to be,",
            "the mind to",
            "<br>Or to take",
            "them? To die,",
            "To die, to",
            "a sleep to say we",
            "is heir to.",
        ]
    );
}

#[test]
fn test_regex_metacharacters_are_literal() {
    let searcher = complete_works();
    assert!(searcher.locate("the.", MatchMode::WholeWord).is_empty());
    assert_eq!(searcher.locate("them?", MatchMode::Substring).len(), 1);
    assert!(searcher.locate("(", MatchMode::WholeWord).is_empty());
}
