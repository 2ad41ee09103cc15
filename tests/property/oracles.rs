//! Reference oracles for differential testing.
//!
//! Simple, obviously-correct implementations used as ground truth for the
//! indexed pipeline. They are quadratic and only fit for small inputs.

use proptest::prelude::*;

use super::common::naive_offsets;
use folio::{locate, trim_sentences, Corpus, MatchMode};

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Offsets of `word` in ASCII `text` bounded by non-word bytes or the edges.
pub fn oracle_whole_word(text: &str, word: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    naive_offsets(text, word)
        .into_iter()
        .filter(|&i| {
            let end = i + word.len();
            let before = i == 0 || !is_word_byte(bytes[i - 1]);
            let after = end == bytes.len() || !is_word_byte(bytes[end]);
            before && after
        })
        .collect()
}

/// Character-by-character sentence trim.
pub fn oracle_trim(text: &str, cut_at_whitespace: bool) -> String {
    let terminators: Vec<usize> = text
        .char_indices()
        .filter(|&(_, c)| matches!(c, '.' | ',' | '?' | '!') || (cut_at_whitespace && c == ' '))
        .map(|(i, _)| i)
        .collect();
    match (terminators.first(), terminators.last()) {
        (Some(&first), Some(&last)) if first != last => text[first + 1..=last].trim().to_string(),
        _ => String::new(),
    }
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Lowercase words with occasional capitals, joined by spaces, commas and CRLF line ends.
pub fn ascii_corpus_strategy() -> impl Strategy<Value = String> {
    let word = prop::string::string_regex("[a-zA-Z]{2,8}").unwrap();
    let separator = prop::sample::select(vec![" ", " ", " ", ", ", ".\r\n", "? ", ",\n"]);
    prop::collection::vec((word, separator), 3..40).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(w, s)| format!("{}{}", w, s))
            .collect()
    })
}

// =============================================================================
// DIFFERENTIAL TESTS
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Indexed substring lookup finds exactly the naive scan's offsets.
    #[test]
    fn prop_substring_matches_oracle(
        text in ascii_corpus_strategy(),
        start in any::<prop::sample::Index>(),
        len in 1usize..6,
    ) {
        let begin = start.index(text.len());
        let end = (begin + len).min(text.len());
        let query = &text[begin..end];

        let corpus = Corpus::from_text(text.as_str());
        prop_assert_eq!(
            locate(&corpus, query, MatchMode::Substring),
            naive_offsets(&text, query)
        );
    }

    /// Whole-word regex lookup agrees with the boundary-filtered naive scan.
    #[test]
    fn prop_whole_word_matches_oracle(
        text in ascii_corpus_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let words: Vec<&str> = text
            .split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();
        let word = words[pick.index(words.len())];

        let corpus = Corpus::from_text(text.as_str());
        prop_assert_eq!(
            locate(&corpus, word, MatchMode::WholeWord),
            oracle_whole_word(&text, word)
        );
    }

    /// `trim_sentences` agrees with the char-by-char oracle.
    #[test]
    fn prop_trim_matches_oracle(text in "[a-z .,?!é’]{0,60}", ws in any::<bool>()) {
        let expected = oracle_trim(&text, ws);
        prop_assert_eq!(trim_sentences(&text, ws), expected.as_str());
    }
}
