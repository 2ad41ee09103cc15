//! Match locator properties.

use proptest::prelude::*;

use super::oracles::ascii_corpus_strategy;
use folio::{fold_case, locate, verify_corpus, Corpus, MatchMode};

/// Words drawn from several scripts, including ones whose case mapping
/// changes UTF-8 width.
fn unicode_text_strategy() -> impl Strategy<Value = String> {
    let word = prop::sample::select(vec![
        "Café", "NAÏVE", "résumé", "Über", "tōkyō", "İstanbul", "ẞtraße", "Ⱥpple",
        "Luke’s", "TO", "be", "ΣΟΦΊΑ", "తెలుగు", "ǅemal",
    ]);
    prop::collection::vec(word, 1..12).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// The shadow stays byte-aligned with the original for any input.
    #[test]
    fn prop_shadow_aligned(text in unicode_text_strategy()) {
        let corpus = Corpus::from_text(text.as_str());
        prop_assert_eq!(corpus.folded().len(), corpus.text().len());
        prop_assert!(verify_corpus(&corpus).is_ok());
    }

    /// Every match offset is a char boundary of the original text.
    #[test]
    fn prop_offsets_are_char_boundaries(
        text in unicode_text_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let words: Vec<&str> = text.split(' ').collect();
        let query = words[pick.index(words.len())];
        let corpus = Corpus::from_text(text.as_str());

        for mode in [MatchMode::Substring, MatchMode::WholeWord] {
            for offset in locate(&corpus, query, mode) {
                prop_assert!(text.is_char_boundary(offset));
                prop_assert!(text.is_char_boundary(offset + query.len()));
            }
        }
    }

    /// Any query that occurs in the text is found, whatever its case.
    #[test]
    fn prop_present_query_found_case_insensitively(
        text in ascii_corpus_strategy(),
        start in any::<prop::sample::Index>(),
        len in 1usize..6,
        upper in any::<bool>(),
    ) {
        let begin = start.index(text.len());
        let end = (begin + len).min(text.len());
        let query = if upper {
            text[begin..end].to_ascii_uppercase()
        } else {
            text[begin..end].to_ascii_lowercase()
        };

        let corpus = Corpus::from_text(text.as_str());
        let offsets = locate(&corpus, &query, MatchMode::Substring);
        prop_assert!(offsets.contains(&begin));
        prop_assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        for offset in offsets {
            prop_assert_eq!(&corpus.folded()[offset..offset + query.len()], fold_case(&query));
        }
    }

    /// Whole-word offsets never sit inside a longer token.
    #[test]
    fn prop_whole_word_never_mid_token(
        text in ascii_corpus_strategy(),
        query in "[a-z]{1,4}",
    ) {
        let corpus = Corpus::from_text(text.as_str());
        let bytes = text.as_bytes();
        let substring = locate(&corpus, &query, MatchMode::Substring);

        for offset in locate(&corpus, &query, MatchMode::WholeWord) {
            prop_assert!(substring.contains(&offset));
            let end = offset + query.len();
            prop_assert!(offset == 0 || !bytes[offset - 1].is_ascii_alphanumeric());
            prop_assert!(end == bytes.len() || !bytes[end].is_ascii_alphanumeric());
        }
    }
}
