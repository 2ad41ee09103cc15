//! Loading corpora from disk.

use std::io::Write;

use super::common::{COMPLETE_WORKS, HAMLET_ACT_I};
use folio::{verify_corpus, Corpus, CorpusError, MatchMode, SearchConfig, Searcher};
use tempfile::NamedTempFile;

fn corpus_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write corpus");
    file.flush().expect("flush corpus");
    file
}

#[test]
fn test_load_matches_in_memory_corpus() {
    let file = corpus_file(COMPLETE_WORKS.as_bytes());
    let loaded = Corpus::load(file.path()).unwrap();
    let in_memory = Corpus::from_text(COMPLETE_WORKS);

    assert_eq!(loaded.text(), in_memory.text());
    assert_eq!(loaded.folded(), in_memory.folded());
    assert_eq!(loaded.suffix_array().positions(), in_memory.suffix_array().positions());
    assert_eq!(verify_corpus(&loaded), Ok(()));
}

#[test]
fn test_loaded_corpus_searches() {
    let file = corpus_file(COMPLETE_WORKS.as_bytes());
    let searcher = Searcher::new(Corpus::load(file.path()).unwrap(), SearchConfig::default());
    let results = searcher.search("who’s there", 30, MatchMode::Substring);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].attribution, HAMLET_ACT_I);
}

#[test]
fn test_empty_file_is_empty_corpus() {
    let file = corpus_file(b"");
    let corpus = Corpus::load(file.path()).unwrap();
    assert!(corpus.is_empty());
    assert!(Searcher::new(corpus, SearchConfig::default())
        .search("be", 500, MatchMode::Substring)
        .is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-corpus.txt");
    match Corpus::load(&missing) {
        Err(CorpusError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Io error, got {:?}", other.map(|c| c.len())),
    }
}

#[test]
fn test_invalid_utf8_is_encoding_error() {
    let file = corpus_file(b"To be or \xff\xfe not to be");
    let err = Corpus::load(file.path()).unwrap_err();
    assert!(matches!(err, CorpusError::Encoding { .. }));
    assert!(err.to_string().contains(&file.path().display().to_string()));
}
