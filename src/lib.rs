// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory full-text search over a single literary corpus.
//!
//! The corpus is loaded once, case-folded into a byte-aligned shadow, and
//! indexed with a suffix array. Every query then runs the same one-way
//! pipeline and returns matches in corpus order, never ranked.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────────┐
//! │  corpus/    │────▶│ search/      │────▶│ search/snippet.rs  │──┐
//! │ (text,      │     │ locate.rs    │     │ (window, <br>,     │  │
//! │  shadow, SA)│     │ (offsets)    │     │  trim_sentences)   │  │
//! └─────────────┘     └──────────────┘     └────────────────────┘  │
//!                             │            ┌────────────────────┐  │
//!                             └───────────▶│ search/provenance  │──┤
//!                                          │ (title, act)       │  │
//!                                          └────────────────────┘  ▼
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────────────┐
//! │  server/    │◀────│  correct/    │◀────│ search/query.rs        │
//! │ (GET        │     │ (fallback on │     │ (Searcher, messages)   │
//! │  /search)   │     │  no results) │     └────────────────────────┘
//! └─────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use folio::{MatchMode, Searcher};
//!
//! let searcher = Searcher::from_text("To be or not to be, that is the question:");
//! let results = searcher.search("be", 10, MatchMode::Substring);
//!
//! let snippets: Vec<&str> = results.iter().map(|r| r.text.as_str()).collect();
//! assert_eq!(snippets, ["be", "to be,"]);
//! assert_eq!(results[0].attribution, "?");
//! ```

pub mod config;
pub mod corpus;
pub mod correct;
pub mod index;
mod search;
pub mod server;
mod types;
pub mod verify;

#[doc(hidden)]
pub mod testing;

pub use config::SearchConfig;
pub use corpus::{fold_case, Corpus, CorpusError};
pub use correct::{Corrector, FnCorrector, NoCorrection};
pub use search::provenance::{
    ACT_PREFIX, ATTRIBUTION_SEPARATOR, CONTENTS_MARKER, UNKNOWN_TITLE,
};
pub use search::snippet::{LINE_BREAK_MARKER, SENTENCE_TERMINATORS};
pub use search::{
    attribution, extract_snippet, locate, recover_act, recover_work_title, render_line_breaks,
    snippet_window, summary_message, trim_sentences, Searcher,
};
pub use types::{parse_window, MatchMode, SearchError, SearchRequest, SearchResponse, SearchResult};
pub use verify::{verify_corpus, InvariantError};
