// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query orchestration: the end-to-end path for one request.
//!
//! `search` is pure and synchronous: locate, then excerpt and attribute each
//! offset, dropping offsets whose snippet trims to nothing. `respond` wraps it
//! with the correction fallback. Inside `respond` every `search` runs on the
//! blocking pool, so a frequent query never stalls the async workers; only the
//! correction round trip is awaited in place.
//!
//! A `Searcher` holds no interior mutability and shares its corpus through an
//! `Arc`, so clones are cheap and serve concurrent requests without locking.

use std::sync::Arc;

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::correct::Corrector;
use crate::types::{MatchMode, SearchRequest, SearchResponse, SearchResult};

use super::locate::locate;
use super::provenance::attribution;
use super::snippet::extract_snippet;

/// Read-only search service over one corpus.
#[derive(Debug, Clone)]
pub struct Searcher {
    corpus: Arc<Corpus>,
    config: SearchConfig,
}

impl Searcher {
    pub fn new(corpus: Corpus, config: SearchConfig) -> Self {
        Self {
            corpus: Arc::new(corpus),
            config,
        }
    }

    /// Index `text` with the default configuration.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(Corpus::from_text(text), SearchConfig::default())
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Match offsets in corpus order.
    pub fn locate(&self, query: &str, mode: MatchMode) -> Vec<usize> {
        locate(&self.corpus, query, mode)
    }

    /// Results for every match whose snippet survives trimming, in corpus order.
    pub fn search(&self, query: &str, window: usize, mode: MatchMode) -> Vec<SearchResult> {
        let offsets = self.locate(query, mode);
        let cut_at_whitespace = self.config.cuts_at_whitespace(window);

        #[cfg(feature = "parallel")]
        let results: Vec<SearchResult> = {
            use rayon::prelude::*;
            offsets
                .par_iter()
                .filter_map(|&offset| self.result_at(offset, window, cut_at_whitespace))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let results: Vec<SearchResult> = offsets
            .iter()
            .filter_map(|&offset| self.result_at(offset, window, cut_at_whitespace))
            .collect();

        tracing::debug!(
            query,
            window,
            ?mode,
            matches = offsets.len(),
            results = results.len(),
            "search finished"
        );
        results
    }

    fn result_at(&self, offset: usize, window: usize, cut_at_whitespace: bool) -> Option<SearchResult> {
        let text = extract_snippet(&self.corpus, offset, window, cut_at_whitespace);
        if text.is_empty() {
            return None;
        }
        Some(SearchResult {
            text,
            attribution: attribution(&self.corpus, offset),
        })
    }

    /// Answer a request, consulting `corrector` only when nothing matched and a
    /// credential was supplied. Correction failures leave the empty answer as is.
    pub async fn respond(&self, request: &SearchRequest, corrector: &dyn Corrector) -> SearchResponse {
        let mut results = self.search_blocking(&request.query, request.window, request.mode).await;
        let mut corrected = None;

        if results.is_empty() {
            if let Some(credential) = request.credential.as_deref() {
                if let Some(query) = self.correct(&request.query, credential, corrector).await {
                    results = self.search_blocking(&query, request.window, request.mode).await;
                    corrected = Some(query);
                }
            }
        }

        let message = summary_message(&request.query, corrected.as_deref(), results.len());
        SearchResponse {
            query: corrected.unwrap_or_else(|| request.query.clone()),
            message,
            match_whole_word: request.mode.is_whole_word(),
            results,
        }
    }

    /// [`search`](Self::search) on the blocking pool.
    async fn search_blocking(&self, query: &str, window: usize, mode: MatchMode) -> Vec<SearchResult> {
        let searcher = self.clone();
        let query = query.to_string();
        match tokio::task::spawn_blocking(move || searcher.search(&query, window, mode)).await {
            Ok(results) => results,
            Err(err) if err.is_panic() => std::panic::resume_unwind(err.into_panic()),
            Err(err) => {
                tracing::warn!(error = %err, "search task cancelled");
                Vec::new()
            }
        }
    }

    async fn correct(&self, query: &str, credential: &str, corrector: &dyn Corrector) -> Option<String> {
        let timeout = self.config.correction_timeout;
        match tokio::time::timeout(timeout, corrector.correct(query, credential)).await {
            Ok(Some(corrected)) => {
                let corrected = corrected.trim();
                (!corrected.is_empty()).then(|| corrected.to_string())
            }
            Ok(None) => None,
            Err(_) => {
                tracing::warn!(query, timeout_ms = timeout.as_millis() as u64, "query correction timed out");
                None
            }
        }
    }
}

/// Human-readable summary of a response.
///
/// ```
/// use folio::summary_message;
///
/// assert_eq!(
///     summary_message("Luke", None, 3),
///     "You searched for \"Luke\". The search returned a total of 3 results."
/// );
/// ```
pub fn summary_message(original: &str, corrected: Option<&str>, count: usize) -> String {
    let outcome = match count {
        0 => "no results. Please try with another sentence or word".to_string(),
        1 => "a total of 1 result".to_string(),
        n => format!("a total of {} results", n),
    };

    match corrected {
        Some(corrected) => format!(
            "Your search was corrected to \"{}\" by the OpenAI API. The search returned {}.",
            corrected, outcome
        ),
        None => format!("You searched for \"{}\". The search returned {}.", original, outcome),
    }
}
