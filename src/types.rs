// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request and response shapes.
//!
//! These types cross the wire as JSON (camelCase), so field names here are the
//! public contract of the `/search` endpoint:
//!
//! ```text
//! { "query": "...", "message": "...", "matchWholeWord": false,
//!   "results": [ { "text": "...", "attribution": "HAMLET - ACT I" } ] }
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DEFAULT_WINDOW;

/// How a query is matched against the corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    /// Any occurrence, including inside longer words and overlapping ones.
    #[default]
    Substring,
    /// Only occurrences bounded by non-word characters or the text edges.
    WholeWord,
}

impl MatchMode {
    /// `"on"` (the HTML checkbox value) enables whole-word mode; anything else doesn't.
    pub fn from_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("on") => MatchMode::WholeWord,
            _ => MatchMode::Substring,
        }
    }

    pub fn is_whole_word(self) -> bool {
        self == MatchMode::WholeWord
    }
}

/// One displayable hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Trimmed snippet with line breaks rendered as `<br>`.
    pub text: String,
    /// Work title, optionally followed by `" - "` and the act.
    pub attribution: String,
}

/// The full answer to one request. `results` are in corpus order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// The corrected query when a correction was used, otherwise the original.
    pub query: String,
    pub message: String,
    pub match_whole_word: bool,
    pub results: Vec<SearchResult>,
}

/// Errors reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// `q` was absent or empty.
    MissingQuery,
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::MissingQuery => write!(f, "missing search query in URL params"),
        }
    }
}

impl std::error::Error for SearchError {}

/// A validated search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub window: usize,
    pub mode: MatchMode,
    /// Credential for the correction service; `None` disables correction.
    pub credential: Option<String>,
}

impl SearchRequest {
    /// Build a request with the default window, substring mode, and no correction.
    pub fn new(query: impl Into<String>) -> Result<Self, SearchError> {
        let query = query.into();
        if query.is_empty() {
            return Err(SearchError::MissingQuery);
        }
        Ok(Self {
            query,
            window: DEFAULT_WINDOW,
            mode: MatchMode::Substring,
            credential: None,
        })
    }

    /// Interpret raw query parameters (`q`, `s`, `mw`, `k`).
    ///
    /// - `q` missing or empty is the only error
    /// - `s` missing, empty or non-numeric falls back to `default_window`;
    ///   negative values become 0 (no snippet survives trimming)
    /// - `mw == "on"` selects whole-word mode
    /// - an empty `k` is the same as no `k`
    pub fn from_params(
        q: Option<&str>,
        s: Option<&str>,
        mw: Option<&str>,
        k: Option<&str>,
        default_window: usize,
    ) -> Result<Self, SearchError> {
        let query = match q {
            Some(q) if !q.is_empty() => q.to_string(),
            _ => return Err(SearchError::MissingQuery),
        };

        Ok(Self {
            query,
            window: parse_window(s, default_window),
            mode: MatchMode::from_flag(mw),
            credential: k.filter(|k| !k.is_empty()).map(str::to_string),
        })
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        let credential = credential.into();
        self.credential = (!credential.is_empty()).then_some(credential);
        self
    }
}

/// Parse a window size parameter.
pub fn parse_window(raw: Option<&str>, default_window: usize) -> usize {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return default_window;
    };
    match raw.parse::<i64>() {
        Ok(n) if n < 0 => 0,
        Ok(n) => usize::try_from(n).unwrap_or(usize::MAX),
        Err(_) => default_window,
    }
}
