// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query correction: the fallback consulted when a search finds nothing.
//!
//! Correction is an injected capability. The orchestrator only sees
//! [`Corrector`], so tests swap in a closure and production wires up the
//! HTTP-backed [`OpenAiCorrector`]. Implementations never fail loudly: any
//! problem degrades to `None`, meaning "no correction available".

mod openai;

pub use openai::{CorrectionError, OpenAiCorrector, DEFAULT_ENDPOINT, DEFAULT_MODEL};

use futures::future::{self, BoxFuture, FutureExt};

/// Suggests a corrected query for a misspelled one.
pub trait Corrector: Send + Sync {
    /// Best-effort correction of `query`, authorized by `credential`.
    fn correct<'a>(&'a self, query: &'a str, credential: &'a str) -> BoxFuture<'a, Option<String>>;
}

/// Never corrects anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCorrection;

impl Corrector for NoCorrection {
    fn correct<'a>(&'a self, _query: &'a str, _credential: &'a str) -> BoxFuture<'a, Option<String>> {
        future::ready(None).boxed()
    }
}

/// Adapts a synchronous closure `(query, credential) -> Option<String>`.
pub struct FnCorrector<F>(pub F);

impl<F> Corrector for FnCorrector<F>
where
    F: Fn(&str, &str) -> Option<String> + Send + Sync,
{
    fn correct<'a>(&'a self, query: &'a str, credential: &'a str) -> BoxFuture<'a, Option<String>> {
        future::ready((self.0)(query, credential)).boxed()
    }
}

/// Normalize a raw model completion into a query string.
///
/// Strips trailing non-word characters (models like to add a closing quote or
/// period), drops double quotes and newlines, and trims whitespace.
pub fn clean_completion(raw: &str) -> String {
    let stripped = raw.trim_end_matches(|c: char| !is_word_char(c));
    stripped
        .chars()
        .filter(|&c| c != '"' && c != '\n' && c != '\r')
        .collect::<String>()
        .trim()
        .to_string()
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
