// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus: one immutable text blob and its case-folded shadow.
//!
//! Everything downstream addresses the corpus by byte offset. Matching happens
//! on the shadow, snippets and attribution read the original, so the two must
//! agree on every offset. [`fold_case`] guarantees that by only lowering a
//! character when its lowercase form has the same UTF-8 width.
//!
//! # Invariants
//!
//! - `text.len() == folded.len()`
//! - `text.is_char_boundary(i) == folded.is_char_boundary(i)` for every `i`
//! - the suffix array is built over `folded` and never rebuilt
//!
//! A `Corpus` is built once at startup and shared read-only (behind an `Arc`)
//! by every request.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;
use std::time::Instant;

use crate::index::SuffixArray;
use crate::verify::contracts::check_shadow_aligned;

/// Why a corpus could not be loaded. Fatal at startup.
#[derive(Debug)]
pub enum CorpusError {
    /// The file could not be read.
    Io { path: PathBuf, source: io::Error },
    /// The file is not valid UTF-8.
    Encoding {
        path: PathBuf,
        source: FromUtf8Error,
    },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::Io { path, source } => {
                write!(f, "failed to read corpus {}: {}", path.display(), source)
            }
            CorpusError::Encoding { path, source } => {
                write!(f, "corpus {} is not valid UTF-8: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::Io { source, .. } => Some(source),
            CorpusError::Encoding { source, .. } => Some(source),
        }
    }
}

/// The searchable text, its lowercase shadow, and the suffix array over the shadow.
#[derive(Debug, Clone)]
pub struct Corpus {
    text: String,
    folded: String,
    suffix_array: SuffixArray,
}

impl Corpus {
    /// Read the whole file into memory and index it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CorpusError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|source| CorpusError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), bytes = text.len(), "read corpus");
        Ok(Self::from_text(text))
    }

    /// Index an in-memory text.
    pub fn from_text(text: impl Into<String>) -> Self {
        let started = Instant::now();
        let text = text.into();
        let folded = fold_case(&text);
        check_shadow_aligned(&text, &folded);

        let suffix_array = SuffixArray::build(folded.as_bytes());

        tracing::debug!(
            bytes = text.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built corpus index"
        );

        Self {
            text,
            folded,
            suffix_array,
        }
    }

    /// The original, case-preserved text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The case-folded shadow used for matching.
    pub fn folded(&self) -> &str {
        &self.folded
    }

    pub fn suffix_array(&self) -> &SuffixArray {
        &self.suffix_array
    }

    /// Length in bytes (identical for the text and its shadow).
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Largest char boundary `<= offset`, capped at the corpus length.
    pub fn floor_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }

    /// Smallest char boundary `>= offset`, capped at the corpus length.
    pub fn ceil_boundary(&self, offset: usize) -> usize {
        let mut offset = offset.min(self.text.len());
        while !self.text.is_char_boundary(offset) {
            offset += 1;
        }
        offset
    }
}

/// Locale-independent, width-preserving lowercase.
///
/// Characters whose lowercase form is a single character of the same UTF-8
/// width are lowered; the rest (e.g. `'İ'`, whose lowercase is two code points)
/// are kept as-is so byte offsets stay valid across the text and its shadow.
pub fn fold_case(value: &str) -> String {
    let mut folded = String::with_capacity(value.len());
    for c in value.chars() {
        folded.push(fold_char(c));
    }
    folded
}

#[inline]
fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) if l.len_utf8() == c.len_utf8() => l,
        _ => c,
    }
}
