// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant errors for the corpus and its index.
//!
//! | Invariant            | What's Guaranteed                                  |
//! |----------------------|----------------------------------------------------|
//! | Shadow length        | `text.len() == folded.len()`                       |
//! | Shadow alignment     | char boundaries identical in text and shadow       |
//! | Suffix array         | permutation of `0..len`, strictly sorted suffixes  |

use crate::corpus::Corpus;
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Shadow and original differ in byte length.
    ShadowLengthMismatch { text_len: usize, folded_len: usize },
    /// A char boundary in one string is not a boundary in the other.
    MisalignedBoundary { offset: usize },
    /// Suffix array does not cover every position exactly once.
    IncompleteSuffixArray { sa_len: usize, text_len: usize },
    /// Suffix array is not sorted lexicographically.
    UnsortedSuffixArray { position: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::ShadowLengthMismatch {
                text_len,
                folded_len,
            } => {
                write!(f, "text.len() {} != folded.len() {}", text_len, folded_len)
            }
            InvariantError::MisalignedBoundary { offset } => {
                write!(f, "char boundary mismatch at byte {}", offset)
            }
            InvariantError::IncompleteSuffixArray { sa_len, text_len } => {
                write!(
                    f,
                    "suffix array has {} entries for {} bytes",
                    sa_len, text_len
                )
            }
            InvariantError::UnsortedSuffixArray { position } => {
                write!(f, "suffix array not sorted at position {}", position)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check every corpus invariant. O(n log n) in the worst case; not for hot paths.
pub fn verify_corpus(corpus: &Corpus) -> Result<(), InvariantError> {
    verify_shadow(corpus.text(), corpus.folded())?;
    verify_suffix_array(corpus.folded().as_bytes(), corpus.suffix_array().positions())
}

/// The shadow must be byte-for-byte addressable with the same offsets as the text.
pub fn verify_shadow(text: &str, folded: &str) -> Result<(), InvariantError> {
    if text.len() != folded.len() {
        return Err(InvariantError::ShadowLengthMismatch {
            text_len: text.len(),
            folded_len: folded.len(),
        });
    }
    for offset in 0..=text.len() {
        if text.is_char_boundary(offset) != folded.is_char_boundary(offset) {
            return Err(InvariantError::MisalignedBoundary { offset });
        }
    }
    Ok(())
}

/// The suffix array must be a permutation of positions in strictly increasing suffix order.
pub fn verify_suffix_array(text: &[u8], positions: &[usize]) -> Result<(), InvariantError> {
    if positions.len() != text.len() {
        return Err(InvariantError::IncompleteSuffixArray {
            sa_len: positions.len(),
            text_len: text.len(),
        });
    }

    let mut seen = vec![false; text.len()];
    for &pos in positions {
        if pos >= text.len() || seen[pos] {
            return Err(InvariantError::IncompleteSuffixArray {
                sa_len: positions.len(),
                text_len: text.len(),
            });
        }
        seen[pos] = true;
    }

    for i in 1..positions.len() {
        if text[positions[i - 1]..] >= text[positions[i]..] {
            return Err(InvariantError::UnsortedSuffixArray { position: i });
        }
    }
    Ok(())
}
