// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction: offset → readable excerpt.
//!
//! # Pipeline
//!
//! ```text
//! offset, window ──▶ [offset - window/2, offset + window/2)   clamp to corpus,
//!                                                              snap to char boundaries
//!                ──▶ "\r\n" | "\n" | "\r"  →  "<br>"
//!                ──▶ keep text after the first terminator up to and
//!                    including the last one, then trim
//! ```
//!
//! Trimming is lossy on purpose: a window that holds fewer than two terminators
//! has no complete fragment to show and yields an empty snippet, which the
//! orchestrator drops.

use std::ops::Range;

use crate::corpus::Corpus;
use crate::verify::contracts::check_window_in_bounds;

/// Display replacement for every line break inside a snippet.
pub const LINE_BREAK_MARKER: &str = "<br>";

/// Characters that end a sentence (or clause) for trimming purposes.
pub const SENTENCE_TERMINATORS: [char; 4] = ['.', ',', '?', '!'];

/// Byte range of the window around `offset`, clamped and snapped outward to
/// char boundaries. Never extends past either end of the corpus.
pub fn snippet_window(corpus: &Corpus, offset: usize, window: usize) -> Range<usize> {
    let half = window / 2;
    let start = corpus.floor_boundary(offset.saturating_sub(half));
    let end = corpus.ceil_boundary(offset.saturating_add(half));
    let start = start.min(end);

    check_window_in_bounds(corpus.text(), start, end);
    start..end
}

/// Extract the display-ready snippet for a match at `offset`.
///
/// Returns an empty string when the window has no interior sentence structure.
pub fn extract_snippet(
    corpus: &Corpus,
    offset: usize,
    window: usize,
    cut_at_whitespace: bool,
) -> String {
    let range = snippet_window(corpus, offset, window);
    let rendered = render_line_breaks(&corpus.text()[range]);
    trim_sentences(&rendered, cut_at_whitespace).to_string()
}

/// Replace each `\r\n`, `\n` or lone `\r` with [`LINE_BREAK_MARKER`].
pub fn render_line_breaks(raw: &str) -> String {
    let mut rendered = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                rendered.push_str(LINE_BREAK_MARKER);
            }
            '\n' => rendered.push_str(LINE_BREAK_MARKER),
            _ => rendered.push(c),
        }
    }
    rendered
}

/// Drop the partial sentences at both ends of `text`.
///
/// Keeps everything after the first terminator up to and including the last
/// one, with surrounding whitespace removed. With `cut_at_whitespace` an ASCII
/// space also counts as a terminator, which trims to word boundaries when the
/// window is too small to contain punctuation. Fewer than two terminators
/// yields `""`.
///
/// ```
/// use folio::trim_sentences;
///
/// let raw = "entence. This is the second sentence. This is the third sentence. Thi";
/// assert_eq!(
///     trim_sentences(raw, false),
///     "This is the second sentence. This is the third sentence."
/// );
/// ```
pub fn trim_sentences(text: &str, cut_at_whitespace: bool) -> &str {
    let is_terminator =
        |c: char| SENTENCE_TERMINATORS.contains(&c) || (cut_at_whitespace && c == ' ');

    let (Some(first), Some(last)) = (text.find(is_terminator), text.rfind(is_terminator)) else {
        return "";
    };
    if first == last {
        return "";
    }

    // Terminators are ASCII, so +1 stays on a char boundary
    text[first + 1..last + 1].trim()
}
