// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Provenance: which work (and act) a match belongs to.
//!
//! This is a parser for one corpus layout, not a general title extractor. The
//! Complete Works text puts every title right above a `Contents` line:
//!
//! ```text
//! THE SONNETS           ◀── title: first non-empty line above the marker
//!
//! Contents              ◀── CONTENTS_MARKER
//!
//! ...
//! ACT I                 ◀── act: nearest line above the match starting "ACT "
//! SCENE I. Elsinore.
//! ...match...
//! ```
//!
//! Both scans walk lines backward from the match offset, so cost grows with the
//! distance to the nearest heading rather than with the corpus size.

use crate::corpus::Corpus;

/// Line that sits directly below each work's title.
pub const CONTENTS_MARKER: &str = "Contents";

/// Prefix of act headings.
pub const ACT_PREFIX: &str = "ACT ";

/// Title reported when no `Contents` marker precedes the match.
pub const UNKNOWN_TITLE: &str = "?";

/// Joins title and act in an attribution.
pub const ATTRIBUTION_SEPARATOR: &str = " - ";

/// Text before `offset`, floored to a char boundary.
fn prefix(corpus: &Corpus, offset: usize) -> &str {
    &corpus.text()[..corpus.floor_boundary(offset)]
}

/// Title of the work containing `offset`, or [`UNKNOWN_TITLE`].
pub fn recover_work_title(corpus: &Corpus, offset: usize) -> &str {
    let mut marker_seen = false;
    for line in prefix(corpus, offset).lines().rev() {
        if marker_seen && !line.is_empty() {
            return line;
        }
        if line == CONTENTS_MARKER {
            marker_seen = true;
        }
    }
    UNKNOWN_TITLE
}

/// Act heading above `offset`, cut at its first period (`"ACT I. SCENE 2"` → `"ACT I"`).
pub fn recover_act(corpus: &Corpus, offset: usize) -> Option<&str> {
    prefix(corpus, offset)
        .lines()
        .rev()
        .find(|line| line.starts_with(ACT_PREFIX))
        .map(|line| line.split('.').next().unwrap_or(line))
}

/// `"TITLE"` or `"TITLE - ACT N"`.
pub fn attribution(corpus: &Corpus, offset: usize) -> String {
    let title = recover_work_title(corpus, offset);
    match recover_act(corpus, offset) {
        Some(act) if !act.is_empty() => format!("{title}{ATTRIBUTION_SEPARATOR}{act}"),
        _ => title.to_string(),
    }
}
