// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::config::SearchConfig;
use crate::corpus::Corpus;
use crate::search::Searcher;

/// The opening of Hamlet's soliloquy, with no title or act headings.
pub const SOLILOQUY: &str = "To be or not to be, that is the question:\r\n\
Whether 'tis nobler in the mind to suffer\r\n\
The slings and arrows of outrageous fortune,\r\n\
Or to take arms against a sea of troubles,\r\n\
And by opposing end them?";

/// Two works laid out the way the Complete Works text lays them out: title,
/// `Contents` marker, then the body with act headings.
pub const COMPLETE_WORKS: &str = "THE SONNETS\r\n\
\r\n\
Contents\r\n\
\r\n\
by William Shakespeare\r\n\
\r\n\
                    1\r\n\
\r\n\
From fairest creatures we desire increase,\r\n\
That thereby beauty’s rose might never die,\r\n\
But as the riper should by time decease,\r\n\
His tender heir might bear his memory.\r\n\
\r\n\
\r\n\
THE TRAGEDY OF HAMLET, PRINCE OF DENMARK\r\n\
\r\n\
Contents\r\n\
\r\n\
ACT I\r\n\
SCENE I. Elsinore. A platform before the Castle.\r\n\
\r\n\
BERNARDO.\r\n\
Who’s there?\r\n\
\r\n\
FRANCISCO.\r\n\
Nay, answer me. Stand and unfold yourself.\r\n\
\r\n\
ACT III. SCENE I. A room in the Castle.\r\n\
\r\n\
HAMLET.\r\n\
To be, or not to be, that is the question:\r\n\
Whether ’tis nobler in the mind to suffer\r\n\
The slings and arrows of outrageous fortune,\r\n\
Or to take arms against a sea of troubles,\r\n\
And by opposing end them? To die, to sleep;\r\n\
No more; and by a sleep to say we end\r\n\
The heart-ache and the thousand natural shocks\r\n\
That flesh is heir to.\r\n";

/// Attribution of every match in the sonnets part of [`COMPLETE_WORKS`].
pub const SONNETS_ATTRIBUTION: &str = "THE SONNETS";

/// Attributions inside Hamlet, by act.
pub const HAMLET_ACT_I: &str = "THE TRAGEDY OF HAMLET, PRINCE OF DENMARK - ACT I";
pub const HAMLET_ACT_III: &str = "THE TRAGEDY OF HAMLET, PRINCE OF DENMARK - ACT III";

pub fn complete_works() -> Searcher {
    Searcher::new(Corpus::from_text(COMPLETE_WORKS), SearchConfig::default())
}

pub fn soliloquy() -> Searcher {
    Searcher::new(Corpus::from_text(SOLILOQUY), SearchConfig::default())
}

/// Every offset where `needle` occurs in the folded `haystack`, overlaps included.
pub fn naive_offsets(haystack: &str, needle: &str) -> Vec<usize> {
    let folded = crate::corpus::fold_case(haystack);
    let needle = crate::corpus::fold_case(needle);
    if needle.is_empty() {
        return Vec::new();
    }
    let (text, pattern) = (folded.as_bytes(), needle.as_bytes());
    (0..text.len())
        .filter(|&i| text[i..].starts_with(pattern))
        .collect()
}

/// Synthetic corpus of `works` works with `lines` verse lines each.
pub fn synthetic_corpus(works: usize, lines: usize) -> String {
    const VERSE: [&str; 6] = [
        "Shall I compare thee to a summer’s day?",
        "Thou art more lovely and more temperate.",
        "Rough winds do shake the darling buds of May,",
        "And summer’s lease hath all too short a date.",
        "Now is the winter of our discontent",
        "Made glorious summer by this sun of York;",
    ];

    let mut text = String::new();
    for w in 0..works {
        text.push_str(&format!("WORK NUMBER {}\r\n\r\nContents\r\n\r\n", w + 1));
        for l in 0..lines {
            if l % 50 == 0 {
                text.push_str(&format!("ACT {}. SCENE I.\r\n\r\n", l / 50 + 1));
            }
            text.push_str(VERSE[(w + l) % VERSE.len()]);
            text.push_str("\r\n");
        }
        text.push_str("\r\n\r\n");
    }
    text
}
