// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search pipeline: locate, excerpt, attribute.
//!
//! Data flows one way. The locator turns a query into ascending byte offsets on
//! the case-folded shadow; for each offset the snippet extractor cuts a window
//! of the original text and the provenance resolver walks backward to find the
//! enclosing work and act. The [`Searcher`] composes the three and owns the
//! correction fallback.

pub mod locate;
pub mod provenance;
pub mod query;
pub mod snippet;

pub use locate::locate;
pub use provenance::{attribution, recover_act, recover_work_title};
pub use query::{summary_message, Searcher};
pub use snippet::{extract_snippet, render_line_breaks, snippet_window, trim_sentences};
