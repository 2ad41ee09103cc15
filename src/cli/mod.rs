// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Two subcommands: `serve` to run the HTTP search service over a corpus file,
//! and `search` to run one query from the terminal. Both build the same
//! [`folio::Searcher`], so terminal output matches what the service returns.

pub mod display;

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio::config::{DEFAULT_WHITESPACE_THRESHOLD, DEFAULT_WINDOW};

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Full-text search over a literary corpus with attributed snippets",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the search API over HTTP
    Serve {
        /// Corpus text file, loaded once at startup
        #[arg(long, env = "FOLIO_CORPUS")]
        corpus: PathBuf,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value = "3001")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: IpAddr,

        /// Windows smaller than this also cut snippets at spaces
        #[arg(long, default_value_t = DEFAULT_WHITESPACE_THRESHOLD)]
        whitespace_threshold: usize,

        /// OpenAI-compatible chat completions endpoint used for query correction
        #[arg(long, default_value = folio::correct::DEFAULT_ENDPOINT)]
        correction_endpoint: String,

        /// Model asked for corrections
        #[arg(long, default_value = folio::correct::DEFAULT_MODEL)]
        correction_model: String,

        /// Upper bound on one correction round trip, in seconds
        #[arg(long, default_value = "10")]
        correction_timeout_secs: u64,
    },

    /// Run one query and print the results
    Search {
        /// Corpus text file
        #[arg(long, env = "FOLIO_CORPUS")]
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Snippet window in bytes
        #[arg(short, long, default_value_t = DEFAULT_WINDOW)]
        size: usize,

        /// Only match whole words
        #[arg(short, long)]
        whole_word: bool,

        /// Credential for the correction service; enables correction on empty results
        #[arg(short, long, env = "OPENAI_API_KEY", hide_env_values = true)]
        key: Option<String>,

        /// Print the raw JSON response instead of formatted results
        #[arg(long)]
        json: bool,
    },
}
