// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::net::SocketAddr;
use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use folio::correct::{NoCorrection, OpenAiCorrector};
use folio::server::{self, AppState};
use folio::{Corpus, MatchMode, SearchConfig, SearchRequest, Searcher};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{display, Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Serve {
            corpus,
            port,
            bind,
            whitespace_threshold,
            correction_endpoint,
            correction_model,
            correction_timeout_secs,
        } => {
            let config = SearchConfig {
                whitespace_threshold,
                correction_timeout: Duration::from_secs(correction_timeout_secs),
                ..SearchConfig::default()
            };
            run_serve(
                &corpus,
                SocketAddr::new(bind, port),
                config,
                &correction_endpoint,
                &correction_model,
            )
            .await
        }
        Commands::Search {
            corpus,
            query,
            size,
            whole_word,
            key,
            json,
        } => run_search(&corpus, query, size, whole_word, key, json).await,
    };

    if let Err(e) = outcome {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn load_searcher(path: &Path, config: SearchConfig) -> Result<Searcher> {
    let start = Instant::now();
    let corpus = Corpus::load(path).with_context(|| format!("failed to load corpus {}", path.display()))?;
    tracing::info!(
        bytes = corpus.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "corpus indexed"
    );
    Ok(Searcher::new(corpus, config))
}

async fn run_serve(
    corpus: &Path,
    addr: SocketAddr,
    config: SearchConfig,
    endpoint: &str,
    model: &str,
) -> Result<()> {
    let timeout = config.correction_timeout;
    let searcher = load_searcher(corpus, config)?;
    let corrector = OpenAiCorrector::new(endpoint, model, timeout).context("failed to build correction client")?;

    server::serve(addr, AppState::new(searcher, corrector))
        .await
        .with_context(|| format!("server on {} failed", addr))
}

async fn run_search(
    corpus: &Path,
    query: String,
    size: usize,
    whole_word: bool,
    key: Option<String>,
    json: bool,
) -> Result<()> {
    let config = SearchConfig::default();
    let timeout = config.correction_timeout;
    let searcher = load_searcher(corpus, config)?;

    let mode = if whole_word {
        MatchMode::WholeWord
    } else {
        MatchMode::Substring
    };
    let mut request = SearchRequest::new(query)?.with_window(size).with_mode(mode);
    if let Some(key) = key {
        request = request.with_credential(key);
    }

    let response = if request.credential.is_some() {
        let corrector = OpenAiCorrector::new(
            folio::correct::DEFAULT_ENDPOINT,
            folio::correct::DEFAULT_MODEL,
            timeout,
        )
        .context("failed to build correction client")?;
        searcher.respond(&request, &corrector).await
    } else {
        searcher.respond(&request, &NoCorrection).await
    };

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&response).context("failed to encode response")?
        );
    } else {
        display::print_response(&response);
    }
    Ok(())
}
