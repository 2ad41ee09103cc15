// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP transport for the search service.
//!
//! One route, `GET /search?q=&s=&mw=&k=`, answered with a JSON
//! [`SearchResponse`]. The state is immutable after startup, so every handler
//! shares the same `Arc`s without locking.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;

use crate::correct::Corrector;
use crate::search::Searcher;
use crate::types::{SearchRequest, SearchResponse};

/// Body returned when a response cannot be serialized.
pub const ENCODING_FAILURE: &str = "encoding failure";

/// Shared, read-only handler state.
#[derive(Clone)]
pub struct AppState {
    pub searcher: Arc<Searcher>,
    pub corrector: Arc<dyn Corrector>,
}

impl AppState {
    pub fn new(searcher: Searcher, corrector: impl Corrector + 'static) -> Self {
        Self {
            searcher: Arc::new(searcher),
            corrector: Arc::new(corrector),
        }
    }
}

/// Raw query parameters. Everything is optional here; validation happens in
/// [`SearchRequest::from_params`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SearchParams {
    pub q: Option<String>,
    pub s: Option<String>,
    pub mw: Option<String>,
    pub k: Option<String>,
}

impl SearchParams {
    /// Collect decoded `key=value` pairs. A repeated key keeps its first value;
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "q" => &mut params.q,
                "s" => &mut params.s,
                "mw" => &mut params.mw,
                "k" => &mut params.k,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        params
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/search", get(handle_search))
        .with_state(state)
}

async fn handle_search(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = SearchParams::from_pairs(pairs);
    let request = match SearchRequest::from_params(
        params.q.as_deref(),
        params.s.as_deref(),
        params.mw.as_deref(),
        params.k.as_deref(),
        state.searcher.config().default_window,
    ) {
        Ok(request) => request,
        Err(err) => {
            tracing::debug!(error = %err, "rejected search request");
            return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
        }
    };

    let response = state.searcher.respond(&request, state.corrector.as_ref()).await;
    json_response(&response)
}

fn json_response(response: &SearchResponse) -> Response {
    match serde_json::to_vec(response) {
        Ok(body) => (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to encode search response");
            (StatusCode::INTERNAL_SERVER_ERROR, ENCODING_FAILURE).into_response()
        }
    }
}

/// Bind `addr` and serve until ctrl-c.
pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, state, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
