// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Correction backed by an OpenAI-compatible chat completions endpoint.

use std::fmt;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};
use serde::{Deserialize, Serialize};

use super::{clean_completion, Corrector};

pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 256;

/// Failures talking to the completion endpoint. Logged, never surfaced to callers.
#[derive(Debug)]
pub enum CorrectionError {
    /// Transport, status or decoding failure.
    Http(reqwest::Error),
    /// The endpoint answered without any choices.
    EmptyCompletion,
}

impl fmt::Display for CorrectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrectionError::Http(err) => write!(f, "correction request failed: {}", err),
            CorrectionError::EmptyCompletion => write!(f, "correction response had no choices"),
        }
    }
}

impl std::error::Error for CorrectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorrectionError::Http(err) => Some(err),
            CorrectionError::EmptyCompletion => None,
        }
    }
}

impl From<reqwest::Error> for CorrectionError {
    fn from(err: reqwest::Error) -> Self {
        CorrectionError::Http(err)
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

/// Asks a language model to fix the spelling of a Shakespeare quotation.
#[derive(Debug, Clone)]
pub struct OpenAiCorrector {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl OpenAiCorrector {
    /// Create a corrector whose requests give up after `timeout`.
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CorrectionError> {
        let client = reqwest::Client::builder()
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// One round trip; the cleaned completion may be empty.
    pub async fn request_correction(
        &self,
        query: &str,
        credential: &str,
    ) -> Result<String, CorrectionError> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: correction_prompt(query),
            }],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response: ChatResponse = self
            .client
            .post(&self.endpoint)
            .bearer_auth(credential)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(CorrectionError::EmptyCompletion)?;

        Ok(clean_completion(&choice.message.content))
    }
}

impl Corrector for OpenAiCorrector {
    fn correct<'a>(&'a self, query: &'a str, credential: &'a str) -> BoxFuture<'a, Option<String>> {
        async move {
            match self.request_correction(query, credential).await {
                Ok(corrected) if !corrected.is_empty() => {
                    tracing::debug!(query, corrected = %corrected, "query corrected");
                    Some(corrected)
                }
                Ok(_) => None,
                Err(err) => {
                    tracing::warn!(query, error = %err, "query correction failed");
                    None
                }
            }
        }
        .boxed()
    }
}

fn correction_prompt(query: &str) -> String {
    format!(
        "The following sentence from Shakespeare's work is misspelled. \
         Give me the correct sentence, including punctuation.\n\"{}\"",
        query
    )
}
