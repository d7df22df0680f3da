//! Sentiment engine backed by a remote classifier service.

use super::engine::{EngineError, SentimentEngine};
use super::types::SentimentLabel;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct ClassifyResponse {
    label: String,
}

/// Maps a classifier label to a sentiment.
///
/// Accepts textual labels in any case, and the `LABEL_<n>` names of a
/// two-label sequence classifier where index 1 is the positive class.
pub fn parse_label(label: &str) -> Result<SentimentLabel, EngineError> {
    match label.trim().to_ascii_uppercase().as_str() {
        "POSITIVE" | "POS" | "LABEL_1" => Ok(SentimentLabel::Positive),
        "NEGATIVE" | "NEG" | "LABEL_0" => Ok(SentimentLabel::Negative),
        other => Err(EngineError::InvalidResponse(format!(
            "Unknown sentiment label \"{}\"",
            other
        ))),
    }
}

pub struct HttpSentimentEngine {
    client: Client,
    url: String,
}

impl HttpSentimentEngine {
    pub fn new(url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

fn map_request_error(err: reqwest::Error) -> EngineError {
    if err.is_timeout() {
        EngineError::Timeout
    } else if err.is_decode() {
        EngineError::InvalidResponse(err.to_string())
    } else {
        EngineError::Unavailable(err.to_string())
    }
}

#[async_trait]
impl SentimentEngine for HttpSentimentEngine {
    async fn classify(&self, text: &str) -> Result<SentimentLabel, EngineError> {
        let response = self
            .client
            .post(&self.url)
            .json(&ClassifyRequest { text })
            .send()
            .await
            .map_err(map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(EngineError::Unavailable(format!(
                "Classifier answered with status {}",
                status
            )));
        }

        let body: ClassifyResponse = response.json().await.map_err(map_request_error)?;
        debug!("Classifier label for {} chars: {}", text.len(), body.label);
        parse_label(&body.label)
    }
}
