//! Engine traits for the two text capabilities behind the signal extractor.

use super::types::{SentimentLabel, TagSet};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Engine unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request timeout")]
    Timeout,
}

/// Binary sentiment classifier.
///
/// Implementations must return the same label for the same text. Nothing is
/// promised about calibration.
#[async_trait]
pub trait SentimentEngine: Send + Sync {
    async fn classify(&self, text: &str) -> Result<SentimentLabel, EngineError>;
}

/// Reports which words of the tag vocabulary occur in a text.
#[async_trait]
pub trait KeywordEngine: Send + Sync {
    async fn extract(&self, text: &str) -> Result<TagSet, EngineError>;
}
