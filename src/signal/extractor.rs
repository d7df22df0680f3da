use super::engine::{EngineError, KeywordEngine, SentimentEngine};
use super::types::{SentimentLabel, Signal};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Empty input")]
    EmptyInput,

    #[error("Sentiment engine failed: {0}")]
    SentimentUnavailable(#[source] EngineError),

    #[error("Keyword engine failed: {0}")]
    KeywordsUnavailable(#[source] EngineError),
}

impl ExtractionError {
    /// Short label used for metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            ExtractionError::EmptyInput => "empty_input",
            ExtractionError::SentimentUnavailable(_) => "sentiment",
            ExtractionError::KeywordsUnavailable(_) => "keywords",
        }
    }
}

/// Runs both engines over a request's text.
///
/// No caching: every call reaches the engines once.
#[derive(Clone)]
pub struct SignalExtractor {
    sentiment_engine: Arc<dyn SentimentEngine>,
    keyword_engine: Arc<dyn KeywordEngine>,
}

impl SignalExtractor {
    pub fn new(
        sentiment_engine: Arc<dyn SentimentEngine>,
        keyword_engine: Arc<dyn KeywordEngine>,
    ) -> Self {
        Self {
            sentiment_engine,
            keyword_engine,
        }
    }

    pub async fn classify(&self, text: &str) -> Result<Signal, ExtractionError> {
        let sentiment = self.sentiment(text).await?;
        let tags = self
            .keyword_engine
            .extract(text)
            .await
            .map_err(ExtractionError::KeywordsUnavailable)?;
        Ok(Signal { sentiment, tags })
    }

    /// Sentiment only, for callers that ignore keywords.
    pub async fn sentiment(&self, text: &str) -> Result<SentimentLabel, ExtractionError> {
        if text.trim().is_empty() {
            return Err(ExtractionError::EmptyInput);
        }
        self.sentiment_engine
            .classify(text)
            .await
            .map_err(ExtractionError::SentimentUnavailable)
    }
}
