//! Request-level flow for the two chat endpoints.

use crate::corpus::Song;
use crate::recommend::RecommendationSelector;
use crate::responses::{default_reply, ResponseComposer};
use crate::routing::{route, Intent};
use crate::signal::{ExtractionError, SignalExtractor};
use serde::Serialize;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BotAnswer {
    Reply { text: String },
    Songs { songs: Vec<Song> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Reply,
    Songs,
    /// The extractor failed and a default reply was given instead.
    Fallback { reason: &'static str },
}

impl DispatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchOutcome::Reply => "reply",
            DispatchOutcome::Songs => "songs",
            DispatchOutcome::Fallback { .. } => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dispatched {
    pub answer: BotAnswer,
    pub outcome: DispatchOutcome,
}

impl Dispatched {
    fn reply(text: String) -> Self {
        Self {
            answer: BotAnswer::Reply { text },
            outcome: DispatchOutcome::Reply,
        }
    }

    fn songs(songs: Vec<Song>) -> Self {
        Self {
            answer: BotAnswer::Songs { songs },
            outcome: DispatchOutcome::Songs,
        }
    }

    fn fallback(error: &ExtractionError) -> Self {
        Self {
            answer: BotAnswer::Reply {
                text: default_reply(),
            },
            outcome: DispatchOutcome::Fallback {
                reason: error.reason(),
            },
        }
    }
}

pub struct Dispatcher {
    extractor: SignalExtractor,
    selector: RecommendationSelector,
    composer: ResponseComposer,
}

impl Dispatcher {
    pub fn new(
        extractor: SignalExtractor,
        selector: RecommendationSelector,
        composer: ResponseComposer,
    ) -> Self {
        Self {
            extractor,
            selector,
            composer,
        }
    }

    /// Conversation or keyword-routed songs, decided by the text alone.
    pub async fn converse(&self, text: &str) -> Dispatched {
        let intent = route(text);
        debug!("Routed message as {}", intent.as_str());
        match intent {
            Intent::Conversation => Dispatched::reply(self.composer.compose(text)),
            Intent::SongRequest => match self.extractor.classify(text).await {
                Ok(signal) => {
                    debug!(
                        "Signal: sentiment {}, tags {:?}",
                        signal.sentiment, signal.tags
                    );
                    Dispatched::songs(self.selector.select_by_tags(&signal.tags))
                }
                Err(err) => {
                    warn!("Signal extraction failed, answering with a default reply: {}", err);
                    Dispatched::fallback(&err)
                }
            },
        }
    }

    /// Songs picked only by the sentiment of the text.
    pub async fn recommend_by_mood(&self, text: &str) -> Dispatched {
        match self.extractor.sentiment(text).await {
            Ok(label) => {
                debug!("Sentiment {} for mood playlist", label);
                Dispatched::songs(self.selector.select_by_sentiment(label))
            }
            Err(err) => {
                warn!("Sentiment extraction failed, answering with a default reply: {}", err);
                Dispatched::fallback(&err)
            }
        }
    }
}
