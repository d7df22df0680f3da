mod engine;
mod extractor;
mod http_engine;
mod lexicon;
mod types;

pub use engine::{EngineError, KeywordEngine, SentimentEngine};
pub use extractor::{ExtractionError, SignalExtractor};
pub use http_engine::{parse_label, HttpSentimentEngine};
pub use lexicon::{LexiconSentimentEngine, VocabularyKeywordEngine};
pub use types::{SentimentLabel, Signal, Tag, TagSet};

#[cfg(test)]
pub(crate) use extractor::test_engines;
