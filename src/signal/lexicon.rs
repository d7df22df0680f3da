use super::engine::{EngineError, KeywordEngine, SentimentEngine};
use super::types::{SentimentLabel, Tag, TagSet};
use async_trait::async_trait;
use unicode_segmentation::UnicodeSegmentation;

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "beautiful", "best", "cheerful", "cool", "dance", "enjoy", "excited",
    "fantastic", "fun", "glad", "good", "great", "happy", "joy", "like", "love", "nice", "party",
    "perfect", "thank", "thanks", "wonderful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "angry", "anxious", "awful", "bad", "bored", "cry", "crying", "depressed", "down",
    "exhausted", "hate", "heartbroken", "lonely", "miserable", "sad", "stressed", "terrible",
    "tired", "unhappy", "upset", "worried", "worst",
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "don't", "dont", "isn't", "wasn't", "can't", "cannot", "won't",
    "didn't", "doesn't",
];

fn lowercase_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .unicode_words()
        .map(str::to_owned)
        .collect()
}

/// Word-list sentiment scoring.
///
/// Each lexicon word counts one point; a negation right before it flips the
/// sign. Ties resolve to positive.
#[derive(Debug, Default, Clone)]
pub struct LexiconSentimentEngine;

impl LexiconSentimentEngine {
    pub fn score(text: &str) -> i32 {
        let words = lowercase_words(text);
        let mut score = 0;
        for (index, word) in words.iter().enumerate() {
            let polarity = if POSITIVE_WORDS.contains(&word.as_str()) {
                1
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                -1
            } else {
                continue;
            };
            let negated = index > 0 && NEGATIONS.contains(&words[index - 1].as_str());
            score += if negated { -polarity } else { polarity };
        }
        score
    }

    pub fn label(text: &str) -> SentimentLabel {
        if Self::score(text) >= 0 {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Negative
        }
    }
}

#[async_trait]
impl SentimentEngine for LexiconSentimentEngine {
    async fn classify(&self, text: &str) -> Result<SentimentLabel, EngineError> {
        Ok(Self::label(text))
    }
}

/// Exact-token matching against the tag vocabulary.
#[derive(Debug, Default, Clone)]
pub struct VocabularyKeywordEngine;

impl VocabularyKeywordEngine {
    pub fn tags(text: &str) -> TagSet {
        lowercase_words(text)
            .iter()
            .filter_map(|word| word.parse::<Tag>().ok())
            .collect()
    }
}

#[async_trait]
impl KeywordEngine for VocabularyKeywordEngine {
    async fn extract(&self, text: &str) -> Result<TagSet, EngineError> {
        Ok(Self::tags(text))
    }
}
