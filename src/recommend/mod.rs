//! Picks a short random playlist out of the loaded corpora.

use crate::corpus::{Corpora, Language, MoodKey, PlaylistMood, Song};
use crate::signal::{SentimentLabel, Tag, TagSet};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

pub const MAX_RECOMMENDATIONS: usize = 5;

/// Lookup keys derived from a tag set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SelectionCriteria {
    pub mood: MoodKey,
    pub language: Language,
    /// Negative when `unwind` was asked for. Reported only, the lookup does
    /// not use it.
    pub intended_sentiment: SentimentLabel,
}

impl SelectionCriteria {
    pub fn from_tags(tags: &TagSet) -> Self {
        let mood = if tags.contains(&Tag::Pop) {
            MoodKey::Positive
        } else {
            MoodKey::Negative
        };

        let language = Language::PRIORITY
            .into_iter()
            .find(|language| tags.contains(&Tag::for_language(*language)))
            .unwrap_or(Language::English);

        let intended_sentiment = if tags.contains(&Tag::Unwind) {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Positive
        };

        SelectionCriteria {
            mood,
            language,
            intended_sentiment,
        }
    }
}

pub fn playlist_mood_for(label: SentimentLabel) -> PlaylistMood {
    match label {
        SentimentLabel::Positive => PlaylistMood::Happy,
        SentimentLabel::Negative => PlaylistMood::Sad,
    }
}

/// Uniformly random ordered pick of at most `MAX_RECOMMENDATIONS` songs.
fn pick<R: Rng + ?Sized>(mut candidates: Vec<&Song>, rng: &mut R) -> Vec<Song> {
    let (chosen, _) = candidates.partial_shuffle(rng, MAX_RECOMMENDATIONS);
    chosen.iter().map(|song| (*song).clone()).collect()
}

#[derive(Clone)]
pub struct RecommendationSelector {
    corpora: Arc<Corpora>,
}

impl RecommendationSelector {
    pub fn new(corpora: Arc<Corpora>) -> Self {
        Self { corpora }
    }

    pub fn select_by_tags(&self, tags: &TagSet) -> Vec<Song> {
        self.select_by_tags_with(tags, &mut rand::rng())
    }

    pub fn select_by_tags_with<R: Rng + ?Sized>(&self, tags: &TagSet, rng: &mut R) -> Vec<Song> {
        let criteria = SelectionCriteria::from_tags(tags);
        debug!(
            "Selecting {}/{} songs (intended sentiment {})",
            criteria.mood, criteria.language, criteria.intended_sentiment
        );

        let candidates: Vec<&Song> = self
            .corpora
            .songs
            .songs(criteria.mood)
            .iter()
            .filter(|song| song.language == Some(criteria.language))
            .collect();
        pick(candidates, rng)
    }

    pub fn select_by_sentiment(&self, label: SentimentLabel) -> Vec<Song> {
        self.select_by_sentiment_with(label, &mut rand::rng())
    }

    pub fn select_by_sentiment_with<R: Rng + ?Sized>(
        &self,
        label: SentimentLabel,
        rng: &mut R,
    ) -> Vec<Song> {
        let mood = playlist_mood_for(label);
        debug!("Selecting {} playlist songs", mood.as_str());
        pick(self.corpora.playlists.songs(mood).iter().collect(), rng)
    }
}
