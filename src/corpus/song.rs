use serde::Serialize;
use std::fmt;

/// Coarse sentiment bucket of the language-tagged corpus.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKey {
    Positive,
    Negative,
    /// Declared for completeness, no source is ever loaded into it.
    Neutral,
}

impl MoodKey {
    pub const ALL: [MoodKey; 3] = [MoodKey::Positive, MoodKey::Negative, MoodKey::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoodKey::Positive => "positive",
            MoodKey::Negative => "negative",
            MoodKey::Neutral => "neutral",
        }
    }
}

impl fmt::Display for MoodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Kannada,
    Punjabi,
    Telugu,
}

impl Language {
    /// Priority order used when more than one language is requested.
    pub const PRIORITY: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Kannada,
        Language::Punjabi,
        Language::Telugu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Hindi => "hindi",
            Language::Kannada => "kannada",
            Language::Punjabi => "punjabi",
            Language::Telugu => "telugu",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Song {
    pub name: String,
    pub artist: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl Song {
    /// Album cell text, empty when the source had no album.
    pub fn album_or_empty(&self) -> &str {
        self.album.as_deref().unwrap_or("")
    }
}
