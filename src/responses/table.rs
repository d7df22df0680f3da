use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResponseTableError {
    #[error("Failed to read response table {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse response table: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Response entry #{0} has an empty trigger")]
    EmptyTrigger(usize),

    #[error("Trigger \"{0}\" has no replies")]
    NoReplies(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResponseEntry {
    pub trigger: String,
    pub replies: Vec<String>,
}

#[derive(Deserialize)]
struct ResponseTableFile {
    #[serde(default)]
    responses: Vec<ResponseEntry>,
}

/// Ordered trigger → replies table. Earlier entries win.
#[derive(Debug, Clone)]
pub struct ResponseTable {
    entries: Vec<ResponseEntry>,
}

impl ResponseTable {
    pub fn new(entries: Vec<ResponseEntry>) -> Result<Self, ResponseTableError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.trigger.trim().is_empty() {
                return Err(ResponseTableError::EmptyTrigger(index));
            }
            if entry.replies.is_empty() {
                return Err(ResponseTableError::NoReplies(entry.trigger.clone()));
            }
        }
        Ok(Self { entries })
    }

    /// Parses `[[responses]]` entries, keeping file order.
    pub fn from_toml(content: &str) -> Result<Self, ResponseTableError> {
        let file: ResponseTableFile = toml::from_str(content)?;
        Self::new(file.responses)
    }

    pub fn load(path: &Path) -> Result<Self, ResponseTableError> {
        let content =
            std::fs::read_to_string(path).map_err(|source| ResponseTableError::Unreadable {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml(&content)
    }

    /// First entry whose trigger occurs in `text`, ignoring case.
    pub fn lookup(&self, text: &str) -> Option<&ResponseEntry> {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowered.contains(&entry.trigger.to_lowercase()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Table used when no response file is configured.
    pub fn builtin() -> Self {
        let entries = BUILTIN_RESPONSES
            .iter()
            .map(|(trigger, replies)| ResponseEntry {
                trigger: trigger.to_string(),
                replies: replies.iter().map(|r| r.to_string()).collect(),
            })
            .collect();
        Self { entries }
    }
}

// Multi-word triggers come before the single words they contain.
const BUILTIN_RESPONSES: &[(&str, &[&str])] = &[
    (
        "how are you",
        &[
            "I'm doing great, thanks for asking!",
            "All good here. How about you?",
        ],
    ),
    (
        "your name",
        &["I'm your music buddy. Ask me for some songs!"],
    ),
    (
        "thank",
        &["You're welcome!", "Anytime!", "Happy to help."],
    ),
    (
        "hello",
        &["Hello! How can I help you today?", "Hi there! Want some music?"],
    ),
    ("hey", &["Hey! What's up?", "Hey there!"]),
    (
        "good morning",
        &["Good morning! Want something upbeat to start the day?"],
    ),
    (
        "good night",
        &["Good night! Ask me to help you unwind before sleep."],
    ),
    (
        "sad",
        &[
            "It's okay to feel sad.",
            "I'm here for you. Maybe some music would help?",
        ],
    ),
    (
        "happy",
        &[
            "That's wonderful to hear!",
            "Great! Want some pop songs to match the mood?",
        ],
    ),
    (
        "bored",
        &["How about some songs? Try asking for hindi songs or pop songs."],
    ),
    (
        "stressed",
        &["Take a deep breath. Ask me to help you unwind."],
    ),
    (
        "music",
        &["I love music! Ask me for english, hindi, kannada, punjabi or telugu songs."],
    ),
    (
        "help",
        &["You can ask me for songs, for example \"pop songs\" or \"help me unwind\"."],
    ),
    ("bye", &["Goodbye!", "See you soon!", "Take care!"]),
];
