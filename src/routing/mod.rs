//! Lexical split between song requests and conversation.

use serde::Serialize;

/// Substrings that turn a message into a song request.
///
/// `"songs"` alone already covers every `"<x> songs"` entry; the longer
/// triggers are kept so the list reads as the set of recognized requests.
pub const SONG_TRIGGERS: [&str; 8] = [
    "pop songs",
    "english songs",
    "hindi songs",
    "unwind",
    "kannada songs",
    "punjabi songs",
    "telugu songs",
    "songs",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    SongRequest,
    Conversation,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::SongRequest => "song_request",
            Intent::Conversation => "conversation",
        }
    }
}

pub fn route(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    if SONG_TRIGGERS.iter().any(|trigger| lowered.contains(trigger)) {
        Intent::SongRequest
    } else {
        Intent::Conversation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_trigger_routes_to_songs() {
        for trigger in SONG_TRIGGERS {
            assert_eq!(route(trigger), Intent::SongRequest, "trigger {}", trigger);
        }
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(route("Recommend me some HINDI SONGS"), Intent::SongRequest);
        assert_eq!(route("i need to UNWIND tonight"), Intent::SongRequest);
        assert_eq!(route("any good songsters around?"), Intent::SongRequest);
    }

    #[test]
    fn songs_alone_is_enough() {
        assert_eq!(route("songs"), Intent::SongRequest);
        assert_eq!(route("spanish songs please"), Intent::SongRequest);
    }

    #[test]
    fn everything_else_is_conversation() {
        assert_eq!(route("hello there"), Intent::Conversation);
        assert_eq!(route("play a song"), Intent::Conversation);
        assert_eq!(route("pop music"), Intent::Conversation);
        assert_eq!(route(""), Intent::Conversation);
    }
}
