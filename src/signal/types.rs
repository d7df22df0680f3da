use crate::corpus::Language;
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A keyword from the closed tag vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Pop,
    English,
    Hindi,
    Unwind,
    Punjabi,
    Kannada,
    Telugu,
}

impl Tag {
    pub const VOCABULARY: [Tag; 7] = [
        Tag::Pop,
        Tag::English,
        Tag::Hindi,
        Tag::Unwind,
        Tag::Punjabi,
        Tag::Kannada,
        Tag::Telugu,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Pop => "pop",
            Tag::English => "english",
            Tag::Hindi => "hindi",
            Tag::Unwind => "unwind",
            Tag::Punjabi => "punjabi",
            Tag::Kannada => "kannada",
            Tag::Telugu => "telugu",
        }
    }

    pub fn for_language(language: Language) -> Tag {
        match language {
            Language::English => Tag::English,
            Language::Hindi => Tag::Hindi,
            Language::Kannada => Tag::Kannada,
            Language::Punjabi => Tag::Punjabi,
            Language::Telugu => Tag::Telugu,
        }
    }
}

impl FromStr for Tag {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::VOCABULARY
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or(())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type TagSet = BTreeSet<Tag>;

/// What the extractor learned about one request. Never outlives the request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Signal {
    pub sentiment: SentimentLabel,
    pub tags: TagSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_parse_only_from_vocabulary() {
        assert_eq!("pop".parse::<Tag>(), Ok(Tag::Pop));
        assert_eq!("unwind".parse::<Tag>(), Ok(Tag::Unwind));
        assert!("rock".parse::<Tag>().is_err());
        assert!("Pop".parse::<Tag>().is_err());
    }

    #[test]
    fn every_language_has_a_tag() {
        for language in Language::PRIORITY {
            assert_eq!(Tag::for_language(language).as_str(), language.as_str());
        }
    }
}
