use super::csv_source::CorpusLoadError;
use super::song::{Language, MoodKey};
use super::store::{MoodPlaylists, PlaylistMood, SongCorpus};
use std::path::Path;
use tracing::info;

/// Where a source file goes once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTarget {
    Tagged { mood: MoodKey, language: Language },
    Playlist(PlaylistMood),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusSource {
    pub file_name: &'static str,
    pub target: SourceTarget,
}

const fn tagged(file_name: &'static str, mood: MoodKey, language: Language) -> CorpusSource {
    CorpusSource {
        file_name,
        target: SourceTarget::Tagged { mood, language },
    }
}

const fn playlist(file_name: &'static str, mood: PlaylistMood) -> CorpusSource {
    CorpusSource {
        file_name,
        target: SourceTarget::Playlist(mood),
    }
}

pub const DEFAULT_SOURCES: [CorpusSource; 9] = [
    tagged("English-pop.csv", MoodKey::Positive, Language::English),
    tagged("English-unwind.csv", MoodKey::Negative, Language::English),
    tagged("Hindi-pop.csv", MoodKey::Positive, Language::Hindi),
    tagged("Hindi-unwind.csv", MoodKey::Negative, Language::Hindi),
    tagged("kannada.csv", MoodKey::Positive, Language::Kannada),
    tagged("Punjabi.csv", MoodKey::Positive, Language::Punjabi),
    tagged("telugu.csv", MoodKey::Positive, Language::Telugu),
    playlist("happy.csv", PlaylistMood::Happy),
    playlist("sad.csv", PlaylistMood::Sad),
];

/// Everything the server reads songs from.
#[derive(Debug, Clone, Default)]
pub struct Corpora {
    pub songs: SongCorpus,
    pub playlists: MoodPlaylists,
}

impl Corpora {
    pub fn load_sources(dir: &Path, sources: &[CorpusSource]) -> Result<Corpora, CorpusLoadError> {
        let mut corpora = Corpora::default();
        for source in sources {
            let path = dir.join(source.file_name);
            let added = match source.target {
                SourceTarget::Tagged { mood, language } => {
                    corpora.songs.load_file(&path, mood, language)?
                }
                SourceTarget::Playlist(mood) => corpora.playlists.load_file(&path, mood)?,
            };
            info!("Loaded {} songs from {}", added, path.display());
        }
        Ok(corpora)
    }
}

/// Loads the default source layout from `dir` and logs a summary.
///
/// Any failure is fatal for the caller: serving with a partial corpus is not
/// allowed.
pub fn load_corpora<P: AsRef<Path>>(dir: P) -> Result<Corpora, CorpusLoadError> {
    let corpora = Corpora::load_sources(dir.as_ref(), &DEFAULT_SOURCES)?;

    for mood in MoodKey::ALL {
        for language in Language::PRIORITY {
            let count = corpora.songs.count(mood, language);
            if count > 0 {
                info!("  {}/{}: {} songs", mood, language, count);
            }
        }
    }
    info!(
        "Corpus has:\n{} language-tagged songs\n{} happy songs\n{} sad songs",
        corpora.songs.len(),
        corpora.playlists.songs(PlaylistMood::Happy).len(),
        corpora.playlists.songs(PlaylistMood::Sad).len()
    );
    Ok(corpora)
}
