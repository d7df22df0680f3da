use super::csv_source::{read_song_rows, CorpusLoadError};
use super::song::{Language, MoodKey, Song};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

fn open_source(path: &Path) -> Result<File, CorpusLoadError> {
    File::open(path).map_err(|err| CorpusLoadError::unreadable(&path.display().to_string(), err))
}

/// Language-tagged songs grouped by mood.
///
/// Built once at startup, then shared read-only.
#[derive(Debug, Clone)]
pub struct SongCorpus {
    buckets: BTreeMap<MoodKey, Vec<Song>>,
}

impl Default for SongCorpus {
    fn default() -> Self {
        SongCorpus::new()
    }
}

impl SongCorpus {
    pub fn new() -> SongCorpus {
        let buckets = MoodKey::ALL.iter().map(|mood| (*mood, vec![])).collect();
        SongCorpus { buckets }
    }

    /// Appends every row of `reader` to the `mood` bucket, tagged with `language`.
    /// Returns the number of songs added.
    pub fn load<R: Read>(
        &mut self,
        reader: R,
        source_name: &str,
        mood: MoodKey,
        language: Language,
    ) -> Result<usize, CorpusLoadError> {
        let rows = read_song_rows(reader, source_name)?;
        let count = rows.len();
        let bucket = self.buckets.entry(mood).or_default();
        bucket.extend(rows.into_iter().map(|row| Song {
            name: row.name,
            artist: row.artist,
            album: None,
            language: Some(language),
        }));
        Ok(count)
    }

    pub fn load_file(
        &mut self,
        path: &Path,
        mood: MoodKey,
        language: Language,
    ) -> Result<usize, CorpusLoadError> {
        let file = open_source(path)?;
        self.load(file, &path.display().to_string(), mood, language)
    }

    pub fn songs(&self, mood: MoodKey) -> &[Song] {
        self.buckets.get(&mood).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn count(&self, mood: MoodKey, language: Language) -> usize {
        self.songs(mood)
            .iter()
            .filter(|song| song.language == Some(language))
            .count()
    }
}

/// Mood of the two language-less playlists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaylistMood {
    Happy,
    Sad,
}

impl PlaylistMood {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaylistMood::Happy => "happy",
            PlaylistMood::Sad => "sad",
        }
    }
}

/// The `happy` and `sad` corpora. Songs here carry an album but no language.
#[derive(Debug, Clone, Default)]
pub struct MoodPlaylists {
    happy: Vec<Song>,
    sad: Vec<Song>,
}

impl MoodPlaylists {
    pub fn load<R: Read>(
        &mut self,
        reader: R,
        source_name: &str,
        mood: PlaylistMood,
    ) -> Result<usize, CorpusLoadError> {
        let rows = read_song_rows(reader, source_name)?;
        let count = rows.len();
        let target = match mood {
            PlaylistMood::Happy => &mut self.happy,
            PlaylistMood::Sad => &mut self.sad,
        };
        target.extend(rows.into_iter().map(|row| Song {
            name: row.name,
            artist: row.artist,
            album: row.album,
            language: None,
        }));
        Ok(count)
    }

    pub fn load_file(&mut self, path: &Path, mood: PlaylistMood) -> Result<usize, CorpusLoadError> {
        let file = open_source(path)?;
        self.load(file, &path.display().to_string(), mood)
    }

    pub fn songs(&self, mood: PlaylistMood) -> &[Song] {
        match mood {
            PlaylistMood::Happy => &self.happy,
            PlaylistMood::Sad => &self.sad,
        }
    }
}
