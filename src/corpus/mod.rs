mod csv_source;
mod load;
mod song;
mod store;

pub use csv_source::{read_song_rows, CorpusLoadError, SongRow};
pub use load::{load_corpora, Corpora, CorpusSource, SourceTarget, DEFAULT_SOURCES};
pub use song::{Language, MoodKey, Song};
pub use store::{MoodPlaylists, PlaylistMood, SongCorpus};
