//! Tabular song sources.
//!
//! A source is a CSV file with a header row. `Name` and `Artist` are
//! required on every row, `Album` is read when the column exists.

use csv::{ReaderBuilder, StringRecord};
use std::io::Read;
use thiserror::Error;

pub const NAME_COLUMN: &str = "Name";
pub const ARTIST_COLUMN: &str = "Artist";
pub const ALBUM_COLUMN: &str = "Album";

#[derive(Debug, Error)]
pub enum CorpusLoadError {
    #[error("Could not read song source {source_name}: {source}")]
    Unreadable {
        source_name: String,
        #[source]
        source: csv::Error,
    },

    #[error("Song source {source_name} has no \"{column}\" column")]
    MissingHeader {
        source_name: String,
        column: &'static str,
    },

    #[error("Song source {source_name}, row {row}: missing \"{column}\"")]
    MissingField {
        source_name: String,
        row: usize,
        column: &'static str,
    },
}

impl CorpusLoadError {
    pub(super) fn unreadable(source_name: &str, err: impl Into<csv::Error>) -> Self {
        CorpusLoadError::Unreadable {
            source_name: source_name.to_owned(),
            source: err.into(),
        }
    }
}

/// One parsed row, with name and artist already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRow {
    pub name: String,
    pub artist: String,
    pub album: Option<String>,
}

struct Columns {
    name: usize,
    artist: usize,
    album: Option<usize>,
}

fn normalize_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}

fn find_column(headers: &StringRecord, column: &str) -> Option<usize> {
    headers.iter().position(|h| normalize_header(h) == column)
}

impl Columns {
    fn from_headers(headers: &StringRecord, source_name: &str) -> Result<Columns, CorpusLoadError> {
        let missing = |column| CorpusLoadError::MissingHeader {
            source_name: source_name.to_owned(),
            column,
        };
        Ok(Columns {
            name: find_column(headers, NAME_COLUMN).ok_or_else(|| missing(NAME_COLUMN))?,
            artist: find_column(headers, ARTIST_COLUMN).ok_or_else(|| missing(ARTIST_COLUMN))?,
            album: find_column(headers, ALBUM_COLUMN),
        })
    }
}

fn required_field(
    record: &StringRecord,
    index: usize,
    column: &'static str,
    row: usize,
    source_name: &str,
) -> Result<String, CorpusLoadError> {
    match record.get(index).map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_owned()),
        _ => Err(CorpusLoadError::MissingField {
            source_name: source_name.to_owned(),
            row,
            column,
        }),
    }
}

/// Reads every row of a source, in source order.
///
/// Rows are 1-based and count data rows only (the header is not a row).
/// The reader is flexible about row length so that a short row is reported
/// as the field it lacks rather than as a malformed file.
///
/// Required columns are looked up when the first row arrives: an empty
/// source, or one with only a header, yields no rows whatever its header.
pub fn read_song_rows<R: Read>(reader: R, source_name: &str) -> Result<Vec<SongRow>, CorpusLoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| CorpusLoadError::unreadable(source_name, err))?
        .clone();
    if headers.is_empty() {
        return Ok(vec![]);
    }

    let mut records = csv_reader.records().peekable();
    if records.peek().is_none() {
        return Ok(vec![]);
    }
    let columns = Columns::from_headers(&headers, source_name)?;

    let mut rows = vec![];
    for (index, record) in records.enumerate() {
        let record = record.map_err(|err| CorpusLoadError::unreadable(source_name, err))?;
        let row = index + 1;
        let name = required_field(&record, columns.name, NAME_COLUMN, row, source_name)?;
        let artist = required_field(&record, columns.artist, ARTIST_COLUMN, row, source_name)?;
        let album = columns
            .album
            .and_then(|i| record.get(i))
            .map(str::trim)
            .filter(|album| !album.is_empty())
            .map(str::to_owned);
        rows.push(SongRow {
            name,
            artist,
            album,
        });
    }
    Ok(rows)
}
