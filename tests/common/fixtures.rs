//! Test fixture creation
//!
//! Writes the CSV corpora and the response table into temporary directories.

use super::constants::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_tagged(dir: &Path, file_name: &str, songs: &[&str], artist: &str) -> std::io::Result<()> {
    // Tagged sources carry an Album column that the server ignores.
    let mut data = String::from("Name,Album,Artist\n");
    for song in songs {
        data.push_str(&format!("{},Some Album,{}\n", song, artist));
    }
    fs::write(dir.join(file_name), data)
}

fn write_playlist(dir: &Path, file_name: &str, rows: &[(&str, &str, &str)]) -> std::io::Result<()> {
    let mut data = String::from("Name,Album,Artist\n");
    for (name, album, artist) in rows {
        data.push_str(&format!("\"{}\",\"{}\",\"{}\"\n", name, album, artist));
    }
    fs::write(dir.join(file_name), data)
}

/// Creates a data directory with every source file the server expects.
///
/// Hindi-unwind.csv, kannada.csv and telugu.csv have a header but no rows.
pub fn create_test_data_dir() -> anyhow::Result<TempDir> {
    let dir = TempDir::new()?;
    let path = dir.path();

    write_tagged(path, "English-pop.csv", &ENGLISH_POP_SONGS, "Pop Artist")?;
    write_tagged(path, "English-unwind.csv", &ENGLISH_UNWIND_SONGS, "Calm Artist")?;
    write_tagged(path, "Hindi-pop.csv", &HINDI_POP_SONGS, "Arijit Singh")?;
    write_tagged(path, "Hindi-unwind.csv", &[], "")?;
    write_tagged(path, "kannada.csv", &[], "")?;
    write_tagged(path, "Punjabi.csv", &PUNJABI_SONGS, "AP Dhillon")?;
    write_tagged(path, "telugu.csv", &[], "")?;
    write_playlist(path, "happy.csv", &HAPPY_SONGS)?;
    write_playlist(path, "sad.csv", &SAD_SONGS)?;

    Ok(dir)
}

/// Writes a two-entry response table and returns its path.
pub fn create_test_responses(dir: &Path) -> anyhow::Result<PathBuf> {
    let path = dir.join("responses.toml");
    fs::write(
        &path,
        format!(
            r#"
[[responses]]
trigger = "{GREETING_TRIGGER}"
replies = ["{GREETING_REPLY}"]

[[responses]]
trigger = "{WEATHER_TRIGGER}"
replies = ["{WEATHER_REPLY}"]
"#
        ),
    )?;
    Ok(path)
}
