//! HTML rendering of recommended songs.

use crate::corpus::Song;

const PLAYLIST_STYLE: &str = r#"<style>
.playlist { border-collapse: collapse; width: 100%; }
.playlist th, .playlist td { border: 1px solid #ddd; padding: 8px; text-align: left; }
.playlist th { background-color: #4caf50; color: white; }
.playlist tr:nth-child(even) { background-color: #f2f2f2; }
.playlist tr:hover { background-color: #ddd; }
</style>"#;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Song Name / Album / Artist table. Songs without album get an empty cell.
pub fn playlist_table(songs: &[Song]) -> String {
    let mut html = String::from(PLAYLIST_STYLE);
    html.push_str("<h1>Recommended Songs</h1>");
    html.push_str("<table class=\"playlist\">");
    html.push_str("<tr><th>Song Name</th><th>Album</th><th>Artist</th></tr>");
    for song in songs {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&song.name),
            escape_html(song.album_or_empty()),
            escape_html(&song.artist)
        ));
    }
    html.push_str("</table>");
    html
}
