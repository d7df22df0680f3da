//! Helpers for reading the rendered playlist table

/// Data rows of a playlist table as `[name, album, artist]`, still HTML-escaped.
pub fn table_rows(html: &str) -> Vec<[String; 3]> {
    html.split("<tr>")
        .skip(1)
        .filter(|row| row.contains("<td>"))
        .map(|row| {
            let cells: Vec<String> = row
                .split("<td>")
                .skip(1)
                .map(|cell| cell.split("</td>").next().unwrap_or_default().to_string())
                .collect();
            assert_eq!(cells.len(), 3, "Unexpected row: {}", row);
            [cells[0].clone(), cells[1].clone(), cells[2].clone()]
        })
        .collect()
}
