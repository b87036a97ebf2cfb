//! Table rendering utilities for CLI outputs.

use super::formatting::{display_width, pad_right, truncate};

pub struct Column {
    pub header: String,
    /// Hard cap; cells longer than this are truncated.
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Width of each column: the widest of header and cells, capped.
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| display_width(c))
                    .chain(std::iter::once(display_width(&col.header)))
                    .max()
                    .unwrap_or(0);
                widest.min(col.max_width)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        render_line(&headers, &widths, &mut out);
        let total: usize = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total));
        out.push('\n');

        for row in &self.rows {
            let cells: Vec<&str> = (0..self.columns.len())
                .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                .collect();
            render_line(&cells, &widths, &mut out);
        }

        out
    }
}

fn render_line(cells: &[&str], widths: &[usize], out: &mut String) {
    let rendered: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| pad_right(&truncate(c, *w), *w))
        .collect();
    out.push_str(rendered.join(" | ").trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_grow_to_content_up_to_cap() {
        let mut t = Table::new(vec![Column::new("ID", 4), Column::new("Title", 8)]);
        t.add_row(vec!["1".into(), "A very long title".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID | Title");
        assert_eq!(lines[2], "1  | A very …");
    }

    #[test]
    fn emoji_titles_keep_columns_aligned() {
        let mut t = Table::new(vec![Column::new("Title", 10), Column::new("Kind", 8)]);
        t.add_row(vec!["🎂 Mai".into(), "Birthday".into()]);
        t.add_row(vec!["Picnic".into(), "Other".into()]);
        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        // "🎂 Mai" is 6 columns wide, like "Picnic"
        assert_eq!(lines[2], "🎂 Mai | Birthday");
        assert_eq!(lines[3], "Picnic | Other");
        assert_eq!(
            display_width(lines[2].split(" | ").next().unwrap_or("")),
            display_width(lines[3].split(" | ").next().unwrap_or(""))
        );
    }
}
