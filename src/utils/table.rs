//! Table rendering utilities for CLI outputs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
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

    /// Column widths fitted to the widest cell (missing cells count as empty).
    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(col.header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let mut push_line = |cells: Vec<&str>| {
            let line: Vec<String> = self
                .columns
                .iter()
                .zip(&widths)
                .zip(cells)
                .map(|((col, width), cell)| match col.align {
                    Align::Left => format!("{cell:<w$}", w = *width),
                    Align::Right => format!("{cell:>w$}", w = *width),
                })
                .collect();
            out.push_str(line.join("  ").trim_end());
            out.push('\n');
        };

        // Header
        push_line(self.columns.iter().map(|c| c.header.as_str()).collect());

        // Rows
        for row in &self.rows {
            push_line(
                (0..self.columns.len())
                    .map(|i| row.get(i).map(String::as_str).unwrap_or(""))
                    .collect(),
            );
        }

        out
    }
}
