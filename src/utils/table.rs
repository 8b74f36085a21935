//! Table rendering utilities for CLI outputs.
//!
//! Widths are measured in display columns so accented names line up, and
//! cells may carry ANSI styling: padding is computed on the plain text.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width: width.max(UnicodeWidthStr::width(header)),
        }
    }
}

/// A row cell: plain text for measuring, and what to print.
pub struct Cell {
    pub plain: String,
    pub styled: Option<String>,
}

impl From<String> for Cell {
    fn from(plain: String) -> Self {
        Self {
            plain,
            styled: None,
        }
    }
}

impl From<&str> for Cell {
    fn from(plain: &str) -> Self {
        Cell::from(plain.to_string())
    }
}

impl Cell {
    pub fn styled(plain: String, styled: String) -> Self {
        Self {
            plain,
            styled: Some(styled),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        for col in &self.columns {
            push_padded(&mut out, &col.header, None, col.width);
        }
        out.push('\n');

        for col in &self.columns {
            out.push_str(&"-".repeat(col.width));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (col, cell) in self.columns.iter().zip(row) {
                push_padded(&mut out, &cell.plain, cell.styled.as_deref(), col.width);
            }
            out.push('\n');
        }

        out
    }
}

fn push_padded(out: &mut String, plain: &str, styled: Option<&str>, width: usize) {
    let shown = UnicodeWidthStr::width(plain);
    out.push_str(styled.unwrap_or(plain));
    out.push_str(&" ".repeat(width.saturating_sub(shown) + 1));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_by_display_width() {
        let mut t = Table::new(vec![Column::new("Nombre", 8), Column::new("H", 3)]);
        t.add_row(vec![Cell::from("Núñez"), Cell::from("8h")]);
        t.add_row(vec![Cell::styled("OK".into(), "\x1b[32mOK\x1b[0m".into()), Cell::from("")]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Nombre   H   ");
        assert_eq!(lines[2], "Núñez    8h  ");
        assert!(lines[3].starts_with("\x1b[32mOK\x1b[0m       "));
    }
}
