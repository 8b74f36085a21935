// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::display_date_to_excel_serial;
use crate::export::model::{DATE_COLUMN, HOURS_COLUMN, get_headers, novelty_to_row};
use crate::export::{NoveltyExport, notify_export_success};
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX: styled header, rows tinted with their category color,
/// real dates and numeric hours.
pub(crate) fn export_xlsx(rows: &[NoveltyExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name(title))
        .map_err(to_io_app_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_io_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, novelty) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = Color::RGB(novelty.category.hex_color());
        let values = novelty_to_row(novelty);

        for (col, value) in values.iter().enumerate() {
            match col {
                DATE_COLUMN => write_date_cell(worksheet, row, col as u16, value, bg)?,
                HOURS_COLUMN => write_hours_cell(worksheet, row, col as u16, novelty.horas, bg)?,
                _ => write_text_cell(worksheet, row, col as u16, value, bg)?,
            }
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, (*w).min(60) as f64 + 2.0)
            .map_err(to_io_app_error)?;
    }

    workbook.save(path_str(path)?).map_err(to_io_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_text_cell(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    ws.write_with_format(row, col, s, &cell_format(bg))
        .map_err(to_io_app_error)?;
    Ok(())
}

/// Dates the workbook can sort on; unreadable dates stay as text.
fn write_date_cell(ws: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    match display_date_to_excel_serial(s) {
        Some(serial) => {
            let fmt = cell_format(bg).set_num_format("dd/mm/yyyy");
            ws.write_with_format(row, col, serial, &fmt)
                .map_err(to_io_app_error)?;
            Ok(())
        }
        None => write_text_cell(ws, row, col, s, bg),
    }
}

fn write_hours_cell(
    ws: &mut Worksheet,
    row: u32,
    col: u16,
    hours: Option<f64>,
    bg: Color,
) -> AppResult<()> {
    match hours {
        Some(h) => {
            let fmt = cell_format(bg)
                .set_num_format("0.00")
                .set_align(FormatAlign::Right);
            ws.write_with_format(row, col, h, &fmt)
                .map_err(to_io_app_error)?;
            Ok(())
        }
        None => write_text_cell(ws, row, col, "", bg),
    }
}

/// Worksheet names are limited to 31 characters and a few symbols.
fn sheet_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(31)
        .collect();
    if cleaned.trim().is_empty() {
        "Novedades".to_string()
    } else {
        cleaned
    }
}

fn to_io_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::from(io::Error::other(e.to_string()))
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_names_are_sanitized() {
        assert_eq!(sheet_name("Novedades 03/2025"), "Novedades 032025");
        assert_eq!(sheet_name("::"), "Novedades");
        assert_eq!(sheet_name(&"x".repeat(40)).len(), 31);
    }
}
