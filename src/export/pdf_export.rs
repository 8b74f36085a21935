// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, novelties_to_table};
use crate::export::pdf::{PdfManager, RowFill};
use crate::export::{NoveltyExport, notify_export_success};
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Export PDF: landscape table, each row tinted with its category color.
pub(crate) fn export_pdf(rows: &[NoveltyExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let headers = get_headers();
    let data_vec = novelties_to_table(rows);
    let fills: Vec<RowFill> = rows.iter().map(|r| rgb(r.category.hex_color())).collect();
    let subtitle = format!("{} novedades", rows.len());

    let mut pdf = PdfManager::new();
    pdf.write_table(title, &subtitle, &headers, &data_vec, &fills);

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}

fn rgb(hex: u32) -> RowFill {
    let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
    (channel(16), channel(8), channel(0))
}

#[cfg(test)]
mod tests {
    use super::rgb;

    #[test]
    fn hex_colors_split_into_channels() {
        assert_eq!(rgb(0xFFFFFF), (1.0, 1.0, 1.0));
        assert_eq!(rgb(0xFF0000), (1.0, 0.0, 0.0));
    }
}
