// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::NoveltyExport;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;
use tracing::debug;

/// High-level report export.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the novedades report.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute output path
    /// - `title`: sheet name (xlsx) and page title (pdf)
    ///
    /// Returns the number of rows written; an empty report writes nothing and
    /// leaves any existing file untouched.
    pub fn export(
        rows: &[NoveltyExport],
        format: ExportFormat,
        file: &Path,
        title: &str,
        force: bool,
    ) -> AppResult<usize> {
        // Nothing to write: never prompt about an existing file.
        if rows.is_empty() {
            warning("No reportable records for the selected employees.");
            return Ok(0);
        }

        ensure_writable(file, force)?;

        debug!(rows = rows.len(), format = format.as_str(), "exporting report");

        match format {
            ExportFormat::Csv => export_csv(rows, file)?,
            ExportFormat::Json => export_json(rows, file)?,
            ExportFormat::Xlsx => export_xlsx(rows, file, title)?,
            ExportFormat::Pdf => export_pdf(rows, file, title)?,
        }

        Ok(rows.len())
    }
}
