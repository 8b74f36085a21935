// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::get_headers;
use crate::export::{NoveltyExport, notify_export_success};
use crate::ui::messages::info;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[NoveltyExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with the report's Spanish headers; hours stay decimal so
/// spreadsheets can sum them.
pub(crate) fn export_csv(rows: &[NoveltyExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path).map_err(to_io_app_error)?;

    wtr.write_record(get_headers()).map_err(to_io_app_error)?;

    for r in rows {
        let horas = r.horas.map(|h| format!("{h:.2}")).unwrap_or_default();
        wtr.write_record([
            r.codigo.as_str(),
            r.nombre.as_str(),
            r.documento.as_str(),
            r.fecha.as_str(),
            r.dia.as_str(),
            r.ingreso.as_str(),
            r.salida.as_str(),
            horas.as_str(),
            r.categoria.as_str(),
            r.observacion.as_str(),
        ])
        .map_err(to_io_app_error)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

fn to_io_app_error(e: csv::Error) -> AppError {
    AppError::from(io::Error::other(format!("CSV error: {e}")))
}
