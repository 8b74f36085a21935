// src/export/model.rs

use crate::models::observation::ObservationCategory;
use serde::Serialize;

/// Flat row of the novedades report.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NoveltyExport {
    pub codigo: String,
    pub nombre: String,
    pub documento: String,
    pub fecha: String,
    pub dia: String,
    pub ingreso: String,
    pub salida: String,
    /// Decimal hours, empty when the record had none.
    pub horas: Option<f64>,
    pub categoria: String,
    pub observacion: String,
    #[serde(skip)]
    pub category: ObservationCategory,
}

/// Header for CSV / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Código",
        "Nombre",
        "Documento",
        "Fecha",
        "Día",
        "Ingreso",
        "Salida",
        "Horas",
        "Categoría",
        "Observación",
    ]
}

/// Column indexes in `get_headers`.
pub(crate) const DATE_COLUMN: usize = 3;
pub(crate) const HOURS_COLUMN: usize = 7;

/// Row as display strings (PDF and XLSX text cells).
pub(crate) fn novelty_to_row(n: &NoveltyExport) -> Vec<String> {
    vec![
        n.codigo.clone(),
        n.nombre.clone(),
        n.documento.clone(),
        n.fecha.clone(),
        n.dia.clone(),
        n.ingreso.clone(),
        n.salida.clone(),
        crate::utils::format_hours(n.horas),
        n.categoria.clone(),
        n.observacion.clone(),
    ]
}

pub(crate) fn novelties_to_table(rows: &[NoveltyExport]) -> Vec<Vec<String>> {
    rows.iter().map(novelty_to_row).collect()
}
