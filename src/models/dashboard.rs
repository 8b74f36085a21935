//! Typed view of the processing endpoint's JSON result.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub archivo: Option<String>,
    #[serde(default)]
    pub archivo_casos: Option<String>,
    #[serde(default)]
    pub stats: ProcessingStats,
    #[serde(default)]
    pub db_stats: StorageStats,
    #[serde(default)]
    pub datos: Vec<Employee>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessingStats {
    #[serde(default)]
    pub empleados_unicos: u64,
    #[serde(default)]
    pub total_registros: u64,
    #[serde(default)]
    pub duplicados_eliminados: u64,
    #[serde(default)]
    pub estados_inferidos: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageStats {
    #[serde(default)]
    pub creados: u64,
    #[serde(default)]
    pub existentes: u64,
    #[serde(default)]
    pub errores: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub codigo: String,
    pub nombre: String,
    #[serde(default)]
    pub cargo: Option<String>,
    #[serde(default)]
    pub documento: Option<String>,
    #[serde(default)]
    pub registros: Vec<AttendanceRecord>,
}

/// One processed attendance record as shown in the detail table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    #[serde(default)]
    pub fecha: String,
    /// Weekday label ("Lunes", ...).
    #[serde(default)]
    pub dia: String,
    #[serde(default)]
    pub ingreso: Option<String>,
    #[serde(default)]
    pub salida: Option<String>,
    #[serde(default)]
    pub horas: Option<f64>,
    #[serde(default)]
    pub observacion: Option<String>,
}

impl AttendanceRecord {
    pub fn observation(&self) -> &str {
        self.observacion.as_deref().unwrap_or("")
    }
}
