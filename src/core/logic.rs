use crate::errors::{AppError, AppResult};
use crate::models::dashboard::ProcessingResult;
use crate::models::wire::AttendanceMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Attendance JSON is either the bare map or the view context that wraps it.
#[derive(Deserialize)]
#[serde(untagged)]
enum AttendanceDocument {
    Wrapped { asistencia_data: AttendanceMap },
    Bare(AttendanceMap),
}

pub struct Core;

impl Core {
    /// Read a processing result and make sure the server reported success.
    pub fn load_processing_result(path: &Path) -> AppResult<ProcessingResult> {
        let content = read_input(path)?;
        let result: ProcessingResult =
            serde_json::from_str(&content).map_err(|e| invalid_input(path, e))?;

        Self::check_success(result)
    }

    /// A result flagged as failed carries the server's message and is never
    /// rendered.
    pub fn check_success(result: ProcessingResult) -> AppResult<ProcessingResult> {
        if !result.success {
            let msg = result
                .error
                .clone()
                .filter(|e| !e.trim().is_empty())
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(AppError::Processing(msg));
        }

        debug!(
            employees = result.datos.len(),
            archivo = ?result.archivo,
            "processing result loaded"
        );
        Ok(result)
    }

    pub fn load_attendance_map(path: &Path) -> AppResult<AttendanceMap> {
        let content = read_input(path)?;
        let doc: AttendanceDocument =
            serde_json::from_str(&content).map_err(|e| invalid_input(path, e))?;

        let map = match doc {
            AttendanceDocument::Wrapped { asistencia_data } => asistencia_data,
            AttendanceDocument::Bare(map) => map,
        };
        debug!(collaborators = map.len(), "attendance map loaded");
        Ok(map)
    }
}

fn read_input(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| invalid_input(path, e))
}

fn invalid_input<E: std::fmt::Display>(path: &Path, e: E) -> AppError {
    AppError::InvalidInput {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}
