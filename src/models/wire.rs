//! Typed boundary for the payroll attendance map.
//!
//! The server hands out loosely typed JSON (spreadsheet cells that may be
//! numbers, strings or blank). Everything is converted here, once, into
//! `RawAttendanceEntry` values; entries whose day cannot be read are
//! rejected and counted instead of silently disappearing.

use crate::core::calculator::time_parser::parse_hours_value;
use crate::models::attendance::{RawAttendanceEntry, SourceFeed};
use crate::utils::date::day_from_display_date;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Label used by the incident feed when a row carries no type.
pub const DEFAULT_INCIDENT_LABEL: &str = "Novedad AppSheet";

/// Collaborator key (document number or name) → collaborator.
pub type AttendanceMap = BTreeMap<String, WireCollaborator>;

#[derive(Debug, Clone, Deserialize)]
pub struct WireCollaborator {
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub sede: String,
    #[serde(default)]
    pub cedula: String,
    #[serde(default)]
    pub registros: Vec<WireEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WireEntry {
    #[serde(default)]
    pub fuente: Option<String>,
    #[serde(default)]
    pub fecha: Option<Value>,
    #[serde(default)]
    pub dia: Option<Value>,
    #[serde(default)]
    pub horas: Option<Value>,
    #[serde(default)]
    pub hora_ini: Option<Value>,
    #[serde(default)]
    pub hora_fin: Option<Value>,
    #[serde(default)]
    pub novedad: Option<Value>,
    #[serde(default)]
    pub tipo: Option<Value>,
    #[serde(default, alias = "observaciones")]
    pub observacion: Option<Value>,
}

/// A collaborator after boundary validation.
#[derive(Debug, Clone)]
pub struct Collaborator {
    pub key: String,
    pub name: String,
    pub site: String,
    pub document: String,
    pub entries: Vec<RawAttendanceEntry>,
    /// Rows rejected at the boundary because their day was unreadable.
    pub rejected: usize,
}

impl WireCollaborator {
    pub fn validate(&self, key: &str) -> Collaborator {
        let mut entries = Vec::with_capacity(self.registros.len());
        let mut rejected = 0;

        for (i, row) in self.registros.iter().enumerate() {
            match row.validate() {
                Some(entry) => entries.push(entry),
                None => {
                    rejected += 1;
                    warn!(collaborator = key, row = i, "attendance row without a readable day");
                }
            }
        }

        Collaborator {
            key: key.to_string(),
            name: if self.nombre.trim().is_empty() {
                key.to_string()
            } else {
                self.nombre.trim().to_string()
            },
            site: self.sede.trim().to_string(),
            document: self.cedula.trim().to_string(),
            entries,
            rejected,
        }
    }
}

impl WireEntry {
    /// Convert a wire row into a typed entry; `None` when no day number can
    /// be read from either `dia` or `fecha`.
    pub fn validate(&self) -> Option<RawAttendanceEntry> {
        let display_date = self.fecha.as_ref().and_then(cell_text).unwrap_or_default();

        let day = match self.dia.as_ref() {
            Some(v) if !v.is_null() => cell_integer(v)?,
            _ => day_from_display_date(&display_date)? as i64,
        };

        let source = match self.fuente.as_deref().and_then(SourceFeed::from_wire) {
            Some(s) => s,
            None => {
                debug!(fuente = ?self.fuente, "unknown source feed, assuming payroll");
                SourceFeed::Payroll
            }
        };

        let novedad = self
            .novedad
            .as_ref()
            .and_then(cell_text)
            .map(|s| s.eq_ignore_ascii_case("SI"))
            .unwrap_or(false);

        let mut incident_type = self.tipo.as_ref().and_then(cell_text);
        if source == SourceFeed::Incidents && incident_type.is_none() {
            incident_type = Some(DEFAULT_INCIDENT_LABEL.to_string());
        }

        let static_hours = self.horas.as_ref().and_then(|v| match v {
            Value::Number(n) => n.as_f64().filter(|h| h.is_finite() && *h >= 0.0),
            Value::String(s) => parse_hours_value(s),
            _ => None,
        });

        Some(RawAttendanceEntry {
            day,
            display_date,
            start_time: self.hora_ini.as_ref().and_then(cell_text),
            end_time: self.hora_fin.as_ref().and_then(cell_text),
            static_hours,
            // the incident feed lists novedades only, every row counts
            incident_flag: novedad || source == SourceFeed::Incidents,
            incident_type,
            observation: self.observacion.as_ref().and_then(cell_text),
            source,
            // no wire field maps to the exemption opt-out
            skip_exemption: false,
        })
    }
}

/// Spreadsheet cell → trimmed non-empty text.
fn cell_text(v: &Value) -> Option<String> {
    let s = match v {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if s.is_empty() { None } else { Some(s) }
}

/// Spreadsheet cell → integer (accepts "05", 5 and 5.0).
fn cell_integer(v: &Value) -> Option<i64> {
    match v {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
