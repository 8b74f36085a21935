//! Payroll calendar: one reconciled month grid per collaborator, plus the
//! legend of which days carry payroll rows and which carry novedades.

use crate::core::calculator::reconcile::{ExemptionMode, IncidentExemptions, reconcile};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::SourceFeed;
use crate::models::day_grid::{DAYS_IN_GRID, MonthGrid};
use crate::models::wire::{AttendanceMap, Collaborator};
use crate::utils::formatting::normalize_document;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct CollaboratorCalendar {
    pub collaborator: Collaborator,
    pub grid: MonthGrid,
}

impl CollaboratorCalendar {
    /// Boundary rejections plus out-of-range days dropped by the reconciler.
    pub fn data_quality_drops(&self) -> usize {
        self.collaborator.rejected + self.grid.dropped_entries
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CalendarLegend {
    pub payroll_days: BTreeSet<u32>,
    pub incident_days: BTreeSet<u32>,
}

impl CalendarLegend {
    pub fn mixed(&self) -> BTreeSet<u32> {
        self.payroll_days
            .intersection(&self.incident_days)
            .copied()
            .collect()
    }

    pub fn payroll_only(&self) -> BTreeSet<u32> {
        self.payroll_days
            .difference(&self.incident_days)
            .copied()
            .collect()
    }

    pub fn incident_only(&self) -> BTreeSet<u32> {
        self.incident_days
            .difference(&self.payroll_days)
            .copied()
            .collect()
    }
}

/// Validate and reconcile every collaborator matching `query`, sorted by
/// name.
pub fn build_calendars(
    map: &AttendanceMap,
    exemptions: &IncidentExemptions,
    mode: ExemptionMode,
    query: Option<&str>,
) -> Vec<CollaboratorCalendar> {
    let mut out: Vec<CollaboratorCalendar> = map
        .iter()
        .map(|(key, wire)| wire.validate(key))
        .filter(|c| query.is_none_or(|q| matches_query(c, q)))
        .map(|c| {
            let grid = reconcile(&c.key, &c.entries, exemptions, mode);
            CollaboratorCalendar {
                collaborator: c,
                grid,
            }
        })
        .collect();

    out.sort_by(|a, b| {
        a.collaborator
            .name
            .cmp(&b.collaborator.name)
            .then_with(|| a.collaborator.key.cmp(&b.collaborator.key))
    });
    out
}

/// Which days of the month have payroll rows and which have novedades.
pub fn legend(calendars: &[CollaboratorCalendar]) -> CalendarLegend {
    let mut legend = CalendarLegend::default();

    for entry in calendars.iter().flat_map(|c| c.collaborator.entries.iter()) {
        if !(1..=DAYS_IN_GRID as i64).contains(&entry.day) {
            continue;
        }
        let day = entry.day as u32;
        if entry.source == SourceFeed::Payroll {
            legend.payroll_days.insert(day);
        }
        if entry.incident_flag {
            legend.incident_days.insert(day);
        }
    }

    legend
}

/// Parse a `--days` list such as "1,5,17".
pub fn parse_days(list: &str) -> AppResult<BTreeSet<u32>> {
    let mut days = BTreeSet::new();
    for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let day: u32 = part
            .parse()
            .map_err(|_| AppError::InvalidDays(format!("'{part}' is not a number")))?;
        if !(1..=DAYS_IN_GRID as u32).contains(&day) {
            return Err(AppError::InvalidDays(format!("{day} is outside 1..31")));
        }
        days.insert(day);
    }
    Ok(days)
}

fn matches_query(c: &Collaborator, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    let q_doc = normalize_document(&q);
    c.name.to_lowercase().contains(&q)
        || c.key.to_lowercase().contains(&q)
        || (!q_doc.is_empty() && normalize_document(&c.document).contains(&q_doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::wire::WireCollaborator;
    use serde_json::json;

    fn sample_map() -> AttendanceMap {
        let raw = json!({
            "1234567": {
                "nombre": "ZULMA RÍOS",
                "cedula": "1.234.567",
                "sede": "IE Santa Librada",
                "registros": [
                    { "fuente": "nomina", "fecha": "03/03/2025", "dia": 3, "hora_ini": "06:00", "hora_fin": "14:00", "novedad": "NO" },
                    { "fuente": "novedades", "fecha": "03/03/2025", "dia": 3, "hora_ini": "06:00", "hora_fin": "14:00", "tipo": "NO ASISTENCIA" },
                    { "fuente": "nomina", "fecha": "04/03/2025", "dia": 4, "horas": "8:00", "novedad": "NO" },
                    { "fuente": "nomina", "fecha": "??", "dia": "x" }
                ]
            },
            "ANA TORO": {
                "nombre": "ANA TORO",
                "registros": [
                    { "fuente": "novedades", "fecha": "10/03/2025", "dia": 10, "tipo": "INCAPACIDAD", "horas": 8 },
                    { "fuente": "nomina", "fecha": "40/03/2025", "dia": 40 }
                ]
            }
        });
        let map: std::collections::BTreeMap<String, WireCollaborator> =
            serde_json::from_value(raw).unwrap();
        map
    }

    #[test]
    fn calendars_are_sorted_by_name() {
        let cals = build_calendars(
            &sample_map(),
            &IncidentExemptions::default(),
            ExemptionMode::Card,
            None,
        );
        let names: Vec<_> = cals.iter().map(|c| c.collaborator.name.as_str()).collect();
        assert_eq!(names, vec!["ANA TORO", "ZULMA RÍOS"]);
    }

    #[test]
    fn card_and_detail_modes_differ_only_on_exempt_types() {
        let map = sample_map();
        let ex = IncidentExemptions::default();

        let card = build_calendars(&map, &ex, ExemptionMode::Card, Some("zulma"));
        let detail = build_calendars(&map, &ex, ExemptionMode::Detail, Some("zulma"));

        // day 3 has a payroll shift, so the max is 8h in both modes
        assert_eq!(card[0].grid.day(3).unwrap().hours, 8.0);
        assert_eq!(detail[0].grid.day(3).unwrap().hours, 8.0);
        assert_eq!(card[0].grid.total_hours, 16.0);
        assert!(card[0].grid.day(3).unwrap().has_incident);
    }

    #[test]
    fn data_quality_drops_are_counted() {
        let cals = build_calendars(
            &sample_map(),
            &IncidentExemptions::default(),
            ExemptionMode::Card,
            None,
        );
        let ana = &cals[0];
        let zulma = &cals[1];
        assert_eq!(ana.grid.dropped_entries, 1);
        assert_eq!(ana.data_quality_drops(), 1);
        assert_eq!(zulma.collaborator.rejected, 1);
        assert_eq!(zulma.data_quality_drops(), 1);
    }

    #[test]
    fn search_by_document_ignores_separators() {
        let cals = build_calendars(
            &sample_map(),
            &IncidentExemptions::default(),
            ExemptionMode::Card,
            Some("1234567"),
        );
        assert_eq!(cals.len(), 1);
        assert_eq!(cals[0].collaborator.name, "ZULMA RÍOS");
    }

    #[test]
    fn legend_splits_days() {
        let cals = build_calendars(
            &sample_map(),
            &IncidentExemptions::default(),
            ExemptionMode::Card,
            None,
        );
        let l = legend(&cals);

        assert_eq!(l.payroll_days, BTreeSet::from([3, 4]));
        assert_eq!(l.incident_days, BTreeSet::from([3, 10]));
        assert_eq!(l.mixed(), BTreeSet::from([3]));
        assert_eq!(l.payroll_only(), BTreeSet::from([4]));
        assert_eq!(l.incident_only(), BTreeSet::from([10]));
    }

    #[test]
    fn day_lists() {
        assert_eq!(parse_days("1, 5,17,").unwrap(), BTreeSet::from([1, 5, 17]));
        assert!(matches!(parse_days("0"), Err(AppError::InvalidDays(_))));
        assert!(matches!(parse_days("x"), Err(AppError::InvalidDays(_))));
    }
}
