//! Merge raw attendance entries into one record per calendar day.
//!
//! Two feeds (payroll export and incident export) often describe the same
//! shift, so a day's hours are the maximum of its entries, never the sum.

use crate::core::calculator::time_parser::shift_duration_hours;
use crate::models::attendance::RawAttendanceEntry;
use crate::models::day_grid::{DAYS_IN_GRID, MonthGrid, ReconciledDay};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// Incident types reported with zero hours in the summary view.
pub const DEFAULT_ZERO_HOUR_TYPES: [&str; 3] =
    ["DIAS NO CLASE", "NO ASISTENCIA", "PERMISO NO REMUNERADO"];

/// Which rendering context the grid is built for.
///
/// The summary card zeroes exempt incident types; the detail panel shows
/// the hours as recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExemptionMode {
    #[default]
    Card,
    Detail,
}

impl ExemptionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExemptionMode::Card => "card",
            ExemptionMode::Detail => "detail",
        }
    }
}

/// Set of incident labels that must report zero hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncidentExemptions {
    labels: Vec<String>,
}

impl Default for IncidentExemptions {
    fn default() -> Self {
        Self::new(DEFAULT_ZERO_HOUR_TYPES)
    }
}

impl IncidentExemptions {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            labels: labels
                .into_iter()
                .map(|l| l.as_ref().trim().to_uppercase())
                .filter(|l| !l.is_empty())
                .collect(),
        }
    }

    /// True when `incident_type` contains one of the exempt labels,
    /// ignoring case.
    pub fn is_zero_hour_incident(&self, incident_type: &str) -> bool {
        let t = incident_type.trim().to_uppercase();
        !t.is_empty() && self.labels.iter().any(|l| t.contains(l.as_str()))
    }
}

/// Hours a single entry contributes to its day.
pub fn candidate_hours(
    entry: &RawAttendanceEntry,
    exemptions: &IncidentExemptions,
    mode: ExemptionMode,
) -> f64 {
    let exempt = mode == ExemptionMode::Card
        && !entry.skip_exemption
        && entry
            .incident_type
            .as_deref()
            .is_some_and(|t| exemptions.is_zero_hour_incident(t));
    if exempt {
        return 0.0;
    }

    let hours = shift_duration_hours(entry.start_time.as_deref(), entry.end_time.as_deref())
        .or(entry.static_hours)
        .unwrap_or(0.0);

    if hours.is_finite() { hours.max(0.0) } else { 0.0 }
}

/// Build the 1..31 grid for one employee.
///
/// The result does not depend on the order of `entries`.
pub fn reconcile(
    employee_id: &str,
    entries: &[RawAttendanceEntry],
    exemptions: &IncidentExemptions,
    mode: ExemptionMode,
) -> MonthGrid {
    let mut groups: BTreeMap<u32, Vec<&RawAttendanceEntry>> = BTreeMap::new();
    let mut dropped = 0;

    for entry in entries {
        if (1..=DAYS_IN_GRID as i64).contains(&entry.day) {
            groups.entry(entry.day as u32).or_default().push(entry);
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        warn!(
            employee = employee_id,
            dropped, "entries with a day outside 1..31 were dropped"
        );
    }

    let mut days: Vec<Option<ReconciledDay>> = vec![None; DAYS_IN_GRID];

    for (day, mut group) in groups {
        group.sort_by(|a, b| canonical_order(a, b));

        let hours = group
            .iter()
            .map(|e| candidate_hours(e, exemptions, mode))
            .fold(0.0_f64, f64::max);

        let incident_types: BTreeSet<String> = group
            .iter()
            .filter_map(|e| e.incident_type.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();

        let display_date = group
            .iter()
            .map(|e| e.display_date.trim())
            .find(|d| !d.is_empty())
            .unwrap_or_default()
            .to_string();

        days[day as usize - 1] = Some(ReconciledDay {
            day,
            hours,
            has_incident: group.iter().any(|e| e.incident_flag),
            incident_types,
            display_date,
        });
    }

    MonthGrid::from_days(employee_id, days, dropped)
}

/// Payroll rows first, then by date text, so "first entry" is stable
/// under any input permutation.
fn canonical_order(a: &RawAttendanceEntry, b: &RawAttendanceEntry) -> Ordering {
    a.source
        .cmp(&b.source)
        .then_with(|| a.display_date.cmp(&b.display_date))
        .then_with(|| a.start_time.cmp(&b.start_time))
        .then_with(|| a.end_time.cmp(&b.end_time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::attendance::SourceFeed;

    fn payroll(day: i64) -> RawAttendanceEntry {
        RawAttendanceEntry::new(day, SourceFeed::Payroll).with_date(&format!("{day:02}/03/2025"))
    }

    fn incident(day: i64, kind: &str) -> RawAttendanceEntry {
        RawAttendanceEntry::new(day, SourceFeed::Incidents)
            .with_date(&format!("{day:02}/03/2025"))
            .with_incident(kind)
    }

    #[test]
    fn duplicate_feeds_take_the_max_not_the_sum() {
        let entries = vec![
            payroll(4).with_times("06:00", "14:00"),
            incident(4, "NO ASISTENCIA").with_times("06:00", "14:00"),
        ];

        let grid = reconcile("E1", &entries, &IncidentExemptions::default(), ExemptionMode::Card);
        let d = grid.day(4).expect("day 4");

        assert_eq!(d.hours, 8.0);
        assert!(d.has_incident);
        assert_eq!(grid.total_hours, 8.0);
        assert_eq!(grid.worked_days, 1);
    }

    #[test]
    fn exempt_incident_reports_zero_in_card_mode() {
        let entries = vec![incident(9, "permiso no remunerado").with_times("07:00", "15:00")];
        let ex = IncidentExemptions::default();

        let card = reconcile("E1", &entries, &ex, ExemptionMode::Card);
        assert_eq!(card.day(9).unwrap().hours, 0.0);
        assert_eq!(card.worked_days, 0);

        let detail = reconcile("E1", &entries, &ex, ExemptionMode::Detail);
        assert_eq!(detail.day(9).unwrap().hours, 8.0);
        assert_eq!(detail.worked_days, 1);
    }

    #[test]
    fn per_entry_flag_skips_the_exemption() {
        let entries = vec![
            incident(9, "NO ASISTENCIA")
                .with_times("07:00", "11:00")
                .skipping_exemption(),
        ];
        let grid = reconcile("E1", &entries, &IncidentExemptions::default(), ExemptionMode::Card);
        assert_eq!(grid.day(9).unwrap().hours, 4.0);
    }

    #[test]
    fn exemption_matches_substrings_ignoring_case() {
        let ex = IncidentExemptions::default();
        assert!(ex.is_zero_hour_incident("No Asistencia injustificada"));
        assert!(ex.is_zero_hour_incident("DIAS NO CLASE"));
        assert!(!ex.is_zero_hour_incident("INCAPACIDAD"));
        assert!(!ex.is_zero_hour_incident(""));

        let custom = IncidentExemptions::new(["vacaciones", " "]);
        assert!(custom.is_zero_hour_incident("VACACIONES"));
        assert!(!custom.is_zero_hour_incident("NO ASISTENCIA"));
    }

    #[test]
    fn static_hours_are_the_fallback() {
        let entries = vec![
            payroll(2).with_static_hours(6.5),
            payroll(3).with_times("08:00", "-").with_static_hours(4.0),
            payroll(5),
        ];
        let grid = reconcile("E1", &entries, &IncidentExemptions::default(), ExemptionMode::Card);

        assert_eq!(grid.day(2).unwrap().hours, 6.5);
        assert_eq!(grid.day(3).unwrap().hours, 4.0);
        // a rest day is a valid zero, not an error
        assert_eq!(grid.day(5).unwrap().hours, 0.0);
        assert_eq!(grid.worked_days, 2);
        assert_eq!(grid.total_hours, 10.5);
    }

    #[test]
    fn night_shift_hours_cross_midnight() {
        let entries = vec![payroll(14).with_times("22:00", "06:00")];
        let grid = reconcile("E1", &entries, &IncidentExemptions::default(), ExemptionMode::Card);
        assert_eq!(grid.day(14).unwrap().hours, 8.0);
    }

    #[test]
    fn out_of_range_days_are_dropped_and_counted() {
        let entries = vec![payroll(0), payroll(32), payroll(-1), payroll(31).with_static_hours(2.0)];
        let grid = reconcile("E1", &entries, &IncidentExemptions::default(), ExemptionMode::Card);

        assert_eq!(grid.dropped_entries, 3);
        assert_eq!(grid.slots().filter(|(_, d)| d.is_some()).count(), 1);
        assert_eq!(grid.day(31).unwrap().hours, 2.0);
        assert!(grid.day(0).is_none());
        assert!(grid.day(32).is_none());
    }

    #[test]
    fn incident_labels_are_unioned() {
        let entries = vec![
            incident(6, "INCAPACIDAD"),
            incident(6, "INCAPACIDAD"),
            incident(6, "ACCIDENTE"),
            payroll(6).with_static_hours(3.0),
        ];
        let grid = reconcile("E1", &entries, &IncidentExemptions::default(), ExemptionMode::Card);
        let d = grid.day(6).unwrap();

        assert_eq!(
            d.incident_types.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["ACCIDENTE", "INCAPACIDAD"]
        );
        assert_eq!(d.display_date, "06/03/2025");
    }

    #[test]
    fn grid_is_dense_and_aggregates_match_it() {
        let entries = vec![
            payroll(1).with_times("08:00", "12:00"),
            payroll(1).with_times("08:00", "16:30"),
            payroll(10).with_static_hours(5.25),
            incident(20, "NO ASISTENCIA").with_times("08:00", "16:00"),
            payroll(25).with_times("21:00", "05:00"),
        ];
        let grid = reconcile("E1", &entries, &IncidentExemptions::default(), ExemptionMode::Card);

        assert_eq!(grid.slots().count(), 31);

        let from_grid: Vec<f64> = grid
            .slots()
            .filter_map(|(_, d)| d)
            .map(|d| d.hours)
            .filter(|h| *h > 0.0)
            .collect();
        assert_eq!(grid.total_hours, from_grid.iter().sum::<f64>());
        assert_eq!(grid.worked_days, from_grid.len());
        assert_eq!(grid.total_hours, 8.5 + 5.25 + 8.0);
        assert_eq!(grid.incident_days(), 1);
    }

    #[test]
    fn reconcile_is_order_independent() {
        let entries = vec![
            payroll(3).with_times("06:00", "14:00"),
            incident(3, "PERMISO NO REMUNERADO").with_times("06:00", "14:00"),
            RawAttendanceEntry::new(3, SourceFeed::Billing).with_date("3/3/2025"),
            payroll(8).with_static_hours(7.0),
            incident(8, "CITA MEDICA").with_static_hours(2.0),
            payroll(40),
        ];
        let ex = IncidentExemptions::default();
        let base = reconcile("E1", &entries, &ex, ExemptionMode::Card);

        let mut reversed = entries.clone();
        reversed.reverse();
        assert_eq!(reconcile("E1", &reversed, &ex, ExemptionMode::Card), base);

        for shift in 1..entries.len() {
            let mut rotated = entries.clone();
            rotated.rotate_left(shift);
            assert_eq!(reconcile("E1", &rotated, &ex, ExemptionMode::Card), base);
        }

        // and calling it twice yields the same grid
        assert_eq!(reconcile("E1", &entries, &ex, ExemptionMode::Card), base);
    }
}
