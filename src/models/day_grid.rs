use serde::Serialize;
use std::collections::BTreeSet;

pub const DAYS_IN_GRID: usize = 31;

/// The merged attendance record for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReconciledDay {
    pub day: u32,
    /// Maximum of the candidate hours of every contributing entry.
    pub hours: f64,
    pub has_incident: bool,
    pub incident_types: BTreeSet<String>,
    pub display_date: String,
}

/// Dense 1..31 view of one employee's month plus its aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthGrid {
    pub employee_id: String,
    days: Vec<Option<ReconciledDay>>,
    pub total_hours: f64,
    pub worked_days: usize,
    /// Entries discarded because their day number fell outside 1..31.
    pub dropped_entries: usize,
}

impl MonthGrid {
    /// Build a grid from reconciled days. Aggregates are derived here, from
    /// the grid itself, so they can never disagree with the per-day detail.
    pub(crate) fn from_days(
        employee_id: &str,
        days: Vec<Option<ReconciledDay>>,
        dropped_entries: usize,
    ) -> Self {
        debug_assert_eq!(days.len(), DAYS_IN_GRID);

        let worked: Vec<f64> = days
            .iter()
            .flatten()
            .map(|d| d.hours)
            .filter(|h| *h > 0.0)
            .collect();

        Self {
            employee_id: employee_id.to_string(),
            total_hours: worked.iter().sum(),
            worked_days: worked.len(),
            days,
            dropped_entries,
        }
    }

    /// Day `n` (1-based); `None` for absent or out-of-range days.
    pub fn day(&self, n: u32) -> Option<&ReconciledDay> {
        if n == 0 {
            return None;
        }
        self.days.get(n as usize - 1).and_then(|d| d.as_ref())
    }

    /// Iterate all 31 slots as (day number, optional record).
    pub fn slots(&self) -> impl Iterator<Item = (u32, Option<&ReconciledDay>)> {
        self.days
            .iter()
            .enumerate()
            .map(|(i, d)| (i as u32 + 1, d.as_ref()))
    }

    pub fn incident_days(&self) -> usize {
        self.days.iter().flatten().filter(|d| d.has_incident).count()
    }
}
