//! Per-employee statistics, global chips and search for the dashboard.

use crate::core::calculator::classify::{aggregate_counts, classify};
use crate::models::dashboard::Employee;
use crate::models::observation::{CategoryCounts, ObservationCategory};
use crate::utils::formatting::normalize_document;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct EmployeeStats {
    /// Records with any clock activity (everything but "no records").
    pub worked_days: usize,
    pub total_hours: f64,
    /// Records that are neither OK nor "no records".
    pub novelties: usize,
}

pub fn employee_stats(employee: &Employee) -> EmployeeStats {
    let mut stats = EmployeeStats::default();

    for rec in &employee.registros {
        let category = classify(rec.observation());
        if category != ObservationCategory::NoRecords {
            stats.worked_days += 1;
        }
        if let Some(h) = rec.horas.filter(|h| h.is_finite()) {
            stats.total_hours += h;
        }
        if !matches!(
            category,
            ObservationCategory::Ok | ObservationCategory::NoRecords
        ) {
            stats.novelties += 1;
        }
    }

    stats
}

/// Category counts over every record of every employee.
pub fn global_summary(employees: &[Employee]) -> CategoryCounts {
    aggregate_counts(
        employees
            .iter()
            .flat_map(|e| e.registros.iter())
            .map(|r| r.observation()),
    )
}

/// Search by name (ignoring case), code or document number.
/// An empty query keeps everyone.
pub fn filter_employees<'a>(employees: &'a [Employee], query: &str) -> Vec<&'a Employee> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return employees.iter().collect();
    }
    let q_doc = normalize_document(&q);

    employees
        .iter()
        .filter(|e| {
            e.nombre.to_lowercase().contains(&q)
                || e.codigo.to_lowercase().contains(&q)
                || e.documento.as_deref().is_some_and(|d| {
                    d.contains(&q) || (!q_doc.is_empty() && normalize_document(d).contains(&q_doc))
                })
        })
        .collect()
}

/// "Showing N of M employees".
pub fn count_line(shown: usize, total: usize) -> String {
    format!("Showing {shown} of {total} employees")
}
