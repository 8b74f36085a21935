// src/export/excel_date.rs

use crate::utils::date::parse_display_date;
use chrono::NaiveDate;

/// Display date ("05/03/2025", "2025-03-05") → Excel serial day number.
pub(crate) fn display_date_to_excel_serial(s: &str) -> Option<f64> {
    let date = parse_display_date(s)?;
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some((date - excel_epoch).num_days() as f64)
}
