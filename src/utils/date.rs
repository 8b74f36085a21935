use chrono::{Datelike, NaiveDate};

/// Date layouts found in the time-clock and payroll exports.
const DISPLAY_FORMATS: [&str; 4] = ["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y", "%d/%m/%y"];

/// Parse a display date such as `05/03/2025` or `2025-03-05`.
pub fn parse_display_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    // "2025-03-05 00:00:00" exported by pandas
    let s = s.split_whitespace().next().unwrap_or(s);

    DISPLAY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Day of month taken from a display date.
pub fn day_from_display_date(s: &str) -> Option<u32> {
    parse_display_date(s).map(|d| d.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_layouts() {
        assert_eq!(day_from_display_date("05/03/2025"), Some(5));
        assert_eq!(day_from_display_date("2025-03-17"), Some(17));
        assert_eq!(day_from_display_date("31-01-2025"), Some(31));
        assert_eq!(day_from_display_date("2025-03-05 00:00:00"), Some(5));
        assert_eq!(day_from_display_date("hoy"), None);
        assert_eq!(day_from_display_date(""), None);
    }
}
