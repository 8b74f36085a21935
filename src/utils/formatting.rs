//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Decimal hours → "8h", "45min", "7h 30min" or "0h".
///
/// Missing values render as an em dash.
pub fn format_hours(hours: Option<f64>) -> String {
    let Some(hours) = hours.filter(|h| h.is_finite()) else {
        return "—".to_string();
    };

    let mut h = hours.floor() as i64;
    let mut m = ((hours - hours.floor()) * 60.0).round() as i64;
    // 7.9999 rounds up to a full hour
    if m == 60 {
        h += 1;
        m = 0;
    }

    match (h, m) {
        (0, 0) => "0h".to_string(),
        (h, 0) => format!("{h}h"),
        (0, m) => format!("{m}min"),
        (h, m) => format!("{h}h {m}min"),
    }
}

/// Cut `text` to `max` characters, appending an ellipsis when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}…")
    } else {
        text.to_string()
    }
}

/// Document numbers arrive as "1.234.567", "1,234,567" or "1 234 567".
pub fn normalize_document(doc: &str) -> String {
    doc.chars()
        .filter(|c| !matches!(c, '.' | ',' | ' '))
        .collect()
}

/// Empty or missing cell → em dash.
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "—".to_string(),
    }
}
