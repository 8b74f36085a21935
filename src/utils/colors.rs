//! Terminal colors for observation categories and hour cells.

use crate::models::observation::ObservationCategory;
use ansi_term::{Colour, Style};

/// Style of a dashboard row, mirroring the web dashboard's row colors.
pub fn style_for_category(category: ObservationCategory) -> Style {
    match category {
        ObservationCategory::Ok => Colour::Green.normal(),
        ObservationCategory::NoRecords => Colour::Fixed(245).normal(),
        ObservationCategory::InferredNightExit => Colour::Purple.normal(),
        ObservationCategory::NightShift => Colour::Blue.normal(),
        ObservationCategory::Alert => Colour::Red.bold(),
        ObservationCategory::Warning => Colour::Yellow.normal(),
    }
}

pub fn paint_category(category: ObservationCategory, text: &str) -> String {
    style_for_category(category).paint(text).to_string()
}

/// Calendar cell: grey when empty, red when the day carries an incident.
pub fn paint_day_cell(text: &str, has_record: bool, has_incident: bool) -> String {
    let style = if !has_record {
        Colour::Fixed(245).dimmed()
    } else if has_incident {
        Colour::Red.normal()
    } else {
        Style::default()
    };
    style.paint(text).to_string()
}

/// Colored swatch plus label, used by legends and summary chips.
pub fn chip(category: ObservationCategory, count: Option<usize>) -> String {
    let text = match count {
        Some(n) => format!("● {}: {}", category.label(), n),
        None => format!("● {}", category.label()),
    };
    paint_category(category, &text)
}
