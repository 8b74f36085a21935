use serde::Serialize;

/// Observation category assigned to an attendance record.
///
/// Variants are declared in matching precedence order: when a text
/// satisfies more than one rule the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObservationCategory {
    Ok,
    NoRecords,
    InferredNightExit,
    NightShift,
    Alert,
    Warning,
}

impl ObservationCategory {
    pub const ALL: [ObservationCategory; 6] = [
        ObservationCategory::Ok,
        ObservationCategory::NoRecords,
        ObservationCategory::InferredNightExit,
        ObservationCategory::NightShift,
        ObservationCategory::Alert,
        ObservationCategory::Warning,
    ];

    /// Position inside `ALL`, used as an array index for counters.
    pub fn index(self) -> usize {
        match self {
            ObservationCategory::Ok => 0,
            ObservationCategory::NoRecords => 1,
            ObservationCategory::InferredNightExit => 2,
            ObservationCategory::NightShift => 3,
            ObservationCategory::Alert => 4,
            ObservationCategory::Warning => 5,
        }
    }

    /// Human label shown in chips, legends and reports.
    pub fn label(self) -> &'static str {
        match self {
            ObservationCategory::Ok => "OK",
            ObservationCategory::NoRecords => "Sin registros",
            ObservationCategory::InferredNightExit => "Salida nocturna",
            ObservationCategory::NightShift => "Turno nocturno",
            ObservationCategory::Alert => "Alerta",
            ObservationCategory::Warning => "Advertencia",
        }
    }

    /// Row color used by the web dashboard and the XLSX report.
    pub fn hex_color(self) -> u32 {
        match self {
            ObservationCategory::Ok => 0xC6EFCE,
            ObservationCategory::NoRecords => 0xD9D9D9,
            ObservationCategory::InferredNightExit => 0xE1BEE7,
            ObservationCategory::NightShift => 0xDDEBF7,
            ObservationCategory::Alert => 0xFFC7CE,
            ObservationCategory::Warning => 0xFFEB9C,
        }
    }
}

/// Per-category record counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryCounts {
    counts: [usize; 6],
}

impl CategoryCounts {
    pub fn add(&mut self, category: ObservationCategory) {
        self.counts[category.index()] += 1;
    }

    pub fn get(&self, category: ObservationCategory) -> usize {
        self.counts[category.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Categories with at least one record, in precedence order.
    pub fn non_zero(&self) -> impl Iterator<Item = (ObservationCategory, usize)> + '_ {
        ObservationCategory::ALL
            .into_iter()
            .map(|c| (c, self.get(c)))
            .filter(|(_, n)| *n > 0)
    }
}
