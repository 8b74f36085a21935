use serde::Serialize;

/// Source feed an attendance entry was exported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SourceFeed {
    Payroll,   // nomina
    Incidents, // novedades
    Billing,   // facturacion
}

impl SourceFeed {
    /// Convert wire string → enum
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "nomina" => Some(SourceFeed::Payroll),
            "novedades" => Some(SourceFeed::Incidents),
            "facturacion" => Some(SourceFeed::Billing),
            _ => None,
        }
    }
}

/// One validated source record for one employee on one calendar day.
///
/// Built once at the JSON boundary (see `models::wire`); the reconciler
/// never re-checks field presence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawAttendanceEntry {
    /// Day of month as found in the source. Values outside 1..31 are
    /// dropped (and counted) by the reconciler.
    pub day: i64,
    pub display_date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Precomputed decimal hours, used when start/end are unusable.
    pub static_hours: Option<f64>,
    pub incident_flag: bool,
    pub incident_type: Option<String>,
    pub observation: Option<String>,
    pub source: SourceFeed,
    /// Opt this entry out of the zero-hour exemption. Library-only: the
    /// JSON feeds carry no such field, so loaded entries always leave it
    /// `false`; set it with [`RawAttendanceEntry::skipping_exemption`].
    pub skip_exemption: bool,
}

impl RawAttendanceEntry {
    /// Minimal entry for a day; remaining fields start empty.
    pub fn new(day: i64, source: SourceFeed) -> Self {
        Self {
            day,
            display_date: String::new(),
            start_time: None,
            end_time: None,
            static_hours: None,
            incident_flag: false,
            incident_type: None,
            observation: None,
            source,
            skip_exemption: false,
        }
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.display_date = date.to_string();
        self
    }

    pub fn with_times(mut self, start: &str, end: &str) -> Self {
        self.start_time = Some(start.to_string());
        self.end_time = Some(end.to_string());
        self
    }

    pub fn with_static_hours(mut self, hours: f64) -> Self {
        self.static_hours = Some(hours);
        self
    }

    pub fn with_incident(mut self, kind: &str) -> Self {
        self.incident_flag = true;
        if !kind.trim().is_empty() {
            self.incident_type = Some(kind.trim().to_string());
        }
        self
    }

    pub fn skipping_exemption(mut self) -> Self {
        self.skip_exemption = true;
        self
    }
}
