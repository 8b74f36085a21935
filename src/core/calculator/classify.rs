//! Observation text → category.
//!
//! The server pipeline writes free-text observations; the dashboard and the
//! anomaly report only care about which of six categories a text falls in.
//! Rules are evaluated top to bottom and the first match wins.

use crate::models::observation::{CategoryCounts, ObservationCategory};

type Predicate = fn(&str) -> bool;

/// Ordered classification rules. `Warning` is the fallback and has no rule.
const RULES: [(Predicate, ObservationCategory); 5] = [
    (is_ok, ObservationCategory::Ok),
    (is_no_records, ObservationCategory::NoRecords),
    (is_inferred_night_exit, ObservationCategory::InferredNightExit),
    (is_night_shift, ObservationCategory::NightShift),
    (is_alert, ObservationCategory::Alert),
];

/// Categories left out of the anomaly report.
pub const EXCLUDED_FROM_REPORT: [ObservationCategory; 4] = [
    ObservationCategory::Ok,
    ObservationCategory::NoRecords,
    ObservationCategory::Alert,
    ObservationCategory::NightShift,
];

fn is_ok(t: &str) -> bool {
    t.is_empty() || t == "OK" || t == "Sin observaciones"
}

fn is_no_records(t: &str) -> bool {
    t.contains("SIN REGISTROS") || t.contains("SIN_REGISTROS")
}

fn is_inferred_night_exit(t: &str) -> bool {
    t.contains("Salida Inferida Estándar") || t.contains("SALIDA_ESTANDAR_NOCTURNA")
}

fn is_night_shift(t: &str) -> bool {
    t.contains("Turno nocturno") || t.contains("TURNO_NOCTURNO")
}

fn is_alert(t: &str) -> bool {
    t.to_uppercase().contains("ALERTA")
}

/// Classify an observation. Total: every input gets exactly one category.
pub fn classify(observation: &str) -> ObservationCategory {
    RULES
        .iter()
        .find(|(matches, _)| matches(observation))
        .map(|(_, category)| *category)
        .unwrap_or(ObservationCategory::Warning)
}

/// Same as [`classify`], treating a missing observation as empty.
pub fn classify_opt(observation: Option<&str>) -> ObservationCategory {
    classify(observation.unwrap_or(""))
}

/// Count records per category.
pub fn aggregate_counts<'a, I>(observations: I) -> CategoryCounts
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = CategoryCounts::default();
    for obs in observations {
        counts.add(classify(obs));
    }
    counts
}

/// Only warnings and inferred night exits are reportable novedades.
pub fn is_reportable(category: ObservationCategory) -> bool {
    !EXCLUDED_FROM_REPORT.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ObservationCategory::*;

    #[test]
    fn documented_examples() {
        assert_eq!(classify(""), Ok);
        assert_eq!(classify("SIN REGISTROS"), NoRecords);
        assert_eq!(classify("Turno nocturno largo"), NightShift);
        assert_eq!(classify("alerta por exceso"), Alert);
        assert_eq!(classify("algo inesperado"), Warning);
    }

    #[test]
    fn ok_needs_an_exact_string() {
        assert_eq!(classify("OK"), Ok);
        assert_eq!(classify("Sin observaciones"), Ok);
        assert_eq!(classify("OK "), Warning);
        assert_eq!(classify("ok"), Warning);
        assert_eq!(classify_opt(None), Ok);
    }

    #[test]
    fn each_rule_in_isolation() {
        assert_eq!(classify("Empleado SIN_REGISTROS en el periodo"), NoRecords);
        assert_eq!(classify("Salida Inferida Estándar (22:00)"), InferredNightExit);
        assert_eq!(classify("SALIDA_ESTANDAR_NOCTURNA"), InferredNightExit);
        assert_eq!(classify("TURNO_NOCTURNO"), NightShift);
        assert_eq!(classify("ALERTA: jornada > 12h"), Alert);
        assert_eq!(classify("Entrada tarde"), Warning);
    }

    #[test]
    fn precedence_is_first_match() {
        // both no-records and alert match: no-records comes first
        assert_eq!(classify("SIN REGISTROS - ALERTA"), NoRecords);
        assert_eq!(classify("Salida Inferida Estándar en Turno nocturno"), InferredNightExit);
        assert_eq!(classify("Turno nocturno con alerta"), NightShift);
    }

    #[test]
    fn only_alert_ignores_case() {
        assert_eq!(classify("sin registros"), Warning);
        assert_eq!(classify("turno nocturno"), Warning);
        assert_eq!(classify("AlErTa"), Alert);
    }

    #[test]
    fn reportability_for_every_category() {
        for c in ObservationCategory::ALL {
            let expected = matches!(c, Warning | InferredNightExit);
            assert_eq!(is_reportable(c), expected, "{c:?}");
        }
    }

    #[test]
    fn counts_ignore_order() {
        let obs = ["", "ALERTA", "x", "OK", "TURNO_NOCTURNO", "y"];
        let counts = aggregate_counts(obs);
        let reversed = aggregate_counts(obs.iter().rev().copied());

        assert_eq!(counts, reversed);
        assert_eq!(counts.get(Ok), 2);
        assert_eq!(counts.get(Warning), 2);
        assert_eq!(counts.get(Alert), 1);
        assert_eq!(counts.get(NightShift), 1);
        assert_eq!(counts.total(), obs.len());
    }
}
