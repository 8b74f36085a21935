//! Anomaly report: the reportable records of every selected employee.

use crate::core::calculator::classify::{classify, is_reportable};
use crate::export::NoveltyExport;
use crate::models::dashboard::Employee;
use crate::utils::formatting::or_dash;

/// One row per record whose category is reportable, in employee order and
/// then record order.
pub fn build_report(employees: &[&Employee]) -> Vec<NoveltyExport> {
    employees
        .iter()
        .flat_map(|emp| {
            emp.registros.iter().filter_map(move |rec| {
                let category = classify(rec.observation());
                if !is_reportable(category) {
                    return None;
                }
                Some(NoveltyExport {
                    codigo: emp.codigo.clone(),
                    nombre: emp.nombre.clone(),
                    documento: emp.documento.clone().unwrap_or_default(),
                    fecha: rec.fecha.clone(),
                    dia: rec.dia.clone(),
                    ingreso: or_dash(rec.ingreso.as_deref()),
                    salida: or_dash(rec.salida.as_deref()),
                    horas: rec.horas.filter(|h| h.is_finite()),
                    categoria: category.label().to_string(),
                    observacion: rec.observation().to_string(),
                    category,
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::dashboard::AttendanceRecord;

    fn rec(fecha: &str, obs: &str) -> AttendanceRecord {
        AttendanceRecord {
            fecha: fecha.into(),
            dia: "Lunes".into(),
            ingreso: Some("22:00".into()),
            salida: None,
            horas: Some(8.0),
            observacion: Some(obs.into()),
        }
    }

    #[test]
    fn only_warnings_and_inferred_exits_are_reported() {
        let e = Employee {
            codigo: "7".into(),
            nombre: "LUZ".into(),
            cargo: None,
            documento: Some("99".into()),
            registros: vec![
                rec("01/03/2025", "OK"),
                rec("02/03/2025", "Salida Inferida Estándar"),
                rec("03/03/2025", "ALERTA jornada"),
                rec("04/03/2025", "Turno nocturno"),
                rec("05/03/2025", "SIN REGISTROS"),
                rec("06/03/2025", "Entrada sin salida"),
            ],
        };

        let rows = build_report(&[&e]);
        let dates: Vec<_> = rows.iter().map(|r| r.fecha.as_str()).collect();
        assert_eq!(dates, vec!["02/03/2025", "06/03/2025"]);
        assert_eq!(rows[0].categoria, "Salida nocturna");
        assert_eq!(rows[1].categoria, "Advertencia");
        assert_eq!(rows[1].salida, "—");
        assert_eq!(rows[1].documento, "99");
    }
}
