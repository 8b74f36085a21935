use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cache::ResultCache;
use crate::core::calculator::classify::classify;
use crate::core::dashboard::{count_line, employee_stats, filter_employees, global_summary};
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::dashboard::{Employee, ProcessingResult};
use crate::models::observation::ObservationCategory;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{chip, paint_category};
use crate::utils::formatting::{bold, or_dash};
use crate::utils::table::{Cell, Column, Table};
use crate::utils::{format_hours, truncate};
use tracing::debug;

/// Handle the `dashboard` command.
///
/// With `--input` the processing result is validated, rendered and cached;
/// without it the last cached result is rendered again.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        input,
        search,
        details,
    } = cmd
    {
        let cache = ResultCache::new(cfg.cache_path());

        let query = search.as_deref().unwrap_or("");

        match input {
            Some(path) => {
                let result = Core::load_processing_result(path)?;
                render(&result, query, *details, cfg);

                // Cache write failures only warn.
                if let Err(e) = cache.store(&result) {
                    warning(format!(
                        "Result could not be cached at {}: {e}",
                        cache.path().display()
                    ));
                }
            }
            None => {
                debug!(path = %cache.path().display(), "rendering cached result");
                let result = Core::check_success(cache.load()?)?;
                render(&result, query, *details, cfg);
            }
        }
    }
    Ok(())
}

fn render(result: &ProcessingResult, query: &str, details: bool, cfg: &Config) {
    print_summary(result);

    let shown = filter_employees(&result.datos, query);
    println!();
    info(count_line(shown.len(), result.datos.len()));

    if shown.is_empty() {
        warning("No employees match the search.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("Code", 8),
        Column::new("Name", 28),
        Column::new("Position", 18),
        Column::new("Days", 4),
        Column::new("Hours", 12),
        Column::new("Novelties", 9),
    ]);

    for emp in &shown {
        let stats = employee_stats(emp);
        let novelties = stats.novelties.to_string();
        let novelties_cell = if stats.novelties > 0 {
            Cell::styled(
                novelties.clone(),
                paint_category(ObservationCategory::Warning, &novelties),
            )
        } else {
            Cell::from(novelties)
        };

        table.add_row(vec![
            Cell::from(emp.codigo.as_str()),
            Cell::from(truncate(&emp.nombre, 28)),
            Cell::from(truncate(&or_dash(emp.cargo.as_deref()), 18)),
            Cell::from(stats.worked_days.to_string()),
            Cell::from(format_hours(Some(stats.total_hours))),
            novelties_cell,
        ]);
    }
    print!("{}", table.render());

    if details {
        for emp in &shown {
            print_details(emp, cfg.observation_width);
        }
        print_legend();
    }
}

fn print_summary(result: &ProcessingResult) {
    header(format!(
        "File: {}",
        result.archivo.as_deref().unwrap_or("(unnamed)")
    ));

    let s = &result.stats;
    println!(
        "Employees: {}  Records: {}  Duplicates removed: {}  Inferred states: {}",
        s.empleados_unicos, s.total_registros, s.duplicados_eliminados, s.estados_inferidos
    );

    let db = &result.db_stats;
    if db.creados + db.existentes + db.errores > 0 {
        println!(
            "Database: {} created, {} existing, {} errors",
            db.creados, db.existentes, db.errores
        );
    }

    if let Some(casos) = &result.archivo_casos {
        println!("Special cases: {casos}");
    }

    let chips: Vec<String> = global_summary(&result.datos)
        .non_zero()
        .map(|(category, n)| chip(category, Some(n)))
        .collect();
    if !chips.is_empty() {
        println!("{}", chips.join("  "));
    }
}

fn print_details(emp: &Employee, observation_width: usize) {
    println!();
    println!(
        "{} ({}){}",
        bold(&emp.nombre),
        emp.codigo,
        emp.documento
            .as_deref()
            .map(|d| format!(" · {d}"))
            .unwrap_or_default()
    );

    if emp.registros.is_empty() {
        println!("  no records");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Weekday", 9),
        Column::new("In", 7),
        Column::new("Out", 7),
        Column::new("Hours", 10),
        Column::new("Observation", observation_width + 1),
    ]);

    for rec in &emp.registros {
        let category = classify(rec.observation());
        let obs = truncate(&or_dash(rec.observacion.as_deref()), observation_width);
        let painted = paint_category(category, &obs);

        table.add_row(vec![
            Cell::from(rec.fecha.as_str()),
            Cell::from(rec.dia.as_str()),
            Cell::from(or_dash(rec.ingreso.as_deref())),
            Cell::from(or_dash(rec.salida.as_deref())),
            Cell::from(format_hours(rec.horas)),
            Cell::styled(obs, painted),
        ]);
    }
    print!("{}", table.render());
}

fn print_legend() {
    let chips: Vec<String> = ObservationCategory::ALL
        .iter()
        .map(|c| chip(*c, None))
        .collect();
    println!("\n{}", chips.join("  "));
}
