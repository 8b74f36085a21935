use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{CalendarLegend, CollaboratorCalendar, build_calendars, legend, parse_days};
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::paint_day_cell;
use crate::utils::format_hours;
use crate::utils::table::{Cell, Column, Table};
use std::collections::BTreeSet;
use tracing::warn;

const CELLS_PER_LINE: usize = 7;

/// Handle the `calendar` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar {
        input,
        employee,
        mode,
        days,
    } = cmd
    {
        let map = Core::load_attendance_map(input)?;
        let selected = days.as_deref().map(parse_days).transpose()?;
        let mode = mode.unwrap_or(cfg.exemption_mode);

        let calendars = build_calendars(&map, &cfg.exemptions(), mode, employee.as_deref());
        if calendars.is_empty() {
            warning("No collaborators match the filter.");
            return Ok(());
        }

        info(format!(
            "{} collaborators · mode: {}",
            calendars.len(),
            mode.as_str()
        ));

        for cal in &calendars {
            match &selected {
                Some(days) => print_selected_days(cal, days),
                None => print_month(cal),
            }
        }

        print_legend(&legend(&calendars));
    }
    Ok(())
}

fn print_collaborator_header(cal: &CollaboratorCalendar) {
    let c = &cal.collaborator;
    header(&c.name);

    let mut meta = Vec::new();
    if !c.document.is_empty() {
        meta.push(format!("ID {}", c.document));
    }
    if !c.site.is_empty() {
        meta.push(c.site.clone());
    }
    if !meta.is_empty() {
        println!("{}", meta.join(" · "));
    }
}

fn print_totals(cal: &CollaboratorCalendar) {
    let grid = &cal.grid;
    println!(
        "Total: {} in {} days · {} days with incidents",
        format_hours(Some(grid.total_hours)),
        grid.worked_days,
        grid.incident_days()
    );

    let drops = cal.data_quality_drops();
    if drops > 0 {
        warn!(
            collaborator = %cal.collaborator.key,
            rejected = cal.collaborator.rejected,
            out_of_range = grid.dropped_entries,
            "entries skipped"
        );
        warning(format!(
            "{drops} entries skipped: unreadable day or outside 1..31"
        ));
    }
}

/// The full 1..31 grid, one cell per day.
fn print_month(cal: &CollaboratorCalendar) {
    print_collaborator_header(cal);

    let cells: Vec<String> = cal
        .grid
        .slots()
        .map(|(n, day)| {
            let text = match day {
                Some(d) => format!("{n:>2} {:<9}", format_hours(Some(d.hours))),
                None => format!("{n:>2} {:<9}", "·"),
            };
            paint_day_cell(
                &text,
                day.is_some(),
                day.is_some_and(|d| d.has_incident),
            )
        })
        .collect();

    for line in cells.chunks(CELLS_PER_LINE) {
        println!("{}", line.join(" "));
    }

    print_totals(cal);
}

/// A row per requested day, with date and incident types.
fn print_selected_days(cal: &CollaboratorCalendar, days: &BTreeSet<u32>) {
    print_collaborator_header(cal);

    let mut table = Table::new(vec![
        Column::new("Day", 3),
        Column::new("Date", 10),
        Column::new("Hours", 10),
        Column::new("Incident", 24),
    ]);

    for &n in days {
        let row = match cal.grid.day(n) {
            Some(d) => {
                let types: Vec<&str> = d.incident_types.iter().map(String::as_str).collect();
                let novelty = if types.is_empty() {
                    "—".to_string()
                } else {
                    types.join(", ")
                };
                let painted = paint_day_cell(&novelty, true, d.has_incident);
                vec![
                    Cell::from(n.to_string()),
                    Cell::from(d.display_date.as_str()),
                    Cell::from(format_hours(Some(d.hours))),
                    Cell::styled(novelty, painted),
                ]
            }
            None => vec![
                Cell::from(n.to_string()),
                Cell::from("—"),
                Cell::from("no record"),
                Cell::from(""),
            ],
        };
        table.add_row(row);
    }
    print!("{}", table.render());

    print_totals(cal);
}

fn print_legend(legend: &CalendarLegend) {
    fn list(days: BTreeSet<u32>) -> String {
        if days.is_empty() {
            return "—".to_string();
        }
        let parts: Vec<String> = days.iter().map(u32::to_string).collect();
        textwrap::fill(&parts.join(", "), 60)
    }

    println!();
    println!("Payroll and incident days: {}", list(legend.mixed()));
    println!("Payroll-only days:         {}", list(legend.payroll_only()));
    println!("Incident-only days:        {}", list(legend.incident_only()));
}
