use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::filter_employees;
use crate::core::logic::Core;
use crate::core::report::build_report;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;

/// Handle the `report` command: export the reportable novedades of the
/// selected employees.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        input,
        format,
        file,
        employee,
        force,
    } = cmd
    {
        let result = Core::load_processing_result(input)?;
        let employees = filter_employees(&result.datos, employee.as_deref().unwrap_or(""));
        let rows = build_report(&employees);

        info(format!(
            "{} reportable records from {} employees",
            rows.len(),
            employees.len()
        ));

        ExportLogic::export(&rows, *format, file, &cfg.report_title, *force)?;
    }
    Ok(())
}
