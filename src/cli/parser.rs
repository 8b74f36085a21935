use crate::core::calculator::reconcile::ExemptionMode;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for huellero
/// Attendance dashboard, reconciled month calendar and novedades report
#[derive(Parser)]
#[command(
    name = "huellero",
    version = env!("CARGO_PKG_VERSION"),
    about = "Attendance review CLI: dashboard, reconciled calendar and novedades report",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or custom setups)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Show debug diagnostics on stderr (RUST_LOG takes precedence)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory and file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Render the employee dashboard from a processing result
    Dashboard {
        /// Processing result JSON; without it the last cached result is shown
        #[arg(long, short = 'i', value_name = "FILE")]
        input: Option<PathBuf>,

        #[arg(long, short = 's', help = "Filter by name, code or document")]
        search: Option<String>,

        #[arg(long = "details", help = "Show every record of the listed employees")]
        details: bool,
    },

    /// Render the reconciled 1..31 calendar of each collaborator
    Calendar {
        /// Attendance map JSON (bare map or wrapped in `asistencia_data`)
        #[arg(long, short = 'i', value_name = "FILE")]
        input: PathBuf,

        #[arg(long, short = 'e', help = "Filter by name, key or document")]
        employee: Option<String>,

        #[arg(
            long,
            value_enum,
            help = "card: zero-hour incidents count as 0h; detail: raw hours"
        )]
        mode: Option<ExemptionMode>,

        #[arg(long, value_name = "LIST", help = "Only these days, e.g. 1,2,15")]
        days: Option<String>,
    },

    /// Export the novedades report
    Report {
        #[arg(long, short = 'i', value_name = "FILE")]
        input: PathBuf,

        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        /// Absolute output path
        #[arg(long, value_name = "FILE")]
        file: PathBuf,

        #[arg(long, short = 'e', help = "Only employees matching this query")]
        employee: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the category of each observation text
    Classify {
        #[arg(required = true, value_name = "TEXT")]
        texts: Vec<String>,
    },
}
