//! Unified application error type.
//! Every layer (config, core, export, cli) returns AppError so failures
//! surface the same way at the command line.
//!
//! Expected-missing data (an unparseable time, an absent hour value, a day
//! outside 1..31) is never an error: the core reports those as `None` or as
//! counted drops.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid input file {path}: {reason}")]
    InvalidInput { path: String, reason: String },

    #[error("Invalid day list: {0}")]
    InvalidDays(String),

    // ---------------------------
    // Processing result errors
    // ---------------------------
    #[error("Processing failed on the server: {0}")]
    Processing(String),

    #[error("No cached result found at {0}; run `dashboard --input FILE` first")]
    NoCachedResult(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration from {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
