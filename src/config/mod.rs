use crate::core::calculator::reconcile::{DEFAULT_ZERO_HOUR_TYPES, ExemptionMode, IncidentExemptions};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Incident types that count as zero hours in the summary view.
    #[serde(default = "default_zero_hour_types")]
    pub zero_hour_types: Vec<String>,
    #[serde(default)]
    pub exemption_mode: ExemptionMode,
    /// Observation column width in the dashboard before truncation.
    #[serde(default = "default_observation_width")]
    pub observation_width: usize,
    /// Where the last successful processing result is kept.
    #[serde(default = "default_cache_file")]
    pub cache_file: String,
    #[serde(default = "default_report_title")]
    pub report_title: String,
}

fn default_zero_hour_types() -> Vec<String> {
    DEFAULT_ZERO_HOUR_TYPES.iter().map(|s| s.to_string()).collect()
}
fn default_observation_width() -> usize {
    55
}
fn default_cache_file() -> String {
    Config::config_dir()
        .join("last_result.json")
        .to_string_lossy()
        .to_string()
}
fn default_report_title() -> String {
    "Reporte de novedades".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zero_hour_types: default_zero_hour_types(),
            exemption_mode: ExemptionMode::default(),
            observation_width: default_observation_width(),
            cache_file: default_cache_file(),
            report_title: default_report_title(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("huellero")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".huellero")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("huellero.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does
    /// not exist. A file that exists but does not parse is an error.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(path).map_err(|_| AppError::ConfigLoad(path.display().to_string()))?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Write the configuration as YAML, creating the parent directory.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(path, yaml)?;
        Ok(())
    }

    fn validate(&self) -> AppResult<()> {
        if self.observation_width < 10 {
            return Err(AppError::Config(format!(
                "observation_width must be at least 10 (got {})",
                self.observation_width
            )));
        }
        Ok(())
    }

    pub fn exemptions(&self) -> IncidentExemptions {
        IncidentExemptions::new(&self.zero_hour_types)
    }

    pub fn cache_path(&self) -> PathBuf {
        expand_tilde(&self.cache_file)
    }
}
