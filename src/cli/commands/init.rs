use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;
use tracing::debug;

/// Handle the `init` command
///
/// Creates the configuration directory and writes a default configuration
/// file. An existing file is left untouched.
pub fn handle(cfg: &Config, path: &Path) -> AppResult<()> {
    println!("⚙️  Initializing huellero…");
    println!("📄 Config file : {}", path.display());
    println!("🗂️  Cache file  : {}", cfg.cache_path().display());

    if path.exists() {
        info("Configuration file already exists, nothing to do.");
        return Ok(());
    }

    cfg.save_to(path)?;
    debug!(path = %path.display(), "default configuration written");

    success("huellero initialization completed!");
    Ok(())
}
