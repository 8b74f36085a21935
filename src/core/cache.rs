//! Last successful processing result, kept so the dashboard can be
//! re-rendered without re-uploading.

use crate::errors::{AppError, AppResult};
use crate::models::dashboard::ProcessingResult;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ResultCache {
    path: PathBuf,
}

impl ResultCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the cached result. The new content is written next to the
    /// target and renamed over it, so readers never see a half-written file.
    pub fn store(&self, result: &ProcessingResult) -> AppResult<()> {
        if !result.success {
            return Err(AppError::Processing(
                "refusing to cache a failed processing result".into(),
            ));
        }

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let tmp = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(result)?;
        fs::write(&tmp, json)?;

        if let Err(e) = fs::rename(&tmp, &self.path) {
            fs::remove_file(&tmp).ok();
            return Err(e.into());
        }

        debug!(path = %self.path.display(), "processing result cached");
        Ok(())
    }

    pub fn load(&self) -> AppResult<ProcessingResult> {
        if !self.path.exists() {
            return Err(AppError::NoCachedResult(self.path.display().to_string()));
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
