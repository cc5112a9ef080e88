use std::path::{Path, PathBuf};
use crate::errors::FuzzError;
use crate::probe::FuzzRun;
use super::formatter::{format_accessible, format_report};
use tracing::info;

/// Writes the flat per-run report, and optionally the list of accessible
/// locators. Each call replaces whatever the previous run wrote; concurrent
/// runs race and the last writer wins.
#[derive(Debug, Clone)]
pub struct ResultReporter {
    path: PathBuf,
    accessible_path: Option<PathBuf>,
}

impl ResultReporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into(), accessible_path: None }
    }

    pub fn with_accessible_list(mut self, path: impl Into<PathBuf>) -> Self {
        self.accessible_path = Some(path.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn accessible_path(&self) -> Option<&Path> {
        self.accessible_path.as_deref()
    }

    pub async fn report(&self, run: &FuzzRun) -> Result<(), FuzzError> {
        self.replace_contents(&self.path, &format_report(run)).await?;
        info!(path = %self.path.display(), lines = run.len(), "Wrote fuzz report");

        if let Some(accessible_path) = &self.accessible_path {
            self.replace_contents(accessible_path, &format_accessible(run)).await?;
            info!(
                path = %accessible_path.display(),
                accessible = run.accessible().count(),
                "Wrote accessible paths"
            );
        }
        Ok(())
    }

    /// Write `content` beside `target` and rename it into place, so racing
    /// runs never leave a file that mixes two reports.
    async fn replace_contents(&self, target: &Path, content: &str) -> Result<(), FuzzError> {
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                FuzzError::Report(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        let file_name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "report".to_string());
        let staging = target.with_file_name(format!(".{}.{}.tmp", file_name, uuid::Uuid::new_v4()));

        tokio::fs::write(&staging, content).await.map_err(|e| {
            FuzzError::Report(format!("failed to write {}: {}", staging.display(), e))
        })?;
        if let Err(e) = tokio::fs::rename(&staging, target).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(FuzzError::Report(format!(
                "failed to write {}: {}",
                target.display(),
                e
            )));
        }
        Ok(())
    }
}
