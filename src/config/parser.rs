use std::path::Path;
use crate::errors::FuzzError;
use super::types::FuzzConfig;
use tracing::warn;

pub async fn parse_config(path: &Path) -> Result<FuzzConfig, FuzzError> {
    if !path.exists() {
        return Err(FuzzError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > 1_048_576 {
        return Err(FuzzError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: FuzzConfig = if content.trim().is_empty() {
        FuzzConfig::default()
    } else {
        serde_yaml::from_str(&content)?
    };

    validate_config(&config)?;

    Ok(config)
}

/// Reject values that would only fail later, at bind or fuzz time.
fn validate_config(config: &FuzzConfig) -> Result<(), FuzzError> {
    if let Some(server) = &config.server {
        if server.port == Some(0) {
            return Err(FuzzError::Config("server.port must be non-zero".into()));
        }
        if server.host.as_deref().is_some_and(|h| h.trim().is_empty()) {
            return Err(FuzzError::Config("server.host must not be empty".into()));
        }
    }

    if config.wordlist.as_ref().is_some_and(|w| w.path.as_deref() == Some("")) {
        return Err(FuzzError::Config("wordlist.path must not be empty".into()));
    }

    if let Some(report) = &config.report {
        if report.path.as_deref() == Some("") {
            return Err(FuzzError::Config("report.path must not be empty".into()));
        }
        if report.found_path.as_deref() == Some("") {
            return Err(FuzzError::Config("report.found_path must not be empty".into()));
        }
        if report.found_path.is_some() && report.found_path == report.path {
            return Err(FuzzError::Config("report.found_path must differ from report.path".into()));
        }
    }

    if config.server.is_none() && config.wordlist.is_none() && config.report.is_none() {
        warn!("Config file has no recognised sections, using defaults");
    }

    Ok(())
}
