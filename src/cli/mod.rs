pub mod commands;
pub mod fuzz;
pub mod serve;

pub use commands::{Cli, Commands};

use std::path::Path;
use crate::config::{parse_config, FuzzConfig};
use crate::errors::FuzzError;
use crate::reporting::ResultReporter;

/// Load the config file if one was given, otherwise fall back to defaults.
pub async fn load_config(path: Option<&str>) -> Result<FuzzConfig, FuzzError> {
    match path {
        Some(path) => parse_config(Path::new(path)).await,
        None => Ok(FuzzConfig::default()),
    }
}

/// Build the reporter from CLI overrides, falling back to the config file.
pub fn build_reporter(config: &FuzzConfig, report: Option<&str>, found: Option<&str>) -> ResultReporter {
    let reporter = ResultReporter::new(report.unwrap_or(config.report_path()));
    match found.or(config.found_path()) {
        Some(found) => reporter.with_accessible_list(found),
        None => reporter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;

    #[test]
    fn test_build_reporter_prefers_flags() {
        let config = FuzzConfig {
            report: Some(ReportConfig {
                path: Some("from_config.txt".into()),
                found_path: Some("found_config.txt".into()),
            }),
            ..Default::default()
        };
        let reporter = build_reporter(&config, Some("flag.txt"), None);
        assert_eq!(reporter.path(), Path::new("flag.txt"));
        assert_eq!(reporter.accessible_path(), Some(Path::new("found_config.txt")));
    }

    #[test]
    fn test_build_reporter_defaults() {
        let reporter = build_reporter(&FuzzConfig::default(), None, None);
        assert_eq!(reporter.path(), Path::new("./fuzzing_results.txt"));
        assert!(reporter.accessible_path().is_none());
    }
}
