use thiserror::Error;

#[derive(Debug, Error)]
pub enum FuzzError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing authority parameter.")]
    MissingAuthority,

    #[error("Invalid locator: {0}")]
    InvalidLocator(String),

    #[error("Wordlist error: {0}")]
    Wordlist(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Errors raised while observing an intercepted query. They are logged and
/// reported on the hook's event channel, never returned to the caller of the
/// intercepted method.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HookError {
    #[error("Capture error: {0}")]
    Capture(String),

    #[error("Cursor is closed")]
    CursorClosed,

    #[error("Unknown export: {0}")]
    UnknownExport(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl FuzzError {
    /// Process exit code used by the binary for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            FuzzError::Config(_) | FuzzError::Yaml(_) => 2,
            FuzzError::Wordlist(_) => 3,
            FuzzError::InvalidLocator(_) | FuzzError::MissingAuthority => 5,
            _ => 1,
        }
    }
}
