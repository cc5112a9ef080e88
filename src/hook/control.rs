use std::sync::RwLock;
use serde_json::Value;
use crate::errors::HookError;
use tracing::info;

/// Operator-facing control surface of the hook. The authority label is only
/// shown in log output; it never changes which queries are intercepted.
#[derive(Debug, Default)]
pub struct HookControl {
    authority: RwLock<Option<String>>,
}

impl HookControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_authority(&self, authority: &str) {
        info!(authority, "Authority set");
        let mut slot = self.authority.write().unwrap_or_else(|e| e.into_inner());
        *slot = Some(authority.to_string());
    }

    pub fn authority(&self) -> Option<String> {
        self.authority
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Dispatch an exported operation by name with JSON arguments.
    pub fn call(&self, export: &str, args: &[Value]) -> Result<Value, HookError> {
        match export {
            "setauthority" => {
                let authority = match args {
                    [Value::String(authority)] => authority,
                    _ => {
                        return Err(HookError::InvalidArguments(
                            "setauthority expects a single string argument".into(),
                        ))
                    }
                };
                self.set_authority(authority);
                Ok(Value::Null)
            }
            other => Err(HookError::UnknownExport(other.to_string())),
        }
    }
}
