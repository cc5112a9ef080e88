pub mod types;

pub use types::{FuzzError, HookError};
