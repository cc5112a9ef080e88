pub mod engine;
pub mod http;
pub mod models;
pub mod provider;

use async_trait::async_trait;

pub use engine::fuzz;
pub use http::HttpProber;
pub use models::{FuzzRun, ProbeOutcome, ProbeStatus};
pub use provider::ProviderProber;

/// Issues a single request against a resolved locator.
///
/// Implementations never fail: anything that goes wrong is folded into the
/// returned status.
#[async_trait]
pub trait Prober: Send + Sync {
    async fn probe(&self, locator: &str) -> ProbeStatus;
}
