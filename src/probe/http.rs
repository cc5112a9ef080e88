use async_trait::async_trait;
use reqwest::Client;
use crate::errors::FuzzError;
use super::models::ProbeStatus;
use super::Prober;
use tracing::debug;

/// Issues one GET per locator. No timeout and no retries are applied, so a
/// hanging remote holds up the whole run.
#[derive(Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new() -> Result<Self, FuzzError> {
        let client = Client::builder()
            .user_agent(concat!("cpfuzz/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| FuzzError::Network(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Prober for HttpProber {
    async fn probe(&self, locator: &str) -> ProbeStatus {
        // reqwest hands back every received response, 4xx and 5xx included,
        // as `Ok`; `Err` only ever means no response arrived.
        match self.client.get(locator).send().await {
            Ok(response) => ProbeStatus::Code(response.status().as_u16()),
            Err(e) => {
                debug!(locator, error = %e, "Probe failed without a response");
                ProbeStatus::Failed(e.to_string())
            }
        }
    }
}
