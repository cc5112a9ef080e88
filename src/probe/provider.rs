use std::sync::Arc;
use async_trait::async_trait;
use crate::hook::interceptor::CursorGuard;
use crate::hook::ContentProvider;
use super::models::ProbeStatus;
use super::Prober;
use tracing::debug;

pub const STATUS_ROWS: u16 = 200;
pub const STATUS_EMPTY: u16 = 204;
pub const STATUS_NO_CURSOR: u16 = 404;

/// Probes locators by querying a content provider in-process.
///
/// A locator is accessible when the query hands back a cursor with at least
/// one row. Outcomes use HTTP-style codes so they share the report format:
/// 200 for rows, 204 for an empty cursor, 404 for no cursor at all. A cursor
/// that fails while being read is recorded as the error text.
pub struct ProviderProber<P> {
    provider: Arc<P>,
}

impl<P: ContentProvider + 'static> ProviderProber<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }
}

fn query_status<P: ContentProvider>(provider: &P, locator: &str) -> ProbeStatus {
    let Some(mut cursor) = provider.query(locator, None, None) else {
        return ProbeStatus::Code(STATUS_NO_CURSOR);
    };
    let mut guard = CursorGuard::new(cursor.as_mut());
    match guard.move_to_next() {
        Ok(true) => ProbeStatus::Code(STATUS_ROWS),
        Ok(false) => ProbeStatus::Code(STATUS_EMPTY),
        Err(e) => {
            debug!(locator, error = %e, "Cursor failed while checking access");
            ProbeStatus::Failed(e.to_string())
        }
    }
}

#[async_trait]
impl<P: ContentProvider + 'static> Prober for ProviderProber<P> {
    async fn probe(&self, locator: &str) -> ProbeStatus {
        // Provider queries are synchronous and may block on IPC.
        let provider = Arc::clone(&self.provider);
        let target = locator.to_string();
        match tokio::task::spawn_blocking(move || query_status(provider.as_ref(), &target)).await {
            Ok(status) => status,
            Err(e) => ProbeStatus::Failed(format!("provider query failed: {}", e)),
        }
    }
}
