pub mod routes;
pub mod errors;

use std::sync::Arc;
use axum::Router;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tower_http::trace::TraceLayer;
use crate::probe::Prober;
use crate::reporting::ResultReporter;
use crate::wordlist::Wordlist;

/// A run that has been triggered and has not yet written its report.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveRun {
    pub authority: String,
    pub started_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct AppState {
    pub wordlist: Wordlist,
    pub prober: Arc<dyn Prober>,
    pub reporter: ResultReporter,
    pub active_runs: Arc<DashMap<String, ActiveRun>>,
}

impl AppState {
    pub fn new(wordlist: Wordlist, prober: Arc<dyn Prober>, reporter: ResultReporter) -> Self {
        Self {
            wordlist,
            prober,
            reporter,
            active_runs: Arc::new(DashMap::new()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", axum::routing::get(routes::trigger::trigger_run))
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/runs", axum::routing::get(routes::runs::list_runs))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
