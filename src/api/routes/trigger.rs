use axum::extract::{Query, State};
use serde::Deserialize;
use crate::api::{ActiveRun, AppState};
use crate::errors::FuzzError;
use crate::probe::fuzz;
use tracing::{info, warn};

pub const CONTENT_SCHEME: &str = "content://";

#[derive(Deserialize)]
pub struct TriggerQuery {
    pub authority: Option<String>,
}

/// Runs one fuzz pass against `content://<authority>` and answers once the
/// report has been written. Concurrent requests are not serialised.
///
/// The run itself is a detached task: a client that hangs up early does not
/// stop it, and the task always clears its own `active_runs` entry.
pub async fn trigger_run(
    State(state): State<AppState>,
    Query(query): Query<TriggerQuery>,
) -> Result<String, FuzzError> {
    let authority = query
        .authority
        .filter(|a| !a.is_empty())
        .ok_or(FuzzError::MissingAuthority)?;

    let run_key = uuid::Uuid::new_v4().to_string();
    if !state.active_runs.is_empty() {
        warn!(
            authority = %authority,
            in_flight = state.active_runs.len(),
            "Starting run while others are in flight; last report written wins"
        );
    }
    state.active_runs.insert(
        run_key.clone(),
        ActiveRun { authority: authority.clone(), started_at: chrono::Utc::now() },
    );

    let base_locator = format!("{}{}", CONTENT_SCHEME, authority);
    info!(authority = %authority, base = %base_locator, "Fuzz run triggered");

    let task_state = state.clone();
    let handle = tokio::spawn(async move {
        let result = async {
            let run = fuzz(
                task_state.prober.clone(),
                &base_locator,
                task_state.wordlist.shared(),
            )
            .await?;
            task_state.reporter.report(&run).await
        }
        .await;
        task_state.active_runs.remove(&run_key);
        if let Err(ref e) = result {
            warn!(base = %base_locator, error = %e, "Fuzz run failed");
        }
        result
    });

    handle
        .await
        .map_err(|e| FuzzError::Internal(format!("fuzz task failed: {}", e)))??;

    Ok(format!(
        "Fuzzing completed. Results saved to {}.",
        state.reporter.path().display()
    ))
}
