use axum::{extract::State, Json};
use serde_json::{json, Value};
use crate::api::AppState;

pub async fn list_runs(State(state): State<AppState>) -> Json<Value> {
    let mut runs: Vec<Value> = state
        .active_runs
        .iter()
        .map(|entry| {
            json!({
                "id": entry.key(),
                "authority": entry.value().authority,
                "started_at": entry.value().started_at,
            })
        })
        .collect();
    runs.sort_by(|a, b| a["started_at"].as_str().cmp(&b["started_at"].as_str()));

    Json(json!({ "runs": runs, "total": runs.len() }))
}
