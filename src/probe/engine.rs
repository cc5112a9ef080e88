use std::sync::Arc;
use reqwest::Url;
use crate::errors::FuzzError;
use super::models::{resolve_locator, FuzzRun, ProbeOutcome, ProbeStatus};
use super::Prober;
use tracing::{info, error, Instrument};

/// Probe every candidate under `base_locator` concurrently and collect the
/// outcomes in wordlist order.
///
/// Individual probe failures are recorded in the outcome. The call itself
/// only fails when the base locator is unusable.
pub async fn fuzz(
    prober: Arc<dyn Prober>,
    base_locator: &str,
    candidates: Arc<[String]>,
) -> Result<FuzzRun, FuzzError> {
    validate_base_locator(base_locator)?;

    let run_id = uuid::Uuid::new_v4().to_string();
    let span = tracing::info_span!("fuzz_run", run_id = %run_id, base = %base_locator);

    async move {
        info!(candidates = candidates.len(), "Starting fuzz run");

        // Every spawned probe owns its slot index; results are placed by index
        // rather than by completion order.
        let mut slots: Vec<Option<ProbeOutcome>> = (0..candidates.len()).map(|_| None).collect();

        let (indices, handles): (Vec<usize>, Vec<_>) = candidates
            .iter()
            .enumerate()
            .map(|(index, candidate)| {
                let prober = Arc::clone(&prober);
                let candidate = candidate.clone();
                let locator = resolve_locator(base_locator, &candidate);
                let handle = tokio::spawn(
                    async move {
                        let status = prober.probe(&locator).await;
                        ProbeOutcome { candidate, resolved_locator: locator, status }
                    }
                    .in_current_span(),
                );
                (index, handle)
            })
            .unzip();

        let results = futures::future::join_all(handles).await;
        for (index, result) in indices.into_iter().zip(results) {
            let outcome = match result {
                Ok(outcome) => outcome,
                Err(e) => {
                    let candidate = candidates[index].clone();
                    error!(candidate = %candidate, error = %e, "Probe task panicked");
                    ProbeOutcome {
                        resolved_locator: resolve_locator(base_locator, &candidate),
                        candidate,
                        status: ProbeStatus::Failed(format!("probe task failed: {}", e)),
                    }
                }
            };
            slots[index] = Some(outcome);
        }

        let outcomes: Vec<ProbeOutcome> = slots.into_iter().flatten().collect();
        if outcomes.len() != candidates.len() {
            return Err(FuzzError::Internal(format!(
                "fuzz run produced {} outcomes for {} candidates",
                outcomes.len(),
                candidates.len()
            )));
        }

        let run = FuzzRun { base_locator: base_locator.to_string(), outcomes };
        info!(
            probes = run.len(),
            responded = run.responded().count(),
            "Fuzz run complete"
        );
        Ok(run)
    }
    .instrument(span)
    .await
}

fn validate_base_locator(base_locator: &str) -> Result<(), FuzzError> {
    if base_locator.trim().is_empty() {
        return Err(FuzzError::InvalidLocator("base locator is empty".into()));
    }
    Url::parse(base_locator)
        .map_err(|e| FuzzError::InvalidLocator(format!("{}: {}", base_locator, e)))?;
    Ok(())
}
