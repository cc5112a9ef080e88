use crate::probe::{FuzzRun, ProbeOutcome};

pub fn format_outcome_line(outcome: &ProbeOutcome) -> String {
    format!("Path: {} - Status: {}\n", outcome.resolved_locator, outcome.status)
}

pub fn format_report(run: &FuzzRun) -> String {
    run.outcomes.iter().map(format_outcome_line).collect()
}

/// One accessible locator per line, in wordlist order.
pub fn format_accessible(run: &FuzzRun) -> String {
    run.accessible()
        .map(|o| format!("{}\n", o.resolved_locator))
        .collect()
}
