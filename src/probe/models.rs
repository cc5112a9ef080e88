use serde::Serialize;
use std::fmt;

/// What a single probe observed: a response status, or why no response came back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ProbeStatus {
    Code(u16),
    Failed(String),
}

impl ProbeStatus {
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Code(code) => Some(*code),
            Self::Failed(_) => None,
        }
    }
}

impl fmt::Display for ProbeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{}", code),
            Self::Failed(reason) => f.write_str(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeOutcome {
    pub candidate: String,
    pub resolved_locator: String,
    pub status: ProbeStatus,
}

/// One complete pass over a wordlist. Outcomes are in wordlist order.
#[derive(Debug, Clone, Serialize)]
pub struct FuzzRun {
    pub base_locator: String,
    pub outcomes: Vec<ProbeOutcome>,
}

impl FuzzRun {
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Outcomes that got a status code back from the remote side.
    pub fn responded(&self) -> impl Iterator<Item = &ProbeOutcome> {
        self.outcomes.iter().filter(|o| o.status.code().is_some())
    }

    /// Outcomes answered with 200: the locator served content.
    pub fn accessible(&self) -> impl Iterator<Item = &ProbeOutcome> {
        self.outcomes.iter().filter(|o| o.status == ProbeStatus::Code(200))
    }
}

pub fn resolve_locator(base: &str, candidate: &str) -> String {
    format!("{}/{}", base, candidate)
}
