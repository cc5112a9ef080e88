//! Candidate path segments for a fuzz run.
//!
//! The wordlist is read once at startup and shared immutably between runs.

use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;
use crate::errors::FuzzError;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Wordlist {
    candidates: Arc<[String]>,
}

impl Wordlist {
    /// One candidate per line. Lines are trimmed and blank lines dropped;
    /// order and duplicates are kept as written.
    pub fn parse(text: &str) -> Self {
        let candidates: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { candidates: candidates.into() }
    }

    pub async fn load(path: &Path) -> Result<Self, FuzzError> {
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            FuzzError::Wordlist(format!("failed to read {}: {}", path.display(), e))
        })?;
        let wordlist = Self::parse(&text);
        info!(path = %path.display(), candidates = wordlist.len(), "Loaded wordlist");
        Ok(wordlist)
    }

    pub fn shared(&self) -> Arc<[String]> {
        Arc::clone(&self.candidates)
    }
}

impl Deref for Wordlist {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.candidates
    }
}

impl<S: Into<String>> FromIterator<S> for Wordlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let candidates: Vec<String> = iter.into_iter().map(Into::into).collect();
        Self { candidates: candidates.into() }
    }
}
