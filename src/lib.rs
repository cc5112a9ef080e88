//! Content provider fuzzing.
//!
//! Two halves that share no state: an HTTP-triggered fuzzer that probes
//! `content://<authority>/<candidate>` for every wordlist entry and writes a
//! flat report, and a query hook that runs inside the target process and
//! logs every table a provider hands back.

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod hook;
pub mod probe;
pub mod reporting;
pub mod wordlist;
