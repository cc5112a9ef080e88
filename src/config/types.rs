use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_WORDLIST: &str = "./wordlist.txt";
pub const DEFAULT_REPORT: &str = "./fuzzing_results.txt";

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct FuzzConfig {
    pub server: Option<ServerConfig>,
    pub wordlist: Option<WordlistConfig>,
    pub report: Option<ReportConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct WordlistConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct ReportConfig {
    pub path: Option<String>,
    /// Where to list locators that served content. Not written when unset.
    pub found_path: Option<String>,
}

impl FuzzConfig {
    pub fn host(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.host.as_deref())
            .unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.server.as_ref().and_then(|s| s.port).unwrap_or(DEFAULT_PORT)
    }

    pub fn wordlist_path(&self) -> &str {
        self.wordlist
            .as_ref()
            .and_then(|w| w.path.as_deref())
            .unwrap_or(DEFAULT_WORDLIST)
    }

    pub fn report_path(&self) -> &str {
        self.report
            .as_ref()
            .and_then(|r| r.path.as_deref())
            .unwrap_or(DEFAULT_REPORT)
    }

    pub fn found_path(&self) -> Option<&str> {
        self.report.as_ref().and_then(|r| r.found_path.as_deref())
    }
}
