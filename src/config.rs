//! Command-line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/recommend";

/// Which recommendation provider answers searches
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProviderKind {
    /// POST the query to the recommendation service
    Remote,
    /// Rank the query against the built-in sample catalog
    Catalog,
}

/// Find songs by lyric fragments, titles, artists or genres
#[derive(Clone, Debug, Parser)]
#[command(name = "lyricfinder", version)]
pub struct Config {
    /// Recommendation provider to query
    #[arg(long, value_enum, env = "LYRICFINDER_PROVIDER", default_value = "remote")]
    pub provider: ProviderKind,

    /// URL of the recommendation endpoint
    #[arg(long, env = "LYRICFINDER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Abort remote requests after this many seconds (no timeout when unset)
    #[arg(long, env = "LYRICFINDER_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Simulated latency of the catalog provider in milliseconds
    #[arg(long, env = "LYRICFINDER_CATALOG_DELAY_MS", default_value_t = 1500)]
    pub catalog_delay_ms: u64,

    /// Directory for the rotating log files
    #[arg(long, env = "LYRICFINDER_LOG_DIR", default_value = ".logs")]
    pub log_dir: PathBuf,
}

impl Config {
    /// Reject settings that would only fail later, once the terminal is taken over
    pub fn validate(&self) -> Result<()> {
        if self.provider == ProviderKind::Remote {
            let url = reqwest::Url::parse(&self.endpoint)?;
            if !matches!(url.scheme(), "http" | "https") {
                bail!("endpoint must be an http(s) URL, got scheme '{}'", url.scheme());
            }
        }
        if self.timeout_secs == Some(0) {
            bail!("timeout must be at least one second");
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn catalog_delay(&self) -> Duration {
        Duration::from_millis(self.catalog_delay_ms)
    }
}
