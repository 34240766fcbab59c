use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated waitlist latency in milliseconds
    pub join_latency_ms: u64,
    /// Event poll interval in milliseconds
    pub tick_rate_ms: u64,
    /// Start with an empty form instead of the sample project
    pub start_blank: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            join_latency_ms: 1500,
            tick_rate_ms: 100,
            start_blank: false,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".weaver"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("weaver.log"))
    }

    /// Load from `~/.weaver/config.json`, falling back to defaults
    pub fn load() -> Config {
        Self::config_path()
            .and_then(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load from an explicit path; `None` if missing or unparsable
    pub fn load_from(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }

        let contents = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring invalid config file");
                None
            }
        }
    }

    pub fn join_latency(&self) -> Duration {
        Duration::from_millis(self.join_latency_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        // Zero would turn the event loop into a busy spin
        Duration::from_millis(self.tick_rate_ms.max(10))
    }
}
