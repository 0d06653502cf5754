use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Data directory (blob database) |
/// | API_URL | http://localhost:8000 | Remote order service |
/// | KITCHEN_POLL_MS | 5000 | Kitchen board refresh period |
/// | OCCUPANCY_POLL_MS | 1000 | Table occupancy refresh period |
/// | REQUEST_TIMEOUT_SECS | 30 | Remote request timeout |
/// | LOG_LEVEL | info | Log level |
/// | LOG_DIR | (unset) | Directory for daily log files |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/var/lib/pupas API_URL=http://10.0.0.5:8000 pupas-kitchen
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub api_url: String,
    pub kitchen_poll_ms: u64,
    pub occupancy_poll_ms: u64,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let number = |key: &str, default: u64| get(key).and_then(|v| v.parse().ok()).unwrap_or(default);

        Self {
            work_dir: get("WORK_DIR").unwrap_or(defaults.work_dir),
            api_url: get("API_URL").unwrap_or(defaults.api_url),
            kitchen_poll_ms: number("KITCHEN_POLL_MS", defaults.kitchen_poll_ms),
            occupancy_poll_ms: number("OCCUPANCY_POLL_MS", defaults.occupancy_poll_ms),
            request_timeout_secs: number("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            log_level: get("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_dir: get("LOG_DIR").filter(|d| !d.trim().is_empty()),
        }
    }

    /// Path of the blob database inside the work dir
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("pupas.redb")
    }

    pub fn kitchen_poll_interval(&self) -> Duration {
        Duration::from_millis(self.kitchen_poll_ms.max(1))
    }

    pub fn occupancy_poll_interval(&self) -> Duration {
        Duration::from_millis(self.occupancy_poll_ms.max(1))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "./data".into(),
            api_url: "http://localhost:8000".into(),
            kitchen_poll_ms: 5000,
            occupancy_poll_ms: 1000,
            request_timeout_secs: 30,
            log_level: "info".into(),
            log_dir: None,
        }
    }
}
