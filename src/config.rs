// src/config.rs
//! Client configuration - the server base URL is injected here rather than
//! hard-coded at the call sites.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_SERVER_URL: &str = "http://localhost:5000/jobdataextractor/api/v1.0";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_url: String,
    pub timeout: Duration,
    pub export_dir: PathBuf,
}

impl ClientConfig {
    pub fn new(server_url: &str) -> Self {
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            export_dir: PathBuf::from("."),
        }
    }

    /// Load configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let server_url =
            env::var("JOBXTRACT_SERVER_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());

        let mut config = Self::new(&server_url);

        if let Some(secs) = env::var("JOBXTRACT_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }

        if let Ok(dir) = env::var("JOBXTRACT_EXPORT_DIR") {
            config.export_dir = PathBuf::from(dir);
        }

        config
    }

    pub fn with_server_url(mut self, url: &str) -> Self {
        self.server_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn with_export_dir(mut self, dir: PathBuf) -> Self {
        self.export_dir = dir;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = ClientConfig::new("http://localhost:5000/api/v1.0/");
        assert_eq!(config.server_url, "http://localhost:5000/api/v1.0");

        let config = config.with_server_url("http://localhost:9000/");
        assert_eq!(config.server_url, "http://localhost:9000");
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new(DEFAULT_SERVER_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.export_dir, PathBuf::from("."));
    }
}
