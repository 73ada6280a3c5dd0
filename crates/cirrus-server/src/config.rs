//! Server configuration.
//!
//! Loading flow:
//! 1. Start with compiled [`ServerConfig::default()`]
//! 2. If a config file is given and exists, JSON values override defaults
//!    per-field (missing fields keep their defaults)
//! 3. Apply environment variable overrides (highest priority)

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for the function server.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host to bind (default `"127.0.0.1"`).
    pub host: String,
    /// Port to bind (default `8080`; `0` for auto-assign).
    pub port: u16,
    /// Max request body size in bytes.
    pub max_body_bytes: usize,
    /// Wall-clock budget per invocation in seconds.
    pub invocation_timeout_secs: u64,
    /// How long shutdown waits for in-flight invocations to drain.
    pub drain_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            max_body_bytes: 10 * 1024 * 1024, // 10 MB
            invocation_timeout_secs: 60,
            drain_timeout_secs: 10,
        }
    }
}

/// Errors loading or parsing a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the config file from disk.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to parse JSON in the config file.
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl ServerConfig {
    /// Load config from a file with env var overrides.
    ///
    /// If the file does not exist, returns defaults. If it contains invalid
    /// JSON, returns an error.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            debug!(?path, "loading config from file");
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)?
        } else {
            debug!(?path, "config file not found, using defaults");
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides.
    ///
    /// Invalid values are logged and ignored (fall back to file/default).
    fn apply_env_overrides(&mut self) {
        if let Some(v) = read_env_string("CIRRUS_HOST") {
            self.host = v;
        }
        if let Some(v) = read_env_u16("CIRRUS_PORT") {
            self.port = v;
        }
    }
}

fn read_env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn read_env_u16(name: &str) -> Option<u16> {
    let val = std::env::var(name).ok()?;
    let result = val.parse().ok();
    if result.is_none() {
        tracing::warn!(key = name, value = %val, "invalid u16 env var, ignoring");
    }
    result
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
