//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup. A `.env`
//! file in the working directory is honoured through `dotenvy`.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: "info,csgo_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `DATA_DIR`: Root of the per-language documents (default: "public/api")
//! - `DATA_CACHE`: "snapshot" to load each document once, "none" to read it
//!   on every request (default: "snapshot")
//! - `PRELOAD_DATA`: Read every document of every language before serving
//!   (default: true)

use crate::infrastructure::cache::snapshot_cache::CachePolicy;
use std::path::PathBuf;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Directory holding `<language>/<kind>.json`
    pub data_dir: PathBuf,

    /// Refresh policy for loaded documents
    pub cache_policy: CachePolicy,

    /// Warm (and validate) all documents at startup
    pub preload_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            data_dir: PathBuf::from("public/api"),
            cache_policy: CachePolicy::Snapshot,
            preload_data: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            host: env_or("HOST", defaults.host)?,
            port: env_or("PORT", defaults.port)?,
            data_dir: env_or("DATA_DIR", defaults.data_dir)?,
            cache_policy: env_or("DATA_CACHE", defaults.cache_policy)?,
            preload_data: env_or("PRELOAD_DATA", defaults.preload_data)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load an environment variable with a default value.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
