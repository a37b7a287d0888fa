//! Configuration management for the BioSheet CLI
//!
//! Values come from the environment (after an optional `.env` is loaded by
//! `main`) and can be overridden by command-line flags.

use crate::error::{CliError, Result};
use biosheet_ingest::fetcher::DEFAULT_REQUEST_DELAY;
use biosheet_ingest::HttpConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

// ============================================================================
// CLI Configuration Constants
// ============================================================================

/// Default directory for exported files
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory receiving CSV, XLSX and report files
    pub output_dir: PathBuf,

    /// Pause after each entity name
    pub request_delay: Duration,

    /// Endpoints, timeout and API key for the database clients
    pub http: HttpConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            request_delay: DEFAULT_REQUEST_DELAY,
            http: HttpConfig::default(),
        }
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_u64(key: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::config(format!("{} must be a whole number, got '{}'", key, value)))
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from environment variables.
    ///
    /// - `BIOSHEET_OUTPUT_DIR`
    /// - `BIOSHEET_REQUEST_DELAY_MS`
    /// - `BIOSHEET_HTTP_TIMEOUT_SECS`
    /// - `NCBI_API_KEY`
    /// - `BIOSHEET_UNIPROT_URL`, `BIOSHEET_PUBMED_URL`,
    ///   `BIOSHEET_REACTOME_URL`, `BIOSHEET_KEGG_URL`
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Some(dir) = env_var("BIOSHEET_OUTPUT_DIR") {
            config.output_dir = PathBuf::from(dir);
        }

        if let Some(delay) = env_var("BIOSHEET_REQUEST_DELAY_MS") {
            config.request_delay =
                Duration::from_millis(parse_u64("BIOSHEET_REQUEST_DELAY_MS", &delay)?);
        }

        if let Some(timeout) = env_var("BIOSHEET_HTTP_TIMEOUT_SECS") {
            let secs = parse_u64("BIOSHEET_HTTP_TIMEOUT_SECS", &timeout)?;
            if secs == 0 {
                return Err(CliError::config("BIOSHEET_HTTP_TIMEOUT_SECS must be at least 1"));
            }
            config.http.timeout = Duration::from_secs(secs);
        }

        config.http.ncbi_api_key = env_var("NCBI_API_KEY");

        if let Some(url) = env_var("BIOSHEET_UNIPROT_URL") {
            config.http.uniprot_url = url;
        }
        if let Some(url) = env_var("BIOSHEET_PUBMED_URL") {
            config.http.pubmed_url = url;
        }
        if let Some(url) = env_var("BIOSHEET_REACTOME_URL") {
            config.http.reactome_url = url;
        }
        if let Some(url) = env_var("BIOSHEET_KEGG_URL") {
            config.http.kegg_url = url;
        }

        Ok(config)
    }

    /// Get the output directory
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Set the output directory
    pub fn set_output_dir(&mut self, dir: PathBuf) {
        self.output_dir = dir;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "BIOSHEET_OUTPUT_DIR",
        "BIOSHEET_REQUEST_DELAY_MS",
        "BIOSHEET_HTTP_TIMEOUT_SECS",
        "NCBI_API_KEY",
        "BIOSHEET_UNIPROT_URL",
        "BIOSHEET_PUBMED_URL",
        "BIOSHEET_REACTOME_URL",
        "BIOSHEET_KEGG_URL",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.output_dir(), Path::new("data"));
        assert_eq!(config.request_delay, Duration::from_millis(1000));
        assert_eq!(config.http.timeout, Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_config_from_env() {
        clear_env();
        std::env::set_var("BIOSHEET_OUTPUT_DIR", "/tmp/biosheet-out");
        std::env::set_var("BIOSHEET_REQUEST_DELAY_MS", "0");
        std::env::set_var("BIOSHEET_HTTP_TIMEOUT_SECS", "5");
        std::env::set_var("NCBI_API_KEY", "abc123");
        std::env::set_var("BIOSHEET_REACTOME_URL", "http://127.0.0.1:9999");

        let config = Config::from_env().unwrap();
        assert_eq!(config.output_dir(), Path::new("/tmp/biosheet-out"));
        assert!(config.request_delay.is_zero());
        assert_eq!(config.http.timeout, Duration::from_secs(5));
        assert_eq!(config.http.ncbi_api_key.as_deref(), Some("abc123"));
        assert_eq!(config.http.reactome_url, "http://127.0.0.1:9999");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_rejects_bad_delay() {
        clear_env();
        std::env::set_var("BIOSHEET_REQUEST_DELAY_MS", "soon");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("BIOSHEET_REQUEST_DELAY_MS"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_api_key_is_ignored() {
        clear_env();
        std::env::set_var("NCBI_API_KEY", "  ");

        assert!(Config::from_env().unwrap().http.ncbi_api_key.is_none());

        clear_env();
    }
}
