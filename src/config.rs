use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// Startup configuration. Every field defaults to the tool's built-in
// behaviour, so a config file only needs the keys it changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub report_dir: PathBuf,
    pub system_report: String,
    pub network_report: String,
    pub probe_host: String,
    pub ping_count: u32,
    pub http_url: String,
    pub home_root: PathBuf,
    pub default_shell: String,
    pub default_password: String,
    // Home of the invoking user, `$HOME` when unset
    pub home_dir: Option<PathBuf>,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_dir: PathBuf::from("."),
            system_report: "system_report.txt".to_string(),
            network_report: "network_report.txt".to_string(),
            probe_host: "google.com".to_string(),
            ping_count: 3,
            http_url: "https://example.com".to_string(),
            home_root: PathBuf::from("/home"),
            default_shell: "/bin/bash".to_string(),
            default_password: "password123".to_string(),
            home_dir: None,
            color: true,
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if it contains invalid JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy();
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config from {path_str}"))?;

        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON from {path_str}"))
    }

    /// Load from `path` when given, otherwise use the defaults
    ///
    /// # Errors
    ///
    /// Returns an error if a given config file cannot be loaded.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    #[must_use]
    pub fn system_report_path(&self) -> PathBuf {
        self.report_dir.join(&self.system_report)
    }

    #[must_use]
    pub fn network_report_path(&self) -> PathBuf {
        self.report_dir.join(&self.network_report)
    }

    #[must_use]
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir
            .clone()
            .or_else(|| env::var_os("HOME").map(PathBuf::from))
    }
}
