//! Query thresholds stored in `fsreplay.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fsreplay.toml";

/// Query configuration (TOML).
///
/// Missing fields fall back to the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct QueryConfig {
    /// Directories at most this large count toward the bounded sum.
    pub limit: u64,

    /// Total disk capacity in bytes.
    pub capacity: u64,

    /// Free space the disk must end up with, in bytes.
    pub required: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            limit: 100_000,
            capacity: 70_000_000,
            required: 30_000_000,
        }
    }
}

/// Command-line overrides applied on top of the file config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOverrides {
    pub limit: Option<u64>,
    pub capacity: Option<u64>,
    pub required: Option<u64>,
}

impl QueryConfig {
    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(anyhow!("limit must be > 0"));
        }
        if self.capacity == 0 {
            return Err(anyhow!("capacity must be > 0"));
        }
        Ok(())
    }

    /// Apply overrides, then validate the merged result.
    pub fn with_overrides(mut self, overrides: &QueryOverrides) -> Result<Self> {
        if let Some(limit) = overrides.limit {
            self.limit = limit;
        }
        if let Some(capacity) = overrides.capacity {
            self.capacity = capacity;
        }
        if let Some(required) = overrides.required {
            self.required = required;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `QueryConfig::default()`.
pub fn load_config(path: &Path) -> Result<QueryConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = QueryConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: QueryConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    debug!(path = %path.display(), ?cfg, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &QueryConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
