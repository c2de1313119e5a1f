//! Academy configuration stored in `academy.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "academy.toml";

/// Academy configuration (TOML).
///
/// Every section is optional; missing fields fall back to the lenient
/// behaviour of the console examples.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AcademyConfig {
    pub todo: TodoConfig,
    pub contacts: ContactsConfig,
    pub guess: GuessConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TodoConfig {
    /// Accept tasks whose trimmed description is empty.
    pub allow_empty: bool,
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self { allow_empty: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactsConfig {
    /// Accept contacts whose trimmed name is empty.
    pub allow_empty_name: bool,
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            allow_empty_name: true,
        }
    }
}

/// Inclusive range the guessing game draws its target from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GuessConfig {
    pub low: i64,
    pub high: i64,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self { low: 1, high: 100 }
    }
}

impl AcademyConfig {
    pub fn validate(&self) -> Result<()> {
        if self.guess.low > self.guess.high {
            return Err(anyhow!(
                "guess.low ({}) must be <= guess.high ({})",
                self.guess.low,
                self.guess.high
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `AcademyConfig::default()`.
pub fn load_config(path: &Path) -> Result<AcademyConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = AcademyConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: AcademyConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &AcademyConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
