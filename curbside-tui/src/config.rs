//! TOML configuration with a default for every field.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use curbside_core::SeasonConfig;
use curbside_core::export::DEFAULT_FILE_PREFIX;
use curbside_core::holiday::{ExceptionEntry, ExceptionTable};
use curbside_core::reminder::{ReminderOptions, ReminderTiming, parse_time};
use serde::Deserialize;

const CONFIG_ENV: &str = "CURBSIDE_CONFIG";
const CONFIG_FILE: &str = "curbside.toml";
pub(crate) const APP_DIR: &str = "curbside";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct CurbsideConfig {
    /// Year and first-week material.
    #[serde(default)]
    pub season: SeasonConfig,

    /// Reminder timing defaults.
    #[serde(default)]
    pub reminders: RemindersToml,

    /// Export destination and naming.
    #[serde(default)]
    pub export: ExportToml,

    /// Ad hoc pickup disruptions.
    #[serde(default)]
    pub exceptions: Vec<ExceptionEntry>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RemindersToml {
    #[serde(default)]
    pub timing: ReminderTiming,
    /// `HH:MM`; falls back to the timing's suggested time.
    #[serde(default)]
    pub time: Option<String>,
}

impl RemindersToml {
    pub(crate) fn options(&self) -> Result<ReminderOptions> {
        let mut options = ReminderOptions::with_timing(self.timing);
        if let Some(raw) = &self.time {
            options.time = parse_time(raw).context("invalid [reminders] time")?;
        }
        Ok(options)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ExportToml {
    /// Directory exports are written to; defaults to the download directory.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

impl Default for ExportToml {
    fn default() -> Self {
        Self {
            directory: None,
            prefix: default_prefix(),
        }
    }
}

impl ExportToml {
    pub(crate) fn directory(&self) -> PathBuf {
        self.directory
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn default_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_owned()
}

impl CurbsideConfig {
    pub(crate) fn exception_table(&self) -> ExceptionTable {
        ExceptionTable::new(self.exceptions.iter().cloned())
    }
}

/// Config path from `CURBSIDE_CONFIG`, else the user config directory.
pub(crate) fn config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE)))
}

/// Load the config file, using defaults when it does not exist.
pub(crate) fn load(path: Option<&Path>) -> Result<CurbsideConfig> {
    let Some(path) = path.filter(|candidate| candidate.exists()) else {
        return Ok(CurbsideConfig::default());
    };

    let toml_str = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    toml::from_str(&toml_str).with_context(|| format!("failed to parse config {}", path.display()))
}
