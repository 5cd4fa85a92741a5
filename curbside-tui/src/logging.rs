//! File-backed tracing so log lines never draw over the terminal UI.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "curbside.log";

/// All workspace crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["curbside_core", "curbside_provider_maplewood", "curbside_tui"];

/// Append logs to `curbside.log` inside `dir`.
///
/// `RUST_LOG` overrides the default `info` level for workspace crates.
pub(crate) fn init(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    let default_filter = CRATE_TARGETS
        .iter()
        .map(|target| format!("{target}=info"))
        .collect::<Vec<_>>()
        .join(",");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_err| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to install tracing subscriber")
}
