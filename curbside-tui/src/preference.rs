//! Last chosen zone, remembered across sessions for a limited time.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, TimeDelta, Utc};
use curbside_core::Zone;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const PREFERENCE_FILE: &str = "zone.json";

/// How long a saved zone stays valid.
pub(crate) const PREFERENCE_TTL_DAYS: i64 = 365;

#[derive(Debug, Serialize, Deserialize)]
struct SavedZone {
    zone: Zone,
    saved_at: DateTime<Utc>,
}

/// JSON file holding the last chosen zone.
#[derive(Debug, Clone)]
pub(crate) struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub(crate) fn in_dir(dir: &Path) -> Self {
        Self {
            path: dir.join(PREFERENCE_FILE),
        }
    }

    /// Saved zone if present, readable, and younger than the TTL; otherwise the first zone.
    pub(crate) fn load(&self, now: DateTime<Utc>) -> Zone {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return Zone::default();
        };

        match serde_json::from_str::<SavedZone>(&raw) {
            Ok(saved) if now - saved.saved_at <= TimeDelta::days(PREFERENCE_TTL_DAYS) => {
                debug!(zone = %saved.zone, "restored saved zone");
                saved.zone
            }
            Ok(saved) => {
                debug!(saved_at = %saved.saved_at, "saved zone expired");
                Zone::default()
            }
            Err(err) => {
                warn!(%err, path = %self.path.display(), "ignoring unreadable zone preference");
                Zone::default()
            }
        }
    }

    pub(crate) fn save(&self, zone: Zone, now: DateTime<Utc>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string(&SavedZone {
            zone,
            saved_at: now,
        })?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))
    }
}
