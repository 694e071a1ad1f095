//! Best-effort preference persistence.
//!
//! Two string keys — `theme` and `accent-h` — stored as a small JSON
//! document. Persistence is a cache, not a source of truth: a missing
//! file, blocked storage, or corrupted value falls back to in-memory
//! defaults for the session. Write failures are logged and ignored.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::fs;

use super::store::ThemeMode;

/// Errors from the underlying storage. Never escape this module: callers
/// see defaults instead.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// On-disk shape. Both values are stored as strings and re-validated on
/// every load.
#[derive(Debug, Default, Serialize, Deserialize)]
struct PreferenceFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    theme: Option<String>,

    #[serde(default, rename = "accent-h", skip_serializing_if = "Option::is_none")]
    accent_h: Option<String>,
}

/// What a load yields after validation. `None` means absent or corrupted;
/// the caller supplies the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadedPreferences {
    pub mode: Option<ThemeMode>,

    /// User accent override, degrees. Present only when the stored value
    /// parses as a finite number.
    pub accent: Option<f64>,
}

/// File-backed preference store with fail-soft reads and writes.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store in the configured location ($FOLIO_HOME/preferences.json).
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(crate::config::preferences_path()?))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load preferences. Never fails; anything unreadable or unparseable
    /// degrades to defaults.
    pub async fn load(&self) -> LoadedPreferences {
        let file = match self.try_load().await {
            Ok(file) => file,
            Err(e) => {
                tracing::debug!("Preferences unavailable ({}), using defaults", e);
                return LoadedPreferences::default();
            }
        };

        LoadedPreferences {
            mode: file.theme.as_deref().and_then(|s| s.parse().ok()),
            accent: file
                .accent_h
                .as_deref()
                .and_then(|s| s.trim().parse::<f64>().ok())
                .filter(|h| h.is_finite()),
        }
    }

    /// Persist the current theme mode and accent override. Best-effort:
    /// failures are logged at warn level and swallowed.
    pub async fn save(&self, mode: ThemeMode, accent: Option<f64>) {
        if let Err(e) = self.try_save(mode, accent).await {
            tracing::warn!("Failed to persist preferences: {}", e);
        }
    }

    async fn try_load(&self) -> Result<PreferenceFile, PreferenceError> {
        let content = fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }

    async fn try_save(&self, mode: ThemeMode, accent: Option<f64>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let file = PreferenceFile {
            theme: Some(mode.to_string()),
            accent_h: accent.map(|h| h.to_string()),
        };

        let content = serde_json::to_string_pretty(&file)?;
        fs::write(&self.path, content).await?;

        Ok(())
    }
}
