//! Theme state: mode, accent hue, and user-override arbitration.
//!
//! The store is the single owner of the published theme values. The
//! animator writes through [`ThemeStore::publish_auto`]; explicit user
//! actions go through [`ThemeStore::toggle_mode`] and
//! [`ThemeStore::cycle_accent`]. Once the user has overridden the accent,
//! automatic drift is gated off for the rest of the session — the override
//! wins, and only explicit actions are persisted.

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

use super::prefs::PreferenceStore;

/// Fixed accent palette the user cycles through, degrees of hue.
pub const ACCENT_PALETTE: [f64; 6] = [262.0, 205.0, 160.0, 320.0, 28.0, 42.0];

/// Hue used before any drift or override, and whenever motion is reduced.
pub const DEFAULT_HUE: f64 = ACCENT_PALETTE[0];

/// Display theme mode. `Auto` defers to the platform preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Auto,
    Dark,
    Light,
}

impl ThemeMode {
    /// Cycle order for the toggle action: auto → dark → light → auto.
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Auto => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Auto,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Auto => write!(f, "auto"),
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::Light => write!(f, "light"),
        }
    }
}

impl std::str::FromStr for ThemeMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ThemeMode::Auto),
            "dark" => Ok(ThemeMode::Dark),
            "light" => Ok(ThemeMode::Light),
            _ => anyhow::bail!("Unknown theme mode: {}", s),
        }
    }
}

/// The published accent value plus where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentState {
    /// Hue in [0, 360).
    pub hue: f64,

    /// Set once the user has cycled the accent; gates automatic drift.
    pub overridden: bool,
}

/// Owner of theme mode and accent hue, with change notification.
///
/// Readers subscribe through watch channels and observe read-only
/// snapshots; writers are the animator tick and explicit user actions,
/// never concurrent by construction.
pub struct ThemeStore {
    prefs: PreferenceStore,
    mode_tx: watch::Sender<ThemeMode>,
    accent_tx: watch::Sender<AccentState>,
}

impl ThemeStore {
    /// Open the store, restoring persisted preferences.
    ///
    /// A persisted accent restores as a user override and keeps gating
    /// drift; an absent or corrupted value restores the default hue with
    /// drift enabled. `default_mode` applies when no valid mode was
    /// persisted.
    pub async fn open(prefs: PreferenceStore, default_mode: ThemeMode) -> Self {
        let loaded = prefs.load().await;

        let mode = loaded.mode.unwrap_or(default_mode);
        let accent = match loaded.accent {
            Some(hue) => AccentState {
                hue,
                overridden: true,
            },
            None => AccentState {
                hue: DEFAULT_HUE,
                overridden: false,
            },
        };

        let (mode_tx, _) = watch::channel(mode);
        let (accent_tx, _) = watch::channel(accent);

        Self {
            prefs,
            mode_tx,
            accent_tx,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.mode_tx.borrow()
    }

    pub fn accent(&self) -> AccentState {
        *self.accent_tx.borrow()
    }

    /// Watch accent changes. The receiver sees the current value
    /// immediately and each published change afterwards.
    pub fn subscribe_accent(&self) -> watch::Receiver<AccentState> {
        self.accent_tx.subscribe()
    }

    pub fn subscribe_mode(&self) -> watch::Receiver<ThemeMode> {
        self.mode_tx.subscribe()
    }

    /// Explicit user action: advance the theme mode and persist it.
    pub async fn toggle_mode(&self) -> ThemeMode {
        let next = self.mode().next();
        self.mode_tx.send_replace(next);

        self.persist().await;
        next
    }

    /// Explicit user action: advance to the next palette accent. Sets the
    /// override flag, so automatic drift stops for this session.
    pub async fn cycle_accent(&self) -> f64 {
        let current = self.accent();

        // An off-palette hue (e.g. restored from an old session) cycles
        // from the start of the palette, matching index-or-zero semantics.
        let idx = ACCENT_PALETTE
            .iter()
            .position(|&h| h == current.hue)
            .unwrap_or(0);
        let next = ACCENT_PALETTE[(idx + 1) % ACCENT_PALETTE.len()];

        self.accent_tx.send_replace(AccentState {
            hue: next,
            overridden: true,
        });

        self.persist().await;
        next
    }

    /// Animator write path. Ignored once the user has overridden; returns
    /// whether the published value actually changed.
    pub fn publish_auto(&self, hue: f64) -> bool {
        self.accent_tx.send_if_modified(|state| {
            if state.overridden || state.hue == hue {
                return false;
            }
            state.hue = hue;
            true
        })
    }

    async fn persist(&self) {
        let mode = self.mode();
        let accent = self.accent();
        let override_hue = accent.overridden.then_some(accent.hue);

        self.prefs.save(mode, override_hue).await;
    }
}
