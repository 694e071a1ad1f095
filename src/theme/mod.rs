//! Theme state and the ambient accent animator.
//!
//! The store owns the published theme mode and accent hue and notifies
//! subscribers through watch channels. The animator is a cancellable
//! background task that drifts the hue once per minute bucket; explicit
//! user actions (mode toggle, accent cycle) take precedence and are
//! persisted best-effort.

pub mod accent;
pub mod prefs;
pub mod store;

pub use accent::{
    hue_for_bucket, minute_bucket, motion_preference, wrap_hue, AccentAnimator, AnimatorHandle,
    Clock, MotionPreference, SystemClock,
};
pub use prefs::{LoadedPreferences, PreferenceStore};
pub use store::{AccentState, ThemeMode, ThemeStore, ACCENT_PALETTE, DEFAULT_HUE};
