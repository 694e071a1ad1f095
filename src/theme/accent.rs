//! Ambient accent drift.
//!
//! A background task nudges the accent hue along a slow periodic curve,
//! bucketed by whole minutes so the published value changes at most once
//! per minute. Reduced-motion sessions pin the hue instead. The curve sums
//! two sinusoids of different periods (full cycle roughly 36 hours) plus a
//! small per-bucket offset, wrapped into [0, 360).

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use tokio::sync::mpsc;

use super::store::{ThemeStore, DEFAULT_HUE};

/// Base hue the drift oscillates around.
pub const BASE_HUE: f64 = 210.0;

/// Wrap a hue into [0, 360), for any input including negatives.
pub fn wrap_hue(h: f64) -> f64 {
    let x = h % 360.0;
    if x < 0.0 {
        x + 360.0
    } else {
        x
    }
}

/// Whole-minute bucket for a timestamp in fractional minutes.
pub fn minute_bucket(minutes: f64) -> i64 {
    minutes.floor() as i64
}

/// Hue for a minute bucket. Pure: every tick within one bucket produces
/// the identical value.
pub fn hue_for_bucket(bucket: i64) -> f64 {
    let t = bucket as f64 / 6.0;
    let drift = (t.sin() * 48.0 + (t * 0.7).cos() * 22.0) * 0.5;
    let offset = bucket.rem_euclid(17) as f64 * 0.6;

    wrap_hue(BASE_HUE + drift + offset)
}

/// Time source for the animator. Injected so tests drive synthetic
/// minutes instead of the wall clock.
pub trait Clock: Send + Sync {
    /// Fractional minutes since the Unix epoch.
    fn minutes_since_epoch(&self) -> f64;
}

/// Wall-clock time via chrono.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn minutes_since_epoch(&self) -> f64 {
        Utc::now().timestamp_millis() as f64 / 60_000.0
    }
}

/// Reduced-motion preference, queried once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPreference {
    NoPreference,
    Reduce,
}

/// Query the reduced-motion preference: `FOLIO_REDUCED_MOTION` env first,
/// then the config file. An unavailable source means motion stays enabled.
pub fn motion_preference() -> MotionPreference {
    if let Ok(v) = std::env::var("FOLIO_REDUCED_MOTION") {
        return match v.trim().to_lowercase().as_str() {
            "1" | "true" | "reduce" => MotionPreference::Reduce,
            _ => MotionPreference::NoPreference,
        };
    }

    match crate::config::config() {
        Ok(cfg) if cfg.animator.reduced_motion == Some(true) => MotionPreference::Reduce,
        _ => MotionPreference::NoPreference,
    }
}

/// The drift animator. Spawns as a background task writing through the
/// store; stop it via the returned handle when the owning view goes away.
pub struct AccentAnimator {
    clock: Arc<dyn Clock>,
    tick: Duration,
}

impl AccentAnimator {
    pub fn new(clock: Arc<dyn Clock>, tick: Duration) -> Self {
        Self { clock, tick }
    }

    /// Animator on the wall clock.
    pub fn system(tick: Duration) -> Self {
        Self::new(Arc::new(SystemClock), tick)
    }

    /// Start the animation task.
    ///
    /// With motion reduced the task pins the default hue once and then
    /// idles until stopped; there is no way back to the running state
    /// within a session. Otherwise each tick recomputes the minute bucket
    /// and publishes a new hue only when the bucket has advanced.
    pub fn spawn(self, store: Arc<ThemeStore>, motion: MotionPreference) -> AnimatorHandle {
        let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);

        let task = tokio::spawn(async move {
            match motion {
                MotionPreference::Reduce => {
                    tracing::debug!("Reduced motion requested, pinning accent at {}", DEFAULT_HUE);
                    store.publish_auto(DEFAULT_HUE);
                    let _ = stop_rx.recv().await;
                }
                MotionPreference::NoPreference => {
                    run_drift(self.clock, self.tick, store, &mut stop_rx).await;
                }
            }
        });

        AnimatorHandle { stop_tx, task }
    }
}

async fn run_drift(
    clock: Arc<dyn Clock>,
    tick: Duration,
    store: Arc<ThemeStore>,
    stop_rx: &mut mpsc::Receiver<()>,
) {
    let mut interval = tokio::time::interval(tick);
    let mut last_bucket: Option<i64> = None;

    loop {
        tokio::select! {
            _ = stop_rx.recv() => {
                tracing::debug!("Accent animator stopping");
                break;
            }
            _ = interval.tick() => {
                let bucket = minute_bucket(clock.minutes_since_epoch());

                // At most one publication per minute bucket.
                if last_bucket == Some(bucket) {
                    continue;
                }
                last_bucket = Some(bucket);

                let hue = hue_for_bucket(bucket);
                if store.publish_auto(hue) {
                    tracing::debug!("Accent drift: bucket {} -> hue {:.2}", bucket, hue);
                }
            }
        }
    }
}

/// Handle to stop the animator and release its timer.
pub struct AnimatorHandle {
    stop_tx: mpsc::Sender<()>,
    task: tokio::task::JoinHandle<()>,
}

impl AnimatorHandle {
    /// Stop the animator and wait for the task to finish.
    pub async fn stop(self) -> Result<()> {
        let _ = self.stop_tx.send(()).await;
        self.task.await?;
        Ok(())
    }
}
