//! Animator Integration Tests
//!
//! Minute-bucketed publication, reduced motion, override gating, and
//! cancellation, driven by a synthetic clock.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use folio::theme::{
    hue_for_bucket, AccentAnimator, Clock, MotionPreference, PreferenceStore, ThemeMode,
    ThemeStore, ACCENT_PALETTE, DEFAULT_HUE,
};

/// Clock the tests advance by hand. Stores milliseconds since epoch.
struct FakeClock {
    millis: AtomicU64,
}

impl FakeClock {
    fn at_minutes(minutes: f64) -> Arc<Self> {
        Arc::new(Self {
            millis: AtomicU64::new((minutes * 60_000.0) as u64),
        })
    }

    fn set_minutes(&self, minutes: f64) {
        self.millis.store((minutes * 60_000.0) as u64, Ordering::SeqCst);
    }
}

impl Clock for FakeClock {
    fn minutes_since_epoch(&self) -> f64 {
        self.millis.load(Ordering::SeqCst) as f64 / 60_000.0
    }
}

async fn fresh_store(temp: &TempDir) -> Arc<ThemeStore> {
    let prefs = PreferenceStore::new(temp.path().join("preferences.json"));
    Arc::new(ThemeStore::open(prefs, ThemeMode::Auto).await)
}

const TICK: Duration = Duration::from_millis(10);

#[tokio::test]
async fn test_publishes_at_most_once_per_bucket() {
    let temp = TempDir::new().unwrap();
    let store = fresh_store(&temp).await;
    let mut accents = store.subscribe_accent();

    let clock = FakeClock::at_minutes(100.0);
    let handle = AccentAnimator::new(clock.clone(), TICK)
        .spawn(store.clone(), MotionPreference::NoPreference);

    // First tick publishes the hue for bucket 100.
    accents.changed().await.unwrap();
    assert_eq!(accents.borrow_and_update().hue, hue_for_bucket(100));

    // Later timestamps within the same minute are no-ops.
    clock.set_minutes(100.9);
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(!accents.has_changed().unwrap());

    // The next bucket publishes exactly one new value.
    clock.set_minutes(101.1);
    accents.changed().await.unwrap();
    assert_eq!(accents.borrow_and_update().hue, hue_for_bucket(101));

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn test_published_hue_is_always_in_range() {
    let temp = TempDir::new().unwrap();
    let store = fresh_store(&temp).await;
    let mut accents = store.subscribe_accent();

    let clock = FakeClock::at_minutes(1.0);
    let handle = AccentAnimator::new(clock.clone(), TICK)
        .spawn(store.clone(), MotionPreference::NoPreference);

    for minutes in [1.0, 2.0, 77.5, 1_000_000.25] {
        clock.set_minutes(minutes);
        accents.changed().await.unwrap();

        let hue = accents.borrow_and_update().hue;
        assert!((0.0..360.0).contains(&hue), "minute {} -> {}", minutes, hue);
    }

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn test_reduced_motion_pins_the_default_hue() {
    let temp = TempDir::new().unwrap();
    let store = fresh_store(&temp).await;
    let mut accents = store.subscribe_accent();

    let clock = FakeClock::at_minutes(100.0);
    let handle =
        AccentAnimator::new(clock.clone(), TICK).spawn(store.clone(), MotionPreference::Reduce);

    // Time passing never moves the hue off the pinned default.
    for minutes in [101.0, 150.0, 10_000.0] {
        clock.set_minutes(minutes);
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert!(!accents.has_changed().unwrap());
        assert_eq!(store.accent().hue, DEFAULT_HUE);
    }

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn test_user_override_gates_further_drift() {
    let temp = TempDir::new().unwrap();
    let store = fresh_store(&temp).await;
    let mut accents = store.subscribe_accent();

    let clock = FakeClock::at_minutes(100.0);
    let handle = AccentAnimator::new(clock.clone(), TICK)
        .spawn(store.clone(), MotionPreference::NoPreference);

    accents.changed().await.unwrap();
    accents.borrow_and_update();

    let chosen = store.cycle_accent().await;
    assert_eq!(chosen, ACCENT_PALETTE[1]);
    accents.changed().await.unwrap();
    accents.borrow_and_update();

    // Drift keeps ticking but can no longer publish.
    for minutes in [101.0, 102.0, 103.0] {
        clock.set_minutes(minutes);
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    assert!(!accents.has_changed().unwrap());
    assert_eq!(store.accent().hue, chosen);

    handle.stop().await.unwrap();
}

#[tokio::test]
async fn test_stop_halts_publication() {
    let temp = TempDir::new().unwrap();
    let store = fresh_store(&temp).await;
    let mut accents = store.subscribe_accent();

    let clock = FakeClock::at_minutes(100.0);
    let handle = AccentAnimator::new(clock.clone(), TICK)
        .spawn(store.clone(), MotionPreference::NoPreference);

    accents.changed().await.unwrap();
    accents.borrow_and_update();

    // stop() joins the task; afterwards new buckets go unpublished.
    handle.stop().await.unwrap();

    clock.set_minutes(200.0);
    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(!accents.has_changed().unwrap());
}
