//! Timing tests for the simulated loading delay.
//!
//! Time is paused, so `sleep` auto-advances the clock and timers fire in a
//! deterministic order.

use std::time::Duration;

use projectly::navigation::{LoadingGate, Navigator, Screen, View};

const DELAY: Duration = Duration::from_millis(1500);

#[tokio::test(start_paused = true)]
async fn initial_view_loads_after_delay() {
    let nav = Navigator::new(DELAY, false);
    assert!(nav.is_loading());
    // Low-data mode is off, so the view renders while loading.
    assert_eq!(nav.screen(), Screen::View(View::Feed));

    tokio::time::sleep(Duration::from_millis(1499)).await;
    assert!(nav.is_loading());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(!nav.is_loading());
}

#[tokio::test(start_paused = true)]
async fn low_data_mode_shows_skeleton_until_loaded() {
    let nav = Navigator::new(DELAY, true);
    assert_eq!(nav.screen(), Screen::Skeleton);

    tokio::time::sleep(DELAY + Duration::from_millis(1)).await;
    assert_eq!(nav.screen(), Screen::View(View::Feed));
}

#[tokio::test(start_paused = true)]
async fn changing_view_cancels_pending_timer() {
    let mut nav = Navigator::new(DELAY, true);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(nav.select(View::Posts));
    assert!(nav.is_loading());

    // The first timer would have fired at 1500ms.
    tokio::time::sleep(Duration::from_millis(600)).await;
    assert!(nav.is_loading(), "cancelled timer must not clear the gate");
    assert_eq!(nav.screen(), Screen::Skeleton);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(!nav.is_loading());
    assert_eq!(nav.screen(), Screen::View(View::Posts));
}

#[tokio::test(start_paused = true)]
async fn reselecting_current_view_does_not_restart_timer() {
    let mut nav = Navigator::new(DELAY, false);

    tokio::time::sleep(Duration::from_millis(1000)).await;
    assert!(!nav.select(View::Feed));

    tokio::time::sleep(Duration::from_millis(501)).await;
    assert!(!nav.is_loading());
}

#[tokio::test(start_paused = true)]
async fn rearming_gate_supersedes_older_generation() {
    let mut gate = LoadingGate::new(DELAY);
    gate.arm();
    tokio::time::sleep(Duration::from_millis(1400)).await;
    gate.arm();

    tokio::time::sleep(Duration::from_millis(200)).await;
    assert!(gate.is_loading());

    tokio::time::sleep(Duration::from_millis(1400)).await;
    assert!(!gate.is_loading());
}

#[test]
fn unarmed_gate_is_not_loading() {
    let gate = LoadingGate::new(DELAY);
    assert!(!gate.is_loading());
}
