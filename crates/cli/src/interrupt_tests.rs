#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

use crate::time::FakeClock;

#[test]
fn test_new_flag_is_not_raised() {
    let flag = InterruptFlag::new();
    assert!(!flag.is_raised());
}

#[test]
fn test_raise_sets_flag() {
    let flag = InterruptFlag::new();
    flag.raise();
    assert!(flag.is_raised());
}

#[test]
fn test_clones_share_state() {
    let flag = InterruptFlag::new();
    let other = flag.clone();
    flag.raise();
    assert!(other.is_raised());
}

#[tokio::test]
async fn test_sleep_completes_when_not_raised() {
    let flag = InterruptFlag::new();
    let clock = FakeClock::new(0);

    let interrupted = flag
        .sleep_unless_raised(&clock, Duration::from_secs(10))
        .await;

    assert!(!interrupted);
    assert_eq!(clock.now_millis(), 10_000);
}

#[tokio::test]
async fn test_sleep_returns_immediately_when_already_raised() {
    let flag = InterruptFlag::new();
    flag.raise();
    let clock = FakeClock::new(0);

    let interrupted = flag
        .sleep_unless_raised(&clock, Duration::from_secs(10))
        .await;

    assert!(interrupted);
    // Flag was checked before the first slice; no time was consumed.
    assert_eq!(clock.now_millis(), 0);
}

#[tokio::test]
async fn test_sleep_handles_sub_second_remainder() {
    let flag = InterruptFlag::new();
    let clock = FakeClock::new(0);

    let interrupted = flag
        .sleep_unless_raised(&clock, Duration::from_millis(2500))
        .await;

    assert!(!interrupted);
    assert_eq!(clock.now_millis(), 2500);
}
