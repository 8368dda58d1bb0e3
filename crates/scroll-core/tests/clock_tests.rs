// Host-side tests for the frame clock.

use instant::{Duration, Instant};
use scroll_core::FrameClock;

#[test]
fn elapsed_starts_at_zero() {
    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);
    let t = clock.tick_at(start);
    assert_eq!(t.elapsed, 0.0);
    assert_eq!(t.delta, 0.0);
}

#[test]
fn deltas_measure_time_between_ticks() {
    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);
    let t1 = clock.tick_at(start + Duration::from_millis(16));
    let t2 = clock.tick_at(start + Duration::from_millis(50));
    assert!((t1.delta - 0.016).abs() < 1e-6);
    assert!((t2.delta - 0.034).abs() < 1e-6);
    assert!((t2.elapsed - 0.050).abs() < 1e-6);
}

#[test]
fn earlier_instant_gives_zero_delta() {
    let start = Instant::now();
    let mut clock = FrameClock::starting_at(start);
    clock.tick_at(start + Duration::from_millis(100));
    let t = clock.tick_at(start + Duration::from_millis(40));
    assert_eq!(t.delta, 0.0);
    assert!((t.elapsed - 0.1).abs() < 1e-6);
}

#[test]
fn live_clock_is_monotonic() {
    let mut clock = FrameClock::new();
    let a = clock.tick();
    let b = clock.tick();
    assert!(a.delta >= 0.0 && b.delta >= 0.0);
    assert!(b.elapsed >= a.elapsed);
}
