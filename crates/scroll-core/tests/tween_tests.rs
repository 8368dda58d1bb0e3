// Host-side tests for easing curves and rotation kicks.

use glam::Vec3;
use scroll_core::{Ease, RotationKick, Tween};

const ALL_EASES: [Ease; 10] = [
    Ease::Linear,
    Ease::Power1In,
    Ease::Power1Out,
    Ease::Power1InOut,
    Ease::Power2In,
    Ease::Power2Out,
    Ease::Power2InOut,
    Ease::Power3In,
    Ease::Power3Out,
    Ease::Power3InOut,
];

#[test]
fn eases_hit_both_endpoints() {
    for ease in ALL_EASES {
        assert_eq!(ease.apply(0.0), 0.0, "{:?}", ease);
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{:?}", ease);
    }
}

#[test]
fn eases_clamp_out_of_range_input() {
    for ease in ALL_EASES {
        assert_eq!(ease.apply(-3.0), ease.apply(0.0));
        assert_eq!(ease.apply(7.0), ease.apply(1.0));
        assert_eq!(ease.apply(f32::NAN), 0.0);
    }
}

#[test]
fn eases_are_monotonic() {
    for ease in ALL_EASES {
        let mut prev = ease.apply(0.0);
        for i in 1..=200 {
            let v = ease.apply(i as f32 / 200.0);
            assert!(v + 1e-6 >= prev, "{:?} decreased at step {}", ease, i);
            prev = v;
        }
    }
}

#[test]
fn in_out_eases_are_symmetric() {
    for ease in [Ease::Power1InOut, Ease::Power2InOut, Ease::Power3InOut] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-6);
        for i in 0..=50 {
            let t = i as f32 / 100.0;
            let a = ease.apply(t);
            let b = 1.0 - ease.apply(1.0 - t);
            assert!((a - b).abs() < 1e-5, "{:?} at {}", ease, t);
        }
    }
}

#[test]
fn power2_in_out_matches_cubic() {
    let e = Ease::Power2InOut;
    assert!((e.apply(0.25) - 4.0 * 0.25_f32.powi(3)).abs() < 1e-6);
    assert!((e.apply(0.75) - (1.0 - 4.0 * 0.25_f32.powi(3))).abs() < 1e-6);
}

#[test]
fn ease_names_round_trip() {
    for ease in ALL_EASES {
        assert_eq!(Ease::from_name(ease.as_str()), Some(ease));
    }
    assert_eq!(Ease::from_name("power2-inout"), Some(Ease::Power2InOut));
    assert_eq!(Ease::from_name("Power2_InOut"), Some(Ease::Power2InOut));
    assert_eq!(Ease::from_name("power2"), Some(Ease::Power2Out));
    assert_eq!(Ease::from_name("elastic.out"), None);
}

#[test]
fn tween_value_follows_progress() {
    let mut t = Tween::new(Vec3::new(6.0, 3.0, 1.5), 1.5, Ease::Linear);
    assert_eq!(t.value(), Vec3::ZERO);
    t.advance(0.5);
    assert!((t.value() - Vec3::new(2.0, 1.0, 0.5)).length() < 1e-5);
    t.advance(-1.0);
    assert!((t.progress() - 1.0 / 3.0).abs() < 1e-6);
    t.advance(5.0);
    assert!(t.is_finished());
    assert_eq!(t.value(), Vec3::new(6.0, 3.0, 1.5));
}

#[test]
fn kick_settles_exactly_on_delta() {
    let delta = Vec3::new(6.0, 3.0, 1.5);
    let mut kick = RotationKick::default();
    kick.start(delta, 1.5, Ease::Power2InOut);
    assert!(kick.is_animating());
    for _ in 0..97 {
        kick.advance(1.0 / 60.0);
    }
    assert!(!kick.is_animating());
    assert_eq!(kick.value(), delta);
}

#[test]
fn overlapping_kicks_stack() {
    let delta = Vec3::new(6.0, 3.0, 1.5);
    let mut kick = RotationKick::default();
    kick.start(delta, 1.5, Ease::Power2InOut);
    kick.advance(0.75);
    kick.start(delta, 1.5, Ease::Power2InOut);
    assert_eq!(kick.in_flight(), 2);
    assert!((kick.value() - delta * 0.5).length() < 1e-5);

    kick.advance(0.75);
    assert_eq!(kick.in_flight(), 1);
    assert!((kick.value() - delta * 1.5).length() < 1e-5);

    kick.advance(0.75);
    assert!(!kick.is_animating());
    assert_eq!(kick.value(), delta * 2.0);
}

#[test]
fn zero_duration_kick_applies_immediately() {
    let mut kick = RotationKick::default();
    kick.start(Vec3::X, 0.0, Ease::Linear);
    assert!(!kick.is_animating());
    assert_eq!(kick.value(), Vec3::X);
    kick.start(Vec3::Y, f32::NAN, Ease::Linear);
    assert_eq!(kick.value(), Vec3::X + Vec3::Y);
}
