// Host-side tests for query-string configuration.

use scroll_core::constants::*;
use scroll_core::{parse_color, ConfigError, Damping, Ease, SceneConfig, SectionPolicy};

#[test]
fn defaults_match_constants() {
    let cfg = SceneConfig::default();
    assert_eq!(cfg.objects_distance, OBJECTS_DISTANCE);
    assert_eq!(cfg.damping, Damping::PerFrame(PARALLAX_DAMPING));
    assert_eq!(cfg.section_policy, SectionPolicy::Clamp);
    assert_eq!(cfg.kick_delta.to_array(), KICK_DELTA);
    assert_eq!(cfg.kick_duration, KICK_DURATION_SEC);
    assert_eq!(cfg.kick_ease, Ease::Power2InOut);
    assert_eq!(cfg.material_color, DEFAULT_MATERIAL_COLOR);
    assert_eq!(cfg.particle_count, PARTICLE_COUNT);
    assert_eq!(cfg.log_level, log::Level::Info);
}

fn config(pairs: &[(&str, &str)]) -> Result<SceneConfig, ConfigError> {
    SceneConfig::from_pairs(pairs.iter().copied())
}

#[test]
fn no_pairs_is_default() {
    assert_eq!(config(&[]).unwrap(), SceneConfig::default());
}

#[test]
fn pairs_override_fields() {
    let cfg = config(&[
        ("distance", "4"),
        ("damping", "time:5"),
        ("section", "ignore"),
        ("ease", "power3.out"),
        ("duration", "2"),
        ("particles", "50"),
        ("seed", "7"),
        ("log", "debug"),
    ])
    .unwrap();
    assert_eq!(cfg.objects_distance, 4.0);
    assert_eq!(cfg.damping, Damping::TimeConstant(5.0));
    assert_eq!(cfg.section_policy, SectionPolicy::Ignore);
    assert_eq!(cfg.kick_ease, Ease::Power3Out);
    assert_eq!(cfg.kick_duration, 2.0);
    assert_eq!(cfg.particle_count, 50);
    assert_eq!(cfg.particle_seed, 7);
    assert_eq!(cfg.log_level, log::Level::Debug);
}

#[test]
fn decoded_color_is_applied() {
    let cfg = config(&[("color", "#ffeded")]).unwrap();
    assert_eq!(cfg.material_color, [1.0, 237.0 / 255.0, 237.0 / 255.0]);
}

#[test]
fn later_pairs_win() {
    let cfg = SceneConfig::from_pairs(vec![
        ("distance".to_string(), "2".to_string()),
        ("distance".to_string(), "6".to_string()),
    ])
    .unwrap();
    assert_eq!(cfg.objects_distance, 6.0);
}

#[test]
fn unknown_keys_are_ignored() {
    let cfg = config(&[("utm_source", "mail"), ("distance", "5")]).unwrap();
    assert_eq!(cfg.objects_distance, 5.0);
}

#[test]
fn malformed_values_are_errors() {
    assert_eq!(
        config(&[("distance", "abc")]),
        Err(ConfigError::InvalidNumber {
            key: "distance".into(),
            value: "abc".into()
        })
    );
    assert!(matches!(
        config(&[("distance", "-1")]),
        Err(ConfigError::OutOfRange { .. })
    ));
    assert!(matches!(
        config(&[("distance", "NaN")]),
        Err(ConfigError::InvalidNumber { .. })
    ));
    assert!(matches!(
        config(&[("damping", "frame:2")]),
        Err(ConfigError::InvalidDamping(_))
    ));
    assert!(matches!(
        config(&[("section", "wrap")]),
        Err(ConfigError::UnknownSectionPolicy(_))
    ));
    assert!(matches!(
        config(&[("ease", "bounce")]),
        Err(ConfigError::UnknownEase(_))
    ));
    assert!(matches!(
        config(&[("color", "chartreuse-ish")]),
        Err(ConfigError::UnknownColor(_))
    ));
    assert!(matches!(
        config(&[("particles", "1000000")]),
        Err(ConfigError::OutOfRange { .. })
    ));
    assert!(matches!(
        config(&[("log", "loud")]),
        Err(ConfigError::UnknownLogLevel(_))
    ));
}

#[test]
fn damping_forms() {
    assert_eq!(Damping::parse("0.2"), Some(Damping::PerFrame(0.2)));
    assert_eq!(Damping::parse("frame:0.05"), Some(Damping::PerFrame(0.05)));
    assert_eq!(Damping::parse("TIME: 3"), Some(Damping::TimeConstant(3.0)));
    assert_eq!(Damping::parse("Time"), Some(Damping::TimeConstant(5.0)));
    assert_eq!(Damping::parse("time:-1"), None);
    assert_eq!(Damping::parse("spring:1"), None);
    assert_eq!(Damping::parse("inf"), None);
}

#[test]
fn damping_factors() {
    assert_eq!(Damping::PerFrame(0.1).factor(0.5), 0.1);
    assert_eq!(Damping::PerFrame(0.1).factor(0.001), 0.1);
    let f = Damping::TimeConstant(2.0).factor(0.25);
    assert!((f - (1.0 - (-0.5_f32).exp())).abs() < 1e-6);
    assert_eq!(Damping::TimeConstant(2.0).factor(-1.0), 0.0);
}

#[test]
fn colors_parse() {
    assert_eq!(parse_color("red"), Some([1.0, 0.0, 0.0]));
    assert_eq!(parse_color("#00ff00"), Some([0.0, 1.0, 0.0]));
    assert_eq!(parse_color("00f"), Some([0.0, 0.0, 1.0]));
    assert_eq!(parse_color(" White "), Some([1.0, 1.0, 1.0]));
    assert_eq!(parse_color("#12345"), None);
    assert_eq!(parse_color("#gg0000"), None);
    assert_eq!(parse_color("+ff0000"), None);
}

#[test]
fn errors_display_context() {
    let e = config(&[("distance", "x")]).unwrap_err();
    assert!(e.to_string().contains("distance"));
}
