//! Scene configuration with defaults from `constants`, overridable by decoded
//! `key=value` pairs from the page URL, e.g. `?distance=4&damping=time:5&color=%23ffeded`.

use crate::constants::{
    DEFAULT_MATERIAL_COLOR, KICK_DELTA, KICK_DURATION_SEC, OBJECTS_DISTANCE, PARTICLE_COUNT,
    PARTICLE_SEED,
};
use crate::damping::Damping;
use crate::section::SectionPolicy;
use crate::tween::Ease;
use glam::Vec3;
use thiserror::Error;

const MAX_PARTICLES: usize = 20_000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid number for `{key}`: {value:?}")]
    InvalidNumber { key: String, value: String },
    #[error("value for `{key}` out of range: {value}")]
    OutOfRange { key: String, value: String },
    #[error("unknown color {0:?}")]
    UnknownColor(String),
    #[error("invalid damping {0:?} (expected `frame:<0..1>`, `time:<rate>` or a fraction)")]
    InvalidDamping(String),
    #[error("unknown section policy {0:?} (expected `clamp` or `ignore`)")]
    UnknownSectionPolicy(String),
    #[error("unknown ease {0:?}")]
    UnknownEase(String),
    #[error("unknown log level {0:?}")]
    UnknownLogLevel(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub objects_distance: f32,
    pub damping: Damping,
    pub section_policy: SectionPolicy,
    pub kick_delta: Vec3,
    pub kick_duration: f32,
    pub kick_ease: Ease,
    pub material_color: [f32; 3],
    pub particle_count: usize,
    pub particle_seed: u64,
    pub log_level: log::Level,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            objects_distance: OBJECTS_DISTANCE,
            damping: Damping::default(),
            section_policy: SectionPolicy::default(),
            kick_delta: Vec3::from_array(KICK_DELTA),
            kick_duration: KICK_DURATION_SEC,
            kick_ease: Ease::Power2InOut,
            material_color: DEFAULT_MATERIAL_COLOR,
            particle_count: PARTICLE_COUNT,
            particle_seed: PARTICLE_SEED,
            log_level: log::Level::Info,
        }
    }
}

impl SceneConfig {
    /// Defaults overridden by already-decoded `(key, value)` pairs, in order.
    /// Unknown keys are skipped with a warning; malformed values are errors.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut cfg = Self::default();
        for (key, value) in pairs {
            cfg.apply(key.as_ref(), value.as_ref())?;
        }
        Ok(cfg)
    }

    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "distance" => {
                let d = parse_f32(key, value)?;
                if d <= 0.0 {
                    return Err(out_of_range(key, value));
                }
                self.objects_distance = d;
            }
            "damping" => {
                self.damping =
                    Damping::parse(value).ok_or_else(|| ConfigError::InvalidDamping(value.into()))?;
            }
            "section" => {
                self.section_policy = SectionPolicy::from_name(value)
                    .ok_or_else(|| ConfigError::UnknownSectionPolicy(value.into()))?;
            }
            "ease" => {
                self.kick_ease =
                    Ease::from_name(value).ok_or_else(|| ConfigError::UnknownEase(value.into()))?;
            }
            "duration" => {
                let d = parse_f32(key, value)?;
                if d < 0.0 {
                    return Err(out_of_range(key, value));
                }
                self.kick_duration = d;
            }
            "color" => {
                self.material_color =
                    parse_color(value).ok_or_else(|| ConfigError::UnknownColor(value.into()))?;
            }
            "particles" => {
                let n: usize = value.trim().parse().map_err(|_| invalid_number(key, value))?;
                if n > MAX_PARTICLES {
                    return Err(out_of_range(key, value));
                }
                self.particle_count = n;
            }
            "seed" => {
                self.particle_seed = value.trim().parse().map_err(|_| invalid_number(key, value))?;
            }
            "log" => {
                self.log_level = value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::UnknownLogLevel(value.into()))?;
            }
            _ => log::warn!("[config] ignoring unknown key {:?}", key),
        }
        Ok(())
    }
}

fn parse_f32(key: &str, value: &str) -> Result<f32, ConfigError> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid_number(key, value))
}

fn invalid_number(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidNumber {
        key: key.into(),
        value: value.into(),
    }
}

fn out_of_range(key: &str, value: &str) -> ConfigError {
    ConfigError::OutOfRange {
        key: key.into(),
        value: value.into(),
    }
}

/// Parse `#rrggbb`, `#rgb` (leading `#` optional) or a small set of CSS color names
/// into sRGB components in \[0, 1\].
pub fn parse_color(s: &str) -> Option<[f32; 3]> {
    let s = s.trim();
    let named = match s.to_ascii_lowercase().as_str() {
        "red" => Some(0xff0000),
        "green" => Some(0x008000),
        "lime" => Some(0x00ff00),
        "blue" => Some(0x0000ff),
        "white" => Some(0xffffff),
        "black" => Some(0x000000),
        "yellow" => Some(0xffff00),
        "cyan" | "aqua" => Some(0x00ffff),
        "magenta" | "fuchsia" => Some(0xff00ff),
        "orange" => Some(0xffa500),
        "purple" => Some(0x800080),
        "pink" => Some(0xffc0cb),
        "gray" | "grey" => Some(0x808080),
        _ => None,
    };
    let rgb = match named {
        Some(v) => v,
        None => {
            let hex = s.strip_prefix('#').unwrap_or(s);
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            match hex.len() {
                6 => u32::from_str_radix(hex, 16).ok()?,
                3 => {
                    let v = u32::from_str_radix(hex, 16).ok()?;
                    let (r, g, b) = ((v >> 8) & 0xf, (v >> 4) & 0xf, v & 0xf);
                    ((r * 0x11) << 16) | ((g * 0x11) << 8) | (b * 0x11)
                }
                _ => return None,
            }
        }
    };
    Some([
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    ])
}
