use glam::Vec2;

/// How the parallax offset closes the gap to its target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Damping {
    /// Fixed fraction per update. Convergence speed depends on the frame rate.
    PerFrame(f32),
    /// Exponential approach with rate `k` per second: `alpha = 1 - exp(-k * dt)`.
    TimeConstant(f32),
}

impl Default for Damping {
    fn default() -> Self {
        Self::PerFrame(crate::constants::PARALLAX_DAMPING)
    }
}

impl Damping {
    /// Fraction of the remaining distance closed by one update of length `dt_sec`.
    pub fn factor(&self, dt_sec: f32) -> f32 {
        let f = match *self {
            Self::PerFrame(f) => f,
            Self::TimeConstant(rate) => 1.0 - (-rate * dt_sec.max(0.0)).exp(),
        };
        if f.is_finite() {
            f.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Accepts `frame:<f>`, `time:<rate>`, a bare `time` or a bare per-frame fraction.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("time") {
            return Some(Self::TimeConstant(crate::constants::PARALLAX_RATE_PER_SEC));
        }
        let (kind, value) = match s.split_once(':') {
            Some((k, v)) => (k.trim().to_ascii_lowercase(), v.trim()),
            None => ("frame".to_string(), s),
        };
        let v: f32 = value.parse().ok().filter(|v: &f32| v.is_finite())?;
        match kind.as_str() {
            "frame" if (0.0..=1.0).contains(&v) => Some(Self::PerFrame(v)),
            "time" if v >= 0.0 => Some(Self::TimeConstant(v)),
            _ => None,
        }
    }
}

#[inline]
pub fn damp_toward(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}
