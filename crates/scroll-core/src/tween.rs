//! Minimal relative tweening for one-shot rotation kicks.
//!
//! A kick never writes the rotation directly. It produces an offset that the
//! owner adds to its own continuous drift, so overlapping kicks and drift
//! compose by summation regardless of call order.

use glam::Vec3;
use smallvec::SmallVec;

/// Easing curves named after their GSAP counterparts (`power2.inOut`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    Power1In,
    Power1Out,
    Power1InOut,
    Power2In,
    Power2Out,
    #[default]
    Power2InOut,
    Power3In,
    Power3Out,
    Power3InOut,
}

impl Ease {
    /// Map normalized progress `t` in \[0, 1\] to eased progress in \[0, 1\].
    pub fn apply(&self, t: f32) -> f32 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::Power1In => ease_in(t, 2),
            Self::Power1Out => ease_out(t, 2),
            Self::Power1InOut => ease_in_out(t, 2),
            Self::Power2In => ease_in(t, 3),
            Self::Power2Out => ease_out(t, 3),
            Self::Power2InOut => ease_in_out(t, 3),
            Self::Power3In => ease_in(t, 4),
            Self::Power3Out => ease_out(t, 4),
            Self::Power3InOut => ease_in_out(t, 4),
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        let key = s.trim().to_ascii_lowercase().replace(|c: char| c == '-' || c == '_', ".");
        let ease = match key.as_str() {
            "linear" | "none" | "power0" | "power0.none" => Self::Linear,
            "power1.in" => Self::Power1In,
            "power1.out" | "power1" => Self::Power1Out,
            "power1.inout" => Self::Power1InOut,
            "power2.in" => Self::Power2In,
            "power2.out" | "power2" => Self::Power2Out,
            "power2.inout" => Self::Power2InOut,
            "power3.in" => Self::Power3In,
            "power3.out" | "power3" => Self::Power3Out,
            "power3.inout" => Self::Power3InOut,
            _ => return None,
        };
        Some(ease)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Power1In => "power1.in",
            Self::Power1Out => "power1.out",
            Self::Power1InOut => "power1.inOut",
            Self::Power2In => "power2.in",
            Self::Power2Out => "power2.out",
            Self::Power2InOut => "power2.inOut",
            Self::Power3In => "power3.in",
            Self::Power3Out => "power3.out",
            Self::Power3InOut => "power3.inOut",
        }
    }
}

// GSAP's powerN curves use exponent N + 1.
#[inline]
fn ease_in(t: f32, p: i32) -> f32 {
    t.powi(p)
}

#[inline]
fn ease_out(t: f32, p: i32) -> f32 {
    1.0 - (1.0 - t).powi(p)
}

#[inline]
fn ease_in_out(t: f32, p: i32) -> f32 {
    if t < 0.5 {
        ease_in(t * 2.0, p) * 0.5
    } else {
        1.0 - ease_in((1.0 - t) * 2.0, p) * 0.5
    }
}

/// A relative tween: animates from zero to `delta` over `duration` seconds.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    pub delta: Vec3,
    pub duration: f32,
    pub elapsed: f32,
    pub ease: Ease,
}

impl Tween {
    pub fn new(delta: Vec3, duration: f32, ease: Ease) -> Self {
        Self {
            delta,
            duration: if duration.is_finite() { duration } else { 0.0 },
            elapsed: 0.0,
            ease,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    #[inline]
    pub fn value(&self) -> Vec3 {
        self.delta * self.ease.apply(self.progress())
    }

    pub fn advance(&mut self, dt: f32) {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
    }
}

/// Discrete rotation contribution made of settled kicks plus in-flight tweens.
#[derive(Clone, Debug, Default)]
pub struct RotationKick {
    settled: Vec3,
    active: SmallVec<[Tween; 2]>,
}

impl RotationKick {
    /// Fire-and-forget. A kick started while another is in flight stacks on top of it.
    pub fn start(&mut self, delta: Vec3, duration: f32, ease: Ease) {
        let tween = Tween::new(delta, duration, ease);
        if tween.is_finished() {
            self.settled += delta;
        } else {
            self.active.push(tween);
        }
    }

    pub fn advance(&mut self, dt: f32) {
        let mut settled = self.settled;
        self.active.retain(|t| {
            t.advance(dt);
            if t.is_finished() {
                settled += t.delta;
                false
            } else {
                true
            }
        });
        self.settled = settled;
    }

    pub fn value(&self) -> Vec3 {
        self.active
            .iter()
            .fold(self.settled, |acc, t| acc + t.value())
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.active.is_empty()
    }

    #[inline]
    pub fn in_flight(&self) -> usize {
        self.active.len()
    }
}
