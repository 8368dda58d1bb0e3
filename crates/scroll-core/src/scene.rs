//! Static scene layout: one tracked object per section plus a particle field.

use crate::constants::{DRIFT_RATE_X, DRIFT_RATE_Y, OBJECT_X_OFFSETS, PARTICLE_SPREAD};
use crate::geometry::Shape;
use crate::tween::{Ease, RotationKick};
use glam::Vec3;
use rand::prelude::*;

/// A scene object whose rotation is driven by the motion controller.
///
/// World rotation is the explicit sum of a continuous `drift` term and a
/// discrete `kick` term.
#[derive(Clone, Debug)]
pub struct TrackedObject {
    pub shape: Shape,
    pub position: Vec3,
    pub drift: Vec3,
    pub kick: RotationKick,
}

impl TrackedObject {
    pub fn new(shape: Shape, position: Vec3) -> Self {
        Self {
            shape,
            position,
            drift: Vec3::ZERO,
            kick: RotationKick::default(),
        }
    }

    /// Time-based drift; cumulative rotation is independent of how `dt` is sliced.
    pub fn advance(&mut self, dt: f32) {
        if !(dt.is_finite() && dt > 0.0) {
            return;
        }
        self.drift.x += dt * DRIFT_RATE_X;
        self.drift.y += dt * DRIFT_RATE_Y;
        self.kick.advance(dt);
    }

    pub fn start_kick(&mut self, delta: Vec3, duration: f32, ease: Ease) {
        self.kick.start(delta, duration, ease);
    }

    #[inline]
    pub fn rotation(&self) -> Vec3 {
        self.drift + self.kick.value()
    }
}

/// Torus, cone and torus knot stacked `objects_distance` apart, alternating sides.
pub fn section_objects(objects_distance: f32) -> Vec<TrackedObject> {
    [Shape::TORUS, Shape::CONE, Shape::TORUS_KNOT]
        .into_iter()
        .enumerate()
        .map(|(i, shape)| {
            let x = OBJECT_X_OFFSETS[i % OBJECT_X_OFFSETS.len()];
            TrackedObject::new(shape, Vec3::new(x, -objects_distance * i as f32, 0.0))
        })
        .collect()
}

/// Particle positions spanning the full scroll range of the page.
pub fn particle_field(count: usize, objects_distance: f32, sections: usize, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let depth = objects_distance * sections as f32;
    (0..count)
        .map(|_| {
            let x = (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD;
            let y = objects_distance * 0.5 - rng.gen::<f32>() * depth;
            let z = (rng.gen::<f32>() - 0.5) * PARTICLE_SPREAD;
            Vec3::new(x, y, z)
        })
        .collect()
}
