//! Per-frame camera motion driven by scroll offset and cursor position.
//!
//! The controller owns all mutable motion state. Host event handlers write
//! the latest scroll/cursor/viewport values; the frame callback reads them.
//! Intermediate values between two frames are simply overwritten.

use crate::config::SceneConfig;
use crate::constants::CAMERA_Z;
use crate::damping::{damp_toward, Damping};
use crate::scene::{section_objects, TrackedObject};
use crate::section::{SectionChange, SectionTracker};
use crate::state::Camera;
use crate::tween::Ease;
use crate::viewport::{CursorState, ScrollState, Viewport};
use glam::{Vec2, Vec3};

/// Everything the renderer needs from one controller frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameUpdate {
    pub camera_eye: Vec3,
    pub rotations: Vec<Vec3>,
}

pub struct CameraMotionController {
    viewport: Viewport,
    scroll: ScrollState,
    cursor: CursorState,
    group_offset: Vec2,
    camera_y: f32,
    objects_distance: f32,
    damping: Damping,
    kick_delta: Vec3,
    kick_duration: f32,
    kick_ease: Ease,
    sections: SectionTracker,
    objects: Vec<TrackedObject>,
}

impl CameraMotionController {
    pub fn new(config: &SceneConfig, viewport: Viewport) -> Self {
        let objects = section_objects(config.objects_distance);
        Self::with_objects(config, viewport, objects)
    }

    pub fn with_objects(config: &SceneConfig, viewport: Viewport, objects: Vec<TrackedObject>) -> Self {
        Self {
            viewport,
            scroll: ScrollState::default(),
            cursor: CursorState::default(),
            group_offset: Vec2::ZERO,
            camera_y: 0.0,
            objects_distance: config.objects_distance,
            damping: config.damping,
            kick_delta: config.kick_delta,
            kick_duration: config.kick_duration,
            kick_ease: config.kick_ease,
            sections: SectionTracker::new(objects.len(), config.section_policy),
            objects,
        }
    }

    /// `camera_y = -(scroll_y / viewport_height) * objects_distance`
    pub fn update_vertical_position(&mut self) {
        self.camera_y = -self.scroll.sections(&self.viewport) * self.objects_distance;
    }

    /// Move the camera group a damped step toward `(cursor.x, -cursor.y)`.
    pub fn update_parallax_offset(&mut self, dt_sec: f32) {
        let target = self.cursor.parallax_target();
        let factor = self.damping.factor(dt_sec);
        self.group_offset = damp_toward(self.group_offset, target, factor);
    }

    pub fn advance_mesh_rotation(&mut self, dt_sec: f32) {
        for obj in &mut self.objects {
            obj.advance(dt_sec);
        }
    }

    /// Record a new scroll offset. Starts a rotation kick on the newly
    /// entered section's object and returns the change, if any.
    pub fn on_scroll(&mut self, scroll_y: f32) -> Option<SectionChange> {
        if !scroll_y.is_finite() {
            return None;
        }
        self.scroll.scroll_y = scroll_y;
        let change = self.sections.observe(scroll_y, &self.viewport)?;
        if let Some(obj) = self.objects.get_mut(change.index) {
            obj.start_kick(self.kick_delta, self.kick_duration, self.kick_ease);
        }
        log::debug!("[scroll] section {} -> {}", change.previous, change.index);
        Some(change)
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        if !(client_x.is_finite() && client_y.is_finite()) {
            return;
        }
        self.cursor = CursorState::from_client(client_x, client_y, &self.viewport);
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
    }

    /// Run one frame: vertical position, parallax, then rotation.
    pub fn frame(&mut self, dt_sec: f32) -> FrameUpdate {
        self.update_vertical_position();
        self.update_parallax_offset(dt_sec);
        self.advance_mesh_rotation(dt_sec);
        FrameUpdate {
            camera_eye: self.camera_eye(),
            rotations: self.objects.iter().map(TrackedObject::rotation).collect(),
        }
    }

    /// Camera world position: the group offset plus the scroll-driven local Y.
    #[inline]
    pub fn camera_eye(&self) -> Vec3 {
        Vec3::new(
            self.group_offset.x,
            self.group_offset.y + self.camera_y,
            CAMERA_Z,
        )
    }

    pub fn camera(&self) -> Camera {
        Camera::new(self.camera_eye(), self.viewport.aspect())
    }

    #[inline]
    pub fn camera_y(&self) -> f32 {
        self.camera_y
    }

    #[inline]
    pub fn group_offset(&self) -> Vec2 {
        self.group_offset
    }

    #[inline]
    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    #[inline]
    pub fn scroll(&self) -> ScrollState {
        self.scroll
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn section(&self) -> usize {
        self.sections.current()
    }

    #[inline]
    pub fn objects(&self) -> &[TrackedObject] {
        &self.objects
    }
}
