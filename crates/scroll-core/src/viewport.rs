//! Host-driven input state: viewport size, scroll offset and cursor position.
//!
//! All three are plain values overwritten by the latest host event ("last
//! write wins"); nothing here queues or buffers input.

use glam::Vec2;

/// Viewport dimensions in CSS pixels. Used only as a normalization divisor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Non-positive or non-finite dimensions fall back to one pixel; any positive
    /// extent, including sub-pixel ones, is kept as given.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

#[inline]
fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 {
        v
    } else {
        1.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f32,
}

impl ScrollState {
    /// Scroll progress measured in sections (one viewport height each).
    #[inline]
    pub fn sections(&self, viewport: &Viewport) -> f32 {
        self.scroll_y / viewport.height()
    }
}

/// Cursor position normalized by the viewport, nominally in \[0, 1\] on both axes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f32,
    pub y: f32,
}

impl CursorState {
    pub fn from_client(client_x: f32, client_y: f32, viewport: &Viewport) -> Self {
        Self {
            x: client_x / viewport.width(),
            y: client_y / viewport.height(),
        }
    }

    /// Parallax target for the camera group. Screen Y grows downward, world Y upward.
    #[inline]
    pub fn parallax_target(&self) -> Vec2 {
        Vec2::new(self.x, -self.y)
    }
}

/// `Math.round` semantics: halves round toward positive infinity.
#[inline]
pub fn round_half_up(v: f32) -> f32 {
    (v + 0.5).floor()
}

/// Raw section index for a scroll offset, before any range policy is applied.
#[inline]
pub fn raw_section_index(scroll_y: f32, viewport: &Viewport) -> i64 {
    let v = round_half_up(scroll_y / viewport.height());
    if v.is_finite() {
        v as i64
    } else {
        0
    }
}
