//! Tessellation of the three section primitives.
//!
//! Layouts follow the usual parametric construction: a `(rows + 1) x (cols + 1)`
//! vertex grid with duplicated seam vertices, two triangles per grid cell.

use glam::Vec3;
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    #[inline]
    fn new(position: Vec3, normal: Vec3) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.normalize_or_zero().to_array(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    fn push_grid_quads(&mut self, rows: u32, cols: u32, base: u32) {
        let stride = cols + 1;
        for r in 0..rows {
            for c in 0..cols {
                let a = base + r * stride + c;
                let b = base + (r + 1) * stride + c;
                let d = a + 1;
                let e = b + 1;
                self.indices.extend_from_slice(&[a, b, d, b, e, d]);
            }
        }
    }
}

/// Which primitive a tracked object is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Cone {
        radius: f32,
        height: f32,
        radial_segments: u32,
    },
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
}

impl Shape {
    pub const TORUS: Shape = Shape::Torus {
        radius: 1.0,
        tube: 0.4,
        radial_segments: 16,
        tubular_segments: 60,
    };
    pub const CONE: Shape = Shape::Cone {
        radius: 1.0,
        height: 2.0,
        radial_segments: 32,
    };
    pub const TORUS_KNOT: Shape = Shape::TorusKnot {
        radius: 0.8,
        tube: 0.35,
        tubular_segments: 100,
        radial_segments: 16,
        p: 2,
        q: 3,
    };

    pub fn tessellate(&self) -> MeshData {
        match *self {
            Shape::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => torus(radius, tube, radial_segments, tubular_segments),
            Shape::Cone {
                radius,
                height,
                radial_segments,
            } => cone(radius, height, radial_segments),
            Shape::TorusKnot {
                radius,
                tube,
                tubular_segments,
                radial_segments,
                p,
                q,
            } => torus_knot(radius, tube, tubular_segments, radial_segments, p, q),
        }
    }
}

pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let radial = radial_segments.max(2);
    let tubular = tubular_segments.max(3);
    let mut mesh = MeshData::default();
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let ring = radius + tube * v.cos();
            let p = Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin());
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            mesh.vertices.push(Vertex::new(p, p - center));
        }
    }
    mesh.push_grid_quads(radial, tubular, 0);
    mesh
}

/// Closed cone with its apex at `+height / 2`, base at `-height / 2`.
pub fn cone(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let segs = radial_segments.max(3);
    let half = height * 0.5;
    let slope = radius / height.max(f32::EPSILON);
    let mut mesh = MeshData::default();

    // Side: apex row then base row, one vertex per seam position.
    for row in 0..=1u32 {
        let r = radius * row as f32;
        let y = half - height * row as f32;
        for x in 0..=segs {
            let theta = x as f32 / segs as f32 * TAU;
            let (s, c) = theta.sin_cos();
            let normal = Vec3::new(s, slope, c);
            mesh.vertices.push(Vertex::new(Vec3::new(r * s, y, r * c), normal));
        }
    }
    // The apex row is degenerate, so each cell is a single triangle.
    let stride = segs + 1;
    for x in 0..segs {
        let b = stride + x;
        let c = stride + x + 1;
        let d = x + 1;
        mesh.indices.extend_from_slice(&[b, c, d]);
    }

    // Base cap: one center vertex per segment, then the rim.
    let down = Vec3::NEG_Y;
    let center_start = mesh.vertices.len() as u32;
    for _ in 0..segs {
        mesh.vertices.push(Vertex::new(Vec3::new(0.0, -half, 0.0), down));
    }
    let rim_start = mesh.vertices.len() as u32;
    for x in 0..=segs {
        let theta = x as f32 / segs as f32 * TAU;
        let (s, c) = theta.sin_cos();
        mesh.vertices
            .push(Vertex::new(Vec3::new(radius * s, -half, radius * c), down));
    }
    for x in 0..segs {
        mesh.indices
            .extend_from_slice(&[center_start + x, rim_start + x + 1, rim_start + x]);
    }
    mesh
}

fn knot_curve(u: f32, p: f32, q: f32, radius: f32) -> Vec3 {
    let qu_over_p = q / p * u;
    let cs = qu_over_p.cos();
    Vec3::new(
        radius * (2.0 + cs) * 0.5 * u.cos(),
        radius * (2.0 + cs) * 0.5 * u.sin(),
        radius * qu_over_p.sin() * 0.5,
    )
}

pub fn torus_knot(
    radius: f32,
    tube: f32,
    tubular_segments: u32,
    radial_segments: u32,
    p: u32,
    q: u32,
) -> MeshData {
    let tubular = tubular_segments.max(3);
    let radial = radial_segments.max(3);
    let (pf, qf) = (p.max(1) as f32, q as f32);
    let mut mesh = MeshData::default();
    for i in 0..=tubular {
        let u = i as f32 / tubular as f32 * pf * TAU;
        let p1 = knot_curve(u, pf, qf, radius);
        let p2 = knot_curve(u + 0.01, pf, qf, radius);
        let t = p2 - p1;
        let n = p2 + p1;
        let b = t.cross(n).normalize_or_zero();
        let n = b.cross(t).normalize_or_zero();
        for j in 0..=radial {
            let v = j as f32 / radial as f32 * TAU;
            let cx = -tube * v.cos();
            let cy = tube * v.sin();
            let pos = p1 + n * cx + b * cy;
            mesh.vertices.push(Vertex::new(pos, pos - p1));
        }
    }
    mesh.push_grid_quads(tubular, radial, 0);
    mesh
}
