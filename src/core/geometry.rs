// CPU-side mesh generation for the handful of primitive shapes the studio uses.
// Triangles are counter-clockwise when seen from outside; UV v grows downward.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    fn push(&mut self, position: Vec3, normal: Vec3, uv: [f32; 2]) -> u32 {
        let i = self.vertices.len() as u32;
        self.vertices.push(Vertex {
            position: position.to_array(),
            normal: normal.to_array(),
            uv,
        });
        i
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Shapes a scene node can carry. Sizes are in world units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Cuboid { size: Vec3 },
    Plane { width: f32, height: f32 },
    Sphere { radius: f32, segments: u32 },
    Cylinder { radius_top: f32, radius_bottom: f32, height: f32, segments: u32 },
    Torus { radius: f32, tube: f32, radial: u32, tubular: u32 },
}

impl Shape {
    pub fn mesh(&self) -> MeshData {
        match *self {
            Shape::Cuboid { size } => cuboid(size),
            Shape::Plane { width, height } => plane(width, height),
            Shape::Sphere { radius, segments } => sphere(radius, segments, segments),
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
                segments,
            } => cylinder(radius_top, radius_bottom, height, segments),
            Shape::Torus {
                radius,
                tube,
                radial,
                tubular,
            } => torus(radius, tube, radial, tubular),
        }
    }

    /// Local-space half extents of the shape's bounding box.
    pub fn half_extents(&self) -> Vec3 {
        match *self {
            Shape::Cuboid { size } => size * 0.5,
            Shape::Plane { width, height } => Vec3::new(width * 0.5, height * 0.5, 0.0),
            Shape::Sphere { radius, .. } => Vec3::splat(radius),
            Shape::Cylinder {
                radius_top,
                radius_bottom,
                height,
                ..
            } => {
                let r = radius_top.max(radius_bottom);
                Vec3::new(r, height * 0.5, r)
            }
            Shape::Torus { radius, tube, .. } => Vec3::new(radius + tube, radius + tube, tube),
        }
    }
}

const FACES: [(Vec3, Vec3, Vec3); 6] = [
    // (normal, u, v) with u × v = normal
    (Vec3::X, Vec3::NEG_Z, Vec3::Y),
    (Vec3::NEG_X, Vec3::Z, Vec3::Y),
    (Vec3::Y, Vec3::X, Vec3::NEG_Z),
    (Vec3::NEG_Y, Vec3::X, Vec3::Z),
    (Vec3::Z, Vec3::X, Vec3::Y),
    (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
];

pub fn cuboid(size: Vec3) -> MeshData {
    let half = size * 0.5;
    let mut mesh = MeshData::default();
    for (n, u, v) in FACES {
        let c = n * (n.abs() * half).element_sum();
        let hu = u * (u.abs() * half).element_sum();
        let hv = v * (v.abs() * half).element_sum();
        let base = mesh.push(c - hu - hv, n, [0.0, 1.0]);
        mesh.push(c + hu - hv, n, [1.0, 1.0]);
        mesh.push(c + hu + hv, n, [1.0, 0.0]);
        mesh.push(c - hu + hv, n, [0.0, 0.0]);
        mesh.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    mesh
}

/// XY plane facing +Z.
pub fn plane(width: f32, height: f32) -> MeshData {
    let (hw, hh) = (width * 0.5, height * 0.5);
    let mut mesh = MeshData::default();
    mesh.push(Vec3::new(-hw, -hh, 0.0), Vec3::Z, [0.0, 1.0]);
    mesh.push(Vec3::new(hw, -hh, 0.0), Vec3::Z, [1.0, 1.0]);
    mesh.push(Vec3::new(hw, hh, 0.0), Vec3::Z, [1.0, 0.0]);
    mesh.push(Vec3::new(-hw, hh, 0.0), Vec3::Z, [0.0, 0.0]);
    mesh.indices.extend_from_slice(&[0, 1, 2, 0, 2, 3]);
    mesh
}

pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let ws = width_segments.max(3);
    let hs = height_segments.max(2);
    let mut mesh = MeshData::default();
    for iy in 0..=hs {
        let v = iy as f32 / hs as f32;
        for ix in 0..=ws {
            let u = ix as f32 / ws as f32;
            let n = Vec3::new(
                -(u * TAU).cos() * (v * PI).sin(),
                (v * PI).cos(),
                (u * TAU).sin() * (v * PI).sin(),
            );
            mesh.push(n * radius, n, [u, v]);
        }
    }
    let row = ws + 1;
    for iy in 0..hs {
        for ix in 0..ws {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            if iy != 0 {
                mesh.indices.extend_from_slice(&[a, b, d]);
            }
            if iy != hs - 1 {
                mesh.indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    mesh
}

/// Y-up cylinder centred on the origin, capped at both ends.
pub fn cylinder(radius_top: f32, radius_bottom: f32, height: f32, segments: u32) -> MeshData {
    let seg = segments.max(3);
    let half = height * 0.5;
    let slope = if height > 0.0 {
        (radius_bottom - radius_top) / height
    } else {
        0.0
    };
    let mut mesh = MeshData::default();
    let row = seg + 1;
    for iy in 0..=1u32 {
        let v = iy as f32;
        let r = v * (radius_bottom - radius_top) + radius_top;
        for ix in 0..=seg {
            let u = ix as f32 / seg as f32;
            let (s, c) = (u * TAU).sin_cos();
            let p = Vec3::new(r * s, half - v * height, r * c);
            let n = Vec3::new(s, slope, c).normalize();
            mesh.push(p, n, [u, v]);
        }
    }
    for ix in 0..seg {
        let a = ix;
        let b = row + ix;
        let c = row + ix + 1;
        let d = ix + 1;
        mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }
    for (top, r) in [(true, radius_top), (false, radius_bottom)] {
        if r <= 0.0 {
            continue;
        }
        let (y, n) = if top { (half, Vec3::Y) } else { (-half, Vec3::NEG_Y) };
        let center = mesh.push(Vec3::new(0.0, y, 0.0), n, [0.5, 0.5]);
        let first = center + 1;
        for ix in 0..=seg {
            let (s, c) = (ix as f32 / seg as f32 * TAU).sin_cos();
            mesh.push(
                Vec3::new(r * s, y, r * c),
                n,
                [0.5 + s * 0.5, 0.5 - c * 0.5],
            );
        }
        for ix in 0..seg {
            let i = first + ix;
            if top {
                mesh.indices.extend_from_slice(&[i, i + 1, center]);
            } else {
                mesh.indices.extend_from_slice(&[i + 1, i, center]);
            }
        }
    }
    mesh
}

/// Ring in the XY plane.
pub fn torus(radius: f32, tube: f32, radial: u32, tubular: u32) -> MeshData {
    let rs = radial.max(3);
    let ts = tubular.max(3);
    let mut mesh = MeshData::default();
    for j in 0..=rs {
        let v = j as f32 / rs as f32 * TAU;
        for i in 0..=ts {
            let u = i as f32 / ts as f32 * TAU;
            let p = Vec3::new(
                (radius + tube * v.cos()) * u.cos(),
                (radius + tube * v.cos()) * u.sin(),
                tube * v.sin(),
            );
            let center = Vec3::new(radius * u.cos(), radius * u.sin(), 0.0);
            let n = (p - center).normalize_or_zero();
            mesh.push(p, n, [i as f32 / ts as f32, j as f32 / rs as f32]);
        }
    }
    let row = ts + 1;
    for j in 1..=rs {
        for i in 1..=ts {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    mesh
}
