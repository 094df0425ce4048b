// Host-side tests for primitive meshes and procedural textures.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod studio {
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod texture {
        include!("../src/core/texture.rs");
    }
}

use glam::Vec3;
use std::cell::Cell;
use studio::geometry::*;
use studio::texture::*;

fn shapes() -> Vec<Shape> {
    vec![
        Shape::Cuboid {
            size: Vec3::new(2.0, 1.0, 0.5),
        },
        Shape::Plane {
            width: 3.0,
            height: 1.0,
        },
        Shape::Sphere {
            radius: 0.5,
            segments: 16,
        },
        Shape::Cylinder {
            radius_top: 0.2,
            radius_bottom: 0.4,
            height: 1.0,
            segments: 12,
        },
        Shape::Torus {
            radius: 0.5,
            tube: 0.1,
            radial: 8,
            tubular: 24,
        },
    ]
}

#[test]
fn meshes_are_well_formed() {
    for shape in shapes() {
        let mesh = shape.mesh();
        assert!(mesh.triangle_count() > 0, "{:?}", shape);
        assert_eq!(mesh.indices.len() % 3, 0);
        let n = mesh.vertices.len() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n), "{:?}", shape);
        for v in &mesh.vertices {
            let len = Vec3::from_array(v.normal).length();
            assert!((len - 1.0).abs() < 1e-3, "{:?} normal {}", shape, len);
            assert!(v.uv.iter().all(|c| (-1e-4..=1.0 + 1e-4).contains(c)));
        }
    }
}

#[test]
fn vertices_stay_inside_half_extents() {
    for shape in shapes() {
        let half = shape.half_extents() + Vec3::splat(1e-4);
        for v in &shape.mesh().vertices {
            let p = Vec3::from_array(v.position).abs();
            assert!(p.cmple(half).all(), "{:?} vertex {:?}", shape, p);
        }
    }
}

#[test]
fn cuboid_has_six_quads() {
    let mesh = cuboid(Vec3::ONE);
    assert_eq!(mesh.vertices.len(), 24);
    assert_eq!(mesh.triangle_count(), 12);
}

#[test]
fn cuboid_winding_faces_outward() {
    let mesh = cuboid(Vec3::splat(2.0));
    for tri in mesh.indices.chunks(3) {
        let a = Vec3::from_array(mesh.vertices[tri[0] as usize].position);
        let b = Vec3::from_array(mesh.vertices[tri[1] as usize].position);
        let c = Vec3::from_array(mesh.vertices[tri[2] as usize].position);
        let n = Vec3::from_array(mesh.vertices[tri[0] as usize].normal);
        assert!((b - a).cross(c - a).dot(n) > 0.0);
    }
}

#[test]
fn plane_faces_positive_z() {
    let mesh = plane(2.0, 1.0);
    assert_eq!(mesh.triangle_count(), 2);
    assert!(mesh.vertices.iter().all(|v| v.normal == [0.0, 0.0, 1.0]));
}

#[test]
fn hex_parsing() {
    assert_eq!(parse_hex_rgb("#ff6b6b"), Some([255, 107, 107]));
    assert_eq!(parse_hex_rgb("#fff"), Some([255, 255, 255]));
    assert_eq!(parse_hex_rgb("ff6b6b"), None);
    assert_eq!(parse_hex_rgb("#12345"), None);
    assert_eq!(parse_hex_rgb("#gggggg"), None);
}

#[test]
fn hex_to_linear_endpoints() {
    assert!(hex_to_linear("#ffffff").iter().all(|c| (c - 1.0).abs() < 1e-5));
    assert_eq!(hex_to_linear("#000000"), [0.0, 0.0, 0.0]);
    let mid = hex_to_linear("#808080")[0];
    assert!(mid > 0.2 && mid < 0.23);
    let magenta = hex_to_linear("not a colour");
    assert!(magenta[1] == 0.0 && (magenta[0] - 1.0).abs() < 1e-5);
}

#[test]
fn grid_texture_draws_lines_on_the_step() {
    let px = grid_pixels(GRID_SIZE, GRID_DIVISIONS);
    assert_eq!((px.width, px.height), (GRID_SIZE, GRID_SIZE));
    assert_eq!(px.rgba.len(), (GRID_SIZE * GRID_SIZE * 4) as usize);
    let line = parse_hex_rgb(GRID_LINE).unwrap();
    let bg = parse_hex_rgb(GRID_BACKGROUND).unwrap();
    assert_eq!(&px.pixel(0, 0)[..3], &line);
    assert_eq!(&px.pixel(16, 16)[..3], &bg);
    let step = GRID_SIZE / GRID_DIVISIONS;
    assert_eq!(&px.pixel(step, 16)[..3], &line);
    assert_eq!(px.pixel(16, 16)[3], 255);
}

#[test]
fn wall_pattern_is_a_framed_tile() {
    let px = wall_pattern_pixels();
    assert_eq!((px.width, px.height), (PATTERN_TILE, PATTERN_TILE));
    let frame = parse_hex_rgb(PATTERN_FRAME).unwrap();
    let bg = parse_hex_rgb(PATTERN_BACKGROUND).unwrap();
    assert_eq!(&px.pixel(10, 30)[..3], &frame);
    assert_eq!(&px.pixel(3, 3)[..3], &bg);
}

#[test]
fn procedural_pixels_skip_text() {
    assert!(procedural_pixels(&TextureKey::WallPattern).is_some());
    assert!(procedural_pixels(&TextureKey::text("LABS", 48, "#1a1a1a")).is_none());
    assert!(TextureKey::WallPattern.repeats());
    assert!(!TextureKey::text("LABS", 48, "#1a1a1a").repeats());
}

#[test]
fn texture_slot_rebuilds_only_on_key_change() {
    let calls = Cell::new(0);
    let make = |_: &TextureKey| {
        calls.set(calls.get() + 1);
        Some(calls.get())
    };
    let mut slot: TextureSlot<u32> = TextureSlot::default();
    let a = TextureKey::text("A", 40, "#000000");
    let b = TextureKey::text("B", 40, "#000000");

    assert_eq!(slot.resolve(&a, make).copied(), Some(1));
    assert_eq!(slot.resolve(&a, make).copied(), Some(1));
    assert_eq!(slot.resolve(&b, make).copied(), Some(2));
    assert_eq!(slot.get().copied(), Some(2));
    assert_eq!(calls.get(), 2);

    let mut failing: TextureSlot<u32> = TextureSlot::default();
    assert!(failing.resolve(&a, |_| None).is_none());
    assert!(failing.resolve(&a, |_| Some(9)).is_none());
}
