// Host-side tests for the studio scene: camera, picking, hover, animation and GPU packing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod studio {
    pub mod camera {
        include!("../src/core/camera.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
    pub mod nav {
        include!("../src/core/nav.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod texture {
        include!("../src/core/texture.rs");
    }
    pub mod uniforms {
        include!("../src/core/uniforms.rs");
    }
}

use glam::{Mat4, Vec3};
use std::f32::consts::FRAC_PI_2;
use studio::camera::*;
use studio::nav::NavTable;
use studio::scene::*;
use studio::uniforms::*;

fn close(a: Vec3, b: Vec3) -> bool {
    (a - b).length() < 1e-3
}

fn room_index(studio: &Studio, title: &str) -> usize {
    studio
        .rooms()
        .iter()
        .position(|r| r.title == title)
        .unwrap()
}

#[test]
fn float_offset_is_closed_form() {
    assert_eq!(float_offset(0.0, 1.0, 0.0, 0.2), 0.0);
    assert!((float_offset(FRAC_PI_2, 1.0, 0.0, 0.2) - 0.2).abs() < 1e-6);
    assert!((float_offset(1.0, 0.5, 1.0, 0.1) - 1.5f32.sin() * 0.1).abs() < 1e-6);
}

#[test]
fn scene_clock_caps_stalls() {
    let mut clock = SceneClock::default();
    assert!((clock.tick(0.5) - MAX_FRAME_DT).abs() < 1e-6);
    assert!((clock.tick(-1.0) - MAX_FRAME_DT).abs() < 1e-6);
    assert!((clock.tick(0.016) - (MAX_FRAME_DT + 0.016)).abs() < 1e-6);
}

#[test]
fn animated_nodes_do_not_accumulate_offsets() {
    let mut s = Studio::empty();
    let id = s.add(None, Transform::at(0.0, 1.0, 0.0), None, None);
    s.animate(
        id,
        Animator::Bob {
            amplitude: 0.5,
            frequency: 1.0,
            phase: 0.0,
            spin_rate: 0.0,
            spin_phase: 0.0,
        },
    );
    s.update(FRAC_PI_2);
    assert!((s.pose(id).local.translation.y - 1.5).abs() < 1e-5);
    s.update(FRAC_PI_2);
    assert!((s.pose(id).local.translation.y - 1.5).abs() < 1e-5);
    s.update(0.0);
    assert!((s.pose(id).local.translation.y - 1.0).abs() < 1e-5);
}

#[test]
fn children_follow_animated_parents() {
    let mut s = Studio::empty();
    let parent = s.add(None, Transform::at(2.0, 0.0, 0.0), None, None);
    let child = s.add(Some(parent), Transform::at(0.0, 1.0, 0.0), None, None);
    s.animate(
        parent,
        Animator::Spin {
            axis: Vec3::Y,
            rate: 1.0,
        },
    );
    s.update(FRAC_PI_2);
    let p = s.world_matrix(child).transform_point3(Vec3::ZERO);
    assert!(close(p, Vec3::new(2.0, 1.0, 0.0)));
}

#[test]
fn face_target_points_forward_axis_at_target() {
    let mut s = Studio::empty();
    let id = s.add(None, Transform::IDENTITY, None, None);
    s.animate(
        id,
        Animator::FaceTarget {
            amplitude: 0.0,
            phase: 0.0,
            target: Vec3::new(5.0, 0.0, 0.0),
        },
    );
    s.update(1.0);
    let forward = s.pose(id).local.rotation * Vec3::Z;
    assert!(close(forward, Vec3::X));
    assert!(look_rotation(Vec3::Y).is_none());
    assert!(look_rotation(Vec3::ZERO).is_none());
}

#[test]
fn service_icons_float_by_exact_sine() {
    let mut s = Studio::new(&NavTable::studio());
    let t = 1.7;
    s.update(t);
    let mut seen = 0;
    for (i, node) in s.nodes().iter().enumerate() {
        let id = NodeId(i as u32);
        if let Some(&Animator::Bob {
            amplitude,
            frequency,
            phase,
            ..
        }) = s.animator(id)
        {
            if amplitude != 0.12 {
                continue;
            }
            seen += 1;
            let dy = s.pose(id).local.translation.y - node.local.translation.y;
            assert_eq!(frequency, 2.0);
            assert!((dy - (2.0 * t + phase).sin() * 0.12).abs() < 1e-5);
        }
    }
    assert!(seen > 0);
}

#[test]
fn glow_animator_drives_emissive() {
    let a = Animator::Glow {
        base: 1.0,
        amplitude: 0.5,
        frequency: 2.0,
    };
    assert_eq!(a.emissive(0.0), Some(1.0));
    assert!((a.emissive(FRAC_PI_2 / 2.0).unwrap() - 1.5).abs() < 1e-5);
    assert_eq!(
        Animator::Spin {
            axis: Vec3::Y,
            rate: 0.3
        }
        .emissive(1.0),
        None
    );
}

#[test]
fn studio_builds_five_rooms_wired_to_anchors() {
    let s = Studio::new(&NavTable::studio());
    let titles: Vec<&str> = s.rooms().iter().map(|r| r.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["SERVICES", "CASE STUDIES", "LABS", "STORIES", "CONTACT"]
    );
    for room in s.rooms() {
        assert!(room.anchor.is_some());
        assert_eq!(room.hover, RoomHover::Idle);
        assert!((room.accent_level - ACCENT_IDLE).abs() < 1e-6);
    }
    assert!(s.nodes().len() > 50);
    // parents always precede children
    for (i, node) in s.nodes().iter().enumerate() {
        if let Some(p) = node.parent {
            assert!(p.index() < i);
        }
    }
}

#[test]
fn pick_returns_nearest_room_and_portal() {
    let s = Studio::new(&NavTable::studio());
    let labs = room_index(&s, "LABS");
    let services = room_index(&s, "SERVICES");

    // straight down the -Z axis through LABS (in front) and SERVICES (behind)
    let ray = Ray {
        origin: Vec3::new(-6.0, -1.0, 20.0),
        dir: Vec3::NEG_Z,
    };
    let pick = s.pick(&ray);
    assert_eq!(pick.room, Some(labs));
    assert!(pick.portal);

    // from above into SERVICES, missing its portal
    let ray = Ray {
        origin: Vec3::new(-6.0, 10.0, -2.0),
        dir: Vec3::NEG_Y,
    };
    let pick = s.pick(&ray);
    assert_eq!(pick.room, Some(services));
    assert!(!pick.portal);

    let sky = Ray {
        origin: Vec3::new(0.0, 10.0, 0.0),
        dir: Vec3::Y,
    };
    assert_eq!(s.pick(&sky), Pick::default());
}

#[test]
fn hover_moves_between_rooms() {
    let mut s = Studio::new(&NavTable::studio());
    let a = Pick {
        room: Some(0),
        portal: false,
    };
    let b = Pick {
        room: Some(1),
        portal: true,
    };
    assert!(s.pointer_at(a));
    assert!(!s.pointer_at(a));
    assert_eq!(s.hovered_zone(), Some("SERVICES"));
    assert_eq!(s.rooms()[0].hover, RoomHover::Hovered);

    assert!(s.pointer_at(b));
    assert!(s.is_portal_hovered());
    assert_eq!(s.rooms()[0].hover, RoomHover::Idle);
    assert_eq!(s.rooms()[1].hover, RoomHover::Hovered);

    assert!(s.pointer_left());
    assert_eq!(s.hovered_zone(), None);
    assert!(!s.is_portal_hovered());
    assert!(!s.pointer_left());
}

#[test]
fn accent_rail_eases_toward_hover_target() {
    let mut s = Studio::new(&NavTable::studio());
    s.pointer_at(Pick {
        room: Some(2),
        portal: false,
    });
    s.update(0.1);
    let room = &s.rooms()[2];
    let expected = ACCENT_IDLE + (ACCENT_HOVERED - ACCENT_IDLE) * ACCENT_LERP;
    assert!((room.accent_level - expected).abs() < 1e-6);
    assert_eq!(
        s.pose(room.accent_rail).emissive_intensity,
        Some(room.accent_level)
    );

    for i in 0..200 {
        s.update(0.1 + i as f32 * 0.016);
    }
    assert!((s.rooms()[2].accent_level - ACCENT_HOVERED).abs() < 1e-3);
    // untouched rooms stay idle
    assert!((s.rooms()[0].accent_level - ACCENT_IDLE).abs() < 1e-6);
}

#[test]
fn portal_click_requests_navigation() {
    let s = Studio::new(&NavTable::studio());
    let labs = room_index(&s, "LABS");
    let req = s
        .click(Pick {
            room: Some(labs),
            portal: true,
        })
        .unwrap();
    assert_eq!(req.zone, "LABS");
    assert_eq!(req.anchor, "#who-we-are");

    assert!(s
        .click(Pick {
            room: Some(labs),
            portal: false,
        })
        .is_none());
    assert!(s.click(Pick::default()).is_none());
}

#[test]
fn room_without_anchor_does_not_navigate() {
    let nav = NavTable::new([("SERVICES", "#services")]).unwrap();
    let s = Studio::new(&nav);
    let contact = room_index(&s, "CONTACT");
    assert!(s.rooms()[contact].anchor.is_none());
    assert!(s
        .click(Pick {
            room: Some(contact),
            portal: true,
        })
        .is_none());
}

#[test]
fn camera_starts_where_configured_and_clamps() {
    let mut cam = OrbitCamera::looking_from(CAMERA_START, Vec3::ZERO);
    assert!(close(cam.eye(), CAMERA_START));

    cam.zoom(100_000.0);
    assert_eq!(cam.distance, ORBIT_MAX_DISTANCE);
    cam.zoom(-100_000.0);
    assert_eq!(cam.distance, ORBIT_MIN_DISTANCE);

    cam.rotate(0.0, 100_000.0);
    assert_eq!(cam.polar, ORBIT_MIN_POLAR);
    cam.rotate(0.0, -100_000.0);
    assert_eq!(cam.polar, ORBIT_MAX_POLAR);
    // never below the floor
    assert!(cam.eye().y > cam.target.y);
}

#[test]
fn centre_ray_looks_at_target() {
    let cam = OrbitCamera::default();
    let ray = cam.ray(0.0, 0.0, 16.0 / 9.0);
    assert!(close(ray.origin, cam.eye()));
    let expected = (cam.target - cam.eye()).normalize();
    assert!(close(ray.dir, expected));
}

#[test]
fn pixel_to_ndc_corners() {
    assert_eq!(pixel_to_ndc(0.0, 0.0, 100.0, 50.0), (-1.0, 1.0));
    assert_eq!(pixel_to_ndc(100.0, 50.0, 100.0, 50.0), (1.0, -1.0));
    assert_eq!(pixel_to_ndc(50.0, 25.0, 100.0, 50.0), (0.0, 0.0));
}

#[test]
fn aabb_slab_test() {
    let b = Aabb::from_center_half(Vec3::ZERO, Vec3::ONE);
    let toward = Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        dir: Vec3::NEG_Z,
    };
    assert!((b.hit(&toward).unwrap() - 4.0).abs() < 1e-5);
    let away = Ray {
        origin: Vec3::new(0.0, 0.0, 5.0),
        dir: Vec3::Z,
    };
    assert!(b.hit(&away).is_none());
    let inside = Ray {
        origin: Vec3::ZERO,
        dir: Vec3::X,
    };
    assert_eq!(b.hit(&inside), Some(0.0));
}

#[test]
fn uniform_layouts_match_wgsl() {
    assert_eq!(std::mem::size_of::<LightPacked>(), 64);
    assert_eq!(std::mem::size_of::<GlobalUniforms>(), 480);
    assert_eq!(std::mem::size_of::<ObjectUniforms>(), 128);
}

#[test]
fn lights_pack_by_kind() {
    let lights = studio_lights();
    let dir = LightPacked::from_light(&lights[0]);
    assert_eq!(dir.position_kind[3], 0.0);
    let to_light = Vec3::new(dir.position_kind[0], dir.position_kind[1], dir.position_kind[2]);
    assert!(close(to_light, Vec3::new(6.0, 10.0, 6.0).normalize()));

    let spot = LightPacked::from_light(&lights[3]);
    assert_eq!(spot.position_kind[3], 2.0);
    assert!((spot.direction_cone[3] - 0.6f32.cos()).abs() < 1e-6);
    assert!((spot.params[0] - 0.3f32.cos()).abs() < 1e-6);
    assert!(spot.params[0] > spot.direction_cone[3]);

    let area = LightPacked::from_light(&lights[4]);
    assert_eq!(area.position_kind[3], 3.0);
}

#[test]
fn global_uniforms_cap_light_count() {
    let lights = studio_lights();
    let g = GlobalUniforms::new(Mat4::IDENTITY, Vec3::ONE, 2.5, &lights);
    assert_eq!(g.ambient[3], 5.0);
    assert_eq!(g.camera_pos, [1.0, 1.0, 1.0, 2.5]);

    let many: Vec<Light> = lights.iter().chain(lights.iter()).copied().collect();
    let g = GlobalUniforms::new(Mat4::IDENTITY, Vec3::ZERO, 0.0, &many);
    assert_eq!(g.ambient[3], studio::constants::MAX_LIGHTS as f32);
}

#[test]
fn object_uniforms_prefer_animated_emissive() {
    let surface = Surface::new("#ffffff", 0.4, 0.2).glowing("#ff0000", 0.2);
    let material = Material::Standard(surface);
    let pose = Pose {
        local: Transform::IDENTITY,
        emissive_intensity: Some(0.6),
    };
    let u = ObjectUniforms::new(&material, &pose, Mat4::IDENTITY, false);
    assert_eq!(u.emissive[3], 0.6);
    assert_eq!(u.surface, [0.4, 0.2, 0.0, 0.0]);

    let portal = Material::Portal {
        color: [0.1, 0.2, 0.3],
    };
    let u = ObjectUniforms::new(&portal, &pose, Mat4::IDENTITY, false);
    assert_eq!(u.color, [0.1, 0.2, 0.3, 1.0]);
    assert!(portal.is_transparent());
}
