// Host-side tests for the tilt and magnetic pointer effects.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod studio {
    pub mod attrs {
        include!("../src/core/attrs.rs");
    }
    pub mod pointer {
        include!("../src/core/pointer.rs");
    }
    pub mod tilt {
        include!("../src/core/tilt.rs");
    }
    pub mod magnetic {
        include!("../src/core/magnetic.rs");
    }
}

use std::collections::HashMap;
use studio::attrs::*;
use studio::magnetic::*;
use studio::pointer::*;
use studio::tilt::*;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn attr_bool_reads_bare_and_spelled_values() {
    let lookup = attrs(&[("data-a", ""), ("data-b", "false"), ("data-c", "maybe")]);
    assert!(attr_bool(&lookup, "data-a", false));
    assert!(!attr_bool(&lookup, "data-b", true));
    assert!(attr_bool(&lookup, "data-c", true));
    assert!(!attr_bool(&lookup, "data-missing", false));
}

#[test]
fn attr_numbers_fall_back_on_garbage() {
    let lookup = attrs(&[("data-x", "abc"), ("data-y", "inf"), ("data-z", " 12.5 ")]);
    assert_eq!(attr_f64(&lookup, "data-x", 3.0), 3.0);
    assert_eq!(attr_f64(&lookup, "data-y", 3.0), 3.0);
    assert_eq!(attr_f64(&lookup, "data-z", 3.0), 12.5);
    assert_eq!(attr_u32(&lookup, "data-x", 7), 7);
}

#[test]
fn tilt_options_parse_with_defaults() {
    let opts = TiltOptions::from_attrs(attrs(&[("data-glare", ""), ("data-max-tilt", "nope")]));
    assert!(opts.glare);
    assert_eq!(opts.max_tilt, 15.0);
    assert_eq!(opts.perspective, 1000.0);
    assert_eq!(opts.speed_ms, 400);
}

#[test]
fn tilt_cards_have_glare_unless_opted_out() {
    assert!(TiltOptions::from_attrs(attrs(&[])).glare);
    assert!(!TiltOptions::from_attrs(attrs(&[("data-glare", "false")])).glare);
}

#[test]
fn tilt_is_flat_at_centre() {
    let opts = TiltOptions::default();
    let rect = ElementRect::new(10.0, 20.0, 200.0, 100.0);
    let s = TiltState::from_pointer(&opts, &rect, 110.0, 70.0).unwrap();
    assert!(approx(s.rotate_x, 0.0));
    assert!(approx(s.rotate_y, 0.0));
    assert!(approx(s.glare_x, 50.0));
    assert!(approx(s.glare_y, 50.0));
    assert_eq!(s.scale, opts.scale);
}

#[test]
fn tilt_leans_toward_the_pointer() {
    let opts = TiltOptions::default();
    let rect = ElementRect::new(0.0, 0.0, 200.0, 100.0);

    let right = TiltState::from_pointer(&opts, &rect, 200.0, 50.0).unwrap();
    assert!(approx(right.rotate_y, opts.max_tilt));
    assert!(approx(right.rotate_x, 0.0));

    let top = TiltState::from_pointer(&opts, &rect, 100.0, 0.0).unwrap();
    assert!(approx(top.rotate_x, opts.max_tilt));
    assert!(approx(top.glare_y, 0.0));
}

#[test]
fn tilt_ignores_degenerate_rects() {
    let opts = TiltOptions::default();
    let rect = ElementRect::new(0.0, 0.0, 0.0, 40.0);
    assert!(TiltState::from_pointer(&opts, &rect, 0.0, 0.0).is_none());
}

#[test]
fn tilt_css_strings() {
    let opts = TiltOptions::default();
    assert_eq!(
        TiltState::REST.transform_css(&opts),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) scale3d(1, 1, 1)"
    );
    assert_eq!(transition_css(&opts, true), "transform 400ms ease-out");
    assert_eq!(transition_css(&opts, false), "transform 400ms ease-in-out");
    assert_eq!(glare_opacity(true), "1");
    assert_eq!(glare_opacity(false), "0");
    assert!(TiltState::REST.glare_css().contains("circle at 50% 50%"));
}

#[test]
fn magnetic_pull_falls_off_linearly() {
    let opts = MagneticOptions::default();
    let rect = ElementRect::new(0.0, 0.0, 100.0, 100.0);

    let centre = magnetic_pull(&opts, &rect, 50.0, 50.0).unwrap();
    assert_eq!(centre, PointerOffset::ORIGIN);

    let near = magnetic_pull(&opts, &rect, 60.0, 50.0).unwrap();
    assert!(approx(near.x, 10.0 * 0.3 * 0.9));
    assert!(approx(near.y, 0.0));
}

#[test]
fn magnetic_pull_outside_radius_is_none() {
    let opts = MagneticOptions::default();
    let rect = ElementRect::new(0.0, 0.0, 100.0, 100.0);
    assert!(magnetic_pull(&opts, &rect, 150.0, 50.0).is_none());
    assert!(magnetic_pull(&opts, &rect, 250.0, 250.0).is_none());
}

#[test]
fn magnet_keeps_offset_outside_field_until_leave() {
    let rect = ElementRect::new(0.0, 0.0, 100.0, 100.0);
    let mut m = Magnet::new(MagneticOptions::default());
    assert!(m.pointer_move(&rect, 70.0, 50.0));
    let held = m.offset;
    assert!(held.x > 0.0);

    assert!(!m.pointer_move(&rect, 400.0, 50.0));
    assert_eq!(m.offset, held);

    m.pressed = true;
    m.pointer_leave();
    assert_eq!(m.offset, PointerOffset::ORIGIN);
    assert!(!m.pressed);
}

#[test]
fn magnet_css_reflects_press_and_label_follow() {
    let mut m = Magnet::new(MagneticOptions::default());
    m.offset = PointerOffset { x: 4.0, y: -2.0 };
    assert_eq!(m.outer_transform_css(), "translate(4px, -2px) scale(1)");
    assert_eq!(m.inner_transform_css(), "translate(2px, -1px)");
    m.pressed = true;
    assert_eq!(m.outer_transform_css(), "translate(4px, -2px) scale(0.95)");
}

#[test]
fn drag_gesture_separates_clicks_from_drags() {
    let mut g = DragGesture::default();
    assert_eq!(g.move_to(5.0, 5.0), None);

    g.press(10.0, 10.0);
    assert_eq!(g.move_to(12.0, 10.0), Some((2.0, 0.0)));
    assert!(g.release(4.0));
    assert!(!g.is_active());

    g.press(0.0, 0.0);
    g.move_to(30.0, 40.0);
    assert!(!g.release(4.0));

    g.press(0.0, 0.0);
    g.cancel();
    assert!(!g.release(4.0));
}
