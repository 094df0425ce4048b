// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn bloom_tuning_is_within_bounds() {
    assert!(BLOOM_THRESHOLD > 0.0 && BLOOM_THRESHOLD < 1.0);
    assert!(BLOOM_STRENGTH > 0.0);
    assert!(BLOOM_RADIUS > 0.0);
    assert!(MIN_DEVICE_PIXEL_RATIO <= MAX_DEVICE_PIXEL_RATIO);
    assert!(MAX_LIGHTS >= 5);
}

#[test]
fn dpr_is_clamped() {
    assert_eq!(effective_dpr(3.0), MAX_DEVICE_PIXEL_RATIO);
    assert_eq!(effective_dpr(0.5), MIN_DEVICE_PIXEL_RATIO);
    assert_eq!(effective_dpr(1.5), 1.5);
    assert_eq!(effective_dpr(f64::NAN), MIN_DEVICE_PIXEL_RATIO);
    assert_eq!(effective_dpr(f64::INFINITY), MIN_DEVICE_PIXEL_RATIO);
}

#[test]
fn clear_color_is_linear_unit_range() {
    assert!(CLEAR_COLOR.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn primitive_selectors_are_data_attributes() {
    for sel in [
        TILT_SELECTOR,
        MAGNETIC_SELECTOR,
        REVEAL_SELECTOR,
        SCRAMBLE_SELECTOR,
        COUNT_UP_SELECTOR,
        NAV_SELECTOR,
        ZONE_NAV_SELECTOR,
        PARALLAX_SELECTOR,
        MENU_TOGGLE_SELECTOR,
    ] {
        assert!(sel.starts_with("[data-") && sel.ends_with(']'), "{}", sel);
    }
    assert_eq!(PARALLAX_SELECTOR, format!("[{}]", PARALLAX_ATTR));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn interaction_tuning_is_sane() {
    assert!(DRAG_CLICK_SLOP_PX > 0.0);
    assert!(UNLOCK_EVENTS.contains(&"click"));
    assert!(UNLOCK_EVENTS.contains(&"touchstart"));
    assert!(UNLOCK_EVENTS.contains(&"keydown"));
    assert!(PRIMER_SAMPLE_RATE >= 8000.0);
    assert!(BADGE_ZONE_PREFIX.ends_with(' '));
    assert_ne!(SOUND_ON_LABEL, SOUND_OFF_LABEL);
}
