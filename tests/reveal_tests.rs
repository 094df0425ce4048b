// Host-side tests for the one-shot reveal latch and its options.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod studio {
    pub mod attrs {
        include!("../src/core/attrs.rs");
    }
    pub mod reveal {
        include!("../src/core/reveal.rs");
    }
}

use studio::reveal::*;

#[test]
fn latch_fires_once_across_reentry() {
    let mut latch = RevealLatch::new();
    assert!(!latch.observe(false, 0.0, 0.1));
    assert!(latch.observe(true, 0.4, 0.1));
    assert!(latch.is_revealed());
    // leaving and coming back never fires again
    assert!(!latch.observe(false, 0.0, 0.1));
    assert!(!latch.observe(true, 1.0, 0.1));
    assert!(!latch.fire());
    assert!(latch.is_revealed());
}

#[test]
fn latch_respects_threshold_with_float_slack() {
    let mut latch = RevealLatch::new();
    assert!(!latch.observe(true, 0.05, 0.1));
    assert!(!latch.is_revealed());
    assert!(latch.observe(true, 0.0999, 0.1));
}

#[test]
fn intersecting_flag_is_required() {
    let mut latch = RevealLatch::new();
    assert!(!latch.observe(false, 1.0, 0.1));
    assert!(!latch.is_revealed());
}

#[test]
fn delay_mode_fires_once() {
    let mut latch = RevealLatch::new();
    assert!(latch.fire());
    assert!(!latch.fire());
}

#[test]
fn variants_map_to_classes() {
    assert_eq!(RevealVariant::parse("left"), RevealVariant::Left);
    assert_eq!(RevealVariant::parse(" right "), RevealVariant::Right);
    assert_eq!(RevealVariant::parse("scale"), RevealVariant::Scale);
    assert_eq!(RevealVariant::parse(""), RevealVariant::Up);
    assert_eq!(RevealVariant::parse("sideways"), RevealVariant::Up);
    assert_eq!(RevealVariant::Up.class_name(), "scroll-reveal");
    assert_eq!(RevealVariant::Scale.class_name(), "scroll-reveal-scale");
}

#[test]
fn options_parse_and_clamp() {
    let opts = RevealOptions::from_attrs(|name| match name {
        "data-reveal" => Some("left".to_string()),
        "data-delay" => Some("150".to_string()),
        "data-threshold" => Some("2".to_string()),
        _ => None,
    });
    assert_eq!(opts.variant, RevealVariant::Left);
    assert_eq!(opts.threshold, 1.0);
    assert_eq!(opts.transition_delay_css(), "150ms");

    let defaults = RevealOptions::from_attrs(|_| None);
    assert_eq!(defaults, RevealOptions::default());
    assert_eq!(defaults.threshold, 0.1);
}
