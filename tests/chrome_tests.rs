// Host-side tests for page chrome math and the zone → anchor table.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod studio {
    pub mod nav {
        include!("../src/core/nav.rs");
    }
    pub mod scroll {
        include!("../src/core/scroll.rs");
    }
}

use studio::nav::*;
use studio::scroll::*;

#[test]
fn scroll_progress_is_clamped_percent() {
    assert_eq!(scroll_progress_percent(0.0, 2000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress_percent(500.0, 2000.0, 1000.0), 50.0);
    assert_eq!(scroll_progress_percent(1000.0, 2000.0, 1000.0), 100.0);
    // overscroll on touch devices
    assert_eq!(scroll_progress_percent(1200.0, 2000.0, 1000.0), 100.0);
    assert_eq!(scroll_progress_percent(-40.0, 2000.0, 1000.0), 0.0);
}

#[test]
fn short_pages_report_no_progress() {
    assert_eq!(scroll_progress_percent(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress_percent(10.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn parallax_scales_with_progress() {
    assert_eq!(parallax_offset_px(50.0, -0.5), -25.0);
    assert_eq!(parallax_transform_css(50.0, -0.5), "translateY(-25px)");
    assert_eq!(parallax_transform_css(0.0, 2.0), "translateY(0px)");
}

#[test]
fn glow_dims_once_scrolled() {
    assert_eq!(cursor_glow_opacity(0.0), GLOW_OPACITY_TOP);
    assert_eq!(cursor_glow_opacity(5.0), GLOW_OPACITY_TOP);
    assert_eq!(cursor_glow_opacity(5.5), GLOW_OPACITY_SCROLLED);
}

#[test]
fn nav_gets_scrolled_past_threshold() {
    assert!(!is_nav_scrolled(0.0));
    assert!(!is_nav_scrolled(50.0));
    assert!(is_nav_scrolled(51.0));
}

#[test]
fn studio_table_maps_every_zone() {
    let table = NavTable::studio();
    assert_eq!(table.len(), 5);
    assert_eq!(table.anchor_for("SERVICES"), Some("#services"));
    assert_eq!(table.anchor_for("CASE STUDIES"), Some("#showcases"));
    assert_eq!(table.anchor_for("LABS"), Some("#who-we-are"));
    assert_eq!(table.anchor_for("CONTACT"), Some("#contact"));
    assert_eq!(table.anchor_for("ELSEWHERE"), None);
    assert_eq!(
        table.zones().collect::<Vec<_>>(),
        vec!["SERVICES", "CASE STUDIES", "LABS", "STORIES", "CONTACT"]
    );
}

#[test]
fn studio_table_passes_validation() {
    let rebuilt = NavTable::new(STUDIO_ZONES).unwrap();
    assert_eq!(rebuilt, NavTable::studio());
}

#[test]
fn table_rejects_duplicates_and_bad_anchors() {
    assert_eq!(
        NavTable::new([("A", "#a"), ("A", "#b")]),
        Err(NavTableError::DuplicateZone("A".to_string()))
    );
    assert_eq!(
        NavTable::new([("A", "#a"), ("B", "#a")]),
        Err(NavTableError::DuplicateAnchor("#a".to_string()))
    );
    assert_eq!(
        NavTable::new([("A", "contact")]),
        Err(NavTableError::BadAnchor("contact".to_string()))
    );
    assert_eq!(
        NavTable::new([("A", "#")]),
        Err(NavTableError::BadAnchor("#".to_string()))
    );
    let empty: [(&str, &str); 0] = [];
    assert!(NavTable::new(empty).unwrap().is_empty());
}
