// Page chrome math: scroll progress bar, parallax layers and the cursor glow.

pub const NAV_SCROLLED_AFTER_PX: f64 = 50.0;
pub const GLOW_DIM_AFTER_PERCENT: f64 = 5.0;
pub const GLOW_OPACITY_TOP: f64 = 0.8;
pub const GLOW_OPACITY_SCROLLED: f64 = 0.5;

/// Percentage of the scrollable distance covered, 0..=100.
pub fn scroll_progress_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range * 100.0).clamp(0.0, 100.0)
}

#[inline]
pub fn parallax_offset_px(progress_percent: f64, factor: f64) -> f64 {
    progress_percent * factor
}

pub fn parallax_transform_css(progress_percent: f64, factor: f64) -> String {
    format!(
        "translateY({}px)",
        parallax_offset_px(progress_percent, factor)
    )
}

#[inline]
pub fn cursor_glow_opacity(progress_percent: f64) -> f64 {
    if progress_percent > GLOW_DIM_AFTER_PERCENT {
        GLOW_OPACITY_SCROLLED
    } else {
        GLOW_OPACITY_TOP
    }
}

#[inline]
pub fn is_nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_AFTER_PX
}
