// Render and post-processing tuning.
//
// Bloom numbers follow the studio look: only near-white highlights (emissive
// rails, ceiling strips, portal cores) should bleed.
// Bloom
pub const BLOOM_STRENGTH: f32 = 0.6;
pub const BLOOM_RADIUS: f32 = 0.5; // blur tap spread, in bloom-texel units per tap
pub const BLOOM_THRESHOLD: f32 = 0.85; // luminance cut for the bright pass

// Backbuffer
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;
pub const MIN_DEVICE_PIXEL_RATIO: f64 = 1.0;
pub const CLEAR_COLOR: [f64; 3] = [0.955, 0.947, 0.930]; // linear #faf9f6 section background

// Scene draw limits
pub const MAX_LIGHTS: usize = 6;

/// Clamp the device pixel ratio the way the studio canvas expects.
#[inline]
pub fn effective_dpr(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() {
        device_pixel_ratio.clamp(MIN_DEVICE_PIXEL_RATIO, MAX_DEVICE_PIXEL_RATIO)
    } else {
        MIN_DEVICE_PIXEL_RATIO
    }
}
