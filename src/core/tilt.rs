use super::attrs::{attr_bool, attr_f32, attr_u32};
use super::pointer::ElementRect;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltOptions {
    pub max_tilt: f32,    // degrees at the element edge
    pub perspective: f32, // px
    pub scale: f32,       // hover scale
    pub speed_ms: u32,    // transition duration
    pub glare: bool,
}

impl Default for TiltOptions {
    fn default() -> Self {
        Self {
            max_tilt: 15.0,
            perspective: 1000.0,
            scale: 1.02,
            speed_ms: 400,
            glare: true,
        }
    }
}

impl TiltOptions {
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            max_tilt: attr_f32(&lookup, "data-max-tilt", d.max_tilt),
            perspective: attr_f32(&lookup, "data-perspective", d.perspective),
            scale: attr_f32(&lookup, "data-scale", d.scale),
            speed_ms: attr_u32(&lookup, "data-speed", d.speed_ms),
            glare: attr_bool(&lookup, "data-glare", d.glare),
        }
    }
}

/// Rotation in degrees, glare position in percent of the element box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltState {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub scale: f32,
    pub glare_x: f32,
    pub glare_y: f32,
}

impl TiltState {
    pub const REST: TiltState = TiltState {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
        glare_x: 50.0,
        glare_y: 50.0,
    };

    /// Returns `None` for a zero-sized box so the caller leaves styles untouched.
    pub fn from_pointer(
        opts: &TiltOptions,
        rect: &ElementRect,
        client_x: f32,
        client_y: f32,
    ) -> Option<Self> {
        if rect.is_degenerate() {
            return None;
        }
        let (mx, my) = rect.local(client_x, client_y);
        let px = mx / rect.width;
        let py = my / rect.height;
        Some(Self {
            rotate_x: (py * 2.0 - 1.0) * -opts.max_tilt,
            rotate_y: (px * 2.0 - 1.0) * opts.max_tilt,
            scale: opts.scale,
            glare_x: px * 100.0,
            glare_y: py * 100.0,
        })
    }

    pub fn transform_css(&self, opts: &TiltOptions) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({s}, {s}, {s})",
            opts.perspective,
            self.rotate_x,
            self.rotate_y,
            s = self.scale
        )
    }

    pub fn glare_css(&self) -> String {
        format!(
            "radial-gradient(circle at {}% {}%, rgba(255,255,255,0.3) 0%, transparent 50%)",
            self.glare_x, self.glare_y
        )
    }
}

impl Default for TiltState {
    fn default() -> Self {
        Self::REST
    }
}

pub fn transition_css(opts: &TiltOptions, hovering: bool) -> String {
    let easing = if hovering { "ease-out" } else { "ease-in-out" };
    format!("transform {}ms {}", opts.speed_ms, easing)
}

pub fn glare_opacity(hovering: bool) -> &'static str {
    if hovering {
        "1"
    } else {
        "0"
    }
}
