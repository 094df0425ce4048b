use super::attrs::attr_f32;
use super::pointer::{ElementRect, PointerOffset};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagneticOptions {
    pub strength: f32,
    pub radius: f32, // px from the element centre
}

impl Default for MagneticOptions {
    fn default() -> Self {
        Self {
            strength: 0.3,
            radius: 100.0,
        }
    }
}

impl MagneticOptions {
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            strength: attr_f32(&lookup, "data-strength", d.strength),
            radius: attr_f32(&lookup, "data-radius", d.radius),
        }
    }
}

/// Pull toward the pointer, attenuated linearly to zero at `radius`.
/// `None` means "outside the field": the previous offset is kept, not reset.
pub fn magnetic_pull(
    opts: &MagneticOptions,
    rect: &ElementRect,
    client_x: f32,
    client_y: f32,
) -> Option<PointerOffset> {
    if rect.is_degenerate() || opts.radius <= 0.0 {
        return None;
    }
    let (cx, cy) = rect.center();
    let dx = client_x - cx;
    let dy = client_y - cy;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance >= opts.radius {
        return None;
    }
    let falloff = (opts.radius - distance) / opts.radius;
    Some(PointerOffset {
        x: dx * opts.strength * falloff,
        y: dy * opts.strength * falloff,
    })
}

pub const PRESSED_SCALE: f32 = 0.95;
pub const LABEL_FOLLOW: f32 = 0.5;

/// Button-level state: offset plus press feedback.
#[derive(Clone, Copy, Debug, Default)]
pub struct Magnet {
    pub opts: MagneticOptions,
    pub offset: PointerOffset,
    pub pressed: bool,
}

impl Magnet {
    pub fn new(opts: MagneticOptions) -> Self {
        Self {
            opts,
            offset: PointerOffset::ORIGIN,
            pressed: false,
        }
    }

    /// Returns true when the offset changed and styles need rewriting.
    pub fn pointer_move(&mut self, rect: &ElementRect, client_x: f32, client_y: f32) -> bool {
        match magnetic_pull(&self.opts, rect, client_x, client_y) {
            Some(offset) => {
                self.offset = offset;
                true
            }
            None => false,
        }
    }

    pub fn pointer_leave(&mut self) {
        self.offset = PointerOffset::ORIGIN;
        self.pressed = false;
    }

    pub fn outer_transform_css(&self) -> String {
        let s = if self.pressed { PRESSED_SCALE } else { 1.0 };
        format!(
            "translate({}px, {}px) scale({})",
            self.offset.x, self.offset.y, s
        )
    }

    pub fn inner_transform_css(&self) -> String {
        format!(
            "translate({}px, {}px)",
            self.offset.x * LABEL_FOLLOW,
            self.offset.y * LABEL_FOLLOW
        )
    }
}
