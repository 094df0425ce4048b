// Element geometry shared by the tilt and magnetic effects, plus the drag
// gesture used by the studio canvas.

/// Viewport-space bounding box, re-read on every pointer event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Zero-area boxes come from detached or `display:none` elements.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Pointer position relative to the top-left corner.
    #[inline]
    pub fn local(&self, client_x: f32, client_y: f32) -> (f32, f32) {
        (client_x - self.left, client_y - self.top)
    }
}

/// Per-element pointer offset, reset to the origin on leave.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerOffset {
    pub x: f32,
    pub y: f32,
}

impl PointerOffset {
    pub const ORIGIN: PointerOffset = PointerOffset { x: 0.0, y: 0.0 };
}

/// Press-move-release tracking. A release within `slop` px of the press is a click.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragGesture {
    active: bool,
    last: (f32, f32),
    travelled: f32,
}

impl DragGesture {
    pub fn press(&mut self, x: f32, y: f32) {
        self.active = true;
        self.last = (x, y);
        self.travelled = 0.0;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Delta since the previous position while pressed, `None` otherwise.
    pub fn move_to(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        if !self.active {
            return None;
        }
        let d = (x - self.last.0, y - self.last.1);
        self.last = (x, y);
        self.travelled += (d.0 * d.0 + d.1 * d.1).sqrt();
        Some(d)
    }

    /// Ends the gesture; true when it should count as a click.
    pub fn release(&mut self, slop: f32) -> bool {
        let was_active = std::mem::replace(&mut self.active, false);
        was_active && self.travelled <= slop
    }

    pub fn cancel(&mut self) {
        self.active = false;
    }
}
