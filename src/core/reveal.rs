use super::attrs::{attr_f64, attr_u32};

/// Observer ratios arrive as float32 from some engines.
const RATIO_EPSILON: f64 = 1e-3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TriggerMode {
    OnView { threshold: f64 },
    AfterDelay { delay_ms: u32 },
}

/// One-shot latch: false → true exactly once, never back.
#[derive(Clone, Copy, Debug, Default)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_revealed(&self) -> bool {
        self.fired
    }

    /// Feed one observer entry. Returns true only on the call that latches.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
        if self.fired || !is_intersecting {
            return false;
        }
        if ratio + RATIO_EPSILON < threshold {
            return false;
        }
        self.fired = true;
        true
    }

    /// Delay-mode firing; same once-only contract as `observe`.
    pub fn fire(&mut self) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RevealVariant {
    #[default]
    Up,
    Left,
    Right,
    Scale,
}

impl RevealVariant {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "left" => RevealVariant::Left,
            "right" => RevealVariant::Right,
            "scale" => RevealVariant::Scale,
            _ => RevealVariant::Up,
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            RevealVariant::Up => "scroll-reveal",
            RevealVariant::Left => "scroll-reveal-left",
            RevealVariant::Right => "scroll-reveal-right",
            RevealVariant::Scale => "scroll-reveal-scale",
        }
    }
}

pub const VISIBLE_CLASS: &str = "visible";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    pub variant: RevealVariant,
    pub delay_ms: u32,
    pub threshold: f64,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            variant: RevealVariant::Up,
            delay_ms: 0,
            threshold: 0.1,
        }
    }
}

impl RevealOptions {
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            variant: lookup("data-reveal")
                .map(|v| RevealVariant::parse(&v))
                .unwrap_or(d.variant),
            delay_ms: attr_u32(&lookup, "data-delay", d.delay_ms),
            threshold: attr_f64(&lookup, "data-threshold", d.threshold).clamp(0.0, 1.0),
        }
    }

    pub fn transition_delay_css(&self) -> String {
        format!("{}ms", self.delay_ms)
    }
}
