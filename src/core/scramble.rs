use super::attrs::{attr_bool, attr_f64, attr_u32};
use rand::Rng;

pub const SCRAMBLE_STEPS: u32 = 20;
pub const SCRAMBLE_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrambleOptions {
    pub duration_ms: f64,
    pub delay_ms: u32,
    pub trigger: bool,
}

impl Default for ScrambleOptions {
    fn default() -> Self {
        Self {
            duration_ms: 1500.0,
            delay_ms: 0,
            trigger: true,
        }
    }
}

impl ScrambleOptions {
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            duration_ms: attr_f64(&lookup, "data-duration", d.duration_ms).max(0.0),
            delay_ms: attr_u32(&lookup, "data-delay", d.delay_ms),
            trigger: attr_bool(&lookup, "data-trigger", d.trigger),
        }
    }

    /// Interval between steps; at least 1 ms so a zero duration still ticks.
    pub fn step_interval_ms(&self) -> u32 {
        ((self.duration_ms / SCRAMBLE_STEPS as f64).round() as u32).max(1)
    }
}

/// Number of leading characters already settled at `step`.
#[inline]
pub fn revealed_count(step: u32, len: usize) -> usize {
    let step = step.min(SCRAMBLE_STEPS) as usize;
    step * len / SCRAMBLE_STEPS as usize
}

/// Text shown at `step`: settled prefix, random tail, spaces kept in place.
pub fn scramble_frame<R: Rng>(target: &[char], step: u32, rng: &mut R) -> String {
    if step >= SCRAMBLE_STEPS {
        return target.iter().collect();
    }
    let revealed = revealed_count(step, target.len());
    target
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if c == ' ' || i < revealed {
                c
            } else {
                SCRAMBLE_ALPHABET[rng.gen_range(0..SCRAMBLE_ALPHABET.len())] as char
            }
        })
        .collect()
}

#[derive(Clone, Debug)]
pub struct Scrambler {
    target: Vec<char>,
    step: u32,
    scrambling: bool,
    display: String,
}

impl Scrambler {
    pub fn new(text: &str) -> Self {
        Self {
            target: text.chars().collect(),
            step: SCRAMBLE_STEPS,
            scrambling: false,
            display: text.to_string(),
        }
    }

    pub fn display_text(&self) -> &str {
        &self.display
    }

    pub fn is_scrambling(&self) -> bool {
        self.scrambling
    }

    /// Rewind to step 0. The caller owns interval cancellation.
    pub fn restart(&mut self) {
        self.step = 0;
        self.scrambling = true;
    }

    /// Render the current step and move on. Returns false once the target is settled.
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> bool {
        if !self.scrambling {
            return false;
        }
        self.step = (self.step + 1).min(SCRAMBLE_STEPS);
        self.display = scramble_frame(&self.target, self.step, rng);
        if self.step >= SCRAMBLE_STEPS {
            self.scrambling = false;
        }
        self.scrambling
    }
}
