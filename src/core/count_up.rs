use super::attrs::{attr_bool, attr_f64, attr_string, attr_u32};

/// Exponential ease-out with an exact landing at 1.
#[inline]
pub fn ease_out_expo(progress: f64) -> f64 {
    if progress >= 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * progress)
    }
}

/// Elapsed fraction of the animation; a non-positive duration completes at once.
#[inline]
pub fn progress_at(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountUpOptions {
    pub end: f64,
    pub duration_ms: f64,
    pub delay_ms: u32,
    pub decimals: usize,
    pub prefix: String,
    pub suffix: String,
    pub start_on_view: bool,
}

impl Default for CountUpOptions {
    fn default() -> Self {
        Self {
            end: 0.0,
            duration_ms: 2000.0,
            delay_ms: 0,
            decimals: 0,
            prefix: String::new(),
            suffix: String::new(),
            start_on_view: true,
        }
    }
}

impl CountUpOptions {
    pub fn from_attrs(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();
        Self {
            end: attr_f64(&lookup, "data-count-up", d.end),
            duration_ms: attr_f64(&lookup, "data-duration", d.duration_ms),
            delay_ms: attr_u32(&lookup, "data-delay", d.delay_ms),
            decimals: attr_u32(&lookup, "data-decimals", d.decimals as u32).min(20) as usize,
            prefix: attr_string(&lookup, "data-prefix"),
            suffix: attr_string(&lookup, "data-suffix"),
            start_on_view: attr_bool(&lookup, "data-start-on-view", d.start_on_view),
        }
    }
}

pub const COUNT_UP_VIEW_THRESHOLD: f64 = 0.5;

/// Count-up driven by animation-frame timestamps (ms).
#[derive(Clone, Debug)]
pub struct CountUp {
    opts: CountUpOptions,
    started_at: Option<f64>,
    value: f64,
    has_started: bool,
    finished: bool,
}

impl CountUp {
    pub fn new(opts: CountUpOptions) -> Self {
        Self {
            opts,
            started_at: None,
            value: 0.0,
            has_started: false,
            finished: false,
        }
    }

    pub fn options(&self) -> &CountUpOptions {
        &self.opts
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn has_started(&self) -> bool {
        self.has_started
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Latches the start flag; returns false when already started.
    pub fn start(&mut self) -> bool {
        if self.has_started {
            return false;
        }
        self.has_started = true;
        true
    }

    /// Advance to frame timestamp `now_ms`. Returns true while more frames are wanted.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if !self.has_started || self.finished {
            return false;
        }
        let start = *self.started_at.get_or_insert(now_ms);
        let progress = progress_at(now_ms - start, self.opts.duration_ms);
        let next = self.opts.end * ease_out_expo(progress);
        // Frame timestamps can repeat or jitter; the displayed value never goes back.
        if (self.opts.end >= 0.0 && next > self.value) || (self.opts.end < 0.0 && next < self.value)
        {
            self.value = next;
        }
        if progress >= 1.0 {
            self.value = self.opts.end;
            self.finished = true;
        }
        !self.finished
    }

    pub fn formatted(&self) -> String {
        format_count(
            self.value,
            self.opts.decimals,
            &self.opts.prefix,
            &self.opts.suffix,
        )
    }
}

pub fn format_count(value: f64, decimals: usize, prefix: &str, suffix: &str) -> String {
    format!("{}{:.*}{}", prefix, decimals, value, suffix)
}
