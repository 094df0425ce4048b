// Sound recipes as plain data plus the context unlock state machine. The
// WebAudio layer turns a `SoundRecipe` into nodes; nothing here touches the browser.

use smallvec::{smallvec, SmallVec};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Sawtooth,
    Triangle,
}

/// One automation event on an audio parameter. `at` is seconds after the voice starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamStep {
    Set { value: f32, at: f64 },
    Linear { value: f32, at: f64 },
    Exponential { value: f32, at: f64 },
}

impl ParamStep {
    pub fn value(&self) -> f32 {
        match *self {
            ParamStep::Set { value, .. }
            | ParamStep::Linear { value, .. }
            | ParamStep::Exponential { value, .. } => value,
        }
    }

    pub fn at(&self) -> f64 {
        match *self {
            ParamStep::Set { at, .. } | ParamStep::Linear { at, .. } | ParamStep::Exponential { at, .. } => at,
        }
    }
}

pub type Automation = SmallVec<[ParamStep; 3]>;

#[derive(Clone, Debug, PartialEq)]
pub struct FilterSweep {
    pub frequency: Automation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Voice {
    pub waveform: Waveform,
    pub start: f64, // offset from the trigger time
    pub stop: f64,  // offset from the voice start
    pub frequency: Automation,
    pub gain: Automation,
    pub lowpass: Option<FilterSweep>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SoundRecipe {
    pub voices: SmallVec<[Voice; 3]>,
}

impl SoundRecipe {
    /// Latest stop time over all voices, relative to the trigger.
    pub fn duration(&self) -> f64 {
        self.voices
            .iter()
            .map(|v| v.start + v.stop)
            .fold(0.0, f64::max)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    Click,
    Hover,
    ButtonDown,
    ButtonUp,
    Slide,
    Success,
    Toggle,
    Pop,
    Open,
    Close,
    Enter,
}

impl Sound {
    pub const ALL: [Sound; 11] = [
        Sound::Click,
        Sound::Hover,
        Sound::ButtonDown,
        Sound::ButtonUp,
        Sound::Slide,
        Sound::Success,
        Sound::Toggle,
        Sound::Pop,
        Sound::Open,
        Sound::Close,
        Sound::Enter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Sound::Click => "click",
            Sound::Hover => "hover",
            Sound::ButtonDown => "button-down",
            Sound::ButtonUp => "button-up",
            Sound::Slide => "slide",
            Sound::Success => "success",
            Sound::Toggle => "toggle",
            Sound::Pop => "pop",
            Sound::Open => "open",
            Sound::Close => "close",
            Sound::Enter => "enter",
        }
    }

    pub fn recipe(self) -> SoundRecipe {
        match self {
            Sound::Click | Sound::Toggle => sweep(
                Waveform::Sine,
                (1200.0, 400.0, Ramp::Exp),
                (0.2, 0.01),
                0.08,
            ),
            Sound::Hover | Sound::Pop | Sound::Enter => sweep(
                Waveform::Triangle,
                (600.0, 300.0, Ramp::Exp),
                (0.1, 0.01),
                0.1,
            ),
            Sound::ButtonDown | Sound::Open => sweep(
                Waveform::Sine,
                (200.0, 150.0, Ramp::Linear),
                (0.15, 0.01),
                0.05,
            ),
            Sound::ButtonUp | Sound::Close => sweep(
                Waveform::Sine,
                (300.0, 400.0, Ramp::Linear),
                (0.12, 0.01),
                0.05,
            ),
            Sound::Slide => {
                let mut recipe = sweep(
                    Waveform::Sawtooth,
                    (100.0, 200.0, Ramp::Linear),
                    (0.08, 0.01),
                    0.15,
                );
                recipe.voices[0].lowpass = Some(FilterSweep {
                    frequency: smallvec![
                        ParamStep::Set { value: 800.0, at: 0.0 },
                        ParamStep::Linear { value: 2000.0, at: 0.15 },
                    ],
                });
                recipe
            }
            Sound::Success => SoundRecipe {
                voices: SUCCESS_ARPEGGIO
                    .iter()
                    .enumerate()
                    .map(|(i, &hz)| Voice {
                        waveform: Waveform::Sine,
                        start: i as f64 * 0.05,
                        stop: 0.35,
                        frequency: smallvec![ParamStep::Set { value: hz, at: 0.0 }],
                        gain: smallvec![
                            ParamStep::Set { value: 0.0, at: 0.0 },
                            ParamStep::Linear { value: 0.15, at: 0.02 },
                            ParamStep::Exponential { value: 0.01, at: 0.3 },
                        ],
                        lowpass: None,
                    })
                    .collect(),
            },
        }
    }
}

const SUCCESS_ARPEGGIO: [f32; 3] = [523.25, 659.25, 783.99]; // C5 E5 G5

#[derive(Clone, Copy)]
enum Ramp {
    Exp,
    Linear,
}

/// Single oscillator with a pitch glide and an exponential fade, both over `len` seconds.
fn sweep(waveform: Waveform, pitch: (f32, f32, Ramp), gain: (f32, f32), len: f64) -> SoundRecipe {
    let (from, to, ramp) = pitch;
    let glide = match ramp {
        Ramp::Exp => ParamStep::Exponential { value: to, at: len },
        Ramp::Linear => ParamStep::Linear { value: to, at: len },
    };
    SoundRecipe {
        voices: smallvec![Voice {
            waveform,
            start: 0.0,
            stop: len,
            frequency: smallvec![ParamStep::Set { value: from, at: 0.0 }, glide],
            gain: smallvec![
                ParamStep::Set { value: gain.0, at: 0.0 },
                ParamStep::Exponential { value: gain.1, at: len },
            ],
            lowpass: None,
        }],
    }
}

// ---------------- Unlock lifecycle ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum UnlockState {
    #[default]
    Uninitialized,
    Locked,
    Unlocking,
    Unlocked,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayPlan {
    /// Consumer disabled or globally muted; the context is never touched.
    Suppressed,
    /// No audio context could be created.
    Unavailable,
    Now,
    /// The sound is held until the context runs; `start_unlock` asks the caller
    /// to resume it now rather than wait for a gesture.
    Defer { start_unlock: bool },
}

/// Locked → Unlocked happens at most once. Before that, a suspended context is
/// only resumed from a user gesture; plays are held meanwhile and only the
/// latest one is kept.
#[derive(Clone, Copy, Debug, Default)]
pub struct AudioLifecycle {
    state: UnlockState,
    pending: Option<Sound>,
}

impl AudioLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UnlockState {
        self.state
    }

    pub fn is_unlocked(&self) -> bool {
        self.state == UnlockState::Unlocked
    }

    pub fn context_created(&mut self) {
        if self.state == UnlockState::Uninitialized {
            self.state = UnlockState::Locked;
        }
    }

    /// Gesture path. Returns true when the caller must call `resume()`; every
    /// gesture re-issues it until the context is unlocked and running.
    pub fn begin_unlock(&mut self, suspended: bool) -> bool {
        match self.state {
            UnlockState::Uninitialized => false,
            UnlockState::Unlocked => suspended,
            UnlockState::Locked | UnlockState::Unlocking => {
                self.state = UnlockState::Unlocking;
                true
            }
        }
    }

    /// A resume settled. Returns true on the first transition to Unlocked,
    /// which is when the silent primer buffer has to be played.
    pub fn finish_unlock(&mut self) -> bool {
        match self.state {
            UnlockState::Locked | UnlockState::Unlocking => {
                self.state = UnlockState::Unlocked;
                true
            }
            _ => false,
        }
    }

    /// A resume was rejected; a later gesture may try again. Returns the held
    /// sound, which is dropped.
    pub fn abort_unlock(&mut self) -> Option<Sound> {
        if self.state == UnlockState::Unlocking {
            self.state = UnlockState::Locked;
        }
        self.pending.take()
    }

    /// The held sound, if any, to play once the context runs.
    pub fn take_deferred(&mut self) -> Option<Sound> {
        self.pending.take()
    }

    pub fn plan_play(&mut self, sound: Sound, enabled: bool, suspended: bool) -> PlayPlan {
        if !enabled {
            return PlayPlan::Suppressed;
        }
        match self.state {
            UnlockState::Uninitialized => PlayPlan::Unavailable,
            UnlockState::Unlocked if !suspended => PlayPlan::Now,
            state => {
                self.pending = Some(sound);
                // A running context, or one the browser suspended after an
                // unlock, can be resumed outside a gesture.
                let resumable = state == UnlockState::Unlocked || !suspended;
                PlayPlan::Defer {
                    start_unlock: resumable && self.begin_unlock(suspended),
                }
            }
        }
    }
}

/// Site-wide mute shared by every sound consumer.
#[derive(Clone, Debug)]
pub struct SoundGate(Rc<Cell<bool>>);

impl Default for SoundGate {
    fn default() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl SoundGate {
    pub fn new(on: bool) -> Self {
        Self(Rc::new(Cell::new(on)))
    }

    pub fn is_on(&self) -> bool {
        self.0.get()
    }

    pub fn set(&self, on: bool) {
        self.0.set(on);
    }

    /// Flips the gate and returns the new value.
    pub fn toggle(&self) -> bool {
        let next = !self.0.get();
        self.0.set(next);
        next
    }
}
