use crate::constants::{PRIMER_SAMPLE_RATE, UNLOCK_EVENTS};
use crate::core::sound::{
    AudioLifecycle, ParamStep, PlayPlan, Sound, SoundGate, SoundRecipe, Voice, Waveform,
};
use gloo::events::EventListener;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("could not create {node}: {detail}")]
    Node { node: &'static str, detail: String },
    #[error("could not schedule {what}: {detail}")]
    Schedule { what: &'static str, detail: String },
}

fn node_err(node: &'static str) -> impl FnOnce(JsValue) -> AudioError {
    move |e| AudioError::Node {
        node,
        detail: format!("{:?}", e),
    }
}

fn sched_err(what: &'static str) -> impl FnOnce(JsValue) -> AudioError {
    move |e| AudioError::Schedule {
        what,
        detail: format!("{:?}", e),
    }
}

/// Owns the page's single `AudioContext`. Created once at start-up and shared
/// by `Rc`; the context itself is only built on first use.
pub struct AudioEngine {
    ctx: RefCell<Option<web::AudioContext>>,
    ctx_failed: Cell<bool>,
    lifecycle: RefCell<AudioLifecycle>,
    unlock_listeners: RefCell<Vec<EventListener>>,
    gate: SoundGate,
    weak_self: Weak<AudioEngine>,
}

impl AudioEngine {
    pub fn new(gate: SoundGate) -> Rc<Self> {
        Rc::new_cyclic(|weak_self| Self {
            ctx: RefCell::new(None),
            ctx_failed: Cell::new(false),
            lifecycle: RefCell::new(AudioLifecycle::new()),
            unlock_listeners: RefCell::new(Vec::new()),
            gate,
            weak_self: weak_self.clone(),
        })
    }

    pub fn gate(&self) -> &SoundGate {
        &self.gate
    }

    pub fn is_unlocked(&self) -> bool {
        self.lifecycle.borrow().is_unlocked()
    }

    fn context(&self) -> Option<web::AudioContext> {
        if let Some(ctx) = self.ctx.borrow().as_ref() {
            return Some(ctx.clone());
        }
        if self.ctx_failed.get() {
            return None;
        }
        match web::AudioContext::new() {
            Ok(ctx) => {
                *self.ctx.borrow_mut() = Some(ctx.clone());
                self.lifecycle.borrow_mut().context_created();
                log::info!("[audio] context created ({:?})", ctx.state());
                Some(ctx)
            }
            Err(e) => {
                self.ctx_failed.set(true);
                log::warn!("[audio] AudioContext unavailable: {:?}", e);
                None
            }
        }
    }

    /// Registers the gesture listeners. They stay until the context unlocks.
    pub fn install_unlock_listeners(&self, document: &web::Document) {
        let mut listeners = self.unlock_listeners.borrow_mut();
        for event in UNLOCK_EVENTS {
            let weak = self.weak_self.clone();
            listeners.push(EventListener::new(document, event, move |_ev| {
                if let Some(engine) = weak.upgrade() {
                    engine.unlock();
                }
            }));
        }
    }

    /// Resume the context from a user gesture and prime it with a silent
    /// buffer. Every gesture re-issues the resume until it succeeds.
    pub fn unlock(&self) {
        let Some(ctx) = self.context() else {
            return;
        };
        let suspended = ctx.state() != web::AudioContextState::Running;
        if !self.lifecycle.borrow_mut().begin_unlock(suspended) {
            if self.is_unlocked() {
                self.drop_unlock_listeners();
            }
            return;
        }
        self.resume(ctx, suspended);
    }

    fn resume(&self, ctx: web::AudioContext, suspended: bool) {
        if !suspended {
            self.unlock_settled(&ctx, true);
            return;
        }
        let promise = match ctx.resume() {
            Ok(p) => p,
            Err(e) => {
                log::warn!("[audio] resume failed: {:?}", e);
                self.unlock_settled(&ctx, false);
                return;
            }
        };
        let weak = self.weak_self.clone();
        spawn_local(async move {
            let ok = match JsFuture::from(promise).await {
                Ok(_) => true,
                Err(e) => {
                    log::warn!("[audio] resume rejected: {:?}", e);
                    false
                }
            };
            if let Some(engine) = weak.upgrade() {
                engine.unlock_settled(&ctx, ok);
            }
        });
    }

    fn unlock_settled(&self, ctx: &web::AudioContext, ok: bool) {
        if !ok {
            let dropped = self.lifecycle.borrow_mut().abort_unlock();
            if let Some(sound) = dropped {
                log::warn!("[audio] dropped deferred {}", sound.name());
            }
            return;
        }
        let first = self.lifecycle.borrow_mut().finish_unlock();
        if first {
            if let Err(e) = play_primer(ctx) {
                log::warn!("[audio] primer: {}", e);
            }
            log::info!("[audio] unlocked");
            self.drop_unlock_listeners();
        }
        let deferred = self.lifecycle.borrow_mut().take_deferred();
        if let Some(sound) = deferred {
            self.synthesize_logged(ctx, sound);
        }
    }

    fn drop_unlock_listeners(&self) {
        // Listeners may be the caller; defer the drop past the current dispatch.
        let listeners = self.unlock_listeners.take();
        if listeners.is_empty() {
            return;
        }
        spawn_local(async move {
            drop(listeners);
        });
    }

    /// Plays `sound` when both the consumer flag and the site-wide gate allow it.
    pub fn play(&self, sound: Sound, enabled: bool) {
        if !(enabled && self.gate.is_on()) {
            return;
        }
        let Some(ctx) = self.context() else {
            return;
        };
        let suspended = ctx.state() != web::AudioContextState::Running;
        let plan = self.lifecycle.borrow_mut().plan_play(sound, true, suspended);
        match plan {
            PlayPlan::Suppressed | PlayPlan::Unavailable => {}
            PlayPlan::Now => self.synthesize_logged(&ctx, sound),
            PlayPlan::Defer { start_unlock: true } => self.resume(ctx, suspended),
            PlayPlan::Defer { start_unlock: false } => {}
        }
    }

    fn synthesize_logged(&self, ctx: &web::AudioContext, sound: Sound) {
        if let Err(e) = synthesize(ctx, &sound.recipe()) {
            log::warn!("[audio] {}: {}", sound.name(), e);
        }
    }
}

/// Per-consumer handle: the engine plus that consumer's own enable flag.
#[derive(Clone)]
pub struct SoundPlayer {
    engine: Rc<AudioEngine>,
    enabled: bool,
}

impl SoundPlayer {
    pub fn new(engine: &Rc<AudioEngine>, enabled: bool) -> Self {
        Self {
            engine: engine.clone(),
            enabled,
        }
    }

    pub fn play(&self, sound: Sound) {
        self.engine.play(sound, self.enabled);
    }
}

fn oscillator_type(w: Waveform) -> web::OscillatorType {
    match w {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Sawtooth => web::OscillatorType::Sawtooth,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

fn automate(param: &web::AudioParam, steps: &[ParamStep], t0: f64) -> Result<(), AudioError> {
    for step in steps {
        let at = t0 + step.at();
        match *step {
            ParamStep::Set { value, .. } => param
                .set_value_at_time(value, at)
                .map_err(sched_err("set value"))?,
            ParamStep::Linear { value, .. } => param
                .linear_ramp_to_value_at_time(value, at)
                .map_err(sched_err("linear ramp"))?,
            ParamStep::Exponential { value, .. } => param
                .exponential_ramp_to_value_at_time(value, at)
                .map_err(sched_err("exponential ramp"))?,
        };
    }
    Ok(())
}

fn schedule_voice(ctx: &web::AudioContext, voice: &Voice, now: f64) -> Result<(), AudioError> {
    let t0 = now + voice.start;
    let osc = web::OscillatorNode::new(ctx).map_err(node_err("OscillatorNode"))?;
    osc.set_type(oscillator_type(voice.waveform));
    automate(&osc.frequency(), &voice.frequency, t0)?;

    let gain = web::GainNode::new(ctx).map_err(node_err("GainNode"))?;
    automate(&gain.gain(), &voice.gain, t0)?;

    match &voice.lowpass {
        Some(sweep) => {
            let filter = web::BiquadFilterNode::new(ctx).map_err(node_err("BiquadFilterNode"))?;
            filter.set_type(web::BiquadFilterType::Lowpass);
            automate(&filter.frequency(), &sweep.frequency, t0)?;
            osc.connect_with_audio_node(&filter)
                .map_err(sched_err("connect"))?;
            filter
                .connect_with_audio_node(&gain)
                .map_err(sched_err("connect"))?;
        }
        None => {
            osc.connect_with_audio_node(&gain)
                .map_err(sched_err("connect"))?;
        }
    }
    gain.connect_with_audio_node(&ctx.destination())
        .map_err(sched_err("connect"))?;
    osc.start_with_when(t0).map_err(sched_err("start"))?;
    osc.stop_with_when(t0 + voice.stop)
        .map_err(sched_err("stop"))?;
    Ok(())
}

/// Fresh nodes for every call; they are released by the browser after `stop`.
fn synthesize(ctx: &web::AudioContext, recipe: &SoundRecipe) -> Result<(), AudioError> {
    let now = ctx.current_time();
    for voice in &recipe.voices {
        schedule_voice(ctx, voice, now)?;
    }
    Ok(())
}

/// One silent sample; iOS only considers the context unlocked after playback.
fn play_primer(ctx: &web::AudioContext) -> Result<(), AudioError> {
    let buffer = ctx
        .create_buffer(1, 1, PRIMER_SAMPLE_RATE)
        .map_err(node_err("AudioBuffer"))?;
    let src = web::AudioBufferSourceNode::new(ctx).map_err(node_err("AudioBufferSourceNode"))?;
    src.set_buffer(Some(&buffer));
    src.connect_with_audio_node(&ctx.destination())
        .map_err(sched_err("connect"))?;
    src.start_with_when(0.0).map_err(sched_err("start"))?;
    Ok(())
}
