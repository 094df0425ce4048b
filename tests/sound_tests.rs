// Host-side tests for sound recipes and the audio unlock lifecycle.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod sound {
    include!("../src/core/sound.rs");
}

use sound::*;
use std::collections::HashSet;

#[test]
fn every_sound_has_a_playable_recipe() {
    for s in Sound::ALL {
        let recipe = s.recipe();
        assert!(!recipe.voices.is_empty(), "{} has no voices", s.name());
        assert!(recipe.duration() > 0.0);
        for v in &recipe.voices {
            assert!(v.stop > 0.0);
            // automation events are in time order and exponential ramps never target zero
            for steps in [&v.frequency, &v.gain] {
                assert!(steps.windows(2).all(|w| w[0].at() <= w[1].at()));
                for step in steps.iter() {
                    if let ParamStep::Exponential { value, .. } = step {
                        assert!(*value > 0.0);
                    }
                }
            }
        }
    }
}

#[test]
fn sound_names_are_unique() {
    let names: HashSet<_> = Sound::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(names.len(), Sound::ALL.len());
}

#[test]
fn click_is_a_short_falling_sine() {
    let r = Sound::Click.recipe();
    assert_eq!(r.voices.len(), 1);
    let v = &r.voices[0];
    assert_eq!(v.waveform, Waveform::Sine);
    assert_eq!(v.frequency[0].value(), 1200.0);
    assert_eq!(v.frequency[1].value(), 400.0);
    assert!((r.duration() - 0.08).abs() < 1e-9);
    assert_eq!(Sound::Toggle.recipe(), r);
}

#[test]
fn slide_sweeps_a_lowpass() {
    let r = Sound::Slide.recipe();
    let v = &r.voices[0];
    assert_eq!(v.waveform, Waveform::Sawtooth);
    let filter = v.lowpass.as_ref().expect("slide has a filter");
    assert_eq!(filter.frequency[0].value(), 800.0);
    assert_eq!(filter.frequency[1].value(), 2000.0);
}

#[test]
fn success_is_a_staggered_arpeggio() {
    let r = Sound::Success.recipe();
    assert_eq!(r.voices.len(), 3);
    let starts: Vec<f64> = r.voices.iter().map(|v| v.start).collect();
    assert!(starts.windows(2).all(|w| w[1] > w[0]));
    let pitches: Vec<f32> = r.voices.iter().map(|v| v.frequency[0].value()).collect();
    assert_eq!(pitches, vec![523.25, 659.25, 783.99]);
    assert!((r.duration() - 0.45).abs() < 1e-9);
}

#[test]
fn play_without_context_is_unavailable() {
    let mut life = AudioLifecycle::new();
    assert_eq!(life.plan_play(Sound::Click, true, true), PlayPlan::Unavailable);
    assert_eq!(life.plan_play(Sound::Click, false, true), PlayPlan::Suppressed);
}

#[test]
fn play_before_gesture_is_held_without_resuming() {
    let mut life = AudioLifecycle::new();
    life.context_created();

    // hover sounds fire before any click; they must not start a resume
    assert_eq!(
        life.plan_play(Sound::Hover, true, true),
        PlayPlan::Defer { start_unlock: false }
    );
    assert_eq!(
        life.plan_play(Sound::Enter, true, true),
        PlayPlan::Defer { start_unlock: false }
    );
    assert_eq!(life.state(), UnlockState::Locked);

    // the gesture issues the resume
    assert!(life.begin_unlock(true));
    assert_eq!(life.state(), UnlockState::Unlocking);

    // a click in the same gesture is held behind it
    assert_eq!(
        life.plan_play(Sound::Click, true, true),
        PlayPlan::Defer { start_unlock: false }
    );

    assert!(life.finish_unlock());
    assert!(life.is_unlocked());
    // only the latest held sound survives
    assert_eq!(life.take_deferred(), Some(Sound::Click));
    assert_eq!(life.take_deferred(), None);
    assert_eq!(life.plan_play(Sound::Click, true, false), PlayPlan::Now);
}

#[test]
fn every_gesture_reissues_resume_until_unlocked() {
    let mut life = AudioLifecycle::new();
    life.context_created();
    assert!(life.begin_unlock(true));
    // the first resume never settled; the next gesture tries again
    assert!(life.begin_unlock(true));
    assert!(life.begin_unlock(true));
    assert!(life.finish_unlock());
    assert!(!life.begin_unlock(false));
}

#[test]
fn running_context_unlocks_without_gesture() {
    let mut life = AudioLifecycle::new();
    life.context_created();
    assert_eq!(
        life.plan_play(Sound::Hover, true, false),
        PlayPlan::Defer { start_unlock: true }
    );
    assert!(life.finish_unlock());
    assert_eq!(life.take_deferred(), Some(Sound::Hover));
}

#[test]
fn unlock_happens_at_most_once() {
    let mut life = AudioLifecycle::new();
    life.context_created();
    assert!(life.begin_unlock(true));
    assert!(life.finish_unlock());

    // nothing to do while running
    assert!(!life.begin_unlock(false));

    // the browser suspended the context again: resume, but no second primer
    assert_eq!(
        life.plan_play(Sound::Click, true, true),
        PlayPlan::Defer { start_unlock: true }
    );
    assert!(!life.finish_unlock());
    assert_eq!(life.state(), UnlockState::Unlocked);
    assert_eq!(life.take_deferred(), Some(Sound::Click));
}

#[test]
fn rejected_resume_can_be_retried() {
    let mut life = AudioLifecycle::new();
    life.context_created();
    life.plan_play(Sound::Pop, true, true);
    assert!(life.begin_unlock(true));
    assert_eq!(life.abort_unlock(), Some(Sound::Pop));
    assert_eq!(life.state(), UnlockState::Locked);
    assert!(life.begin_unlock(true));
    assert!(life.finish_unlock());
    assert_eq!(life.take_deferred(), None);
}

#[test]
fn late_success_after_a_rejection_still_unlocks() {
    let mut life = AudioLifecycle::new();
    life.context_created();
    assert!(life.begin_unlock(true));
    assert!(life.begin_unlock(true));
    // the first resume rejects, the second succeeds
    life.abort_unlock();
    assert!(life.finish_unlock());
    assert!(life.is_unlocked());
}

#[test]
fn context_created_is_idempotent() {
    let mut life = AudioLifecycle::new();
    life.context_created();
    life.begin_unlock(true);
    life.finish_unlock();
    life.context_created();
    assert!(life.is_unlocked());
}

#[test]
fn gate_is_shared_between_clones() {
    let gate = SoundGate::default();
    let other = gate.clone();
    assert!(gate.is_on());
    assert!(!other.toggle());
    assert!(!gate.is_on());
    gate.set(true);
    assert!(other.is_on());
    assert!(!SoundGate::new(false).is_on());
}
