use super::Mounted;
use crate::audio::{AudioEngine, SoundPlayer};
use crate::constants::{MUTED_CLASS, SOUND_OFF_LABEL, SOUND_ON_LABEL, SOUND_TOGGLE_ID};
use crate::core::sound::Sound;
use gloo::events::EventListener;
use std::rc::Rc;
use web_sys as web;

pub struct SoundToggleMount {
    _click: EventListener,
}

impl Mounted for SoundToggleMount {
    fn kind(&self) -> &'static str {
        "sound-toggle"
    }
}

fn reflect(button: &web::Element, on: bool) {
    _ = button.set_attribute("aria-label", if on { SOUND_ON_LABEL } else { SOUND_OFF_LABEL });
    _ = button.set_attribute("aria-pressed", if on { "true" } else { "false" });
    _ = button.class_list().toggle_with_force(MUTED_CLASS, !on);
}

/// The toggle plays its click through the gate before flipping it, so
/// muting is audible and unmuting is silent.
pub fn mount(document: &web::Document, audio: &Rc<AudioEngine>) -> Option<SoundToggleMount> {
    let button = document.get_element_by_id(SOUND_TOGGLE_ID)?;
    reflect(&button, audio.gate().is_on());
    let player = SoundPlayer::new(audio, true);
    let engine = audio.clone();
    let target = button.clone();
    let click = EventListener::new(&button, "click", move |_ev| {
        player.play(Sound::Toggle);
        let on = engine.gate().toggle();
        reflect(&target, on);
        log::info!("[audio] sound {}", if on { "on" } else { "off" });
    });
    Some(SoundToggleMount { _click: click })
}
