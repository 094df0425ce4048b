use super::{player_for, Mounted};
use crate::audio::{AudioEngine, SoundPlayer};
use crate::constants::MAGNETIC_INNER_SELECTOR;
use crate::core::magnetic::{Magnet, MagneticOptions};
use crate::core::sound::Sound;
use crate::dom::{attr_lookup, element_rect, set_style};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct MagneticMount {
    _listeners: Vec<EventListener>,
}

impl Mounted for MagneticMount {
    fn kind(&self) -> &'static str {
        "magnetic"
    }
}

#[derive(Clone)]
struct Parts {
    button: web::HtmlElement,
    label: Option<web::HtmlElement>,
    magnet: Rc<RefCell<Magnet>>,
    player: SoundPlayer,
}

impl Parts {
    fn render(&self) {
        let m = self.magnet.borrow();
        set_style(&self.button, "transform", &m.outer_transform_css());
        if let Some(label) = &self.label {
            set_style(label, "transform", &m.inner_transform_css());
        }
    }

    fn set_pressed(&self, pressed: bool) {
        self.magnet.borrow_mut().pressed = pressed;
        self.player
            .play(if pressed { Sound::ButtonDown } else { Sound::ButtonUp });
        self.render();
    }
}

fn listen(
    el: &web::HtmlElement,
    parts: &Parts,
    event: &'static str,
    f: impl Fn(&Parts, &web::Event) + 'static,
) -> EventListener {
    let p = parts.clone();
    EventListener::new(el, event, move |ev| f(&p, ev))
}

pub fn mount(el: &web::HtmlElement, audio: &Rc<AudioEngine>) -> MagneticMount {
    let label = el
        .query_selector(MAGNETIC_INNER_SELECTOR)
        .ok()
        .flatten()
        .and_then(|n| n.dyn_into::<web::HtmlElement>().ok());
    let parts = Parts {
        button: el.clone(),
        label,
        magnet: Rc::new(RefCell::new(Magnet::new(MagneticOptions::from_attrs(
            attr_lookup(el),
        )))),
        player: player_for(el, audio),
    };
    parts.render();

    let listeners = vec![
        listen(el, &parts, "pointermove", |p, ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let Some(rect) = element_rect(&p.button) else {
                return;
            };
            let moved = p
                .magnet
                .borrow_mut()
                .pointer_move(&rect, ev.client_x() as f32, ev.client_y() as f32);
            if moved {
                p.render();
            }
        }),
        listen(el, &parts, "pointerleave", |p, _| {
            p.magnet.borrow_mut().pointer_leave();
            p.render();
        }),
        listen(el, &parts, "pointerenter", |p, _| p.player.play(Sound::Hover)),
        listen(el, &parts, "pointerdown", |p, _| p.set_pressed(true)),
        listen(el, &parts, "pointerup", |p, _| p.set_pressed(false)),
        listen(el, &parts, "click", |p, _| p.player.play(Sound::Click)),
    ];

    MagneticMount {
        _listeners: listeners,
    }
}
