use super::{player_for, Mounted};
use crate::audio::AudioEngine;
use crate::constants::GLARE_CLASS;
use crate::core::sound::Sound;
use crate::core::tilt::{glare_opacity, transition_css, TiltOptions, TiltState};
use crate::dom::{attr_lookup, element_rect, set_style};
use gloo::events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct TiltMount {
    _listeners: Vec<EventListener>,
}

impl Mounted for TiltMount {
    fn kind(&self) -> &'static str {
        "tilt"
    }
}

fn apply(el: &web::HtmlElement, glare: Option<&web::HtmlElement>, opts: &TiltOptions, s: &TiltState) {
    set_style(el, "transform", &s.transform_css(opts));
    if let Some(g) = glare {
        set_style(g, "background", &s.glare_css());
    }
}

fn create_glare(el: &web::HtmlElement) -> Option<web::HtmlElement> {
    let doc = el.owner_document()?;
    let glare = doc.create_element("div").ok()?.dyn_into::<web::HtmlElement>().ok()?;
    glare.set_class_name(GLARE_CLASS);
    for (k, v) in [
        ("position", "absolute"),
        ("inset", "0"),
        ("pointer-events", "none"),
        ("border-radius", "inherit"),
        ("opacity", "0"),
        ("transition", "opacity 0.3s"),
    ] {
        set_style(&glare, k, v);
    }
    el.append_child(&glare).ok()?;
    Some(glare)
}

pub fn mount(el: &web::HtmlElement, audio: &Rc<AudioEngine>) -> TiltMount {
    let opts = TiltOptions::from_attrs(attr_lookup(el));
    let player = player_for(el, audio);
    let glare = if opts.glare { create_glare(el) } else { None };

    set_style(el, "transform-style", "preserve-3d");
    set_style(el, "transition", &transition_css(&opts, false));
    apply(el, glare.as_ref(), &opts, &TiltState::REST);

    let mut listeners = Vec::with_capacity(3);
    {
        let el_c = el.clone();
        let glare = glare.clone();
        listeners.push(EventListener::new(el, "pointerenter", move |_ev| {
            player.play(Sound::Enter);
            set_style(&el_c, "transition", &transition_css(&opts, true));
            if let Some(g) = &glare {
                set_style(g, "opacity", glare_opacity(true));
            }
        }));
    }
    {
        let el_c = el.clone();
        let glare = glare.clone();
        listeners.push(EventListener::new(el, "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let Some(rect) = element_rect(&el_c) else {
                return;
            };
            if let Some(s) = TiltState::from_pointer(&opts, &rect, ev.client_x() as f32, ev.client_y() as f32) {
                apply(&el_c, glare.as_ref(), &opts, &s);
            }
        }));
    }
    {
        let el_c = el.clone();
        listeners.push(EventListener::new(el, "pointerleave", move |_ev| {
            set_style(&el_c, "transition", &transition_css(&opts, false));
            apply(&el_c, glare.as_ref(), &opts, &TiltState::REST);
            if let Some(g) = &glare {
                set_style(g, "opacity", glare_opacity(false));
            }
        }));
    }
    TiltMount {
        _listeners: listeners,
    }
}
