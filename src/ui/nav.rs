use super::{player_for, Mounted};
use crate::audio::AudioEngine;
use crate::constants::{MENU_OPEN_CLASS, SITE_NAV_ID};
use crate::core::sound::Sound;
use crate::core::NavTable;
use crate::dom::scroll_to_anchor;
use gloo::events::{EventListener, EventListenerOptions};
use std::rc::Rc;
use web_sys as web;

/// A button that scrolls to an anchor, from `data-nav` or a `data-zone` lookup.
pub struct NavMount {
    _listeners: Vec<EventListener>,
}

impl Mounted for NavMount {
    fn kind(&self) -> &'static str {
        "nav"
    }
}

fn wire(el: &web::HtmlElement, audio: &Rc<AudioEngine>, anchor: String) -> Option<NavMount> {
    let player = player_for(el, audio);
    let hover = player.clone();
    let enter = EventListener::new(el, "pointerenter", move |_ev| hover.play(Sound::Hover));
    let click = EventListener::new_with_options(
        el,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |ev| {
            ev.prevent_default();
            player.play(Sound::Click);
            scroll_to_anchor(&anchor);
        },
    );
    Some(NavMount {
        _listeners: vec![enter, click],
    })
}

pub fn mount_anchor(el: &web::HtmlElement, audio: &Rc<AudioEngine>) -> Option<NavMount> {
    let anchor = el.get_attribute("data-nav").filter(|a| !a.is_empty())?;
    wire(el, audio, anchor)
}

pub fn mount_zone(
    el: &web::HtmlElement,
    audio: &Rc<AudioEngine>,
    table: &NavTable,
) -> Option<NavMount> {
    let zone = el.get_attribute("data-zone")?;
    let Some(anchor) = table.anchor_for(&zone) else {
        log::warn!("[nav] unknown zone {:?}", zone);
        return None;
    };
    wire(el, audio, anchor.to_string())
}

/// Mobile menu button: opens or closes `#site-nav` with the open/close sounds.
pub fn mount_menu_toggle(
    document: &web::Document,
    el: &web::HtmlElement,
    audio: &Rc<AudioEngine>,
) -> Option<NavMount> {
    let nav = document.get_element_by_id(SITE_NAV_ID)?;
    let player = player_for(el, audio);
    let button = el.clone();
    let click = EventListener::new(el, "click", move |_ev| {
        let open = nav.class_list().contains(MENU_OPEN_CLASS);
        player.play(if open { Sound::Close } else { Sound::Open });
        _ = nav.class_list().toggle_with_force(MENU_OPEN_CLASS, !open);
        _ = button.set_attribute("aria-expanded", if open { "false" } else { "true" });
    });
    Some(NavMount {
        _listeners: vec![click],
    })
}
