// DOM primitives wired from data attributes. Each mount owns its listeners,
// timers and observers; dropping `Mounts` releases all of them.

pub mod chrome;
pub mod counter;
pub mod magnetic;
pub mod nav;
pub mod reveal;
pub mod scramble;
pub mod sound_toggle;
pub mod tilt;

use crate::audio::{AudioEngine, SoundPlayer};
use crate::constants::SOUND_ATTR;
use crate::core::attrs::attr_bool;
use crate::core::NavTable;
use crate::dom::{attr_lookup, query_all};
use std::rc::Rc;
use web_sys as web;

/// A live primitive bound to one element (or the page).
pub trait Mounted {
    fn kind(&self) -> &'static str;
}

#[derive(Default)]
pub struct Mounts {
    items: Vec<Box<dyn Mounted>>,
}

impl Mounts {
    pub fn push(&mut self, m: impl Mounted + 'static) {
        self.items.push(Box::new(m));
    }

    pub fn extend<M: Mounted + 'static>(&mut self, ms: impl IntoIterator<Item = M>) {
        for m in ms {
            self.push(m);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `kind×count` pairs in mount order, for the start-up log.
    pub fn summary(&self) -> String {
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for m in &self.items {
            match counts.iter_mut().find(|(k, _)| *k == m.kind()) {
                Some((_, n)) => *n += 1,
                None => counts.push((m.kind(), 1)),
            }
        }
        counts
            .iter()
            .map(|(k, n)| format!("{}×{}", k, n))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Sound player honouring the element's own `data-sound` opt-out.
pub(crate) fn player_for(el: &web::Element, audio: &Rc<AudioEngine>) -> SoundPlayer {
    let enabled = attr_bool(&attr_lookup(el), SOUND_ATTR, true);
    SoundPlayer::new(audio, enabled)
}

fn mount_each<M: Mounted + 'static>(
    mounts: &mut Mounts,
    document: &web::Document,
    selector: &str,
    mut f: impl FnMut(&web::HtmlElement) -> Option<M>,
) {
    mounts.extend(query_all(document, selector).iter().filter_map(&mut f));
}

pub fn mount_all(document: &web::Document, audio: &Rc<AudioEngine>, table: &NavTable) -> Mounts {
    use crate::constants::*;
    let mut mounts = Mounts::default();
    mount_each(&mut mounts, document, TILT_SELECTOR, |el| Some(tilt::mount(el, audio)));
    mount_each(&mut mounts, document, MAGNETIC_SELECTOR, |el| Some(magnetic::mount(el, audio)));
    mount_each(&mut mounts, document, REVEAL_SELECTOR, |el| Some(reveal::mount(el)));
    mount_each(&mut mounts, document, SCRAMBLE_SELECTOR, |el| Some(scramble::mount(el)));
    mount_each(&mut mounts, document, COUNT_UP_SELECTOR, |el| Some(counter::mount(el)));
    mount_each(&mut mounts, document, NAV_SELECTOR, |el| nav::mount_anchor(el, audio));
    mount_each(&mut mounts, document, ZONE_NAV_SELECTOR, |el| {
        nav::mount_zone(el, audio, table)
    });
    mount_each(&mut mounts, document, MENU_TOGGLE_SELECTOR, |el| {
        nav::mount_menu_toggle(document, el, audio)
    });
    if let Some(m) = sound_toggle::mount(document, audio) {
        mounts.push(m);
    }
    if let Some(m) = chrome::mount(document) {
        mounts.push(m);
    }
    log::info!("[ui] mounted {} primitives", mounts.len());
    log::debug!("[ui] {}", mounts.summary());
    mounts
}
