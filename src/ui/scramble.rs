use super::Mounted;
use crate::constants::{RESCRAMBLE_ATTR, SCRAMBLING_CLASS};
use crate::core::attrs::attr_bool;
use crate::core::scramble::{ScrambleOptions, Scrambler};
use crate::dom::attr_lookup;
use gloo::events::EventListener;
use gloo::timers::callback::{Interval, Timeout};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

struct ScrambleState {
    el: web::HtmlElement,
    opts: ScrambleOptions,
    scrambler: Scrambler,
    rng: StdRng,
    interval: Option<Interval>,
}

pub struct ScrambleMount {
    _state: Rc<RefCell<ScrambleState>>,
    _delay: Option<Timeout>,
    _hover: Option<EventListener>,
}

impl Mounted for ScrambleMount {
    fn kind(&self) -> &'static str {
        "scramble"
    }
}

fn step(state: &Weak<RefCell<ScrambleState>>) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let mut guard = state.borrow_mut();
    let s = &mut *guard;
    let more = s.scrambler.advance(&mut s.rng);
    s.el.set_text_content(Some(s.scrambler.display_text()));
    if !more {
        _ = s.el.class_list().remove_1(SCRAMBLING_CLASS);
        // Stops the timer that is running this step.
        s.interval = None;
    }
}

/// Starts a fresh run; any run in progress is replaced.
fn start(state: &Rc<RefCell<ScrambleState>>) {
    let weak = Rc::downgrade(state);
    let mut guard = state.borrow_mut();
    let s = &mut *guard;
    s.interval = None;
    s.scrambler.restart();
    _ = s.el.class_list().add_1(SCRAMBLING_CLASS);
    s.interval = Some(Interval::new(s.opts.step_interval_ms(), move || step(&weak)));
}

pub fn mount(el: &web::HtmlElement) -> ScrambleMount {
    let lookup = attr_lookup(el);
    let opts = ScrambleOptions::from_attrs(&lookup);
    let rescramble = attr_bool(&lookup, RESCRAMBLE_ATTR, false);
    let text = el.text_content().unwrap_or_default();

    let state = Rc::new(RefCell::new(ScrambleState {
        el: el.clone(),
        opts,
        scrambler: Scrambler::new(&text),
        rng: StdRng::from_entropy(),
        interval: None,
    }));

    let delay = if opts.trigger {
        let weak = Rc::downgrade(&state);
        Some(Timeout::new(opts.delay_ms, move || {
            if let Some(s) = weak.upgrade() {
                start(&s);
            }
        }))
    } else {
        None
    };

    let hover = if rescramble && opts.trigger {
        let weak = Rc::downgrade(&state);
        Some(EventListener::new(el, "pointerenter", move |_ev| {
            if let Some(s) = weak.upgrade() {
                start(&s);
            }
        }))
    } else {
        None
    };

    ScrambleMount {
        _state: state,
        _delay: delay,
        _hover: hover,
    }
}
