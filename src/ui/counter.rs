use super::Mounted;
use crate::core::count_up::{CountUp, CountUpOptions, COUNT_UP_VIEW_THRESHOLD};
use crate::core::reveal::TriggerMode;
use crate::dom::{attr_lookup, FrameLoop};
use gloo::timers::callback::Timeout;
use crate::viewport::ViewportTrigger;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys as web;

struct CounterState {
    el: web::HtmlElement,
    count: CountUp,
    delay: Option<Timeout>,
    frames: Option<FrameLoop>,
}

pub struct CounterMount {
    _state: Rc<RefCell<CounterState>>,
    _trigger: ViewportTrigger,
}

impl Mounted for CounterMount {
    fn kind(&self) -> &'static str {
        "count-up"
    }
}

fn run_frames(state: &Weak<RefCell<CounterState>>) {
    let Some(s) = state.upgrade() else {
        return;
    };
    let weak = state.clone();
    let frames = FrameLoop::start(move |ts| {
        let Some(rc) = weak.upgrade() else {
            return false;
        };
        let mut s = rc.borrow_mut();
        let more = s.count.tick(ts);
        s.el.set_text_content(Some(&s.count.formatted()));
        more
    });
    s.borrow_mut().frames = Some(frames);
}

fn begin(state: &Weak<RefCell<CounterState>>) {
    let Some(s) = state.upgrade() else {
        return;
    };
    if !s.borrow_mut().count.start() {
        return;
    }
    let delay_ms = s.borrow().count.options().delay_ms;
    if delay_ms == 0 {
        run_frames(state);
        return;
    }
    let weak = state.clone();
    let t = Timeout::new(delay_ms, move || run_frames(&weak));
    s.borrow_mut().delay = Some(t);
}

pub fn mount(el: &web::HtmlElement) -> CounterMount {
    let opts = CountUpOptions::from_attrs(attr_lookup(el));
    let mode = if opts.start_on_view {
        TriggerMode::OnView {
            threshold: COUNT_UP_VIEW_THRESHOLD,
        }
    } else {
        TriggerMode::AfterDelay { delay_ms: 0 }
    };
    let count = CountUp::new(opts);
    el.set_text_content(Some(&count.formatted()));
    let state = Rc::new(RefCell::new(CounterState {
        el: el.clone(),
        count,
        delay: None,
        frames: None,
    }));
    let weak = Rc::downgrade(&state);
    let trigger = ViewportTrigger::new(el, mode, move || begin(&weak));
    CounterMount {
        _state: state,
        _trigger: trigger,
    }
}
