use crate::core::reveal::{RevealLatch, TriggerMode};
use gloo::timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys as web;

struct TriggerState {
    latch: RevealLatch,
    on_fire: Option<Box<dyn FnOnce()>>,
}

/// Latch and run the callback outside of the borrow.
fn fire(state: &RefCell<TriggerState>) {
    let f = {
        let mut s = state.borrow_mut();
        if s.latch.fire() {
            s.on_fire.take()
        } else {
            None
        }
    };
    if let Some(f) = f {
        f();
    }
}

/// Fires a callback once, either when the element scrolls into view or after
/// a fixed delay. Dropping it before it fires cancels the observation.
pub struct ViewportTrigger {
    _state: Rc<RefCell<TriggerState>>,
    observer: Option<web::IntersectionObserver>,
    _callback: Option<Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>>,
    _timeout: Option<Timeout>,
}

impl ViewportTrigger {
    pub fn new(el: &web::Element, mode: TriggerMode, on_fire: impl FnOnce() + 'static) -> Self {
        let state = Rc::new(RefCell::new(TriggerState {
            latch: RevealLatch::new(),
            on_fire: Some(Box::new(on_fire)),
        }));
        let mut trigger = Self {
            _state: state.clone(),
            observer: None,
            _callback: None,
            _timeout: None,
        };
        match mode {
            TriggerMode::AfterDelay { delay_ms } => {
                let weak = Rc::downgrade(&state);
                trigger._timeout = Some(Timeout::new(delay_ms, move || {
                    if let Some(s) = weak.upgrade() {
                        fire(&s);
                    }
                }));
            }
            TriggerMode::OnView { threshold } => {
                let weak = Rc::downgrade(&state);
                let callback = Closure::wrap(Box::new(
                    move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                        let Some(s) = weak.upgrade() else {
                            return;
                        };
                        for entry in entries.iter() {
                            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>()
                            else {
                                continue;
                            };
                            let latched = s.borrow_mut().latch.observe(
                                entry.is_intersecting(),
                                entry.intersection_ratio(),
                                threshold,
                            );
                            if latched {
                                observer.unobserve(&entry.target());
                                let f = s.borrow_mut().on_fire.take();
                                if let Some(f) = f {
                                    f();
                                }
                                break;
                            }
                        }
                    },
                )
                    as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
                let init = web::IntersectionObserverInit::new();
                init.set_threshold(&JsValue::from_f64(threshold));
                match web::IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &init,
                ) {
                    Ok(observer) => {
                        observer.observe(el);
                        trigger.observer = Some(observer);
                        trigger._callback = Some(callback);
                    }
                    Err(e) => {
                        // No observer support: show the content rather than keep it hidden.
                        log::debug!("[ui] IntersectionObserver unavailable: {:?}", e);
                        fire(&state);
                    }
                }
            }
        }
        trigger
    }
}

impl Drop for ViewportTrigger {
    fn drop(&mut self) {
        if let Some(o) = self.observer.take() {
            o.disconnect();
        }
    }
}
