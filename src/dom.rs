use crate::core::constants::effective_dpr;
use crate::core::pointer::ElementRect;
use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Self-rescheduling `requestAnimationFrame` loop. The callback gets the frame
/// timestamp in ms and returns whether another frame is wanted. Dropping the
/// loop cancels the pending frame.
pub struct FrameLoop {
    _pending: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameLoop {
    pub fn start(f: impl FnMut(f64) -> bool + 'static) -> Self {
        let pending = Rc::new(RefCell::new(None));
        schedule(Rc::downgrade(&pending), Rc::new(RefCell::new(f)));
        Self { _pending: pending }
    }
}

fn schedule<F>(slot: Weak<RefCell<Option<AnimationFrame>>>, tick: Rc<RefCell<F>>)
where
    F: FnMut(f64) -> bool + 'static,
{
    let Some(pending) = slot.upgrade() else {
        return;
    };
    let frame = request_animation_frame(move |ts| {
        let again = (&mut *tick.borrow_mut())(ts);
        if again {
            schedule(slot, tick);
        }
    });
    *pending.borrow_mut() = Some(frame);
}

/// Live bounding box, or `None` for detached / zero-sized elements.
pub fn element_rect(el: &web::Element) -> Option<ElementRect> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    let rect = ElementRect::new(
        r.left() as f32,
        r.top() as f32,
        r.width() as f32,
        r.height() as f32,
    );
    (!rect.is_degenerate()).then_some(rect)
}

/// Smooth-scroll to `anchor` (a selector such as `#contact`); a missing target is ignored.
pub fn scroll_to_anchor(anchor: &str) {
    let Some(doc) = window_document() else {
        return;
    };
    match doc.query_selector(anchor) {
        Ok(Some(el)) => {
            let opts = web::ScrollIntoViewOptions::new();
            opts.set_behavior(web::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
        Ok(None) => log::debug!("[nav] no element for {}", anchor),
        Err(e) => log::warn!("[nav] bad anchor {}: {:?}", anchor, e),
    }
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Attribute lookup closure for option parsing.
pub fn attr_lookup(el: &web::Element) -> impl Fn(&str) -> Option<String> + '_ {
    move |name: &str| el.get_attribute(name)
}

/// Every element matching `selector`, as `HtmlElement`s.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Keep the canvas backing store at css size × clamped DPR. Returns true when it changed.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> bool {
    let Some(w) = web::window() else {
        return false;
    };
    let dpr = effective_dpr(w.device_pixel_ratio());
    let rect = canvas.get_bounding_client_rect();
    let w_px = ((rect.width() * dpr) as u32).max(1);
    let h_px = ((rect.height() * dpr) as u32).max(1);
    if canvas.width() == w_px && canvas.height() == h_px {
        return false;
    }
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    true
}
