use super::Mounted;
use crate::constants::{
    CURSOR_GLOW_ID, NAV_SCROLLED_CLASS, PARALLAX_ATTR, PARALLAX_SELECTOR, SCROLL_PROGRESS_ID,
    SITE_NAV_ID,
};
use crate::core::attrs::attr_f64;
use crate::core::scroll::{
    cursor_glow_opacity, is_nav_scrolled, parallax_transform_css, scroll_progress_percent,
};
use crate::dom::{attr_lookup, query_all, set_style};
use gloo::events::EventListener;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Page-level decorations driven by scroll and pointer position.
pub struct ChromeMount {
    _listeners: [EventListener; 2],
}

impl Mounted for ChromeMount {
    fn kind(&self) -> &'static str {
        "chrome"
    }
}

struct Chrome {
    window: web::Window,
    document: web::Document,
    progress_bar: Option<web::HtmlElement>,
    glow: Option<web::HtmlElement>,
    nav: Option<web::Element>,
    parallax: Vec<(web::HtmlElement, f64)>,
}

fn html_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<web::HtmlElement>().ok())
}

impl Chrome {
    fn on_scroll(&self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        let viewport_h = self
            .window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let doc_h = self
            .document
            .document_element()
            .map(|e| e.scroll_height() as f64)
            .unwrap_or(0.0);
        let p = scroll_progress_percent(scroll_y, doc_h, viewport_h);

        if let Some(bar) = &self.progress_bar {
            set_style(bar, "width", &format!("{}%", p));
        }
        for (el, factor) in &self.parallax {
            set_style(el, "transform", &parallax_transform_css(p, *factor));
        }
        if let Some(glow) = &self.glow {
            set_style(glow, "opacity", &cursor_glow_opacity(p).to_string());
        }
        if let Some(nav) = &self.nav {
            _ = nav
                .class_list()
                .toggle_with_force(NAV_SCROLLED_CLASS, is_nav_scrolled(scroll_y));
        }
    }

    fn on_pointer(&self, ev: &web::Event) {
        let (Some(glow), Some(ev)) = (&self.glow, ev.dyn_ref::<web::MouseEvent>()) else {
            return;
        };
        set_style(glow, "left", &format!("{}px", ev.client_x()));
        set_style(glow, "top", &format!("{}px", ev.client_y()));
    }
}

pub fn mount(document: &web::Document) -> Option<ChromeMount> {
    let window = web::window()?;
    let parallax = query_all(document, PARALLAX_SELECTOR)
        .into_iter()
        .map(|el| {
            let factor = attr_f64(&attr_lookup(&el), PARALLAX_ATTR, 0.0);
            (el, factor)
        })
        .collect();
    let chrome = Rc::new(Chrome {
        window: window.clone(),
        document: document.clone(),
        progress_bar: html_by_id(document, SCROLL_PROGRESS_ID),
        glow: html_by_id(document, CURSOR_GLOW_ID),
        nav: document.get_element_by_id(SITE_NAV_ID),
        parallax,
    });
    chrome.on_scroll();

    let c = chrome.clone();
    let scroll = EventListener::new(&window, "scroll", move |_ev| c.on_scroll());
    let c = chrome;
    let pointer = EventListener::new(&window, "pointermove", move |ev| c.on_pointer(ev));
    Some(ChromeMount {
        _listeners: [scroll, pointer],
    })
}
