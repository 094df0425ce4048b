use crate::constants::DRAG_CLICK_SLOP_PX;
use crate::core::camera::pixel_to_ndc;
use crate::core::pointer::DragGesture;
use crate::core::Pick;
use crate::dom::{scroll_to_anchor, set_style};
use gloo::events::{EventListener, EventListenerOptions};
use crate::frame::SharedScene;
use crate::overlay::HoverBadge;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Orbit drag, wheel zoom, room hover and portal clicks on the studio canvas.
pub struct SceneInput {
    _listeners: Vec<EventListener>,
}

#[derive(Clone)]
struct InputWiring {
    canvas: web::HtmlCanvasElement,
    scene: SharedScene,
    badge: Option<HoverBadge>,
    gesture: Rc<Cell<DragGesture>>,
}

impl InputWiring {
    /// Pointer position in canvas css px.
    fn local(&self, ev: &web::MouseEvent) -> (f32, f32) {
        let r = self.canvas.get_bounding_client_rect();
        (
            (ev.client_x() as f64 - r.left()) as f32,
            (ev.client_y() as f64 - r.top()) as f32,
        )
    }

    fn pick_at(&self, x: f32, y: f32) -> Option<Pick> {
        let r = self.canvas.get_bounding_client_rect();
        let (w, h) = (r.width() as f32, r.height() as f32);
        if w <= 0.0 || h <= 0.0 {
            return None;
        }
        let (nx, ny) = pixel_to_ndc(x, y, w, h);
        let scene = self.scene.borrow();
        let ray = scene.camera.ray(nx, ny, w / h);
        Some(scene.studio.pick(&ray))
    }

    fn hover(&self, pick: Pick) {
        let (changed, zone, portal) = {
            let mut scene = self.scene.borrow_mut();
            let changed = scene.studio.pointer_at(pick);
            let zone = scene.studio.hovered_zone().map(str::to_owned);
            (changed, zone, scene.studio.is_portal_hovered())
        };
        set_style(&self.canvas, "cursor", if portal { "pointer" } else { "grab" });
        if changed {
            if let Some(badge) = &self.badge {
                badge.show(zone.as_deref());
            }
        }
    }

    fn on_move(&self, ev: &web::MouseEvent) {
        let (x, y) = self.local(ev);
        let mut g = self.gesture.get();
        let delta = g.move_to(x, y);
        self.gesture.set(g);
        match delta {
            Some((dx, dy)) => self.scene.borrow_mut().camera.rotate(dx, dy),
            None => {
                if let Some(pick) = self.pick_at(x, y) {
                    self.hover(pick);
                }
            }
        }
    }

    fn on_down(&self, ev: &web::PointerEvent) {
        let (x, y) = self.local(ev);
        let mut g = self.gesture.get();
        g.press(x, y);
        self.gesture.set(g);
        _ = self.canvas.set_pointer_capture(ev.pointer_id());
        set_style(&self.canvas, "cursor", "grabbing");
    }

    fn on_up(&self, ev: &web::PointerEvent) {
        let (x, y) = self.local(ev);
        let mut g = self.gesture.get();
        let is_click = g.release(DRAG_CLICK_SLOP_PX);
        self.gesture.set(g);
        _ = self.canvas.release_pointer_capture(ev.pointer_id());
        let Some(pick) = self.pick_at(x, y) else {
            return;
        };
        self.hover(pick);
        if !is_click {
            return;
        }
        let request = self.scene.borrow().studio.click(pick);
        if let Some(req) = request {
            log::info!("[nav] portal {} -> {}", req.zone, req.anchor);
            scroll_to_anchor(&req.anchor);
        }
    }

    fn on_leave(&self) {
        // A captured drag keeps its hover until release.
        if self.gesture.get().is_active() {
            return;
        }
        let changed = self.scene.borrow_mut().studio.pointer_left();
        set_style(&self.canvas, "cursor", "grab");
        if changed {
            if let Some(badge) = &self.badge {
                badge.show(None);
            }
        }
    }

    fn on_cancel(&self) {
        let mut g = self.gesture.get();
        g.cancel();
        self.gesture.set(g);
        set_style(&self.canvas, "cursor", "grab");
    }

    fn on_wheel(&self, ev: &web::WheelEvent) {
        ev.prevent_default();
        self.scene.borrow_mut().camera.zoom(ev.delta_y() as f32);
    }
}

pub fn wire_scene_pointer(
    canvas: &web::HtmlCanvasElement,
    scene: SharedScene,
    badge: Option<HoverBadge>,
) -> SceneInput {
    let w = InputWiring {
        canvas: canvas.clone(),
        scene,
        badge,
        gesture: Rc::new(Cell::new(DragGesture::default())),
    };
    set_style(canvas, "cursor", "grab");
    set_style(canvas, "touch-action", "none");

    // Wheel zoom cancels page scroll, so that listener cannot be passive.
    let on = |event: &'static str, passive: bool, f: fn(&InputWiring, &web::Event)| {
        let w = w.clone();
        let options = if passive {
            EventListenerOptions::default()
        } else {
            EventListenerOptions::enable_prevent_default()
        };
        EventListener::new_with_options(canvas, event, options, move |ev| f(&w, ev))
    };
    let listeners = vec![
        on("pointermove", true, |w, ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                w.on_move(ev);
            }
        }),
        on("pointerdown", true, |w, ev| {
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                w.on_down(ev);
            }
        }),
        on("pointerup", true, |w, ev| {
            if let Some(ev) = ev.dyn_ref::<web::PointerEvent>() {
                w.on_up(ev);
            }
        }),
        on("pointerleave", true, |w, _| w.on_leave()),
        on("pointercancel", true, |w, _| w.on_cancel()),
        on("wheel", false, |w, ev| {
            if let Some(ev) = ev.dyn_ref::<web::WheelEvent>() {
                w.on_wheel(ev);
            }
        }),
    ];
    SceneInput {
        _listeners: listeners,
    }
}
