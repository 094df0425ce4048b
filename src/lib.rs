#![cfg(target_arch = "wasm32")]
use crate::audio::AudioEngine;
use crate::core::{NavTable, SoundGate};
use gloo::events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod textures;
mod ui;
mod viewport;

/// Studio canvas: pointer input, resize tracking and the frame loop.
struct StudioView {
    _input: events::SceneInput,
    _resize: Option<EventListener>,
    _frames: dom::FrameLoop,
}

/// Everything the page owns. Dropping it releases every listener, timer,
/// observer and animation frame.
struct App {
    _audio: Rc<AudioEngine>,
    _mounts: ui::Mounts,
    _studio: Option<StudioView>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) -> Option<EventListener> {
    dom::sync_canvas_backing_size(canvas);
    let window = web::window()?;
    let canvas_resize = canvas.clone();
    Some(EventListener::new(&window, "resize", move |_ev| {
        dom::sync_canvas_backing_size(&canvas_resize);
    }))
}

async fn init_studio(
    document: &web::Document,
    nav: &NavTable,
) -> anyhow::Result<Option<StudioView>> {
    let Some(el) = document.get_element_by_id(constants::STUDIO_CANVAS_ID) else {
        log::info!("[scene] no #{} on this page", constants::STUDIO_CANVAS_ID);
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let resize = wire_canvas_resize(&canvas);

    let scene = Rc::new(RefCell::new(frame::SceneState::new(nav)));
    let mut gpu = frame::init_gpu(&canvas).await;
    match gpu.as_mut() {
        Some(g) => g.load_studio(&scene.borrow().studio),
        None => log::warn!("[scene] rendering disabled; hover and navigation stay active"),
    }
    let input = events::wire_scene_pointer(&canvas, scene.clone(), overlay::HoverBadge::find(document));
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(scene, canvas, gpu)));
    Ok(Some(StudioView {
        _input: input,
        _resize: resize,
        _frames: frame::start_loop(frame_ctx),
    }))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("studio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let nav = NavTable::studio();
    log::debug!(
        "[nav] {} zones: {}",
        nav.len(),
        nav.zones().collect::<Vec<_>>().join(", ")
    );
    let audio = AudioEngine::new(SoundGate::default());
    audio.install_unlock_listeners(&document);
    let mounts = ui::mount_all(&document, &audio, &nav);

    // Page primitives are live before the GPU is requested.
    APP.with(|app| {
        *app.borrow_mut() = Some(App {
            _audio: audio,
            _mounts: mounts,
            _studio: None,
        });
    });

    let studio = init_studio(&document, &nav).await?;
    APP.with(|app| {
        if let Some(app) = app.borrow_mut().as_mut() {
            app._studio = studio;
        }
    });
    Ok(())
}

/// Releases every listener, timer and frame loop owned by the engine.
#[wasm_bindgen]
pub fn teardown() {
    let app = APP.with(|app| app.borrow_mut().take());
    if app.is_some() {
        log::info!("studio-web teardown");
    }
    drop(app);
}
