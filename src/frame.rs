use crate::core::camera::{OrbitCamera, CAMERA_START};
use crate::core::{NavTable, SceneClock, Studio};
use crate::dom::FrameLoop;
use crate::render;
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Scene data touched by both the pointer handlers and the frame loop.
pub struct SceneState {
    pub studio: Studio,
    pub camera: OrbitCamera,
}

impl SceneState {
    pub fn new(nav: &NavTable) -> Self {
        Self {
            studio: Studio::new(nav),
            camera: OrbitCamera::looking_from(CAMERA_START, Vec3::ZERO),
        }
    }
}

pub type SharedScene = Rc<RefCell<SceneState>>;

pub struct FrameContext {
    pub scene: SharedScene,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState>,
    pub clock: SceneClock,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(scene: SharedScene, canvas: web::HtmlCanvasElement, gpu: Option<render::GpuState>) -> Self {
        Self {
            scene,
            canvas,
            gpu,
            clock: SceneClock::default(),
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;
        let elapsed = self.clock.tick(dt_sec);

        let mut scene = self.scene.borrow_mut();
        scene.studio.update(elapsed);

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(&scene.studio, &scene.camera) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("[gpu] out of memory; rendering stopped");
                self.gpu = None;
            }
            Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState> {
    match render::GpuState::new(canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[gpu] WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Runs one frame per animation frame until the returned guard is dropped.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    FrameLoop::start(move |_ts| {
        frame_ctx.borrow_mut().frame();
        true
    })
}
