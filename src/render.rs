use crate::core::camera::OrbitCamera;
use crate::core::constants::CLEAR_COLOR;
use crate::core::scene::{studio_lights, Material, NodeId, Studio};
use crate::core::texture::{TextureKey, TexturePixels, TextureSlot};
use crate::core::uniforms::{GlobalUniforms, ObjectUniforms};
use web_sys as web;

mod helpers;
mod meshes;
mod post;
mod targets;

use helpers::{texture_layout_entries, uniform_layout_entry};
use meshes::MeshCache;
use post::PostResources;
use targets::RenderTargets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PipelineKind {
    StandardOpaque,
    StandardBlend,
    BasicOpaque,
    BasicBlend,
    Portal,
}

impl PipelineKind {
    fn for_material(m: &Material) -> Self {
        match m {
            Material::Standard(_) if m.is_transparent() => PipelineKind::StandardBlend,
            Material::Standard(_) => PipelineKind::StandardOpaque,
            Material::Basic { .. } if m.is_transparent() => PipelineKind::BasicBlend,
            Material::Basic { .. } => PipelineKind::BasicOpaque,
            Material::Portal { .. } => PipelineKind::Portal,
        }
    }

    fn is_blended(self) -> bool {
        matches!(
            self,
            PipelineKind::StandardBlend | PipelineKind::BasicBlend | PipelineKind::Portal
        )
    }
}

struct ScenePipelines {
    standard_opaque: wgpu::RenderPipeline,
    standard_blend: wgpu::RenderPipeline,
    basic_opaque: wgpu::RenderPipeline,
    basic_blend: wgpu::RenderPipeline,
    portal: wgpu::RenderPipeline,
}

impl ScenePipelines {
    fn get(&self, kind: PipelineKind) -> &wgpu::RenderPipeline {
        match kind {
            PipelineKind::StandardOpaque => &self.standard_opaque,
            PipelineKind::StandardBlend => &self.standard_blend,
            PipelineKind::BasicOpaque => &self.basic_opaque,
            PipelineKind::BasicBlend => &self.basic_blend,
            PipelineKind::Portal => &self.portal,
        }
    }
}

struct GpuTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

/// One mesh node of the studio with its own uniform buffer and texture slot.
struct DrawItem {
    node: NodeId,
    mesh: usize,
    kind: PipelineKind,
    uniforms: wgpu::Buffer,
    object_bg: wgpu::BindGroup,
    texture: TextureSlot<GpuTexture>,
}

/// Borrowed pieces needed to turn pixels into a bound texture.
struct TextureUploader<'g> {
    device: &'g wgpu::Device,
    queue: &'g wgpu::Queue,
    layout: &'g wgpu::BindGroupLayout,
    repeat_sampler: &'g wgpu::Sampler,
    clamp_sampler: &'g wgpu::Sampler,
}

impl TextureUploader<'_> {
    fn upload(&self, pixels: &TexturePixels, repeats: bool) -> GpuTexture {
        let size = wgpu::Extent3d {
            width: pixels.width,
            height: pixels.height,
            depth_or_array_layers: 1,
        };
        let texture = self.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("scene_texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &pixels.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * pixels.width),
                rows_per_image: Some(pixels.height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = if repeats {
            self.repeat_sampler
        } else {
            self.clamp_sampler
        };
        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_texture"),
            layout: self.layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });
        GpuTexture {
            _texture: texture,
            bind_group,
        }
    }

    fn make(&self, key: &TextureKey) -> Option<GpuTexture> {
        match crate::textures::pixels_for(key) {
            Some(pixels) => Some(self.upload(&pixels, key.repeats())),
            None => {
                log::warn!("[gpu] texture unavailable: {:?}", key);
                None
            }
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    targets: RenderTargets,
    post: PostResources,
    pipelines: ScenePipelines,

    globals: wgpu::Buffer,
    globals_bg: wgpu::BindGroup,
    object_bgl: wgpu::BindGroupLayout,
    texture_bgl: wgpu::BindGroupLayout,
    repeat_sampler: wgpu::Sampler,
    clamp_sampler: wgpu::Sampler,
    white: GpuTexture,

    meshes: MeshCache,
    draws: Vec<DrawItem>,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let post = PostResources::new(&device, format, &targets);

        // group0 globals, group1 per-object, group2 texture
        let globals_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let object_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("object_bgl"),
            entries: &[uniform_layout_entry(
                0,
                wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            )],
        });
        let texture_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("texture_bgl"),
            entries: &texture_layout_entries(),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_scene"),
            bind_group_layouts: &[&globals_bgl, &object_bgl, &texture_bgl],
            push_constant_ranges: &[],
        });

        let scene_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let portal_src = format!("{}\n{}", crate::core::SCENE_WGSL, crate::core::PORTAL_WGSL);
        let portal_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("portal_shader"),
            source: wgpu::ShaderSource::Wgsl(portal_src.into()),
        });
        let alpha = Some(wgpu::BlendState::ALPHA_BLENDING);
        let pipelines = ScenePipelines {
            standard_opaque: helpers::make_scene_pipeline(
                &device, "standard", &layout, &scene_shader, "fs_standard", None,
            ),
            standard_blend: helpers::make_scene_pipeline(
                &device, "standard_blend", &layout, &scene_shader, "fs_standard", alpha,
            ),
            basic_opaque: helpers::make_scene_pipeline(
                &device, "basic", &layout, &scene_shader, "fs_basic", None,
            ),
            basic_blend: helpers::make_scene_pipeline(
                &device, "basic_blend", &layout, &scene_shader, "fs_basic", alpha,
            ),
            portal: helpers::make_scene_pipeline(
                &device, "portal", &layout, &portal_shader, "fs_portal", alpha,
            ),
        };

        let globals = helpers::create_uniform_buffer(
            &device,
            "globals",
            std::mem::size_of::<GlobalUniforms>(),
        );
        let globals_bg = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_globals"),
            layout: &globals_bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals.as_entire_binding(),
            }],
        });
        let repeat_sampler = helpers::create_sampler(&device, "repeat_sampler", wgpu::AddressMode::Repeat);
        let clamp_sampler =
            helpers::create_sampler(&device, "clamp_sampler", wgpu::AddressMode::ClampToEdge);
        let white = TextureUploader {
            device: &device,
            queue: &queue,
            layout: &texture_bgl,
            repeat_sampler: &repeat_sampler,
            clamp_sampler: &clamp_sampler,
        }
        .upload(&TexturePixels::filled(1, 1, [255, 255, 255]), true);

        let [r, g, b] = CLEAR_COLOR;
        log::info!("[gpu] ready {}x{} {:?}", width, height, format);
        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            post,
            pipelines,
            globals,
            globals_bg,
            object_bgl,
            texture_bgl,
            repeat_sampler,
            clamp_sampler,
            white,
            meshes: MeshCache::default(),
            draws: Vec::new(),
            clear_color: wgpu::Color { r, g, b, a: 1.0 },
        })
    }

    /// One draw item per mesh node. Replaces any previously loaded scene.
    pub fn load_studio(&mut self, studio: &Studio) {
        self.draws.clear();
        for (i, node) in studio.nodes().iter().enumerate() {
            let (Some(shape), Some(material)) = (&node.shape, &node.material) else {
                continue;
            };
            let mesh = self.meshes.get_or_upload(&self.device, shape);
            let uniforms = helpers::create_uniform_buffer(
                &self.device,
                "object",
                std::mem::size_of::<ObjectUniforms>(),
            );
            let object_bg = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("bg_object"),
                layout: &self.object_bgl,
                entries: &[wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniforms.as_entire_binding(),
                }],
            });
            self.draws.push(DrawItem {
                node: NodeId(i as u32),
                mesh,
                kind: PipelineKind::for_material(material),
                uniforms,
                object_bg,
                texture: TextureSlot::default(),
            });
        }
        log::info!(
            "[gpu] studio loaded: {} draws, {} meshes",
            self.draws.len(),
            self.meshes.len()
        );
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.targets.recreate(&self.device, width, height);
        self.post.rebuild_bind_groups(&self.device, &self.targets);
        log::info!("[gpu] resized to {}x{}", width, height);
    }

    /// Reapply the current configuration after a lost or outdated surface.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn aspect(&self) -> f32 {
        self.config.width as f32 / self.config.height.max(1) as f32
    }

    /// Writes this frame's uniforms and resolves texture slots. Returns the
    /// draw order: opaque first, then blended back to front.
    fn prepare(&mut self, studio: &Studio, camera: &OrbitCamera) -> Vec<usize> {
        let eye = camera.eye();
        let globals = GlobalUniforms::new(
            camera.view_proj(self.aspect()),
            eye,
            studio.elapsed(),
            &studio_lights(),
        );
        self.queue
            .write_buffer(&self.globals, 0, bytemuck::bytes_of(&globals));

        let uploader = TextureUploader {
            device: &self.device,
            queue: &self.queue,
            layout: &self.texture_bgl,
            repeat_sampler: &self.repeat_sampler,
            clamp_sampler: &self.clamp_sampler,
        };
        let nodes = studio.nodes();
        let mut opaque = Vec::with_capacity(self.draws.len());
        let mut blended = Vec::new();
        for (i, draw) in self.draws.iter_mut().enumerate() {
            let Some(material) = nodes[draw.node.index()].material.as_ref() else {
                continue;
            };
            let has_texture = match material.texture() {
                Some(key) => draw.texture.resolve(key, |k| uploader.make(k)).is_some(),
                None => false,
            };
            // Decals with no texture would draw as solid quads.
            if matches!(material, Material::Basic { texture: Some(_), .. }) && !has_texture {
                continue;
            }
            let world = studio.world_matrix(draw.node);
            let u = ObjectUniforms::new(material, studio.pose(draw.node), world, has_texture);
            self.queue
                .write_buffer(&draw.uniforms, 0, bytemuck::bytes_of(&u));
            if draw.kind.is_blended() {
                let d = world.w_axis.truncate().distance_squared(eye);
                blended.push((i, d));
            } else {
                opaque.push(i);
            }
        }
        blended.sort_by(|a, b| b.1.total_cmp(&a.1));
        opaque.extend(blended.into_iter().map(|(i, _)| i));
        opaque
    }

    pub fn render(&mut self, studio: &Studio, camera: &OrbitCamera) -> Result<(), wgpu::SurfaceError> {
        let order = self.prepare(studio, camera);
        self.post
            .write_uniforms(&self.queue, &self.targets, studio.elapsed());

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bg, &[]);
            let mut bound: Option<PipelineKind> = None;
            for i in order {
                let draw = &self.draws[i];
                if bound != Some(draw.kind) {
                    rpass.set_pipeline(self.pipelines.get(draw.kind));
                    bound = Some(draw.kind);
                }
                let tex = draw.texture.get().unwrap_or(&self.white);
                let mesh = self.meshes.mesh(draw.mesh);
                rpass.set_bind_group(1, &draw.object_bg, &[]);
                rpass.set_bind_group(2, &tex.bind_group, &[]);
                rpass.set_vertex_buffer(0, mesh.vertices.slice(..));
                rpass.set_index_buffer(mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..mesh.index_count, 0, 0..1);
            }
        }
        self.post.encode(&mut encoder, &self.targets, &view);

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
