use super::helpers::{self, texture_layout_entries, uniform_layout_entry, HDR_FORMAT};
use super::targets::RenderTargets;
use crate::core::constants::{BLOOM_RADIUS, BLOOM_STRENGTH, BLOOM_THRESHOLD};

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    pub(crate) resolution: [f32; 2],
    pub(crate) time: f32,
    pub(crate) bloom_radius: f32,
    pub(crate) blur_dir: [f32; 2],
    pub(crate) bloom_strength: f32,
    pub(crate) threshold: f32,
}

/// Bloom chain passes. Each has its own uniform buffer so one submit can carry
/// different blur directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PostPass {
    Bright,
    BlurH,
    BlurV,
    Composite,
}

impl PostPass {
    const ALL: [PostPass; 4] = [
        PostPass::Bright,
        PostPass::BlurH,
        PostPass::BlurV,
        PostPass::Composite,
    ];

    fn blur_dir(self) -> [f32; 2] {
        match self {
            PostPass::BlurH => [1.0, 0.0],
            PostPass::BlurV => [0.0, 1.0],
            PostPass::Bright | PostPass::Composite => [0.0, 0.0],
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

pub(crate) struct PostResources {
    bgl0: wgpu::BindGroupLayout, // source tex + sampler + uniforms
    bgl1: wgpu::BindGroupLayout, // bloom tex + sampler
    uniforms: [wgpu::Buffer; 4],
    sampler: wgpu::Sampler,
    bright_pipeline: wgpu::RenderPipeline,
    blur_pipeline: wgpu::RenderPipeline,
    composite_pipeline: wgpu::RenderPipeline,
    groups: PostBindGroups,
}

struct PostBindGroups {
    bright: wgpu::BindGroup,    // reads hdr
    blur_h: wgpu::BindGroup,    // reads bloom_a
    blur_v: wgpu::BindGroup,    // reads bloom_b
    composite: wgpu::BindGroup, // reads hdr
    bloom: wgpu::BindGroup,     // group1 for composite, bloom_a
}

fn source_group(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::BindGroupLayout,
    view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    uniforms: Option<&wgpu::Buffer>,
) -> wgpu::BindGroup {
    let mut entries = vec![
        wgpu::BindGroupEntry {
            binding: 0,
            resource: wgpu::BindingResource::TextureView(view),
        },
        wgpu::BindGroupEntry {
            binding: 1,
            resource: wgpu::BindingResource::Sampler(sampler),
        },
    ];
    if let Some(buf) = uniforms {
        entries.push(wgpu::BindGroupEntry {
            binding: 2,
            resource: buf.as_entire_binding(),
        });
    }
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &entries,
    })
}

fn build_groups(
    device: &wgpu::Device,
    bgl0: &wgpu::BindGroupLayout,
    bgl1: &wgpu::BindGroupLayout,
    uniforms: &[wgpu::Buffer; 4],
    sampler: &wgpu::Sampler,
    targets: &RenderTargets,
) -> PostBindGroups {
    let u = |p: PostPass| Some(&uniforms[p.index()]);
    PostBindGroups {
        bright: source_group(device, "bg_bright", bgl0, &targets.hdr_view, sampler, u(PostPass::Bright)),
        blur_h: source_group(device, "bg_blur_h", bgl0, &targets.bloom_a_view, sampler, u(PostPass::BlurH)),
        blur_v: source_group(device, "bg_blur_v", bgl0, &targets.bloom_b_view, sampler, u(PostPass::BlurV)),
        composite: source_group(
            device,
            "bg_composite",
            bgl0,
            &targets.hdr_view,
            sampler,
            u(PostPass::Composite),
        ),
        bloom: source_group(device, "bg_bloom", bgl1, &targets.bloom_a_view, sampler, None),
    }
}

impl PostResources {
    pub(crate) fn new(
        device: &wgpu::Device,
        swap_format: wgpu::TextureFormat,
        targets: &RenderTargets,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let [tex, samp] = texture_layout_entries();
        let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl0"),
            entries: &[tex, samp, uniform_layout_entry(2, wgpu::ShaderStages::FRAGMENT)],
        });
        let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("post_bgl1"),
            entries: &texture_layout_entries(),
        });
        let size = std::mem::size_of::<PostUniforms>();
        let uniforms = [
            helpers::create_uniform_buffer(device, "post_bright", size),
            helpers::create_uniform_buffer(device, "post_blur_h", size),
            helpers::create_uniform_buffer(device, "post_blur_v", size),
            helpers::create_uniform_buffer(device, "post_composite", size),
        ];
        let sampler = helpers::create_sampler(device, "post_sampler", wgpu::AddressMode::ClampToEdge);

        let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post_0"),
            bind_group_layouts: &[&bgl0],
            push_constant_ranges: &[],
        });
        let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl_post_comp"),
            bind_group_layouts: &[&bgl0, &bgl1],
            push_constant_ranges: &[],
        });
        let bright_pipeline =
            helpers::make_post_pipeline(device, "bright", &pl_single, &shader, "fs_bright", HDR_FORMAT, None);
        let blur_pipeline =
            helpers::make_post_pipeline(device, "blur", &pl_single, &shader, "fs_blur", HDR_FORMAT, None);
        let composite_pipeline = helpers::make_post_pipeline(
            device,
            "composite",
            &pl_composite,
            &shader,
            "fs_composite",
            swap_format,
            Some(wgpu::BlendState::REPLACE),
        );
        let groups = build_groups(device, &bgl0, &bgl1, &uniforms, &sampler, targets);
        Self {
            bgl0,
            bgl1,
            uniforms,
            sampler,
            bright_pipeline,
            blur_pipeline,
            composite_pipeline,
            groups,
        }
    }

    /// Bind groups point at target views, so they follow every target rebuild.
    pub(crate) fn rebuild_bind_groups(&mut self, device: &wgpu::Device, targets: &RenderTargets) {
        self.groups = build_groups(device, &self.bgl0, &self.bgl1, &self.uniforms, &self.sampler, targets);
    }

    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, targets: &RenderTargets, time: f32) {
        let (bw, bh) = super::targets::bloom_size(targets.width, targets.height);
        for pass in PostPass::ALL {
            let resolution = match pass {
                PostPass::Bright | PostPass::Composite => [targets.width as f32, targets.height as f32],
                PostPass::BlurH | PostPass::BlurV => [bw as f32, bh as f32],
            };
            let u = PostUniforms {
                resolution,
                time,
                bloom_radius: BLOOM_RADIUS,
                blur_dir: pass.blur_dir(),
                bloom_strength: BLOOM_STRENGTH,
                threshold: BLOOM_THRESHOLD,
            };
            queue.write_buffer(&self.uniforms[pass.index()], 0, bytemuck::bytes_of(&u));
        }
    }

    /// Bright pass, two blur passes, then composite into `output`.
    pub(crate) fn encode(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        targets: &RenderTargets,
        output: &wgpu::TextureView,
    ) {
        let g = &self.groups;
        blit(encoder, "bright_pass", &targets.bloom_a_view, &self.bright_pipeline, &g.bright, None);
        blit(encoder, "blur_h", &targets.bloom_b_view, &self.blur_pipeline, &g.blur_h, None);
        blit(encoder, "blur_v", &targets.bloom_a_view, &self.blur_pipeline, &g.blur_v, None);
        blit(
            encoder,
            "composite",
            output,
            &self.composite_pipeline,
            &g.composite,
            Some(&g.bloom),
        );
    }
}

fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
