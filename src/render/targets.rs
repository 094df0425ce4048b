use super::helpers::{self, DEPTH_FORMAT, HDR_FORMAT};

/// Offscreen targets sized to the canvas backing store.
///
/// - `hdr_*` hold the lit scene in Rgba16Float for post-processing.
/// - `depth_view` is the scene pass depth buffer, same size as the HDR target.
/// - `bloom_*` are half-res ping-pong buffers for bright-pass and blur.
pub(crate) struct RenderTargets {
    _hdr_tex: wgpu::Texture,
    pub(crate) hdr_view: wgpu::TextureView,
    _depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    _bloom_a: wgpu::Texture,
    pub(crate) bloom_a_view: wgpu::TextureView,
    _bloom_b: wgpu::Texture,
    pub(crate) bloom_b_view: wgpu::TextureView,
    pub(crate) width: u32,
    pub(crate) height: u32,
}

pub(crate) fn bloom_size(width: u32, height: u32) -> (u32, u32) {
    ((width.max(1) / 2).max(1), (height.max(1) / 2).max(1))
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let sampled = wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING;
        let (hdr_tex, hdr_view) =
            helpers::create_color_texture(device, "hdr_tex", width, height, HDR_FORMAT, sampled);
        let (depth_tex, depth_view) = helpers::create_color_texture(
            device,
            "depth_tex",
            width,
            height,
            DEPTH_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        let (bw, bh) = bloom_size(width, height);
        let (bloom_a, bloom_a_view) =
            helpers::create_color_texture(device, "bloom_a", bw, bh, HDR_FORMAT, sampled);
        let (bloom_b, bloom_b_view) =
            helpers::create_color_texture(device, "bloom_b", bw, bh, HDR_FORMAT, sampled);
        Self {
            _hdr_tex: hdr_tex,
            hdr_view,
            _depth_tex: depth_tex,
            depth_view,
            _bloom_a: bloom_a,
            bloom_a_view,
            _bloom_b: bloom_b,
            bloom_b_view,
            width,
            height,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        *self = Self::new(device, width, height);
    }
}
