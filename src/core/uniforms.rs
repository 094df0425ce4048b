// GPU uniform layouts shared by scene.wgsl and portal.wgsl, plus the packing
// from scene values. Field order and padding mirror the WGSL structs.

use super::constants::MAX_LIGHTS;
use super::scene::{Light, LightKind, Material, Pose, AMBIENT_INTENSITY};
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightPacked {
    pub position_kind: [f32; 4],
    pub color_intensity: [f32; 4],
    pub direction_cone: [f32; 4],
    pub params: [f32; 4],
}

fn kind_code(kind: LightKind) -> f32 {
    match kind {
        LightKind::Directional => 0.0,
        LightKind::Point => 1.0,
        LightKind::Spot => 2.0,
        LightKind::Area => 3.0,
    }
}

impl LightPacked {
    pub fn from_light(l: &Light) -> Self {
        let facing = (l.target - l.position).try_normalize().unwrap_or(Vec3::NEG_Y);
        // Directional lights store the direction toward the light instead of a position.
        let position = match l.kind {
            LightKind::Directional => (l.position - l.target).try_normalize().unwrap_or(Vec3::Y),
            _ => l.position,
        };
        let (cos_outer, cos_inner) = match l.kind {
            LightKind::Spot => (l.angle.cos(), (l.angle * (1.0 - l.penumbra)).cos()),
            _ => (0.0, 0.0),
        };
        Self {
            position_kind: [position.x, position.y, position.z, kind_code(l.kind)],
            color_intensity: [l.color[0], l.color[1], l.color[2], l.intensity],
            direction_cone: [facing.x, facing.y, facing.z, cos_outer],
            params: [cos_inner, 0.0, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub camera_pos: [f32; 4], // w = elapsed seconds, read by the portal shader
    pub ambient: [f32; 4],    // w = light count
    pub lights: [LightPacked; MAX_LIGHTS],
}

impl GlobalUniforms {
    pub fn new(view_proj: Mat4, eye: Vec3, elapsed: f32, lights: &[Light]) -> Self {
        let mut packed = [LightPacked::default(); MAX_LIGHTS];
        let count = lights.len().min(MAX_LIGHTS);
        for (dst, src) in packed.iter_mut().zip(lights) {
            *dst = LightPacked::from_light(src);
        }
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            camera_pos: [eye.x, eye.y, eye.z, elapsed],
            ambient: [AMBIENT_INTENSITY, AMBIENT_INTENSITY, AMBIENT_INTENSITY, count as f32],
            lights: packed,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniforms {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
    pub emissive: [f32; 4],
    pub surface: [f32; 4], // roughness, metalness, has texture, unused
    pub uv_scale: [f32; 4],
}

impl ObjectUniforms {
    /// `has_texture` is whether a texture is actually bound for this draw.
    pub fn new(material: &Material, pose: &Pose, world: Mat4, has_texture: bool) -> Self {
        let tex = if has_texture { 1.0 } else { 0.0 };
        let model = world.to_cols_array_2d();
        match material {
            Material::Standard(s) => {
                let intensity = pose.emissive_intensity.unwrap_or(s.emissive_intensity);
                Self {
                    model,
                    color: [s.color[0], s.color[1], s.color[2], s.opacity],
                    emissive: [s.emissive[0], s.emissive[1], s.emissive[2], intensity],
                    surface: [s.roughness, s.metalness, tex, 0.0],
                    uv_scale: [s.uv_repeat, s.uv_repeat, 0.0, 0.0],
                }
            }
            Material::Basic { color, .. } | Material::Portal { color } => Self {
                model,
                color: [color[0], color[1], color[2], 1.0],
                emissive: [0.0; 4],
                surface: [1.0, 0.0, tex, 0.0],
                uv_scale: [1.0, 1.0, 0.0, 0.0],
            },
        }
    }
}
