use glam::{Mat4, Vec3, Vec4};
use std::f32::consts::PI;

pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
pub const CAMERA_START: Vec3 = Vec3::new(0.0, 2.2, 12.0);
pub const ORBIT_MIN_DISTANCE: f32 = 9.0;
pub const ORBIT_MAX_DISTANCE: f32 = 16.0;
pub const ORBIT_MIN_POLAR: f32 = PI / 3.0;
pub const ORBIT_MAX_POLAR: f32 = PI / 2.1;
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // radians per css px dragged
pub const ORBIT_ZOOM_SPEED: f32 = 0.01; // world units per wheel delta unit

/// Orbit around a fixed target: rotate and zoom only, no pan.
#[derive(Clone, Copy, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub azimuth: f32, // around +Y, 0 looks from +Z
    pub polar: f32,   // from +Y
    pub fov_y: f32,   // radians
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::looking_from(CAMERA_START, Vec3::ZERO)
    }
}

impl OrbitCamera {
    pub fn looking_from(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().max(1e-4);
        let polar = (offset.y / distance).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);
        let mut cam = Self {
            target,
            distance,
            azimuth,
            polar,
            fov_y: CAMERA_FOV_DEG.to_radians(),
        };
        cam.clamp();
        cam
    }

    fn clamp(&mut self) {
        self.distance = self.distance.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        self.polar = self.polar.clamp(ORBIT_MIN_POLAR, ORBIT_MAX_POLAR);
    }

    pub fn eye(&self) -> Vec3 {
        let s = self.polar.sin();
        self.target
            + self.distance
                * Vec3::new(s * self.azimuth.sin(), self.polar.cos(), s * self.azimuth.cos())
    }

    /// Drag by `(dx, dy)` css pixels; dragging right swings the camera left.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.azimuth -= dx * ORBIT_ROTATE_SPEED;
        self.polar -= dy * ORBIT_ROTATE_SPEED;
        self.clamp();
    }

    /// Positive wheel delta moves away from the target.
    pub fn zoom(&mut self, wheel_delta: f32) {
        self.distance += wheel_delta * ORBIT_ZOOM_SPEED;
        self.clamp();
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(1e-3), CAMERA_NEAR, CAMERA_FAR)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }

    /// World-space ray through normalised device coordinates.
    pub fn ray(&self, ndc_x: f32, ndc_y: f32, aspect: f32) -> Ray {
        let inv = self.view_proj(aspect).inverse();
        let far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far: Vec3 = far.truncate() / far.w;
        let origin = self.eye();
        Ray {
            origin,
            dir: (far - origin).normalize_or_zero(),
        }
    }
}

/// Canvas pixel → NDC, y up.
#[inline]
pub fn pixel_to_ndc(sx: f32, sy: f32, width: f32, height: f32) -> (f32, f32) {
    let w = width.max(1.0);
    let h = height.max(1.0);
    ((2.0 * sx / w) - 1.0, 1.0 - (2.0 * sy / h))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn from_center_half(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Slab test. Returns the entry distance, or 0 when the origin is inside.
    pub fn hit(&self, ray: &Ray) -> Option<f32> {
        let inv = ray.dir.recip();
        let t0 = (self.min - ray.origin) * inv;
        let t1 = (self.max - ray.origin) * inv;
        let near = t0.min(t1).max_element();
        let far = t0.max(t1).min_element();
        if near.is_nan() || far.is_nan() || far < near.max(0.0) {
            return None;
        }
        Some(near.max(0.0))
    }
}
