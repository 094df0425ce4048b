// The studio scene: a flat node list (parents before children), closed-form
// animators keyed by node, the five room zones and the lighting rig.

use super::camera::{Aabb, Ray};
use super::geometry::Shape;
use super::nav::NavTable;
use super::texture::{hex_to_linear, TextureKey, GRID_DIVISIONS, GRID_SIZE};
use fnv::FnvHashMap;
use glam::{Mat3, Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;

pub const MAX_FRAME_DT: f32 = 0.1; // clock advance cap per frame, seconds
pub const ACCENT_IDLE: f32 = 0.2;
pub const ACCENT_HOVERED: f32 = 0.6;
pub const ACCENT_LERP: f32 = 0.1; // per frame
pub const AMBIENT_INTENSITY: f32 = 0.35;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub fn at(x: f32, y: f32, z: f32) -> Self {
        Self {
            translation: Vec3::new(x, y, z),
            ..Self::IDENTITY
        }
    }

    pub fn rotated_x(mut self, angle: f32) -> Self {
        self.rotation = Quat::from_rotation_x(angle) * self.rotation;
        self
    }

    pub fn scaled(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// Lit surface parameters. Colours are linear RGB.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    pub color: [f32; 3],
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
    pub opacity: f32,
    pub texture: Option<TextureKey>,
    pub uv_repeat: f32,
}

impl Surface {
    pub fn new(hex: &str, roughness: f32, metalness: f32) -> Self {
        Self {
            color: hex_to_linear(hex),
            roughness,
            metalness,
            emissive: [0.0; 3],
            emissive_intensity: 0.0,
            opacity: 1.0,
            texture: None,
            uv_repeat: 1.0,
        }
    }

    pub fn glowing(mut self, hex: &str, intensity: f32) -> Self {
        self.emissive = hex_to_linear(hex);
        self.emissive_intensity = intensity;
        self
    }

    pub fn textured(mut self, key: TextureKey, repeat: f32) -> Self {
        self.texture = Some(key);
        self.uv_repeat = repeat;
        self
    }

    pub fn translucent(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Material {
    Standard(Surface),
    /// Unlit, usually a text decal with alpha.
    Basic {
        color: [f32; 3],
        texture: Option<TextureKey>,
        transparent: bool,
    },
    /// Animated glow driven by the shared time uniform.
    Portal { color: [f32; 3] },
}

impl Material {
    fn flat(hex: &str) -> Self {
        Material::Basic {
            color: hex_to_linear(hex),
            texture: None,
            transparent: false,
        }
    }

    fn decal(key: TextureKey) -> Self {
        Material::Basic {
            color: [1.0; 3],
            texture: Some(key),
            transparent: true,
        }
    }

    pub fn is_transparent(&self) -> bool {
        match self {
            Material::Standard(s) => s.opacity < 1.0,
            Material::Basic { transparent, .. } => *transparent,
            Material::Portal { .. } => true,
        }
    }

    pub fn texture(&self) -> Option<&TextureKey> {
        match self {
            Material::Standard(s) => s.texture.as_ref(),
            Material::Basic { texture, .. } => texture.as_ref(),
            Material::Portal { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
    pub parent: Option<NodeId>,
    pub local: Transform,
    pub shape: Option<Shape>,
    pub material: Option<Material>,
}

/// Current animated state of a node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub local: Transform,
    pub emissive_intensity: Option<f32>,
}

#[inline]
pub fn float_offset(t: f32, frequency: f32, phase: f32, amplitude: f32) -> f32 {
    (t * frequency + phase).sin() * amplitude
}

/// Closed-form motion: every output is a function of elapsed time and the
/// node's own constants, nothing accumulates between frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Animator {
    /// Vertical bob plus a steady spin about Y.
    Bob {
        amplitude: f32,
        frequency: f32,
        phase: f32,
        spin_rate: f32,
        spin_phase: f32,
    },
    /// Slow rocking about Y with a small bob.
    Sway {
        amplitude: f32,
        phase: f32,
        sway_rate: f32,
        sway_angle: f32,
    },
    /// Bob while keeping +Z pointed at a world-space target.
    FaceTarget {
        amplitude: f32,
        phase: f32,
        target: Vec3,
    },
    Spin { axis: Vec3, rate: f32 },
    Glow {
        base: f32,
        amplitude: f32,
        frequency: f32,
    },
}

impl Animator {
    pub fn pose(&self, base: &Transform, t: f32, parent_world: &Mat4) -> Transform {
        let mut out = *base;
        match *self {
            Animator::Bob {
                amplitude,
                frequency,
                phase,
                spin_rate,
                spin_phase,
            } => {
                out.translation.y += float_offset(t, frequency, phase, amplitude);
                out.rotation = Quat::from_rotation_y(t * spin_rate + spin_phase) * base.rotation;
            }
            Animator::Sway {
                amplitude,
                phase,
                sway_rate,
                sway_angle,
            } => {
                out.translation.y += float_offset(t, 1.0, phase, amplitude);
                out.rotation =
                    Quat::from_rotation_y((t * sway_rate).sin() * sway_angle) * base.rotation;
            }
            Animator::FaceTarget {
                amplitude,
                phase,
                target,
            } => {
                out.translation.y += float_offset(t, 1.0, phase, amplitude);
                let world_pos = parent_world.transform_point3(out.translation);
                if let Some(world_rot) = look_rotation(target - world_pos) {
                    let (_, parent_rot, _) = parent_world.to_scale_rotation_translation();
                    out.rotation = parent_rot.inverse() * world_rot;
                }
            }
            Animator::Spin { axis, rate } => {
                out.rotation = Quat::from_axis_angle(axis, t * rate) * base.rotation;
            }
            Animator::Glow { .. } => {}
        }
        out
    }

    pub fn emissive(&self, t: f32) -> Option<f32> {
        match *self {
            Animator::Glow {
                base,
                amplitude,
                frequency,
            } => Some(base + (t * frequency).sin() * amplitude),
            _ => None,
        }
    }
}

/// Rotation taking +Z onto `dir` with +Y kept up. `None` when `dir` is
/// zero or vertical.
pub fn look_rotation(dir: Vec3) -> Option<Quat> {
    let z = dir.try_normalize()?;
    let x = Vec3::Y.cross(z).try_normalize()?;
    let y = z.cross(x);
    Some(Quat::from_mat3(&Mat3::from_cols(x, y, z)))
}

/// Accumulates frame deltas with a cap so tab stalls do not jump animations.
#[derive(Clone, Copy, Debug, Default)]
pub struct SceneClock {
    elapsed: f32,
}

impl SceneClock {
    pub fn tick(&mut self, dt_sec: f32) -> f32 {
        self.elapsed += dt_sec.clamp(0.0, MAX_FRAME_DT);
        self.elapsed
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RoomHover {
    #[default]
    Idle,
    Hovered,
}

#[derive(Clone, Debug)]
pub struct RoomZone {
    pub title: String,
    pub accent: [f32; 3],
    pub position: Vec3,
    pub hover: RoomHover,
    /// Section anchor; `None` when the nav table has no entry for the title.
    pub anchor: Option<String>,
    pub accent_level: f32,
    pub accent_rail: NodeId,
    pub bounds: Aabb,
    pub portal_bounds: Aabb,
}

impl RoomZone {
    pub fn accent_target(&self) -> f32 {
        match self.hover {
            RoomHover::Hovered => ACCENT_HOVERED,
            RoomHover::Idle => ACCENT_IDLE,
        }
    }

    fn step_accent(&mut self) {
        self.accent_level += (self.accent_target() - self.accent_level) * ACCENT_LERP;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavRequest {
    pub zone: String,
    pub anchor: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pick {
    pub room: Option<usize>,
    pub portal: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightKind {
    Directional,
    Point,
    Spot,
    Area,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub kind: LightKind,
    pub position: Vec3,
    pub target: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub angle: f32, // spot half-angle, radians
    pub penumbra: f32,
}

impl Light {
    fn new(kind: LightKind, position: Vec3, hex: &str, intensity: f32) -> Self {
        Self {
            kind,
            position,
            target: Vec3::ZERO,
            color: hex_to_linear(hex),
            intensity,
            angle: 0.0,
            penumbra: 0.0,
        }
    }
}

pub fn studio_lights() -> [Light; 5] {
    let mut spot = Light::new(LightKind::Spot, Vec3::new(0.0, 8.0, 2.0), "#ffffff", 0.8);
    spot.angle = 0.6;
    spot.penumbra = 0.5;
    let mut area = Light::new(LightKind::Area, Vec3::new(0.0, 3.0, -6.0), "#ffffff", 5.0);
    area.target = Vec3::new(0.0, 1.0, -10.0);
    [
        Light::new(LightKind::Directional, Vec3::new(6.0, 10.0, 6.0), "#ffffff", 1.0),
        Light::new(LightKind::Point, Vec3::new(-6.0, 5.0, -5.0), "#26538d", 0.5),
        Light::new(LightKind::Point, Vec3::new(6.0, 5.0, 5.0), "#1a3a5c", 0.4),
        spot,
        area,
    ]
}

/// (title, position, accent)
pub const ROOMS: [(&str, [f32; 3], &str); 5] = [
    ("SERVICES", [-6.0, -1.6, -2.0], "#26538d"),
    ("CASE STUDIES", [6.0, -1.6, -2.0], "#1a3a5c"),
    ("LABS", [-6.0, -1.6, 3.0], "#4ecdc4"),
    ("STORIES", [6.0, -1.6, 3.0], "#ffe66d"),
    ("CONTACT", [0.0, -1.6, 6.2], "#ff6b6b"),
];

const ROOM_HALF: Vec3 = Vec3::new(2.1, 1.275, 1.6);
const ROOM_CENTER: Vec3 = Vec3::new(0.0, 1.175, 0.0);
const PORTAL_OFFSET: Vec3 = Vec3::new(0.0, 0.6, 0.9);
const PORTAL_HALF: Vec3 = Vec3::new(0.7, 1.1, 0.09);
const CEILING_LIGHTS: usize = 10;

pub struct Studio {
    nodes: Vec<SceneNode>,
    poses: Vec<Pose>,
    world: Vec<Mat4>,
    animators: FnvHashMap<NodeId, Animator>,
    rooms: Vec<RoomZone>,
    hovered: Option<usize>,
    portal_hovered: bool,
    elapsed: f32,
}

impl Studio {
    pub fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            poses: Vec::new(),
            world: Vec::new(),
            animators: FnvHashMap::default(),
            rooms: Vec::new(),
            hovered: None,
            portal_hovered: false,
            elapsed: 0.0,
        }
    }

    /// The full studio: floor, back wall, ceiling lights, hub and five rooms.
    pub fn new(nav: &NavTable) -> Self {
        let mut s = Self::empty();
        s.build_floor();
        s.build_wall();
        s.build_ceiling_lights();
        s.build_hub();
        for (i, (title, pos, accent)) in ROOMS.iter().enumerate() {
            let content = s.build_room(title, Vec3::from_array(*pos), accent, nav);
            match i {
                0 => s.services_content(content),
                1 => s.case_study_content(content),
                2 => s.labs_content(content),
                3 => s.stories_content(content),
                _ => s.contact_content(content),
            }
        }
        s.update(0.0);
        s
    }

    pub fn add(
        &mut self,
        parent: Option<NodeId>,
        local: Transform,
        shape: Option<Shape>,
        material: Option<Material>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SceneNode {
            parent,
            local,
            shape,
            material,
        });
        self.poses.push(Pose {
            local,
            emissive_intensity: None,
        });
        let parent_world = parent.map_or(Mat4::IDENTITY, |p| self.world[p.index()]);
        self.world.push(parent_world * local.matrix());
        id
    }

    fn group(&mut self, parent: Option<NodeId>, local: Transform) -> NodeId {
        self.add(parent, local, None, None)
    }

    fn mesh(&mut self, parent: Option<NodeId>, local: Transform, shape: Shape, material: Material) -> NodeId {
        self.add(parent, local, Some(shape), Some(material))
    }

    pub fn animate(&mut self, id: NodeId, animator: Animator) {
        self.animators.insert(id, animator);
    }

    pub fn nodes(&self) -> &[SceneNode] {
        &self.nodes
    }

    pub fn pose(&self, id: NodeId) -> &Pose {
        &self.poses[id.index()]
    }

    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        self.world[id.index()]
    }

    pub fn animator(&self, id: NodeId) -> Option<&Animator> {
        self.animators.get(&id)
    }

    pub fn rooms(&self) -> &[RoomZone] {
        &self.rooms
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn hovered_zone(&self) -> Option<&str> {
        self.hovered.map(|i| self.rooms[i].title.as_str())
    }

    pub fn is_portal_hovered(&self) -> bool {
        self.portal_hovered
    }

    /// One frame: animators, accent rails, then world matrices.
    pub fn update(&mut self, elapsed: f32) {
        self.elapsed = elapsed;
        for room in &mut self.rooms {
            room.step_accent();
            self.poses[room.accent_rail.index()].emissive_intensity = Some(room.accent_level);
        }
        for i in 0..self.nodes.len() {
            let node = &self.nodes[i];
            let parent_world = node.parent.map_or(Mat4::IDENTITY, |p| self.world[p.index()]);
            if let Some(anim) = self.animators.get(&NodeId(i as u32)) {
                self.poses[i].local = anim.pose(&node.local, elapsed, &parent_world);
                if let Some(e) = anim.emissive(elapsed) {
                    self.poses[i].emissive_intensity = Some(e);
                }
            }
            self.world[i] = parent_world * self.poses[i].local.matrix();
        }
    }

    /// Nearest room whose bounds the ray enters, and whether it lands on that room's portal.
    pub fn pick(&self, ray: &Ray) -> Pick {
        let mut best: Option<(usize, f32)> = None;
        for (i, room) in self.rooms.iter().enumerate() {
            if let Some(t) = room.bounds.hit(ray) {
                if best.map_or(true, |(_, bt)| t < bt) {
                    best = Some((i, t));
                }
            }
        }
        match best {
            Some((i, _)) => Pick {
                room: Some(i),
                portal: self.rooms[i].portal_bounds.hit(ray).is_some(),
            },
            None => Pick::default(),
        }
    }

    /// Applies a pick to the hover state machine. Returns true when the hovered zone changed.
    pub fn pointer_at(&mut self, pick: Pick) -> bool {
        self.portal_hovered = pick.portal;
        if pick.room == self.hovered {
            return false;
        }
        if let Some(prev) = self.hovered {
            self.rooms[prev].hover = RoomHover::Idle;
        }
        if let Some(next) = pick.room {
            self.rooms[next].hover = RoomHover::Hovered;
        }
        self.hovered = pick.room;
        true
    }

    pub fn pointer_left(&mut self) -> bool {
        self.pointer_at(Pick::default())
    }

    /// A click on a portal asks the page to scroll; hover state is left as is.
    pub fn click(&self, pick: Pick) -> Option<NavRequest> {
        if !pick.portal {
            return None;
        }
        let room = &self.rooms[pick.room?];
        Some(NavRequest {
            zone: room.title.clone(),
            anchor: room.anchor.clone()?,
        })
    }

    // ---------------- layout ----------------

    fn build_floor(&mut self) {
        let grid = TextureKey::Grid {
            size: GRID_SIZE,
            divisions: GRID_DIVISIONS,
        };
        self.mesh(
            None,
            Transform::at(0.0, -2.0, 0.0).rotated_x(-FRAC_PI_2),
            Shape::Plane {
                width: 60.0,
                height: 60.0,
            },
            Material::Standard(Surface::new("#f5f3ef", 0.95, 0.05).textured(grid, 2.0)),
        );
    }

    fn build_wall(&mut self) {
        let wall = self.group(None, Transform::at(0.0, -0.2, -10.0));
        self.mesh(
            Some(wall),
            Transform::IDENTITY,
            Shape::Cuboid {
                size: Vec3::new(18.0, 6.0, 0.4),
            },
            Material::Standard(
                Surface::new("#f6f1ea", 0.85, 0.05).textured(TextureKey::WallPattern, 3.0),
            ),
        );
        self.text_plane(wall, [0.0, 0.6, 0.21], (8.0, 2.0), "MZML", 140, "#1a1a1a");
        self.text_plane(wall, [0.0, -0.8, 0.21], (6.0, 1.0), "DIGITAL STUDIO", 48, "#26538d");
        self.mesh(
            Some(wall),
            Transform::at(0.0, -1.6, 0.22),
            Shape::Cuboid {
                size: Vec3::new(6.0, 0.08, 0.02),
            },
            Material::flat("#26538d"),
        );
    }

    fn build_ceiling_lights(&mut self) {
        for i in 0..CEILING_LIGHTS {
            let id = self.mesh(
                None,
                Transform::at(-10.0 + i as f32 * 2.2, 3.2, -2.0).scaled(Vec3::new(1.0, 0.2, 0.6)),
                Shape::Cuboid {
                    size: Vec3::new(0.8, 0.1, 0.4),
                },
                Material::Standard(Surface::new("#efe9e2", 0.4, 0.0).glowing("#cfd8ff", 0.8)),
            );
            self.animate(
                id,
                Animator::Glow {
                    base: 0.8,
                    amplitude: 0.15,
                    frequency: 2.0,
                },
            );
        }
    }

    fn build_hub(&mut self) {
        let hub = self.group(None, Transform::at(0.0, -1.2, -1.0));
        self.mesh(
            Some(hub),
            Transform::at(0.0, 0.1, 0.0),
            Shape::Cylinder {
                radius_top: 2.5,
                radius_bottom: 2.5,
                height: 0.2,
                segments: 64,
            },
            Material::Standard(Surface::new("#1a1a1a", 0.5, 0.6)),
        );
        let ring = self.mesh(
            Some(hub),
            Transform::at(0.0, 0.55, 0.0),
            Shape::Torus {
                radius: 1.2,
                tube: 0.05,
                radial: 16,
                tubular: 100,
            },
            Material::Standard(Surface::new("#26538d", 0.2, 0.8)),
        );
        self.animate(
            ring,
            Animator::Spin {
                axis: Vec3::Z,
                rate: 0.3,
            },
        );
        self.text_plane(hub, [0.0, 0.5, 0.0], (1.4, 0.6), "MZML", 48, "#ffffff");
    }

    /// Room shell with portal; returns the content group.
    fn build_room(&mut self, title: &str, position: Vec3, accent: &str, nav: &NavTable) -> NodeId {
        let room = self.group(None, Transform::at(position.x, position.y, position.z));
        self.mesh(
            Some(room),
            Transform::IDENTITY,
            Shape::Cuboid {
                size: Vec3::new(4.0, 0.2, 3.2),
            },
            Material::Standard(Surface::new("#f3efe9", 0.9, 0.05)),
        );
        self.mesh(
            Some(room),
            Transform::at(0.0, 1.2, -1.5),
            Shape::Cuboid {
                size: Vec3::new(4.0, 2.4, 0.2),
            },
            Material::Standard(
                Surface::new("#f8f4ef", 0.85, 0.05).textured(TextureKey::WallPattern, 2.0),
            ),
        );
        for x in [-2.0, 2.0] {
            self.mesh(
                Some(room),
                Transform::at(x, 1.0, 0.0),
                Shape::Cuboid {
                    size: Vec3::new(0.2, 2.0, 3.2),
                },
                Material::Standard(Surface::new("#f4efe8", 0.8, 0.0)),
            );
        }
        self.text_plane(room, [0.0, 2.1, -1.35], (2.6, 0.5), title, 48, "#1a1a1a");
        let accent_rail = self.mesh(
            Some(room),
            Transform::at(0.0, 0.3, -1.35),
            Shape::Cuboid {
                size: Vec3::new(2.8, 0.06, 0.06),
            },
            Material::Standard(Surface::new(accent, 0.3, 0.6).glowing(accent, ACCENT_IDLE)),
        );

        let portal = self.group(
            Some(room),
            Transform::at(PORTAL_OFFSET.x, PORTAL_OFFSET.y, PORTAL_OFFSET.z),
        );
        self.mesh(
            Some(portal),
            Transform::IDENTITY,
            Shape::Cuboid {
                size: Vec3::new(1.4, 2.2, 0.18),
            },
            Material::Standard(Surface::new("#1a1a1a", 0.5, 0.3)),
        );
        self.mesh(
            Some(portal),
            Transform::at(0.0, 0.0, 0.11),
            Shape::Plane {
                width: 1.1,
                height: 1.8,
            },
            Material::Portal {
                color: hex_to_linear(accent),
            },
        );
        self.text_plane(portal, [0.0, -1.25, 0.11], (1.4, 0.35), title, 36, "#ffffff");

        self.rooms.push(RoomZone {
            title: title.to_string(),
            accent: hex_to_linear(accent),
            position,
            hover: RoomHover::Idle,
            anchor: nav.anchor_for(title).map(str::to_string),
            accent_level: ACCENT_IDLE,
            accent_rail,
            bounds: Aabb::from_center_half(position + ROOM_CENTER, ROOM_HALF),
            portal_bounds: Aabb::from_center_half(position + PORTAL_OFFSET, PORTAL_HALF),
        });
        self.group(Some(room), Transform::at(0.0, 0.2, 0.0))
    }

    fn text_plane(
        &mut self,
        parent: NodeId,
        at: [f32; 3],
        size: (f32, f32),
        text: &str,
        font_px: u32,
        color: &str,
    ) -> NodeId {
        self.mesh(
            Some(parent),
            Transform::at(at[0], at[1], at[2]),
            Shape::Plane {
                width: size.0,
                height: size.1,
            },
            Material::decal(TextureKey::text(text, font_px, color)),
        )
    }

    fn services_content(&mut self, content: NodeId) {
        const SERVICES: [(&str, &str, [f32; 3]); 5] = [
            ("\u{1F4BB}", "Web Dev", [-1.2, 0.6, 0.2]),
            ("\u{1F4F1}", "Mobile", [0.0, 0.9, 0.6]),
            ("\u{1F3A8}", "UI/UX", [1.2, 0.6, 0.2]),
            ("\u{2699}\u{FE0F}", "Software", [-0.6, 0.2, -0.5]),
            ("\u{2601}\u{FE0F}", "Cloud", [0.6, 0.2, -0.5]),
        ];
        self.mesh(
            Some(content),
            Transform::at(0.0, 0.1, 0.0),
            Shape::Cylinder {
                radius_top: 1.1,
                radius_bottom: 1.1,
                height: 0.2,
                segments: 32,
            },
            Material::Standard(Surface::new("#1a3a5c", 0.3, 0.5)),
        );
        for (i, (icon, label, pos)) in SERVICES.iter().enumerate() {
            let phase = i as f32 * 0.5;
            let g = self.group(Some(content), Transform::at(pos[0], pos[1], pos[2]));
            let orb = self.mesh(
                Some(g),
                Transform::IDENTITY,
                Shape::Sphere {
                    radius: 0.35,
                    segments: 32,
                },
                Material::Standard(Surface::new("#26538d", 0.2, 0.6)),
            );
            self.animate(
                orb,
                Animator::Bob {
                    amplitude: 0.12,
                    frequency: 2.0,
                    phase,
                    spin_rate: 0.5,
                    spin_phase: phase,
                },
            );
            self.text_plane(g, [0.0, 0.0, 0.36], (0.5, 0.5), icon, 70, "#ffffff");
            self.text_plane(g, [0.0, -0.65, 0.0], (1.1, 0.28), label, 28, "#f0ffff");
        }
    }

    fn case_study_content(&mut self, content: NodeId) {
        const PROJECTS: [(&str, &str, &str); 3] = [
            ("LurnRyte", "EdTech", "#ff6b6b"),
            ("E-Commerce", "Retail", "#4ecdc4"),
            ("Portfolio", "Design", "#ffe66d"),
        ];
        let cards = self.group(Some(content), Transform::at(0.0, 0.2, 0.0));
        for (i, (name, kind, color)) in PROJECTS.iter().enumerate() {
            let fi = i as f32;
            let g = self.group(
                Some(cards),
                Transform::at((fi * 2.1).cos() * 1.1, 0.7 + fi * 0.25, (fi * 2.1).sin() * 0.9),
            );
            let card = self.mesh(
                Some(g),
                Transform::IDENTITY,
                Shape::Cuboid {
                    size: Vec3::new(1.1, 0.75, 0.12),
                },
                Material::Standard(Surface::new(color, 0.3, 0.4)),
            );
            // 0.005 rad per 60 Hz frame
            self.animate(
                card,
                Animator::Bob {
                    amplitude: 0.08,
                    frequency: 1.0,
                    phase: fi,
                    spin_rate: 0.3,
                    spin_phase: 0.0,
                },
            );
            self.text_plane(g, [0.0, 0.1, 0.08], (0.9, 0.28), name, 36, "#ffffff");
            self.text_plane(g, [0.0, -0.2, 0.08], (0.7, 0.2), kind, 24, "#f0ffff");
        }
    }

    fn labs_content(&mut self, content: NodeId) {
        const BEAKERS: [([f32; 3], &str); 3] = [
            ([-0.8, 0.4, 0.3], "#ff6b6b"),
            ([0.1, 0.8, -0.2], "#4ecdc4"),
            ([0.9, 0.5, 0.4], "#ffe66d"),
        ];
        const FORMULAS: [([f32; 3], &str); 3] = [
            ([-1.1, 1.3, 0.0], "AI"),
            ([1.1, 1.5, 0.5], "ML"),
            ([0.0, 1.7, -0.5], "IoT"),
        ];
        for (pos, color) in BEAKERS {
            let beaker = self.mesh(
                Some(content),
                Transform::at(pos[0], pos[1], pos[2]),
                Shape::Cylinder {
                    radius_top: 0.25,
                    radius_bottom: 0.3,
                    height: 0.6,
                    segments: 16,
                },
                Material::Standard(Surface::new(color, 0.1, 0.2).translucent(0.85)),
            );
            self.animate(
                beaker,
                Animator::Bob {
                    amplitude: 0.05,
                    frequency: 2.0,
                    phase: 0.0,
                    spin_rate: 0.3,
                    spin_phase: 0.0,
                },
            );
        }
        for (pos, text) in FORMULAS {
            let label = self.text_plane(content, pos, (0.8, 0.4), text, 48, "#ffffff");
            self.animate(
                label,
                Animator::FaceTarget {
                    amplitude: 0.1,
                    phase: pos[0],
                    target: Vec3::new(0.0, 5.0, 10.0),
                },
            );
        }
    }

    fn stories_content(&mut self, content: NodeId) {
        const BOOKS: [([f32; 3], &str, &str); 3] = [
            ([-0.6, 0.3, 0.0], "#ff6b6b", "Case 1"),
            ([0.6, 0.5, 0.2], "#4ecdc4", "Case 2"),
            ([0.0, 0.85, -0.1], "#ffe66d", "Case 3"),
        ];
        for (pos, color, title) in BOOKS {
            let g = self.group(Some(content), Transform::at(pos[0], pos[1], pos[2]));
            let book = self.mesh(
                Some(g),
                Transform::IDENTITY,
                Shape::Cuboid {
                    size: Vec3::new(0.8, 0.12, 1.1),
                },
                Material::Standard(Surface::new(color, 0.4, 0.0)),
            );
            self.animate(
                book,
                Animator::Sway {
                    amplitude: 0.03,
                    phase: pos[0],
                    sway_rate: 0.5,
                    sway_angle: 0.1,
                },
            );
            self.mesh(
                Some(g),
                Transform::at(0.0, 0.08, 0.0).rotated_x(-FRAC_PI_2),
                Shape::Plane {
                    width: 0.6,
                    height: 0.1,
                },
                Material::decal(TextureKey::text(title, 28, "#ffffff")),
            );
        }
    }

    fn contact_content(&mut self, content: NodeId) {
        const CHANNELS: [([f32; 3], &str, &str); 3] = [
            ([-0.6, 0.7, 0.0], "\u{2709}\u{FE0F}", "Email"),
            ([0.6, 0.7, 0.0], "\u{1F4DE}", "Call"),
            ([0.0, 1.2, 0.3], "\u{1F4AC}", "Chat"),
        ];
        for (pos, icon, label) in CHANNELS {
            let g = self.group(Some(content), Transform::at(pos[0], pos[1], pos[2]));
            let orb = self.mesh(
                Some(g),
                Transform::IDENTITY,
                Shape::Sphere {
                    radius: 0.33,
                    segments: 32,
                },
                Material::Standard(Surface::new("#1a3a5c", 0.2, 0.5)),
            );
            self.animate(
                orb,
                Animator::Bob {
                    amplitude: 0.08,
                    frequency: 2.0,
                    phase: pos[0],
                    spin_rate: 0.5,
                    spin_phase: 0.0,
                },
            );
            self.text_plane(g, [0.0, 0.0, 0.36], (0.4, 0.4), icon, 56, "#ffffff");
            self.text_plane(g, [0.0, -0.58, 0.0], (0.8, 0.22), label, 24, "#f0ffff");
        }
    }
}
