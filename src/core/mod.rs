pub mod attrs;
pub mod camera;
pub mod constants;
pub mod count_up;
pub mod geometry;
pub mod magnetic;
pub mod nav;
pub mod pointer;
pub mod reveal;
pub mod scene;
pub mod scramble;
pub mod scroll;
pub mod sound;
pub mod texture;
pub mod tilt;
pub mod uniforms;

pub use nav::NavTable;
pub use scene::{Pick, SceneClock, Studio};
pub use sound::SoundGate;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static PORTAL_WGSL: &str = include_str!("../../shaders/portal.wgsl");
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
