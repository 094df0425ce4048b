pub mod pointer;

pub use pointer::{wire_scene_pointer, SceneInput};
