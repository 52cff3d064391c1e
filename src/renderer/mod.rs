//! WebGPU rendering module
//!
//! The scene builder turns `GameState` into a flat triangle list in game
//! space; `RenderState` maps it to the viewport and draws it.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, game_to_ndc};
pub use scene::build_scene;
pub use vertex::Vertex;
