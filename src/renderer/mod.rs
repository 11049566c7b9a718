//! WebGPU rendering module
//!
//! The game state is turned into a flat triangle list each frame
//! ([`scene::build_scene`]) and drawn by a single pipeline. Emoji glyphs are
//! layered on top by a 2D canvas in the browser.

pub mod glyphs;
pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

#[cfg(target_arch = "wasm32")]
pub use glyphs::GlyphLayer;
pub use pipeline::RenderState;
pub use scene::build_scene;
pub use vertex::Vertex;
