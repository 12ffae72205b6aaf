//! Rendering module
//!
//! The scene is painted through the `DrawSurface` trait: a browser canvas on
//! the web, a recording `CommandBuffer` headless and in tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub use canvas::{CanvasSurface, SurfaceError};
pub use scene::draw_frame;
pub use surface::{Color, CommandBuffer, DrawCommand, DrawSurface, Font};
