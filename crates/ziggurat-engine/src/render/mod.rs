//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers, bind groups) and
//! record into the frame's encoder through [`RenderTarget`].
//!
//! Convention:
//! - World space is centred on the origin, +Y up.
//! - Vertex shaders convert world positions to NDC with a camera uniform.

mod camera;
mod ctx;
mod quad;

pub use camera::Camera2D;
pub use ctx::{RenderCtx, RenderTarget};
pub use quad::{TexturedQuad, TexturedQuadRenderer};
