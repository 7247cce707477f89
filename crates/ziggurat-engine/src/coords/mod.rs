//! Coordinate types shared by the runtime and renderers.
//!
//! Window space is logical pixels, origin top-left, +Y down. World space
//! is centred on the origin with +Y up; [`crate::render::Camera2D`] maps
//! between the two.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
