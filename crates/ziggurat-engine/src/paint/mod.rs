//! Colour representation shared by the frame context and renderers.

pub mod color;

pub use color::Color;
