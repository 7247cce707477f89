//! Ziggurat engine crate.
//!
//! Platform + GPU host for simulations: window and event loop, device and
//! surface, input state, frame timing, logging, and a 2D camera with a
//! textured-quad renderer used to present compute output.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
