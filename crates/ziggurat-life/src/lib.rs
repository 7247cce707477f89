//! GPU-resident Game of Life.
//!
//! The simulation lives in two ping-pong state buffers stepped by a compute
//! kernel. A [`LifeEngine`] sequences each frame:
//!
//! 1. drain queued cell edits into the active buffer (blocking round trip),
//! 2. ask the [`Cadence`] whether this frame commits a generation, flipping
//!    the active [`Parity`] if so,
//! 3. record a dispatch with the binding set for that parity and a
//!    write-enable flag equal to the commit decision.
//!
//! The dispatch always refreshes the output texture, so edits and pauses stay
//! visible even when no generation is committed.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`dims`] | `GridDims` (tile rounding) |
//! | [`edits`] | `EditQueue`, `CellCoord` |
//! | [`cadence`] | `Cadence` |
//! | [`engine`] | `LifeEngine`, `FrameReport` |
//! | [`gpu`] | `GpuGrid` (wgpu resources) |
//! | [`cpu`] | `CpuGrid` (host-memory backend) |
//!
//! # Quick start
//!
//! ```rust
//! use ziggurat_life::{CpuGrid, GridDims, LifeConfig, LifeEngine};
//!
//! let config = LifeConfig { frames_per_step: 1, ..LifeConfig::default() };
//! let dims = GridDims::new(config.width, config.height, config.tile_size).unwrap();
//! let mut engine = LifeEngine::new(CpuGrid::new(dims), &config);
//!
//! engine.request_activate(5, 5);
//! let report = engine.run_frame(&mut ()).unwrap();
//! assert!(report.committed);
//! ```

pub mod backend;
pub mod cadence;
pub mod config;
pub mod cpu;
pub mod dims;
pub mod edits;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod kernel;
pub mod parity;

pub use backend::GridBackend;
pub use cadence::Cadence;
pub use config::{CellPalette, LifeConfig};
pub use cpu::{CpuGrid, DispatchRecord};
pub use dims::GridDims;
pub use edits::{CellCoord, EditQueue};
pub use engine::{FrameReport, LifeEngine};
pub use error::{LifeError, LifeResult};
pub use gpu::GpuGrid;
pub use parity::Parity;
