use crate::config::CellPalette;
use crate::dims::GridDims;
use crate::error::LifeResult;
use crate::parity::Parity;

/// Storage and compute for the two ping-pong state buffers.
///
/// The engine owns all sequencing; a backend only moves bytes and records
/// dispatches. Snapshots are row-major, one byte per cell, `dims().cell_count()`
/// long.
pub trait GridBackend {
    /// Command stream a frame's dispatch is recorded into.
    type Encoder: ?Sized;

    fn dims(&self) -> GridDims;

    /// Copies state buffer `parity` into `out`, blocking until the copy is
    /// complete and visible to the CPU.
    fn read_state(&mut self, parity: Parity, out: &mut [u8]) -> LifeResult<()>;

    /// Replaces state buffer `parity` with `cells`.
    ///
    /// The write must be ordered before any dispatch recorded afterwards.
    fn write_state(&mut self, parity: Parity, cells: &[u8]) -> LifeResult<()>;

    /// Updates the colours used for the output buffer.
    fn set_palette(&mut self, palette: CellPalette);

    /// Records one kernel dispatch using the binding set for `active`:
    /// reads `active.other()`, targets `active`, refreshes the output.
    fn dispatch(&mut self, encoder: &mut Self::Encoder, active: Parity, write_enable: bool);
}
