//! Host-memory backend.
//!
//! Runs the same step rule as the GPU kernel on plain byte vectors. Useful for
//! headless runs and, with [`CpuGrid::recording`], for checking what every
//! dispatch saw without a device.

use crate::backend::GridBackend;
use crate::config::CellPalette;
use crate::dims::GridDims;
use crate::error::LifeResult;
use crate::kernel::next_generation;
use crate::parity::Parity;

/// What a single dispatch observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchRecord {
    pub active: Parity,
    pub write_enable: bool,
    /// Contents of the buffer the kernel read as its source: the previous
    /// generation when committing, the active one otherwise.
    pub source: Vec<u8>,
}

#[derive(Debug)]
pub struct CpuGrid {
    dims: GridDims,
    state: [Vec<u8>; 2],
    output: Vec<u8>,
    palette: CellPalette,
    /// `None` unless built with [`CpuGrid::recording`].
    dispatches: Option<Vec<DispatchRecord>>,
}

impl CpuGrid {
    /// All-dead grid that keeps no dispatch history.
    pub fn new(dims: GridDims) -> Self {
        let n = dims.cell_count();
        Self {
            dims,
            state: [vec![0; n], vec![0; n]],
            output: vec![0; n],
            palette: CellPalette::default(),
            dispatches: None,
        }
    }

    /// All-dead grid that snapshots the source of every dispatch.
    ///
    /// Each record holds a full copy of the grid; drain with
    /// [`take_dispatches`](Self::take_dispatches) on long runs.
    pub fn recording(dims: GridDims) -> Self {
        Self {
            dispatches: Some(Vec::new()),
            ..Self::new(dims)
        }
    }

    /// Raw contents of state buffer `parity`.
    pub fn cells(&self, parity: Parity) -> &[u8] {
        &self.state[parity.index()]
    }

    /// Live/dead view of the output buffer as last written by a dispatch.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn palette(&self) -> CellPalette {
        self.palette
    }

    /// Recorded dispatches, oldest first. Always empty when not recording.
    pub fn dispatches(&self) -> &[DispatchRecord] {
        self.dispatches.as_deref().unwrap_or(&[])
    }

    /// Hands back the recorded dispatches and starts a fresh history.
    pub fn take_dispatches(&mut self) -> Vec<DispatchRecord> {
        self.dispatches.as_mut().map(std::mem::take).unwrap_or_default()
    }
}

impl GridBackend for CpuGrid {
    /// Dispatches run eagerly; there is nothing to record into.
    type Encoder = ();

    fn dims(&self) -> GridDims {
        self.dims
    }

    fn read_state(&mut self, parity: Parity, out: &mut [u8]) -> LifeResult<()> {
        out.copy_from_slice(&self.state[parity.index()]);
        Ok(())
    }

    fn write_state(&mut self, parity: Parity, cells: &[u8]) -> LifeResult<()> {
        self.state[parity.index()].copy_from_slice(cells);
        Ok(())
    }

    fn set_palette(&mut self, palette: CellPalette) {
        self.palette = palette;
    }

    fn dispatch(&mut self, _encoder: &mut (), active: Parity, write_enable: bool) {
        let [even, odd] = &mut self.state;
        let (current, last) = match active {
            Parity::Even => (even, odd),
            Parity::Odd => (odd, even),
        };

        if write_enable {
            next_generation(last, current, self.dims);
        }
        self.output.copy_from_slice(current);

        if let Some(records) = self.dispatches.as_mut() {
            let source = if write_enable { last.clone() } else { current.clone() };
            records.push(DispatchRecord {
                active,
                write_enable,
                source,
            });
        }
    }
}
