use crate::backend::GridBackend;
use crate::cadence::Cadence;
use crate::config::{CellPalette, LifeConfig};
use crate::dims::GridDims;
use crate::edits::{CellCoord, EditQueue};
use crate::error::LifeResult;
use crate::parity::Parity;

/// Outcome of one [`LifeEngine::run_frame`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct FrameReport {
    /// Pending edits were staged into the active buffer this frame.
    pub edits_applied: bool,
    /// The dispatch advanced the automaton by one generation.
    pub committed: bool,
    /// Active parity the dispatch targeted.
    pub active: Parity,
}

/// Per-frame sequencer for one simulation instance.
///
/// Each frame runs, in order: edit drain, cadence check (flipping the active
/// parity on commit), dispatch with the parity's binding set. All simulation
/// state lives here; independent engines never share anything.
pub struct LifeEngine<B: GridBackend> {
    backend: B,
    dims: GridDims,
    active: Parity,
    cadence: Cadence,
    edits: EditQueue,
    staging: Vec<u8>,
}

impl<B: GridBackend> LifeEngine<B> {
    /// Wraps a freshly allocated (all-dead) backend.
    pub fn new(backend: B, config: &LifeConfig) -> Self {
        let dims = backend.dims();
        log::debug!(
            "life engine: {}x{} grid, {} frame(s) per step, paused={}",
            dims.width(),
            dims.height(),
            config.frames_per_step,
            config.paused
        );

        Self {
            backend,
            dims,
            active: Parity::Even,
            cadence: Cadence::new(config.frames_per_step, config.paused),
            edits: EditQueue::new(),
            staging: vec![0; dims.cell_count()],
        }
    }

    // ── producers ─────────────────────────────────────────────────────────

    /// Queues `(x, y)` to become live at the next frame.
    ///
    /// Coordinates must already be in bounds.
    pub fn request_activate(&mut self, x: u32, y: u32) {
        debug_assert!(self.dims.contains(x as i64, y as i64));
        self.edits.activate(CellCoord::new(x, y));
    }

    /// Queues `(x, y)` to become dead at the next frame.
    ///
    /// Coordinates must already be in bounds.
    pub fn request_deactivate(&mut self, x: u32, y: u32) {
        debug_assert!(self.dims.contains(x as i64, y as i64));
        self.edits.deactivate(CellCoord::new(x, y));
    }

    /// Queues a wipe of the whole grid, overriding this frame's other edits.
    pub fn request_clear(&mut self) {
        self.edits.clear();
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.cadence.is_paused() != paused {
            log::info!("simulation {}", if paused { "paused" } else { "resumed" });
        }
        self.cadence.set_paused(paused);
    }

    pub fn toggle_paused(&mut self) -> bool {
        let paused = !self.cadence.is_paused();
        self.set_paused(paused);
        paused
    }

    /// Halves frames-per-step; returns the new value.
    pub fn speed_up(&mut self) -> u32 {
        let n = self.cadence.speed_up();
        log::info!("delay frames: {n}");
        n
    }

    /// Doubles frames-per-step (0 → 1); returns the new value.
    pub fn slow_down(&mut self) -> u32 {
        let n = self.cadence.slow_down();
        log::info!("delay frames: {n}");
        n
    }

    pub fn set_palette(&mut self, palette: CellPalette) {
        self.backend.set_palette(palette);
    }

    // ── frame ─────────────────────────────────────────────────────────────

    /// Runs one frame and records its dispatch into `encoder`.
    ///
    /// Edits are staged synchronously before the dispatch is recorded, so the
    /// kernel always sees them. Must not be re-entered from a producer.
    pub fn run_frame(&mut self, encoder: &mut B::Encoder) -> LifeResult<FrameReport> {
        let edits_applied = self.drain_edits()?;

        let committed = self.cadence.tick();
        if committed {
            self.active.flip();
        }

        self.backend.dispatch(encoder, self.active, committed);

        Ok(FrameReport {
            edits_applied,
            committed,
            active: self.active,
        })
    }

    // Read-modify-write of the active buffer only; the other buffer is left
    // as is. A committing dispatch overwrites every cell of its target, so
    // stale contents there are never observed.
    fn drain_edits(&mut self) -> LifeResult<bool> {
        if !self.edits.is_pending() {
            return Ok(false);
        }

        log::debug!(
            "staging edits: +{} -{} clear={}",
            self.edits.added().len(),
            self.edits.removed().len(),
            self.edits.clear_requested()
        );

        self.backend.read_state(self.active, &mut self.staging)?;
        self.edits.apply(&mut self.staging, self.dims.width());
        self.backend.write_state(self.active, &self.staging)?;
        self.edits.reset();

        Ok(true)
    }

    // ── accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    #[inline]
    pub fn active(&self) -> Parity {
        self.active
    }

    #[inline]
    pub fn cadence(&self) -> &Cadence {
        &self.cadence
    }

    #[inline]
    pub fn has_pending_edits(&self) -> bool {
        self.edits.is_pending()
    }

    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Consumes the engine, handing back the backend for release.
    pub fn teardown(self) -> B {
        log::debug!("life engine torn down");
        self.backend
    }
}
