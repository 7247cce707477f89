/// Grid coordinate of a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct CellCoord {
    pub x: u32,
    pub y: u32,
}

impl CellCoord {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Cell edits requested between two frames.
///
/// Producers only append; the engine drains the whole queue once at the start
/// of a frame. Coordinates are trusted: callers validate bounds before queueing.
#[derive(Debug, Default)]
pub struct EditQueue {
    add: Vec<CellCoord>,
    remove: Vec<CellCoord>,
    clear: bool,
}

impl EditQueue {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn activate(&mut self, cell: CellCoord) {
        self.add.push(cell);
    }

    #[inline]
    pub fn deactivate(&mut self, cell: CellCoord) {
        self.remove.push(cell);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.clear = true;
    }

    /// True when a drain would change anything.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.clear || !self.add.is_empty() || !self.remove.is_empty()
    }

    pub fn added(&self) -> &[CellCoord] {
        &self.add
    }

    pub fn removed(&self) -> &[CellCoord] {
        &self.remove
    }

    pub fn clear_requested(&self) -> bool {
        self.clear
    }

    /// Patches a row-major snapshot of `width`-wide cells.
    ///
    /// Order is fixed: adds, then removes, then clear. A cell both added and
    /// removed in one batch ends dead; a clear discards the whole batch.
    pub fn apply(&self, cells: &mut [u8], width: u32) {
        let at = |c: &CellCoord| c.y as usize * width as usize + c.x as usize;

        for c in &self.add {
            cells[at(c)] = 1;
        }
        for c in &self.remove {
            cells[at(c)] = 0;
        }
        if self.clear {
            cells.fill(0);
        }
    }

    /// Empties both lists and drops the clear flag. Keeps capacity.
    pub fn reset(&mut self) {
        self.add.clear();
        self.remove.clear();
        self.clear = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 4;

    fn grid() -> Vec<u8> {
        vec![0; 16]
    }

    #[test]
    fn empty_queue_is_not_pending() {
        assert!(!EditQueue::new().is_pending());
    }

    #[test]
    fn each_request_kind_marks_pending() {
        let mut q = EditQueue::new();
        q.activate(CellCoord::new(0, 0));
        assert!(q.is_pending());

        let mut q = EditQueue::new();
        q.deactivate(CellCoord::new(0, 0));
        assert!(q.is_pending());

        let mut q = EditQueue::new();
        q.clear();
        assert!(q.is_pending());
    }

    #[test]
    fn adds_set_cells_live() {
        let mut q = EditQueue::new();
        q.activate(CellCoord::new(1, 2));
        let mut cells = grid();
        q.apply(&mut cells, W);
        assert_eq!(cells[2 * 4 + 1], 1);
        assert_eq!(cells.iter().filter(|&&c| c == 1).count(), 1);
    }

    #[test]
    fn remove_wins_over_same_batch_add() {
        let mut q = EditQueue::new();
        q.activate(CellCoord::new(3, 3));
        q.deactivate(CellCoord::new(3, 3));
        let mut cells = grid();
        q.apply(&mut cells, W);
        assert!(cells.iter().all(|&c| c == 0));
    }

    #[test]
    fn repeated_remove_is_idempotent() {
        let mut once = grid();
        let mut twice = grid();
        once[5] = 1;
        twice[5] = 1;

        let mut q = EditQueue::new();
        q.deactivate(CellCoord::new(1, 1));
        q.apply(&mut once, W);

        q.deactivate(CellCoord::new(1, 1));
        q.apply(&mut twice, W);

        assert_eq!(once, twice);
    }

    #[test]
    fn clear_discards_same_batch_edits() {
        let mut q = EditQueue::new();
        q.activate(CellCoord::new(3, 3));
        q.clear();
        let mut cells = grid();
        cells[0] = 1;
        q.apply(&mut cells, W);
        assert!(cells.iter().all(|&c| c == 0));
    }

    #[test]
    fn untouched_cells_keep_their_state() {
        let mut cells = grid();
        cells[7] = 1;
        let mut q = EditQueue::new();
        q.activate(CellCoord::new(0, 0));
        q.apply(&mut cells, W);
        assert_eq!(cells[7], 1);
        assert_eq!(cells[0], 1);
    }

    #[test]
    fn reset_empties_everything() {
        let mut q = EditQueue::new();
        q.activate(CellCoord::new(0, 0));
        q.deactivate(CellCoord::new(1, 0));
        q.clear();
        q.reset();
        assert!(!q.is_pending());
        assert!(q.added().is_empty() && q.removed().is_empty() && !q.clear_requested());
    }
}
