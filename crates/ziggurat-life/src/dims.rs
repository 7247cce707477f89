use crate::error::{LifeError, LifeResult};

/// Effective grid size, fixed for the lifetime of an engine.
///
/// Both axes are multiples of the compute tile size. Requests that are not
/// are rounded down to the nearest multiple, never below one tile.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct GridDims {
    width: u32,
    height: u32,
    tile: u32,
}

impl GridDims {
    /// Validates the request and rounds each axis to the tile grid.
    ///
    /// Zero width/height or a zero tile size is an error. Mismatches between
    /// the request and the tile size are not.
    pub fn new(width: u32, height: u32, tile: u32) -> LifeResult<Self> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        if tile == 0 {
            return Err(LifeError::InvalidTileSize(tile));
        }

        let dims = Self {
            width: round_to_tile(width, tile),
            height: round_to_tile(height, tile),
            tile,
        };

        if dims.width != width || dims.height != height {
            log::debug!(
                "grid {width}x{height} rounded to {}x{} (tile {tile})",
                dims.width,
                dims.height
            );
        }

        Ok(dims)
    }

    #[inline]
    pub fn width(self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(self) -> u32 {
        self.height
    }

    #[inline]
    pub fn tile(self) -> u32 {
        self.tile
    }

    /// Number of cells (one byte each).
    #[inline]
    pub fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Byte length of a GPU state buffer: cells padded to a whole number of
    /// 32-bit words, as buffer copies require.
    #[inline]
    pub fn padded_len(self) -> usize {
        self.cell_count().next_multiple_of(4)
    }

    /// Row-major cell index. Caller guarantees `x < width` and `y < height`.
    #[inline]
    pub fn index(self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn contains(self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    /// Workgroup counts for one full-grid dispatch.
    #[inline]
    pub fn workgroups(self) -> (u32, u32) {
        (self.width / self.tile, self.height / self.tile)
    }
}

fn round_to_tile(requested: u32, tile: u32) -> u32 {
    ((requested / tile) * tile).max(tile)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_multiples_are_kept() {
        let d = GridDims::new(64, 32, 16).unwrap();
        assert_eq!((d.width(), d.height()), (64, 32));
        assert_eq!(d.workgroups(), (4, 2));
    }

    #[test]
    fn rounds_down_to_tile_multiple() {
        let d = GridDims::new(70, 70, 16).unwrap();
        assert_eq!((d.width(), d.height()), (64, 64));
    }

    #[test]
    fn never_rounds_to_zero() {
        let d = GridDims::new(8, 8, 16).unwrap();
        assert_eq!((d.width(), d.height()), (16, 16));
    }

    #[test]
    fn axes_round_independently() {
        let d = GridDims::new(100, 5, 16).unwrap();
        assert_eq!((d.width(), d.height()), (96, 16));
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            GridDims::new(0, 64, 16),
            Err(LifeError::InvalidDimensions { width: 0, height: 64 })
        );
        assert!(GridDims::new(64, 0, 16).is_err());
    }

    #[test]
    fn zero_tile_is_rejected() {
        assert_eq!(GridDims::new(64, 64, 0), Err(LifeError::InvalidTileSize(0)));
    }

    #[test]
    fn padded_len_is_word_aligned() {
        let d = GridDims::new(3, 3, 1).unwrap();
        assert_eq!(d.cell_count(), 9);
        assert_eq!(d.padded_len(), 12);
    }

    #[test]
    fn index_is_row_major() {
        let d = GridDims::new(16, 16, 16).unwrap();
        assert_eq!(d.index(0, 0), 0);
        assert_eq!(d.index(3, 2), 35);
    }

    #[test]
    fn contains_is_half_open() {
        let d = GridDims::new(16, 16, 16).unwrap();
        assert!(d.contains(0, 15));
        assert!(!d.contains(16, 0));
        assert!(!d.contains(-1, 0));
    }
}
