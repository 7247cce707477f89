/// Colours the kernel writes into the output texture (straight RGBA, 0..1).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CellPalette {
    pub live: [f32; 4],
    pub dead: [f32; 4],
}

impl Default for CellPalette {
    fn default() -> Self {
        Self {
            live: [1.0, 1.0, 1.0, 1.0],
            dead: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

/// Construction-time parameters for a simulation.
///
/// `width`/`height` are requests; the effective grid is rounded to the tile
/// size (see [`GridDims`](crate::GridDims)).
#[derive(Debug, Clone, PartialEq)]
pub struct LifeConfig {
    pub width: u32,
    pub height: u32,

    /// Compute workgroup edge; the kernel runs `tile × tile` invocations per group.
    pub tile_size: u32,

    /// Frames between committed generations. `0` commits every frame.
    pub frames_per_step: u32,

    pub paused: bool,
    pub palette: CellPalette,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            tile_size: 16,
            frames_per_step: 4,
            paused: false,
            palette: CellPalette::default(),
        }
    }
}
