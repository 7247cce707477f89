//! Host-side view of the compute kernel interface.

use bytemuck::{Pod, Zeroable};

use crate::config::CellPalette;
use crate::dims::GridDims;

const SHADER_TEMPLATE: &str = include_str!("shaders/life.wgsl");
const TILE_PLACEHOLDER: &str = "{{TILE}}";

/// Uniform block bound at `@group(0) @binding(3)`.
///
/// Layout mirrors `Params` in `life.wgsl` (48 bytes, 16-byte aligned).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(crate) struct KernelParams {
    pub size: [u32; 2],
    pub write_enable: u32,
    pub _pad: u32,
    pub live: [f32; 4],
    pub dead: [f32; 4],
}

impl KernelParams {
    pub(crate) fn new(dims: GridDims, write_enable: bool, palette: &CellPalette) -> Self {
        Self {
            size: [dims.width(), dims.height()],
            write_enable: write_enable as u32,
            _pad: 0,
            live: palette.live,
            dead: palette.dead,
        }
    }
}

/// Returns the WGSL source with the workgroup edge baked in.
pub(crate) fn shader_source(tile: u32) -> String {
    SHADER_TEMPLATE.replace(TILE_PLACEHOLDER, &tile.to_string())
}

/// Cell at `(x, y)` with toroidal wrap, read from a row-major byte grid.
#[inline]
fn wrapped(cells: &[u8], w: i64, h: i64, x: i64, y: i64) -> u8 {
    let x = x.rem_euclid(w);
    let y = y.rem_euclid(h);
    cells[(y * w + x) as usize]
}

/// One B3/S23 generation of `last`, written into `next`.
///
/// Host mirror of the kernel's commit path; both treat the grid as a torus.
pub fn next_generation(last: &[u8], next: &mut [u8], dims: GridDims) {
    let (w, h) = (dims.width() as i64, dims.height() as i64);

    for y in 0..h {
        for x in 0..w {
            let mut n = 0;
            for dy in -1..=1 {
                for dx in -1..=1 {
                    if dx != 0 || dy != 0 {
                        n += wrapped(last, w, h, x + dx, y + dy);
                    }
                }
            }
            let was_live = last[(y * w + x) as usize] != 0;
            next[(y * w + x) as usize] = (n == 3 || (was_live && n == 2)) as u8;
        }
    }
}
