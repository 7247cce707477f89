//! wgpu backend.
//!
//! Owns both state buffers, the readback buffer, the parameter block, the
//! output texture, the compute pipeline and its two binding sets. Everything
//! is created in [`GpuGrid::new`] and released once when the grid is dropped.

mod buffers;
mod pipeline;
mod readback;

use crate::backend::GridBackend;
use crate::config::{CellPalette, LifeConfig};
use crate::dims::GridDims;
use crate::error::{LifeError, LifeResult};
use crate::kernel::KernelParams;
use crate::parity::Parity;

use buffers::GridBuffers;
use pipeline::StepPipeline;

pub struct GpuGrid {
    device: wgpu::Device,
    queue: wgpu::Queue,
    dims: GridDims,
    palette: CellPalette,

    buffers: GridBuffers,
    pipeline: StepPipeline,

    /// Padded scratch for uploads; state buffers are word-sized.
    upload: Vec<u8>,
}

impl GpuGrid {
    /// Allocates all GPU objects for the configured grid (all cells dead).
    ///
    /// Fails if the grid request is invalid or the device cannot host it.
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, config: &LifeConfig) -> LifeResult<Self> {
        let dims = GridDims::new(config.width, config.height, config.tile_size)?;
        check_limits(&device.limits(), dims)?;

        let buffers = GridBuffers::new(device, dims);
        let pipeline = StepPipeline::new(device, dims, &buffers);

        Ok(Self {
            device: device.clone(),
            queue: queue.clone(),
            dims,
            palette: config.palette,
            buffers,
            pipeline,
            upload: vec![0; dims.padded_len()],
        })
    }

    /// The renderable output, refreshed by every dispatch.
    pub fn output_view(&self) -> &wgpu::TextureView {
        &self.buffers.output_view
    }

    pub fn output_texture(&self) -> &wgpu::Texture {
        &self.buffers.output
    }
}

impl GridBackend for GpuGrid {
    type Encoder = wgpu::CommandEncoder;

    fn dims(&self) -> GridDims {
        self.dims
    }

    fn read_state(&mut self, parity: Parity, out: &mut [u8]) -> LifeResult<()> {
        readback::copy_to_host(
            &self.device,
            &self.queue,
            &self.buffers.state[parity.index()],
            &self.buffers.readback,
            out,
        )
    }

    // Queue writes land before any later submission, so the frame's dispatch
    // (recorded into an encoder submitted afterwards) sees them.
    fn write_state(&mut self, parity: Parity, cells: &[u8]) -> LifeResult<()> {
        self.upload[..cells.len()].copy_from_slice(cells);
        self.queue
            .write_buffer(&self.buffers.state[parity.index()], 0, &self.upload);
        Ok(())
    }

    fn set_palette(&mut self, palette: CellPalette) {
        self.palette = palette;
    }

    /// Records the step. The parameter block is written through the queue, so
    /// at most one dispatch may be recorded per submission.
    fn dispatch(&mut self, encoder: &mut wgpu::CommandEncoder, active: Parity, write_enable: bool) {
        let params = KernelParams::new(self.dims, write_enable, &self.palette);
        self.queue
            .write_buffer(&self.buffers.params, 0, bytemuck::bytes_of(&params));

        let (groups_x, groups_y) = self.dims.workgroups();

        let mut cpass = encoder.begin_compute_pass(&wgpu::ComputePassDescriptor {
            label: Some("ziggurat life step"),
            timestamp_writes: None,
        });
        cpass.set_pipeline(&self.pipeline.pipeline);
        cpass.set_bind_group(0, self.pipeline.bind_group(active), &[]);
        cpass.dispatch_workgroups(groups_x, groups_y, 1);
    }
}

impl Drop for GpuGrid {
    fn drop(&mut self) {
        self.buffers.destroy();
        log::debug!(
            "released life grid {}x{}",
            self.dims.width(),
            self.dims.height()
        );
    }
}

fn check_limits(limits: &wgpu::Limits, dims: GridDims) -> LifeResult<()> {
    let tile = dims.tile();
    let axis_limit = limits
        .max_compute_workgroup_size_x
        .min(limits.max_compute_workgroup_size_y);
    if tile > axis_limit {
        return Err(LifeError::TileExceedsDevice { tile, limit: axis_limit });
    }

    let invocations = tile as u64 * tile as u64;
    if invocations > limits.max_compute_invocations_per_workgroup as u64 {
        return Err(LifeError::TileExceedsDevice {
            tile,
            limit: limits.max_compute_invocations_per_workgroup,
        });
    }

    let too_wide = dims.width() > limits.max_texture_dimension_2d
        || dims.height() > limits.max_texture_dimension_2d;
    let too_large = dims.padded_len() as u64 > limits.max_storage_buffer_binding_size as u64;
    if too_wide || too_large {
        return Err(LifeError::GridExceedsDevice {
            width: dims.width(),
            height: dims.height(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(w: u32, h: u32, tile: u32) -> GridDims {
        GridDims::new(w, h, tile).unwrap()
    }

    #[test]
    fn default_tile_fits_default_limits() {
        assert!(check_limits(&wgpu::Limits::default(), dims(64, 64, 16)).is_ok());
    }

    #[test]
    fn oversized_tile_is_rejected() {
        let err = check_limits(&wgpu::Limits::default(), dims(64, 64, 32)).unwrap_err();
        assert!(matches!(err, LifeError::TileExceedsDevice { tile: 32, .. }));
    }

    #[test]
    fn oversized_grid_is_rejected() {
        let limits = wgpu::Limits {
            max_texture_dimension_2d: 128,
            ..wgpu::Limits::default()
        };
        let err = check_limits(&limits, dims(256, 64, 16)).unwrap_err();
        assert_eq!(err, LifeError::GridExceedsDevice { width: 256, height: 64 });
    }
}
