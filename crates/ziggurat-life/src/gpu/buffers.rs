//! Allocation of the grid's GPU-side objects.

use wgpu::util::DeviceExt;

use crate::dims::GridDims;
use crate::kernel::KernelParams;

pub(super) const OUTPUT_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Every buffer and texture one grid owns. Sizes are fixed at creation.
pub(super) struct GridBuffers {
    /// Ping-pong state, indexed by `Parity::index()`.
    pub state: [wgpu::Buffer; 2],
    /// Host-mappable mirror used to read one state buffer back.
    pub readback: wgpu::Buffer,
    pub params: wgpu::Buffer,
    pub output: wgpu::Texture,
    pub output_view: wgpu::TextureView,
}

impl GridBuffers {
    pub(super) fn new(device: &wgpu::Device, dims: GridDims) -> Self {
        let len = dims.padded_len();
        let zeros = vec![0u8; len];

        let state_buffer = |label: &'static str| {
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(label),
                contents: &zeros,
                usage: wgpu::BufferUsages::STORAGE
                    | wgpu::BufferUsages::COPY_SRC
                    | wgpu::BufferUsages::COPY_DST,
            })
        };
        let state = [
            state_buffer("ziggurat life state 0"),
            state_buffer("ziggurat life state 1"),
        ];

        let readback = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ziggurat life readback"),
            size: len as u64,
            usage: wgpu::BufferUsages::MAP_READ | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let params = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("ziggurat life params ubo"),
            size: std::mem::size_of::<KernelParams>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let output = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("ziggurat life output"),
            size: wgpu::Extent3d {
                width: dims.width(),
                height: dims.height(),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: OUTPUT_FORMAT,
            usage: wgpu::TextureUsages::STORAGE_BINDING | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let output_view = output.create_view(&wgpu::TextureViewDescriptor::default());

        log::debug!(
            "allocated life grid {}x{}: 2 x {len} B state, {len} B readback, {} B output",
            dims.width(),
            dims.height(),
            dims.cell_count() * 4
        );

        Self {
            state,
            readback,
            params,
            output,
            output_view,
        }
    }

    /// Releases GPU memory. Handles must not be used afterwards.
    pub(super) fn destroy(&self) {
        for buffer in &self.state {
            buffer.destroy();
        }
        self.readback.destroy();
        self.params.destroy();
        self.output.destroy();
    }
}
