use crate::dims::GridDims;
use crate::kernel::{shader_source, KernelParams};
use crate::parity::Parity;

use super::buffers::{GridBuffers, OUTPUT_FORMAT};

/// Compute pipeline plus one immutable binding set per parity.
pub(super) struct StepPipeline {
    pub pipeline: wgpu::ComputePipeline,
    /// `bind_groups[p]` reads `state[p.other()]` and targets `state[p]`.
    pub bind_groups: [wgpu::BindGroup; 2],
}

impl StepPipeline {
    pub(super) fn new(device: &wgpu::Device, dims: GridDims, buffers: &GridBuffers) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("ziggurat life kernel"),
            source: wgpu::ShaderSource::Wgsl(shader_source(dims.tile()).into()),
        });

        let layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("ziggurat life bgl"),
            entries: &[
                storage_entry(0, true),
                storage_entry(1, false),
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::StorageTexture {
                        access: wgpu::StorageTextureAccess::WriteOnly,
                        format: OUTPUT_FORMAT,
                        view_dimension: wgpu::TextureViewDimension::D2,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 3,
                    visibility: wgpu::ShaderStages::COMPUTE,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: wgpu::BufferSize::new(
                            std::mem::size_of::<KernelParams>() as u64,
                        ),
                    },
                    count: None,
                },
            ],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("ziggurat life pipeline layout"),
            bind_group_layouts: &[&layout],
            immediate_size: 0,
        });

        let pipeline = device.create_compute_pipeline(&wgpu::ComputePipelineDescriptor {
            label: Some("ziggurat life pipeline"),
            layout: Some(&pipeline_layout),
            module: &shader,
            entry_point: Some("main"),
            compilation_options: Default::default(),
            cache: None,
        });

        let bind_groups = [
            binding_set(device, &layout, buffers, Parity::Even),
            binding_set(device, &layout, buffers, Parity::Odd),
        ];

        Self { pipeline, bind_groups }
    }

    #[inline]
    pub(super) fn bind_group(&self, active: Parity) -> &wgpu::BindGroup {
        &self.bind_groups[active.index()]
    }
}

fn storage_entry(binding: u32, read_only: bool) -> wgpu::BindGroupLayoutEntry {
    wgpu::BindGroupLayoutEntry {
        binding,
        visibility: wgpu::ShaderStages::COMPUTE,
        ty: wgpu::BindingType::Buffer {
            ty: wgpu::BufferBindingType::Storage { read_only },
            has_dynamic_offset: false,
            min_binding_size: None,
        },
        count: None,
    }
}

fn binding_set(
    device: &wgpu::Device,
    layout: &wgpu::BindGroupLayout,
    buffers: &GridBuffers,
    active: Parity,
) -> wgpu::BindGroup {
    let label = match active {
        Parity::Even => "ziggurat life bind group (even)",
        Parity::Odd => "ziggurat life bind group (odd)",
    };

    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some(label),
        layout,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: buffers.state[active.other().index()].as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: buffers.state[active.index()].as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::TextureView(&buffers.output_view),
            },
            wgpu::BindGroupEntry {
                binding: 3,
                resource: buffers.params.as_entire_binding(),
            },
        ],
    })
}
