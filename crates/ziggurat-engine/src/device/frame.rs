/// Represents a single acquired frame.
///
/// Short-lived: holding the surface texture blocks acquisition of the next one.
/// Compute work for the frame is recorded into `encoder` ahead of the draws
/// that consume it, so one submission orders both.
pub struct GpuFrame {
    pub surface_texture: wgpu::SurfaceTexture,
    pub view: wgpu::TextureView,
    pub encoder: wgpu::CommandEncoder,
}
