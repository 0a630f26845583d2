use super::helpers;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// Multisampled color and depth attachments sized to the surface.
///
/// The color target resolves into the swapchain image each frame.
pub(crate) struct RenderTargets {
    pub(crate) msaa_tex: wgpu::Texture,
    pub(crate) msaa_view: wgpu::TextureView,
    pub(crate) depth_tex: wgpu::Texture,
    pub(crate) depth_view: wgpu::TextureView,
    pub(crate) sample_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
        sample_count: u32,
    ) -> Self {
        let (msaa_tex, msaa_view) =
            helpers::create_texture(device, "msaa_color", width, height, sample_count, color_format);
        let (depth_tex, depth_view) =
            helpers::create_texture(device, "depth", width, height, sample_count, DEPTH_FORMAT);
        Self {
            msaa_tex,
            msaa_view,
            depth_tex,
            depth_view,
            sample_count,
        }
    }

    pub(crate) fn recreate(
        &mut self,
        device: &wgpu::Device,
        color_format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) {
        *self = Self::new(device, color_format, width, height, self.sample_count);
    }

    pub(crate) fn size(&self) -> (u32, u32) {
        let s = self.depth_tex.size();
        (s.width, s.height)
    }

    pub(crate) fn destroy(&self) {
        self.msaa_tex.destroy();
        self.depth_tex.destroy();
    }
}
