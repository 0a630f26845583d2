use crate::constants::MSAA_SAMPLES;
use rack_core::camera::OrbitCamera;
use rack_core::constants::{
    AMBIENT_LIGHT_HEX, BACKGROUND_HEX, DIRECTIONAL_LIGHT_DIR, DIRECTIONAL_LIGHT_HEX,
    DIRECTIONAL_LIGHT_INTENSITY,
};
use rack_core::scene::{hex_to_linear, FramePlan, InstanceRaw};
use web_sys as web;

mod helpers;
mod meshes;
mod pipelines;
mod targets;
use meshes::Meshes;
use pipelines::ScenePipelines;
use targets::RenderTargets;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct Globals {
    view_proj: [[f32; 4]; 4],
    eye: [f32; 4],
    light_dir: [f32; 4],
    light_color: [f32; 4],
    ambient: [f32; 4],
}

impl Globals {
    fn for_camera(camera: &OrbitCamera) -> Self {
        let light = hex_to_linear(DIRECTIONAL_LIGHT_HEX).map(|c| c * DIRECTIONAL_LIGHT_INTENSITY);
        let ambient = hex_to_linear(AMBIENT_LIGHT_HEX);
        let [dx, dy, dz] = DIRECTIONAL_LIGHT_DIR;
        Self {
            view_proj: camera.view_proj().to_cols_array_2d(),
            eye: camera.eye().extend(1.0).to_array(),
            light_dir: [dx, dy, dz, 0.0],
            light_color: [light[0], light[1], light[2], 1.0],
            ambient: [ambient[0], ambient[1], ambient[2], 1.0],
        }
    }
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    pipelines: ScenePipelines,
    meshes: Meshes,
    globals_buffer: wgpu::Buffer,
    globals_bind_group: wgpu::BindGroup,
    instance_buffer: wgpu::Buffer,
    instance_capacity: usize,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, format, width, height, MSAA_SAMPLES);

        let globals_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("globals"),
            size: std::mem::size_of::<Globals>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("globals_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let globals_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("globals_bg"),
            layout: &bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: globals_buffer.as_entire_binding(),
            }],
        });
        let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });
        let pipelines = ScenePipelines::new(&device, &pl, format, MSAA_SAMPLES);
        let meshes = Meshes::new(&device);

        let instance_capacity = 64;
        let instance_buffer = create_instance_buffer(&device, instance_capacity);

        log::info!(
            "[render] surface {}x{} format {:?} msaa x{}",
            width,
            height,
            format,
            MSAA_SAMPLES
        );
        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            pipelines,
            meshes,
            globals_buffer,
            globals_bind_group,
            instance_buffer,
            instance_capacity,
            clear_color: helpers::linear_clear_color(BACKGROUND_HEX),
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        let (width, height) = (width.max(1), height.max(1));
        if width == self.config.width && height == self.config.height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.reconfigure();
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
        if self.targets.size() != (self.config.width, self.config.height) {
            self.targets.recreate(
                &self.device,
                self.config.format,
                self.config.width,
                self.config.height,
            );
        }
    }

    fn upload_instances(&mut self, instances: &[InstanceRaw]) {
        if instances.len() > self.instance_capacity {
            self.instance_capacity = instances.len().next_power_of_two();
            self.instance_buffer.destroy();
            self.instance_buffer = create_instance_buffer(&self.device, self.instance_capacity);
        }
        if !instances.is_empty() {
            self.queue
                .write_buffer(&self.instance_buffer, 0, bytemuck::cast_slice(instances));
        }
    }

    pub fn render(
        &mut self,
        camera: &OrbitCamera,
        plan: &FramePlan,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&Globals::for_camera(camera)),
        );
        self.upload_instances(&plan.instances);

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.msaa_view,
                    resolve_target: Some(&view),
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Discard,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Discard,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.globals_bind_group, &[]);
            rpass.set_vertex_buffer(1, self.instance_buffer.slice(..));
            for batch in &plan.batches {
                rpass.set_pipeline(self.pipelines.get(batch.pipeline));
                self.meshes
                    .get(batch.primitive)
                    .draw(&mut rpass, batch.instances.clone());
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

impl Drop for GpuState {
    fn drop(&mut self) {
        self.targets.destroy();
        self.instance_buffer.destroy();
        self.globals_buffer.destroy();
        self.device.destroy();
    }
}

fn create_instance_buffer(device: &wgpu::Device, capacity: usize) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("instances"),
        size: (capacity.max(1) * std::mem::size_of::<InstanceRaw>()) as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}
