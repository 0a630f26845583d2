use super::targets::DEPTH_FORMAT;
use rack_core::geometry::Vertex;
use rack_core::scene::{InstanceRaw, PipelineKind};

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const INSTANCE_ATTRS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    2 => Float32x4,
    3 => Float32x4,
    4 => Float32x4,
    5 => Float32x4,
    6 => Float32x4
];

fn vertex_layouts() -> [wgpu::VertexBufferLayout<'static>; 2] {
    [
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRS,
        },
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<InstanceRaw>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &INSTANCE_ATTRS,
        },
    ]
}

pub(crate) struct ScenePipelines {
    solid: wgpu::RenderPipeline,
    translucent: wgpu::RenderPipeline,
    lit_lines: wgpu::RenderPipeline,
    unlit_lines: wgpu::RenderPipeline,
}

impl ScenePipelines {
    pub(crate) fn new(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        color_format: wgpu::TextureFormat,
        sample_count: u32,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(rack_core::SCENE_WGSL.into()),
        });
        let make = |kind: PipelineKind| {
            make_scene_pipeline(device, layout, &shader, kind, color_format, sample_count)
        };
        Self {
            solid: make(PipelineKind::Solid),
            translucent: make(PipelineKind::Translucent),
            lit_lines: make(PipelineKind::LitLines),
            unlit_lines: make(PipelineKind::UnlitLines),
        }
    }

    pub(crate) fn get(&self, kind: PipelineKind) -> &wgpu::RenderPipeline {
        match kind {
            PipelineKind::Solid => &self.solid,
            PipelineKind::Translucent => &self.translucent,
            PipelineKind::LitLines => &self.lit_lines,
            PipelineKind::UnlitLines => &self.unlit_lines,
        }
    }
}

fn make_scene_pipeline(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    shader: &wgpu::ShaderModule,
    kind: PipelineKind,
    color_format: wgpu::TextureFormat,
    sample_count: u32,
) -> wgpu::RenderPipeline {
    let (topology, cull_mode) = match kind {
        PipelineKind::Solid => (wgpu::PrimitiveTopology::TriangleList, Some(wgpu::Face::Back)),
        // both faces so the far side of a translucent box shows through
        PipelineKind::Translucent => (wgpu::PrimitiveTopology::TriangleList, None),
        PipelineKind::LitLines | PipelineKind::UnlitLines => (wgpu::PrimitiveTopology::LineList, None),
    };
    let fs_entry = match kind {
        PipelineKind::UnlitLines => "fs_unlit",
        _ => "fs_lit",
    };
    let translucent = kind == PipelineKind::Translucent;
    let layouts = vertex_layouts();
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(match kind {
            PipelineKind::Solid => "solid_pipeline",
            PipelineKind::Translucent => "translucent_pipeline",
            PipelineKind::LitLines => "lit_lines_pipeline",
            PipelineKind::UnlitLines => "unlit_lines_pipeline",
        }),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader,
            entry_point: Some("vs_main"),
            buffers: &layouts,
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode,
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: !translucent,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState {
            count: sample_count,
            ..Default::default()
        },
        fragment: Some(wgpu::FragmentState {
            module: shader,
            entry_point: Some(fs_entry),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(if translucent {
                    wgpu::BlendState::ALPHA_BLENDING
                } else {
                    wgpu::BlendState::REPLACE
                }),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    })
}
