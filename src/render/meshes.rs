use super::helpers::create_vertex_buffer;
use rack_core::constants::{FLOOR_SEGMENTS, FLOOR_SIZE};
use rack_core::geometry::{floor_grid, unit_cube, unit_cube_edges};
use rack_core::scene::Primitive;

pub(crate) struct Mesh {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) indices: Option<(wgpu::Buffer, u32)>,
    pub(crate) vertex_count: u32,
}

impl Mesh {
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, instances: std::ops::Range<u32>) {
        rpass.set_vertex_buffer(0, self.vertices.slice(..));
        match &self.indices {
            Some((buf, count)) => {
                rpass.set_index_buffer(buf.slice(..), wgpu::IndexFormat::Uint16);
                rpass.draw_indexed(0..*count, 0, instances);
            }
            None => rpass.draw(0..self.vertex_count, instances),
        }
    }
}

/// The three unit meshes every draw item instances.
pub(crate) struct Meshes {
    cube: Mesh,
    edges: Mesh,
    floor: Mesh,
}

impl Meshes {
    pub(crate) fn new(device: &wgpu::Device) -> Self {
        use wgpu::util::DeviceExt;
        let (cube_v, cube_i) = unit_cube();
        let cube_ib = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_indices"),
            contents: bytemuck::cast_slice(&cube_i),
            usage: wgpu::BufferUsages::INDEX,
        });
        let edges_v = unit_cube_edges();
        let floor_v = floor_grid(FLOOR_SIZE, FLOOR_SEGMENTS);
        Self {
            cube: Mesh {
                vertices: create_vertex_buffer(device, "cube_vertices", bytemuck::cast_slice(&cube_v)),
                indices: Some((cube_ib, cube_i.len() as u32)),
                vertex_count: cube_v.len() as u32,
            },
            edges: Mesh {
                vertices: create_vertex_buffer(device, "edge_vertices", bytemuck::cast_slice(&edges_v)),
                indices: None,
                vertex_count: edges_v.len() as u32,
            },
            floor: Mesh {
                vertices: create_vertex_buffer(device, "floor_vertices", bytemuck::cast_slice(&floor_v)),
                indices: None,
                vertex_count: floor_v.len() as u32,
            },
        }
    }

    pub(crate) fn get(&self, primitive: Primitive) -> &Mesh {
        match primitive {
            Primitive::Cube => &self.cube,
            Primitive::CubeEdges => &self.edges,
            Primitive::FloorGrid => &self.floor,
        }
    }
}
