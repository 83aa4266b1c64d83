use orbit_core::mesh::{self, MeshData};
use orbit_core::Geometry;
use wgpu::util::DeviceExt;

pub(crate) struct GpuMesh {
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

impl GpuMesh {
    fn upload(device: &wgpu::Device, data: &MeshData) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_vertices"),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_indices"),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
            index_count: data.indices.len() as u32,
        }
    }
}

/// Meshes are tessellated and uploaded the first time a geometry is drawn.
#[derive(Default)]
pub(crate) struct MeshCache {
    entries: Vec<(Geometry, GpuMesh)>,
}

impl MeshCache {
    pub(crate) fn ensure(&mut self, device: &wgpu::Device, geometry: Geometry) {
        if self.get(geometry).is_none() {
            let gpu = GpuMesh::upload(device, &mesh::build(geometry));
            self.entries.push((geometry, gpu));
        }
    }

    pub(crate) fn get(&self, geometry: Geometry) -> Option<&GpuMesh> {
        self.entries
            .iter()
            .find(|(g, _)| *g == geometry)
            .map(|(_, m)| m)
    }
}
