use crate::core::geometry::Shape;
use wgpu::util::DeviceExt;

pub(crate) struct GpuMesh {
    pub(crate) vertices: wgpu::Buffer,
    pub(crate) indices: wgpu::Buffer,
    pub(crate) index_count: u32,
}

/// Uploads each distinct shape once; nodes share buffers by index.
#[derive(Default)]
pub(crate) struct MeshCache {
    shapes: Vec<Shape>,
    meshes: Vec<GpuMesh>,
}

impl MeshCache {
    pub(crate) fn get_or_upload(&mut self, device: &wgpu::Device, shape: &Shape) -> usize {
        if let Some(i) = self.shapes.iter().position(|s| s == shape) {
            return i;
        }
        let data = shape.mesh();
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_vertices"),
            contents: bytemuck::cast_slice(&data.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mesh_indices"),
            contents: bytemuck::cast_slice(&data.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        self.shapes.push(*shape);
        self.meshes.push(GpuMesh {
            vertices,
            indices,
            index_count: data.indices.len() as u32,
        });
        self.meshes.len() - 1
    }

    pub(crate) fn mesh(&self, index: usize) -> &GpuMesh {
        &self.meshes[index]
    }

    pub(crate) fn len(&self) -> usize {
        self.meshes.len()
    }
}
