//! CPU-side geometry for the generated primitives.

use cgmath::Vector3;

/// Anything that can be placed in a vertex buffer and described to a pipeline.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coords: [f32; 2],
}

impl Vertex for ModelVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<ModelVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x2,
                },
            ],
        }
    }
}

/// The generator and parameters a mesh was built from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PrimitiveShape {
    Sphere { radius: f32, slices: u32, stacks: u32 },
    Box { width: f32, length: f32, height: f32 },
    Cylinder { radius: f32, length: f32, slices: u32 },
    Pyramid { size: f32 },
    Octahedron { size: f32 },
    Surface { width: f32, length: f32 },
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vector3<f32>,
    pub max: Vector3<f32>,
}

impl Aabb {
    pub fn size(&self) -> Vector3<f32> {
        self.max - self.min
    }

    pub fn center(&self) -> Vector3<f32> {
        (self.min + self.max) * 0.5
    }
}

/// Indexed triangle list. Immutable once generated.
#[derive(Clone, Debug)]
pub struct MeshGeometry {
    name: &'static str,
    shape: PrimitiveShape,
    vertices: Vec<ModelVertex>,
    indices: Vec<u32>,
}

impl MeshGeometry {
    pub(crate) fn new(
        name: &'static str,
        shape: PrimitiveShape,
        vertices: Vec<ModelVertex>,
        indices: Vec<u32>,
    ) -> Self {
        debug_assert_eq!(indices.len() % 3, 0);
        debug_assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
        Self {
            name,
            shape,
            vertices,
            indices,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shape(&self) -> PrimitiveShape {
        self.shape
    }

    pub fn vertices(&self) -> &[ModelVertex] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn bounds(&self) -> Aabb {
        let mut min = Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
        let mut max = Vector3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);
        for v in &self.vertices {
            let [x, y, z] = v.position;
            min = Vector3::new(min.x.min(x), min.y.min(y), min.z.min(z));
            max = Vector3::new(max.x.max(x), max.y.max(y), max.z.max(z));
        }
        if self.vertices.is_empty() {
            min = Vector3::new(0.0, 0.0, 0.0);
            max = min;
        }
        Aabb { min, max }
    }
}
