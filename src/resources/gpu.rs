//! Uploading the shared tables to the GPU.
//!
//! Sharing carries over: every mesh and material is uploaded exactly once and
//! each role resolves to references into those uploads.

use std::collections::HashMap;

use anyhow::Context;
use wgpu::util::DeviceExt;

use crate::{
    data_structures::{material::Material, mesh::MeshGeometry, model::VisualRole},
    resources::shared::SharedResources,
};

#[derive(Debug)]
pub struct GpuMesh {
    pub name: &'static str,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}

/// Index count as the `u32` a draw call takes.
fn element_count(name: &str, len: usize) -> anyhow::Result<u32> {
    u32::try_from(len).with_context(|| format!("mesh `{name}` has too many indices ({len}) to draw"))
}

impl GpuMesh {
    pub fn upload(device: &wgpu::Device, mesh: &MeshGeometry) -> anyhow::Result<Self> {
        let num_elements = element_count(mesh.name(), mesh.indices().len())?;

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", mesh.name())),
            contents: bytemuck::cast_slice(mesh.vertices()),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", mesh.name())),
            contents: bytemuck::cast_slice(mesh.indices()),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            name: mesh.name(),
            vertex_buffer,
            index_buffer,
            num_elements,
        })
    }
}

pub fn material_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("material_bind_group_layout"),
    })
}

#[derive(Debug)]
pub struct GpuMaterial {
    pub name: &'static str,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
}

impl GpuMaterial {
    pub fn upload(device: &wgpu::Device, layout: &wgpu::BindGroupLayout, material: &Material) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Material Buffer", material.name())),
            contents: bytemuck::cast_slice(&[material.to_uniform()]),
            usage: wgpu::BufferUsages::UNIFORM,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some(&format!("{} Material Bind Group", material.name())),
        });

        Self {
            name: material.name(),
            buffer,
            bind_group,
        }
    }
}

/// What a draw call needs for one role.
#[derive(Debug, Clone, Copy)]
pub struct GpuModel<'a> {
    pub mesh: &'a GpuMesh,
    pub material: &'a GpuMaterial,
}

#[derive(Debug)]
pub struct GpuSharedResources {
    pub material_layout: wgpu::BindGroupLayout,
    meshes: Vec<GpuMesh>,
    materials: Vec<GpuMaterial>,
    // role index -> (mesh index, material index)
    models: Vec<(usize, usize)>,
}

impl GpuSharedResources {
    pub fn new(device: &wgpu::Device, shared: &SharedResources) -> anyhow::Result<Self> {
        let material_layout = material_bind_group_layout(device);

        let meshes: Vec<GpuMesh> = shared
            .meshes
            .iter()
            .map(|mesh| GpuMesh::upload(device, mesh))
            .collect::<anyhow::Result<_>>()?;
        let materials: Vec<GpuMaterial> = shared
            .materials
            .iter()
            .map(|material| GpuMaterial::upload(device, &material_layout, material))
            .collect();

        let mesh_slots: HashMap<&str, usize> =
            meshes.iter().enumerate().map(|(i, m)| (m.name, i)).collect();
        let material_slots: HashMap<&str, usize> =
            materials.iter().enumerate().map(|(i, m)| (m.name, i)).collect();

        let models = VisualRole::ALL
            .into_iter()
            .map(|role| {
                let model = shared.model(role);
                let mesh = mesh_slots
                    .get(model.mesh().name())
                    .with_context(|| format!("mesh of {role} was not uploaded"))?;
                let material = material_slots
                    .get(model.material().name())
                    .with_context(|| format!("material of {role} was not uploaded"))?;
                Ok((*mesh, *material))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        log::info!(
            "uploaded {} meshes and {} materials for {} models",
            meshes.len(),
            materials.len(),
            models.len()
        );

        Ok(Self {
            material_layout,
            meshes,
            materials,
            models,
        })
    }

    pub fn model(&self, role: VisualRole) -> GpuModel<'_> {
        let (mesh, material) = self.models[role.index()];
        GpuModel {
            mesh: &self.meshes[mesh],
            material: &self.materials[material],
        }
    }

    pub fn meshes(&self) -> &[GpuMesh] {
        &self.meshes
    }

    pub fn materials(&self) -> &[GpuMaterial] {
        &self.materials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_count_fits_a_draw_call() {
        assert_eq!(element_count("Sphere", 864).unwrap(), 864);
        assert_eq!(element_count("Sphere", u32::MAX as usize).unwrap(), u32::MAX);
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn oversized_index_count_is_an_error() {
        let err = element_count("Huge", u32::MAX as usize + 1).unwrap_err();
        assert!(err.to_string().contains("Huge"));
    }
}
