//! Parametric generators for the primitive meshes.
//!
//! All shapes are centered on the origin with Z pointing up. Triangles are
//! counter-clockwise when seen from outside, so back-face culling works.

use std::f32::consts::{PI, TAU};

use anyhow::{Context, ensure};
use cgmath::{InnerSpace, Vector3};

use crate::data_structures::mesh::{MeshGeometry, ModelVertex, PrimitiveShape};

pub trait MeshGenerator {
    fn shape(&self) -> PrimitiveShape;

    /// Rejects parameters that cannot produce a closed, non-degenerate mesh.
    fn validate(&self) -> anyhow::Result<()>;

    fn build(&self) -> (Vec<ModelVertex>, Vec<u32>);

    fn generate(&self, name: &'static str) -> anyhow::Result<MeshGeometry> {
        self.validate()
            .with_context(|| format!("invalid parameters for mesh `{name}`"))?;
        let (vertices, indices) = self.build();
        log::debug!(
            "generated mesh {name}: {} vertices, {} triangles",
            vertices.len(),
            indices.len() / 3
        );
        Ok(MeshGeometry::new(name, self.shape(), vertices, indices))
    }
}

fn ensure_extent(label: &str, value: f32) -> anyhow::Result<()> {
    ensure!(
        value.is_finite() && value > 0.0,
        "{label} must be positive and finite, got {value}"
    );
    Ok(())
}

fn vertex(position: Vector3<f32>, normal: Vector3<f32>, tex_coords: [f32; 2]) -> ModelVertex {
    ModelVertex {
        position: position.into(),
        normal: normal.into(),
        tex_coords,
    }
}

/// Appends a rectangle spanning `center ± u ± v`. `u × v` must point along `normal`.
fn push_quad(
    vertices: &mut Vec<ModelVertex>,
    indices: &mut Vec<u32>,
    center: Vector3<f32>,
    u: Vector3<f32>,
    v: Vector3<f32>,
    normal: Vector3<f32>,
) {
    let base = vertices.len() as u32;
    vertices.push(vertex(center - u - v, normal, [0.0, 1.0]));
    vertices.push(vertex(center + u - v, normal, [1.0, 1.0]));
    vertices.push(vertex(center + u + v, normal, [1.0, 0.0]));
    vertices.push(vertex(center - u + v, normal, [0.0, 0.0]));
    indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Appends a flat-shaded triangle with its own three vertices.
fn push_facet(
    vertices: &mut Vec<ModelVertex>,
    indices: &mut Vec<u32>,
    a: Vector3<f32>,
    b: Vector3<f32>,
    c: Vector3<f32>,
) {
    let normal = (b - a).cross(c - a).normalize();
    let base = vertices.len() as u32;
    vertices.push(vertex(a, normal, [0.0, 1.0]));
    vertices.push(vertex(b, normal, [1.0, 1.0]));
    vertices.push(vertex(c, normal, [0.5, 0.0]));
    indices.extend_from_slice(&[base, base + 1, base + 2]);
}

/// UV sphere. Slices run around the Z axis, stacks from pole to pole.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereMesh {
    pub radius: f32,
    pub slices: u32,
    pub stacks: u32,
}

impl Default for SphereMesh {
    fn default() -> Self {
        Self {
            radius: 1.0,
            slices: 32,
            stacks: 16,
        }
    }
}

impl MeshGenerator for SphereMesh {
    fn shape(&self) -> PrimitiveShape {
        PrimitiveShape::Sphere {
            radius: self.radius,
            slices: self.slices,
            stacks: self.stacks,
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure_extent("radius", self.radius)?;
        ensure!(self.slices >= 3, "a sphere needs at least 3 slices, got {}", self.slices);
        ensure!(self.stacks >= 2, "a sphere needs at least 2 stacks, got {}", self.stacks);
        Ok(())
    }

    fn build(&self) -> (Vec<ModelVertex>, Vec<u32>) {
        let (slices, stacks) = (self.slices, self.stacks);
        let mut vertices = Vec::with_capacity(((slices + 1) * (stacks + 1)) as usize);
        let mut indices = Vec::with_capacity((6 * slices * stacks.saturating_sub(1)) as usize);

        for i in 0..=stacks {
            let theta = PI * i as f32 / stacks as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();
            for j in 0..=slices {
                let phi = TAU * j as f32 / slices as f32;
                let (sin_phi, cos_phi) = phi.sin_cos();
                let normal = Vector3::new(sin_theta * cos_phi, sin_theta * sin_phi, cos_theta);
                vertices.push(vertex(
                    normal * self.radius,
                    normal,
                    [j as f32 / slices as f32, i as f32 / stacks as f32],
                ));
            }
        }

        // The first and last stack collapse into the poles, so only one
        // triangle per quad is emitted there.
        for i in 0..stacks {
            for j in 0..slices {
                let a = i * (slices + 1) + j;
                let b = a + slices + 1;
                if i != 0 {
                    indices.extend_from_slice(&[a, b, a + 1]);
                }
                if i != stacks - 1 {
                    indices.extend_from_slice(&[a + 1, b, b + 1]);
                }
            }
        }

        (vertices, indices)
    }
}

/// Axis-aligned box: width along X, length along Y, height along Z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxMesh {
    pub width: f32,
    pub length: f32,
    pub height: f32,
}

impl Default for BoxMesh {
    fn default() -> Self {
        Self {
            width: 1.0,
            length: 1.0,
            height: 1.0,
        }
    }
}

impl MeshGenerator for BoxMesh {
    fn shape(&self) -> PrimitiveShape {
        PrimitiveShape::Box {
            width: self.width,
            length: self.length,
            height: self.height,
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure_extent("width", self.width)?;
        ensure_extent("length", self.length)?;
        ensure_extent("height", self.height)
    }

    fn build(&self) -> (Vec<ModelVertex>, Vec<u32>) {
        let x = Vector3::unit_x() * (self.width / 2.0);
        let y = Vector3::unit_y() * (self.length / 2.0);
        let z = Vector3::unit_z() * (self.height / 2.0);
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);

        let faces = [
            (x, y, z),
            (-x, -y, z),
            (y, -x, z),
            (-y, x, z),
            (z, x, y),
            (-z, x, -y),
        ];
        for (offset, u, v) in faces {
            push_quad(&mut vertices, &mut indices, offset, u, v, offset.normalize());
        }
        (vertices, indices)
    }
}

/// Closed cylinder around the Z axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderMesh {
    pub radius: f32,
    pub length: f32,
    pub slices: u32,
}

impl Default for CylinderMesh {
    fn default() -> Self {
        Self {
            radius: 1.0,
            length: 1.0,
            slices: 32,
        }
    }
}

impl MeshGenerator for CylinderMesh {
    fn shape(&self) -> PrimitiveShape {
        PrimitiveShape::Cylinder {
            radius: self.radius,
            length: self.length,
            slices: self.slices,
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure_extent("radius", self.radius)?;
        ensure_extent("length", self.length)?;
        ensure!(self.slices >= 3, "a cylinder needs at least 3 slices, got {}", self.slices);
        Ok(())
    }

    fn build(&self) -> (Vec<ModelVertex>, Vec<u32>) {
        let slices = self.slices;
        let half = self.length / 2.0;
        let mut vertices = Vec::with_capacity((4 * slices + 4) as usize);
        let mut indices = Vec::with_capacity((12 * slices) as usize);

        let ring = |j: u32| {
            let phi = TAU * j as f32 / slices as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();
            (Vector3::new(cos_phi, sin_phi, 0.0), j as f32 / slices as f32)
        };

        // Side: bottom/top pairs, the seam vertex is duplicated for the UVs.
        for j in 0..=slices {
            let (dir, u) = ring(j);
            let p = dir * self.radius;
            vertices.push(vertex(p - Vector3::unit_z() * half, dir, [u, 1.0]));
            vertices.push(vertex(p + Vector3::unit_z() * half, dir, [u, 0.0]));
        }
        for j in 0..slices {
            let bottom = 2 * j;
            let top = bottom + 1;
            indices.extend_from_slice(&[bottom, bottom + 2, top, top, bottom + 2, top + 2]);
        }

        // Caps as triangle fans.
        for (z, normal) in [(half, Vector3::unit_z()), (-half, -Vector3::unit_z())] {
            let center = vertices.len() as u32;
            vertices.push(vertex(Vector3::new(0.0, 0.0, z), normal, [0.5, 0.5]));
            for j in 0..slices {
                let (dir, _) = ring(j);
                vertices.push(vertex(
                    dir * self.radius + Vector3::new(0.0, 0.0, z),
                    normal,
                    [0.5 + 0.5 * dir.x, 0.5 + 0.5 * dir.y],
                ));
            }
            for j in 0..slices {
                let current = center + 1 + j;
                let next = center + 1 + (j + 1) % slices;
                if normal.z > 0.0 {
                    indices.extend_from_slice(&[center, current, next]);
                } else {
                    indices.extend_from_slice(&[center, next, current]);
                }
            }
        }

        (vertices, indices)
    }
}

/// Square-based pyramid pointing up +Z. Base edge and height both equal `size`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PyramidMesh {
    pub size: f32,
}

impl Default for PyramidMesh {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}

impl MeshGenerator for PyramidMesh {
    fn shape(&self) -> PrimitiveShape {
        PrimitiveShape::Pyramid { size: self.size }
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure_extent("size", self.size)
    }

    fn build(&self) -> (Vec<ModelVertex>, Vec<u32>) {
        let h = self.size / 2.0;
        let mut vertices = Vec::with_capacity(16);
        let mut indices = Vec::with_capacity(18);

        push_quad(
            &mut vertices,
            &mut indices,
            Vector3::new(0.0, 0.0, -h),
            Vector3::new(h, 0.0, 0.0),
            Vector3::new(0.0, -h, 0.0),
            -Vector3::unit_z(),
        );

        let apex = Vector3::new(0.0, 0.0, h);
        let corners = [
            Vector3::new(-h, -h, -h),
            Vector3::new(h, -h, -h),
            Vector3::new(h, h, -h),
            Vector3::new(-h, h, -h),
        ];
        for k in 0..corners.len() {
            let next = corners[(k + 1) % corners.len()];
            push_facet(&mut vertices, &mut indices, corners[k], next, apex);
        }
        (vertices, indices)
    }
}

/// Regular octahedron whose six tips lie `size / 2` from the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OctahedronMesh {
    pub size: f32,
}

impl Default for OctahedronMesh {
    fn default() -> Self {
        Self { size: 1.0 }
    }
}

impl MeshGenerator for OctahedronMesh {
    fn shape(&self) -> PrimitiveShape {
        PrimitiveShape::Octahedron { size: self.size }
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure_extent("size", self.size)
    }

    fn build(&self) -> (Vec<ModelVertex>, Vec<u32>) {
        let h = self.size / 2.0;
        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(24);

        for sx in [1.0f32, -1.0] {
            for sy in [1.0f32, -1.0] {
                for sz in [1.0f32, -1.0] {
                    let x = Vector3::new(sx * h, 0.0, 0.0);
                    let y = Vector3::new(0.0, sy * h, 0.0);
                    let z = Vector3::new(0.0, 0.0, sz * h);
                    // Mirroring an odd number of axes flips the winding.
                    if sx * sy * sz > 0.0 {
                        push_facet(&mut vertices, &mut indices, x, y, z);
                    } else {
                        push_facet(&mut vertices, &mut indices, x, z, y);
                    }
                }
            }
        }
        (vertices, indices)
    }
}

/// Flat, double-sided patch in the XY plane: width along X, length along Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceMesh {
    pub width: f32,
    pub length: f32,
}

impl Default for SurfaceMesh {
    fn default() -> Self {
        Self {
            width: 1.0,
            length: 1.0,
        }
    }
}

impl MeshGenerator for SurfaceMesh {
    fn shape(&self) -> PrimitiveShape {
        PrimitiveShape::Surface {
            width: self.width,
            length: self.length,
        }
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure_extent("width", self.width)?;
        ensure_extent("length", self.length)
    }

    fn build(&self) -> (Vec<ModelVertex>, Vec<u32>) {
        let u = Vector3::unit_x() * (self.width / 2.0);
        let v = Vector3::unit_y() * (self.length / 2.0);
        let origin = Vector3::new(0.0, 0.0, 0.0);
        let mut vertices = Vec::with_capacity(8);
        let mut indices = Vec::with_capacity(12);
        push_quad(&mut vertices, &mut indices, origin, u, v, Vector3::unit_z());
        push_quad(&mut vertices, &mut indices, origin, u, -v, -Vector3::unit_z());
        (vertices, indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks the invariants every generated mesh must hold and returns it.
    fn generate_checked(generator: &dyn MeshGenerator) -> MeshGeometry {
        let mesh = generator.generate("test").unwrap();
        assert_eq!(mesh.indices().len() % 3, 0);
        assert!(mesh.indices().iter().all(|&i| (i as usize) < mesh.vertices().len()));
        for v in mesh.vertices() {
            let n = Vector3::from(v.normal);
            assert!((n.magnitude() - 1.0).abs() < 1e-4, "normal {n:?} is not unit length");
        }
        mesh
    }

    /// Every triangle's face normal agrees with the vertex normals of its corners.
    fn assert_outward_winding(mesh: &MeshGeometry) {
        let vs = mesh.vertices();
        for tri in mesh.indices().chunks(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| Vector3::from(vs[i as usize].position));
            let face = (b - a).cross(c - a);
            if face.magnitude2() < 1e-12 {
                continue;
            }
            let avg = tri
                .iter()
                .map(|&i| Vector3::from(vs[i as usize].normal))
                .fold(Vector3::new(0.0, 0.0, 0.0), |acc, n| acc + n);
            assert!(face.dot(avg) > 0.0, "triangle {tri:?} is wound inwards");
        }
    }

    #[test]
    fn sphere_topology() {
        let mesh = generate_checked(&SphereMesh {
            slices: 18,
            stacks: 9,
            ..Default::default()
        });
        assert_eq!(mesh.vertices().len(), 19 * 10);
        assert_eq!(mesh.triangle_count(), 2 * 18 * 8);
        assert_outward_winding(&mesh);
        for v in mesh.vertices() {
            assert!((Vector3::from(v.position).magnitude() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn box_extents_follow_parameters() {
        let mesh = generate_checked(&BoxMesh {
            height: 0.3,
            ..Default::default()
        });
        assert_eq!(mesh.vertices().len(), 24);
        assert_eq!(mesh.triangle_count(), 12);
        assert_outward_winding(&mesh);
        let size = mesh.bounds().size();
        assert!((size.x - 1.0).abs() < 1e-6);
        assert!((size.y - 1.0).abs() < 1e-6);
        assert!((size.z - 0.3).abs() < 1e-6);
    }

    #[test]
    fn cylinder_is_closed_and_sized() {
        let mesh = generate_checked(&CylinderMesh {
            radius: 0.5,
            length: 0.25,
            slices: 12,
        });
        assert_eq!(mesh.vertices().len(), 4 * 12 + 4);
        assert_eq!(mesh.triangle_count(), 4 * 12);
        assert_outward_winding(&mesh);
        let b = mesh.bounds();
        assert!((b.size().x - 1.0).abs() < 1e-5);
        assert!((b.max.z - 0.125).abs() < 1e-6);
        assert!((b.min.z + 0.125).abs() < 1e-6);
    }

    #[test]
    fn pyramid_points_up() {
        let mesh = generate_checked(&PyramidMesh::default());
        assert_eq!(mesh.triangle_count(), 6);
        assert_outward_winding(&mesh);
        let b = mesh.bounds();
        assert_eq!(b.max.z, 0.5);
        assert_eq!(b.min.z, -0.5);
    }

    #[test]
    fn octahedron_faces_point_outwards() {
        let mesh = generate_checked(&OctahedronMesh::default());
        assert_eq!(mesh.triangle_count(), 8);
        assert_outward_winding(&mesh);
        for v in mesh.vertices() {
            let centroid_dir = Vector3::from(v.normal);
            assert!(Vector3::from(v.position).dot(centroid_dir) > 0.0);
        }
    }

    #[test]
    fn surface_is_double_sided() {
        let mesh = generate_checked(&SurfaceMesh {
            width: 2.0,
            ..Default::default()
        });
        assert_eq!(mesh.triangle_count(), 4);
        assert_outward_winding(&mesh);
        let up = mesh.vertices().iter().filter(|v| v.normal[2] > 0.0).count();
        assert_eq!(up, 4);
        assert!((mesh.bounds().size().x - 2.0).abs() < 1e-6);
        assert_eq!(mesh.bounds().size().z, 0.0);
    }

    #[test]
    fn rejects_degenerate_parameters() {
        assert!(SphereMesh { radius: -1.0, ..Default::default() }.generate("s").is_err());
        assert!(SphereMesh { stacks: 1, ..Default::default() }.generate("s").is_err());
        assert!(CylinderMesh { slices: 2, ..Default::default() }.generate("c").is_err());
        assert!(BoxMesh { width: f32::NAN, ..Default::default() }.generate("b").is_err());
        assert!(SurfaceMesh { length: 0.0, ..Default::default() }.generate("p").is_err());
        let err = PyramidMesh { size: 0.0 }.generate("Pyramid").unwrap_err();
        assert!(format!("{err:#}").contains("Pyramid"));
    }

    #[test]
    fn shape_records_parameters() {
        let generator = CylinderMesh {
            slices: 18,
            ..Default::default()
        };
        let mesh = generator.generate("Cylinder").unwrap();
        assert_eq!(
            mesh.shape(),
            PrimitiveShape::Cylinder {
                radius: 1.0,
                length: 1.0,
                slices: 18
            }
        );
    }
}
