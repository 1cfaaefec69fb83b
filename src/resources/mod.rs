/**
 * This module builds the shared resources: primitive meshes, the material,
 * mesh and model tables, and their GPU uploads.
 */
pub mod gpu;
pub mod primitives;
pub mod shared;

pub use shared::{SharedMaterials, SharedMeshes, SharedModels, SharedResources, get, init};
