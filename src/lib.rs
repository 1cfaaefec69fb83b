//! sector-visuals
//!
//! Shared visual resources for a star-system scene editor. Every object the
//! editor shows (suns, planets, stations, ships, jump gates, trade lanes,
//! zones, ...) is drawn with one of a fixed set of render models. Each model
//! pairs a primitive mesh with a material, and all of them are built once at
//! startup and shared by reference, so any number of scene nodes can reuse a
//! single mesh and material.
//!
//! High-level modules
//! - `data_structures`: colors, entity kinds, materials, meshes and models
//! - `resources`: mesh generators, the shared tables and their GPU upload
//!
//! ```no_run
//! use sector_visuals::{EntityKind, resources};
//!
//! let shared = resources::init()?;
//! let station = shared.model_for_kind(EntityKind::Station);
//! # anyhow::Ok(())
//! ```

pub mod data_structures;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use data_structures::{
    color::Color,
    content::{ConnectionKind, EntityKind, ZoneKind, ZoneShape},
    material::{Material, MaterialUniform, Shading},
    mesh::{Aabb, MeshGeometry, ModelVertex, PrimitiveShape, Vertex},
    model::{RenderModel, VisualRole},
};
pub use resources::SharedResources;
