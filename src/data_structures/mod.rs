//! Data types behind the shared tables.
//!
//! - `color` holds 8-bit colors and the named palette
//! - `content` holds entity kinds, zone shapes and map connection kinds
//! - `material` holds immutable shading descriptions
//! - `mesh` holds generated geometry and its vertex layout
//! - `model` pairs a mesh with a material under a visual role

pub mod color;
pub mod content;
pub mod material;
pub mod mesh;
pub mod model;
