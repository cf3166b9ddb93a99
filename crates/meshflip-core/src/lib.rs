//! meshflip core - mesh data model for the meshflip tools
//!
//! This crate provides the types every other meshflip crate works on:
//! - `Mesh`, a triangle mesh split into submeshes, with derived bounds and tangents
//! - `EditableMesh`, the trait operations use to reach host-owned mesh storage
//! - `Axis` and `Bounds` value types
//! - `MeshError` for invariant violations

pub mod error;
pub mod host;
pub mod mesh;
pub mod types;

pub use error::MeshError;
pub use glam::{Vec2, Vec3, Vec4};
pub use host::EditableMesh;
pub use mesh::Mesh;
pub use types::{Axis, Bounds};
