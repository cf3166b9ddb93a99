//! meshflip flip - mirror meshes along a coordinate axis
//!
//! Negating one axis mirrors the geometry but also turns every face
//! inside-out, so each flip scales positions and normals and then reverses
//! triangle winding. All operations work on any [`meshflip_core::EditableMesh`].

mod flip;

pub use flip::{
    flip_axis, flip_model_x, flip_model_y, flip_model_z, reverse_winding, scale_coordinates,
    try_flip_axis,
};
pub use meshflip_core::{Axis, EditableMesh, MeshError};
