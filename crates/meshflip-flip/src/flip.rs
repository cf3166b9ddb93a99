//! Mirror a mesh along one axis without turning it inside-out

use glam::Vec3;
use meshflip_core::{Axis, EditableMesh, MeshError};
use tracing::debug;

/// Multiply every vertex position and normal componentwise by `factor`, then
/// have the mesh rebuild its bounds and tangents.
///
/// Positions and normals are scaled independently, so a length mismatch
/// between them is tolerated rather than checked.
pub fn scale_coordinates<M: EditableMesh + ?Sized>(factor: Vec3, mesh: &mut M) {
    for v in mesh.vertices_mut() {
        *v *= factor;
    }
    for n in mesh.normals_mut() {
        *n *= factor;
    }

    // Positions changed, so bounds are stale. Normals changed, so tangents are.
    mesh.recalculate_bounds();
    mesh.recalculate_tangents();
}

/// Reverse the winding of every triangle: (a, b, c) becomes (a, c, b).
///
/// Each submesh is rewritten in place so grouping is preserved. A trailing
/// partial triangle is left as is.
pub fn reverse_winding<M: EditableMesh + ?Sized>(mesh: &mut M) {
    for sub in 0..mesh.submesh_count() {
        for tri in mesh.triangles_mut(sub).chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
    }
}

/// Mirror the mesh along `axis`, keeping its faces front-facing.
pub fn flip_axis<M: EditableMesh + ?Sized>(axis: Axis, mesh: &mut M) {
    debug!(
        "Flipping mesh along {} ({} vertices, {} submeshes)",
        axis.name(),
        mesh.vertices().len(),
        mesh.submesh_count()
    );

    scale_coordinates(axis.flip_factor(), mesh);
    reverse_winding(mesh);
}

/// Like [`flip_axis`], but checks the mesh invariants first. The mesh is left
/// untouched when validation fails.
pub fn try_flip_axis<M: EditableMesh + ?Sized>(axis: Axis, mesh: &mut M) -> Result<(), MeshError> {
    mesh.validate()?;
    flip_axis(axis, mesh);
    Ok(())
}

/// Mirror the mesh along X.
pub fn flip_model_x<M: EditableMesh + ?Sized>(mesh: &mut M) {
    flip_axis(Axis::X, mesh);
}

/// Mirror the mesh along Y.
pub fn flip_model_y<M: EditableMesh + ?Sized>(mesh: &mut M) {
    flip_axis(Axis::Y, mesh);
}

/// Mirror the mesh along Z.
pub fn flip_model_z<M: EditableMesh + ?Sized>(mesh: &mut M) {
    flip_axis(Axis::Z, mesh);
}
