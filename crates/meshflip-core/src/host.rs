//! The seam between geometry operations and whoever owns the mesh storage

use glam::Vec3;

use crate::error::MeshError;

/// Mutable access to a host-owned triangle mesh.
///
/// Operations in this workspace only touch positions, normals and triangle
/// indices through this trait, then ask the owner to rebuild whatever it
/// derives from them. [`crate::Mesh`] implements it; an engine can implement
/// it for its own storage.
pub trait EditableMesh {
    fn vertices(&self) -> &[Vec3];
    fn vertices_mut(&mut self) -> &mut [Vec3];

    fn normals(&self) -> &[Vec3];
    fn normals_mut(&mut self) -> &mut [Vec3];

    /// Number of UVs, if the mesh carries them
    fn uv_count(&self) -> Option<usize> {
        None
    }

    fn submesh_count(&self) -> usize;

    /// Triangle indices of one submesh, three per triangle.
    ///
    /// Panics if `submesh >= submesh_count()`.
    fn triangles(&self, submesh: usize) -> &[u32];
    fn triangles_mut(&mut self, submesh: usize) -> &mut [u32];

    /// Rebuild the bounding volume after positions changed
    fn recalculate_bounds(&mut self);

    /// Rebuild tangent vectors after positions or normals changed
    fn recalculate_tangents(&mut self);

    /// Check the invariants every operation assumes, reporting the first violation.
    fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices().len();

        let normal_count = self.normals().len();
        if normal_count != vertex_count {
            return Err(MeshError::NormalCountMismatch {
                vertices: vertex_count,
                normals: normal_count,
            });
        }

        if let Some(uvs) = self.uv_count() {
            if uvs != vertex_count {
                return Err(MeshError::UvCountMismatch {
                    vertices: vertex_count,
                    uvs,
                });
            }
        }

        for submesh in 0..self.submesh_count() {
            let tris = self.triangles(submesh);
            if tris.len() % 3 != 0 {
                return Err(MeshError::IncompleteTriangle {
                    submesh,
                    len: tris.len(),
                });
            }

            if let Some((position, &index)) = tris
                .iter()
                .enumerate()
                .find(|(_, &i)| i as usize >= vertex_count)
            {
                return Err(MeshError::IndexOutOfRange {
                    submesh,
                    position,
                    index,
                    vertex_count,
                });
            }
        }

        Ok(())
    }
}
