//! In-memory triangle mesh with submeshes and derived geometry

use glam::{Vec2, Vec3, Vec4};
use tracing::debug;

use crate::host::EditableMesh;
use crate::types::Bounds;

/// UV-space area below which a triangle contributes no tangent
const DEGENERATE_UV_EPSILON: f32 = 1e-12;

/// Triangle mesh split into submeshes (one index group per material)
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    /// Index-aligned with `vertices`
    pub normals: Vec<Vec3>,
    pub uvs: Option<Vec<Vec2>>,
    /// xyz = tangent direction, w = bitangent handedness (+1 or -1)
    pub tangents: Vec<Vec4>,
    /// Index triples into `vertices`, one group per submesh
    pub submeshes: Vec<Vec<u32>>,
    pub bounds: Bounds,
}

impl Mesh {
    /// Create an empty mesh
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a mesh and compute its bounds and tangents
    pub fn new(vertices: Vec<Vec3>, normals: Vec<Vec3>, submeshes: Vec<Vec<u32>>) -> Self {
        let mut mesh = Self {
            vertices,
            normals,
            submeshes,
            ..Default::default()
        };
        mesh.recalculate_bounds();
        mesh.recalculate_tangents();
        mesh
    }

    /// Attach texture coordinates and rebuild tangents from them
    pub fn with_uvs(mut self, uvs: Vec<Vec2>) -> Self {
        self.uvs = Some(uvs);
        self.recalculate_tangents();
        self
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Triangles across all submeshes
    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(|s| s.len() / 3).sum()
    }

    /// Triangle count of each submesh, in order
    pub fn submesh_triangle_counts(&self) -> Vec<usize> {
        self.submeshes.iter().map(|s| s.len() / 3).collect()
    }

    /// Iterate over every complete triangle as vertex positions. Triangles with
    /// out-of-range indices are skipped.
    pub fn triangle_positions(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.submeshes
            .iter()
            .flat_map(|tris| tris.chunks_exact(3))
            .filter_map(|tri| {
                Some([
                    *self.vertices.get(tri[0] as usize)?,
                    *self.vertices.get(tri[1] as usize)?,
                    *self.vertices.get(tri[2] as usize)?,
                ])
            })
    }

    /// Signed enclosed volume. Positive when a closed mesh's counter-clockwise
    /// faces point outward, negative when it is inside-out.
    pub fn signed_volume(&self) -> f32 {
        self.triangle_positions()
            .map(|[a, b, c]| a.dot(b.cross(c)))
            .sum::<f32>()
            / 6.0
    }

    pub fn is_inside_out(&self) -> bool {
        self.signed_volume() < 0.0
    }
}

impl EditableMesh for Mesh {
    fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    fn vertices_mut(&mut self) -> &mut [Vec3] {
        &mut self.vertices
    }

    fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    fn normals_mut(&mut self) -> &mut [Vec3] {
        &mut self.normals
    }

    fn uv_count(&self) -> Option<usize> {
        self.uvs.as_ref().map(Vec::len)
    }

    fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    fn triangles(&self, submesh: usize) -> &[u32] {
        &self.submeshes[submesh]
    }

    fn triangles_mut(&mut self, submesh: usize) -> &mut [u32] {
        &mut self.submeshes[submesh]
    }

    fn recalculate_bounds(&mut self) {
        self.bounds = Bounds::from_points(&self.vertices);
    }

    fn recalculate_tangents(&mut self) {
        let vertex_count = self.vertices.len();
        let mut tan = vec![Vec3::ZERO; vertex_count];
        let mut bitan = vec![Vec3::ZERO; vertex_count];
        let mut skipped = 0usize;

        if let Some(uvs) = &self.uvs {
            for tri in self.submeshes.iter().flat_map(|s| s.chunks_exact(3)) {
                let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
                if [i0, i1, i2]
                    .iter()
                    .any(|&i| i >= vertex_count || i >= uvs.len())
                {
                    skipped += 1;
                    continue;
                }

                let e1 = self.vertices[i1] - self.vertices[i0];
                let e2 = self.vertices[i2] - self.vertices[i0];
                let duv1 = uvs[i1] - uvs[i0];
                let duv2 = uvs[i2] - uvs[i0];

                let det = duv1.x * duv2.y - duv2.x * duv1.y;
                if det.abs() < DEGENERATE_UV_EPSILON {
                    continue;
                }
                let r = 1.0 / det;

                let t = (e1 * duv2.y - e2 * duv1.y) * r;
                let b = (e2 * duv1.x - e1 * duv2.x) * r;

                for i in [i0, i1, i2] {
                    tan[i] += t;
                    bitan[i] += b;
                }
            }
        }

        if skipped > 0 {
            debug!("Skipped {} triangles with out-of-range indices", skipped);
        }

        self.tangents = (0..vertex_count)
            .map(|i| {
                let n = self
                    .normals
                    .get(i)
                    .and_then(|n| n.try_normalize())
                    .unwrap_or(Vec3::Z);

                // Gram-Schmidt against the normal
                match (tan[i] - n * n.dot(tan[i])).try_normalize() {
                    Some(t) => {
                        let w = if n.cross(t).dot(bitan[i]) < 0.0 { -1.0 } else { 1.0 };
                        t.extend(w)
                    }
                    None => n.any_orthonormal_vector().extend(1.0),
                }
            })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;

    fn unit_quad() -> Mesh {
        Mesh::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![Vec3::Z; 4],
            vec![vec![0, 1, 2, 0, 2, 3]],
        )
        .with_uvs(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ])
    }

    #[test]
    fn test_new_computes_bounds() {
        let mesh = unit_quad();
        assert_eq!(mesh.bounds.min, Vec3::ZERO);
        assert_eq!(mesh.bounds.max, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_tangents_follow_u_direction() {
        let mesh = unit_quad();
        assert_eq!(mesh.tangents.len(), 4);
        for t in &mesh.tangents {
            assert!((t.truncate() - Vec3::X).length() < 1e-5);
            assert_eq!(t.w, 1.0);
        }
    }

    #[test]
    fn test_tangents_without_uvs_are_orthogonal() {
        let mut mesh = unit_quad();
        mesh.uvs = None;
        mesh.recalculate_tangents();
        for (t, n) in mesh.tangents.iter().zip(&mesh.normals) {
            assert!(t.truncate().dot(*n).abs() < 1e-5);
            assert!((t.truncate().length() - 1.0).abs() < 1e-5);
            assert_eq!(t.w.abs(), 1.0);
        }
    }

    #[test]
    fn test_tangents_skip_out_of_range_triangles() {
        let mut mesh = unit_quad();
        mesh.submeshes[0].extend_from_slice(&[0, 1, 99]);
        mesh.recalculate_tangents();
        assert_eq!(mesh.tangents.len(), 4);
        assert!((mesh.tangents[0].truncate() - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_triangle_counts() {
        let mut mesh = unit_quad();
        mesh.submeshes.push(vec![0, 1, 2]);
        assert_eq!(mesh.triangle_count(), 3);
        assert_eq!(mesh.submesh_triangle_counts(), vec![2, 1]);
    }

    #[test]
    fn test_validate_ok() {
        assert_eq!(unit_quad().validate(), Ok(()));
        assert_eq!(Mesh::empty().validate(), Ok(()));
    }

    #[test]
    fn test_validate_normal_mismatch() {
        let mut mesh = unit_quad();
        mesh.normals.pop();
        assert_eq!(
            mesh.validate(),
            Err(MeshError::NormalCountMismatch {
                vertices: 4,
                normals: 3
            })
        );
    }

    #[test]
    fn test_validate_uv_mismatch() {
        let mut mesh = unit_quad();
        mesh.uvs = Some(vec![Vec2::ZERO]);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::UvCountMismatch { vertices: 4, uvs: 1 })
        );
    }

    #[test]
    fn test_validate_incomplete_triangle() {
        let mut mesh = unit_quad();
        mesh.submeshes.push(vec![0, 1]);
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IncompleteTriangle { submesh: 1, len: 2 })
        );
    }

    #[test]
    fn test_validate_index_out_of_range() {
        let mut mesh = unit_quad();
        mesh.submeshes[0][4] = 7;
        assert_eq!(
            mesh.validate(),
            Err(MeshError::IndexOutOfRange {
                submesh: 0,
                position: 4,
                index: 7,
                vertex_count: 4
            })
        );
    }

    #[test]
    fn test_signed_volume_of_open_quad_is_zero() {
        // All points lie in z = 0
        assert_eq!(unit_quad().signed_volume(), 0.0);
    }
}
