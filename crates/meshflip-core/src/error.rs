/// Mesh invariant violations reported by [`crate::EditableMesh::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshError {
    #[error("mesh has {vertices} vertices but {normals} normals")]
    NormalCountMismatch { vertices: usize, normals: usize },

    #[error("mesh has {vertices} vertices but {uvs} UVs")]
    UvCountMismatch { vertices: usize, uvs: usize },

    #[error("submesh {submesh} has {len} indices, which is not a multiple of 3")]
    IncompleteTriangle { submesh: usize, len: usize },

    #[error(
        "submesh {submesh} index {index} at position {position} is out of range \
         ({vertex_count} vertices)"
    )]
    IndexOutOfRange {
        submesh: usize,
        position: usize,
        index: u32,
        vertex_count: usize,
    },
}
