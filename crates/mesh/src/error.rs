use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("triangle {triangle} references vertex {index} but the mesh has {vertex_count} vertices")]
    IndexOutOfRange {
        triangle: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("expected {expected} normals (one per vertex), got {actual}")]
    NormalCountMismatch { expected: usize, actual: usize },

    #[error("vertex {0} is not referenced by any triangle")]
    UnreferencedVertex(usize),

    #[error("triangle {0} has zero area")]
    DegenerateTriangle(usize),

    /// The incident faces of a vertex cancel out, leaving no usable direction.
    #[error("incident faces of vertex {0} do not define a normal")]
    DegenerateNormal(usize),
}

pub type Result<T> = std::result::Result<T, MeshError>;
