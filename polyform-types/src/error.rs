//! Error types for mesh construction.

use thiserror::Error;

use crate::schema::VertexSchema;

/// Result type for mesh construction operations.
pub type MeshResult<T> = Result<T, MeshError>;

/// Errors that can occur while populating a mesh.
///
/// All variants signal programmer errors in the data being appended; they
/// are surfaced synchronously by the offending call and are not retried.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MeshError {
    /// A vertex's channel set disagrees with the schema fixed by the
    /// first vertex.
    #[error("vertex {index} has channels [{got}], mesh schema is [{expected}]")]
    SchemaMismatch {
        /// Index the vertex would have received.
        index: usize,
        /// Schema established by the first vertex.
        expected: VertexSchema,
        /// Schema of the rejected vertex.
        got: VertexSchema,
    },

    /// A face references a vertex that does not exist.
    #[error("face index {index} out of bounds for {vertex_count} vertices")]
    InvalidIndex {
        /// The out-of-bounds index.
        index: u32,
        /// Vertex count at the time of insertion.
        vertex_count: usize,
    },

    /// A face with fewer than 3 vertices.
    #[error("face needs at least 3 vertices, got {len}")]
    DegenerateFace {
        /// Number of indices supplied.
        len: usize,
    },

    /// A face with more vertices than a list count byte can express.
    #[error("face has {len} vertices, maximum supported is 255")]
    OversizedFace {
        /// Number of indices supplied.
        len: usize,
    },
}
