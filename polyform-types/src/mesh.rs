//! Append-only polygon mesh container.

use crate::error::{MeshError, MeshResult};
use crate::schema::VertexSchema;
use crate::vertex::Vertex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum number of vertices in a single face.
///
/// Face records store their vertex count in a single unsigned byte, so
/// polygons beyond 255 vertices cannot be represented.
pub const MAX_FACE_ARITY: usize = 255;

/// An append-only container of vertices and polygon faces.
///
/// A `Mesh` with zero faces is a point cloud; faces are optional. Vertex
/// insertion order is significant: it defines on-disk order and the
/// indices faces refer to.
///
/// # Channel Schema
///
/// The first call to [`add_vertex`](Self::add_vertex) fixes the channel
/// schema (which of normal/color/texcoord are present) for the mesh's
/// lifetime. Later vertices must carry exactly the same channels.
///
/// # Invariants
///
/// - All vertices share one [`VertexSchema`].
/// - Every face holds 3..=255 indices, all `< vertex_count()`.
///
/// Both are enforced at insertion; there are no removal or update
/// operations, so the invariants hold for the life of the value.
///
/// # Example
///
/// ```
/// use polyform_types::{Mesh, Vertex};
///
/// let mut mesh = Mesh::new();
/// for z in 0..4 {
///     mesh.add_vertex(Vertex::from_coords(0.0, 0.0, f64::from(z))).unwrap();
/// }
/// assert_eq!(mesh.vertex_count(), 4);
/// assert!(mesh.is_point_cloud());
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mesh {
    vertices: Vec<Vertex>,
    faces: Vec<Vec<u32>>,
    schema: Option<VertexSchema>,
}

impl Mesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            schema: None,
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            schema: None,
        }
    }

    /// Reserve capacity for additional vertices and faces.
    pub fn reserve(&mut self, additional_vertices: usize, additional_faces: usize) {
        self.vertices.reserve(additional_vertices);
        self.faces.reserve(additional_faces);
    }

    /// Append a vertex, returning its 0-based index.
    ///
    /// The first vertex fixes the mesh's channel schema; every later
    /// vertex must carry the same channels.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::SchemaMismatch`] if the vertex's channel set
    /// differs from the established schema.
    ///
    /// # Example
    ///
    /// ```
    /// use polyform_types::{Mesh, Vertex, Vector3};
    ///
    /// let mut mesh = Mesh::new();
    /// let i = mesh.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0)).unwrap();
    /// assert_eq!(i, 0);
    ///
    /// // The schema is now position-only, so a normal is rejected
    /// let with_normal = Vertex::from_coords(1.0, 0.0, 0.0).with_normal(Vector3::z());
    /// assert!(mesh.add_vertex(with_normal).is_err());
    /// ```
    pub fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> MeshResult<u32> {
        let vertex = vertex.into();
        let got = vertex.schema();

        match self.schema {
            None => self.schema = Some(got),
            Some(expected) => {
                if expected != got {
                    return Err(MeshError::SchemaMismatch {
                        index: self.vertices.len(),
                        expected,
                        got,
                    });
                }
            }
        }

        #[allow(clippy::cast_possible_truncation)]
        // Truncation: indices are u32, meshes with >4B vertices are unsupported
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        Ok(index)
    }

    /// Append a polygon face.
    ///
    /// # Errors
    ///
    /// - [`MeshError::DegenerateFace`] if fewer than 3 indices are given
    /// - [`MeshError::OversizedFace`] if more than [`MAX_FACE_ARITY`]
    /// - [`MeshError::InvalidIndex`] if any index is not a valid vertex
    pub fn add_face(&mut self, indices: &[u32]) -> MeshResult<()> {
        if indices.len() < 3 {
            return Err(MeshError::DegenerateFace {
                len: indices.len(),
            });
        }
        if indices.len() > MAX_FACE_ARITY {
            return Err(MeshError::OversizedFace {
                len: indices.len(),
            });
        }
        for &index in indices {
            if index as usize >= self.vertices.len() {
                return Err(MeshError::InvalidIndex {
                    index,
                    vertex_count: self.vertices.len(),
                });
            }
        }
        self.faces.push(indices.to_vec());
        Ok(())
    }

    /// Append a triangle face.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidIndex`] if any index is not a valid
    /// vertex.
    #[inline]
    pub fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) -> MeshResult<()> {
        self.add_face(&[i0, i1, i2])
    }

    /// Append a quad face.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidIndex`] if any index is not a valid
    /// vertex.
    #[inline]
    pub fn add_quad(&mut self, i0: u32, i1: u32, i2: u32, i3: u32) -> MeshResult<()> {
        self.add_face(&[i0, i1, i2, i3])
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check if the mesh has no faces.
    ///
    /// An empty mesh is trivially a point cloud.
    #[inline]
    #[must_use]
    pub fn is_point_cloud(&self) -> bool {
        self.faces.is_empty()
    }

    /// The channel schema fixed by the first vertex, or `None` while the
    /// mesh is still empty.
    #[inline]
    #[must_use]
    pub const fn schema(&self) -> Option<VertexSchema> {
        self.schema
    }

    /// All vertices, in insertion order.
    #[inline]
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All faces, in insertion order.
    #[inline]
    #[must_use]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Get a vertex by index.
    #[inline]
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<&Vertex> {
        self.vertices.get(index)
    }

    /// Get a face's indices by face index.
    #[inline]
    #[must_use]
    pub fn face(&self, index: usize) -> Option<&[u32]> {
        self.faces.get(index).map(Vec::as_slice)
    }
}
