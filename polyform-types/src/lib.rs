//! Core geometry types for polyform.
//!
//! This crate provides the foundational container for point clouds and
//! polygon meshes:
//!
//! - [`Vertex`] - A point in 3D space with optional attributes
//! - [`Mesh`] - An append-only container of vertices and polygon faces
//! - [`VertexSchema`] - The per-vertex channel set a mesh declares
//!
//! # Leaf Crate
//!
//! This crate performs no I/O and has no format knowledge. It can be used
//! in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Python bindings
//!
//! # Channel Schema
//!
//! Every vertex in a [`Mesh`] carries the same channel set: a channel
//! (normal, color, texcoord) is either present for all vertices or absent
//! for all vertices. The first vertex added to a mesh fixes the schema for
//! the mesh's lifetime; later insertions that disagree are rejected with
//! [`MeshError::SchemaMismatch`].
//!
//! # Example
//!
//! ```
//! use polyform_types::{Mesh, Vertex};
//!
//! // Create a simple triangle mesh
//! let mut mesh = Mesh::new();
//! mesh.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0)).unwrap();
//! mesh.add_vertex(Vertex::from_coords(1.0, 0.0, 0.0)).unwrap();
//! mesh.add_vertex(Vertex::from_coords(0.5, 1.0, 0.0)).unwrap();
//! mesh.add_triangle(0, 1, 2).unwrap();
//!
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.face_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod mesh;
mod schema;
mod vertex;

// Re-export core types
pub use error::{MeshError, MeshResult};
pub use mesh::{MAX_FACE_ARITY, Mesh};
pub use schema::{ColorDepth, ColorFormat, VertexSchema};
pub use vertex::{Vertex, VertexAttributes, VertexColor};

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};
