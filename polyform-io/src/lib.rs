//! PLY file I/O for polyform meshes.
//!
//! This crate serializes a [`Mesh`](polyform_types::Mesh) to the PLY
//! (Polygon File Format) interchange format and reads PLY files back.
//! Both ASCII and binary little-endian bodies are produced; point clouds
//! (meshes with zero faces) are fully supported.
//!
//! # Example
//!
//! ```no_run
//! use polyform_io::{Encoding, save_ply};
//! use polyform_types::{Mesh, Vertex};
//!
//! // A small grid of points at z = 1
//! let size = 64;
//! let mut mesh = Mesh::new();
//! for y in 0..size {
//!     for x in 0..size {
//!         let u = f64::from(x) / f64::from(size - 1);
//!         let v = f64::from(y) / f64::from(size - 1);
//!         mesh.add_vertex(Vertex::from_coords(u, v, 1.0)).unwrap();
//!     }
//! }
//!
//! save_ply(&mesh, "points_plane.ply", Encoding::Ascii).unwrap();
//! ```
//!
//! # Encodings
//!
//! The boolean "binary" flag found in many mesh libraries is an explicit
//! [`Encoding`] here, leaving room for future variants without an API
//! break. The header is ASCII in every encoding; only the body differs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod ply;

pub use error::{IoError, IoResult};
pub use ply::{Encoding, load_ply, save_ply, write_ply};
