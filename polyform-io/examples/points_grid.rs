//! Build a regular grid of 3D points and export it as an ASCII PLY file.
//!
//! Run with: cargo run -p polyform-io --example points_grid

use polyform_io::{Encoding, save_ply};
use polyform_types::{Mesh, Vertex};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let size = 1024u32;

    let mut mesh = Mesh::with_capacity((size * size) as usize, 0);
    for y in 0..size {
        for x in 0..size {
            let u = f64::from(x) / f64::from(size - 1);
            let v = f64::from(y) / f64::from(size - 1);
            mesh.add_vertex(Vertex::from_coords(u, v, 1.0))?;
        }
    }

    save_ply(&mesh, "points_plane.ply", Encoding::Ascii)?;
    println!("wrote points_plane.ply ({} points)", mesh.vertex_count());
    Ok(())
}
