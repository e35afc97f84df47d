//! PLY (Polygon File Format) support.
//!
//! PLY files consist of an ASCII header describing the element/property
//! schema, followed by a data body in the declared encoding. The header is
//! ASCII even when the body is binary.
//!
//! # Supported Properties
//!
//! - Vertex positions (x, y, z) - required, float
//! - Vertex normals (nx, ny, nz) - optional, float
//! - Vertex colors (red, green, blue, alpha) - optional, uchar or float
//! - Texture coordinates (u, v) - optional, float
//! - Face vertex indices (`vertex_indices`) - optional; a file without a
//!   face element is a point cloud
//!
//! # Format Variants
//!
//! - **ASCII** - Human-readable, larger files
//! - **Binary Little Endian** - Compact, fast to read/write
//!
//! The loader additionally accepts binary big-endian files.
//!
//! # Example
//!
//! ```no_run
//! use polyform_io::{Encoding, load_ply, save_ply};
//!
//! let mesh = load_ply("model.ply").unwrap();
//! save_ply(&mesh, "output.ply", Encoding::BinaryLittleEndian).unwrap();
//! ```

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};

use polyform_types::{ColorDepth, Mesh, Vector3, Vertex, VertexColor, VertexSchema};

use crate::error::{IoError, IoResult};

/// Body encoding of a PLY file.
///
/// The header is ASCII regardless of the body encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// Human-readable body, one record per line.
    Ascii,
    /// Fixed-width little-endian binary body.
    BinaryLittleEndian,
}

impl Encoding {
    /// The header format line for this encoding.
    #[must_use]
    pub const fn format_line(&self) -> &'static str {
        match self {
            Self::Ascii => "format ascii 1.0",
            Self::BinaryLittleEndian => "format binary_little_endian 1.0",
        }
    }
}

/// Scalar type of a single vertex property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PropertyKind {
    Float32,
    UChar,
}

impl PropertyKind {
    /// The header type keyword.
    const fn type_name(self) -> &'static str {
        match self {
            Self::Float32 => "float",
            Self::UChar => "uchar",
        }
    }

    /// Size of one value in the binary body.
    const fn size(self) -> usize {
        match self {
            Self::Float32 => 4,
            Self::UChar => 1,
        }
    }
}

/// One resolved vertex property: header name plus scalar type.
#[derive(Debug, Clone, Copy)]
struct PlyProperty {
    name: &'static str,
    kind: PropertyKind,
}

/// The canonical on-disk vertex layout for a mesh schema.
///
/// Properties appear in a fixed order: position, then normal, then color,
/// then texture coordinates. Header emission and both body writers derive
/// from this one list, so they cannot disagree.
#[derive(Debug)]
struct PropertyLayout {
    properties: Vec<PlyProperty>,
}

impl PropertyLayout {
    fn resolve(schema: Option<VertexSchema>) -> Self {
        let mut properties = vec![
            PlyProperty {
                name: "x",
                kind: PropertyKind::Float32,
            },
            PlyProperty {
                name: "y",
                kind: PropertyKind::Float32,
            },
            PlyProperty {
                name: "z",
                kind: PropertyKind::Float32,
            },
        ];

        let Some(schema) = schema else {
            return Self { properties };
        };

        if schema.normal {
            for name in ["nx", "ny", "nz"] {
                properties.push(PlyProperty {
                    name,
                    kind: PropertyKind::Float32,
                });
            }
        }
        if let Some(color) = schema.color {
            let kind = match color.depth {
                ColorDepth::U8 => PropertyKind::UChar,
                ColorDepth::Float => PropertyKind::Float32,
            };
            properties.push(PlyProperty { name: "red", kind });
            properties.push(PlyProperty { name: "green", kind });
            properties.push(PlyProperty { name: "blue", kind });
            if color.alpha {
                properties.push(PlyProperty { name: "alpha", kind });
            }
        }
        if schema.texcoord {
            for name in ["u", "v"] {
                properties.push(PlyProperty {
                    name,
                    kind: PropertyKind::Float32,
                });
            }
        }

        Self { properties }
    }

    /// Width of one vertex record in the binary body.
    fn vertex_record_size(&self) -> usize {
        self.properties.iter().map(|p| p.kind.size()).sum()
    }
}

/// Scalar value of one vertex property, in layout order.
#[derive(Debug, Clone, Copy)]
enum PropertyValue {
    Float(f32),
    Byte(u8),
}

/// Append the vertex's property values to `out`, in the same canonical
/// order `PropertyLayout::resolve` declares them.
#[allow(clippy::cast_possible_truncation)]
// Truncation: PLY stores 32-bit floats, narrowing from f64 is the format
fn push_vertex_values(vertex: &Vertex, out: &mut Vec<PropertyValue>) {
    out.push(PropertyValue::Float(vertex.position.x as f32));
    out.push(PropertyValue::Float(vertex.position.y as f32));
    out.push(PropertyValue::Float(vertex.position.z as f32));

    if let Some(normal) = vertex.attributes.normal {
        out.push(PropertyValue::Float(normal.x as f32));
        out.push(PropertyValue::Float(normal.y as f32));
        out.push(PropertyValue::Float(normal.z as f32));
    }
    if let Some(color) = vertex.attributes.color {
        match color {
            VertexColor::Rgb8(r, g, b) => {
                out.push(PropertyValue::Byte(r));
                out.push(PropertyValue::Byte(g));
                out.push(PropertyValue::Byte(b));
            }
            VertexColor::Rgba8(r, g, b, a) => {
                out.push(PropertyValue::Byte(r));
                out.push(PropertyValue::Byte(g));
                out.push(PropertyValue::Byte(b));
                out.push(PropertyValue::Byte(a));
            }
            VertexColor::RgbFloat(r, g, b) => {
                out.push(PropertyValue::Float(r));
                out.push(PropertyValue::Float(g));
                out.push(PropertyValue::Float(b));
            }
            VertexColor::RgbaFloat(r, g, b, a) => {
                out.push(PropertyValue::Float(r));
                out.push(PropertyValue::Float(g));
                out.push(PropertyValue::Float(b));
                out.push(PropertyValue::Float(a));
            }
        }
    }
    if let Some((u, v)) = vertex.attributes.texcoord {
        out.push(PropertyValue::Float(u));
        out.push(PropertyValue::Float(v));
    }
}

/// Save a mesh to a PLY file.
///
/// # Arguments
///
/// * `mesh` - The mesh to save
/// * `path` - Output file path
/// * `encoding` - ASCII or binary little-endian body
///
/// # Errors
///
/// Returns an error if the file cannot be created or written. On a write
/// failure the destination may hold a truncated file; callers requiring
/// atomicity should write to a temporary path and rename on success.
///
/// # Example
///
/// ```no_run
/// use polyform_io::{Encoding, save_ply};
/// use polyform_types::{Mesh, Vertex};
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(Vertex::from_coords(0.0, 0.0, 1.0)).unwrap();
/// save_ply(&mesh, "cloud.ply", Encoding::Ascii).unwrap();
/// ```
pub fn save_ply<P: AsRef<Path>>(mesh: &Mesh, path: P, encoding: Encoding) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_ply(mesh, &mut writer, encoding)?;
    writer.flush()?;
    Ok(())
}

/// Write a mesh as PLY to an arbitrary byte sink.
///
/// Streams the output record by record; the whole file is never held in
/// memory. Writes exactly once and does not mutate the mesh. A mesh with
/// zero vertices is valid and produces a header-only file.
///
/// # Errors
///
/// Returns an error if the sink fails. Failures are not retried; the sink
/// may have received a truncated stream.
pub fn write_ply<W: Write>(mesh: &Mesh, writer: &mut W, encoding: Encoding) -> IoResult<()> {
    let layout = PropertyLayout::resolve(mesh.schema());
    write_header(mesh, &layout, writer, encoding)?;
    match encoding {
        Encoding::Ascii => write_body_ascii(mesh, writer),
        Encoding::BinaryLittleEndian => write_body_binary(mesh, writer),
    }
}

/// Write the ASCII header: magic, format line, element/property schema.
///
/// The face element is declared only when the mesh has faces, so point
/// clouds produce a vertex-only schema.
fn write_header<W: Write>(
    mesh: &Mesh,
    layout: &PropertyLayout,
    writer: &mut W,
    encoding: Encoding,
) -> IoResult<()> {
    writeln!(writer, "ply")?;
    writeln!(writer, "{}", encoding.format_line())?;
    writeln!(writer, "element vertex {}", mesh.vertex_count())?;
    for property in &layout.properties {
        writeln!(writer, "property {} {}", property.kind.type_name(), property.name)?;
    }
    if mesh.face_count() > 0 {
        writeln!(writer, "element face {}", mesh.face_count())?;
        writeln!(writer, "property list uchar int vertex_indices")?;
    }
    writeln!(writer, "end_header")?;
    Ok(())
}

/// One space-separated line per vertex, then one per face.
///
/// Floats go through Rust's shortest-round-trip formatting, which is
/// lossless for f32 values.
fn write_body_ascii<W: Write>(mesh: &Mesh, writer: &mut W) -> IoResult<()> {
    let mut values = Vec::new();
    for vertex in mesh.vertices() {
        values.clear();
        push_vertex_values(vertex, &mut values);
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                write!(writer, " ")?;
            }
            match value {
                PropertyValue::Float(v) => write!(writer, "{v}")?,
                PropertyValue::Byte(v) => write!(writer, "{v}")?,
            }
        }
        writeln!(writer)?;
    }

    for face in mesh.faces() {
        write!(writer, "{}", face.len())?;
        for index in face {
            write!(writer, " {index}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Fixed-width little-endian records, no padding, no trailing bytes.
fn write_body_binary<W: Write>(mesh: &Mesh, writer: &mut W) -> IoResult<()> {
    let mut values = Vec::new();
    for vertex in mesh.vertices() {
        values.clear();
        push_vertex_values(vertex, &mut values);
        for value in &values {
            match value {
                PropertyValue::Float(v) => writer.write_all(&v.to_le_bytes())?,
                PropertyValue::Byte(v) => writer.write_all(&[*v])?,
            }
        }
    }

    for face in mesh.faces() {
        // Arity fits in u8: the container rejects faces beyond 255 indices
        #[allow(clippy::cast_possible_truncation)]
        writer.write_all(&[face.len() as u8])?;
        for &index in face {
            #[allow(clippy::cast_possible_wrap)]
            writer.write_all(&(index as i32).to_le_bytes())?;
        }
    }

    Ok(())
}

/// Load a mesh from a PLY file.
///
/// Supports ASCII, binary little-endian, and binary big-endian bodies.
/// The channel schema is derived from the vertex element's properties, so
/// the returned mesh always satisfies the mesh-wide schema invariant. A
/// file without a face element loads as a point cloud.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The file is not valid PLY
/// - A face references a missing vertex or has an unsupported arity
///
/// # Example
///
/// ```no_run
/// use polyform_io::load_ply;
///
/// let mesh = load_ply("model.ply").unwrap();
/// println!("{} vertices, {} faces", mesh.vertex_count(), mesh.face_count());
/// ```
pub fn load_ply<P: AsRef<Path>>(path: P) -> IoResult<Mesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::Io(e)
        }
    })?;
    let mut reader = BufReader::new(file);

    // Generic DefaultElement parser - works for all element types
    let parser = Parser::<DefaultElement>::new();

    let header = parser
        .read_header(&mut reader)
        .map_err(|e| IoError::invalid_content(format!("failed to parse PLY header: {e}")))?;

    let payload = parser
        .read_payload(&mut reader, &header)
        .map_err(|e| IoError::invalid_content(format!("failed to read PLY payload: {e}")))?;

    let mut mesh = Mesh::new();

    if let Some(vertex_elements) = payload.get("vertex") {
        mesh.reserve(vertex_elements.len(), 0);
        for element in vertex_elements {
            mesh.add_vertex(vertex_from_element(element))?;
        }
    }

    if let Some(face_elements) = payload.get("face") {
        mesh.reserve(0, face_elements.len());
        for element in face_elements {
            let indices = index_list(element);
            // Tolerate stray short faces; anything else must be addable
            if indices.len() >= 3 {
                mesh.add_face(&indices)?;
            }
        }
    }

    Ok(mesh)
}

/// Build a vertex from a PLY element, recovering whichever of the
/// supported channels its properties carry.
fn vertex_from_element(element: &DefaultElement) -> Vertex {
    let x = get_float(element, "x").unwrap_or(0.0);
    let y = get_float(element, "y").unwrap_or(0.0);
    let z = get_float(element, "z").unwrap_or(0.0);

    let mut vertex = Vertex::from_coords(x, y, z);
    if let Some(normal) = normal_from_element(element) {
        vertex = vertex.with_normal(normal);
    }
    if let Some(color) = color_from_element(element) {
        vertex = vertex.with_color(color);
    }
    if let Some((u, v)) = texcoord_from_element(element) {
        vertex = vertex.with_texcoord(u, v);
    }
    vertex
}

/// Extract a float property from a PLY element.
fn get_float(element: &DefaultElement, key: &str) -> Option<f64> {
    match element.get(key)? {
        Property::Float(v) => Some(f64::from(*v)),
        Property::Double(v) => Some(*v),
        _ => None,
    }
}

fn normal_from_element(element: &DefaultElement) -> Option<Vector3<f64>> {
    Some(Vector3::new(
        get_float(element, "nx")?,
        get_float(element, "ny")?,
        get_float(element, "nz")?,
    ))
}

/// Recover a color channel, preserving the file's component depth.
fn color_from_element(element: &DefaultElement) -> Option<VertexColor> {
    let (r, g, b) = (
        element.get("red")?,
        element.get("green")?,
        element.get("blue")?,
    );
    match (r, g, b) {
        (Property::UChar(r), Property::UChar(g), Property::UChar(b)) => {
            match element.get("alpha") {
                Some(Property::UChar(a)) => Some(VertexColor::Rgba8(*r, *g, *b, *a)),
                _ => Some(VertexColor::Rgb8(*r, *g, *b)),
            }
        }
        (Property::Float(r), Property::Float(g), Property::Float(b)) => {
            match element.get("alpha") {
                Some(Property::Float(a)) => Some(VertexColor::RgbaFloat(*r, *g, *b, *a)),
                _ => Some(VertexColor::RgbFloat(*r, *g, *b)),
            }
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
// Truncation: texture coordinates are stored as f32
fn texcoord_from_element(element: &DefaultElement) -> Option<(f32, f32)> {
    for (u_key, v_key) in [("u", "v"), ("s", "t")] {
        if let (Some(u), Some(v)) = (get_float(element, u_key), get_float(element, v_key)) {
            return Some((u as f32, v as f32));
        }
    }
    None
}

/// Extract the vertex index list from a face element.
#[allow(clippy::cast_sign_loss)]
fn index_list(element: &DefaultElement) -> Vec<u32> {
    // Try common property names for face indices
    for key in ["vertex_indices", "vertex_index"] {
        if let Some(prop) = element.get(key) {
            return match prop {
                Property::ListInt(v) => v.iter().map(|&i| i as u32).collect(),
                Property::ListUInt(v) => v.clone(),
                Property::ListChar(v) => v.iter().map(|&i| i as u32).collect(),
                Property::ListUChar(v) => v.iter().map(|&i| u32::from(i)).collect(),
                Property::ListShort(v) => v.iter().map(|&i| i as u32).collect(),
                Property::ListUShort(v) => v.iter().map(|&i| u32::from(i)).collect(),
                _ => continue,
            };
        }
    }
    Vec::new()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use polyform_types::{ColorFormat, MeshError};

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vertex::from_coords(0.0, 0.0, 0.0)).unwrap();
        mesh.add_vertex(Vertex::from_coords(1.0, 0.0, 0.0)).unwrap();
        mesh.add_vertex(Vertex::from_coords(0.0, 1.0, 0.0)).unwrap();
        mesh.add_triangle(0, 1, 2).unwrap();
        mesh
    }

    fn write_to_vec(mesh: &Mesh, encoding: Encoding) -> Vec<u8> {
        let mut out = Vec::new();
        write_ply(mesh, &mut out, encoding).unwrap();
        out
    }

    fn header_len(mesh: &Mesh, encoding: Encoding) -> usize {
        let mut out = Vec::new();
        let layout = PropertyLayout::resolve(mesh.schema());
        write_header(mesh, &layout, &mut out, encoding).unwrap();
        out.len()
    }

    #[test]
    fn layout_order_for_full_schema() {
        let schema = VertexSchema {
            normal: true,
            color: Some(ColorFormat {
                depth: ColorDepth::U8,
                alpha: true,
            }),
            texcoord: true,
        };
        let layout = PropertyLayout::resolve(Some(schema));
        let names: Vec<&str> = layout.properties.iter().map(|p| p.name).collect();
        assert_eq!(
            names,
            ["x", "y", "z", "nx", "ny", "nz", "red", "green", "blue", "alpha", "u", "v"]
        );
        // 9 floats + 4 color bytes
        assert_eq!(layout.vertex_record_size(), 9 * 4 + 4);
    }

    #[test]
    fn layout_for_missing_schema_is_position_only() {
        let layout = PropertyLayout::resolve(None);
        let names: Vec<&str> = layout.properties.iter().map(|p| p.name).collect();
        assert_eq!(names, ["x", "y", "z"]);
        assert_eq!(layout.vertex_record_size(), 12);
    }

    #[test]
    fn ascii_single_vertex_exact_output() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vertex::from_coords(0.0, 0.0, 1.0)).unwrap();

        let out = write_to_vec(&mesh, Encoding::Ascii);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ply\n\
             format ascii 1.0\n\
             element vertex 1\n\
             property float x\n\
             property float y\n\
             property float z\n\
             end_header\n\
             0 0 1\n"
        );
    }

    #[test]
    fn empty_mesh_is_header_only() {
        let mesh = Mesh::new();

        let out = write_to_vec(&mesh, Encoding::Ascii);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ply\n\
             format ascii 1.0\n\
             element vertex 0\n\
             property float x\n\
             property float y\n\
             property float z\n\
             end_header\n"
        );

        // Binary: same header with its own format line, still no body
        let out = write_to_vec(&mesh, Encoding::BinaryLittleEndian);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("format binary_little_endian 1.0"));
        assert!(text.ends_with("end_header\n"));
    }

    #[test]
    fn point_cloud_header_has_no_face_element() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Vertex::from_coords(0.5, 0.5, 0.5)).unwrap();

        let out = write_to_vec(&mesh, Encoding::Ascii);
        let text = String::from_utf8(out).unwrap();
        assert!(!text.contains("element face"));
        assert!(!text.contains("vertex_indices"));
    }

    #[test]
    fn binary_triangle_exact_body() {
        let mesh = triangle_mesh();
        let out = write_to_vec(&mesh, Encoding::BinaryLittleEndian);
        let header = header_len(&mesh, Encoding::BinaryLittleEndian);
        let body = &out[header..];

        // 3 vertices of 12 bytes, then 1 count byte + 3 * 4 index bytes
        assert_eq!(body.len(), 3 * 12 + 1 + 3 * 4);

        let v1 = &body[12..24];
        assert_eq!(&v1[0..4], &1.0f32.to_le_bytes());
        assert_eq!(&v1[4..8], &0.0f32.to_le_bytes());

        let face = &body[36..];
        assert_eq!(face[0], 3);
        assert_eq!(&face[1..5], &0i32.to_le_bytes());
        assert_eq!(&face[5..9], &1i32.to_le_bytes());
        assert_eq!(&face[9..13], &2i32.to_le_bytes());
    }

    #[test]
    fn binary_length_is_exact_for_attribute_cloud() {
        let mut mesh = Mesh::new();
        for i in 0..7 {
            let t = f64::from(i) / 7.0;
            mesh.add_vertex(
                Vertex::from_coords(t, t, t)
                    .with_normal(Vector3::z())
                    .with_color(VertexColor::Rgba8(10, 20, 30, 255)),
            )
            .unwrap();
        }

        let out = write_to_vec(&mesh, Encoding::BinaryLittleEndian);
        let header = header_len(&mesh, Encoding::BinaryLittleEndian);

        // position + normal floats, 4 color bytes, no padding
        let record = 6 * 4 + 4;
        assert_eq!(out.len(), header + 7 * record);
    }

    #[test]
    fn ascii_face_lines_lead_with_arity() {
        let mut mesh = Mesh::new();
        for i in 0..4 {
            mesh.add_vertex(Vertex::from_coords(f64::from(i), 0.0, 0.0))
                .unwrap();
        }
        mesh.add_quad(0, 1, 2, 3).unwrap();

        let out = write_to_vec(&mesh, Encoding::Ascii);
        let text = String::from_utf8(out).unwrap();
        let last_line = text.lines().last().unwrap();
        assert_eq!(last_line, "4 0 1 2 3");
    }

    #[test]
    fn uchar_color_is_written_as_integers() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(
            Vertex::from_coords(0.0, 0.0, 0.0).with_color(VertexColor::Rgb8(255, 128, 0)),
        )
        .unwrap();

        let out = write_to_vec(&mesh, Encoding::Ascii);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("property uchar red"));
        assert!(text.lines().last().unwrap().ends_with("255 128 0"));
    }

    #[test]
    fn float_color_is_declared_as_float() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(
            Vertex::from_coords(0.0, 0.0, 0.0).with_color(VertexColor::RgbFloat(1.0, 0.5, 0.0)),
        )
        .unwrap();

        let out = write_to_vec(&mesh, Encoding::Ascii);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("property float red"));
        assert!(text.lines().last().unwrap().ends_with("1 0.5 0"));
    }

    #[test]
    fn roundtrip_binary_triangle() {
        let original = triangle_mesh();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.ply");
        save_ply(&original, &path, Encoding::BinaryLittleEndian).unwrap();

        let loaded = load_ply(&path).unwrap();
        assert_eq!(loaded.vertex_count(), original.vertex_count());
        assert_eq!(loaded.face_count(), original.face_count());
        assert_eq!(loaded.face(0), Some(&[0u32, 1, 2][..]));

        for (orig, load) in original.vertices().iter().zip(loaded.vertices()) {
            assert!((orig.position.x - load.position.x).abs() < 1e-6);
            assert!((orig.position.y - load.position.y).abs() < 1e-6);
            assert!((orig.position.z - load.position.z).abs() < 1e-6);
        }
    }

    #[test]
    fn roundtrip_ascii_with_all_channels() {
        let mut original = Mesh::new();
        for i in 0..3 {
            let t = f64::from(i) / 2.0;
            original
                .add_vertex(
                    Vertex::from_coords(t, 1.0 - t, 0.25)
                        .with_normal(Vector3::new(0.0, 0.0, 1.0))
                        .with_color(VertexColor::Rgba8(10, 20, 30, 200))
                        .with_texcoord(0.5, 0.25),
                )
                .unwrap();
        }
        original.add_triangle(0, 1, 2).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("channels.ply");
        save_ply(&original, &path, Encoding::Ascii).unwrap();

        let loaded = load_ply(&path).unwrap();
        assert_eq!(loaded.schema(), original.schema());

        let vertex = loaded.vertex(1).unwrap();
        assert_eq!(vertex.color(), Some(VertexColor::Rgba8(10, 20, 30, 200)));
        assert_eq!(vertex.texcoord(), Some((0.5, 0.25)));
        let normal = vertex.normal().unwrap();
        assert!((normal.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn roundtrip_float_color() {
        let mut original = Mesh::new();
        original
            .add_vertex(
                Vertex::from_coords(0.0, 0.0, 0.0)
                    .with_color(VertexColor::RgbFloat(0.75, 0.5, 0.125)),
            )
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("float_color.ply");
        save_ply(&original, &path, Encoding::Ascii).unwrap();

        let loaded = load_ply(&path).unwrap();
        assert_eq!(
            loaded.vertex(0).unwrap().color(),
            Some(VertexColor::RgbFloat(0.75, 0.5, 0.125))
        );
    }

    #[test]
    fn roundtrip_point_cloud_stays_point_cloud() {
        let mut original = Mesh::new();
        for i in 0..16 {
            let t = f64::from(i) / 15.0;
            original
                .add_vertex(Vertex::from_coords(t, t * t, 1.0))
                .unwrap();
        }

        let dir = tempfile::tempdir().unwrap();
        for encoding in [Encoding::Ascii, Encoding::BinaryLittleEndian] {
            let path = dir.path().join("cloud.ply");
            save_ply(&original, &path, encoding).unwrap();

            let loaded = load_ply(&path).unwrap();
            assert_eq!(loaded.vertex_count(), 16);
            assert!(loaded.is_point_cloud());
        }
    }

    #[test]
    fn load_nonexistent_file() {
        let result = load_ply("nonexistent_file_12345.ply");
        assert!(matches!(result, Err(IoError::FileNotFound { .. })));
    }

    #[test]
    fn load_surfaces_invalid_face_indices() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad_face.ply");
        std::fs::write(
            &path,
            "ply\nformat ascii 1.0\nelement vertex 1\nproperty float x\nproperty float y\n\
             property float z\nelement face 1\nproperty list uchar int vertex_indices\n\
             end_header\n0 0 0\n3 0 1 2\n",
        )
        .unwrap();

        let result = load_ply(&path);
        assert!(matches!(
            result,
            Err(IoError::Mesh(MeshError::InvalidIndex { .. }))
        ));
    }
}
