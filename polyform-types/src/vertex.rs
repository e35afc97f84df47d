//! Vertex types and attributes.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::schema::{ColorDepth, ColorFormat, VertexSchema};

/// Per-vertex color in one of the layouts a mesh can declare.
///
/// Color is stored either as 8-bit integer components (0-255) or as
/// 32-bit float components (0.0-1.0), with or without an alpha component.
/// The variant used by the first vertex becomes part of the mesh-wide
/// schema, so a mesh never mixes depths or component counts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VertexColor {
    /// RGB with 8-bit components.
    Rgb8(u8, u8, u8),
    /// RGBA with 8-bit components.
    Rgba8(u8, u8, u8, u8),
    /// RGB with float components in [0, 1].
    RgbFloat(f32, f32, f32),
    /// RGBA with float components in [0, 1].
    RgbaFloat(f32, f32, f32, f32),
}

impl VertexColor {
    /// The color format (depth and alpha) this value belongs to.
    #[inline]
    #[must_use]
    pub const fn format(&self) -> ColorFormat {
        match self {
            Self::Rgb8(..) => ColorFormat {
                depth: ColorDepth::U8,
                alpha: false,
            },
            Self::Rgba8(..) => ColorFormat {
                depth: ColorDepth::U8,
                alpha: true,
            },
            Self::RgbFloat(..) => ColorFormat {
                depth: ColorDepth::Float,
                alpha: false,
            },
            Self::RgbaFloat(..) => ColorFormat {
                depth: ColorDepth::Float,
                alpha: true,
            },
        }
    }

    /// Number of scalar components (3 or 4).
    #[inline]
    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.format().component_count()
    }
}

/// Optional attributes that can be attached to a vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexAttributes {
    /// Unit normal vector.
    pub normal: Option<Vector3<f64>>,

    /// Vertex color.
    pub color: Option<VertexColor>,

    /// Texture coordinates (U, V).
    pub texcoord: Option<(f32, f32)>,
}

impl VertexAttributes {
    /// Create empty attributes with no values set.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            normal: None,
            color: None,
            texcoord: None,
        }
    }

    /// Check if any attributes are set.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.normal.is_none() && self.color.is_none() && self.texcoord.is_none()
    }
}

/// A vertex in 3D space with optional attributes.
///
/// The position is stored as a `Point3<f64>` for high precision; format
/// codecs narrow to the precision their format requires.
///
/// # Example
///
/// ```
/// use polyform_types::{Vertex, Point3, Vector3};
///
/// // Position only
/// let v1 = Vertex::from_coords(1.0, 2.0, 3.0);
///
/// // Position plus normal
/// let v2 = Vertex::new(Point3::new(0.0, 0.0, 0.0)).with_normal(Vector3::z());
///
/// assert!(v1.attributes.is_empty());
/// assert!(v2.normal().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,

    /// Optional attributes (normal, color, texcoord).
    pub attributes: VertexAttributes,
}

impl Vertex {
    /// Create a new vertex with only position set.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            attributes: VertexAttributes::empty(),
        }
    }

    /// Create a vertex from raw coordinates.
    ///
    /// # Example
    ///
    /// ```
    /// use polyform_types::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// assert_eq!(v.position.x, 1.0);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Attach a normal to this vertex.
    #[inline]
    #[must_use]
    pub const fn with_normal(mut self, normal: Vector3<f64>) -> Self {
        self.attributes.normal = Some(normal);
        self
    }

    /// Attach a color to this vertex.
    #[inline]
    #[must_use]
    pub const fn with_color(mut self, color: VertexColor) -> Self {
        self.attributes.color = Some(color);
        self
    }

    /// Attach texture coordinates to this vertex.
    #[inline]
    #[must_use]
    pub const fn with_texcoord(mut self, u: f32, v: f32) -> Self {
        self.attributes.texcoord = Some((u, v));
        self
    }

    /// Get the normal if set.
    #[inline]
    #[must_use]
    pub const fn normal(&self) -> Option<Vector3<f64>> {
        self.attributes.normal
    }

    /// Get the color if set.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Option<VertexColor> {
        self.attributes.color
    }

    /// Get the texture coordinates if set.
    #[inline]
    #[must_use]
    pub const fn texcoord(&self) -> Option<(f32, f32)> {
        self.attributes.texcoord
    }

    /// The channel set this vertex carries.
    #[inline]
    #[must_use]
    pub fn schema(&self) -> VertexSchema {
        VertexSchema {
            normal: self.attributes.normal.is_some(),
            color: self.attributes.color.map(|c| c.format()),
            texcoord: self.attributes.texcoord.is_some(),
        }
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vertex {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::from_coords(x, y, z)
    }
}
