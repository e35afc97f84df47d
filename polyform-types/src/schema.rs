//! Mesh-wide channel schema.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Component depth of a color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorDepth {
    /// 8-bit unsigned integer components (0-255).
    U8,
    /// 32-bit float components (0.0-1.0).
    Float,
}

/// Layout of a mesh's color channel: component depth plus whether an
/// alpha component is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ColorFormat {
    /// Component depth.
    pub depth: ColorDepth,
    /// Whether the color carries an alpha component.
    pub alpha: bool,
}

impl ColorFormat {
    /// Number of scalar components (3 for RGB, 4 for RGBA).
    #[inline]
    #[must_use]
    pub const fn component_count(&self) -> usize {
        if self.alpha { 4 } else { 3 }
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.depth, self.alpha) {
            (ColorDepth::U8, false) => write!(f, "rgb8"),
            (ColorDepth::U8, true) => write!(f, "rgba8"),
            (ColorDepth::Float, false) => write!(f, "rgb_float"),
            (ColorDepth::Float, true) => write!(f, "rgba_float"),
        }
    }
}

/// The channel set every vertex of a mesh carries.
///
/// Position is implicit and always present; the optional channels are
/// either present for all vertices or absent for all vertices. The schema
/// is fixed by the first vertex added to a [`Mesh`](crate::Mesh).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexSchema {
    /// Whether vertices carry a normal.
    pub normal: bool,
    /// Color channel layout, if vertices carry color.
    pub color: Option<ColorFormat>,
    /// Whether vertices carry texture coordinates.
    pub texcoord: bool,
}

impl VertexSchema {
    /// Schema of a bare position-only vertex.
    pub const POSITION_ONLY: Self = Self {
        normal: false,
        color: None,
        texcoord: false,
    };
}

impl Default for VertexSchema {
    fn default() -> Self {
        Self::POSITION_ONLY
    }
}

impl fmt::Display for VertexSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position")?;
        if self.normal {
            write!(f, "+normal")?;
        }
        if let Some(color) = self.color {
            write!(f, "+{color}")?;
        }
        if self.texcoord {
            write!(f, "+texcoord")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn color_format_component_count() {
        let rgb = ColorFormat {
            depth: ColorDepth::U8,
            alpha: false,
        };
        let rgba = ColorFormat {
            depth: ColorDepth::Float,
            alpha: true,
        };
        assert_eq!(rgb.component_count(), 3);
        assert_eq!(rgba.component_count(), 4);
    }

    #[test]
    fn schema_display() {
        assert_eq!(VertexSchema::POSITION_ONLY.to_string(), "position");

        let full = VertexSchema {
            normal: true,
            color: Some(ColorFormat {
                depth: ColorDepth::U8,
                alpha: true,
            }),
            texcoord: true,
        };
        assert_eq!(full.to_string(), "position+normal+rgba8+texcoord");
    }

    #[test]
    fn default_is_position_only() {
        assert_eq!(VertexSchema::default(), VertexSchema::POSITION_ONLY);
    }
}
