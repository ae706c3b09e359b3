//! Cross-section mesh builders
//!
//! Each builder extrudes one section family between two beam endpoints:
//!
//! - [`PlateMesh`] - flat rectangular plate
//! - [`WideFlangeMesh`] - W-shape (I-beam)
//! - [`HssMesh`] - rectangular hollow section with rounded corners
//! - [`BuiltUpWMesh`] - W-shape with a cover plate above and below
//!
//! Outer shells duplicate the vertices on sharp corners so that each face
//! gets its own normal. End caps use the unique outline points only.
//! All triangles wind outward from the solid.

mod built_up;
mod hss;
mod plate;
mod wide_flange;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::math::{SectionFrame, Vec3};
use crate::mesh::{Mesh, Triangle};

pub use built_up::{BuiltUpDims, BuiltUpWMesh};
pub use hss::{HssDims, HssMesh};
pub use plate::{PlateDims, PlateMesh};
pub use wide_flange::{WideFlangeDims, WideFlangeMesh};

/// Section family, as named in property tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeFamily {
    WideFlange,
    Hss,
    Plate,
    BuiltUpW,
}

impl ShapeFamily {
    /// Parse a property-table shape label
    pub fn from_label(label: &str) -> MeshResult<Self> {
        match label.trim() {
            "W" => Ok(Self::WideFlange),
            "HSS" => Ok(Self::Hss),
            "PL" | "Plate" => Ok(Self::Plate),
            "Built up I Beam" | "Built up W" => Ok(Self::BuiltUpW),
            other => Err(MeshError::UnknownShape(other.to_string())),
        }
    }

    /// Canonical property-table label
    pub fn label(&self) -> &'static str {
        match self {
            Self::WideFlange => "W",
            Self::Hss => "HSS",
            Self::Plate => "PL",
            Self::BuiltUpW => "Built up I Beam",
        }
    }
}

impl fmt::Display for ShapeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Dimensions of any supported section family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum SectionSpec {
    WideFlange(WideFlangeDims),
    Hss(HssDims),
    Plate(PlateDims),
    BuiltUpW(BuiltUpDims),
}

impl SectionSpec {
    /// Build a section from a flat dimension list.
    ///
    /// Field order per family:
    /// * W: `[width, depth, flange_thickness, web_thickness]`
    /// * HSS: `[width, height, wall_thickness]` (curve points passed separately)
    /// * Plate: `[width, height]`
    /// * Built-up W: `[width, depth, flange_thickness, web_thickness, plate_height]`
    pub fn from_dims(family: ShapeFamily, dims: &[f64], hss_curve_points: u32) -> MeshResult<Self> {
        let needed = match family {
            ShapeFamily::WideFlange => 4,
            ShapeFamily::Hss => 3,
            ShapeFamily::Plate => 2,
            ShapeFamily::BuiltUpW => 5,
        };
        if dims.len() < needed {
            return Err(MeshError::InvalidInput(format!(
                "{family} section needs {needed} dimensions, got {}",
                dims.len()
            )));
        }

        let spec = match family {
            ShapeFamily::WideFlange => {
                Self::WideFlange(WideFlangeDims::new(dims[0], dims[1], dims[2], dims[3])?)
            }
            ShapeFamily::Hss => Self::Hss(HssDims::new(dims[0], dims[1], dims[2], hss_curve_points)?),
            ShapeFamily::Plate => Self::Plate(PlateDims::new(dims[0], dims[1])?),
            ShapeFamily::BuiltUpW => Self::BuiltUpW(BuiltUpDims::new(
                WideFlangeDims::new(dims[0], dims[1], dims[2], dims[3])?,
                dims[4],
            )?),
        };
        Ok(spec)
    }

    pub fn family(&self) -> ShapeFamily {
        match self {
            Self::WideFlange(_) => ShapeFamily::WideFlange,
            Self::Hss(_) => ShapeFamily::Hss,
            Self::Plate(_) => ShapeFamily::Plate,
            Self::BuiltUpW(_) => ShapeFamily::BuiltUpW,
        }
    }

    /// Check the dimensions without building anything
    pub fn validate(&self) -> MeshResult<()> {
        match self {
            Self::WideFlange(d) => d.validate(),
            Self::Hss(d) => d.validate(),
            Self::Plate(d) => d.validate(),
            Self::BuiltUpW(d) => d.validate(),
        }
    }

    /// Generate the mesh for a beam from `point1` to `point2`
    pub fn build(&self, point1: Vec3, point2: Vec3) -> MeshResult<Mesh> {
        match *self {
            Self::WideFlange(d) => WideFlangeMesh::new(point1, point2, d).build(),
            Self::Hss(d) => HssMesh::new(point1, point2, d).build(),
            Self::Plate(d) => PlateMesh::new(point1, point2, d).build(),
            Self::BuiltUpW(d) => BuiltUpWMesh::new(point1, point2, d).build(),
        }
    }
}

/// Reject zero, negative and non-finite dimensions
pub(crate) fn require_positive(what: &str, value: f64) -> MeshResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::InvalidGeometry(format!(
            "{what} must be positive, got {value}"
        )))
    }
}

/// Place a 2D outline at `origin` in the section plane
pub(crate) fn place_outline(frame: &SectionFrame, origin: &Vec3, outline: &[(f64, f64)]) -> Vec<Vec3> {
    outline
        .iter()
        .map(|&(x, y)| frame.place(origin, x, y))
        .collect()
}

/// Expand unique outline points into a shell ring using an index order with
/// repeated entries at sharp corners
pub(crate) fn shell_ring(outline: &[Vec3], order: &[usize]) -> Vec<Vec3> {
    order.iter().map(|&i| outline[i]).collect()
}

/// Same triangles with opposite winding
pub(crate) fn reversed(triangles: &[Triangle]) -> Vec<Triangle> {
    triangles.iter().map(|&[a, b, c]| [a, c, b]).collect()
}
