//! Built-up W: a W-shape with a full-width cover plate on each flange

use log::debug;
use serde::{Deserialize, Serialize};

use super::{require_positive, PlateDims, PlateMesh, WideFlangeDims, WideFlangeMesh};
use crate::error::MeshResult;
use crate::math::{SectionFrame, Vec3};
use crate::mesh::assembly::concat;
use crate::mesh::Mesh;

/// Built-up W dimensions. Plates match the W flange width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuiltUpDims {
    pub beam: WideFlangeDims,
    pub plate_height: f64,
}

impl BuiltUpDims {
    pub fn new(beam: WideFlangeDims, plate_height: f64) -> MeshResult<Self> {
        let dims = Self { beam, plate_height };
        dims.validate()?;
        Ok(dims)
    }

    pub fn validate(&self) -> MeshResult<()> {
        self.beam.validate()?;
        require_positive("cover plate height", self.plate_height)
    }

    fn plate(&self) -> PlateDims {
        PlateDims {
            width: self.beam.width,
            height: self.plate_height,
        }
    }

    /// Distance from the beam centerline to each plate's centerline
    pub fn plate_offset(&self) -> f64 {
        self.beam.depth / 2.0 + self.plate_height / 2.0
    }
}

/// Mesh builder for a built-up W between two endpoints
#[derive(Debug, Clone)]
pub struct BuiltUpWMesh {
    point1: Vec3,
    point2: Vec3,
    dims: BuiltUpDims,
}

impl BuiltUpWMesh {
    pub fn new(point1: Vec3, point2: Vec3, dims: BuiltUpDims) -> Self {
        Self {
            point1,
            point2,
            dims,
        }
    }

    /// Vertex layout: W mesh, top plate mesh, bottom plate mesh
    pub fn build(&self) -> MeshResult<Mesh> {
        self.dims.validate()?;
        let frame = SectionFrame::between(&self.point1, &self.point2)?;

        let beam = WideFlangeMesh::new(self.point1, self.point2, self.dims.beam).build()?;

        let up = frame.vertical * self.dims.plate_offset();
        let top = PlateMesh::new(self.point1 + up, self.point2 + up, self.dims.plate()).build()?;
        let bottom = PlateMesh::new(self.point1 - up, self.point2 - up, self.dims.plate()).build()?;

        debug!(
            "built-up W with {} cover plates at +/-{}",
            self.dims.plate_height,
            self.dims.plate_offset()
        );
        Ok(concat("Built up W Mesh", [&beam, &top, &bottom]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn mesh() -> Mesh {
        let beam = WideFlangeDims::new(10.0, 20.0, 1.0, 0.5).unwrap();
        let dims = BuiltUpDims::new(beam, 2.0).unwrap();
        BuiltUpWMesh::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 100.0), dims)
            .build()
            .unwrap()
    }

    #[test]
    fn test_counts() {
        let mesh = mesh();
        assert_eq!(mesh.vertex_count(), 80 + 2 * 24);
        assert_eq!(mesh.triangle_count(), 52 + 2 * 12);
        assert_eq!(mesh.name(), "Built up W Mesh");
    }

    #[test]
    fn test_plates_sit_on_flanges() {
        let mesh = mesh();
        // First vertex of the top plate is its top-left corner at point1
        assert_relative_eq!(mesh.vertices()[80], Vec3::new(-5.0, 12.0, 0.0), epsilon = 1e-12);
        // Bottom plate's top face touches the bottom flange
        assert_relative_eq!(mesh.vertices()[104], Vec3::new(-5.0, -10.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_plate_triangles_offset() {
        let mesh = mesh();
        let tris = mesh.triangles();
        assert_eq!(tris[52], [80, 88, 89]);
        assert_eq!(tris[64], [104, 112, 113]);
        assert!(tris.iter().flatten().all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn test_invalid_plate() {
        let beam = WideFlangeDims::new(10.0, 20.0, 1.0, 0.5).unwrap();
        assert!(BuiltUpDims::new(beam, 0.0).is_err());
    }
}
