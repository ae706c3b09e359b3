//! Flat rectangular plate

use log::debug;
use serde::{Deserialize, Serialize};

use super::{place_outline, require_positive, reversed, shell_ring};
use crate::error::MeshResult;
use crate::math::{SectionFrame, Vec3};
use crate::mesh::kernel::{outer_shell_triangles, Triangle};
use crate::mesh::{Mesh, MeshAssembly};

/// Shell ring order over the 4 corners, each corner doubled for sharp edges
const PLATE_RING: [usize; 8] = [0, 1, 1, 2, 2, 3, 3, 0];

/// End cap over corners (top-left, top-right, bottom-right, bottom-left)
const PLATE_END_FACE: [Triangle; 2] = [[0, 2, 3], [0, 1, 2]];

/// Plate dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateDims {
    pub width: f64,
    pub height: f64,
}

impl PlateDims {
    pub fn new(width: f64, height: f64) -> MeshResult<Self> {
        let dims = Self { width, height };
        dims.validate()?;
        Ok(dims)
    }

    pub fn validate(&self) -> MeshResult<()> {
        require_positive("plate width", self.width)?;
        require_positive("plate height", self.height)
    }

    /// Corner outline, clockwise from top-left when viewed down the beam axis
    fn outline(&self) -> [(f64, f64); 4] {
        let (hw, hh) = (self.width / 2.0, self.height / 2.0);
        [(-hw, hh), (hw, hh), (hw, -hh), (-hw, -hh)]
    }
}

/// Mesh builder for a plate between two endpoints
#[derive(Debug, Clone)]
pub struct PlateMesh {
    point1: Vec3,
    point2: Vec3,
    dims: PlateDims,
}

impl PlateMesh {
    pub fn new(point1: Vec3, point2: Vec3, dims: PlateDims) -> Self {
        Self {
            point1,
            point2,
            dims,
        }
    }

    /// Vertex layout: shell@p1 (8), shell@p2 (8), cap@p1 (4), cap@p2 (4)
    pub fn build(&self) -> MeshResult<Mesh> {
        self.dims.validate()?;
        let frame = SectionFrame::between(&self.point1, &self.point2)?;

        let outline = self.dims.outline();
        let end1 = place_outline(&frame, &self.point1, &outline);
        let end2 = place_outline(&frame, &self.point2, &outline);

        let mut assembly = MeshAssembly::with_capacity(24, 12);
        assembly.push_vertices(&shell_ring(&end1, &PLATE_RING));
        assembly.push_vertices(&shell_ring(&end2, &PLATE_RING));
        assembly.push_triangles(outer_shell_triangles(&[], &[2], PLATE_RING.len() as u32));

        let cap1 = assembly.push_vertices(&end1);
        let cap2 = assembly.push_vertices(&end2);
        assembly.push_triangles_at(cap1, &PLATE_END_FACE);
        assembly.push_triangles_at(cap2, &reversed(&PLATE_END_FACE));

        debug!(
            "plate {} x {} from {:?} to {:?}",
            self.dims.width, self.dims.height, self.point1, self.point2
        );
        Ok(assembly.finish("Plate Mesh"))
    }
}
