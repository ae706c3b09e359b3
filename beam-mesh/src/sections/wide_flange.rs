//! Wide-flange (W-shape) I-beam
//!
//! The outline sits on a grid of four vertical lines (flange tips and web
//! faces) and four horizontal lines (flange faces). The two inner horizontal
//! lines carry 4 vertices each; the top and bottom lines carry the two flange
//! tips plus a centerline point. That gives 14 unique vertices, numbered
//! clockwise from the top-left flange tip:
//!
//! ```text
//!  0 --------- 1 --------- 2
//!  |                       |
//! 13 ------ 12    4 ------ 3
//!           |     |
//! 10 ------ 11    5 ------ 6
//!  |                       |
//!  9 --------- 8 --------- 7
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use super::{place_outline, require_positive, reversed, shell_ring};
use crate::error::{MeshError, MeshResult};
use crate::math::{SectionFrame, Vec3};
use crate::mesh::kernel::{outer_shell_triangles, Triangle};
use crate::mesh::{Mesh, MeshAssembly};

/// Shell ring order over the 14 outline points. Every corner appears twice;
/// the top and bottom flange faces keep their centerline point.
const W_RING: [usize; 26] = [
    0, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 9, 9, 10, 10, 11, 11, 12, 12, 13, 13, 0,
];

/// Ring offsets of the top and bottom flange faces, which span 3 vertices
const W_WIDE_PLANES: [u32; 2] = [0, 13];

/// Plane lengths for [`W_WIDE_PLANES`], then the default length
const W_PLANE_LENGTHS: [u32; 3] = [3, 3, 2];

/// Fan triangulation of the (non-convex) end face, tied to the outline
/// numbering above: top flange, web, bottom flange.
const W_END_FACE: [Triangle; 12] = [
    [0, 12, 13],
    [0, 1, 12],
    [1, 4, 12],
    [1, 2, 4],
    [2, 3, 4],
    [12, 5, 11],
    [12, 4, 5],
    [10, 11, 9],
    [11, 8, 9],
    [11, 5, 8],
    [5, 7, 8],
    [5, 6, 7],
];

/// W-shape dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WideFlangeDims {
    /// Flange width
    pub width: f64,
    /// Overall depth
    pub depth: f64,
    pub flange_thickness: f64,
    pub web_thickness: f64,
}

impl WideFlangeDims {
    pub fn new(width: f64, depth: f64, flange_thickness: f64, web_thickness: f64) -> MeshResult<Self> {
        let dims = Self {
            width,
            depth,
            flange_thickness,
            web_thickness,
        };
        dims.validate()?;
        Ok(dims)
    }

    pub fn validate(&self) -> MeshResult<()> {
        require_positive("W width", self.width)?;
        require_positive("W depth", self.depth)?;
        require_positive("W flange thickness", self.flange_thickness)?;
        require_positive("W web thickness", self.web_thickness)?;

        if 2.0 * self.flange_thickness >= self.depth {
            return Err(MeshError::InvalidGeometry(format!(
                "W flanges ({} thick) leave no web in a {} deep section",
                self.flange_thickness, self.depth
            )));
        }
        if self.web_thickness >= self.width {
            return Err(MeshError::InvalidGeometry(format!(
                "W web thickness {} must be less than the flange width {}",
                self.web_thickness, self.width
            )));
        }
        Ok(())
    }

    /// The 14 unique outline points
    fn outline(&self) -> [(f64, f64); 14] {
        let x = [
            -self.width / 2.0,
            -self.web_thickness / 2.0,
            self.web_thickness / 2.0,
            self.width / 2.0,
        ];
        let y = [
            self.depth / 2.0,
            self.depth / 2.0 - self.flange_thickness,
            -self.depth / 2.0 + self.flange_thickness,
            -self.depth / 2.0,
        ];

        [
            // Top of beam
            (x[0], y[0]),
            (0.0, y[0]),
            (x[3], y[0]),
            // Right side
            (x[3], y[1]),
            (x[2], y[1]),
            (x[2], y[2]),
            (x[3], y[2]),
            // Bottom of beam
            (x[3], y[3]),
            (0.0, y[3]),
            (x[0], y[3]),
            // Left side
            (x[0], y[2]),
            (x[1], y[2]),
            (x[1], y[1]),
            (x[0], y[1]),
        ]
    }
}

/// Mesh builder for a W-shape between two endpoints
#[derive(Debug, Clone)]
pub struct WideFlangeMesh {
    point1: Vec3,
    point2: Vec3,
    dims: WideFlangeDims,
}

impl WideFlangeMesh {
    pub fn new(point1: Vec3, point2: Vec3, dims: WideFlangeDims) -> Self {
        Self {
            point1,
            point2,
            dims,
        }
    }

    /// Vertex layout: shell@p1 (26), shell@p2 (26), cap@p1 (14), cap@p2 (14)
    pub fn build(&self) -> MeshResult<Mesh> {
        self.dims.validate()?;
        let frame = SectionFrame::between(&self.point1, &self.point2)?;

        let outline = self.dims.outline();
        let end1 = place_outline(&frame, &self.point1, &outline);
        let end2 = place_outline(&frame, &self.point2, &outline);

        let mut assembly = MeshAssembly::with_capacity(80, 52);
        assembly.push_vertices(&shell_ring(&end1, &W_RING));
        assembly.push_vertices(&shell_ring(&end2, &W_RING));
        assembly.push_triangles(outer_shell_triangles(
            &W_WIDE_PLANES,
            &W_PLANE_LENGTHS,
            W_RING.len() as u32,
        ));

        let cap1 = assembly.push_vertices(&end1);
        let cap2 = assembly.push_vertices(&end2);
        assembly.push_triangles_at(cap1, &W_END_FACE);
        assembly.push_triangles_at(cap2, &reversed(&W_END_FACE));

        debug!(
            "W {} x {} (tf {}, tw {}) from {:?} to {:?}",
            self.dims.width,
            self.dims.depth,
            self.dims.flange_thickness,
            self.dims.web_thickness,
            self.point1,
            self.point2
        );
        Ok(assembly.finish("W Beam"))
    }
}
