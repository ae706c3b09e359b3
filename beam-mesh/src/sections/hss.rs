//! Rectangular hollow structural section (HSS)
//!
//! Each end of the tube has an outer and an inner edge. Corners are rounded
//! with a radius of twice the wall thickness on both edges.

use log::debug;
use serde::{Deserialize, Serialize};

use super::{place_outline, require_positive};
use crate::error::{MeshError, MeshResult};
use crate::math::{SectionFrame, Vec3};
use crate::mesh::kernel::closed_loop_faces;
use crate::mesh::{Mesh, MeshAssembly};

/// HSS dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HssDims {
    pub width: f64,
    pub height: f64,
    pub wall_thickness: f64,
    /// Points between the two ends of each rounded corner
    pub curve_points: u32,
}

impl HssDims {
    pub fn new(width: f64, height: f64, wall_thickness: f64, curve_points: u32) -> MeshResult<Self> {
        let dims = Self {
            width,
            height,
            wall_thickness,
            curve_points,
        };
        dims.validate()?;
        Ok(dims)
    }

    pub fn validate(&self) -> MeshResult<()> {
        require_positive("HSS width", self.width)?;
        require_positive("HSS height", self.height)?;
        require_positive("HSS wall thickness", self.wall_thickness)?;

        // The inner edge is inset by t and still carries corners of radius 2t
        let min_side = 6.0 * self.wall_thickness;
        if self.width < min_side || self.height < min_side {
            return Err(MeshError::InvalidGeometry(format!(
                "HSS wall thickness {} is too large for a {} x {} section (sides must be at least {})",
                self.wall_thickness, self.width, self.height, min_side
            )));
        }
        Ok(())
    }

    /// Vertices in one edge outline: `c + 2` per corner
    pub fn edge_vertex_count(&self) -> u32 {
        8 + 4 * self.curve_points
    }

    /// Outline of one edge with rounded corners, clockwise from the top of
    /// the left side: top-left, top-right, bottom-right, bottom-left.
    ///
    /// Each corner follows `y = y0 ± sqrt((2t)² - dx²)` with `dx` stepping
    /// evenly across the corner radius.
    fn edge(&self, width: f64, height: f64) -> Vec<(f64, f64)> {
        let r = 2.0 * self.wall_thickness;
        let per_corner = self.curve_points as usize + 2;
        let step = r / (self.curve_points + 1) as f64;
        let (hw, hh) = (width / 2.0, height / 2.0);

        // Rounding can push the last step a hair past the radius
        let rise = |dx: f64| (r * r - dx * dx).max(0.0).sqrt();

        let mut edge = vec![(0.0, 0.0); 4 * per_corner];
        for j in 0..per_corner {
            let s = step * j as f64;

            edge[j] = (-hw + s, hh - r + rise(r - s));
            edge[per_corner + j] = (hw - r + s, hh - r + rise(s));
            edge[2 * per_corner + j] = (hw - s, -hh + r - rise(r - s));
            edge[3 * per_corner + j] = (-hw + r - s, -hh + r - rise(s));
        }
        edge
    }

    fn outer_edge(&self) -> Vec<(f64, f64)> {
        self.edge(self.width, self.height)
    }

    fn inner_edge(&self) -> Vec<(f64, f64)> {
        let t = self.wall_thickness;
        self.edge(self.width - 2.0 * t, self.height - 2.0 * t)
    }
}

/// Mesh builder for an HSS between two endpoints
#[derive(Debug, Clone)]
pub struct HssMesh {
    point1: Vec3,
    point2: Vec3,
    dims: HssDims,
}

impl HssMesh {
    pub fn new(point1: Vec3, point2: Vec3, dims: HssDims) -> Self {
        Self {
            point1,
            point2,
            dims,
        }
    }

    /// Vertex layout: outer@p1, outer@p2, inner@p1, inner@p2, each
    /// `8 + 4c` long
    pub fn build(&self) -> MeshResult<Mesh> {
        self.dims.validate()?;
        let frame = SectionFrame::between(&self.point1, &self.point2)?;

        let n = self.dims.edge_vertex_count();
        let outer = self.dims.outer_edge();
        let inner = self.dims.inner_edge();

        let mut assembly = MeshAssembly::with_capacity(4 * n as usize, 8 * n as usize);
        let outer1 = assembly.push_vertices(&place_outline(&frame, &self.point1, &outer));
        let outer2 = assembly.push_vertices(&place_outline(&frame, &self.point2, &outer));
        let inner1 = assembly.push_vertices(&place_outline(&frame, &self.point1, &inner));
        let inner2 = assembly.push_vertices(&place_outline(&frame, &self.point2, &inner));

        // Ring order in each call decides which way the surface faces
        assembly.push_triangles(closed_loop_faces(outer1, outer2, n));
        assembly.push_triangles(closed_loop_faces(inner2, inner1, n));
        assembly.push_triangles(closed_loop_faces(inner1, outer1, n));
        assembly.push_triangles(closed_loop_faces(outer2, inner2, n));

        debug!(
            "HSS {} x {} x {} ({} curve points) from {:?} to {:?}",
            self.dims.width,
            self.dims.height,
            self.dims.wall_thickness,
            self.dims.curve_points,
            self.point1,
            self.point2
        );
        Ok(assembly.finish("HSS Beam"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dims() -> HssDims {
        HssDims::new(6.0, 6.0, 0.25, 3).unwrap()
    }

    #[test]
    fn test_edge_length() {
        let d = dims();
        assert_eq!(d.edge_vertex_count(), 20);
        assert_eq!(d.outer_edge().len(), 20);
        assert_eq!(d.inner_edge().len(), 20);
    }

    #[test]
    fn test_corners_lie_on_radius() {
        let d = dims();
        let r = 2.0 * d.wall_thickness;
        let edge = d.outer_edge();

        // Top-left corner arc is centered at (-w/2 + r, h/2 - r)
        let (cx, cy) = (-3.0 + r, 3.0 - r);
        for &(x, y) in &edge[0..5] {
            assert_relative_eq!(((x - cx).powi(2) + (y - cy).powi(2)).sqrt(), r, epsilon = 1e-12);
        }

        // Bottom-right corner arc is centered at (w/2 - r, -h/2 + r)
        let (cx, cy) = (3.0 - r, -3.0 + r);
        for &(x, y) in &edge[10..15] {
            assert_relative_eq!(((x - cx).powi(2) + (y - cy).powi(2)).sqrt(), r, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_corner_end_points() {
        let edge = dims().outer_edge();
        assert_relative_eq!(edge[0].0, -3.0, epsilon = 1e-12);
        assert_relative_eq!(edge[0].1, 2.5, epsilon = 1e-12);
        assert_relative_eq!(edge[4].0, -2.5, epsilon = 1e-12);
        assert_relative_eq!(edge[4].1, 3.0, epsilon = 1e-12);
        assert_relative_eq!(edge[5].0, 2.5, epsilon = 1e-12);
        assert_relative_eq!(edge[5].1, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_inner_edge_inset() {
        let edge = dims().inner_edge();
        // Left side of the inner edge sits one wall thickness in
        assert_relative_eq!(edge[0].0, -2.75, epsilon = 1e-12);
        assert!(edge.iter().all(|&(x, y)| x.is_finite() && y.is_finite()));
    }

    #[test]
    fn test_zero_curve_points() {
        let d = HssDims::new(4.0, 8.0, 0.5, 0).unwrap();
        let mesh = HssMesh::new(Vec3::zeros(), Vec3::new(0.0, 0.0, 10.0), d)
            .build()
            .unwrap();
        assert_eq!(mesh.vertex_count(), 32);
        assert_eq!(mesh.triangle_count(), 64);
    }

    #[test]
    fn test_wall_too_thick() {
        assert!(matches!(
            HssDims::new(6.0, 6.0, 1.5, 3),
            Err(MeshError::InvalidGeometry(_))
        ));
        assert!(matches!(
            HssDims::new(6.0, 6.0, 3.0, 3),
            Err(MeshError::InvalidGeometry(_))
        ));
    }
}
