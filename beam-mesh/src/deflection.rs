//! Deflected shape of a beam from analysis end displacements
//!
//! The analysis model reports translations and rotations at joints i and j.
//! The vertical deflection between them is a cubic matching both end
//! translations and both end slopes. Because of the axis remap
//! (see [`crate::math::axes`]), analysis joint j sits at scene `point1` and
//! joint i at scene `point2`.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};
use crate::math::{analysis_to_scene, CubicFit, Vec3};
use crate::mesh::kernel::open_loop_faces;
use crate::mesh::{Mesh, MeshAssembly};

/// End displacements and rotations in analysis axes, ordered
/// `[iu1, iu2, iu3, ir1, ir2, ir3, ju1, ju2, ju3, jr1, jr2, jr3]`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DeflectionInput {
    pub values: [f64; 12],
}

impl DeflectionInput {
    pub fn new(values: [f64; 12]) -> Self {
        Self { values }
    }

    /// Read the first 12 values of a property row
    pub fn from_slice(values: &[f64]) -> MeshResult<Self> {
        let values: [f64; 12] = values
            .get(..12)
            .and_then(|head| head.try_into().ok())
            .ok_or_else(|| {
                MeshError::InvalidInput(format!(
                    "deflection input needs 12 values, got {}",
                    values.len()
                ))
            })?;
        Ok(Self { values })
    }

    pub fn i_translation(&self) -> Vec3 {
        Vec3::new(self.values[0], self.values[1], self.values[2])
    }

    pub fn i_rotation(&self) -> Vec3 {
        Vec3::new(self.values[3], self.values[4], self.values[5])
    }

    pub fn j_translation(&self) -> Vec3 {
        Vec3::new(self.values[6], self.values[7], self.values[8])
    }

    pub fn j_rotation(&self) -> Vec3 {
        Vec3::new(self.values[9], self.values[10], self.values[11])
    }
}

/// Deflected shape ready for rendering
#[derive(Debug, Clone, Serialize)]
pub struct DeflectionShape {
    /// Deflected points, from `point2` to `point1`
    pub points: Vec<Vec3>,
    /// Undeflected points at the same positions along the span
    pub baseline: Vec<Vec3>,
    /// Ribbon between the deflected and baseline lines
    pub fill: Mesh,
    /// Largest absolute vertical deflection, in analysis units
    pub max_deflection: f64,
}

/// Fits and places the deflected shape of one beam
#[derive(Debug, Clone)]
pub struct DeflectionSolver {
    point1: Vec3,
    point2: Vec3,
    joint_i: Vec3,
    joint_j: Vec3,
    input: DeflectionInput,
    vertical_scale: f64,
    num_points: usize,
    unit_scale: f64,
}

impl DeflectionSolver {
    /// # Arguments
    /// * `point1`, `point2` - Beam endpoints in scene axes
    /// * `joint_i`, `joint_j` - Undeformed joint positions in analysis axes
    /// * `input` - End translations and rotations in analysis axes
    /// * `vertical_scale` - Visual exaggeration of vertical deflection
    /// * `num_points` - Points along the curve (at least 2)
    /// * `unit_scale` - Analysis length units to scene units
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        point1: Vec3,
        point2: Vec3,
        joint_i: Vec3,
        joint_j: Vec3,
        input: DeflectionInput,
        vertical_scale: f64,
        num_points: usize,
        unit_scale: f64,
    ) -> Self {
        Self {
            point1,
            point2,
            joint_i,
            joint_j,
            input,
            vertical_scale,
            num_points,
            unit_scale,
        }
    }

    fn validate(&self) -> MeshResult<()> {
        if self.num_points < 2 {
            return Err(MeshError::InvalidInput(format!(
                "deflection curve needs at least 2 points, got {}",
                self.num_points
            )));
        }
        if !self.unit_scale.is_finite() || self.unit_scale <= 0.0 {
            return Err(MeshError::InvalidInput(format!(
                "unit scale must be positive, got {}",
                self.unit_scale
            )));
        }
        if !self.vertical_scale.is_finite() {
            return Err(MeshError::InvalidInput(format!(
                "vertical deflection scale must be finite, got {}",
                self.vertical_scale
            )));
        }
        if self.input.values.iter().any(|v| !v.is_finite()) {
            return Err(MeshError::InvalidInput(
                "deflection input contains non-finite values".to_string(),
            ));
        }
        if (self.point2 - self.point1).norm() < f64::EPSILON {
            return Err(MeshError::DegenerateBeam(
                "deflection endpoints coincide".to_string(),
            ));
        }
        Ok(())
    }

    /// Vertical deflection at each sample, from joint i to joint j, in
    /// analysis units.
    ///
    /// The span coordinate is the deflected analysis y of each joint; the
    /// slope comes from rotation about the analysis x axis.
    pub fn fit(&self) -> MeshResult<Vec<f64>> {
        let i_defl = self.joint_i + self.input.i_translation();
        let j_defl = self.joint_j + self.input.j_translation();

        let fit = CubicFit::through_rotations(
            i_defl.y,
            j_defl.y,
            self.input.i_translation().z,
            self.input.j_translation().z,
            self.input.i_rotation().x,
            self.input.j_rotation().x,
        )?;
        debug!(
            "deflection fit a={:.6e} b={:.6e} c={:.6e} d={:.6e}",
            fit.a, fit.b, fit.c, fit.d
        );

        Ok(fit.sample(i_defl.y, j_defl.y, self.num_points))
    }

    /// Compute the deflected line, baseline, fill mesh and maximum deflection
    pub fn solve(&self) -> MeshResult<DeflectionShape> {
        self.validate()?;
        let offsets = self.fit()?;

        // Joint j is at point1, joint i at point2
        let end1 = self.point1 + analysis_to_scene(&self.input.j_translation()) * self.unit_scale;
        let end2 = self.point2 + analysis_to_scene(&self.input.i_translation()) * self.unit_scale;

        let n = self.num_points;
        let step = (end2.z - end1.z) / (n - 1) as f64;
        let datum = self.point1.y;

        let mut points = Vec::with_capacity(n);
        let mut baseline = Vec::with_capacity(n);
        for (k, offset) in offsets.iter().enumerate() {
            // Endpoints share x once the beam lies along the scene z axis
            let x = end1.x;
            let z = end2.z - step * k as f64;
            let y = datum + offset * self.unit_scale * self.vertical_scale;

            points.push(Vec3::new(x, y, z));
            baseline.push(Vec3::new(x, datum, z));
        }

        let max_deflection = offsets.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        let fill = fill_mesh(&points, &baseline);

        debug!(
            "deflection over {} points, max {:.4} (analysis units)",
            n, max_deflection
        );
        Ok(DeflectionShape {
            points,
            baseline,
            fill,
            max_deflection,
        })
    }
}

/// Ribbon between two equal-length polylines, both walked from `point1` to
/// `point2`
fn fill_mesh(points: &[Vec3], baseline: &[Vec3]) -> Mesh {
    let n = points.len();
    assert_eq!(n, baseline.len(), "deflected and baseline lines differ in length");

    let deflected: Vec<Vec3> = points.iter().rev().copied().collect();
    let straight: Vec<Vec3> = baseline.iter().rev().copied().collect();

    let mut assembly = MeshAssembly::with_capacity(2 * n, 2 * n);
    let top = assembly.push_vertices(&deflected);
    let bottom = assembly.push_vertices(&straight);
    assembly.push_triangles(open_loop_faces(top, bottom, n as u32));
    assembly.finish("Deflection Fill")
}
