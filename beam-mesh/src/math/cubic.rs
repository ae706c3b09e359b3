//! Cubic interpolation through two points with prescribed end slopes

use serde::{Deserialize, Serialize};

use crate::error::{MeshError, MeshResult};

/// Cubic polynomial `y(x) = a x³ + b x² + c x + d`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicFit {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl CubicFit {
    /// Solve the unique cubic through `(x1, y1)` and `(x2, y2)` with slope
    /// `m1` at `x1` and `m2` at `x2`.
    ///
    /// Fails with [`MeshError::DegenerateBeam`] when `x1 == x2`, where the
    /// system has no solution.
    pub fn through(x1: f64, x2: f64, y1: f64, y2: f64, m1: f64, m2: f64) -> MeshResult<Self> {
        let span = x1 - x2;
        if !span.is_finite() || span.abs() < f64::EPSILON * (x1.abs() + x2.abs()).max(1.0) {
            return Err(MeshError::DegenerateBeam(format!(
                "cubic fit needs distinct end positions, got x1 = {x1}, x2 = {x2}"
            )));
        }

        let x1_2 = x1 * x1;
        let x1_3 = x1_2 * x1;
        let x2_2 = x2 * x2;
        let x2_3 = x2_2 * x2;
        let denom = span.powi(3);

        let a = (m1 * x1 - m1 * x2 + m2 * x1 - m2 * x2 - 2.0 * y1 + 2.0 * y2) / denom;

        let b = (-m1 * x1_2 - m1 * x1 * x2 + 2.0 * m1 * x2_2 - 2.0 * m2 * x1_2
            + m2 * x1 * x2
            + m2 * x2_2
            + 3.0 * x1 * y1
            - 3.0 * x1 * y2
            + 3.0 * x2 * y1
            - 3.0 * x2 * y2)
            / denom;

        let c = (2.0 * m1 * x1_2 * x2 - m1 * x1 * x2_2 - m1 * x2_3 + m2 * x1_3 + m2 * x1_2 * x2
            - 2.0 * m2 * x1 * x2_2
            - 6.0 * x1 * x2 * y1
            + 6.0 * x1 * x2 * y2)
            / denom;

        let d = (-m1 * x1_2 * x2_2 + m1 * x1 * x2_3 - m2 * x1_3 * x2 + m2 * x1_2 * x2_2
            + x1_3 * y2
            - 3.0 * x1_2 * x2 * y2
            + 3.0 * x1 * x2_2 * y1
            - x2_3 * y1)
            / denom;

        Ok(Self { a, b, c, d })
    }

    /// Same as [`CubicFit::through`] with end rotations (radians) in place of
    /// slopes
    pub fn through_rotations(
        x1: f64,
        x2: f64,
        y1: f64,
        y2: f64,
        rot1: f64,
        rot2: f64,
    ) -> MeshResult<Self> {
        Self::through(x1, x2, y1, y2, rot1.tan(), rot2.tan())
    }

    /// Evaluate the polynomial at `x`
    pub fn eval(&self, x: f64) -> f64 {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    /// Evaluate the first derivative at `x`
    pub fn slope(&self, x: f64) -> f64 {
        (3.0 * self.a * x + 2.0 * self.b) * x + self.c
    }

    /// Sample `num_points` values at evenly spaced x from `x1` to `x2`
    /// inclusive
    pub fn sample(&self, x1: f64, x2: f64, num_points: usize) -> Vec<f64> {
        match num_points {
            0 => Vec::new(),
            1 => vec![self.eval(x1)],
            n => {
                let step = (x2 - x1) / (n - 1) as f64;
                (0..n).map(|i| self.eval(x1 + step * i as f64)).collect()
            }
        }
    }
}
