//! Local axes for laying out a cross-section along a beam

use serde::{Deserialize, Serialize};

use super::{Vec3, GEOMETRY_TOLERANCE};
use crate::error::{MeshError, MeshResult};

/// Right-handed frame of a beam cross-section.
///
/// `axis` runs from `point1` to `point2`. `horizontal` and `vertical` span the
/// section plane. For a beam along scene +z the section axes are exactly scene
/// +x and +y, so a local offset `(x, y)` lands at `point + (x, y, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionFrame {
    pub horizontal: Vec3,
    pub vertical: Vec3,
    pub axis: Vec3,
}

impl SectionFrame {
    /// Build the frame for a beam running from `point1` to `point2`.
    ///
    /// Scene +y is the up reference. Vertical members have no horizontal
    /// projection, so they fall back to scene -z as the reference.
    pub fn between(point1: &Vec3, point2: &Vec3) -> MeshResult<Self> {
        let span = point2 - point1;
        let length = span.norm();
        if !length.is_finite() || length < GEOMETRY_TOLERANCE {
            return Err(MeshError::DegenerateBeam(format!(
                "beam endpoints coincide at ({}, {}, {})",
                point1.x, point1.y, point1.z
            )));
        }
        let axis = span / length;

        let up = if axis.x.abs() < GEOMETRY_TOLERANCE && axis.z.abs() < GEOMETRY_TOLERANCE {
            -Vec3::z()
        } else {
            Vec3::y()
        };

        let horizontal = up.cross(&axis).normalize();
        let vertical = axis.cross(&horizontal);

        Ok(Self {
            horizontal,
            vertical,
            axis,
        })
    }

    /// Place a section-local offset relative to `origin`
    pub fn place(&self, origin: &Vec3, x: f64, y: f64) -> Vec3 {
        origin + self.horizontal * x + self.vertical * y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_beam_along_z_uses_scene_axes() {
        let frame = SectionFrame::between(&Vec3::zeros(), &Vec3::new(0.0, 0.0, 100.0)).unwrap();
        assert_relative_eq!(frame.horizontal, Vec3::x(), epsilon = 1e-12);
        assert_relative_eq!(frame.vertical, Vec3::y(), epsilon = 1e-12);

        let p = frame.place(&Vec3::new(1.0, 2.0, 3.0), 0.5, -0.25);
        assert_relative_eq!(p, Vec3::new(1.5, 1.75, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn test_frame_is_right_handed() {
        let ends = [
            Vec3::new(10.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::new(3.0, 4.0, 12.0),
            Vec3::new(0.0, 6.0, 0.0),
            Vec3::new(0.0, -6.0, 0.0),
        ];
        for end in ends {
            let f = SectionFrame::between(&Vec3::zeros(), &end).unwrap();
            assert_relative_eq!(f.horizontal.cross(&f.vertical), f.axis, epsilon = 1e-12);
            assert_relative_eq!(f.horizontal.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(f.vertical.dot(&f.axis), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_coincident_points() {
        let p = Vec3::new(1.0, 1.0, 1.0);
        assert!(matches!(
            SectionFrame::between(&p, &p),
            Err(MeshError::DegenerateBeam(_))
        ));
    }
}
