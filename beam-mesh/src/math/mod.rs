//! Mathematical utilities for section layout and deflection curves

pub mod axes;
pub mod cubic;
pub mod frame;

use nalgebra::Vector3;

pub type Vec3 = Vector3<f64>;

pub use axes::{analysis_to_scene, scene_to_analysis};
pub use cubic::CubicFit;
pub use frame::SectionFrame;

/// Tolerance used when comparing coordinates for coincidence
pub const GEOMETRY_TOLERANCE: f64 = 1e-10;
