//! Conversion between the analysis coordinate system and the scene's.
//!
//! The analysis model has gravity along its third axis, the scene along its
//! second:
//!
//! ```text
//! scene +x = analysis -x
//! scene +y = analysis +z
//! scene +z = analysis -y
//! ```
//!
//! The map has determinant -1, so the two systems have opposite handedness.

use super::Vec3;

/// Map a position or translation from analysis axes to scene axes
pub fn analysis_to_scene(v: &Vec3) -> Vec3 {
    Vec3::new(-v.x, v.z, -v.y)
}

/// Map a position or translation from scene axes to analysis axes
pub fn scene_to_analysis(v: &Vec3) -> Vec3 {
    Vec3::new(-v.x, -v.z, v.y)
}
