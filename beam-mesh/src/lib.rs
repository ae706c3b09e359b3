//! Beam Mesh - cross-section meshes and deflected shapes for structural beams
//!
//! This library turns the results of a structural analysis into renderable
//! geometry, supporting:
//! - W-shapes, HSS tubes, plates and built-up W sections extruded between
//!   two endpoints
//! - Deflected beam lines fitted from end displacements and rotations
//! - Element property tables keyed by material, shape and size
//! - Per-element caching of generated meshes
//!
//! ## Example
//! ```rust
//! use beam_mesh::prelude::*;
//!
//! // W-shape along scene +z
//! let dims = WideFlangeDims::new(10.0, 20.0, 1.0, 0.5).unwrap();
//! let mesh = SectionSpec::WideFlange(dims)
//!     .build(Vec3::zeros(), Vec3::new(0.0, 0.0, 100.0))
//!     .unwrap();
//! assert_eq!(mesh.vertex_count(), 80);
//! assert_eq!(mesh.triangle_count(), 52);
//!
//! // Deflected shape with joint j dropping 0.5 analysis units
//! let mut values = [0.0; 12];
//! values[8] = -0.5;
//! let shape = DeflectionSolver::new(
//!     Vec3::zeros(),
//!     Vec3::new(0.0, 0.0, -10.0),
//!     Vec3::zeros(),
//!     Vec3::new(0.0, 100.0, 0.0),
//!     DeflectionInput::new(values),
//!     50.0,
//!     11,
//!     0.1,
//! )
//! .solve()
//! .unwrap();
//! assert_eq!(shape.points.len(), 11);
//! ```

pub mod cache;
pub mod config;
pub mod deflection;
pub mod element;
pub mod error;
pub mod math;
pub mod mesh;
pub mod properties;
pub mod sections;

// Re-export common types
pub mod prelude {
    pub use crate::cache::{MeshCache, SectionKey};
    pub use crate::config::DisplayOptions;
    pub use crate::deflection::{DeflectionInput, DeflectionShape, DeflectionSolver};
    pub use crate::element::{BeamElement, ElementDisplay};
    pub use crate::error::{MeshError, MeshResult};
    pub use crate::math::{CubicFit, SectionFrame, Vec3};
    pub use crate::mesh::{Mesh, MeshAssembly, Triangle};
    pub use crate::properties::{ElementProperties, PropertyTable};
    pub use crate::sections::{
        BuiltUpDims, BuiltUpWMesh, HssDims, HssMesh, PlateDims, PlateMesh, SectionSpec,
        ShapeFamily, WideFlangeDims, WideFlangeMesh,
    };
}
