//! Indexed triangle meshes
//!
//! - [`kernel`] - triangulation over vertex rings addressed by offset
//! - [`assembly`] - concatenation of vertex buffers with index offsetting
//!
//! A [`Mesh`] is immutable once built. Its normals are always derived from
//! its final triangle list.

pub mod assembly;
pub mod kernel;

use serde::Serialize;

use crate::error::{MeshError, MeshResult};
use crate::math::Vec3;

pub use assembly::MeshAssembly;
pub use kernel::Triangle;

/// A named indexed triangle mesh with per-vertex normals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
    normals: Vec<Vec3>,
}

impl Mesh {
    /// Create a mesh and compute its vertex normals.
    ///
    /// # Panics
    /// If a triangle references a vertex outside `vertices`. Builders own
    /// their index arithmetic, so an out-of-range index is a bug.
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, triangles: Vec<Triangle>) -> Self {
        let name = name.into();
        if let Some(bad) = triangles
            .iter()
            .flatten()
            .find(|&&i| i as usize >= vertices.len())
        {
            panic!(
                "mesh '{name}' references vertex {bad} but has only {} vertices",
                vertices.len()
            );
        }

        let normals = vertex_normals(&vertices, &triangles);
        Self {
            name,
            vertices,
            triangles,
            normals,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Per-vertex normals, one for each vertex
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Unnormalized normal of a triangle (length is twice its area)
    pub fn face_normal(&self, triangle: &Triangle) -> Vec3 {
        let [a, b, c] = triangle.map(|i| self.vertices[i as usize]);
        (b - a).cross(&(c - a))
    }

    /// Flat index list `[i0, i1, i2, ...]` with 32-bit indices
    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Flat index list with 16-bit indices, for hosts limited to them
    pub fn indices_u16(&self) -> MeshResult<Vec<u16>> {
        if self.vertices.len() > usize::from(u16::MAX) + 1 {
            return Err(MeshError::IndexOverflow(self.vertices.len()));
        }
        Ok(self
            .triangles
            .iter()
            .flatten()
            .map(|&i| i as u16)
            .collect())
    }

    /// Axis-aligned bounds as `(min, max)`, or `None` for an empty mesh
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.vertices.first()?;
        Some(self.vertices.iter().fold((first, first), |(lo, hi), v| {
            (lo.inf(v), hi.sup(v))
        }))
    }

    /// Serialize the mesh to a JSON string
    pub fn to_json(&self) -> MeshResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Area-weighted vertex normals. Vertices used only by zero-area triangles
/// get a zero normal.
fn vertex_normals(vertices: &[Vec3], triangles: &[Triangle]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::zeros(); vertices.len()];

    for tri in triangles {
        let [a, b, c] = tri.map(|i| vertices[i as usize]);
        let face = (b - a).cross(&(c - a));
        for &i in tri {
            normals[i as usize] += face;
        }
    }

    for n in &mut normals {
        let len = n.norm();
        if len > f64::EPSILON {
            *n /= len;
        } else {
            *n = Vec3::zeros();
        }
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_quad() -> Mesh {
        Mesh::new(
            "quad",
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![[0, 1, 2], [0, 2, 3]],
        )
    }

    #[test]
    fn test_normals_follow_winding() {
        let mesh = unit_quad();
        assert_eq!(mesh.normals().len(), 4);
        for n in mesh.normals() {
            assert_relative_eq!(*n, Vec3::z(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_flat_indices() {
        let mesh = unit_quad();
        assert_eq!(mesh.indices(), vec![0, 1, 2, 0, 2, 3]);
        assert_eq!(mesh.indices_u16().unwrap(), vec![0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_bounds() {
        let (lo, hi) = unit_quad().bounds().unwrap();
        assert_eq!(lo, Vec3::zeros());
        assert_eq!(hi, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_degenerate_triangle_has_zero_normal() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        let mesh = Mesh::new("flat", vec![p, p, p], vec![[0, 1, 2]]);
        assert_eq!(mesh.normals()[0], Vec3::zeros());
    }

    #[test]
    #[should_panic]
    fn test_rejects_out_of_range_index() {
        Mesh::new("bad", vec![Vec3::zeros(); 3], vec![[0, 1, 3]]);
    }

    #[test]
    fn test_json_output() {
        let json = unit_quad().to_json().unwrap();
        assert!(json.contains("\"name\":\"quad\""));
        assert!(json.contains("\"triangles\":[[0,1,2],[0,2,3]]"));
    }
}
