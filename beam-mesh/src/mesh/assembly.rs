//! Merge vertex buffers and triangle lists into one mesh
//!
//! Triangle indices are only meaningful relative to the final vertex buffer.
//! Every appended block of triangles is shifted by the number of vertices
//! that precede the block it refers to.

use log::debug;

use super::{Mesh, Triangle};
use crate::math::Vec3;

/// Accumulates vertex rings and triangles for a single output mesh
#[derive(Debug, Default)]
pub struct MeshAssembly {
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
}

impl MeshAssembly {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for the expected vertex and triangle counts
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            triangles: Vec::with_capacity(triangle_capacity),
        }
    }

    /// Number of vertices pushed so far, i.e. the offset of the next block
    pub fn vertex_count(&self) -> u32 {
        u32::try_from(self.vertices.len()).expect("vertex count exceeds u32 index range")
    }

    /// Append a block of vertices and return its starting offset
    pub fn push_vertices(&mut self, vertices: &[Vec3]) -> u32 {
        let offset = self.vertex_count();
        self.vertices.extend_from_slice(vertices);
        offset
    }

    /// Append triangles whose indices already address the combined buffer
    pub fn push_triangles(&mut self, triangles: impl IntoIterator<Item = Triangle>) {
        self.triangles.extend(triangles);
    }

    /// Append triangles expressed relative to the block starting at `offset`
    pub fn push_triangles_at(&mut self, offset: u32, triangles: &[Triangle]) {
        self.triangles
            .extend(triangles.iter().map(|t| t.map(|i| i + offset)));
    }

    /// Append a finished mesh, re-offsetting its triangles past every vertex
    /// already in the assembly. Its normals are discarded.
    pub fn append_mesh(&mut self, mesh: &Mesh) -> u32 {
        let offset = self.push_vertices(mesh.vertices());
        self.push_triangles_at(offset, mesh.triangles());
        offset
    }

    /// Finish the mesh and recompute normals from the final triangles
    pub fn finish(self, name: &str) -> Mesh {
        debug!(
            "assembled mesh '{}': {} vertices, {} triangles",
            name,
            self.vertices.len(),
            self.triangles.len()
        );
        Mesh::new(name, self.vertices, self.triangles)
    }
}

/// Concatenate meshes into one, offsetting each mesh's triangles by the
/// vertex count of all meshes before it
pub fn concat<'a>(name: &str, meshes: impl IntoIterator<Item = &'a Mesh>) -> Mesh {
    let mut assembly = MeshAssembly::new();
    for mesh in meshes {
        assembly.append_mesh(mesh);
    }
    assembly.finish(name)
}
