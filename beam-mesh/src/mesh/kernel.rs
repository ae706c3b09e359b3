//! Triangulation primitives shared by every section builder.
//!
//! All functions work purely on index offsets into a combined vertex buffer
//! and know nothing about the shape being built. Preconditions are asserted:
//! a violation means a builder is wrong, not that the input was bad.

/// A triangle as three indices into a vertex buffer
pub type Triangle = [u32; 3];

/// Triangulate an open strip between two vertex lists of equal length.
///
/// # Arguments
/// * `k1` - Offset of the first list in the combined vertex buffer
/// * `k2` - Offset of the second list in the combined vertex buffer
/// * `n` - Length of both lists (at least 2)
///
/// # Returns
/// `2(n-1)` triangles. The first `n-1` are `(i+k1, i+k2, i+1+k2)`, the
/// remaining `n-1` close each quad with `(i+1+k2, i+1+k1, i+k1)`.
pub fn open_loop_faces(k1: u32, k2: u32, n: u32) -> Vec<Triangle> {
    assert!(n >= 2, "open loop needs at least 2 vertices per list, got {n}");

    let quads = n - 1;
    let mut triangles = Vec::with_capacity(2 * quads as usize);

    for i in 0..quads {
        triangles.push([i + k1, i + k2, i + 1 + k2]);
    }
    for i in 0..quads {
        triangles.push([i + 1 + k2, i + 1 + k1, i + k1]);
    }

    triangles
}

/// Triangulate a closed ring between two vertex rings of equal length.
///
/// Same as [`open_loop_faces`] except the last vertex of each ring connects
/// back to its first, giving `2n` triangles.
///
/// # Arguments
/// * `k1` - Offset of the first ring in the combined vertex buffer
/// * `k2` - Offset of the second ring in the combined vertex buffer
/// * `n` - Length of both rings (at least 1)
pub fn closed_loop_faces(k1: u32, k2: u32, n: u32) -> Vec<Triangle> {
    assert!(n >= 1, "closed loop needs a non-empty ring");

    let mut triangles = Vec::with_capacity(2 * n as usize);

    for i in 0..n {
        let next = (i + 1) % n;
        triangles.push([k1 + i, k2 + i, k2 + next]);
    }
    for i in 0..n {
        let prev = (i + n - 1) % n;
        triangles.push([k2 + i, k1 + i, k1 + prev]);
    }

    triangles
}

/// Triangulate the outer shell of a prism whose outline has sharp corners.
///
/// The ring at offset 0 and the ring at offset `end_count` are split into
/// planes. A plane starting at `outlier_starts[j]` spans `plane_lengths[j]`
/// vertices; every other plane spans the last entry of `plane_lengths`.
/// Each plane becomes an open strip between the two rings.
///
/// # Arguments
/// * `outlier_starts` - Ring offsets of planes with a non-default length
/// * `plane_lengths` - One length per outlier, followed by the default length
/// * `end_count` - Length of one ring
pub fn outer_shell_triangles(
    outlier_starts: &[u32],
    plane_lengths: &[u32],
    end_count: u32,
) -> Vec<Triangle> {
    assert_eq!(
        plane_lengths.len(),
        outlier_starts.len() + 1,
        "plane lengths must hold one entry per outlier plus the default"
    );
    let default_length = plane_lengths[plane_lengths.len() - 1];

    let mut triangles = Vec::new();
    let mut count = 0;

    while count < end_count {
        let plane_length = outlier_starts
            .iter()
            .position(|&start| start == count)
            .map_or(default_length, |j| plane_lengths[j]);

        triangles.extend(open_loop_faces(count, count + end_count, plane_length));

        // Planes share their boundary vertex with the next plane's duplicate,
        // so the walk advances by the full plane length.
        count += plane_length;
    }

    triangles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_loop_faces() {
        let tris = open_loop_faces(0, 3, 3);
        assert_eq!(
            tris,
            vec![[0, 3, 4], [1, 4, 5], [4, 1, 0], [5, 2, 1]]
        );
    }

    #[test]
    fn test_open_loop_offsets() {
        let tris = open_loop_faces(10, 20, 2);
        assert_eq!(tris, vec![[10, 20, 21], [21, 11, 10]]);
    }

    #[test]
    fn test_closed_loop_wraps() {
        let tris = closed_loop_faces(0, 4, 4);
        assert_eq!(tris.len(), 8);
        assert_eq!(tris[3], [3, 7, 4]);
        assert_eq!(tris[4], [4, 0, 3]);
        assert!(tris.iter().flatten().all(|&i| i < 8));
    }

    #[test]
    fn test_outer_shell_uniform() {
        // A plate ring: 4 planes of 2 vertices each
        let tris = outer_shell_triangles(&[], &[2], 8);
        assert_eq!(tris.len(), 8);
        assert_eq!(tris[0], [0, 8, 9]);
        assert_eq!(tris[1], [9, 1, 0]);
        assert!(tris.iter().flatten().all(|&i| i < 16));
    }

    #[test]
    fn test_outer_shell_outliers() {
        // Wide flange ring: two 3-vertex planes, ten 2-vertex planes
        let tris = outer_shell_triangles(&[0, 13], &[3, 3, 2], 26);
        assert_eq!(tris.len(), 2 * 4 + 10 * 2);
        assert_eq!(tris[0], [0, 26, 27]);
        assert_eq!(tris[1], [1, 27, 28]);
        assert!(tris.iter().flatten().all(|&i| i < 52));
    }

    #[test]
    #[should_panic]
    fn test_open_loop_rejects_single_vertex() {
        open_loop_faces(0, 1, 1);
    }

    #[test]
    #[should_panic]
    fn test_outer_shell_rejects_length_mismatch() {
        outer_shell_triangles(&[0, 13], &[3, 2], 26);
    }
}
