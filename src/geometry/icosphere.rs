//! # Icosphere Generation
//!
//! Geodesic sphere approximation built by repeatedly subdividing an
//! icosahedron: every triangle splits into 4, with the new edge midpoints
//! pushed out onto the unit sphere. Level 0 is the plain icosahedron; each
//! level multiplies the triangle count by 4.
//!
//! In shared-vertex mode, subdivision welds coincident positions by scanning
//! the vertices emitted so far within the current level. The scan is
//! quadratic, which is tolerable at low levels only; see
//! [`generate_icosphere`] for the guarded limit.

use super::{convert_to_y_up, generate_icosahedron, MeshData};
use cgmath::InnerSpace;

/// Highest tessellation level at which the shared-vertex weld scan is still
/// tolerable.
const MAX_SHARED_TESSELLATION_LEVEL: u32 = 5;

/// Generate a geodesic sphere of unit radius, centered at the origin.
///
/// # Arguments
/// * `tessellation_level` - Number of subdivision passes; 0 yields the plain
///   icosahedron (20 triangles), each further level multiplies the triangle
///   count by 4
///
/// # Panics
///
/// In debug builds, panics when `share_vertices` is set together with a
/// tessellation level above 5: the per-level weld is an O(n²) position scan
/// and that combination is a programmer error, not a recoverable condition.
/// Release builds skip the check and simply run the slow path.
pub fn generate_icosphere(
    mesh: &mut MeshData,
    tessellation_level: u32,
    share_vertices: bool,
    y_up: bool,
) {
    debug_assert!(
        !(share_vertices && tessellation_level > MAX_SHARED_TESSELLATION_LEVEL),
        "shared-vertex icospheres above level {MAX_SHARED_TESSELLATION_LEVEL} hit the quadratic weld scan"
    );

    let mut src = MeshData::new();
    let mut dst = MeshData::new();

    // Construct an icosahedron to start with
    generate_icosahedron(&mut src, share_vertices, false);

    for _ in 0..tessellation_level {
        dst.positions.clear();
        dst.indices.clear();
        subdivide(&mut dst, &src, share_vertices);
        std::mem::swap(&mut src, &mut dst);
    }

    let base = mesh.vertex_count();
    mesh.positions.extend_from_slice(&src.positions);
    mesh.indices
        .extend(src.indices.iter().map(|i| i + base as u32));

    if y_up {
        convert_to_y_up(&mut mesh.positions[base..]);
    }
}

/// Split every input triangle into 4, projecting the new edge midpoints onto
/// the unit sphere.
///
/// In shared mode each emitted corner is welded against the vertices already
/// appended to `out` during this call, so adjacent triangles reuse the
/// midpoints computed from their common edge. The welding relies on both
/// triangles producing bit-identical midpoints from the same expression, so
/// exact `f32` equality suffices.
fn subdivide(out: &mut MeshData, input: &MeshData, share_vertices: bool) {
    let weld_base = out.vertex_count();

    for tri in input.indices.chunks_exact(3) {
        let a = input.positions[tri[0] as usize];
        let b = input.positions[tri[1] as usize];
        let c = input.positions[tri[2] as usize];

        let v1 = (a + b).normalize();
        let v2 = (b + c).normalize();
        let v3 = (c + a).normalize();

        if share_vertices {
            out.add_triangle_welded(v1, v2, v3, weld_base);
            out.add_triangle_welded(a, v1, v3, weld_base);
            out.add_triangle_welded(b, v2, v1, weld_base);
            out.add_triangle_welded(c, v3, v2, weld_base);
        } else {
            out.add_triangle(v1, v2, v3);
            out.add_triangle(a, v1, v3);
            out.add_triangle(b, v2, v1);
            out.add_triangle(c, v3, v2);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_level_zero_is_icosahedron() {
        let mut shared = MeshData::new();
        generate_icosphere(&mut shared, 0, true, false);
        assert_eq!(shared.vertex_count(), 12);
        assert_eq!(shared.triangle_count(), 20);

        let mut flat = MeshData::new();
        generate_icosphere(&mut flat, 0, false, false);
        assert_eq!(flat.vertex_count(), 60);
        assert_eq!(flat.triangle_count(), 20);
    }

    #[test]
    fn test_triangle_count_quadruples_per_level() {
        for share_vertices in [true, false] {
            let mut expected = 20;
            for level in 0..4 {
                let mut mesh = MeshData::new();
                generate_icosphere(&mut mesh, level, share_vertices, false);
                assert_eq!(mesh.triangle_count(), expected, "level {level}");
                expected *= 4;
            }
        }
    }

    #[test]
    fn test_welding_deduplicates_shared_edges() {
        let mut mesh = MeshData::new();
        generate_icosphere(&mut mesh, 2, true, false);
        // every index valid, and far fewer vertices than the flat variant
        for &i in &mesh.indices {
            assert!((i as usize) < mesh.vertex_count());
        }
        let mut flat = MeshData::new();
        generate_icosphere(&mut flat, 2, false, false);
        assert!(mesh.vertex_count() < flat.vertex_count());
        assert_eq!(mesh.triangle_count(), flat.triangle_count());

        // no two welded vertices share a position
        for (i, p) in mesh.positions.iter().enumerate() {
            for q in &mesh.positions[i + 1..] {
                assert_ne!(p, q);
            }
        }
    }

    #[test]
    fn test_vertices_on_unit_sphere() {
        let mut mesh = MeshData::new();
        generate_icosphere(&mut mesh, 3, true, false);
        for p in &mesh.positions {
            assert_relative_eq!(p.magnitude(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_icosphere_appends_with_offset() {
        let mut mesh = MeshData::new();
        super::super::generate_cube(&mut mesh, 1.0, true, false);
        let cube_vertices = mesh.vertex_count();
        let cube_index_count = mesh.indices.len();

        generate_icosphere(&mut mesh, 1, true, false);
        for &i in &mesh.indices[cube_index_count..] {
            assert!((i as usize) >= cube_vertices);
            assert!((i as usize) < mesh.vertex_count());
        }
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn test_shared_mode_rejects_deep_tessellation() {
        let mut mesh = MeshData::new();
        generate_icosphere(&mut mesh, 6, true, false);
    }
}
