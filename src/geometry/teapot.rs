//! # Teapot Model
//!
//! The classic teapot as a fixed, baked-in data asset. Nothing here is
//! generated; the loader only reorders the stored channels into the crate's
//! conventions.

use super::teapot_data::{TEAPOT_INDICES, TEAPOT_NORMALS, TEAPOT_POSITIONS};
use super::{convert_to_y_up, MeshData};
use cgmath::Vector3;

/// Append the fixed teapot model.
///
/// Always emits exactly 1178 vertices and 6768 indices (2256 triangles). The
/// stored table keeps its vertical axis in the middle channel, so Y and Z are
/// swapped at load time, and indices 1 and 2 of every triangle are swapped to
/// correct the winding for that axis flip.
pub fn generate_teapot(mesh: &mut MeshData, y_up: bool) {
    let base = mesh.vertex_count();

    mesh.positions.reserve(TEAPOT_POSITIONS.len());
    for p in TEAPOT_POSITIONS.iter() {
        mesh.positions.push(Vector3::new(p[0], p[2], p[1]));
    }

    let offset = base as u32;
    mesh.indices.reserve(TEAPOT_INDICES.len());
    for tri in TEAPOT_INDICES.chunks_exact(3) {
        mesh.indices
            .extend_from_slice(&[tri[0] + offset, tri[2] + offset, tri[1] + offset]);
    }

    if y_up {
        convert_to_y_up(&mut mesh.positions[base..]);
    }
}

/// Baked per-vertex normals for the teapot, parallel to its vertex table.
///
/// The normals are indexed independently of the triangle indices emitted by
/// [`generate_teapot`] and are left in the asset's source layout; generation
/// never reads them.
pub fn teapot_normals() -> &'static [[f32; 3]] {
    &TEAPOT_NORMALS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teapot_fixed_counts() {
        for y_up in [false, true] {
            let mut mesh = MeshData::new();
            generate_teapot(&mut mesh, y_up);
            assert_eq!(mesh.vertex_count(), 1178);
            assert_eq!(mesh.indices.len(), 6768);
            assert_eq!(mesh.triangle_count(), 2256);
            for &i in &mesh.indices {
                assert!((i as usize) < mesh.vertex_count());
            }
        }
    }

    #[test]
    fn test_teapot_axis_swap_and_winding_fix() {
        let mut mesh = MeshData::new();
        generate_teapot(&mut mesh, false);

        // first stored vertex is (0.678873, 0.330678, 0.0); Y/Z swap at load
        assert_eq!(mesh.positions[0], Vector3::new(0.678873, 0.0, 0.330678));

        // stored triangles start (0, 7, 8); winding fix swaps the latter two
        assert_eq!(&mesh.indices[..3], &[0, 8, 7]);
    }

    #[test]
    fn test_teapot_appends_with_offset() {
        let mut mesh = MeshData::new();
        mesh.add_vertex(Vector3::new(0.0, 0.0, 0.0));
        generate_teapot(&mut mesh, false);
        assert_eq!(mesh.vertex_count(), 1179);
        assert!(mesh.indices.iter().all(|&i| i >= 1));
    }

    #[test]
    fn test_teapot_normals_parallel_table() {
        assert_eq!(teapot_normals().len(), 1178);
    }
}
