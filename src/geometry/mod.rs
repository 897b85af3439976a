//! # Procedural Geometry Generation
//!
//! This module provides functions to generate common 3D primitive shapes
//! procedurally, eliminating the need for external model files for basic
//! shapes.
//!
//! ## Supported Primitives
//!
//! - **Plane**: single quad with configurable half-extents
//! - **Platonic solids**: tetrahedron, cube, octahedron, icosahedron,
//!   dodecahedron
//! - **Icosphere**: geodesic sphere built by subdividing an icosahedron
//! - **Cylinder**: two independent radii, so cones and frustums come for free
//! - **Teapot**: the classic fixed model, baked in as a data asset
//!
//! ## Usage
//!
//! ```rust
//! use meshkit::geometry::{generate_cube, generate_icosphere, MeshData};
//!
//! let mut mesh = MeshData::new();
//!
//! // Generate a cube with half-extent 0.5 and shared corner vertices
//! generate_cube(&mut mesh, 0.5, true, false);
//!
//! // Append an icosphere into the same buffers
//! generate_icosphere(&mut mesh, 2, true, false);
//! ```
//!
//! Generators only ever append; existing buffer contents are left untouched.
//! Every generator takes a `y_up` flag that converts its output from the
//! native Z-up convention to Y-up as a final step.

pub mod icosphere;
pub mod primitives;
pub mod teapot;

mod teapot_data;

pub use icosphere::generate_icosphere;
pub use primitives::*;
pub use teapot::{generate_teapot, teapot_normals};

use cgmath::Vector3;

/// Generated mesh geometry ready for GPU upload.
///
/// Holds vertex positions in model space and `u32` triangle indices with
/// counter-clockwise outward winding. Both buffers are append-only targets
/// for the generator functions in this module; indices always refer to the
/// `positions` buffer of the same instance.
#[derive(Debug, Clone, Default)]
pub struct MeshData {
    /// Vertex positions (x, y, z)
    pub positions: Vec<Vector3<f32>>,
    /// Triangle indices (counter-clockwise winding)
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create a new empty mesh buffer pair
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Get the number of vertices in this mesh
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Get the number of triangles in this mesh
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Append a vertex and return its index
    pub fn add_vertex(&mut self, v: Vector3<f32>) -> u32 {
        self.positions.push(v);
        (self.positions.len() - 1) as u32
    }

    /// Append one triangle referencing existing vertices
    pub fn add_triangle_indices(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    /// Append one triangle with three private vertex copies
    pub fn add_triangle(&mut self, a: Vector3<f32>, b: Vector3<f32>, c: Vector3<f32>) {
        let i0 = self.add_vertex(a);
        let i1 = self.add_vertex(b);
        let i2 = self.add_vertex(c);
        self.add_triangle_indices(i0, i1, i2);
    }

    /// Append a quad as two triangles referencing existing vertices.
    ///
    /// Corners are given in strip order: `i0`-`i1` form one edge, `i2`-`i3`
    /// the opposite edge. Split is (i0, i1, i2), (i2, i1, i3).
    pub fn add_quad_indices(&mut self, i0: u32, i1: u32, i2: u32, i3: u32) {
        self.add_triangle_indices(i0, i1, i2);
        self.add_triangle_indices(i2, i1, i3);
    }

    /// Append a quad with four private vertex copies, split as two triangles
    /// sharing the quad's own corners
    pub fn add_quad(&mut self, a: Vector3<f32>, b: Vector3<f32>, c: Vector3<f32>, d: Vector3<f32>) {
        let i0 = self.add_vertex(a);
        let i1 = self.add_vertex(b);
        let i2 = self.add_vertex(c);
        let i3 = self.add_vertex(d);
        self.add_quad_indices(i0, i1, i2, i3);
    }

    /// Append a pentagon as a three-triangle fan referencing existing
    /// vertices.
    ///
    /// Corners are given in winding order around the face; the fan is always
    /// anchored at `i0`: (i0, i1, i2), (i0, i2, i3), (i0, i3, i4). The split
    /// order preserves the face winding.
    pub fn add_pentagon_indices(&mut self, i0: u32, i1: u32, i2: u32, i3: u32, i4: u32) {
        self.add_triangle_indices(i0, i1, i2);
        self.add_triangle_indices(i0, i2, i3);
        self.add_triangle_indices(i0, i3, i4);
    }

    /// Append a pentagon with five private vertex copies, fanned from the
    /// first corner
    #[allow(clippy::many_single_char_names)]
    pub fn add_pentagon(
        &mut self,
        a: Vector3<f32>,
        b: Vector3<f32>,
        c: Vector3<f32>,
        d: Vector3<f32>,
        e: Vector3<f32>,
    ) {
        let i0 = self.add_vertex(a);
        let i1 = self.add_vertex(b);
        let i2 = self.add_vertex(c);
        let i3 = self.add_vertex(d);
        let i4 = self.add_vertex(e);
        self.add_pentagon_indices(i0, i1, i2, i3, i4);
    }

    /// Append a triangle, welding each corner against the vertices already
    /// present at or past `weld_base`.
    ///
    /// A corner whose position compares exactly equal (`f32` equality, no
    /// epsilon) to an existing vertex reuses that vertex's index instead of
    /// inserting a duplicate. The scan is linear over `positions[weld_base..]`
    /// per corner, so cost grows quadratically with the welded vertex count.
    pub(crate) fn add_triangle_welded(
        &mut self,
        a: Vector3<f32>,
        b: Vector3<f32>,
        c: Vector3<f32>,
        weld_base: usize,
    ) {
        let i0 = self.add_or_reuse_vertex(a, weld_base);
        let i1 = self.add_or_reuse_vertex(b, weld_base);
        let i2 = self.add_or_reuse_vertex(c, weld_base);
        self.add_triangle_indices(i0, i1, i2);
    }

    fn add_or_reuse_vertex(&mut self, v: Vector3<f32>, weld_base: usize) -> u32 {
        for (i, p) in self.positions[weld_base..].iter().enumerate() {
            if *p == v {
                return (weld_base + i) as u32;
            }
        }
        self.add_vertex(v)
    }
}

/// Convert vertex positions from Z-up to Y-up in place.
///
/// Maps each (x, y, z) to (x, z, -y), a 90° rotation about the X axis. Note
/// that this is not self-inverse: applying it twice rotates further, yielding
/// (x, -y, -z), rather than restoring the original positions.
pub fn convert_to_y_up(positions: &mut [Vector3<f32>]) {
    for p in positions.iter_mut() {
        let y = p.y;
        p.y = p.z;
        p.z = -y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_split_preserves_winding() {
        let mut mesh = MeshData::new();
        // -Z face of a unit cube, viewed from -Z: counter-clockwise
        mesh.add_quad(
            Vector3::new(-1.0, -1.0, -1.0),
            Vector3::new(-1.0, 1.0, -1.0),
            Vector3::new(1.0, -1.0, -1.0),
            Vector3::new(1.0, 1.0, -1.0),
        );
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);

        for tri in mesh.indices.chunks_exact(3) {
            let a = mesh.positions[tri[0] as usize];
            let b = mesh.positions[tri[1] as usize];
            let c = mesh.positions[tri[2] as usize];
            let normal = (b - a).cross(c - a);
            assert!(normal.z < 0.0, "quad triangle must face -Z");
        }
    }

    #[test]
    fn test_pentagon_fan_anchored_at_first_corner() {
        let mut mesh = MeshData::new();
        mesh.add_pentagon_indices(10, 11, 12, 13, 14);
        assert_eq!(mesh.indices, vec![10, 11, 12, 10, 12, 13, 10, 13, 14]);
    }

    #[test]
    fn test_welded_triangle_reuses_exact_positions() {
        let mut mesh = MeshData::new();
        let a = Vector3::new(0.0, 0.0, 1.0);
        let b = Vector3::new(1.0, 0.0, 0.0);
        let c = Vector3::new(0.0, 1.0, 0.0);
        let d = Vector3::new(1.0, 1.0, 0.0);
        mesh.add_triangle_welded(a, b, c, 0);
        mesh.add_triangle_welded(b, d, c, 0);
        // b and c are shared, only d is new
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices, vec![0, 1, 2, 1, 3, 2]);
    }

    #[test]
    fn test_weld_base_limits_the_scan() {
        let mut mesh = MeshData::new();
        let v = Vector3::new(0.5, 0.5, 0.5);
        mesh.add_vertex(v);
        // welding scoped past the first vertex must not find the earlier copy
        mesh.add_triangle_welded(v, Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0), 1);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.indices[0], 1);
    }

    #[test]
    fn test_convert_to_y_up_mapping() {
        let mut positions = vec![Vector3::new(1.0, 2.0, 3.0)];
        convert_to_y_up(&mut positions);
        assert_eq!(positions[0], Vector3::new(1.0, 3.0, -2.0));

        // Not self-inverse: a second application rotates further
        convert_to_y_up(&mut positions);
        assert_eq!(positions[0], Vector3::new(1.0, -2.0, -3.0));
    }
}
