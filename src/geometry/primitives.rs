//! # Primitive Shape Generation
//!
//! Analytic generators for planes, platonic solids and cylinders. All shapes
//! are emitted in the native Z-up convention, centered at the origin, with
//! counter-clockwise outward winding; pass `y_up = true` to convert the
//! generated vertices to Y-up as a final step.
//!
//! Generators with a `share_vertices` flag emit each unique analytic vertex
//! once and reference it by index when the flag is set, or give every face
//! its own private vertex copies (flat-shading friendly) when it is not.

use super::{convert_to_y_up, MeshData};
use cgmath::Vector3;
use std::f32::consts::PI;

/// Generate a plane centered at the origin in the XY plane.
///
/// # Arguments
/// * `size_x` - Half-extent along X
/// * `size_y` - Half-extent along Y
///
/// Emits one quad: 4 corner vertices and 2 triangles. The quad always shares
/// its corners; a plane has no unshared variant.
pub fn generate_plane(mesh: &mut MeshData, size_x: f32, size_y: f32, y_up: bool) {
    let base = mesh.vertex_count();

    let v0 = Vector3::new(-size_x, -size_y, 0.0);
    let v1 = Vector3::new(size_x, -size_y, 0.0);
    let v2 = Vector3::new(size_x, size_y, 0.0);
    let v3 = Vector3::new(-size_x, size_y, 0.0);

    mesh.add_quad(v0, v3, v1, v2);

    if y_up {
        convert_to_y_up(&mut mesh.positions[base..]);
    }
}

/// Generate a tetrahedron inscribed in the unit sphere.
///
/// 4 vertices at tetrahedral symmetry points, 4 triangular faces.
pub fn generate_tetrahedron(mesh: &mut MeshData, share_vertices: bool, y_up: bool) {
    let base = mesh.vertex_count();

    let a = 1.41421f32 / 3.0;
    let b = 2.4494f32 / 3.0;

    let v0 = Vector3::new(0.0, 0.0, 1.0);
    let v1 = Vector3::new(2.0 * a, 0.0, -1.0 / 3.0);
    let v2 = Vector3::new(-a, b, -1.0 / 3.0);
    let v3 = Vector3::new(-a, -b, -1.0 / 3.0);

    if share_vertices {
        let i0 = mesh.add_vertex(v0);
        let i1 = mesh.add_vertex(v1);
        let i2 = mesh.add_vertex(v2);
        let i3 = mesh.add_vertex(v3);
        mesh.add_triangle_indices(i0, i1, i2);
        mesh.add_triangle_indices(i0, i2, i3);
        mesh.add_triangle_indices(i0, i3, i1);
        mesh.add_triangle_indices(i1, i3, i2);
    } else {
        mesh.add_triangle(v0, v1, v2);
        mesh.add_triangle(v0, v2, v3);
        mesh.add_triangle(v0, v3, v1);
        mesh.add_triangle(v1, v3, v2);
    }

    if y_up {
        convert_to_y_up(&mut mesh.positions[base..]);
    }
}

/// Generate a cube centered at the origin.
///
/// # Arguments
/// * `edge_half_length` - Distance from the center to each face plane
///
/// 8 corner vertices and 6 quad faces (12 triangles).
pub fn generate_cube(mesh: &mut MeshData, edge_half_length: f32, share_vertices: bool, y_up: bool) {
    let base = mesh.vertex_count();

    let v0 = Vector3::new(-1.0, -1.0, -1.0) * edge_half_length;
    let v1 = Vector3::new(1.0, -1.0, -1.0) * edge_half_length;
    let v2 = Vector3::new(1.0, 1.0, -1.0) * edge_half_length;
    let v3 = Vector3::new(-1.0, 1.0, -1.0) * edge_half_length;
    let v4 = Vector3::new(-1.0, -1.0, 1.0) * edge_half_length;
    let v5 = Vector3::new(1.0, -1.0, 1.0) * edge_half_length;
    let v6 = Vector3::new(1.0, 1.0, 1.0) * edge_half_length;
    let v7 = Vector3::new(-1.0, 1.0, 1.0) * edge_half_length;

    if share_vertices {
        let i0 = mesh.add_vertex(v0);
        let i1 = mesh.add_vertex(v1);
        let i2 = mesh.add_vertex(v2);
        let i3 = mesh.add_vertex(v3);
        let i4 = mesh.add_vertex(v4);
        let i5 = mesh.add_vertex(v5);
        let i6 = mesh.add_vertex(v6);
        let i7 = mesh.add_vertex(v7);

        mesh.add_quad_indices(i0, i3, i1, i2);
        mesh.add_quad_indices(i0, i1, i4, i5);
        mesh.add_quad_indices(i0, i4, i3, i7);
        mesh.add_quad_indices(i6, i5, i2, i1);
        mesh.add_quad_indices(i6, i7, i5, i4);
        mesh.add_quad_indices(i6, i2, i7, i3);
    } else {
        mesh.add_quad(v0, v3, v1, v2);
        mesh.add_quad(v0, v1, v4, v5);
        mesh.add_quad(v0, v4, v3, v7);
        mesh.add_quad(v6, v5, v2, v1);
        mesh.add_quad(v6, v7, v5, v4);
        mesh.add_quad(v6, v2, v7, v3);
    }

    if y_up {
        convert_to_y_up(&mut mesh.positions[base..]);
    }
}

/// Generate an octahedron inscribed in the unit sphere.
///
/// 6 vertices at the axis-aligned unit points, 8 triangular faces.
pub fn generate_octahedron(mesh: &mut MeshData, share_vertices: bool, y_up: bool) {
    let base = mesh.vertex_count();

    let v0 = Vector3::new(1.0, 0.0, 0.0);
    let v1 = Vector3::new(-1.0, 0.0, 0.0);
    let v2 = Vector3::new(0.0, 1.0, 0.0);
    let v3 = Vector3::new(0.0, -1.0, 0.0);
    let v4 = Vector3::new(0.0, 0.0, 1.0);
    let v5 = Vector3::new(0.0, 0.0, -1.0);

    if share_vertices {
        let i0 = mesh.add_vertex(v0);
        let i1 = mesh.add_vertex(v1);
        let i2 = mesh.add_vertex(v2);
        let i3 = mesh.add_vertex(v3);
        let i4 = mesh.add_vertex(v4);
        let i5 = mesh.add_vertex(v5);

        mesh.add_triangle_indices(i4, i0, i2);
        mesh.add_triangle_indices(i4, i2, i1);
        mesh.add_triangle_indices(i4, i1, i3);
        mesh.add_triangle_indices(i4, i3, i0);
        mesh.add_triangle_indices(i5, i2, i0);
        mesh.add_triangle_indices(i5, i1, i2);
        mesh.add_triangle_indices(i5, i3, i1);
        mesh.add_triangle_indices(i5, i0, i3);
    } else {
        mesh.add_triangle(v4, v0, v2);
        mesh.add_triangle(v4, v2, v1);
        mesh.add_triangle(v4, v1, v3);
        mesh.add_triangle(v4, v3, v0);
        mesh.add_triangle(v5, v2, v0);
        mesh.add_triangle(v5, v1, v2);
        mesh.add_triangle(v5, v3, v1);
        mesh.add_triangle(v5, v0, v3);
    }

    if y_up {
        convert_to_y_up(&mut mesh.positions[base..]);
    }
}

/// Generate an icosahedron inscribed in the unit sphere.
///
/// 12 vertices from the golden-ratio construction (t = (1 + √5) / 2, scaled
/// by 1 / √(1 + t²)), 20 triangular faces. The face adjacency table is fixed;
/// [`super::generate_icosphere`] relies on its winding.
pub fn generate_icosahedron(mesh: &mut MeshData, share_vertices: bool, y_up: bool) {
    let base = mesh.vertex_count();

    let t = (1.0 + 2.236067977f32) / 2.0;
    let s = (1.0 + t * t).sqrt();

    let v0 = Vector3::new(t, 1.0, 0.0) / s;
    let v1 = Vector3::new(-t, 1.0, 0.0) / s;
    let v2 = Vector3::new(t, -1.0, 0.0) / s;
    let v3 = Vector3::new(-t, -1.0, 0.0) / s;
    let v4 = Vector3::new(1.0, 0.0, t) / s;
    let v5 = Vector3::new(1.0, 0.0, -t) / s;
    let v6 = Vector3::new(-1.0, 0.0, t) / s;
    let v7 = Vector3::new(-1.0, 0.0, -t) / s;
    let v8 = Vector3::new(0.0, t, 1.0) / s;
    let v9 = Vector3::new(0.0, -t, 1.0) / s;
    let v10 = Vector3::new(0.0, t, -1.0) / s;
    let v11 = Vector3::new(0.0, -t, -1.0) / s;

    if share_vertices {
        mesh.positions.reserve(12);

        let i0 = mesh.add_vertex(v0);
        let i1 = mesh.add_vertex(v1);
        let i2 = mesh.add_vertex(v2);
        let i3 = mesh.add_vertex(v3);
        let i4 = mesh.add_vertex(v4);
        let i5 = mesh.add_vertex(v5);
        let i6 = mesh.add_vertex(v6);
        let i7 = mesh.add_vertex(v7);
        let i8 = mesh.add_vertex(v8);
        let i9 = mesh.add_vertex(v9);
        let i10 = mesh.add_vertex(v10);
        let i11 = mesh.add_vertex(v11);

        mesh.add_triangle_indices(i0, i8, i4);
        mesh.add_triangle_indices(i0, i5, i10);
        mesh.add_triangle_indices(i2, i4, i9);
        mesh.add_triangle_indices(i2, i11, i5);
        mesh.add_triangle_indices(i1, i6, i8);
        mesh.add_triangle_indices(i1, i10, i7);
        mesh.add_triangle_indices(i3, i9, i6);
        mesh.add_triangle_indices(i3, i7, i11);
        mesh.add_triangle_indices(i0, i10, i8);
        mesh.add_triangle_indices(i1, i8, i10);
        mesh.add_triangle_indices(i2, i9, i11);
        mesh.add_triangle_indices(i3, i11, i9);
        mesh.add_triangle_indices(i4, i2, i0);
        mesh.add_triangle_indices(i5, i0, i2);
        mesh.add_triangle_indices(i6, i1, i3);
        mesh.add_triangle_indices(i7, i3, i1);
        mesh.add_triangle_indices(i8, i6, i4);
        mesh.add_triangle_indices(i9, i4, i6);
        mesh.add_triangle_indices(i10, i5, i7);
        mesh.add_triangle_indices(i11, i7, i5);
    } else {
        mesh.positions.reserve(60);

        mesh.add_triangle(v0, v8, v4);
        mesh.add_triangle(v0, v5, v10);
        mesh.add_triangle(v2, v4, v9);
        mesh.add_triangle(v2, v11, v5);

        mesh.add_triangle(v1, v6, v8);
        mesh.add_triangle(v1, v10, v7);
        mesh.add_triangle(v3, v9, v6);
        mesh.add_triangle(v3, v7, v11);

        mesh.add_triangle(v0, v10, v8);
        mesh.add_triangle(v1, v8, v10);
        mesh.add_triangle(v2, v9, v11);
        mesh.add_triangle(v3, v11, v9);

        mesh.add_triangle(v4, v2, v0);
        mesh.add_triangle(v5, v0, v2);
        mesh.add_triangle(v6, v1, v3);
        mesh.add_triangle(v7, v3, v1);

        mesh.add_triangle(v8, v6, v4);
        mesh.add_triangle(v9, v4, v6);
        mesh.add_triangle(v10, v5, v7);
        mesh.add_triangle(v11, v7, v5);
    }

    if y_up {
        convert_to_y_up(&mut mesh.positions[base..]);
    }
}

/// Generate a dodecahedron inscribed in the unit sphere.
///
/// 20 vertices from the golden-ratio point set, 12 pentagonal faces. Each
/// pentagon is fanned into 3 triangles from its first listed corner; the
/// table order fixes the winding, so it must not be reordered.
pub fn generate_dodecahedron(mesh: &mut MeshData, share_vertices: bool, y_up: bool) {
    let base = mesh.vertex_count();

    let a = 1.0 / 1.7320508f32;
    let b = ((3.0 - 2.23606797f32) / 6.0).sqrt();
    let c = ((3.0 + 2.23606797f32) / 6.0).sqrt();

    let nv: [Vector3<f32>; 20] = [
        Vector3::new(a, a, a),
        Vector3::new(a, a, -a),
        Vector3::new(a, -a, a),
        Vector3::new(a, -a, -a),
        Vector3::new(-a, a, a),
        Vector3::new(-a, a, -a),
        Vector3::new(-a, -a, a),
        Vector3::new(-a, -a, -a),
        Vector3::new(b, c, 0.0),
        Vector3::new(-b, c, 0.0),
        Vector3::new(b, -c, 0.0),
        Vector3::new(-b, -c, 0.0),
        Vector3::new(c, 0.0, b),
        Vector3::new(c, 0.0, -b),
        Vector3::new(-c, 0.0, b),
        Vector3::new(-c, 0.0, -b),
        Vector3::new(0.0, b, c),
        Vector3::new(0.0, -b, c),
        Vector3::new(0.0, b, -c),
        Vector3::new(0.0, -b, -c),
    ];

    // Pentagonal faces, corners in winding order
    const FACES: [[usize; 5]; 12] = [
        [0, 8, 9, 4, 16],
        [0, 12, 13, 1, 8],
        [0, 16, 17, 2, 12],
        [8, 1, 18, 5, 9],
        [12, 2, 10, 3, 13],
        [16, 4, 14, 6, 17],
        [9, 5, 15, 14, 4],
        [6, 11, 10, 2, 17],
        [3, 19, 18, 1, 13],
        [7, 15, 5, 18, 19],
        [7, 11, 6, 14, 15],
        [7, 19, 3, 10, 11],
    ];

    if share_vertices {
        let mut ni = [0u32; 20];
        for (i, v) in nv.iter().enumerate() {
            ni[i] = mesh.add_vertex(*v);
        }

        for f in &FACES {
            mesh.add_pentagon_indices(ni[f[0]], ni[f[1]], ni[f[2]], ni[f[3]], ni[f[4]]);
        }
    } else {
        for f in &FACES {
            mesh.add_pentagon(nv[f[0]], nv[f[1]], nv[f[2]], nv[f[3]], nv[f[4]]);
        }
    }

    if y_up {
        convert_to_y_up(&mut mesh.positions[base..]);
    }
}

/// Generate a cylinder along the Z axis, centered at the origin.
///
/// # Arguments
/// * `height` - Extent along Z, from -height/2 to height/2
/// * `radius_bottom` / `radius_top` - Ring radii; either may be 0 to produce
///   a cone-like end
/// * `tessellation` - Number of circular segments; fewer than 3 yields no
///   geometry at all
/// * `open_top_bottom` - Leave both caps off
///
/// Radii are clamped to non-negative magnitude, and a radius below 1e-4 of
/// the radii sum is snapped to exactly 0 so that its degenerate cap fan is
/// suppressed. Cap triangles always carry private vertex copies, even in
/// shared mode.
#[allow(clippy::too_many_arguments)]
pub fn generate_cylinder(
    mesh: &mut MeshData,
    height: f32,
    radius_bottom: f32,
    radius_top: f32,
    tessellation: u32,
    open_top_bottom: bool,
    share_vertices: bool,
    y_up: bool,
) {
    // has to have at least 3 sides!
    if tessellation < 3 {
        log::debug!("generate_cylinder: tessellation {tessellation} < 3, emitting nothing");
        return;
    }

    let base = mesh.vertex_count();

    // No negative radii
    let mut radius_bottom = radius_bottom.abs();
    let mut radius_top = radius_top.abs();

    let half_height = height / 2.0;

    let radii_sum = radius_top + radius_bottom;
    if radius_bottom < radii_sum * 1e-4 {
        radius_bottom = 0.0;
    }
    if radius_top < radii_sum * 1e-4 {
        radius_top = 0.0;
    }

    let angle_delta = PI * 2.0 / tessellation as f32;

    let v_top = Vector3::new(0.0, 0.0, half_height);
    let v_bottom = Vector3::new(0.0, 0.0, -half_height);

    let n = tessellation as usize;
    let mut top_ring: Vec<Vector3<f32>> = Vec::with_capacity(n);
    let mut bottom_ring: Vec<Vector3<f32>> = Vec::with_capacity(n);
    let mut top_indices: Vec<u32> = Vec::with_capacity(n);
    let mut bottom_indices: Vec<u32> = Vec::with_capacity(n);

    let mut angle = 0.0f32;
    for i in 0..n {
        let s = angle.cos();
        let t = angle.sin();
        angle += angle_delta;

        top_ring.push(Vector3::new(s * radius_top, t * radius_top, half_height));
        bottom_ring.push(Vector3::new(
            s * radius_bottom,
            t * radius_bottom,
            -half_height,
        ));

        if share_vertices {
            top_indices.push(mesh.add_vertex(top_ring[i]));
            bottom_indices.push(mesh.add_vertex(bottom_ring[i]));
        }
    }

    for i in 0..n {
        let next = (i + 1) % n;

        if share_vertices {
            mesh.add_triangle_indices(top_indices[i], bottom_indices[i], top_indices[next]);
            mesh.add_triangle_indices(top_indices[next], bottom_indices[i], bottom_indices[next]);
        } else {
            mesh.add_triangle(top_ring[i], bottom_ring[i], top_ring[next]);
            mesh.add_triangle(top_ring[next], bottom_ring[i], bottom_ring[next]);
        }

        if !open_top_bottom {
            // top cap
            if radius_top > 0.0 {
                mesh.add_triangle(top_ring[i], top_ring[next], v_top);
            }

            // bottom cap
            if radius_bottom > 0.0 {
                mesh.add_triangle(bottom_ring[next], bottom_ring[i], v_bottom);
            }
        }
    }

    if y_up {
        convert_to_y_up(&mut mesh.positions[base..]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cgmath::InnerSpace;

    fn assert_indices_in_range(mesh: &MeshData) {
        assert_eq!(mesh.indices.len() % 3, 0);
        for &i in &mesh.indices {
            assert!((i as usize) < mesh.vertex_count());
        }
    }

    fn assert_no_index_reuse(mesh: &MeshData) {
        let mut seen = vec![false; mesh.vertex_count()];
        for tri in mesh.indices.chunks_exact(3) {
            for &i in tri {
                assert!(!seen[i as usize], "index {i} reused across triangles");
                seen[i as usize] = true;
            }
        }
    }

    #[test]
    fn test_plane_generation() {
        let mut mesh = MeshData::new();
        generate_plane(&mut mesh, 2.0, 1.0, false);
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn test_tetrahedron_generation() {
        let mut shared = MeshData::new();
        generate_tetrahedron(&mut shared, true, false);
        assert_eq!(shared.vertex_count(), 4);
        assert_eq!(shared.triangle_count(), 4);
        assert_indices_in_range(&shared);

        let mut flat = MeshData::new();
        generate_tetrahedron(&mut flat, false, false);
        assert_eq!(flat.vertex_count(), 12);
        assert_eq!(flat.triangle_count(), 4);
        assert_no_index_reuse(&flat);
    }

    #[test]
    fn test_cube_generation() {
        let mut shared = MeshData::new();
        generate_cube(&mut shared, 0.5, true, false);
        assert_eq!(shared.vertex_count(), 8);
        assert_eq!(shared.triangle_count(), 12);
        assert_indices_in_range(&shared);

        let mut flat = MeshData::new();
        generate_cube(&mut flat, 0.5, false, false);
        assert_eq!(flat.vertex_count(), 24); // 6 faces * 4 vertices
        assert_eq!(flat.triangle_count(), 12);
        assert_indices_in_range(&flat);
    }

    #[test]
    fn test_octahedron_generation() {
        let mut mesh = MeshData::new();
        generate_octahedron(&mut mesh, true, false);
        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 8);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn test_icosahedron_generation() {
        let mut shared = MeshData::new();
        generate_icosahedron(&mut shared, true, false);
        assert_eq!(shared.vertex_count(), 12);
        assert_eq!(shared.triangle_count(), 20);
        assert_indices_in_range(&shared);

        let mut flat = MeshData::new();
        generate_icosahedron(&mut flat, false, false);
        assert_eq!(flat.vertex_count(), 60);
        assert_eq!(flat.triangle_count(), 20);
        assert_no_index_reuse(&flat);
    }

    #[test]
    fn test_dodecahedron_generation() {
        let mut shared = MeshData::new();
        generate_dodecahedron(&mut shared, true, false);
        assert_eq!(shared.vertex_count(), 20);
        // 12 pentagons, 3 triangles each
        assert_eq!(shared.triangle_count(), 36);
        assert_indices_in_range(&shared);

        let mut flat = MeshData::new();
        generate_dodecahedron(&mut flat, false, false);
        assert_eq!(flat.vertex_count(), 60); // 12 pentagons * 5 corners
        assert_eq!(flat.triangle_count(), 36);
        assert_indices_in_range(&flat);
    }

    fn assert_inscribed_in_sphere(mesh: &MeshData) {
        let r = mesh.positions[0].magnitude();
        for p in &mesh.positions {
            assert_relative_eq!(p.magnitude(), r, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_solids_inscribed_in_sphere() {
        let mut cube = MeshData::new();
        generate_cube(&mut cube, 1.0, true, false);
        assert_inscribed_in_sphere(&cube);

        for generator in [
            generate_octahedron as fn(&mut MeshData, bool, bool),
            generate_icosahedron,
            generate_dodecahedron,
        ] {
            let mut mesh = MeshData::new();
            generator(&mut mesh, true, false);
            assert_inscribed_in_sphere(&mesh);
        }
    }

    #[test]
    fn test_cylinder_generation() {
        let mut mesh = MeshData::new();
        generate_cylinder(&mut mesh, 2.0, 1.0, 1.0, 16, false, true, false);
        // 16 segments * 2 side triangles + 2 caps * 16 fan triangles
        assert_eq!(mesh.triangle_count(), 64);
        assert_indices_in_range(&mesh);
    }

    #[test]
    fn test_cylinder_rejects_low_tessellation() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut mesh = MeshData::new();
        generate_cylinder(&mut mesh, 2.0, 1.0, 1.0, 2, false, true, false);
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.indices.len(), 0);
    }

    #[test]
    fn test_cone_omits_degenerate_cap() {
        let mut mesh = MeshData::new();
        generate_cylinder(&mut mesh, 2.0, 0.0, 1.0, 3, false, true, false);
        // 3 segments * 2 side triangles (degenerate but still emitted)
        // + 1 top cap fan of 3 triangles, no bottom fan
        assert_eq!(mesh.triangle_count(), 9);
        assert_indices_in_range(&mesh);

        // 6 shared ring vertices + 9 private top cap vertices; a bottom fan
        // would have added 9 more
        assert_eq!(mesh.vertex_count(), 15);
    }

    #[test]
    fn test_cylinder_open_has_no_caps() {
        let mut mesh = MeshData::new();
        generate_cylinder(&mut mesh, 1.0, 1.0, 1.0, 8, true, false, false);
        assert_eq!(mesh.triangle_count(), 16);
        assert_no_index_reuse(&mesh);
    }

    #[test]
    fn test_cylinder_negative_radius_clamped() {
        let mut negative = MeshData::new();
        generate_cylinder(&mut negative, 2.0, -1.0, -1.0, 8, false, true, false);
        let mut positive = MeshData::new();
        generate_cylinder(&mut positive, 2.0, 1.0, 1.0, 8, false, true, false);
        assert_eq!(negative.positions, positive.positions);
        assert_eq!(negative.indices, positive.indices);
    }

    #[test]
    fn test_generators_append_without_clearing() {
        let mut mesh = MeshData::new();
        generate_cube(&mut mesh, 1.0, true, false);
        let cube_vertices = mesh.vertex_count();
        let cube_indices = mesh.indices.clone();

        generate_octahedron(&mut mesh, true, false);
        assert_eq!(mesh.vertex_count(), cube_vertices + 6);
        assert_eq!(&mesh.indices[..cube_indices.len()], &cube_indices[..]);
        // appended indices land past the cube's vertices
        for &i in &mesh.indices[cube_indices.len()..] {
            assert!((i as usize) >= cube_vertices);
            assert!((i as usize) < mesh.vertex_count());
        }
    }

    #[test]
    fn test_y_up_conversion_scoped_to_generated_vertices() {
        let mut mesh = MeshData::new();
        generate_cube(&mut mesh, 1.0, true, false);
        let cube_positions = mesh.positions.clone();

        generate_octahedron(&mut mesh, true, true);
        // earlier content untouched
        assert_eq!(&mesh.positions[..8], &cube_positions[..]);
        // octahedron's +Z apex is now the +Y apex
        assert!(mesh
            .positions[8..]
            .contains(&Vector3::new(0.0, 1.0, -0.0)));
    }
}
