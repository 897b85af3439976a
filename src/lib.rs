// src/lib.rs
//! Meshkit
//!
//! Procedural triangle mesh generation for 3D rendering engines.
//!
//! All generators append positions and counter-clockwise triangle indices to a
//! caller-owned [`MeshData`], so several primitives can be composed into one
//! buffer pair before upload.

pub mod geometry;

// Re-export main types for convenience
pub use geometry::{convert_to_y_up, MeshData};
pub use geometry::{
    generate_cube, generate_cylinder, generate_dodecahedron, generate_icosahedron,
    generate_icosphere, generate_octahedron, generate_plane, generate_teapot,
    generate_tetrahedron, teapot_normals,
};
