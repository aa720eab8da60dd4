//! Primitive mesh generation for the built-in viewer objects
//!
//! Generates vertices, triangle faces, and texture coordinates for:
//! - Cube
//! - Diamond (square bipyramid)
//! - Octahedron
//! - Prism (square pyramid)
//! - Sphere (UV sphere)

mod cube;
mod diamond;
mod octahedron;
mod prism;
mod sphere;

pub use cube::cube_mesh;
pub use diamond::diamond_mesh;
pub use octahedron::octahedron_mesh;
pub use prism::prism_mesh;
pub use sphere::{generate_sphere, generate_sphere_mesh};

use crate::mesh::Mesh;

/// Append one textured quad as two triangles, duplicating the corner vertices
/// so each face carries its own UVs
fn push_textured_quad(mesh: &mut Mesh, corners: [[f32; 3]; 4], uvs: [[f32; 2]; 4]) {
    let base = mesh.vertices.len() as u32;
    mesh.vertices.extend_from_slice(&corners);
    mesh.uvs.extend_from_slice(&uvs);
    mesh.faces.push([base, base + 1, base + 2]);
    mesh.faces.push([base, base + 2, base + 3]);
}

/// Append one textured triangle with its own vertices
fn push_textured_triangle(mesh: &mut Mesh, corners: [[f32; 3]; 3], uvs: [[f32; 2]; 3]) {
    let base = mesh.vertices.len() as u32;
    mesh.vertices.extend_from_slice(&corners);
    mesh.uvs.extend_from_slice(&uvs);
    mesh.faces.push([base, base + 1, base + 2]);
}

/// Primitive generation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum PrimitiveError {
    #[error("Sphere radius must be positive, got {0}")]
    InvalidRadius(f32),
    #[error("Sphere divisions must be at least 1, got {lat_divisions}x{long_divisions}")]
    InvalidDivisions {
        lat_divisions: u32,
        long_divisions: u32,
    },
}
