//! Cube mesh (2-unit edge, full texture on every face)

use crate::mesh::Mesh;

use super::push_textured_quad;

/// Generate the built-in cube
///
/// Each face carries the whole texture, so the 8 corner positions are
/// duplicated per face (24 vertices, 12 triangles).
pub fn cube_mesh() -> Mesh {
    const CORNERS: [[f32; 3]; 8] = [
        [-1.0, -1.0, -1.0], // bottom back left
        [1.0, -1.0, -1.0],  // bottom back right
        [1.0, -1.0, 1.0],   // bottom front right
        [-1.0, -1.0, 1.0],  // bottom front left
        [-1.0, 1.0, -1.0],  // top back left
        [1.0, 1.0, -1.0],   // top back right
        [1.0, 1.0, 1.0],    // top front right
        [-1.0, 1.0, 1.0],   // top front left
    ];

    // One quad per face, wound to face outward
    const QUADS: [[usize; 4]; 6] = [
        [0, 3, 2, 1], // bottom
        [4, 5, 6, 7], // top
        [1, 0, 4, 5], // back
        [2, 3, 7, 6], // front
        [1, 2, 6, 5], // right
        [0, 4, 7, 3], // left
    ];

    const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut mesh = Mesh::default();
    for quad in QUADS {
        push_textured_quad(&mut mesh, quad.map(|i| CORNERS[i]), QUAD_UVS);
    }
    mesh
}
