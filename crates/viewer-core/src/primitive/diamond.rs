//! Diamond mesh (square bipyramid with the girdle rotated 45 degrees)

use crate::mesh::Mesh;

use super::push_textured_triangle;

/// Generate the built-in diamond
pub fn diamond_mesh() -> Mesh {
    const POINTS: [[f32; 3]; 6] = [
        [0.0, 1.0, 0.0],    // top point
        [1.0, 0.0, 1.0],    // girdle front right
        [-1.0, 0.0, 1.0],   // girdle front left
        [-1.0, 0.0, -1.0],  // girdle back left
        [1.0, 0.0, -1.0],   // girdle back right
        [0.0, -1.0, 0.0],   // bottom point
    ];

    const UPPER: [[usize; 3]; 4] = [[0, 1, 2], [0, 2, 3], [0, 3, 4], [0, 4, 1]];
    const LOWER: [[usize; 3]; 4] = [[5, 2, 1], [5, 3, 2], [5, 4, 3], [5, 1, 4]];

    // Apex at the top of the texture for upper facets, at the bottom for lower
    const UPPER_UVS: [[f32; 2]; 3] = [[0.5, 1.0], [0.0, 0.0], [1.0, 0.0]];
    const LOWER_UVS: [[f32; 2]; 3] = [[0.5, 0.0], [1.0, 1.0], [0.0, 1.0]];

    let mut mesh = Mesh::default();
    for tri in UPPER {
        push_textured_triangle(&mut mesh, tri.map(|i| POINTS[i]), UPPER_UVS);
    }
    for tri in LOWER {
        push_textured_triangle(&mut mesh, tri.map(|i| POINTS[i]), LOWER_UVS);
    }
    mesh
}
