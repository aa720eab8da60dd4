//! Normal calculation utilities for mesh data

use glam::Vec3;

/// Calculate the unit normal of a single triangle
///
/// Degenerate (zero-area) triangles fall back to +Z.
pub fn calculate_triangle_normal(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> [f32; 3] {
    let e1 = Vec3::from(v1) - Vec3::from(v0);
    let e2 = Vec3::from(v2) - Vec3::from(v0);
    let cross = e1.cross(e2);

    if cross.length_squared() > 0.0 {
        cross.normalize().to_array()
    } else {
        [0.0, 0.0, 1.0]
    }
}

/// Calculate one normal per face
///
/// Face indices must be in range for `vertices`.
pub fn calculate_face_normals(vertices: &[[f32; 3]], faces: &[[u32; 3]]) -> Vec<[f32; 3]> {
    faces
        .iter()
        .map(|face| {
            calculate_triangle_normal(
                vertices[face[0] as usize],
                vertices[face[1] as usize],
                vertices[face[2] as usize],
            )
        })
        .collect()
}
