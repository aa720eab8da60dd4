//! Triangle mesh data shared by the generators and the renderer

mod normals;

pub use normals::{calculate_face_normals, calculate_triangle_normal};

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A triangulated mesh with per-vertex texture coordinates
///
/// `uvs` is aligned 1:1 with `vertices` by index. Faces wind
/// counter-clockwise as produced by the generators; zero-area faces (the
/// sphere pole rows) are legal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions in object space
    pub vertices: Vec<[f32; 3]>,
    /// Triangle faces as vertex index triples
    pub faces: Vec<[u32; 3]>,
    /// Texture coordinates in [0, 1], one per vertex
    pub uvs: Vec<[f32; 2]>,
}

impl Mesh {
    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangle faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if the mesh has no geometry
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Check structural invariants: one UV per vertex, all face indices in range
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.uvs.len() != self.vertices.len() {
            return Err(MeshError::UvCountMismatch {
                vertices: self.vertices.len(),
                uvs: self.uvs.len(),
            });
        }

        let vertex_count = self.vertices.len();
        for face in &self.faces {
            for &index in face {
                if index as usize >= vertex_count {
                    return Err(MeshError::IndexOutOfBounds {
                        index,
                        vertex_count,
                    });
                }
            }
        }

        Ok(())
    }

    /// Axis-aligned bounding box as (min, max)
    pub fn bounding_box(&self) -> ([f32; 3], [f32; 3]) {
        if self.vertices.is_empty() {
            return ([0.0; 3], [0.0; 3]);
        }

        let mut min = [f32::MAX; 3];
        let mut max = [f32::MIN; 3];

        for v in &self.vertices {
            for i in 0..3 {
                min[i] = min[i].min(v[i]);
                max[i] = max[i].max(v[i]);
            }
        }

        (min, max)
    }

    /// Get the center of the bounding box
    pub fn center(&self) -> Vec3 {
        let (min, max) = self.bounding_box();
        (Vec3::from(min) + Vec3::from(max)) / 2.0
    }

    /// Get the size of the bounding box
    pub fn size(&self) -> Vec3 {
        let (min, max) = self.bounding_box();
        Vec3::from(max) - Vec3::from(min)
    }

    /// One unit normal per face, derived on demand
    pub fn face_normals(&self) -> Vec<[f32; 3]> {
        calculate_face_normals(&self.vertices, &self.faces)
    }

    /// Face indices flattened for indexed rendering
    pub fn flat_indices(&self) -> Vec<u32> {
        self.faces.iter().flatten().copied().collect()
    }

    /// Vertex positions as raw bytes for buffer upload
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Face indices as raw bytes for buffer upload
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.faces)
    }

    /// Texture coordinates as raw bytes for buffer upload
    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uvs)
    }
}

/// Mesh validation errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum MeshError {
    #[error("UV count {uvs} does not match vertex count {vertices}")]
    UvCountMismatch { vertices: usize, uvs: usize },
    #[error("Face index {index} out of bounds for {vertex_count} vertices")]
    IndexOutOfBounds { index: u32, vertex_count: usize },
}
