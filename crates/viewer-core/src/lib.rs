//! Object Viewer Core Data Structures
//!
//! This crate contains the core mesh data for the 3D object viewer:
//! - Mesh: vertices, triangle faces, and per-vertex texture coordinates
//! - Primitive generation (cube, diamond, octahedron, prism, UV sphere)
//! - MeshRegistry: object selection by name with cube fallback
//! - MeshLibrary: serializable mesh collection

pub mod constants;
pub mod library;
pub mod mesh;
pub mod primitive;
pub mod registry;

pub use constants::*;
pub use library::*;
pub use mesh::*;
pub use primitive::*;
pub use registry::*;
