//! Object registry mapping names to mesh producers
//!
//! Every selectable object is registered up front in an explicit table;
//! unknown names fall back to the cube.

use std::collections::HashMap;

use crate::constants::FALLBACK_OBJECT;
use crate::mesh::Mesh;
use crate::primitive::{
    cube_mesh, diamond_mesh, generate_sphere_mesh, octahedron_mesh, prism_mesh,
};

/// A function producing a fresh mesh on every call
pub type MeshProducer = fn() -> Mesh;

/// Registry of selectable viewer objects
#[derive(Debug, Clone)]
pub struct MeshRegistry {
    producers: HashMap<String, MeshProducer>,
}

impl Default for MeshRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl MeshRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            producers: HashMap::new(),
        }
    }

    /// Create a registry with all built-in objects registered
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("cube", cube_mesh);
        registry.register("diamond", diamond_mesh);
        registry.register("octahedron", octahedron_mesh);
        registry.register("prism", prism_mesh);
        registry.register("sphere", generate_sphere_mesh);
        registry
    }

    /// Register a mesh producer under the given name
    pub fn register(&mut self, name: impl Into<String>, producer: MeshProducer) {
        self.producers.insert(name.into(), producer);
    }

    /// Generate the mesh registered under `name`
    pub fn get(&self, name: &str) -> Option<Mesh> {
        self.producers.get(name).map(|producer| producer())
    }

    /// Generate the mesh for `name`, falling back to the cube when unknown
    pub fn resolve(&self, name: &str) -> Mesh {
        if let Some(mesh) = self.get(name) {
            return mesh;
        }
        tracing::warn!("Unknown object '{}', falling back to '{}'", name, FALLBACK_OBJECT);
        self.get(FALLBACK_OBJECT).unwrap_or_else(cube_mesh)
    }

    /// Check whether a name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.producers.contains_key(name)
    }

    /// Names of all registered objects, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.producers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered objects
    pub fn len(&self) -> usize {
        self.producers.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.producers.is_empty()
    }
}
