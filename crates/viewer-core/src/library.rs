//! Mesh library serialization

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;

/// A named mesh entry in a library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedMesh {
    pub name: String,
    pub mesh: Mesh,
}

/// A collection of meshes stored as one file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshLibrary {
    /// File format version
    pub version: u32,
    /// Library name
    pub name: String,
    /// All meshes in the library
    pub meshes: Vec<NamedMesh>,
}

impl Default for MeshLibrary {
    fn default() -> Self {
        Self::new("New Library")
    }
}

impl MeshLibrary {
    /// Create a new empty library
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: 1,
            name: name.into(),
            meshes: Vec::new(),
        }
    }

    /// Add a mesh under the given name
    pub fn add(&mut self, name: impl Into<String>, mesh: Mesh) {
        self.meshes.push(NamedMesh {
            name: name.into(),
            mesh,
        });
    }

    /// Find a mesh by name
    pub fn get(&self, name: &str) -> Option<&Mesh> {
        self.meshes
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.mesh)
    }

    /// Number of meshes in the library
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Check if the library is empty
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Save the library to a file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LibraryError> {
        let path = path.as_ref();
        let content = self.to_bytes()?;
        std::fs::write(path, content).map_err(|e| LibraryError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize the library to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>, LibraryError> {
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
            .map_err(|e| LibraryError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load a library from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LibraryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| LibraryError::Io(e.to_string()))?;
        let library: MeshLibrary =
            ron::from_str(&content).map_err(|e| LibraryError::Deserialize(e.to_string()))?;
        Ok(library)
    }

    /// Load a library from bytes
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, LibraryError> {
        let content =
            std::str::from_utf8(data).map_err(|e| LibraryError::Deserialize(e.to_string()))?;
        let library: MeshLibrary =
            ron::from_str(content).map_err(|e| LibraryError::Deserialize(e.to_string()))?;
        Ok(library)
    }
}

/// Library file errors
#[derive(Debug, Clone, thiserror::Error)]
pub enum LibraryError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Serialize error: {0}")]
    Serialize(String),
    #[error("Deserialize error: {0}")]
    Deserialize(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::{cube_mesh, generate_sphere_mesh};

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("objects.ron");

        let mut library = MeshLibrary::new("builtin");
        library.add("cube", cube_mesh());
        library.add("sphere", generate_sphere_mesh());
        library.save(&path).unwrap();

        let loaded = MeshLibrary::load(&path).unwrap();
        assert_eq!(loaded.name, "builtin");
        assert_eq!(loaded.version, 1);
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.get("cube"), Some(&cube_mesh()));
        assert_eq!(loaded.get("sphere"), Some(&generate_sphere_mesh()));
    }

    #[test]
    fn test_round_trip_through_bytes() {
        let mut library = MeshLibrary::new("bytes");
        library.add("cube", cube_mesh());

        let bytes = library.to_bytes().unwrap();
        let loaded = MeshLibrary::load_from_bytes(&bytes).unwrap();
        assert_eq!(loaded.get("cube"), Some(&cube_mesh()));
    }

    #[test]
    fn test_get_unknown_is_none() {
        let library = MeshLibrary::default();
        assert!(library.is_empty());
        assert_eq!(library.get("cube"), None);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = MeshLibrary::load(dir.path().join("missing.ron"));
        assert!(matches!(result, Err(LibraryError::Io(_))));
    }
}
