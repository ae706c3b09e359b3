//! Generated meshes keyed by material, shape and size
//!
//! A mesh depends on the beam endpoints as well as the section, so a cache
//! belongs to one beam element. Switching back to a size that was shown
//! before then reuses the mesh instead of rebuilding it.

use std::collections::HashMap;
use std::sync::Arc;

use log::trace;
use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;

/// Material, shape and size of a section
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionKey {
    pub material: String,
    pub shape: String,
    pub size: String,
}

impl SectionKey {
    pub fn new(material: impl Into<String>, shape: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            material: material.into(),
            shape: shape.into(),
            size: size.into(),
        }
    }
}

/// Caller-owned store of generated section meshes
#[derive(Debug, Default)]
pub struct MeshCache {
    meshes: HashMap<SectionKey, Arc<Mesh>>,
}

impl MeshCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &SectionKey) -> Option<Arc<Mesh>> {
        let mesh = self.meshes.get(key).cloned();
        if mesh.is_some() {
            trace!("mesh cache hit for {} {} {}", key.material, key.shape, key.size);
        }
        mesh
    }

    /// Store a mesh, replacing any previous one for the key
    pub fn insert(&mut self, key: SectionKey, mesh: Mesh) -> Arc<Mesh> {
        let mesh = Arc::new(mesh);
        self.meshes.insert(key, Arc::clone(&mesh));
        mesh
    }

    /// Return the cached mesh or build, store and return a new one.
    /// A failed build leaves the cache unchanged.
    pub fn get_or_try_insert_with<E, F>(&mut self, key: &SectionKey, build: F) -> Result<Arc<Mesh>, E>
    where
        F: FnOnce() -> Result<Mesh, E>,
    {
        if let Some(mesh) = self.get(key) {
            return Ok(mesh);
        }
        let mesh = build()?;
        Ok(self.insert(key.clone(), mesh))
    }

    pub fn contains(&self, key: &SectionKey) -> bool {
        self.meshes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Drop every mesh, e.g. after the beam endpoints move
    pub fn clear(&mut self) {
        self.meshes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MeshError;
    use crate::math::Vec3;

    fn triangle(name: &str) -> Mesh {
        Mesh::new(
            name,
            vec![Vec3::zeros(), Vec3::x(), Vec3::y()],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn test_build_once() {
        let mut cache = MeshCache::new();
        let key = SectionKey::new("Steel", "W", "W12x26");
        let mut builds = 0;

        for _ in 0..3 {
            let mesh = cache
                .get_or_try_insert_with(&key, || {
                    builds += 1;
                    Ok::<_, MeshError>(triangle("W Beam"))
                })
                .unwrap();
            assert_eq!(mesh.name(), "W Beam");
        }
        assert_eq!(builds, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_failed_build_not_cached() {
        let mut cache = MeshCache::new();
        let key = SectionKey::new("Steel", "HSS", "HSS6x6x1/4");
        let result = cache.get_or_try_insert_with(&key, || {
            Err(MeshError::InvalidGeometry("bad".to_string()))
        });
        assert!(result.is_err());
        assert!(cache.is_empty());
        assert!(cache.get(&key).is_none());
    }

    #[test]
    fn test_keys_are_distinct() {
        let mut cache = MeshCache::new();
        cache.insert(SectionKey::new("Steel", "W", "W12x26"), triangle("a"));
        cache.insert(SectionKey::new("Aluminum", "W", "W12x26"), triangle("b"));
        assert_eq!(cache.len(), 2);

        let hit = cache.get(&SectionKey::new("Aluminum", "W", "W12x26")).unwrap();
        assert_eq!(hit.name(), "b");

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_shared_handle() {
        let mut cache = MeshCache::new();
        let key = SectionKey::new("Steel", "PL", "PL1/2x6");
        let stored = cache.insert(key.clone(), triangle("Plate Mesh"));
        let fetched = cache.get(&key).unwrap();
        assert!(Arc::ptr_eq(&stored, &fetched));
    }
}
