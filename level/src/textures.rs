use std::collections::{HashMap, HashSet};

use log::warn;

/// Opaque handle to a texture owned by the asset system. The level never
/// looks inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetHandle(u32);

impl AssetHandle {
    /// No asset bound. Surfaces with this handle are not drawn.
    pub const NONE: Self = Self(u32::MAX);

    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn is_none(&self) -> bool {
        self.0 == u32::MAX
    }

    pub const fn id(&self) -> Option<u32> {
        if self.is_none() { None } else { Some(self.0) }
    }
}

impl Default for AssetHandle {
    fn default() -> Self {
        Self::NONE
    }
}

/// Maps a texture file name to an asset. Names arrive upper-case with the
/// extension already replaced by `.BM`. Returning `AssetHandle::NONE` marks
/// the texture as missing, which is logged and tolerated.
pub trait TextureResolver {
    fn resolve(&mut self, name: &str) -> AssetHandle;
}

/// Resolves nothing. Used when only the geometry matters.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullResolver;

impl TextureResolver for NullResolver {
    fn resolve(&mut self, _name: &str) -> AssetHandle {
        AssetHandle::NONE
    }
}

/// Hands out sequential handles, one per distinct name. When built with a
/// known set of names, anything outside it is unresolved.
#[derive(Debug, Default, Clone)]
pub struct IndexResolver {
    known: Option<HashSet<String>>,
    assigned: HashMap<String, AssetHandle>,
}

impl IndexResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_known<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            known: Some(
                names
                    .into_iter()
                    .map(|n| n.as_ref().to_ascii_uppercase())
                    .collect(),
            ),
            assigned: HashMap::new(),
        }
    }

    /// Number of distinct textures resolved so far
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

impl TextureResolver for IndexResolver {
    fn resolve(&mut self, name: &str) -> AssetHandle {
        let name = name.to_ascii_uppercase();
        if let Some(handle) = self.assigned.get(&name) {
            return *handle;
        }
        if let Some(known) = &self.known {
            if !known.contains(&name) {
                return AssetHandle::NONE;
            }
        }
        let handle = AssetHandle::new(self.assigned.len() as u32);
        self.assigned.insert(name, handle);
        handle
    }
}

/// Level textures are always looked up as `.BM`, whatever the file says
pub fn bm_name(name: &str) -> String {
    let stem = match name.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => name,
    };
    format!("{}.BM", stem)
}

/// Resolve a texture list, logging every name that has no asset
pub(crate) fn resolve_all(
    names: &[String],
    resolver: &mut impl TextureResolver,
) -> Vec<LevelTexture> {
    names
        .iter()
        .map(|name| {
            let name = bm_name(name);
            let handle = resolver.resolve(&name);
            if handle.is_none() {
                warn!("No asset for texture {}", name);
            }
            LevelTexture { name, handle }
        })
        .collect()
}

/// An entry of the level's texture list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTexture {
    pub name: String,
    pub handle: AssetHandle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bm_extension() {
        assert_eq!(bm_name("IMPCHW.BM"), "IMPCHW.BM");
        assert_eq!(bm_name("SKY.PCX"), "SKY.BM");
        assert_eq!(bm_name("NOEXT"), "NOEXT.BM");
    }

    #[test]
    fn index_resolver_reuses_handles() {
        let mut resolver = IndexResolver::new();
        let a = resolver.resolve("A.BM");
        let b = resolver.resolve("B.BM");
        assert_eq!(a, AssetHandle::new(0));
        assert_eq!(b, AssetHandle::new(1));
        assert_eq!(resolver.resolve("a.bm"), a);
        assert_eq!(resolver.len(), 2);
    }

    #[test]
    fn index_resolver_known_set() {
        let mut resolver = IndexResolver::with_known(["wall.bm", "FLOOR.BM"]);
        assert!(resolver.resolve("MISSING.BM").is_none());
        assert_eq!(resolver.resolve("FLOOR.BM").id(), Some(0));
        assert_eq!(resolver.resolve("WALL.BM").id(), Some(1));
        assert!(!resolver.is_empty());
    }

    #[test]
    fn null_resolver() {
        assert_eq!(NullResolver.resolve("ANY.BM"), AssetHandle::NONE);
        assert_eq!(AssetHandle::default(), AssetHandle::NONE);
        assert_eq!(AssetHandle::NONE.id(), None);
    }
}
