//! Get-or-load cache for parsed mapping tables.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::error::Result;
use crate::loader::LoadedMapping;

/// Caches parsed mapping tables by source path, so repeated verifications
/// against the same table parse it once.
///
/// Parsing happens outside the lock; two threads racing on a cold path may
/// both parse, and the later insert wins with an identical value. Failed
/// loads are not cached, so a fixed file is picked up on the next call.
#[derive(Debug, Default)]
pub struct MappingCache {
    entries: Mutex<BTreeMap<PathBuf, Arc<LoadedMapping>>>,
}

impl MappingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached table for `path`, invoking `load` on a miss.
    pub fn get_or_load<F>(&self, path: &Path, load: F) -> Result<Arc<LoadedMapping>>
    where
        F: FnOnce(&Path) -> Result<LoadedMapping>,
    {
        if let Some(found) = self.lock().get(path) {
            return Ok(Arc::clone(found));
        }
        let loaded = Arc::new(load(path)?);
        debug!(
            path = %path.display(),
            entries = loaded.table.len(),
            "mapping table cached"
        );
        self.lock().insert(path.to_path_buf(), Arc::clone(&loaded));
        Ok(loaded)
    }

    /// Number of distinct cached sources.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<PathBuf, Arc<LoadedMapping>>> {
        // A poisoned lock only means another thread panicked mid-update; the
        // map itself is still consistent.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::loader::load_default_mapping;

    #[test]
    fn test_cache_loads_once_per_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("depara_categorias.csv");
        std::fs::write(&path, "Categoria,DRE\nAlimentos,3.1\n").unwrap();

        let cache = MappingCache::new();
        let calls = AtomicUsize::new(0);
        let load = |path: &Path| {
            calls.fetch_add(1, Ordering::SeqCst);
            load_default_mapping(path)
        };

        let first = cache.get_or_load(&path, load).unwrap();
        let second = cache.get_or_load(&path, load).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_cache_does_not_keep_failed_loads() {
        let cache = MappingCache::new();
        let missing = Path::new("/nonexistent/depara_categorias.csv");
        assert!(cache.get_or_load(missing, load_default_mapping).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_keys_by_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let expenses = dir.path().join("depara_categorias.csv");
        let products = dir.path().join("depara_produtos.csv");
        std::fs::write(&expenses, "Categoria,DRE\nAlimentos,3.1\n").unwrap();
        std::fs::write(&products, "Categoria,DRE\nAssinatura,1.1\n").unwrap();

        let cache = MappingCache::new();
        cache.get_or_load(&expenses, load_default_mapping).unwrap();
        cache.get_or_load(&products, load_default_mapping).unwrap();
        assert_eq!(cache.len(), 2);
    }
}
