//! Choosing which mapping table a verification run joins against.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dre_model::Domain;
use tracing::debug;

use crate::cache::MappingCache;
use crate::error::{MapError, Result};
use crate::loader::{LoadedMapping, load_default_mapping, load_supplied_mapping};
use crate::paths::{default_candidates, find_existing};

/// Where the selected mapping table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingOrigin {
    /// A default table discovered in one of the standard locations.
    Default(PathBuf),
    /// A table the user supplied explicitly.
    Supplied(PathBuf),
}

impl MappingOrigin {
    pub fn path(&self) -> &Path {
        match self {
            MappingOrigin::Default(path) | MappingOrigin::Supplied(path) => path,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, MappingOrigin::Default(_))
    }
}

/// The mapping table a run will join against, plus its provenance.
#[derive(Debug, Clone)]
pub struct SelectedMapping {
    pub origin: MappingOrigin,
    pub mapping: Arc<LoadedMapping>,
}

/// Selects and loads the mapping table for `domain`.
///
/// A supplied file wins when `prefer_supplied` is set. Otherwise a
/// discovered default wins, with the supplied file as fallback when no
/// default exists. A default that exists but fails to load is an error, not
/// a reason to fall back. With nothing available, the searched locations are
/// reported.
///
/// Only default tables go through the cache; a supplied file may change
/// between runs and is parsed fresh every time.
pub fn select_mapping(
    cache: &MappingCache,
    domain: Domain,
    supplied: Option<&Path>,
    prefer_supplied: bool,
) -> Result<SelectedMapping> {
    let candidates = default_candidates(domain.default_mapping_file());
    select_mapping_from(cache, domain, supplied, prefer_supplied, &candidates)
}

/// Same as [`select_mapping`], but probing an explicit candidate list for
/// the default table.
pub fn select_mapping_from(
    cache: &MappingCache,
    domain: Domain,
    supplied: Option<&Path>,
    prefer_supplied: bool,
    candidates: &[PathBuf],
) -> Result<SelectedMapping> {
    if prefer_supplied {
        if let Some(path) = supplied {
            return select_supplied(path);
        }
    }
    if let Some(path) = find_existing(candidates) {
        debug!(domain = %domain, path = %path.display(), "default mapping table found");
        let mapping = cache.get_or_load(&path, load_default_mapping)?;
        return Ok(SelectedMapping {
            origin: MappingOrigin::Default(path),
            mapping,
        });
    }
    if let Some(path) = supplied {
        return select_supplied(path);
    }
    Err(MapError::MappingNotFound {
        domain,
        searched: candidates.to_vec(),
    })
}

fn select_supplied(path: &Path) -> Result<SelectedMapping> {
    let mapping = Arc::new(load_supplied_mapping(path)?);
    Ok(SelectedMapping {
        origin: MappingOrigin::Supplied(path.to_path_buf()),
        mapping,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_default(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("depara_categorias.csv");
        std::fs::write(&path, "Categoria,DRE\nAlimentos,3.1\n").unwrap();
        path
    }

    fn write_supplied(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("minha_tabela.csv");
        std::fs::write(&path, "Origem,Destino\nTransporte,3.2\n").unwrap();
        path
    }

    #[test]
    fn test_default_is_used_when_present() {
        let dir = tempfile::TempDir::new().unwrap();
        let default_path = write_default(&dir);
        let cache = MappingCache::new();

        let selected = select_mapping_from(
            &cache,
            Domain::Expense,
            None,
            false,
            &[default_path.clone()],
        )
        .unwrap();
        assert_eq!(selected.origin, MappingOrigin::Default(default_path));
        assert_eq!(selected.mapping.table.len(), 1);
    }

    #[test]
    fn test_default_wins_over_supplied() {
        let dir = tempfile::TempDir::new().unwrap();
        let default_path = write_default(&dir);
        let supplied_path = write_supplied(&dir);
        let cache = MappingCache::new();

        let selected = select_mapping_from(
            &cache,
            Domain::Expense,
            Some(&supplied_path),
            false,
            &[default_path],
        )
        .unwrap();
        assert!(selected.origin.is_default());
        assert_eq!(selected.mapping.category_column, "Categoria");
    }

    #[test]
    fn test_prefer_supplied_overrides_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let default_path = write_default(&dir);
        let supplied_path = write_supplied(&dir);
        let cache = MappingCache::new();

        let selected = select_mapping_from(
            &cache,
            Domain::Expense,
            Some(&supplied_path),
            true,
            &[default_path],
        )
        .unwrap();
        assert_eq!(selected.origin, MappingOrigin::Supplied(supplied_path));
        // The supplied loader recognized the synonym headers.
        assert_eq!(selected.mapping.category_column, "Origem");
    }

    #[test]
    fn test_supplied_is_fallback_when_no_default_exists() {
        let dir = tempfile::TempDir::new().unwrap();
        let supplied_path = write_supplied(&dir);
        let cache = MappingCache::new();
        let missing = dir.path().join("depara_categorias.csv");

        let selected =
            select_mapping_from(&cache, Domain::Expense, Some(&supplied_path), false, &[missing])
                .unwrap();
        assert_eq!(selected.origin, MappingOrigin::Supplied(supplied_path));
    }

    #[test]
    fn test_supplied_mapping_bypasses_the_cache() {
        let dir = tempfile::TempDir::new().unwrap();
        let supplied_path = write_supplied(&dir);
        let cache = MappingCache::new();
        let missing = dir.path().join("depara_categorias.csv");

        select_mapping_from(&cache, Domain::Expense, Some(&supplied_path), false, &[missing])
            .unwrap();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_nothing_available_reports_searched_locations() {
        let dir = tempfile::TempDir::new().unwrap();
        let cache = MappingCache::new();
        let first = dir.path().join("depara_produtos.csv");
        let second = dir.path().join("data").join("depara_produtos.csv");

        let error = select_mapping_from(
            &cache,
            Domain::Revenue,
            None,
            false,
            &[first.clone(), second.clone()],
        )
        .unwrap_err();
        match error {
            MapError::MappingNotFound { domain, searched } => {
                assert_eq!(domain, Domain::Revenue);
                assert_eq!(searched, vec![first, second]);
            }
            other => panic!("expected MappingNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_broken_default_fails_instead_of_falling_back() {
        let dir = tempfile::TempDir::new().unwrap();
        let broken = dir.path().join("depara_categorias.csv");
        std::fs::write(&broken, "Coluna,Errada\nA,1\n").unwrap();
        let supplied_path = write_supplied(&dir);
        let cache = MappingCache::new();

        let error = select_mapping_from(
            &cache,
            Domain::Expense,
            Some(&supplied_path),
            false,
            &[broken],
        )
        .unwrap_err();
        assert!(matches!(error, MapError::MissingMappingColumns { .. }));
    }
}
