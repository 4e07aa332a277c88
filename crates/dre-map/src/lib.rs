//! Mapping-table handling: where the category → DRE table comes from, how
//! its columns are recognized, and how parsed tables are cached.
//!
//! Two loading contracts coexist on purpose. A *default* table found on disk
//! next to the binary must carry the canonical `Categoria` and `DRE` headers,
//! so a stale or renamed file fails loudly. A table the user points at
//! explicitly is treated leniently: column synonyms are accepted and, failing
//! that, the first and last columns are assumed to be the category and the
//! code.

pub mod cache;
pub mod error;
pub mod loader;
pub mod paths;
pub mod source;

pub use cache::MappingCache;
pub use error::{MapError, Result};
pub use loader::{LoadedMapping, load_default_mapping, load_supplied_mapping};
pub use paths::{candidate_paths, default_candidates, find_existing};
pub use source::{MappingOrigin, SelectedMapping, select_mapping, select_mapping_from};
