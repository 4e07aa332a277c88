//! Canonical mapping (De/Para) types.
//!
//! Whatever headers a mapping source arrives with, the loader reduces it to
//! the two canonical columns below before the rest of the pipeline sees it.

use std::collections::BTreeMap;

use crate::key::comparison_key;

/// Canonical name of the mapping source column.
pub const CATEGORY_COLUMN: &str = "Categoria";

/// Canonical name of the mapping target column.
pub const TARGET_COLUMN: &str = "DRE";

/// One category → target-code pair, with its derived comparison key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingEntry {
    /// Category label as read from the source (edge-trimmed).
    pub category: String,
    /// Target classification code (edge-trimmed).
    pub target_code: String,
    /// Derived join key: trimmed, lower-cased category.
    pub comparison_key: String,
}

impl MappingEntry {
    pub fn new(category: impl Into<String>, target_code: impl Into<String>) -> Self {
        let category = category.into();
        let comparison_key = comparison_key(&category);
        Self {
            category,
            target_code: target_code.into(),
            comparison_key,
        }
    }
}

/// The reference mapping table, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    pub entries: Vec<MappingEntry>,
}

impl MappingTable {
    pub fn new(entries: Vec<MappingEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Join index keyed by comparison key.
    ///
    /// Duplicate keys keep the first occurrence in source order, so a left
    /// join through this index can never multiply input rows.
    pub fn lookup_index(&self) -> BTreeMap<&str, &str> {
        let mut index: BTreeMap<&str, &str> = BTreeMap::new();
        for entry in &self.entries {
            index
                .entry(entry.comparison_key.as_str())
                .or_insert(entry.target_code.as_str());
        }
        index
    }

    /// Number of entries shadowed by an earlier entry with the same key.
    pub fn duplicate_key_count(&self) -> usize {
        self.entries.len() - self.lookup_index().len()
    }
}
