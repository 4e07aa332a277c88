//! Verification domains.

use serde::{Deserialize, Serialize};

/// One of the two independent verification contexts.
///
/// Each domain carries its own default mapping file, default category-column
/// name, and worksheet hint. Domain selection is always an explicit input to
/// the pipeline, never inferred from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Domain {
    /// Expense categories ("despesa").
    #[serde(rename = "despesa")]
    Expense,
    /// Revenue/product categories ("receita").
    #[serde(rename = "receita")]
    Revenue,
}

impl Domain {
    pub const ALL: [Domain; 2] = [Domain::Expense, Domain::Revenue];

    /// Short lowercase name, also used as the worksheet hint token.
    pub fn as_str(self) -> &'static str {
        match self {
            Domain::Expense => "despesa",
            Domain::Revenue => "receita",
        }
    }

    /// File name of the default De/Para for this domain.
    pub fn default_mapping_file(self) -> &'static str {
        match self {
            Domain::Expense => "depara_categorias.csv",
            Domain::Revenue => "depara_produtos.csv",
        }
    }

    /// Category-column name assumed when the caller does not override it.
    pub fn default_category_column(self) -> &'static str {
        match self {
            Domain::Expense => "Categoria",
            Domain::Revenue => "Produto",
        }
    }

    /// Token matched (case-insensitively) against worksheet names when a
    /// multi-sheet workbook is loaded without an explicit worksheet choice.
    pub fn sheet_hint(self) -> &'static str {
        self.as_str()
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_defaults() {
        assert_eq!(Domain::Expense.default_mapping_file(), "depara_categorias.csv");
        assert_eq!(Domain::Expense.default_category_column(), "Categoria");
        assert_eq!(Domain::Revenue.default_mapping_file(), "depara_produtos.csv");
        assert_eq!(Domain::Revenue.default_category_column(), "Produto");
    }

    #[test]
    fn test_sheet_hint_matches_display() {
        for domain in Domain::ALL {
            assert_eq!(domain.sheet_hint(), domain.to_string());
        }
    }
}
