//! Rows after resolution against the mapping table.

/// Name of the diagnostic column appended to both output artifacts.
pub const DIAGNOSTIC_COLUMN: &str = "Motivo";

/// Diagnostic tag carried by every unmapped row. Mapped rows carry an empty
/// diagnostic value.
pub const UNMAPPED_TAG: &str = "categoria_nao_mapeada";

/// Match outcome for a single input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    Mapped,
    Unmapped,
}

/// An input row annotated with its resolution outcome. Created once during
/// resolution and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRow {
    /// Original cells, aligned to the input table's headers.
    pub values: Vec<String>,
    /// Target code from the mapping, when the comparison key matched.
    pub target_code: Option<String>,
    pub status: RowStatus,
}

impl ResolvedRow {
    pub fn is_mapped(&self) -> bool {
        self.status == RowStatus::Mapped
    }

    /// Value written into the diagnostic column.
    pub fn diagnostic(&self) -> &'static str {
        match self.status {
            RowStatus::Mapped => "",
            RowStatus::Unmapped => UNMAPPED_TAG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_values() {
        let mapped = ResolvedRow {
            values: vec!["Food".to_string()],
            target_code: Some("3.1".to_string()),
            status: RowStatus::Mapped,
        };
        let unmapped = ResolvedRow {
            values: vec!["Health".to_string()],
            target_code: None,
            status: RowStatus::Unmapped,
        };
        assert_eq!(mapped.diagnostic(), "");
        assert_eq!(unmapped.diagnostic(), "categoria_nao_mapeada");
        assert!(mapped.is_mapped());
        assert!(!unmapped.is_mapped());
    }
}
