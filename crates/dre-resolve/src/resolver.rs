//! The left join between input rows and the mapping table.

use dre_model::{MappingTable, RecordTable, ResolvedRow, RowStatus, comparison_key};
use tracing::debug;

use crate::error::{ResolveError, Result};

/// Outcome of classifying an input table: every input row, in input order,
/// annotated with its DRE code or flagged as unmapped.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Input headers, exactly as ingested.
    pub headers: Vec<String>,
    /// The category column the join keyed on.
    pub category_column: String,
    /// Index of that column in `headers`.
    pub category_index: usize,
    pub rows: Vec<ResolvedRow>,
}

impl Resolution {
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    pub fn mapped_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_mapped()).count()
    }

    pub fn unmapped_count(&self) -> usize {
        self.total() - self.mapped_count()
    }

    pub fn unmapped_rows(&self) -> impl Iterator<Item = &ResolvedRow> {
        self.rows.iter().filter(|row| !row.is_mapped())
    }

    /// Category text of a row, read from the join column.
    pub fn category_of<'a>(&self, row: &'a ResolvedRow) -> &'a str {
        row.values
            .get(self.category_index)
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Classifies every row of `table` against `mapping`.
///
/// Each input row yields exactly one output row in the same position; a row
/// whose category key has several mapping entries takes the first one.
/// Comparison keys are the trimmed, lowercased category text, so `" ALUGUEL "`
/// and `"aluguel"` join to the same entry while accented variants stay
/// distinct.
pub fn resolve(
    table: &RecordTable,
    mapping: &MappingTable,
    category_column: &str,
) -> Result<Resolution> {
    let Some(category_index) = table.column_index(category_column) else {
        return Err(ResolveError::CategoryColumnNotFound {
            column: category_column.to_string(),
            available: table.headers.clone(),
        });
    };

    let index = mapping.lookup_index();
    let mut rows = Vec::with_capacity(table.row_count());
    for values in &table.rows {
        let category = values
            .get(category_index)
            .map(String::as_str)
            .unwrap_or("");
        let key = comparison_key(category);
        let resolved = match index.get(key.as_str()) {
            Some(code) => ResolvedRow {
                values: values.clone(),
                target_code: Some((*code).to_string()),
                status: RowStatus::Mapped,
            },
            None => ResolvedRow {
                values: values.clone(),
                target_code: None,
                status: RowStatus::Unmapped,
            },
        };
        rows.push(resolved);
    }

    let resolution = Resolution {
        headers: table.headers.clone(),
        category_column: category_column.trim().to_string(),
        category_index,
        rows,
    };
    debug!(
        total = resolution.total(),
        mapped = resolution.mapped_count(),
        unmapped = resolution.unmapped_count(),
        "rows classified"
    );
    Ok(resolution)
}
