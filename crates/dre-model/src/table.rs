/// An in-memory table of string-typed cells.
///
/// Every value is kept as text so numeric-looking categories ("100", "007")
/// are never coerced. Column order and row order are preserved; duplicate
/// header names are tolerated (access is positional).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RecordTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Index of the first column whose trimmed header equals `name` trimmed.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.headers
            .iter()
            .position(|header| header.trim() == wanted)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (`row`, `col`), empty string when the row is short.
    pub fn cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map_or("", String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordTable {
        RecordTable::new(
            vec!["Data".to_string(), " Categoria ".to_string()],
            vec![
                vec!["2024-01-02".to_string(), "Food".to_string()],
                vec!["2024-01-03".to_string()],
            ],
        )
    }

    #[test]
    fn test_column_index_trims_both_sides() {
        let table = sample();
        assert_eq!(table.column_index("Categoria"), Some(1));
        assert_eq!(table.column_index("  Data"), Some(0));
        assert_eq!(table.column_index("DRE"), None);
    }

    #[test]
    fn test_cell_pads_short_rows() {
        let table = sample();
        assert_eq!(table.cell(0, 1), "Food");
        assert_eq!(table.cell(1, 1), "");
        assert_eq!(table.cell(9, 0), "");
    }
}
