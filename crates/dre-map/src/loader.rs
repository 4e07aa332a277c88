//! Loading a mapping table out of an ingested record table.

use std::path::Path;

use dre_ingest::{SheetChoice, read_table_from_path};
use dre_model::{
    CATEGORY_COLUMN, MappingEntry, MappingTable, RecordTable, TARGET_COLUMN, comparison_key,
};
use tracing::debug;

use crate::error::{MapError, Result};

/// Header synonyms accepted (case-insensitively) for the category column of
/// a user-supplied table.
pub const SOURCE_SYNONYMS: [&str; 3] = ["categoria", "origem", "de"];

/// Header synonyms accepted for the code column of a user-supplied table.
pub const TARGET_SYNONYMS: [&str; 4] = ["dre", "para", "destino", "categoria_dre"];

/// A parsed mapping table plus the headers its columns were read from.
#[derive(Debug, Clone)]
pub struct LoadedMapping {
    pub table: MappingTable,
    /// Header of the column whose values became category keys.
    pub category_column: String,
    /// Header of the column whose values became DRE codes.
    pub target_column: String,
}

/// Loads a default mapping table found on disk.
///
/// The canonical `Categoria` and `DRE` headers are required, compared after
/// trimming only. A default file that drifted away from that contract is a
/// configuration problem and fails loudly.
pub fn load_default_mapping(path: &Path) -> Result<LoadedMapping> {
    let ingested = read_table_from_path(path, &SheetChoice::First)?;
    let table = ingested.table;
    let category_index = table.column_index(CATEGORY_COLUMN);
    let target_index = table.column_index(TARGET_COLUMN);
    let (Some(category_index), Some(target_index)) = (category_index, target_index) else {
        return Err(MapError::MissingMappingColumns {
            path: path.to_path_buf(),
            category: CATEGORY_COLUMN.to_string(),
            target: TARGET_COLUMN.to_string(),
            headers: table.headers.clone(),
        });
    };
    Ok(build_mapping(&table, category_index, target_index))
}

/// Loads a mapping table the user pointed at explicitly.
///
/// Headers are matched against the synonym lists; when nothing matches, the
/// first column is taken as the category and the last as the code. Workbook
/// sources read their first worksheet.
pub fn load_supplied_mapping(path: &Path) -> Result<LoadedMapping> {
    let ingested = read_table_from_path(path, &SheetChoice::First)?;
    let table = ingested.table;
    if table.column_count() < 2 {
        return Err(MapError::TooFewColumns {
            path: path.to_path_buf(),
        });
    }
    let category_index = find_header(&table.headers, &SOURCE_SYNONYMS).unwrap_or(0);
    let target_index =
        find_header(&table.headers, &TARGET_SYNONYMS).unwrap_or(table.headers.len() - 1);
    Ok(build_mapping(&table, category_index, target_index))
}

fn find_header(headers: &[String], synonyms: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|header| synonyms.contains(&comparison_key(header).as_str()))
}

fn build_mapping(table: &RecordTable, category_index: usize, target_index: usize) -> LoadedMapping {
    let mut entries = Vec::new();
    for row in 0..table.row_count() {
        let category = table.cell(row, category_index);
        // Blank categories carry no key to join on.
        if category.is_empty() {
            continue;
        }
        entries.push(MappingEntry::new(category, table.cell(row, target_index)));
    }
    let mapping = MappingTable::new(entries);
    let duplicates = mapping.duplicate_key_count();
    if duplicates > 0 {
        debug!(
            count = duplicates,
            "mapping has duplicate category keys; first occurrence wins"
        );
    }
    LoadedMapping {
        table: mapping,
        category_column: table.headers[category_index].clone(),
        target_column: table.headers[target_index].clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_mapping_loads_canonical_csv() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "depara_categorias.csv",
            "Categoria,DRE\nAlimentos,3.1\nTransporte,3.2\n",
        );
        let loaded = load_default_mapping(&path).unwrap();
        assert_eq!(loaded.category_column, "Categoria");
        assert_eq!(loaded.target_column, "DRE");
        assert_eq!(loaded.table.len(), 2);
        assert_eq!(loaded.table.entries[0].category, "Alimentos");
        assert_eq!(loaded.table.entries[0].target_code, "3.1");
    }

    #[test]
    fn test_default_mapping_accepts_padded_headers() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "depara_categorias.csv",
            " Categoria , DRE \nAlimentos,3.1\n",
        );
        let loaded = load_default_mapping(&path).unwrap();
        assert_eq!(loaded.table.len(), 1);
    }

    #[test]
    fn test_default_mapping_requires_canonical_headers() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(&dir, "depara_categorias.csv", "Origem,Destino\nA,1\n");
        let error = load_default_mapping(&path).unwrap_err();
        match error {
            MapError::MissingMappingColumns { headers, .. } => {
                assert_eq!(headers, vec!["Origem", "Destino"]);
            }
            other => panic!("expected MissingMappingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_default_mapping_reads_workbook_first_sheet() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("depara_categorias.xlsx");
        let mut workbook = rust_xlsxwriter::Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.write_string(0, 0, "Categoria").unwrap();
        worksheet.write_string(0, 1, "DRE").unwrap();
        worksheet.write_string(1, 0, "Alimentos").unwrap();
        worksheet.write_string(1, 1, "3.1").unwrap();
        workbook.save(&path).unwrap();

        let loaded = load_default_mapping(&path).unwrap();
        assert_eq!(loaded.table.len(), 1);
        assert_eq!(loaded.table.entries[0].target_code, "3.1");
    }

    #[test]
    fn test_supplied_mapping_matches_synonyms() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(&dir, "minha_tabela.csv", "Origem,Destino\nAlimentos,3.1\n");
        let loaded = load_supplied_mapping(&path).unwrap();
        assert_eq!(loaded.category_column, "Origem");
        assert_eq!(loaded.target_column, "Destino");
        assert_eq!(loaded.table.entries[0].category, "Alimentos");
    }

    #[test]
    fn test_supplied_mapping_synonyms_are_case_insensitive() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(&dir, "minha_tabela.csv", "Valor,DE,PARA\nx,Alimentos,3.1\n");
        let loaded = load_supplied_mapping(&path).unwrap();
        assert_eq!(loaded.category_column, "DE");
        assert_eq!(loaded.target_column, "PARA");
    }

    #[test]
    fn test_supplied_mapping_falls_back_to_first_and_last_columns() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "minha_tabela.csv",
            "Conta,Observacao,Codigo\nAlimentos,x,3.1\n",
        );
        let loaded = load_supplied_mapping(&path).unwrap();
        assert_eq!(loaded.category_column, "Conta");
        assert_eq!(loaded.target_column, "Codigo");
        assert_eq!(loaded.table.entries[0].target_code, "3.1");
    }

    #[test]
    fn test_supplied_mapping_rejects_single_column() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(&dir, "estreita.csv", "Categoria\nAlimentos\n");
        let error = load_supplied_mapping(&path).unwrap_err();
        assert!(matches!(error, MapError::TooFewColumns { .. }));
    }

    #[test]
    fn test_blank_category_rows_are_skipped() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "depara_categorias.csv",
            "Categoria,DRE\nAlimentos,3.1\n ,9.9\nTransporte,3.2\n",
        );
        let loaded = load_default_mapping(&path).unwrap();
        assert_eq!(loaded.table.len(), 2);
    }

    #[test]
    fn test_duplicate_keys_keep_first_occurrence() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "depara_categorias.csv",
            "Categoria,DRE\nAlimentos,3.1\nALIMENTOS,9.9\n",
        );
        let loaded = load_default_mapping(&path).unwrap();
        assert_eq!(loaded.table.duplicate_key_count(), 1);
        let index = loaded.table.lookup_index();
        assert_eq!(index.get("alimentos"), Some(&"3.1"));
    }
}
