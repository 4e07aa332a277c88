//! Delimited-text decoding with a semicolon fallback.
//!
//! Inputs are first parsed as comma-delimited. When that fails (typically a
//! Brazilian export that uses `;` as the field separator and `,` for
//! decimals), the same bytes are re-parsed with a semicolon delimiter. Only
//! when both attempts fail is the input reported as unreadable.

use dre_model::RecordTable;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::reader::{normalize_cell, normalize_header};

/// Decodes delimited text into a record table.
///
/// The first non-empty row becomes the header row; rows whose cells are all
/// blank after trimming are dropped. Every cell is kept as text, so values
/// like `007` survive untouched.
pub fn read_delimited(bytes: &[u8], name: &str) -> Result<RecordTable> {
    match parse_rows(bytes, b',') {
        Ok(rows) => Ok(assemble(rows)),
        Err(comma_error) => match parse_rows(bytes, b';') {
            Ok(rows) => {
                debug!(
                    source_name = name,
                    "comma-delimited parse failed; decoded with semicolon delimiter"
                );
                Ok(assemble(rows))
            }
            Err(semicolon_error) => Err(IngestError::UnreadableInput {
                name: name.to_string(),
                detail: format!(
                    "not comma-delimited ({comma_error}) nor semicolon-delimited ({semicolon_error})"
                ),
            }),
        },
    }
}

/// Strict parse: a record with a field count different from the first
/// record's is an error, which is what triggers the delimiter fallback.
fn parse_rows(bytes: &[u8], delimiter: u8) -> std::result::Result<Vec<Vec<String>>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .from_reader(bytes);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push(row);
    }
    Ok(rows)
}

fn assemble(rows: Vec<Vec<String>>) -> RecordTable {
    let mut rows = rows.into_iter();
    let Some(first) = rows.next() else {
        return RecordTable::default();
    };
    let headers = first.iter().map(|cell| normalize_header(cell)).collect();
    RecordTable::new(headers, rows.collect())
}
