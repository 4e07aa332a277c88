//! Format dispatch and cell normalization shared by all ingestion paths.

use std::path::Path;

use dre_model::RecordTable;

use crate::delimited::read_delimited;
use crate::error::{IngestError, Result};
use crate::workbook::{SheetChoice, read_workbook};

/// Extensions routed to the workbook decoder; everything else is treated as
/// delimited text.
const WORKBOOK_EXTENSIONS: [&str; 4] = ["xlsx", "xlsm", "xltx", "xltm"];

/// A decoded table together with the worksheet it came from, when the source
/// was a workbook.
#[derive(Debug, Clone)]
pub struct IngestedTable {
    pub table: RecordTable,
    /// Name of the worksheet that was decoded; `None` for delimited sources.
    pub worksheet: Option<String>,
}

/// Decodes `bytes` into a record table.
///
/// `source_name` is the file name the bytes came from (an on-disk path or an
/// uploaded file name); its extension selects the decoder and it labels any
/// error. The `sheet` choice only applies to workbook sources.
pub fn read_table(bytes: &[u8], source_name: &str, sheet: &SheetChoice) -> Result<IngestedTable> {
    if is_workbook_name(source_name) {
        let (table, worksheet) = read_workbook(bytes, source_name, sheet)?;
        Ok(IngestedTable {
            table,
            worksheet: Some(worksheet),
        })
    } else {
        let table = read_delimited(bytes, source_name)?;
        Ok(IngestedTable {
            table,
            worksheet: None,
        })
    }
}

/// Reads and decodes the file at `path`.
pub fn read_table_from_path(path: &Path, sheet: &SheetChoice) -> Result<IngestedTable> {
    let bytes = std::fs::read(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("input");
    read_table(&bytes, name, sheet)
}

fn is_workbook_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            let lower = extension.to_ascii_lowercase();
            WORKBOOK_EXTENSIONS.contains(&lower.as_str())
        })
}

/// Normalizes a header cell: strips a UTF-8 BOM remnant and surrounding
/// whitespace. Interior whitespace and casing are preserved so headers
/// round-trip into the outputs exactly as the author wrote them.
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_string()
}

/// Normalizes a data cell: trims surrounding whitespace only. Values are kept
/// as text verbatim, leading zeros included.
pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}
