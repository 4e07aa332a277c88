//! Workbook decoding and worksheet selection.

use std::io::Cursor;

use calamine::{Data, Reader, open_workbook_auto_from_rs};
use dre_model::RecordTable;
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::reader::{normalize_cell, normalize_header};

/// How to pick a worksheet out of a multi-sheet workbook.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SheetChoice {
    /// Take the first worksheet.
    #[default]
    First,
    /// An explicit worksheet name; a name the workbook does not have is an
    /// error rather than a silent fallback.
    Named(String),
    /// First worksheet whose name contains the token, compared
    /// case-insensitively. Falls back to the first worksheet when nothing
    /// matches.
    Hint(String),
}

/// Resolves a [`SheetChoice`] against the workbook's sheet names.
///
/// Returns `None` when the workbook has no sheets, or when an explicitly
/// named sheet is absent.
pub fn select_worksheet(names: &[String], choice: &SheetChoice) -> Option<usize> {
    if names.is_empty() {
        return None;
    }
    match choice {
        SheetChoice::First => Some(0),
        SheetChoice::Named(wanted) => {
            let wanted = wanted.trim().to_lowercase();
            names
                .iter()
                .position(|name| name.trim().to_lowercase() == wanted)
        }
        SheetChoice::Hint(token) => {
            let token = token.trim().to_lowercase();
            names
                .iter()
                .position(|name| name.to_lowercase().contains(&token))
                .or(Some(0))
        }
    }
}

/// Decodes one worksheet of a workbook into a record table.
///
/// Returns the table together with the name of the worksheet that was read.
/// The first row of the sheet becomes the header row; rows whose cells are
/// all blank are dropped. Non-text cells are rendered to text, so a numeric
/// column arrives as the digits a person would see in the spreadsheet.
pub(crate) fn read_workbook(
    bytes: &[u8],
    name: &str,
    choice: &SheetChoice,
) -> Result<(RecordTable, String)> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes)).map_err(|error| {
        IngestError::UnreadableInput {
            name: name.to_string(),
            detail: error.to_string(),
        }
    })?;
    let sheet_names: Vec<String> = workbook.sheet_names().to_vec();
    let Some(index) = select_worksheet(&sheet_names, choice) else {
        return Err(match choice {
            SheetChoice::Named(wanted) => IngestError::SheetNotFound {
                name: name.to_string(),
                sheet: wanted.clone(),
                available: sheet_names,
            },
            _ => IngestError::UnreadableInput {
                name: name.to_string(),
                detail: "workbook has no worksheets".to_string(),
            },
        });
    };
    let sheet_name = sheet_names[index].clone();
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|error| IngestError::UnreadableInput {
            name: name.to_string(),
            detail: format!("worksheet '{sheet_name}': {error}"),
        })?;
    debug!(
        source_name = name,
        worksheet = %sheet_name,
        rows = range.height(),
        "worksheet decoded"
    );

    let mut rows = range.rows();
    let Some(header_cells) = rows.next() else {
        return Ok((RecordTable::default(), sheet_name));
    };
    let headers = header_cells
        .iter()
        .map(|cell| normalize_header(&cell_to_string(cell)))
        .collect();
    let data_rows = rows
        .map(|cells| cells.iter().map(cell_to_string).collect::<Vec<String>>())
        .filter(|row| !row.iter().all(String::is_empty))
        .collect();
    Ok((RecordTable::new(headers, data_rows), sheet_name))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => normalize_cell(value),
        other => normalize_cell(&other.to_string()),
    }
}
