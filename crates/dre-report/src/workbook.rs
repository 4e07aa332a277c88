//! The full annotated workbook.

use std::path::Path;

use dre_resolve::Resolution;
use rust_xlsxwriter::{Format, Workbook, XlsxError};
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::grid::{output_headers, output_row};

/// File name of the annotated workbook artifact.
pub const VALIDATED_WORKBOOK_FILE: &str = "planilha_validada.xlsx";

/// Worksheet the annotated table is written to.
pub const VALIDATED_SHEET: &str = "VALIDADO";

/// Capability to persist a grid of text cells.
///
/// The annotated table only needs "write these headers and rows somewhere an
/// analyst can open them"; the trait keeps the pipeline independent of the
/// concrete format.
pub trait TableWriter {
    fn write(&self, path: &Path, headers: &[String], rows: &[Vec<String>]) -> Result<()>;
}

/// Writes the grid as a single-worksheet `.xlsx` with a bold header row.
///
/// Every cell is written as text, so codes like `007` survive a round trip
/// through Excel.
#[derive(Debug, Clone)]
pub struct XlsxTableWriter {
    pub worksheet_name: String,
}

impl Default for XlsxTableWriter {
    fn default() -> Self {
        Self {
            worksheet_name: VALIDATED_SHEET.to_string(),
        }
    }
}

impl TableWriter for XlsxTableWriter {
    fn write(&self, path: &Path, headers: &[String], rows: &[Vec<String>]) -> Result<()> {
        let xlsx_error = |source: XlsxError| ReportError::Xlsx {
            path: path.to_path_buf(),
            source,
        };

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(self.worksheet_name.as_str())
            .map_err(xlsx_error)?;

        let header_format = Format::new().set_bold();
        for (col, header) in headers.iter().enumerate() {
            worksheet
                .write_string_with_format(0, col as u16, header.as_str(), &header_format)
                .map_err(xlsx_error)?;
        }
        for (row_index, row) in rows.iter().enumerate() {
            for (col_index, value) in row.iter().enumerate() {
                worksheet
                    .write_string((row_index + 1) as u32, col_index as u16, value.as_str())
                    .map_err(xlsx_error)?;
            }
        }
        workbook.save(path).map_err(xlsx_error)?;
        debug!(path = %path.display(), rows = rows.len(), "annotated workbook written");
        Ok(())
    }
}

/// Writes the full annotated table for `resolution` as the validated
/// workbook.
pub fn write_validated_workbook(path: &Path, resolution: &Resolution) -> Result<()> {
    let headers = output_headers(&resolution.headers);
    let rows: Vec<Vec<String>> = resolution.rows.iter().map(output_row).collect();
    XlsxTableWriter::default().write(path, &headers, &rows)
}
