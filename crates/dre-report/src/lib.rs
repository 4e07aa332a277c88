//! Output artifacts of a verification run.
//!
//! Two files are produced from one [`dre_resolve::Resolution`]: a compact
//! error report (CSV, unmapped rows only) for fixing the mapping table, and
//! the full annotated workbook for archiving. Both carry the original
//! columns plus `DRE` and `Motivo`.

pub mod error;
pub mod error_csv;
pub mod grid;
pub mod workbook;

pub use error::{ReportError, Result};
pub use error_csv::{ERROR_REPORT_FILE, write_error_report};
pub use grid::{output_headers, output_row};
pub use workbook::{
    TableWriter, VALIDATED_SHEET, VALIDATED_WORKBOOK_FILE, XlsxTableWriter,
    write_validated_workbook,
};
