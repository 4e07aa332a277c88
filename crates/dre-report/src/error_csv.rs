//! The unmapped-rows error report.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use dre_resolve::Resolution;
use tracing::debug;

use crate::error::{ReportError, Result};
use crate::grid::{output_headers, output_row};

/// File name of the error report artifact.
pub const ERROR_REPORT_FILE: &str = "erros_categorias.csv";

/// UTF-8 byte order mark; Excel needs it to open the file as UTF-8 without
/// an import wizard.
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Writes the error report: annotated headers plus the unmapped rows only.
///
/// With nothing unmapped the file still gets its header row, so downstream
/// scripts can always parse it.
pub fn write_error_report(path: &Path, resolution: &Resolution) -> Result<()> {
    let io_error = |source: std::io::Error| ReportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let csv_error = |source: csv::Error| ReportError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::create(path).map_err(io_error)?;
    file.write_all(UTF8_BOM).map_err(io_error)?;

    let mut writer = csv::Writer::from_writer(file);
    writer
        .write_record(output_headers(&resolution.headers))
        .map_err(csv_error)?;
    let mut written = 0usize;
    for row in resolution.unmapped_rows() {
        writer.write_record(output_row(row)).map_err(csv_error)?;
        written += 1;
    }
    writer.flush().map_err(io_error)?;
    debug!(path = %path.display(), rows = written, "error report written");
    Ok(())
}
