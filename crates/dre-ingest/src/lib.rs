//! Tabular ingestion for category verification inputs.
//!
//! Every supported source decodes into the same shape, a
//! [`dre_model::RecordTable`] of trimmed text cells, so the resolver never has
//! to care whether a table arrived as delimited text or as a spreadsheet
//! workbook. Dispatch is by file extension: `.xlsx`/`.xlsm` (and the template
//! variants) go through [`workbook`], everything else through [`delimited`].

pub mod delimited;
pub mod error;
pub mod reader;
pub mod workbook;

pub use error::{IngestError, Result};
pub use reader::{IngestedTable, read_table, read_table_from_path};
pub use workbook::{SheetChoice, select_worksheet};
