//! Assembly of the annotated output grid.

use dre_model::{DIAGNOSTIC_COLUMN, ResolvedRow, TARGET_COLUMN};

/// Output header row: the input headers followed by `DRE` and `Motivo`.
///
/// The two columns are always appended, even when the input already carries
/// a header with the same name; the appended pair is the verification
/// verdict, the earlier one is the user's data.
pub fn output_headers(headers: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(headers.len() + 2);
    out.extend(headers.iter().cloned());
    out.push(TARGET_COLUMN.to_string());
    out.push(DIAGNOSTIC_COLUMN.to_string());
    out
}

/// Output data row for one classified input row. The `DRE` cell is empty for
/// unmapped rows; `Motivo` is empty for mapped ones.
pub fn output_row(row: &ResolvedRow) -> Vec<String> {
    let mut out = Vec::with_capacity(row.values.len() + 2);
    out.extend(row.values.iter().cloned());
    out.push(row.target_code.clone().unwrap_or_default());
    out.push(row.diagnostic().to_string());
    out
}
