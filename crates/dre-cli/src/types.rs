use std::path::PathBuf;

use dre_model::Domain;

#[derive(Debug)]
pub struct VerifyResult {
    pub domain: Domain,
    pub input: PathBuf,
    pub worksheet: Option<String>,
    pub mapping_source: PathBuf,
    pub mapping_is_default: bool,
    pub category_column: String,
    pub total_rows: usize,
    pub mapped_rows: usize,
    pub unmapped_rows: usize,
    pub unmapped_sample: Vec<(usize, String)>,
    pub error_report: PathBuf,
    pub validated_workbook: PathBuf,
    pub report_json: Option<PathBuf>,
}
