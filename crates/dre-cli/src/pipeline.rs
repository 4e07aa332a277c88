//! Verification pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Load mapping**: Select and load the De/Para table
//! 2. **Ingest**: Read the input dataset (CSV or workbook)
//! 3. **Classify**: Join rows against the mapping table
//! 4. **Output**: Write the error report and the validated workbook
//!
//! Each stage takes the output of the previous stage and returns typed
//! results, so the CLI commands and the integration tests drive the exact
//! same code.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, info_span};

use dre_ingest::{IngestedTable, SheetChoice, read_table_from_path};
use dre_map::{MappingCache, SelectedMapping, select_mapping_from};
use dre_model::{Domain, MappingTable, RecordTable};
use dre_report::{
    ERROR_REPORT_FILE, VALIDATED_WORKBOOK_FILE, write_error_report, write_validated_workbook,
};
use dre_resolve::{Resolution, resolve};

// ============================================================================
// Stage 1: Load mapping
// ============================================================================

/// Select and load the mapping table for `domain`.
///
/// `candidates` is the list of locations probed for a default table; the
/// commands layer passes the standard locations, tests pass their own.
pub fn load_mapping(
    cache: &MappingCache,
    domain: Domain,
    supplied: Option<&Path>,
    prefer_supplied: bool,
    candidates: &[PathBuf],
) -> Result<SelectedMapping> {
    let span = info_span!("load_mapping", domain = %domain);
    let _guard = span.enter();
    let start = Instant::now();

    let selected = select_mapping_from(cache, domain, supplied, prefer_supplied, candidates)
        .context("select mapping table")?;
    info!(
        domain = %domain,
        path = %selected.origin.path().display(),
        origin = if selected.origin.is_default() { "default" } else { "supplied" },
        entries = selected.mapping.table.len(),
        duplicate_keys = selected.mapping.table.duplicate_key_count(),
        duration_ms = start.elapsed().as_millis(),
        "mapping table loaded"
    );
    Ok(selected)
}

// ============================================================================
// Stage 2: Ingest
// ============================================================================

/// Read and normalize the input dataset.
pub fn ingest_input(path: &Path, sheet: &SheetChoice) -> Result<IngestedTable> {
    let span = info_span!("ingest", input = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let ingested =
        read_table_from_path(path, sheet).with_context(|| format!("read {}", path.display()))?;
    info!(
        input = %path.display(),
        worksheet = ingested.worksheet.as_deref().unwrap_or("-"),
        rows = ingested.table.row_count(),
        columns = ingested.table.column_count(),
        duration_ms = start.elapsed().as_millis(),
        "input table read"
    );
    Ok(ingested)
}

/// Worksheet selection for a run: an explicit name wins, otherwise the
/// domain's sheet-name hint is tried with a first-sheet fallback.
pub fn sheet_choice_for(domain: Domain, requested: Option<&str>) -> SheetChoice {
    match requested {
        Some(name) => SheetChoice::Named(name.to_string()),
        None => SheetChoice::Hint(domain.sheet_hint().to_string()),
    }
}

// ============================================================================
// Stage 3: Classify
// ============================================================================

/// Join the input rows against the mapping table.
pub fn classify(
    table: &RecordTable,
    mapping: &MappingTable,
    category_column: &str,
) -> Result<Resolution> {
    let span = info_span!("resolve", category_column);
    let _guard = span.enter();
    let start = Instant::now();

    let resolution = resolve(table, mapping, category_column)
        .with_context(|| format!("resolve against column '{category_column}'"))?;
    info!(
        category_column = %resolution.category_column,
        total_rows = resolution.total(),
        mapped_rows = resolution.mapped_count(),
        unmapped_rows = resolution.unmapped_count(),
        duration_ms = start.elapsed().as_millis(),
        "rows classified"
    );
    Ok(resolution)
}

/// Distinct unmapped categories with occurrence counts, most frequent
/// first; ties break alphabetically.
pub fn unmapped_category_counts(resolution: &Resolution) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for row in resolution.unmapped_rows() {
        *counts.entry(resolution.category_of(row)).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(category, count)| (category.to_string(), count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

// ============================================================================
// Stage 4: Output
// ============================================================================

/// Files written by the output stage.
#[derive(Debug)]
pub struct WrittenArtifacts {
    /// CSV with the unmapped rows only.
    pub error_report: PathBuf,
    /// Workbook with every row annotated.
    pub validated_workbook: PathBuf,
}

/// Write both output artifacts under `output_dir`.
pub fn write_outputs(output_dir: &Path, resolution: &Resolution) -> Result<WrittenArtifacts> {
    let span = info_span!("report", output_dir = %output_dir.display());
    let _guard = span.enter();
    let start = Instant::now();

    fs::create_dir_all(output_dir)
        .with_context(|| format!("create output directory {}", output_dir.display()))?;

    let error_report = output_dir.join(ERROR_REPORT_FILE);
    write_error_report(&error_report, resolution)
        .with_context(|| format!("write {}", error_report.display()))?;

    let validated_workbook = output_dir.join(VALIDATED_WORKBOOK_FILE);
    write_validated_workbook(&validated_workbook, resolution)
        .with_context(|| format!("write {}", validated_workbook.display()))?;

    info!(
        error_report = %error_report.display(),
        validated_workbook = %validated_workbook.display(),
        duration_ms = start.elapsed().as_millis(),
        "report complete"
    );
    Ok(WrittenArtifacts {
        error_report,
        validated_workbook,
    })
}

// ============================================================================
// Machine-readable report
// ============================================================================

/// Schema identifier embedded in the JSON report.
pub const REPORT_SCHEMA: &str = "dre-verifier.verification-report";
/// Schema version embedded in the JSON report.
pub const REPORT_SCHEMA_VERSION: u32 = 1;

/// One unmapped category with its occurrence count.
#[derive(Debug, Serialize)]
pub struct UnmappedCategory {
    pub category: String,
    pub count: usize,
}

/// JSON payload summarizing a verification run.
#[derive(Debug, Serialize)]
pub struct VerificationReportPayload {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub domain: Domain,
    pub input: String,
    pub worksheet: Option<String>,
    pub mapping_source: String,
    pub mapping_origin: &'static str,
    pub category_column: String,
    pub total_rows: usize,
    pub mapped_rows: usize,
    pub unmapped_rows: usize,
    pub unmapped_categories: Vec<UnmappedCategory>,
    pub error_report: String,
    pub validated_workbook: String,
}

/// Everything the JSON report is built from.
pub struct ReportInputs<'a> {
    pub domain: Domain,
    pub input: &'a Path,
    pub worksheet: Option<&'a str>,
    pub mapping: &'a SelectedMapping,
    pub resolution: &'a Resolution,
    pub artifacts: &'a WrittenArtifacts,
}

/// Assemble the JSON report payload for a finished run.
pub fn build_report_payload(inputs: &ReportInputs<'_>) -> VerificationReportPayload {
    let unmapped_categories = unmapped_category_counts(inputs.resolution)
        .into_iter()
        .map(|(category, count)| UnmappedCategory { category, count })
        .collect();
    VerificationReportPayload {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: Utc::now().to_rfc3339(),
        domain: inputs.domain,
        input: inputs.input.display().to_string(),
        worksheet: inputs.worksheet.map(ToString::to_string),
        mapping_source: inputs.mapping.origin.path().display().to_string(),
        mapping_origin: if inputs.mapping.origin.is_default() {
            "default"
        } else {
            "supplied"
        },
        category_column: inputs.resolution.category_column.clone(),
        total_rows: inputs.resolution.total(),
        mapped_rows: inputs.resolution.mapped_count(),
        unmapped_rows: inputs.resolution.unmapped_count(),
        unmapped_categories,
        error_report: inputs.artifacts.error_report.display().to_string(),
        validated_workbook: inputs.artifacts.validated_workbook.display().to_string(),
    }
}

/// Write the JSON report to `path`.
pub fn write_report_json(path: &Path, payload: &VerificationReportPayload) -> Result<()> {
    if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create report directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(payload).context("serialize verification report")?;
    fs::write(path, format!("{json}\n")).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "verification report written");
    Ok(())
}
