use std::path::{Path, PathBuf};

use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use dre_map::{
    LoadedMapping, MappingCache, default_candidates, find_existing, load_default_mapping,
    load_supplied_mapping,
};
use dre_model::Domain;

use crate::cli::{DomainArg, MappingsArgs, VerifyArgs};
use crate::pipeline::{
    ReportInputs, build_report_payload, classify, ingest_input, load_mapping, sheet_choice_for,
    write_outputs, write_report_json,
};
use crate::summary::{UNMAPPED_SAMPLE_ROWS, apply_table_style};
use crate::types::VerifyResult;

/// Entries shown when previewing a mapping table.
const MAPPING_PREVIEW_ROWS: usize = 10;

pub fn run_verify(args: &VerifyArgs) -> Result<VerifyResult> {
    let domain = domain_from_arg(args.domain);
    let verify_span = info_span!("verify", domain = %domain, input = %args.input.display());
    let _verify_guard = verify_span.enter();

    let cache = MappingCache::new();
    let candidates = default_candidates(domain.default_mapping_file());
    let selected = load_mapping(
        &cache,
        domain,
        args.mapping.as_deref(),
        args.prefer_mapping,
        &candidates,
    )?;

    let sheet = sheet_choice_for(domain, args.sheet.as_deref());
    let ingested = ingest_input(&args.input, &sheet)?;

    let category_column = args
        .category_column
        .clone()
        .unwrap_or_else(|| domain.default_category_column().to_string());
    let resolution = classify(&ingested.table, &selected.mapping.table, &category_column)?;

    let output_dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let artifacts = write_outputs(&output_dir, &resolution)?;

    let report_json = match &args.report_json {
        Some(path) => {
            let payload = build_report_payload(&ReportInputs {
                domain,
                input: &args.input,
                worksheet: ingested.worksheet.as_deref(),
                mapping: &selected,
                resolution: &resolution,
                artifacts: &artifacts,
            });
            write_report_json(path, &payload)?;
            Some(path.clone())
        }
        None => None,
    };

    let unmapped_sample: Vec<(usize, String)> = resolution
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| !row.is_mapped())
        .take(UNMAPPED_SAMPLE_ROWS)
        .map(|(index, row)| (index + 1, resolution.category_of(row).to_string()))
        .collect();

    Ok(VerifyResult {
        domain,
        input: args.input.clone(),
        worksheet: ingested.worksheet,
        mapping_source: selected.origin.path().to_path_buf(),
        mapping_is_default: selected.origin.is_default(),
        category_column: resolution.category_column.clone(),
        total_rows: resolution.total(),
        mapped_rows: resolution.mapped_count(),
        unmapped_rows: resolution.unmapped_count(),
        unmapped_sample,
        error_report: artifacts.error_report,
        validated_workbook: artifacts.validated_workbook,
        report_json,
    })
}

pub fn run_mappings(args: &MappingsArgs) -> Result<()> {
    if let Some(path) = &args.mapping {
        return preview_supplied(path);
    }
    let cache = MappingCache::new();
    let domains: Vec<Domain> = match args.domain {
        Some(arg) => vec![domain_from_arg(arg)],
        None => Domain::ALL.to_vec(),
    };
    let mut problems = Vec::new();
    for domain in domains {
        println!("Domínio: {domain}");
        let candidates = default_candidates(domain.default_mapping_file());
        let found = find_existing(&candidates);
        for candidate in &candidates {
            let marker = if Some(candidate) == found.as_ref() {
                " (encontrado)"
            } else {
                ""
            };
            println!("- {}{marker}", candidate.display());
        }
        match found {
            Some(path) => match cache.get_or_load(&path, load_default_mapping) {
                Ok(mapping) => print_mapping_preview(&mapping),
                Err(error) => problems.push(format!("{}: {error}", path.display())),
            },
            None => println!("Nenhuma tabela padrão encontrada."),
        }
        println!();
    }
    if !problems.is_empty() {
        eprintln!("Erros:");
        for problem in &problems {
            eprintln!("- {problem}");
        }
    }
    Ok(())
}

fn preview_supplied(path: &Path) -> Result<()> {
    let mapping = load_supplied_mapping(path)?;
    println!("Tabela informada: {}", path.display());
    println!(
        "Colunas reconhecidas: {} -> {}",
        mapping.category_column, mapping.target_column
    );
    print_mapping_preview(&mapping);
    Ok(())
}

fn print_mapping_preview(mapping: &LoadedMapping) {
    let mut table = Table::new();
    table.set_header(vec!["Categoria", "DRE"]);
    apply_table_style(&mut table);
    for entry in mapping.table.entries.iter().take(MAPPING_PREVIEW_ROWS) {
        table.add_row(vec![entry.category.clone(), entry.target_code.clone()]);
    }
    println!("{table}");
    let total = mapping.table.len();
    if total > MAPPING_PREVIEW_ROWS {
        println!("... e mais {} entradas", total - MAPPING_PREVIEW_ROWS);
    }
    println!("Entradas: {total}");
}

fn domain_from_arg(arg: DomainArg) -> Domain {
    match arg {
        DomainArg::Despesa => Domain::Expense,
        DomainArg::Receita => Domain::Revenue,
    }
}
