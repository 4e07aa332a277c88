use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use crate::types::VerifyResult;

/// Unmapped rows echoed to the console before the sample is cut off.
pub(crate) const UNMAPPED_SAMPLE_ROWS: usize = 50;

pub fn print_summary(result: &VerifyResult) {
    println!("Entrada: {}", result.input.display());
    if let Some(sheet) = &result.worksheet {
        println!("Planilha: {sheet}");
    }
    let origin = if result.mapping_is_default {
        "padrão"
    } else {
        "informada"
    };
    println!(
        "Tabela De/Para: {} ({origin})",
        result.mapping_source.display()
    );
    println!("Coluna verificada: {}", result.category_column);
    println!("Relatório de erros: {}", result.error_report.display());
    println!("Planilha validada: {}", result.validated_workbook.display());
    if let Some(path) = &result.report_json {
        println!("Relatório JSON: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total de linhas"),
        header_cell("Mapeadas"),
        header_cell("Não mapeadas"),
    ]);
    apply_counts_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(result.total_rows).add_attribute(Attribute::Bold),
        count_cell(result.mapped_rows, Color::Green),
        count_cell(result.unmapped_rows, Color::Red),
    ]);
    println!("{table}");
    print_unmapped_sample(result);
}

fn print_unmapped_sample(result: &VerifyResult) {
    if result.unmapped_sample.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Linha"),
        header_cell(&result.category_column),
    ]);
    apply_sample_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (line, category) in &result.unmapped_sample {
        table.add_row(vec![Cell::new(line), Cell::new(category)]);
    }
    println!();
    println!("Linhas não mapeadas:");
    println!("{table}");
    let hidden = result
        .unmapped_rows
        .saturating_sub(result.unmapped_sample.len());
    if hidden > 0 {
        println!("... e mais {hidden} linhas");
    }
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value > 0 {
        Cell::new(value).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(value).fg(Color::DarkGrey)
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_counts_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(15)),
        ColumnConstraint::LowerBoundary(Width::Fixed(10)),
        ColumnConstraint::LowerBoundary(Width::Fixed(13)),
    ]);
}

fn apply_sample_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
    table.set_constraints(vec![
        ColumnConstraint::LowerBoundary(Width::Fixed(7)),
        ColumnConstraint::UpperBoundary(Width::Percentage(80)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
