//! Console summaries for search and batch runs.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use reclink_map::infer_field;
use reclink_model::FieldType;

use crate::types::{BatchOutcome, SearchOutcome};

pub fn print_search_summary(outcome: &SearchOutcome) {
    println!("Query: {} (type: {})", outcome.query, outcome.query_type);
    if let Some(outputs) = &outcome.outputs {
        println!("Output: {}", outputs.folder.display());
    } else {
        println!("Output: skipped (dry run)");
    }

    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Phase 1"),
        header_cell("Phase 2"),
        header_cell("Total"),
    ]);
    for column in 1..=3 {
        if let Some(col) = table.column_mut(column) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let mut total_phase1 = 0usize;
    let mut total_phase2 = 0usize;
    for (source, counts) in &outcome.result.per_source {
        total_phase1 += counts.phase1;
        total_phase2 += counts.phase2;
        table.add_row(vec![
            Cell::new(source),
            count_cell(counts.phase1),
            count_cell(counts.phase2),
            count_cell(counts.total()),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(total_phase1).add_attribute(Attribute::Bold),
        count_cell(total_phase2).add_attribute(Attribute::Bold),
        count_cell(total_phase1 + total_phase2).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    let mut anchors = Table::new();
    apply_table_style(&mut anchors);
    anchors.set_header(vec![header_cell("Anchor field"), header_cell("Values")]);
    if let Some(col) = anchors.column_mut(1) {
        col.set_cell_alignment(CellAlignment::Right);
    }
    for (field, count) in &outcome.result.anchor_counts {
        anchors.add_row(vec![Cell::new(field.as_str()), count_cell(*count)]);
    }
    println!("{anchors}");

    if !outcome.source_errors.is_empty() {
        eprintln!("Skipped sources:");
        for error in &outcome.source_errors {
            eprintln!("- {error}");
        }
    }
}

pub fn print_batch_summary(outcome: &BatchOutcome) {
    println!("Batch complete: {} queries", outcome.total);
    println!("Succeeded: {}", outcome.completed);
    println!("Failed: {}", outcome.failed.len());
    if !outcome.failed.is_empty() {
        eprintln!("Failed queries:");
        for query in &outcome.failed {
            eprintln!("- {query}");
        }
    }
}

pub fn print_fields() {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Anchors"),
        header_cell("Inferred from column names like"),
    ]);
    for field in FieldType::ALL {
        table.add_row(vec![
            Cell::new(field.as_str()),
            Cell::new(if field.propagates() { "yes" } else { "no" }),
            Cell::new(alias_examples(field)),
        ]);
    }
    println!("{table}");
    println!(
        "Columns matching none of these stay unmapped; use a mapping profile \
         (mapping.json) for explicit overrides."
    );
}

/// Example aliases per field, kept in sync with the inference heuristics.
fn alias_examples(field: FieldType) -> &'static str {
    let examples = match field {
        FieldType::TaxNo => "TaxRegNoDMS",
        FieldType::IdNo => "DMSIdCardNo",
        FieldType::ChassisNo => "Chassis No, ChassisNumber",
        FieldType::EngineNo => "Engine No, EngineNumber",
        FieldType::Tel => "Tel, Telephone, Phone, Mobile 1",
        FieldType::NumberPlate => "Number Plate, License Plate",
        FieldType::CustomerName => "Customer Name, CustomerNameDMS",
        FieldType::CustomerCode => "Customer Code",
    };
    debug_assert!(
        examples
            .split(", ")
            .all(|example| infer_field(example) == Some(field)),
        "alias examples for {field} drifted from the heuristics"
    );
    examples
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count == 0 {
        Cell::new("0").fg(Color::DarkGrey)
    } else {
        Cell::new(count)
    }
}
