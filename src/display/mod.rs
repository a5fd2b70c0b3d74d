use colored::*;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::convert::TargetCollection;

/// Number of digest characters shown in the table
const SHORT_DIGEST_LEN: usize = 12;

/// Formats a byte count with the largest binary unit that keeps it >= 1
pub fn human_size(bytes: u64) -> String {
    const UNITS: [(&str, u64); 3] = [("GiB", 1 << 30), ("MiB", 1 << 20), ("KiB", 1 << 10)];

    UNITS
        .iter()
        .find(|(_, factor)| bytes >= *factor)
        .map(|(unit, factor)| format!("{:.2} {}", bytes as f64 / *factor as f64, unit))
        .unwrap_or_else(|| format!("{} B", bytes))
}

fn short_digest(digest: &str) -> &str {
    digest
        .char_indices()
        .nth(SHORT_DIGEST_LEN)
        .map_or(digest, |(end, _)| &digest[..end])
}

fn header(title: &str) -> Cell {
    Cell::new(title).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

/// Builds the table of converted models, one row per entry in listing order
pub fn models_table(collection: &TargetCollection) -> Table {
    let mut table = Table::new();
    table
        .set_header(vec![
            header("#"),
            header("Name"),
            header("Digest"),
            header("Family"),
            header("Parameters"),
            header("Quantization"),
            header("Size"),
            header("Modified"),
        ])
        .load_preset(comfy_table::presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    for (i, model) in collection.models.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1).set_alignment(CellAlignment::Center),
            Cell::new(&model.name).fg(Color::Green),
            Cell::new(short_digest(&model.digest)).fg(Color::DarkGrey),
            Cell::new(&model.details.family).fg(Color::Magenta).set_alignment(CellAlignment::Center),
            Cell::new(&model.details.parameter_size).fg(Color::Blue).set_alignment(CellAlignment::Center),
            Cell::new(&model.details.quantization_level).fg(Color::Cyan).set_alignment(CellAlignment::Center),
            Cell::new(human_size(model.size)).set_alignment(CellAlignment::Right),
            Cell::new(&model.modified_at).fg(Color::DarkGrey),
        ]);
    }

    table
}

/// Prints the converted models as a table followed by a total line
pub fn display_models_table(collection: &TargetCollection) {
    if collection.is_empty() {
        println!("{}", "No models found in registry".yellow());
        return;
    }

    println!("\n{}", models_table(collection));
    println!("{}", format!("Total models: {}", collection.len()).bright_green());
}
