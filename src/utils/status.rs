use crate::loader::LoadReport;
use crate::models::layer::LayerDescriptor;
use colorgrad::Color;
use comfy_table::{Attribute, Cell, CellAlignment, Table};

/// Terminal swatch for a CSS colour name, blank when it does not parse.
fn swatch(color: &str) -> String {
    match Color::from_html(color) {
        Ok(c) => {
            let [r, g, b, _] = c.to_rgba8();
            format!("\x1b[38;2;{};{};{}m███\x1b[0m {}", r, g, b, color)
        }
        Err(_) => color.to_string(),
    }
}

fn range_cell(value: Option<f64>) -> Cell {
    Cell::new(value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string()))
        .set_alignment(CellAlignment::Center)
}

pub fn print_layer_summary(layers: &[LayerDescriptor], report: &LoadReport) {
    let mut table = Table::new();
    table
        .set_header(vec![
            Cell::new("")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Layer")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Title").add_attribute(Attribute::Bold),
            Cell::new("Features")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Min")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Max")
                .add_attribute(Attribute::Bold)
                .set_alignment(CellAlignment::Center),
            Cell::new("Colour").add_attribute(Attribute::Bold),
        ])
        .load_preset(comfy_table::presets::ASCII_BORDERS_ONLY_CONDENSED);

    let mut warnings = Vec::new();
    for layer in layers {
        let loaded = report.loaded.iter().find(|l| l.layer.name == layer.name);
        let row = match loaded {
            Some(loaded) => vec![
                Cell::new("✅").set_alignment(CellAlignment::Center),
                Cell::new(&layer.name),
                Cell::new(&layer.title),
                Cell::new(loaded.features.len()).set_alignment(CellAlignment::Center),
                range_cell(loaded.layer.min),
                range_cell(loaded.layer.max),
                Cell::new(swatch(&layer.color)),
            ],
            None => vec![
                Cell::new("⚠️").set_alignment(CellAlignment::Center),
                Cell::new(&layer.name),
                Cell::new(&layer.title),
                Cell::new("-").set_alignment(CellAlignment::Center),
                range_cell(None),
                range_cell(None),
                Cell::new(swatch(&layer.color)),
            ],
        };
        table.add_row(row);
    }

    for (name, err) in &report.skipped {
        warnings.push(format!("  ⚠️{}: {}", name, err));
    }

    println!("\nLayer summary:\n{}", table);

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for warning in warnings {
            println!("{}", warning);
        }
    }

    println!();
}
