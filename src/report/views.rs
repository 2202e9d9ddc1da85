//! Operative view and print view of an order.
//!
//! Both views read every figure from the same [`OrderSummary`]; neither
//! derives anything on its own.

use super::writer::SheetWriter;
use crate::config::{format_it, ReportConfig, View, DATE_FORMAT};
use crate::derive::{DigitalRow, OffsetRow, OrderSummary, ProcessingRow, SheetCount};
use crate::error::Result;
use crate::model::Order;
use chrono::NaiveDate;

/// Render the requested view.
pub fn render_view(
    view: View,
    order: &Order,
    summary: &OrderSummary,
    config: &ReportConfig,
) -> Result<String> {
    match view {
        View::Operativa => Ok(render_operative_view(order, summary, config)),
        View::Stampa => Ok(render_print_view(order, summary, config)),
        View::Json => Ok(serde_json::to_string_pretty(summary)?),
    }
}

/// Render the operator entry screen: runs with their recorded execution data.
pub fn render_operative_view(order: &Order, summary: &OrderSummary, config: &ReportConfig) -> String {
    let mut writer = SheetWriter::new();
    write_order_header(&mut writer, order, summary, config);

    writer.section("OFFSET");
    if summary.offset.is_empty() {
        writer.write_comment("nessun avviamento");
    }
    for row in &summary.offset {
        let mut cells = offset_cells(row);
        cells.push(format!("Fogli usati {}", format_it::integer(row.sheets_used)));
        cells.push(format!("Ore {}", format_it::decimal(row.working_hours)));
        writer.row(row.index + 1, &cells);
    }

    writer.section("DIGITALE");
    if summary.digital.is_empty() {
        writer.write_comment("nessun avviamento");
    }
    for row in &summary.digital {
        let mut cells = digital_cells(row);
        cells.push(format!("Fogli usati {}", format_it::integer(row.sheets_used)));
        cells.push(format!("Ore {}", format_it::decimal(row.working_hours)));
        writer.row(row.index + 1, &cells);
    }

    for (name, rows) in [("PRESTAMPA", &summary.pre), ("POSTSTAMPA", &summary.post)] {
        writer.section(name);
        if rows.is_empty() {
            writer.write_comment("nessuna lavorazione");
        }
        for row in rows {
            let cells = vec![
                row.name.clone(),
                format!("Stimate {}", format_it::decimal(row.estimated_hours)),
                format!("Avviamento {}", format_it::decimal(row.setup_hours)),
                format!("Lavorate {}", format_it::decimal(row.working_hours)),
                quantity_cell(row),
            ];
            writer.row(row.index + 1, &cells);
            if config.show_notes {
                for note in &row.notes {
                    writer.detail(&format!("- {}", note.trim()));
                }
            }
        }
    }

    writer.section("TOTALI");
    write_sheet_totals(&mut writer, summary);
    writer.field(
        "Fogli usati",
        format_it::integer(summary.recorded_sheets_used),
    );
    writer.field("Ore macchina", format_it::decimal(summary.run_hours));
    writer.field(
        "Ore lavorazioni",
        format_it::decimal(summary.pre_hours.working + summary.post_hours.working),
    );
    if summary.special_processings > 0 {
        writer.field("Lavorazioni speciali", summary.special_processings);
    }
    if summary.unassigned_runs > 0 {
        writer.write_comment(&format!(
            "{} avviamenti senza tipo esclusi",
            summary.unassigned_runs
        ));
    }

    writer.take_output()
}

/// Render the printable job sheet.
pub fn render_print_view(order: &Order, summary: &OrderSummary, config: &ReportConfig) -> String {
    let mut writer = SheetWriter::new();
    write_order_header(&mut writer, order, summary, config);

    writer.section("OFFSET");
    if summary.offset.is_empty() {
        writer.write_comment("nessun avviamento");
    }
    for row in &summary.offset {
        writer.row(row.index + 1, &offset_cells(row));
    }

    writer.section("DIGITALE");
    if summary.digital.is_empty() {
        writer.write_comment("nessun avviamento");
    }
    for row in &summary.digital {
        writer.row(row.index + 1, &digital_cells(row));
    }

    for (name, rows) in [("PRESTAMPA", &summary.pre), ("POSTSTAMPA", &summary.post)] {
        writer.section(name);
        if rows.is_empty() {
            writer.write_comment("nessuna lavorazione");
        }
        for row in rows {
            let mut cells = vec![row.name.clone()];
            if config.show_hours {
                cells.push(format!("Ore stimate {}", format_it::decimal(row.estimated_hours)));
                cells.push(format!("Avviamento {}", format_it::decimal(row.setup_hours)));
            }
            writer.row(row.index + 1, &cells);
        }
    }

    writer.section("TOTALI");
    write_sheet_totals(&mut writer, summary);
    if config.show_hours {
        let planned = summary.pre_hours.total_planned() + summary.post_hours.total_planned();
        writer.field("Ore preventivate", format_it::decimal(planned));
    }

    writer.take_output()
}

fn write_order_header(
    writer: &mut SheetWriter,
    order: &Order,
    summary: &OrderSummary,
    config: &ReportConfig,
) {
    writer.section("COMMESSA");
    writer.write_comment(&config.shop_name);
    writer.field("Numero", order.number());
    writer.field("Data", format_date(order.created_at()));
    writer.field("Cliente", order.customer.as_deref().unwrap_or_default());
    writer.field("Titolo", order.title.as_deref().unwrap_or_default());
    writer.field("Descrizione", order.description.as_deref().unwrap_or_default());
    writer.field("Consegna", format_date(order.delivery_date));
    writer.field("Quantità", format_it::integer(summary.quantity));
    if let Some(estimate) = order.estimate_number.as_deref().filter(|e| !e.trim().is_empty()) {
        let estimate = match order.estimate_date {
            Some(date) => format!("{} del {}", estimate.trim(), date.format(DATE_FORMAT)),
            None => estimate.trim().to_string(),
        };
        writer.field("Preventivo", estimate);
    }
    writer.field("Agente", order.representative.as_deref().unwrap_or_default());
}

fn write_sheet_totals(writer: &mut SheetWriter, summary: &OrderSummary) {
    writer.field("Lastre", summary.plates);
    writer.field("Fogli offset", format_it::integer(summary.total_sheets));
    writer.field(
        "Fogli digitale",
        format_it::integer(summary.total_digital_sheets),
    );
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_default()
}

fn sheet_cell(sheets: SheetCount) -> String {
    match sheets {
        SheetCount::Sheets(n) => format_it::integer(n),
        other => other.to_string(),
    }
}

fn offset_cells(row: &OffsetRow) -> Vec<String> {
    vec![
        row.run_type.clone(),
        row.description.clone(),
        row.paper.clone().unwrap_or_default(),
        row.colors.clone(),
        row.pantones.join(", "),
        row.varnish
            .as_deref()
            .map(|v| format!("Vernice {}", v))
            .unwrap_or_default(),
        format!("Lastre {}", row.plates),
        format!("Fogli {}", sheet_cell(row.sheets)),
    ]
}

fn digital_cells(row: &DigitalRow) -> Vec<String> {
    vec![
        row.run_type.clone(),
        row.description.clone(),
        row.paper.clone().unwrap_or_default(),
        format!("Fogli {}", format_it::integer(row.sheets)),
    ]
}

fn quantity_cell(row: &ProcessingRow) -> String {
    match (row.expected_quantity, row.actual_quantity) {
        (Some(expected), Some(actual)) => format!("Quantità {}/{}", expected, actual),
        (Some(expected), None) => format!("Quantità {}", expected),
        (None, Some(actual)) => format!("Quantità -/{}", actual),
        (None, None) => String::new(),
    }
}
