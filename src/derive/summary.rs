//! Order summary - every derived figure the operative and print views show.

use super::hours::{processing_hours, run_hours, sheets_used, ProcessingHours};
use super::partition::{partition_by_kind, partition_processings_by_stage};
use super::plates::{plates_required, run_plates};
use super::sheets::{sheets_required, total_digital_sheets, total_sheets, SheetCount};
use crate::model::{Order, PressRun, Processing, Stage};
use serde::Serialize;

/// One offset run as shown in the views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffsetRow {
    /// Position in the order's press runs.
    pub index: usize,
    pub run_type: String,
    pub description: String,
    pub paper: Option<String>,
    /// Color channels as letters, e.g. "CMYK".
    pub colors: String,
    pub pantones: Vec<String>,
    pub varnish: Option<String>,
    pub plates: u64,
    pub sheets: SheetCount,
    pub sheets_used: u64,
    pub working_hours: f64,
}

/// One digital run as shown in the views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DigitalRow {
    pub index: usize,
    pub run_type: String,
    pub description: String,
    pub paper: Option<String>,
    pub sheets: u64,
    pub sheets_used: u64,
    pub working_hours: f64,
}

/// One processing as shown in the views.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingRow {
    pub index: usize,
    pub name: String,
    pub stage: Stage,
    pub special: bool,
    pub estimated_hours: f64,
    pub setup_hours: f64,
    pub working_hours: f64,
    pub expected_quantity: Option<i64>,
    pub actual_quantity: Option<i64>,
    pub notes: Vec<String>,
}

/// Derived figures for one order snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub number: String,
    pub quantity: u64,
    pub offset: Vec<OffsetRow>,
    pub digital: Vec<DigitalRow>,
    /// Runs with no run type, left out of both groups.
    pub unassigned_runs: usize,
    pub pre: Vec<ProcessingRow>,
    pub post: Vec<ProcessingRow>,
    pub plates: u64,
    pub total_sheets: u64,
    pub total_digital_sheets: u64,
    /// Sheets recorded as consumed over all runs.
    pub recorded_sheets_used: u64,
    pub run_hours: f64,
    pub pre_hours: ProcessingHours,
    pub post_hours: ProcessingHours,
    pub special_processings: usize,
}

impl OrderSummary {
    /// Hours over runs and all processings actually worked.
    pub fn total_working_hours(&self) -> f64 {
        self.run_hours + self.pre_hours.working + self.post_hours.working
    }

    /// Sheets derived for offset plus sheets recorded on digital runs.
    pub fn total_planned_sheets(&self) -> u64 {
        self.total_sheets + self.total_digital_sheets
    }
}

/// Compute every derived figure for an order.
pub fn summarize(order: &Order) -> OrderSummary {
    let runs = order.press_runs();
    let processings = order.processings();
    let quantity = order.quantity();

    let by_kind = partition_by_kind(runs);
    let by_stage = partition_processings_by_stage(processings);

    let summary = OrderSummary {
        number: order.number().to_string(),
        quantity,
        offset: by_kind
            .offset
            .iter()
            .map(|run| offset_row(position(runs, run), run, quantity))
            .collect(),
        digital: by_kind
            .digital
            .iter()
            .map(|run| digital_row(position(runs, run), run))
            .collect(),
        unassigned_runs: runs.len() - by_kind.offset.len() - by_kind.digital.len(),
        pre: by_stage
            .pre
            .iter()
            .map(|p| processing_row(position(processings, p), p))
            .collect(),
        post: by_stage
            .post
            .iter()
            .map(|p| processing_row(position(processings, p), p))
            .collect(),
        plates: plates_required(by_kind.offset.iter().copied()),
        total_sheets: total_sheets(by_kind.offset.iter().copied(), quantity),
        total_digital_sheets: total_digital_sheets(by_kind.digital.iter().copied()),
        recorded_sheets_used: sheets_used(runs),
        run_hours: run_hours(runs),
        pre_hours: processing_hours(by_stage.pre.iter().copied()),
        post_hours: processing_hours(by_stage.post.iter().copied()),
        special_processings: processings.iter().filter(|p| p.is_special()).count(),
    };

    tracing::debug!(
        "Order {}: {} offset, {} digital, {} plates, {} sheets",
        summary.number,
        summary.offset.len(),
        summary.digital.len(),
        summary.plates,
        summary.total_sheets
    );

    summary
}

/// Position of a borrowed element within the slice it was taken from.
fn position<T>(items: &[T], item: &T) -> usize {
    items
        .iter()
        .position(|candidate| std::ptr::eq(candidate, item))
        .unwrap_or_default()
}

fn text(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_string()
}

fn offset_row(index: usize, run: &PressRun, quantity: u64) -> OffsetRow {
    OffsetRow {
        index,
        run_type: text(run.run_type_name()),
        description: text(run.description.as_deref()),
        paper: run.paper.as_ref().map(|p| p.label()),
        colors: run.color_codes(),
        pantones: run.pantone_names().map(str::to_string).collect(),
        varnish: run.varnish.as_ref().map(|v| v.name.clone()),
        plates: run_plates(run),
        sheets: sheets_required(run, quantity),
        sheets_used: run.sheets_used(),
        working_hours: run.working_hours(),
    }
}

fn digital_row(index: usize, run: &PressRun) -> DigitalRow {
    DigitalRow {
        index,
        run_type: text(run.run_type_name()),
        description: text(run.description.as_deref()),
        paper: run.paper.as_ref().map(|p| p.label()),
        sheets: run.recorded_sheets(),
        sheets_used: run.sheets_used(),
        working_hours: run.working_hours(),
    }
}

fn processing_row(index: usize, processing: &Processing) -> ProcessingRow {
    ProcessingRow {
        index,
        name: processing.display_name().to_string(),
        stage: processing.stage(),
        special: processing.is_special(),
        estimated_hours: processing.estimated_hours(),
        setup_hours: processing.setup_hours(),
        working_hours: processing.working_hours(),
        expected_quantity: processing.expected_quantity,
        actual_quantity: processing.actual_quantity,
        notes: processing
            .notes()
            .iter()
            .map(|n| n.description.clone())
            .collect(),
    }
}
