//! commesse - plates, sheets and hours for print-shop orders.
//!
//! An order (commessa) carries its press runs (avviamenti) and processings
//! (lavorazioni). This library loads order documents, checks them at entry
//! time and derives the figures shown on the operative view and on the
//! printed job sheet.
//!
//! # Example
//!
//! ```no_run
//! use commesse::{parse_order_file, render_view, summarize, ReportConfig, View};
//! use std::path::Path;
//!
//! let order = parse_order_file(Path::new("commessa.json")).unwrap();
//! let summary = summarize(&order);
//! println!("{} lastre, {} fogli", summary.plates, summary.total_sheets);
//! let sheet = render_view(View::Stampa, &order, &summary, &ReportConfig::default()).unwrap();
//! println!("{}", sheet);
//! ```

pub mod config;
pub mod derive;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for convenience
pub use config::{ReportConfig, View};
pub use derive::{summarize, OrderSummary, SheetCount};
pub use error::{CommessaError, Result};
pub use model::{ColorChannel, Order, PressRun, Processing, RunExecution, RunKind};
pub use parser::{parse_order_file, parse_order_str};
pub use report::render_view;
pub use validation::{validate_order, ValidationResult};

/// Load an order file and render one of its views.
///
/// Full pipeline:
/// 1. Parse the order document
/// 2. Validate it (warnings and errors are logged, errors abort)
/// 3. Derive the summary
/// 4. Render the view
pub fn render_order_file(
    input_path: &std::path::Path,
    view: View,
    config: &ReportConfig,
) -> Result<String> {
    let order = parse_order_file(input_path)?;
    tracing::info!(
        "Order {}: {} press run(s), {} processing(s)",
        order.number(),
        order.press_runs().len(),
        order.processings().len()
    );

    let validation = validate_order(&order);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    for err in &validation.errors {
        tracing::error!("{}", err);
    }
    if !validation.passed {
        return Err(CommessaError::ValidationFailed(validation.errors.join("; ")));
    }

    let summary = summarize(&order);
    render_view(view, &order, &summary, config)
}
