//! Order (commessa) - a customer print job with its runs and processings.

use super::{PressRun, Processing};
use crate::error::{CommessaError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A customer print job.
///
/// Number and creation date are fixed when the order is created; the nested
/// collections change only through the edit operations below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default)]
    number: String,
    created_at: Option<NaiveDate>,
    pub customer: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    /// Print-run size.
    pub quantity: Option<i64>,
    pub estimate_number: Option<String>,
    pub estimate_date: Option<NaiveDate>,
    pub representative: Option<String>,
    press_runs: Option<Vec<PressRun>>,
    processings: Option<Vec<Processing>>,
}

/// Post-execution figures for one press run.
///
/// Only the fields that are `Some` are applied, so a data layer can send this
/// without the rest of the order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RunExecution {
    pub working_hours: Option<f64>,
    pub sheets_used: Option<i64>,
}

impl Order {
    /// Create an empty order.
    pub fn new(number: impl Into<String>, created_at: NaiveDate) -> Self {
        Self {
            number: number.into(),
            created_at: Some(created_at),
            ..Default::default()
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn created_at(&self) -> Option<NaiveDate> {
        self.created_at
    }

    /// Print-run size; absent or negative reads as 0.
    pub fn quantity(&self) -> u64 {
        self.quantity.map_or(0, |q| q.max(0) as u64)
    }

    pub fn press_runs(&self) -> &[PressRun] {
        self.press_runs.as_deref().unwrap_or_default()
    }

    pub fn processings(&self) -> &[Processing] {
        self.processings.as_deref().unwrap_or_default()
    }

    /// Display label, e.g. `"2024/118 - Catalogo primavera"`.
    pub fn label(&self) -> String {
        match self.title.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(title) => format!("{} - {}", self.number, title.trim()),
            None => self.number.clone(),
        }
    }

    // === Edit operations ===

    /// Append a press run after checking its yield; returns its index.
    pub fn add_press_run(&mut self, run: PressRun) -> Result<usize> {
        let runs = self.press_runs.get_or_insert_with(Vec::new);
        run.check_yield(runs.len() + 1)?;
        runs.push(run);
        tracing::debug!("Order {}: added press run {}", self.number, runs.len());
        Ok(runs.len() - 1)
    }

    /// Remove the press run at `index`.
    pub fn remove_press_run(&mut self, index: usize) -> Result<PressRun> {
        let runs = self.press_runs.get_or_insert_with(Vec::new);
        if index >= runs.len() {
            return Err(CommessaError::IndexOutOfRange {
                collection: "press_runs",
                index,
                len: runs.len(),
            });
        }
        Ok(runs.remove(index))
    }

    /// Mutable access to a press run, e.g. to edit its pantones.
    pub fn press_run_mut(&mut self, index: usize) -> Result<&mut PressRun> {
        let runs = self.press_runs.get_or_insert_with(Vec::new);
        let len = runs.len();
        runs.get_mut(index)
            .ok_or(CommessaError::IndexOutOfRange {
                collection: "press_runs",
                index,
                len,
            })
    }

    /// Append a processing; returns its index.
    pub fn add_processing(&mut self, processing: Processing) -> usize {
        let processings = self.processings.get_or_insert_with(Vec::new);
        processings.push(processing);
        processings.len() - 1
    }

    /// Remove the processing at `index`.
    pub fn remove_processing(&mut self, index: usize) -> Result<Processing> {
        let processings = self.processings.get_or_insert_with(Vec::new);
        if index >= processings.len() {
            return Err(CommessaError::IndexOutOfRange {
                collection: "processings",
                index,
                len: processings.len(),
            });
        }
        Ok(processings.remove(index))
    }

    /// Mutable access to a processing, e.g. to add notes.
    pub fn processing_mut(&mut self, index: usize) -> Result<&mut Processing> {
        let processings = self.processings.get_or_insert_with(Vec::new);
        let len = processings.len();
        processings
            .get_mut(index)
            .ok_or(CommessaError::IndexOutOfRange {
                collection: "processings",
                index,
                len,
            })
    }

    /// Record post-execution figures on one press run.
    ///
    /// Touches only `working_hours` and `sheets_used`; negative values are
    /// rejected and leave the run unchanged.
    pub fn record_run_execution(&mut self, index: usize, execution: RunExecution) -> Result<()> {
        if let Some(hours) = execution.working_hours {
            if !hours.is_finite() || hours < 0.0 {
                return Err(CommessaError::InvalidValue {
                    field: String::from("working_hours"),
                    value: hours.to_string(),
                });
            }
        }
        if let Some(sheets) = execution.sheets_used {
            if sheets < 0 {
                return Err(CommessaError::InvalidValue {
                    field: String::from("sheets_used"),
                    value: sheets.to_string(),
                });
            }
        }

        let run = self.press_run_mut(index)?;
        if let Some(hours) = execution.working_hours {
            run.working_hours = Some(hours);
        }
        if let Some(sheets) = execution.sheets_used {
            run.sheets_used = Some(sheets);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColorChannel, ProcessDefinition, RunKind, RunType};

    fn create_order() -> Order {
        let mut order = Order::new("2024/118", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        order.quantity = Some(5000);
        order
    }

    fn offset_run(run_yield: i64) -> PressRun {
        PressRun::offset(RunType::new(1, "Bianca", RunKind::Offset), run_yield)
            .with_colors(&[ColorChannel::Key])
    }

    // ==================== Accessor tests ====================

    #[test]
    fn test_empty_order_defaults() {
        let order: Order = serde_json::from_str(r#"{"number": "1", "press_runs": null}"#).unwrap();
        assert!(order.press_runs().is_empty());
        assert!(order.processings().is_empty());
        assert_eq!(order.quantity(), 0);
        assert_eq!(order.created_at(), None);
    }

    #[test]
    fn test_label() {
        let mut order = create_order();
        assert_eq!(order.label(), "2024/118");
        order.title = Some(String::from("Catalogo primavera"));
        assert_eq!(order.label(), "2024/118 - Catalogo primavera");
    }

    #[test]
    fn test_negative_quantity_reads_zero() {
        let mut order = create_order();
        order.quantity = Some(-10);
        assert_eq!(order.quantity(), 0);
    }

    // ==================== Press run edit tests ====================

    #[test]
    fn test_add_press_run_appends_in_order() {
        let mut order = create_order();
        assert_eq!(order.add_press_run(offset_run(500)).unwrap(), 0);
        assert_eq!(
            order
                .add_press_run(offset_run(250).with_description("Volantino"))
                .unwrap(),
            1
        );
        assert_eq!(order.press_runs().len(), 2);
        assert_eq!(order.press_runs()[1].description.as_deref(), Some("Volantino"));
    }

    #[test]
    fn test_add_press_run_rejects_bad_yield() {
        let mut order = create_order();
        order.add_press_run(offset_run(500)).unwrap();
        let err = order.add_press_run(offset_run(0)).unwrap_err();
        assert!(matches!(err, CommessaError::InvalidYield { run: 2 }));
        assert_eq!(order.press_runs().len(), 1);
    }

    #[test]
    fn test_remove_press_run() {
        let mut order = create_order();
        order.add_press_run(offset_run(500)).unwrap();
        order.add_press_run(offset_run(250)).unwrap();
        let removed = order.remove_press_run(0).unwrap();
        assert_eq!(removed.run_yield, Some(500));
        assert_eq!(order.press_runs()[0].run_yield, Some(250));
        assert!(order.remove_press_run(3).is_err());
    }

    #[test]
    fn test_edit_pantones_through_order() {
        let mut order = create_order();
        order.add_press_run(offset_run(500)).unwrap();
        order.press_run_mut(0).unwrap().add_pantone("Pantone 186");
        assert_eq!(order.press_runs()[0].pantone_count(), 1);
        assert!(order.press_run_mut(1).is_err());
    }

    // ==================== Execution recording tests ====================

    #[test]
    fn test_record_run_execution_partial() {
        let mut order = create_order();
        order.add_press_run(offset_run(500)).unwrap();

        order
            .record_run_execution(
                0,
                RunExecution {
                    working_hours: Some(2.5),
                    sheets_used: None,
                },
            )
            .unwrap();
        order
            .record_run_execution(
                0,
                RunExecution {
                    working_hours: None,
                    sheets_used: Some(1040),
                },
            )
            .unwrap();

        let run = &order.press_runs()[0];
        assert_eq!(run.working_hours, Some(2.5));
        assert_eq!(run.sheets_used, Some(1040));
        assert_eq!(run.run_yield, Some(500));
    }

    #[test]
    fn test_record_run_execution_rejects_negative() {
        let mut order = create_order();
        order.add_press_run(offset_run(500)).unwrap();
        let err = order
            .record_run_execution(
                0,
                RunExecution {
                    working_hours: Some(1.0),
                    sheets_used: Some(-4),
                },
            )
            .unwrap_err();
        assert!(matches!(err, CommessaError::InvalidValue { .. }));
        // Nothing applied
        assert_eq!(order.press_runs()[0].working_hours, None);
    }

    #[test]
    fn test_record_run_execution_bad_index() {
        let mut order = create_order();
        let err = order
            .record_run_execution(0, RunExecution::default())
            .unwrap_err();
        assert!(matches!(
            err,
            CommessaError::IndexOutOfRange { collection: "press_runs", .. }
        ));
    }

    #[test]
    fn test_run_execution_deserializes_partially() {
        let update: RunExecution = serde_json::from_str(r#"{"sheets_used": 980}"#).unwrap();
        assert_eq!(update.sheets_used, Some(980));
        assert_eq!(update.working_hours, None);
    }

    // ==================== Processing edit tests ====================

    #[test]
    fn test_processing_edits() {
        let mut order = create_order();
        let idx = order.add_processing(Processing::new(ProcessDefinition::new(
            1, "Grafica", true, false,
        )));
        order.add_processing(Processing::default());
        order
            .processing_mut(idx)
            .unwrap()
            .add_note("Attesa file cliente", None);
        assert_eq!(order.processings()[0].notes().len(), 1);

        let removed = order.remove_processing(1).unwrap();
        assert_eq!(removed, Processing::default());
        assert_eq!(order.processings().len(), 1);
        assert!(order.remove_processing(1).is_err());
    }
}
