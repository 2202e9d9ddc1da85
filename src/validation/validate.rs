//! Entry-time checks for orders.

use crate::error::{CommessaError, Result};
use crate::model::{Order, PressRun, Processing, RunKind};

/// Validation outcome: errors fail it, warnings do not.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub passed: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Validate an order with its runs and processings.
pub fn validate_order(order: &Order) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if order.number().trim().is_empty() {
        result.add_error("Order: missing number");
    }
    if is_blank(order.customer.as_deref()) {
        result.add_error("Order: missing customer");
    }
    match order.quantity {
        None => result.add_error("Order: missing quantity"),
        Some(q) if q <= 0 => result.add_error(format!("Order: invalid quantity {}", q)),
        Some(_) => {}
    }

    if let (Some(created), Some(delivery)) = (order.created_at(), order.delivery_date) {
        if delivery < created {
            result.add_warning(format!(
                "Order: delivery date {} is before creation date {}",
                delivery, created
            ));
        }
    }

    for (idx, run) in order.press_runs().iter().enumerate() {
        result.merge(validate_press_run(run, idx + 1));
    }

    for (idx, processing) in order.processings().iter().enumerate() {
        result.merge(validate_processing(processing, idx + 1));
    }

    result
}

/// Validate a single press run (`run_num` is 1-based).
pub fn validate_press_run(run: &PressRun, run_num: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if run.check_yield(run_num).is_err() {
        match run.run_yield {
            Some(y) => result.add_error(format!("Press run {}: invalid yield {}", run_num, y)),
            None => result.add_error(format!("Press run {}: missing yield", run_num)),
        }
    }

    match run.kind() {
        None => result.add_warning(format!("Press run {}: no run type", run_num)),
        Some(RunKind::Offset) => {
            if !run.has_colors() && run.pantone_count() == 0 && !run.adds_varnish_plate() {
                result.add_warning(format!(
                    "Press run {}: no colors, pantones or plate varnish",
                    run_num
                ));
            }
        }
        Some(RunKind::Digital) => {
            if run.sheets.is_none() {
                result.add_warning(format!("Press run {}: no sheet count", run_num));
            }
        }
    }

    if run.has_blank_pantone() {
        result.add_warning(format!("Press run {}: blank pantone name", run_num));
    }

    if let Some(sheets) = run.sheets.filter(|s| *s < 0) {
        result.add_error(format!("Press run {}: invalid sheets {}", run_num, sheets));
    }
    if let Some(sheets) = run.sheets_used.filter(|s| *s < 0) {
        result.add_error(format!(
            "Press run {}: invalid sheets used {}",
            run_num, sheets
        ));
    }
    if let Some(hours) = run.working_hours.filter(|h| *h < 0.0) {
        result.add_error(format!(
            "Press run {}: invalid working hours {}",
            run_num, hours
        ));
    }

    result
}

/// Validate a single processing (`num` is 1-based).
pub fn validate_processing(processing: &Processing, num: usize) -> ValidationResult {
    let mut result = ValidationResult::ok();

    if processing.process_definition.is_none() {
        result.add_warning(format!(
            "Processing {}: no process definition, counted as post-press",
            num
        ));
    }

    let hours = [
        ("estimated hours", processing.estimated_hours),
        ("setup hours", processing.setup_hours),
        ("working hours", processing.working_hours),
    ];
    for (label, value) in hours {
        if let Some(h) = value.filter(|h| *h < 0.0) {
            result.add_error(format!("Processing {}: invalid {} {}", num, label, h));
        }
    }

    result
}

/// Fail with `ValidationFailed` when the order has errors.
pub fn quick_validate(order: &Order) -> Result<()> {
    let result = validate_order(order);

    if !result.passed {
        return Err(CommessaError::ValidationFailed(result.errors.join("; ")));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColorChannel, ProcessDefinition, RunType};
    use chrono::NaiveDate;

    fn create_basic_order() -> Order {
        let mut order = Order::new("2024/118", NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        order.customer = Some(String::from("Cartoleria Bianchi"));
        order.quantity = Some(1000);
        order
    }

    fn offset_run(run_yield: i64) -> PressRun {
        PressRun::offset(RunType::new(1, "Bianca", RunKind::Offset), run_yield)
            .with_colors(&[ColorChannel::Key])
    }

    // ==================== ValidationResult tests ====================

    #[test]
    fn test_validation_result_merge() {
        let mut result1 = ValidationResult::ok();
        result1.add_warning("Warning 1");

        let mut result2 = ValidationResult::ok();
        result2.add_error("Error 1");

        result1.merge(result2);
        assert!(!result1.passed);
        assert_eq!(result1.warnings.len(), 1);
        assert_eq!(result1.errors.len(), 1);
    }

    // ==================== validate_order tests ====================

    #[test]
    fn test_validate_order_valid() {
        let mut order = create_basic_order();
        order.add_press_run(offset_run(350)).unwrap();
        let result = validate_order(&order);
        assert!(result.passed);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_validate_order_missing_required_fields() {
        let order: Order = serde_json::from_str("{}").unwrap();
        let result = validate_order(&order);
        assert!(!result.passed);
        assert!(result.errors.iter().any(|e| e.contains("missing number")));
        assert!(result.errors.iter().any(|e| e.contains("missing customer")));
        assert!(result.errors.iter().any(|e| e.contains("missing quantity")));
    }

    #[test]
    fn test_validate_order_zero_quantity() {
        let mut order = create_basic_order();
        order.quantity = Some(0);
        let result = validate_order(&order);
        assert!(result.errors.iter().any(|e| e.contains("invalid quantity 0")));
    }

    #[test]
    fn test_validate_order_delivery_before_creation() {
        let mut order = create_basic_order();
        order.delivery_date = NaiveDate::from_ymd_opt(2024, 2, 1);
        let result = validate_order(&order);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("delivery date")));
    }

    // ==================== validate_press_run tests ====================

    #[test]
    fn test_validate_press_run_zero_yield() {
        let result = validate_press_run(&offset_run(0), 2);
        assert!(!result.passed);
        assert_eq!(result.errors, vec!["Press run 2: invalid yield 0"]);
    }

    #[test]
    fn test_validate_press_run_missing_yield() {
        let mut run = offset_run(1);
        run.run_yield = None;
        let result = validate_press_run(&run, 1);
        assert!(result.errors.iter().any(|e| e.contains("missing yield")));
    }

    #[test]
    fn test_validate_press_run_no_run_type_warning() {
        let run = PressRun::default();
        let result = validate_press_run(&run, 1);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("no run type")));
    }

    #[test]
    fn test_validate_press_run_empty_offset_warning() {
        let run = PressRun::offset(RunType::new(1, "Bianca", RunKind::Offset), 500);
        let result = validate_press_run(&run, 1);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("no colors")));
    }

    #[test]
    fn test_validate_press_run_blank_pantone_warning() {
        let run = offset_run(500).with_pantone(" ");
        let result = validate_press_run(&run, 2);
        assert!(result.passed);
        assert!(result
            .warnings
            .contains(&String::from("Press run 2: blank pantone name")));
    }

    #[test]
    fn test_validate_press_run_negative_figures() {
        let run = PressRun {
            sheets_used: Some(-1),
            working_hours: Some(-0.5),
            ..offset_run(500)
        };
        let result = validate_press_run(&run, 1);
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn test_validate_digital_without_sheets_warning() {
        let run = PressRun::digital(RunType::new(3, "Digitale", RunKind::Digital), None);
        let result = validate_press_run(&run, 1);
        assert!(result.passed);
        assert!(result.warnings.iter().any(|w| w.contains("no sheet count")));
    }

    // ==================== validate_processing tests ====================

    #[test]
    fn test_validate_processing_without_definition() {
        let result = validate_processing(&Processing::default(), 3);
        assert!(result.passed);
        assert!(result.warnings[0].contains("Processing 3"));
    }

    #[test]
    fn test_validate_processing_negative_hours() {
        let processing = Processing {
            setup_hours: Some(-1.0),
            ..Processing::new(ProcessDefinition::new(1, "Taglio", false, false))
        };
        let result = validate_processing(&processing, 1);
        assert!(!result.passed);
        assert!(result.errors[0].contains("setup hours"));
    }

    // ==================== quick_validate tests ====================

    #[test]
    fn test_quick_validate_success() {
        assert!(quick_validate(&create_basic_order()).is_ok());
    }

    #[test]
    fn test_quick_validate_failure() {
        let mut order = create_basic_order();
        order.quantity = Some(-5);
        let err = quick_validate(&order).unwrap_err();
        assert!(matches!(err, CommessaError::ValidationFailed(_)));
    }
}
