//! Configuration constants and settings for order reports.

/// Run-type name of the backing pass that shares sheets with its front pass.
pub const VOLTA_RUN_TYPE: &str = "Volta";

/// Text shown where a derived figure does not apply.
pub const NOT_APPLICABLE: &str = "-";

/// Text shown where a derived figure cannot be computed (bad yield).
pub const NOT_COMPUTABLE: &str = "?";

/// Display format for dates (Italian locale).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Display format for timestamps (Italian locale).
pub const DATETIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Minimum accepted yield for a press run.
pub const MIN_YIELD: i64 = 1;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which presentation surface to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Operator entry screen: per-run rows with recorded execution data.
    #[default]
    #[value(alias = "operative")]
    Operativa,
    /// Printable job sheet.
    #[value(alias = "print")]
    Stampa,
    /// Raw summary as JSON.
    Json,
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            View::Operativa => write!(f, "operativa"),
            View::Stampa => write!(f, "stampa"),
            View::Json => write!(f, "json"),
        }
    }
}

/// Report rendering configuration.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Shop name printed in report headers.
    pub shop_name: String,
    /// Include processing hours in the print view.
    pub show_hours: bool,
    /// Include processing notes in the operative view.
    pub show_notes: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            shop_name: String::from("Tipografia"),
            show_hours: true,
            show_notes: true,
        }
    }
}

impl ReportConfig {
    /// Create a configuration for the given shop.
    pub fn new(shop_name: impl Into<String>) -> Self {
        Self {
            shop_name: shop_name.into(),
            ..Default::default()
        }
    }
}

/// Italian-locale number formatting.
pub mod format_it {
    /// Format a number with a decimal comma, dropping a zero fraction.
    ///
    /// `1.5` becomes `"1,5"`, `2.0` becomes `"2"`, `0.25` becomes `"0,25"`.
    pub fn decimal(value: f64) -> String {
        let rounded = (value * 100.0).round() / 100.0;
        let text = format!("{:.2}", rounded);
        let text = text.trim_end_matches('0').trim_end_matches('.');
        text.replace('.', ",")
    }

    /// Format an integer with `.` as thousands separator.
    pub fn integer(value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(c);
        }
        out
    }
}
