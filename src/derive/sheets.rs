//! Sheet counts for offset and digital runs.

use crate::config::{MIN_YIELD, NOT_APPLICABLE, NOT_COMPUTABLE};
use crate::model::PressRun;
use serde::{Serialize, Serializer};

/// Sheets an offset run needs for the order quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetCount {
    /// `ceil(quantity / yield)` sheets.
    Sheets(u64),
    /// Volta pass or no inks: no sheets of its own.
    NotApplicable,
    /// Yield absent or below 1; the run cannot be counted.
    InvalidYield,
}

impl SheetCount {
    /// Sheets to add to a total; only `Sheets` counts.
    pub fn value(&self) -> u64 {
        match self {
            SheetCount::Sheets(n) => *n,
            SheetCount::NotApplicable | SheetCount::InvalidYield => 0,
        }
    }

    pub fn is_applicable(&self) -> bool {
        !matches!(self, SheetCount::NotApplicable)
    }
}

impl std::fmt::Display for SheetCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SheetCount::Sheets(n) => write!(f, "{}", n),
            SheetCount::NotApplicable => write!(f, "{}", NOT_APPLICABLE),
            SheetCount::InvalidYield => write!(f, "{}", NOT_COMPUTABLE),
        }
    }
}

impl Serialize for SheetCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SheetCount::Sheets(n) => serializer.serialize_u64(*n),
            other => serializer.serialize_str(&other.to_string()),
        }
    }
}

/// Sheets an offset run needs to print `quantity` copies.
///
/// A Volta pass shares the sheets of its front pass and a run without inks
/// prints nothing, so both are `NotApplicable` whatever their yield.
pub fn sheets_required(run: &PressRun, quantity: u64) -> SheetCount {
    if run.is_volta() || !run.has_colors() {
        return SheetCount::NotApplicable;
    }

    match run.run_yield {
        Some(y) if y >= MIN_YIELD => SheetCount::Sheets(quantity.div_ceil(y as u64)),
        _ => SheetCount::InvalidYield,
    }
}

/// Total sheets over offset runs; non-countable runs add nothing.
pub fn total_sheets<'a>(runs: impl IntoIterator<Item = &'a PressRun>, quantity: u64) -> u64 {
    runs.into_iter()
        .map(|run| sheets_required(run, quantity).value())
        .fold(0, u64::saturating_add)
}

/// Total directly recorded sheets over digital runs.
pub fn total_digital_sheets<'a>(runs: impl IntoIterator<Item = &'a PressRun>) -> u64 {
    runs.into_iter()
        .map(PressRun::recorded_sheets)
        .fold(0, u64::saturating_add)
}
