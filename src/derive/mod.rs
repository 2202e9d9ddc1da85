//! Derivation of plates, sheets and hours from an order's runs and processings.
//!
//! Everything here is a pure function over an already loaded [`Order`]:
//! nothing is cached and nothing fails. Missing data resolves through the
//! defaulting policy documented in [`crate::model`].
//!
//! [`Order`]: crate::model::Order

mod hours;
mod partition;
mod plates;
mod sheets;
mod summary;

pub use hours::{processing_hours, run_hours, sheets_used, ProcessingHours};
pub use partition::{
    partition_by_kind, partition_positions_by_kind, partition_positions_by_stage,
    partition_processings_by_stage, ByKind, ByStage,
};
pub use plates::{plates_required, run_plates};
pub use sheets::{sheets_required, total_digital_sheets, total_sheets, SheetCount};
pub use summary::{summarize, DigitalRow, OffsetRow, OrderSummary, ProcessingRow};
