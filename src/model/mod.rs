//! Data model types for print-shop orders.
//!
//! Optional fields are kept as `Option` exactly as the order document carries
//! them; absent or `null` values resolve through accessor methods only, with
//! one policy for the whole crate:
//!
//! | Field                                   | Absent resolves to          |
//! |-----------------------------------------|-----------------------------|
//! | order press runs / processings          | empty sequence              |
//! | order quantity                          | 0                           |
//! | run colors / pantones                   | empty sequence              |
//! | blank pantone name                      | still one pantone entry     |
//! | run `sheets` / `sheets_used`            | 0                           |
//! | run and processing hours                | 0.0                         |
//! | varnish `add_plate`                     | false                       |
//! | process definition `pre` / `special`    | false                       |
//! | run type                                | run left out of kind groups |
//! | process definition                      | post-press                  |
//!
//! Negative counts and hours coming from a document clamp to zero in the
//! accessors; `validation` reports them.

mod order;
mod press_run;
mod processing;
mod reference;

pub use order::{Order, RunExecution};
pub use press_run::{ColorChannel, Pantone, PressRun};
pub use processing::{Note, Processing, Stage};
pub use reference::{Paper, ProcessDefinition, RunKind, RunType, Varnish};
