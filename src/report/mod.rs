//! Job sheet rendering module.

mod views;
mod writer;

pub use views::{render_operative_view, render_print_view, render_view};
pub use writer::SheetWriter;
