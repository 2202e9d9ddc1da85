//! Order document parser module.

mod document;

pub use document::{parse_order_file, parse_order_str};
