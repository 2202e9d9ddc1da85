//! Order document loader.

use crate::error::{CommessaError, Result};
use crate::model::Order;
use serde_json::Value;
use std::path::Path;

/// Parse an order document.
///
/// The document is either the bare order object or a headless-CMS response
/// wrapping it as `{"data": {...}}` or `{"data": {"id": .., "attributes": {...}}}`.
pub fn parse_order_str(content: &str) -> Result<Order> {
    let document: Value = serde_json::from_str(content)?;
    let body = unwrap_envelope(document)?;
    let order: Order = serde_json::from_value(body)?;

    tracing::debug!(
        "Parsed order {} ({} press runs, {} processings)",
        order.number(),
        order.press_runs().len(),
        order.processings().len()
    );

    Ok(order)
}

/// Strip the response envelope, if any.
fn unwrap_envelope(document: Value) -> Result<Value> {
    let Value::Object(mut map) = document else {
        return Err(CommessaError::InvalidValue {
            field: String::from("document"),
            value: String::from("expected a JSON object"),
        });
    };

    if !map.contains_key("data") {
        return Ok(Value::Object(map));
    }

    match map.remove("data") {
        Some(Value::Object(mut data)) => match data.remove("attributes") {
            Some(Value::Object(attributes)) => Ok(Value::Object(attributes)),
            Some(_) | None => Ok(Value::Object(data)),
        },
        Some(Value::Null) | None => Err(CommessaError::MissingField {
            field: String::from("data"),
        }),
        Some(_) => Err(CommessaError::InvalidValue {
            field: String::from("data"),
            value: String::from("expected an order object"),
        }),
    }
}

/// Load an order document from a file.
pub fn parse_order_file(path: &Path) -> Result<Order> {
    if !path.exists() {
        return Err(CommessaError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(CommessaError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    parse_order_str(&content)
}
