use serde_json::Value;
use tracing::{error, info};

use crate::error::{MonitorError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Sales event as published by the shop backend. Only the two keys must be
/// present; their values are printed whatever their JSON type. Extra fields
/// are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesEvent {
    pub product_name: Value,
    pub qty: Value,
}

pub fn parse_sales_event(body: &[u8]) -> Result<SalesEvent> {
    let body = body.strip_prefix(UTF8_BOM).unwrap_or(body);
    let mut data: Value = serde_json::from_slice(body)?;
    let fields = data.as_object_mut().ok_or(MonitorError::NotAnObject)?;

    let product_name = fields
        .remove("product_name")
        .ok_or(MonitorError::MissingField("product_name"))?;
    let qty = fields.remove("qty").ok_or(MonitorError::MissingField("qty"))?;

    Ok(SalesEvent { product_name, qty })
}

/// Strings print bare, everything else as its JSON text.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn describe(event: &SalesEvent) -> String {
    format!(
        " [AI Analytics] Received: {} | Qty: {}",
        render(&event.product_name),
        render(&event.qty)
    )
}

/// Handles one delivery. Never fails: with auto-ack the message is already
/// consumed, so a bad body is only logged.
pub fn on_message(body: &[u8]) -> Option<SalesEvent> {
    match parse_sales_event(body) {
        Ok(event) => {
            info!("{}", describe(&event));
            Some(event)
        }
        Err(e) => {
            error!(" [!] Error processing message: {}", e);
            None
        }
    }
}
