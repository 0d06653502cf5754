//! Mapping between the remote wire format and table orders
//!
//! Status mapping is lossy on the way in: a cancelled order is shown as
//! queued.

use super::types::*;
use super::{RemoteError, RemoteResult};
use crate::models::{find_menu_item_by_name, LineItem, MenuCategory, MenuItem, TableOrder, TableOrderStatus};
use chrono::{DateTime, NaiveDateTime};

pub fn to_backend_status(status: TableOrderStatus) -> BackendOrderStatus {
    match status {
        TableOrderStatus::Queued => BackendOrderStatus::Pending,
        TableOrderStatus::Preparing => BackendOrderStatus::InProgress,
        TableOrderStatus::Ready => BackendOrderStatus::Completed,
    }
}

pub fn to_table_status(status: BackendOrderStatus) -> TableOrderStatus {
    match status {
        BackendOrderStatus::Pending => TableOrderStatus::Queued,
        BackendOrderStatus::InProgress => TableOrderStatus::Preparing,
        BackendOrderStatus::Completed => TableOrderStatus::Ready,
        BackendOrderStatus::Cancelled => TableOrderStatus::Queued,
    }
}

/// Build the create request for a table's line items
pub fn to_backend_create(table_number: u32, items: &[LineItem]) -> BackendOrderCreate {
    BackendOrderCreate {
        table_number,
        items: items
            .iter()
            .map(|item| BackendOrderItem {
                name: item.menu_item.name.clone(),
                amount: item.quantity,
                price: item.menu_item.price,
            })
            .collect(),
    }
}

/// Parse the service's timestamp into Unix millis
///
/// Naive timestamps are read as UTC.
pub fn parse_created_at(raw: &str) -> RemoteResult<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.timestamp_millis());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc().timestamp_millis())
        .map_err(|e| RemoteError::InvalidResponse(format!("created_at {:?}: {}", raw, e)))
}

/// Map an order response onto a table order
///
/// The service does not keep notes, so lines come back without one. The menu
/// category is recovered from the catalog by name.
pub fn to_table_order(response: BackendOrderResponse) -> RemoteResult<TableOrder> {
    let created_at = parse_created_at(&response.created_at)?;

    let line_items = response
        .items
        .into_iter()
        .map(|item| {
            let category = match find_menu_item_by_name(&item.name) {
                Some(menu_item) => menu_item.category,
                None => {
                    tracing::debug!(name = %item.name, "Item not on the menu, filed as pupusa");
                    MenuCategory::Pupusa
                }
            };
            LineItem {
                id: item.id.to_string(),
                menu_item: MenuItem {
                    id: item.id.to_string(),
                    name: item.name,
                    price: item.price,
                    category,
                },
                quantity: item.amount,
                note: String::new(),
            }
        })
        .collect();

    Ok(TableOrder {
        id: response.id.to_string(),
        table_number: response.table_number,
        line_items,
        status: to_table_status(response.status),
        created_at,
        total: response.total,
        status_edited: false,
    })
}
