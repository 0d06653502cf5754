//! Waiter-side occupancy view
//!
//! Keeps the set of occupied tables for the table picker and carries the
//! waiter's writes: sending a cart to the kitchen through the remote order
//! service and paying a table.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use shared::models::{TableOrder, TABLE_NUMBERS};
use shared::OrderService;
use tracing::{error, info, warn};

use super::cart::Cart;
use super::error::TableResult;
use super::store::{occupied_tables, TableOrderStore};

/// One table in the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableStatus {
    pub table_number: u32,
    pub occupied: bool,
}

pub struct OccupancyView {
    service: Arc<dyn OrderService>,
    store: Arc<TableOrderStore>,
    occupied: RwLock<Vec<u32>>,
}

impl std::fmt::Debug for OccupancyView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OccupancyView")
            .field("occupied", &*self.occupied.read())
            .finish_non_exhaustive()
    }
}

impl OccupancyView {
    pub fn new(service: Arc<dyn OrderService>, store: Arc<TableOrderStore>) -> Self {
        Self {
            service,
            store,
            occupied: RwLock::new(Vec::new()),
        }
    }

    /// Re-read occupancy from the store
    ///
    /// A failed read keeps the last known occupancy.
    pub fn refresh(&self) -> usize {
        match self.store.list() {
            Ok(orders) => {
                let tables = occupied_tables(&orders);
                let count = tables.len();
                *self.occupied.write() = tables;
                count
            }
            Err(e) => {
                error!(error = %e, "Failed to read table orders for occupancy");
                self.occupied.read().len()
            }
        }
    }

    pub fn occupied(&self) -> Vec<u32> {
        self.occupied.read().clone()
    }

    pub fn is_occupied(&self, table_number: u32) -> bool {
        self.occupied.read().binary_search(&table_number).is_ok()
    }

    /// Every table of the floor with its occupancy
    pub fn tables(&self) -> Vec<TableStatus> {
        let occupied = self.occupied.read();
        TABLE_NUMBERS
            .iter()
            .map(|&table_number| TableStatus {
                table_number,
                occupied: occupied.binary_search(&table_number).is_ok(),
            })
            .collect()
    }

    /// Create the cart's order remotely and store it
    ///
    /// The order is stored as the remote returns it, under the remote id,
    /// with the cart's notes on its lines. The cart is cleared only once the
    /// order exists remotely; rejected or failed submissions leave it alone.
    pub async fn send_to_kitchen(
        &self,
        cart: &mut Cart,
        table: Option<u32>,
        global_notes: &str,
    ) -> TableResult<TableOrder> {
        let draft = cart.checkout(table, global_notes)?;

        let mut order = match self.service.create_order(draft.table_number, &draft.line_items).await {
            Ok(order) => order,
            Err(e) => {
                warn!(table_number = draft.table_number, error = %e, "Failed to send order to kitchen");
                return Err(e.into());
            }
        };
        if order.line_items.len() == draft.line_items.len() {
            for (line, drafted) in order.line_items.iter_mut().zip(&draft.line_items) {
                line.note = drafted.note.clone();
            }
        }

        self.store.append(order.clone())?;
        cart.clear();

        info!(
            order_id = %order.id,
            table_number = order.table_number,
            items = order.item_count(),
            "Order sent to kitchen"
        );
        self.refresh();
        Ok(order)
    }

    /// Close a table: every order it has is removed
    pub fn pay_table(&self, table_number: u32) -> TableResult<usize> {
        let removed = self.store.pay_table(table_number)?;
        self.refresh();
        Ok(removed)
    }
}
