//! Table-order store
//!
//! The whole order list lives under one blob key and is rewritten on every
//! change (read-modify-write of the full collection). Writers in this
//! process are serialized; writers in other processes race last-writer-wins.
//!
//! Every write is followed by a [`StoreChange`] broadcast so views can
//! refresh without waiting for their timer.

use std::sync::Arc;

use parking_lot::Mutex;
use shared::models::{TableOrder, TableOrderStatus};
use shared::OrderError;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use super::error::TableResult;
use super::status::validate_transition;
use crate::storage::{BlobStore, TABLE_ORDERS_KEY};

/// Change notification channel capacity
const CHANGE_CHANNEL_CAPACITY: usize = 64;

/// What changed in the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreChange {
    Appended { order_id: String },
    StatusChanged { order_id: String, status: TableOrderStatus },
    Removed { order_id: String },
    TablePaid { table_number: u32 },
    Replaced,
    /// Explicit nudge with no write behind it
    Touched,
}

pub struct TableOrderStore {
    blobs: Arc<dyn BlobStore>,
    write_lock: Mutex<()>,
    change_tx: broadcast::Sender<StoreChange>,
}

impl std::fmt::Debug for TableOrderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TableOrderStore")
            .field("change_tx", &"<broadcast::Sender>")
            .finish_non_exhaustive()
    }
}

impl TableOrderStore {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        let (change_tx, _) = broadcast::channel(CHANGE_CHANNEL_CAPACITY);
        Self {
            blobs,
            write_lock: Mutex::new(()),
            change_tx,
        }
    }

    /// Subscribe to change notifications
    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.change_tx.subscribe()
    }

    /// Tell subscribers the store changed
    pub fn notify_changed(&self, change: StoreChange) {
        if self.change_tx.send(change).is_err() {
            debug!("Store change not delivered: no active subscribers");
        }
    }

    /// All stored orders
    ///
    /// Missing or malformed content reads as an empty list.
    pub fn list(&self) -> TableResult<Vec<TableOrder>> {
        let Some(raw) = self.blobs.get(TABLE_ORDERS_KEY)? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str(&raw) {
            Ok(orders) => Ok(orders),
            Err(e) => {
                warn!(error = %e, "Stored table orders are malformed, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    pub fn get(&self, order_id: &str) -> TableResult<Option<TableOrder>> {
        Ok(self.list()?.into_iter().find(|o| o.id == order_id))
    }

    fn save(&self, orders: &[TableOrder]) -> TableResult<()> {
        let json = serde_json::to_string(orders).map_err(crate::storage::StorageError::from)?;
        self.blobs.set(TABLE_ORDERS_KEY, &json)?;
        Ok(())
    }

    /// Read-modify-write under the in-process write lock
    fn modify<T>(&self, f: impl FnOnce(&mut Vec<TableOrder>) -> TableResult<T>) -> TableResult<T> {
        let _guard = self.write_lock.lock();
        let mut orders = self.list()?;
        let result = f(&mut orders)?;
        self.save(&orders)?;
        Ok(result)
    }

    /// Add a submitted order
    pub fn append(&self, order: TableOrder) -> TableResult<()> {
        let order_id = order.id.clone();
        let table_number = order.table_number;
        self.modify(|orders| {
            orders.push(order);
            Ok(())
        })?;

        info!(order_id = %order_id, table_number, "Table order stored");
        self.notify_changed(StoreChange::Appended { order_id });
        Ok(())
    }

    /// Insert, or replace the stored order with the same id
    pub fn upsert(&self, order: TableOrder) -> TableResult<()> {
        let order_id = order.id.clone();
        let status = order.status;
        self.modify(|orders| {
            match orders.iter_mut().find(|o| o.id == order.id) {
                Some(existing) => *existing = order,
                None => orders.push(order),
            }
            Ok(())
        })?;

        debug!(order_id = %order_id, status = %status, "Table order mirrored");
        self.notify_changed(StoreChange::StatusChanged { order_id, status });
        Ok(())
    }

    /// Move an order to a new kitchen status
    ///
    /// The new status is marked as a kitchen edit. Same-status moves return
    /// the order untouched without notifying.
    pub fn update_status(&self, order_id: &str, status: TableOrderStatus) -> TableResult<TableOrder> {
        let (updated, changed) = self.modify(|orders| {
            let order = orders
                .iter_mut()
                .find(|o| o.id == order_id)
                .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
            validate_transition(order.status, status)?;
            let changed = order.status != status;
            if changed {
                order.status = status;
                order.status_edited = true;
            }
            Ok((order.clone(), changed))
        })?;

        if changed {
            info!(order_id = %order_id, status = %status, "Table order status updated");
            self.notify_changed(StoreChange::StatusChanged {
                order_id: order_id.to_string(),
                status,
            });
        }
        Ok(updated)
    }

    /// Remove one order; `false` when it was not stored
    pub fn remove(&self, order_id: &str) -> TableResult<bool> {
        let removed = self.modify(|orders| {
            let before = orders.len();
            orders.retain(|o| o.id != order_id);
            Ok(orders.len() != before)
        })?;

        if removed {
            info!(order_id = %order_id, "Table order removed");
            self.notify_changed(StoreChange::Removed {
                order_id: order_id.to_string(),
            });
        }
        Ok(removed)
    }

    /// Purge every order of a table, whatever its status
    ///
    /// Returns how many orders were removed.
    pub fn pay_table(&self, table_number: u32) -> TableResult<usize> {
        let removed = self.modify(|orders| {
            let before = orders.len();
            orders.retain(|o| o.table_number != table_number);
            Ok(before - orders.len())
        })?;

        info!(table_number, removed, "Table paid");
        self.notify_changed(StoreChange::TablePaid { table_number });
        Ok(removed)
    }

    /// Tables with at least one queued or preparing order, ascending
    pub fn occupied_tables(&self) -> TableResult<Vec<u32>> {
        Ok(occupied_tables(&self.list()?))
    }

    /// Overwrite the whole list
    pub fn replace_all(&self, orders: Vec<TableOrder>) -> TableResult<()> {
        let count = orders.len();
        self.modify(|stored| {
            *stored = orders;
            Ok(())
        })?;

        info!(count, "Table orders replaced");
        self.notify_changed(StoreChange::Replaced);
        Ok(())
    }
}

/// Tables with an active order, sorted and distinct
pub fn occupied_tables(orders: &[TableOrder]) -> Vec<u32> {
    let mut tables: Vec<u32> = orders
        .iter()
        .filter(|o| o.status.is_active())
        .map(|o| o.table_number)
        .collect();
    tables.sort_unstable();
    tables.dedup();
    tables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBlobStore;
    use crate::tables::error::TableError;
    use crate::tables::reconcile::test_support::order;
    use shared::models::TableOrderStatus::*;

    fn store() -> TableOrderStore {
        TableOrderStore::new(Arc::new(MemoryBlobStore::new()))
    }

    #[test]
    fn test_empty_and_malformed_read_as_empty() {
        let blobs = Arc::new(MemoryBlobStore::new());
        let store = TableOrderStore::new(blobs.clone());
        assert!(store.list().unwrap().is_empty());

        blobs.set(TABLE_ORDERS_KEY, "{broken").unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_notify() {
        let store = store();
        let mut rx = store.subscribe();

        store.append(order("a", 3, Queued, 1)).unwrap();
        assert_eq!(store.list().unwrap().len(), 1);
        assert_eq!(
            rx.try_recv().unwrap(),
            StoreChange::Appended {
                order_id: "a".to_string()
            }
        );
    }

    #[test]
    fn test_update_status_rules() {
        let store = store();
        store.append(order("a", 3, Queued, 1)).unwrap();
        let mut rx = store.subscribe();

        let updated = store.update_status("a", Preparing).unwrap();
        assert_eq!(updated.status, Preparing);
        assert!(updated.status_edited);
        assert!(rx.try_recv().is_ok());

        // no-op, no notification
        store.update_status("a", Preparing).unwrap();
        assert!(rx.try_recv().is_err());

        let err = store.update_status("missing", Ready).unwrap_err();
        assert!(matches!(err, TableError::Order(OrderError::OrderNotFound(_))));

        store.update_status("a", Ready).unwrap();
        let err = store.update_status("a", Queued).unwrap_err();
        assert!(err.is_rejection());
        assert_eq!(store.get("a").unwrap().unwrap().status, Ready);
    }

    #[test]
    fn test_pay_table_purges_every_status() {
        let store = store();
        store.append(order("a", 3, Queued, 1)).unwrap();
        store.append(order("b", 3, Ready, 2)).unwrap();
        store.append(order("c", 4, Preparing, 3)).unwrap();

        assert_eq!(store.pay_table(3).unwrap(), 2);
        let ids: Vec<_> = store.list().unwrap().into_iter().map(|o| o.id).collect();
        assert_eq!(ids, vec!["c"]);
        assert_eq!(store.pay_table(3).unwrap(), 0);
    }

    #[test]
    fn test_occupied_tables() {
        let store = store();
        store
            .replace_all(vec![
                order("a", 7, Queued, 1),
                order("b", 2, Preparing, 2),
                order("c", 7, Preparing, 3),
                order("d", 5, Ready, 4),
            ])
            .unwrap();
        assert_eq!(store.occupied_tables().unwrap(), vec![2, 7]);
    }

    #[test]
    fn test_remove_notifies_only_when_something_went() {
        let store = store();
        store.append(order("a", 1, Queued, 1)).unwrap();
        let mut rx = store.subscribe();

        assert!(store.remove("a").unwrap());
        assert_eq!(
            rx.try_recv().unwrap(),
            StoreChange::Removed {
                order_id: "a".to_string()
            }
        );

        assert!(!store.remove("a").unwrap());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_remove_and_upsert() {
        let store = store();
        store.append(order("a", 1, Queued, 1)).unwrap();
        assert!(store.remove("a").unwrap());
        assert!(!store.remove("a").unwrap());

        store.upsert(order("r", 2, Preparing, 5)).unwrap();
        store.upsert(order("r", 2, Ready, 5)).unwrap();
        let stored = store.list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].status, Ready);
    }
}
