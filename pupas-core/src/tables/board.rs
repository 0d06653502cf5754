//! Kitchen board
//!
//! In-memory list of the orders the kitchen is working on, refreshed from the
//! remote order service and reconciled with the local store mirror. Status
//! changes and deletions are optimistic: the board changes first, the remote
//! call follows, and a failure rolls the board back.
//!
//! # Remote calls per operation
//!
//! | Operation | Remote call | Local mirror |
//! |-----------|-------------|--------------|
//! | move to `ready` | `complete_order` | upsert with new status |
//! | other moves | none | upsert with new status |
//! | delete | `delete_order` | remove |

use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use shared::models::{TableOrder, TableOrderStatus};
use shared::{OrderError, OrderService, RemoteResult};
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use super::error::TableResult;
use super::optimistic::{OpKind, OpOutcome, OpState, PendingOp};
use super::reconcile::{insert_sorted_by_created_at, merge_by_id, sort_by_created_at};
use super::status::validate_transition;
use super::store::TableOrderStore;

/// Notice channel capacity
const NOTICE_CHANNEL_CAPACITY: usize = 32;

/// User-facing notification published by the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Order ready to serve
    Ready { order_id: String, table_number: u32 },
    Deleted { order_id: String, table_number: u32 },
    Failed {
        order_id: String,
        table_number: u32,
        reason: String,
    },
}

pub struct KitchenBoard {
    service: Arc<dyn OrderService>,
    store: Arc<TableOrderStore>,
    orders: RwLock<Vec<TableOrder>>,
    notice_tx: broadcast::Sender<Notice>,
}

impl std::fmt::Debug for KitchenBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KitchenBoard")
            .field("orders", &self.orders.read().len())
            .finish_non_exhaustive()
    }
}

impl KitchenBoard {
    pub fn new(service: Arc<dyn OrderService>, store: Arc<TableOrderStore>) -> Self {
        let (notice_tx, _) = broadcast::channel(NOTICE_CHANNEL_CAPACITY);
        Self {
            service,
            store,
            orders: RwLock::new(Vec::new()),
            notice_tx,
        }
    }

    pub fn subscribe_notices(&self) -> broadcast::Receiver<Notice> {
        self.notice_tx.subscribe()
    }

    pub fn store(&self) -> &Arc<TableOrderStore> {
        &self.store
    }

    /// Snapshot of the board, oldest first
    pub fn orders(&self) -> Vec<TableOrder> {
        self.orders.read().clone()
    }

    /// Orders in one column
    pub fn column(&self, status: TableOrderStatus) -> Vec<TableOrder> {
        self.orders
            .read()
            .iter()
            .filter(|o| o.status == status)
            .cloned()
            .collect()
    }

    fn publish(&self, notice: Notice) {
        if self.notice_tx.send(notice).is_err() {
            debug!("Board notice not delivered: no active subscribers");
        }
    }

    /// Pull pending orders and reconcile them with the local mirror
    ///
    /// On failure the board keeps its current list.
    pub async fn refresh(&self) -> RemoteResult<usize> {
        let remote = match self.service.list_pending().await {
            Ok(remote) => remote,
            Err(e) => {
                warn!(error = %e, "Failed to fetch pending orders, keeping current board");
                return Err(e);
            }
        };

        let local = self.store.list().unwrap_or_else(|e| {
            error!(error = %e, "Failed to read local order mirror");
            Vec::new()
        });

        let mut merged = merge_by_id(remote, &local);
        sort_by_created_at(&mut merged);
        let count = merged.len();
        *self.orders.write() = merged;

        debug!(count, "Kitchen board refreshed");
        Ok(count)
    }

    /// Apply a status change to the board, before the remote confirms it
    pub fn begin_status_change(&self, order_id: &str, to: TableOrderStatus) -> TableResult<PendingOp> {
        let mut orders = self.orders.write();
        let order = orders
            .iter_mut()
            .find(|o| o.id == order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
        validate_transition(order.status, to)?;

        let previous = order.clone();
        order.status = to;
        Ok(PendingOp::status_change(previous, to))
    }

    /// Remove an order from the board, before the remote confirms it
    pub fn begin_delete(&self, order_id: &str) -> TableResult<PendingOp> {
        let mut orders = self.orders.write();
        let index = orders
            .iter()
            .position(|o| o.id == order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))?;
        Ok(PendingOp::delete(orders.remove(index)))
    }

    /// Settle an optimistic operation with the remote outcome
    ///
    /// Committed operations are mirrored into the local store as kitchen
    /// edits; rolled back ones restore the board.
    pub fn settle(&self, op: PendingOp, outcome: OpOutcome) -> OpState {
        let state = op.state.clone().transition(outcome);
        let order_id = op.order_id().to_string();
        let table_number = op.table_number();

        match (op.kind, &state) {
            (_, OpState::Pending) => {}

            (OpKind::StatusChange { previous, to }, OpState::Committed) => {
                let mut updated = previous;
                updated.status = to;
                updated.status_edited = true;
                if let Err(e) = self.store.upsert(updated) {
                    error!(order_id = %order_id, error = %e, "Failed to mirror status change");
                }
                info!(order_id = %order_id, table_number, status = %to, "Order status changed");
                if to == TableOrderStatus::Ready {
                    self.publish(Notice::Ready {
                        order_id,
                        table_number,
                    });
                }
            }

            (OpKind::StatusChange { previous, to }, OpState::RolledBack { reason }) => {
                warn!(order_id = %order_id, status = %to, reason = %reason, "Status change rolled back");
                // A refresh may have dropped the order meanwhile; the remote
                // decides existence, so it is not brought back
                match self.orders.write().iter_mut().find(|o| o.id == previous.id) {
                    Some(order) => *order = previous,
                    None => debug!(order_id = %order_id, "Rolled back order no longer on the board"),
                }
                self.publish(Notice::Failed {
                    order_id,
                    table_number,
                    reason: reason.clone(),
                });
            }

            (OpKind::Delete { .. }, OpState::Committed) => {
                if let Err(e) = self.store.remove(&order_id) {
                    error!(order_id = %order_id, error = %e, "Failed to mirror deletion");
                }
                info!(order_id = %order_id, table_number, "Order deleted");
                self.publish(Notice::Deleted {
                    order_id,
                    table_number,
                });
            }

            (OpKind::Delete { removed }, OpState::RolledBack { reason }) => {
                warn!(order_id = %order_id, reason = %reason, "Deletion rolled back");
                {
                    let mut orders = self.orders.write();
                    if !orders.iter().any(|o| o.id == removed.id) {
                        insert_sorted_by_created_at(&mut orders, removed);
                    }
                }
                self.publish(Notice::Failed {
                    order_id,
                    table_number,
                    reason: reason.clone(),
                });
            }
        }

        state
    }

    /// Move an order to another column
    ///
    /// Only a move to `ready` reaches the remote service. Rejected moves
    /// (unknown order, disallowed transition) return an error and change
    /// nothing; remote failures come back as `RolledBack`.
    pub async fn change_status(&self, order_id: &str, to: TableOrderStatus) -> TableResult<OpState> {
        let op = self.begin_status_change(order_id, to)?;
        if let OpKind::StatusChange { previous, .. } = &op.kind {
            if previous.status == to {
                return Ok(OpState::Committed);
            }
        }

        let result = if to == TableOrderStatus::Ready {
            self.service.complete_order(order_id).await.map(|_| ())
        } else {
            Ok(())
        };
        Ok(self.settle(op, result.into()))
    }

    /// Delete an order
    pub async fn delete(&self, order_id: &str) -> TableResult<OpState> {
        let op = self.begin_delete(order_id)?;
        let result = self.service.delete_order(order_id).await.map(|_| ());
        Ok(self.settle(op, result.into()))
    }
}
