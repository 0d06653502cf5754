//! Optimistic operations on the kitchen board
//!
//! A change is applied to the board at once and settled when the remote
//! answers:
//!
//! ```text
//! Pending ──confirmed──► Committed
//!    │
//!    └─────failed──────► RolledBack { reason }
//! ```
//!
//! Settled states absorb further outcomes.

use serde::Serialize;
use shared::models::{TableOrder, TableOrderStatus};

/// Lifecycle of an optimistic operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum OpState {
    Pending,
    Committed,
    RolledBack { reason: String },
}

/// Remote answer to an optimistic operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpOutcome {
    Confirmed,
    Failed(String),
}

impl<E: std::fmt::Display> From<Result<(), E>> for OpOutcome {
    fn from(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => OpOutcome::Confirmed,
            Err(e) => OpOutcome::Failed(e.to_string()),
        }
    }
}

impl OpState {
    pub fn transition(self, outcome: OpOutcome) -> OpState {
        match (self, outcome) {
            (OpState::Pending, OpOutcome::Confirmed) => OpState::Committed,
            (OpState::Pending, OpOutcome::Failed(reason)) => OpState::RolledBack { reason },
            (settled, _) => settled,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, OpState::Pending)
    }
}

/// What the board changed, with what it needs to undo it
#[derive(Debug, Clone, PartialEq)]
pub enum OpKind {
    StatusChange {
        /// Order as it was before the change
        previous: TableOrder,
        to: TableOrderStatus,
    },
    Delete {
        removed: TableOrder,
    },
}

/// An optimistic operation in flight
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOp {
    pub kind: OpKind,
    pub state: OpState,
}

impl PendingOp {
    pub fn status_change(previous: TableOrder, to: TableOrderStatus) -> Self {
        Self {
            kind: OpKind::StatusChange { previous, to },
            state: OpState::Pending,
        }
    }

    pub fn delete(removed: TableOrder) -> Self {
        Self {
            kind: OpKind::Delete { removed },
            state: OpState::Pending,
        }
    }

    pub fn order_id(&self) -> &str {
        match &self.kind {
            OpKind::StatusChange { previous, .. } => &previous.id,
            OpKind::Delete { removed } => &removed.id,
        }
    }

    pub fn table_number(&self) -> u32 {
        match &self.kind {
            OpKind::StatusChange { previous, .. } => previous.table_number,
            OpKind::Delete { removed } => removed.table_number,
        }
    }
}
