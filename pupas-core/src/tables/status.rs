//! Kitchen status transitions
//!
//! ```text
//! queued ──► preparing ──► ready
//!   ▲            │  ▲        │
//!   └────────────┘  └────────┘
//!       send back     send back
//! ```
//!
//! Paying a table is not a transition: it purges the table's orders whatever
//! their status.

use shared::models::TableOrderStatus;
use shared::{OrderError, OrderResult};

use TableOrderStatus::*;

/// Whether the kitchen may move an order from `from` to `to`
///
/// Staying on the same status is allowed and means "nothing to do".
pub fn can_transition(from: TableOrderStatus, to: TableOrderStatus) -> bool {
    matches!(
        (from, to),
        (Queued, Preparing) | (Preparing, Ready) | (Preparing, Queued) | (Ready, Preparing)
    ) || from == to
}

pub fn validate_transition(from: TableOrderStatus, to: TableOrderStatus) -> OrderResult<()> {
    if can_transition(from, to) {
        Ok(())
    } else {
        Err(OrderError::InvalidTransition { from, to })
    }
}

/// Forward step, `None` once ready
pub fn advance(status: TableOrderStatus) -> Option<TableOrderStatus> {
    match status {
        Queued => Some(Preparing),
        Preparing => Some(Ready),
        Ready => None,
    }
}

/// Send-back step, `None` while queued
pub fn send_back(status: TableOrderStatus) -> Option<TableOrderStatus> {
    match status {
        Queued => None,
        Preparing => Some(Queued),
        Ready => Some(Preparing),
    }
}
