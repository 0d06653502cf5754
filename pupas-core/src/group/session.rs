//! Group-order session
//!
//! Owns the current group order and keeps it in sync with the blob stores:
//! every dispatch persists the new state, and a reset wipes both the durable
//! and the session store.

use std::sync::Arc;

use serde_json::Value;
use shared::OrderResult;
use shared::models::GroupOrder;
use tracing::{debug, error, warn};

use super::appliers::GroupAction;
use super::reducer::reduce;
use super::validation::validate_action;
use crate::storage::{BlobStore, StorageResult, GROUP_ORDER_KEY};

pub struct GroupOrderSession {
    durable: Arc<dyn BlobStore>,
    session: Arc<dyn BlobStore>,
    state: Option<GroupOrder>,
}

impl std::fmt::Debug for GroupOrderSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupOrderSession")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl GroupOrderSession {
    /// Hydrate from the durable store
    pub fn load(durable: Arc<dyn BlobStore>, session: Arc<dyn BlobStore>) -> Self {
        let state = match durable.get(GROUP_ORDER_KEY) {
            Ok(Some(raw)) => parse_persisted(&raw),
            Ok(None) => None,
            Err(e) => {
                error!(error = %e, "Failed to read persisted group order");
                None
            }
        };

        debug!(restored = state.is_some(), "Group order session loaded");
        Self {
            durable,
            session,
            state,
        }
    }

    pub fn state(&self) -> Option<&GroupOrder> {
        self.state.as_ref()
    }

    /// Reduce, then persist the new state
    ///
    /// Storage failures are logged; the in-memory state still advances.
    pub fn dispatch(&mut self, action: impl Into<GroupAction>) -> Option<&GroupOrder> {
        let action = action.into();
        self.state = reduce(self.state.take(), &action);

        if let Err(e) = self.persist() {
            error!(action = action.name(), error = %e, "Failed to persist group order");
        }
        self.state.as_ref()
    }

    /// Validate the action's input, then dispatch it
    ///
    /// Rejected actions leave the state and the stores untouched.
    pub fn submit(&mut self, action: impl Into<GroupAction>) -> OrderResult<Option<&GroupOrder>> {
        let action = action.into();
        validate_action(&action)?;
        Ok(self.dispatch(action))
    }

    fn persist(&self) -> StorageResult<()> {
        match &self.state {
            Some(order) => {
                let json = serde_json::to_string(order)?;
                self.durable.set(GROUP_ORDER_KEY, &json)
            }
            None => {
                self.durable.remove(GROUP_ORDER_KEY)?;
                self.session.remove(GROUP_ORDER_KEY)
            }
        }
    }
}

/// Decode a persisted group order
///
/// Content must at least carry a non-null `groupName` and a `people` array,
/// and must then decode fully; anything else counts as no saved group.
pub fn parse_persisted(raw: &str) -> Option<GroupOrder> {
    if raw.trim().is_empty() {
        return None;
    }

    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Persisted group order is not valid JSON, starting fresh");
            return None;
        }
    };

    let has_name = value.get("groupName").is_some_and(|v| !v.is_null());
    let has_people = value.get("people").is_some_and(Value::is_array);
    if !has_name || !has_people {
        warn!("Persisted group order failed the shape check, starting fresh");
        return None;
    }

    match serde_json::from_value(value) {
        Ok(order) => Some(order),
        Err(e) => {
            warn!(error = %e, "Persisted group order could not be decoded, starting fresh");
            None
        }
    }
}
