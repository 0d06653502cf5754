//! UpdateGroup applier

use crate::group::traits::ActionApplier;
use shared::models::GroupOrder;

/// Rename the group (stored trimmed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateGroup {
    pub group_name: String,
}

impl ActionApplier for UpdateGroup {
    fn apply(&self, state: Option<GroupOrder>) -> Option<GroupOrder> {
        let mut order = state?;
        order.group_name = self.group_name.trim().to_string();
        Some(order)
    }
}
