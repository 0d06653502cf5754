//! ResetOrder applier

use crate::group::traits::ActionApplier;
use shared::models::GroupOrder;

/// Tear the group down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResetOrder;

impl ActionApplier for ResetOrder {
    fn apply(&self, _state: Option<GroupOrder>) -> Option<GroupOrder> {
        None
    }
}
