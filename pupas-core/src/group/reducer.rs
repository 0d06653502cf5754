//! Group-order reducer
//!
//! `(state, action) -> state`. The previous state is consumed, so callers
//! can never keep using it after a dispatch.

use super::appliers::GroupAction;
use super::traits::ActionApplier;
use shared::models::GroupOrder;
use tracing::debug;

/// Apply one action to the group-order state
///
/// Never fails: an action aimed at a missing group or person leaves the
/// state as it was.
pub fn reduce(state: Option<GroupOrder>, action: &GroupAction) -> Option<GroupOrder> {
    let had_group = state.is_some();
    let next = action.apply(state);

    debug!(
        action = action.name(),
        had_group,
        has_group = next.is_some(),
        people = next.as_ref().map_or(0, |o| o.people.len()),
        "[Reducer] Action applied"
    );

    next
}
