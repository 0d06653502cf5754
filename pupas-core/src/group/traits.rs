//! Core traits for the group-order reducer

use enum_dispatch::enum_dispatch;
use shared::models::{GroupOrder, Person};

/// Applies one action to the group-order state
///
/// Appliers are PURE: they consume the previous state and return the next
/// one. An applier that has nothing to do returns its input unchanged.
#[enum_dispatch]
pub trait ActionApplier {
    fn apply(&self, state: Option<GroupOrder>) -> Option<GroupOrder>;
}

/// Run `f` on the person with `person_id`; no-op when the group or the person
/// is missing
pub(crate) fn update_person<F>(state: Option<GroupOrder>, person_id: &str, f: F) -> Option<GroupOrder>
where
    F: FnOnce(&mut Person),
{
    let mut order = state?;
    if let Some(person) = order.people.iter_mut().find(|p| p.id == person_id) {
        f(person);
    }
    Some(order)
}
