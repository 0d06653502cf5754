//! AddPerson applier

use crate::group::traits::ActionApplier;
use shared::models::{GroupOrder, Person, MAX_PEOPLE};
use shared::util::prefixed_id;

/// Append a person named after the new headcount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AddPerson;

impl ActionApplier for AddPerson {
    fn apply(&self, state: Option<GroupOrder>) -> Option<GroupOrder> {
        let mut order = state?;
        if order.people.len() >= MAX_PEOPLE {
            return Some(order);
        }

        let name = format!("Persona {}", order.people.len() + 1);
        order.people.push(Person::new(prefixed_id("person"), name));
        Some(order)
    }
}
