//! AddBeverage applier
//!
//! Always appends a new line, even when a beverage with the same name is
//! already there. This differs from pupusas, which upsert by combination.

use crate::group::traits::{update_person, ActionApplier};
use shared::models::{GroupOrder, NewBeverage};
use shared::util::prefixed_id;

#[derive(Debug, Clone, PartialEq)]
pub struct AddBeverage {
    pub person_id: String,
    pub beverage: NewBeverage,
}

impl ActionApplier for AddBeverage {
    fn apply(&self, state: Option<GroupOrder>) -> Option<GroupOrder> {
        update_person(state, &self.person_id, |person| {
            let beverage = self.beverage.clone().into_beverage(prefixed_id("beverage"));
            person.beverages.push(beverage);
        })
    }
}
