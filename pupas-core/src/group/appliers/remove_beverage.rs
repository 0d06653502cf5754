//! RemoveBeverage applier

use crate::group::traits::{update_person, ActionApplier};
use shared::models::GroupOrder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveBeverage {
    pub person_id: String,
    pub beverage_id: String,
}

impl ActionApplier for RemoveBeverage {
    fn apply(&self, state: Option<GroupOrder>) -> Option<GroupOrder> {
        update_person(state, &self.person_id, |person| {
            person.beverages.retain(|b| b.id != self.beverage_id);
        })
    }
}
