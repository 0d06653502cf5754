//! RemovePupusa applier

use crate::group::traits::{update_person, ActionApplier};
use shared::models::GroupOrder;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovePupusa {
    pub person_id: String,
    pub pupusa_id: String,
}

impl ActionApplier for RemovePupusa {
    fn apply(&self, state: Option<GroupOrder>) -> Option<GroupOrder> {
        update_person(state, &self.person_id, |person| {
            person.pupusas.retain(|p| p.id != self.pupusa_id);
        })
    }
}
